// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use anyhow::{anyhow, bail};
use repackrs::application::use_cases::LocateDownloadsUseCase;
use repackrs::config::settings::Settings;
use repackrs::engines::ReqwestFetcher;
use repackrs::infrastructure::catalog::CatalogClient;
use repackrs::utils::{telemetry, url_utils};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use url::Url;

const USAGE: &str = "Usage: repackrs <store-app-url | game-title> [--select N] [--json]";

struct CliArgs {
    target: String,
    select: usize,
    json: bool,
}

fn parse_args<I: Iterator<Item = String>>(mut args: I) -> anyhow::Result<CliArgs> {
    let mut target: Option<String> = None;
    let mut select = 1usize;
    let mut json = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--select" => {
                let value = args.next().ok_or_else(|| anyhow!("--select needs a value"))?;
                select = value.parse()?;
                if select == 0 {
                    bail!("--select is 1-based");
                }
            }
            other if target.is_none() => target = Some(other.to_string()),
            other => bail!("unexpected argument: {}\n{}", other, USAGE),
        }
    }

    let target = target.ok_or_else(|| anyhow!(USAGE))?;
    Ok(CliArgs {
        target,
        select,
        json,
    })
}

/// Accept either a storefront app URL or a plain game title.
fn resolve_query(target: &str) -> anyhow::Result<String> {
    if let Ok(url) = Url::parse(target) {
        if matches!(url.scheme(), "http" | "https") {
            return url_utils::title_from_store_url(&url)
                .ok_or_else(|| anyhow!("could not detect a game title in {}", target));
        }
    }

    let title = target.trim().to_string();
    if title.is_empty() {
        bail!("empty game title\n{}", USAGE);
    }
    Ok(title)
}

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并运行匹配流水线
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting repackrs...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Resolve the query title
    let args = parse_args(std::env::args().skip(1))?;
    let query = resolve_query(&args.target)?;
    info!(query = %query, "target game detected");

    // 4. Initialize components
    let fetcher = Arc::new(ReqwestFetcher::new(
        &settings.catalog.user_agent,
        Duration::from_secs(settings.catalog.timeout_secs),
    ));
    let catalog = CatalogClient::new(fetcher, Url::parse(&settings.catalog.base_url)?);
    let use_case = LocateDownloadsUseCase::new(catalog, settings.matching.similarity_threshold);

    // 5. Run the pipeline
    let matches = use_case.find_matches(&query).await?;
    if matches.is_empty() {
        println!("No matching games found for \"{}\"", query);
        return Ok(());
    }

    let chosen = matches.get(args.select - 1).ok_or_else(|| {
        anyhow!(
            "selection {} out of range, {} matches available",
            args.select,
            matches.len()
        )
    })?;
    let links = use_case.download_links(chosen).await?;

    // 6. Present results
    if args.json {
        let payload = json!({ "query": query, "matches": &matches, "links": &links });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("{} matches found:", matches.len());
    for (index, m) in matches.iter().enumerate() {
        println!("  {}. {}", index + 1, m.display_title());
    }
    println!();

    if links.is_empty() {
        println!("No download links found for \"{}\"", chosen.title);
    } else {
        println!("Download links for \"{}\":", chosen.title);
        for link in &links {
            println!("  {} - {}", link.host, link.url);
        }
    }

    Ok(())
}
