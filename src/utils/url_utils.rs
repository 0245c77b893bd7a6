// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::{ParseError, Url};

/// 将可能为相对路径的URL转换为绝对路径URL
pub fn resolve_url(base_url: &Url, path: &str) -> Result<Url, ParseError> {
    base_url.join(path)
}

/// 从商店页URL中提取游戏标题
///
/// 商店应用页路径形如 `/app/<id>/<Title_With_Underscores>/`；取第四段，
/// 百分号解码，下划线替换为空格并去除首尾空白
pub fn title_from_store_url(url: &Url) -> Option<String> {
    let segments: Vec<&str> = url.path().split('/').collect();
    let raw = segments.get(3)?;
    if raw.is_empty() {
        return None;
    }

    let decoded = urlencoding::decode(raw).ok()?;
    let title = decoded.replace('_', " ").trim().to_string();
    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_absolute_url() {
        let base = Url::parse("http://example.com/a/b").unwrap();
        let path = "http://t.co/c";
        assert_eq!(resolve_url(&base, path).unwrap().as_str(), "http://t.co/c");
    }

    #[test]
    fn test_resolve_root_relative_url() {
        let base = Url::parse("http://example.com/a/b").unwrap();
        let path = "/c";
        assert_eq!(
            resolve_url(&base, path).unwrap().as_str(),
            "http://example.com/c"
        );
    }

    #[test]
    fn test_title_from_store_url() {
        let url = Url::parse("https://store.example.com/app/620/Portal_2/").unwrap();
        assert_eq!(title_from_store_url(&url).as_deref(), Some("Portal 2"));
    }

    #[test]
    fn test_title_from_store_url_percent_decodes() {
        let url =
            Url::parse("https://store.example.com/app/1086940/Baldur%27s_Gate_3/").unwrap();
        assert_eq!(
            title_from_store_url(&url).as_deref(),
            Some("Baldur's Gate 3")
        );
    }

    #[test]
    fn test_title_from_store_url_without_title_segment() {
        let url = Url::parse("https://store.example.com/app/620/").unwrap();
        assert_eq!(title_from_store_url(&url), None);

        let url = Url::parse("https://store.example.com/").unwrap();
        assert_eq!(title_from_store_url(&url), None);
    }
}
