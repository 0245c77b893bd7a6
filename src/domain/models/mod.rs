// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod candidate;
pub mod download_link;
pub mod scored_match;

pub use candidate::Candidate;
pub use download_link::DownloadLink;
pub use scored_match::ScoredMatch;
