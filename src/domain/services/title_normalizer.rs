// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use deunicode::deunicode;
use once_cell::sync::Lazy;
use regex::Regex;

// Pre-compiled pattern for the strict form; everything outside word/space
// classes is dropped before comparison.
static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s]").expect("Failed to compile non-word regex"));

/// Coarse title normalization used by the substring prefilter.
///
/// Lower-cases, folds typographic apostrophe variants (U+2019, U+2032) to the
/// ASCII apostrophe, and trims surrounding whitespace. Punctuation such as
/// hyphens and colons is kept, so distinct title formats stay distinguishable
/// at this stage.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
        .replace(['\u{2019}', '\u{2032}'], "'")
        .trim()
        .to_string()
}

/// Strict normalization used only by the similarity scorer.
///
/// Transliterates to ASCII, lower-cases, strips everything outside word/space
/// classes, and trims. "Half-Life 2: Episode One" and "Half Life 2 Episode
/// One" collapse to the same form here.
pub fn strict_normalize(s: &str) -> String {
    let ascii = deunicode(s).to_lowercase();
    NON_WORD.replace_all(&ascii, "").trim().to_string()
}
