//! Normalized, per-call view of the text every checker reads.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::catalog::KeywordCatalog;

/// Source format of the uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FileKind {
    Pdf,
    Docx,
}

impl FileKind {
    /// Resolves a kind from a file name's extension (case-insensitive).
    pub fn from_file_name(name: &str) -> Option<Self> {
        let (_, ext) = name.rsplit_once('.')?;
        ext.parse().ok()
    }

    pub fn extension(self) -> &'static str {
        match self {
            FileKind::Pdf => "pdf",
            FileKind::Docx => "docx",
        }
    }
}

impl FromStr for FileKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pdf" => Ok(FileKind::Pdf),
            "docx" => Ok(FileKind::Docx),
            other => Err(format!("unsupported file extension '{other}'")),
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.extension().to_ascii_uppercase())
    }
}

/// Inputs shared read-only by all checkers for one analysis.
pub struct Document<'a> {
    pub text: &'a str,
    pub lower: String,
    /// Whitespace runs collapsed to a single space.
    pub collapsed: String,
    pub page_count: u32,
    pub file_kind: FileKind,
    pub catalog: &'a KeywordCatalog,
}

impl<'a> Document<'a> {
    pub fn new(
        text: &'a str,
        page_count: u32,
        file_kind: FileKind,
        catalog: &'a KeywordCatalog,
    ) -> Self {
        Self {
            text,
            lower: text.to_lowercase(),
            collapsed: text.split_whitespace().collect::<Vec<_>>().join(" "),
            page_count,
            file_kind,
            catalog,
        }
    }

    /// Non-empty lines, untrimmed.
    pub fn non_empty_lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines().filter(|l| !l.trim().is_empty())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Text helpers
// ────────────────────────────────────────────────────────────────────────────

lazy_static! {
    static ref PHONE_CANDIDATE: Regex = Regex::new(r"\+?\(?\d[\d \t\-().]{5,40}\d").unwrap();
    static ref NUMBER_TOKEN: Regex = Regex::new(r"\d+(?:[./]\d+)*").unwrap();
    /// `2021`, `01.2021`, `3/2021`
    static ref DATE_TOKEN: Regex = Regex::new(r"^(?:\d{1,2}[./])?(?:19|20)\d{2}$").unwrap();
}

const PHONE_DIGITS: RangeInclusive<usize> = 7..=15;

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// True when a single line holds 7–15 digits laid out like a phone number.
///
/// Space-separated numbers on one line merge into one candidate, so every
/// run of consecutive chunks is tried. Runs made only of years or
/// month.year pairs are dates, not phones.
pub fn has_phone_number(haystack: &str) -> bool {
    PHONE_CANDIDATE.find_iter(haystack).any(|m| {
        let chunks: Vec<&str> = m.as_str().split_whitespace().collect();
        (0..chunks.len()).any(|start| {
            let mut digits = 0;
            (start..chunks.len()).any(|end| {
                digits += chunks[end].chars().filter(|c| c.is_ascii_digit()).count();
                PHONE_DIGITS.contains(&digits) && !is_date_run(&chunks[start..=end])
            })
        })
    })
}

fn is_date_run(chunks: &[&str]) -> bool {
    chunks
        .iter()
        .flat_map(|chunk| NUMBER_TOKEN.find_iter(chunk))
        .all(|token| DATE_TOKEN.is_match(token.as_str()))
}

/// Finds `term` where it is not embedded in a longer word on either side.
/// Both arguments are expected to be lowercase.
pub fn contains_term(haystack: &str, term: &str) -> bool {
    count_term(haystack, term, true) > 0
}

/// Finds `stem` at the start of a word, allowing any suffix (`led` matches
/// "led" and "leading").
pub fn contains_word_prefix(haystack: &str, stem: &str) -> bool {
    count_term(haystack, stem, false) > 0
}

fn count_term(haystack: &str, term: &str, bounded_end: bool) -> usize {
    if term.is_empty() {
        return 0;
    }
    let starts_with_word = term.chars().next().is_some_and(is_word_char);
    let ends_with_word = term.chars().last().is_some_and(is_word_char);
    haystack
        .match_indices(term)
        .filter(|(idx, _)| {
            let before_ok = !starts_with_word
                || haystack[..*idx]
                    .chars()
                    .next_back()
                    .map_or(true, |c| !is_word_char(c));
            let after_ok = !bounded_end
                || !ends_with_word
                || haystack[idx + term.len()..]
                    .chars()
                    .next()
                    .map_or(true, |c| !is_word_char(c));
            before_ok && after_ok
        })
        .count()
}

/// Truncates to at most `max` characters without splitting a code point.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Rounds to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Pushes `item` unless an equal item is already present, keeping first-seen
/// order.
pub fn push_unique(items: &mut Vec<String>, item: String) {
    if !items.contains(&item) {
        items.push(item);
    }
}
