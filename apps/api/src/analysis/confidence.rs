//! Resume confidence: how resume-like a document looks, in `[0, 1]`.
//!
//! Weighted signals (max 10):
//! - email present → 1.5, phone present → 1.5
//! - short heading lines: ≥3 → 3, 2 → 2, 1 → 1
//! - date ranges: ≥2 → 2, 1 → 1
//! - bullet lines: ≥5 → 2, ≥2 → 1

use lazy_static::lazy_static;
use regex::Regex;

use crate::analysis::document::{has_phone_number, Document};

const MAX_SIGNALS: f64 = 10.0;

pub(crate) const BULLET_GLYPHS: &[char] = &['•', '●', '▪', '■', '–', '→', '◦', '‣', '►'];

lazy_static! {
    static ref EMAIL: Regex = Regex::new(r"[\w.+-]+\s*@\s*[\w-]+\s*\.\s*[\w.]+").unwrap();
    static ref MONTH_RANGE: Regex = Regex::new(
        r"(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)\w*\.?\s*\d{4}\s*[–\-—to]+"
    )
    .unwrap();
    static ref YEAR_RANGE: Regex =
        Regex::new(r"\b20\d{2}\s*[–\-—]\s*(?:20\d{2}|present|current)\b").unwrap();
}

pub fn estimate_confidence(doc: &Document<'_>) -> f64 {
    let mut signals = 0.0;

    if EMAIL.is_match(doc.text) {
        signals += 1.5;
    }
    if has_phone_number(doc.text) {
        signals += 1.5;
    }

    signals += match count_heading_lines(doc) {
        0 => 0.0,
        1 => 1.0,
        2 => 2.0,
        _ => 3.0,
    };

    let date_ranges = MONTH_RANGE.find_iter(&doc.lower).count()
        + YEAR_RANGE.find_iter(&doc.lower).count();
    signals += match date_ranges {
        0 => 0.0,
        1 => 1.0,
        _ => 2.0,
    };

    signals += match count_bullet_lines(doc.text) {
        n if n >= 5 => 2.0,
        n if n >= 2 => 1.0,
        _ => 0.0,
    };

    (signals / MAX_SIGNALS).min(1.0)
}

/// Lines shorter than 50 characters that contain a resume heading keyword.
fn count_heading_lines(doc: &Document<'_>) -> usize {
    doc.lower
        .lines()
        .map(|l| l.trim().trim_end_matches(':').trim())
        .filter(|l| !l.is_empty() && l.chars().count() < 50)
        .filter(|l| {
            doc.catalog
                .resume_headings
                .iter()
                .any(|h| l.contains(h.as_str()))
        })
        .count()
}

fn count_bullet_lines(text: &str) -> usize {
    text.lines()
        .filter(|l| l.trim_start().starts_with(BULLET_GLYPHS))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::catalog::KeywordCatalog;
    use crate::analysis::document::FileKind;

    fn confidence(text: &str) -> f64 {
        let catalog = KeywordCatalog::default();
        estimate_confidence(&Document::new(text, 1, FileKind::Pdf, &catalog))
    }

    #[test]
    fn test_plain_prose_has_low_confidence() {
        let c = confidence("The quick brown fox jumps over the lazy dog. It was a sunny day.");
        assert!(c < 0.3, "confidence was {c}");
    }

    #[test]
    fn test_contact_signals_only() {
        let c = confidence("jane@example.com\n(555) 123-4567");
        assert!((c - 0.3).abs() < 1e-9, "confidence was {c}");
    }

    #[test]
    fn test_heading_tiers() {
        assert!((confidence("Education") - 0.1).abs() < 1e-9);
        assert!((confidence("Education\nSkills") - 0.2).abs() < 1e-9);
        assert!((confidence("Education\nSkills\nProjects\nSummary") - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_long_line_is_not_a_heading() {
        let line = "I have always cared deeply about education in every community I lived in";
        assert!(confidence(line) < 1e-9);
    }

    #[test]
    fn test_date_range_tiers() {
        assert!((confidence("Jan 2020 – Mar 2022") - 0.1).abs() < 1e-9);
        assert!((confidence("Jan 2020 - Mar 2022\n2018 - 2019") - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_bullet_tiers() {
        assert!((confidence("• one\n• two") - 0.1).abs() < 1e-9);
        let five = "• a\n• b\n• c\n• d\n• e";
        assert!((confidence(five) - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_is_capped_at_one() {
        let text = "jane@example.com\n(555) 123-4567\nExperience\nEducation\nSkills\n\
                    Jan 2020 - Mar 2022\nFeb 2018 - Dec 2019\n• a\n• b\n• c\n• d\n• e";
        assert_eq!(confidence(text), 1.0);
    }
}
