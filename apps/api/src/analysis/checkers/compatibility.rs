//! ATS compatibility: file format, problem characters, header/footer
//! artifacts, tabular layouts and image references.

use lazy_static::lazy_static;
use regex::Regex;

use crate::analysis::checkers::{Category, Checker, Scorecard};
use crate::analysis::document::{Document, FileKind};
use crate::analysis::models::CheckOutcome;

const MAX_SCORE: f64 = 8.0;

const HEADER_FOOTER_MARKERS: &[&str] = &[
    "page 1",
    "page 2",
    "page 3",
    "header",
    "footer",
    "confidential",
    "curriculum vitae",
];

/// Column-like runs tolerated before the layout is flagged as tabular.
const MAX_TABLE_RUNS: usize = 5;

lazy_static! {
    static ref TABLE_RUN: Regex = Regex::new(r"\t{2,}|\s{4,}\S+\s{4,}\S+").unwrap();
    static ref IMAGE_REF: Regex =
        Regex::new(r"(?i)\[(?:image|photo|logo)\]|\.(?:png|jpe?g|gif|svg)\b").unwrap();
}

pub struct AtsCompatibilityChecker;

impl Checker for AtsCompatibilityChecker {
    fn category(&self) -> Category {
        Category::AtsCompatibility
    }

    fn max_score(&self) -> f64 {
        MAX_SCORE
    }

    fn check(&self, doc: &Document<'_>) -> CheckOutcome {
        let mut card = Scorecard::new(MAX_SCORE);

        match doc.file_kind {
            FileKind::Pdf => {
                card.award(2.0)
                    .pass("PDF format; universally accepted by ATS systems");
            }
            FileKind::Docx => {
                card.award(2.0).pass(
                    "DOCX format; excellent ATS compatibility (preferred by many systems)",
                );
            }
        }

        let unfriendly: Vec<char> = doc
            .catalog
            .ats_unfriendly_chars
            .iter()
            .copied()
            .filter(|c| doc.text.contains(*c))
            .collect();
        match unfriendly.len() {
            0 => {
                card.award(2.0)
                    .pass("No problematic special characters; clean text for ATS parsing");
            }
            1..=3 => {
                card.award(1.0).warn(format!(
                    "Some special characters found ({}) that may not parse correctly in all ATS systems",
                    unfriendly.iter().collect::<String>()
                ));
            }
            _ => {
                card.fail("Multiple special characters detected; replace symbols with standard text equivalents");
            }
        }

        let markers: Vec<&str> = HEADER_FOOTER_MARKERS
            .iter()
            .copied()
            .filter(|m| doc.lower.contains(m))
            .collect();
        if markers.is_empty() {
            card.award(1.5)
                .pass("No headers/footers detected; ATS often misreads content in headers/footers");
        } else {
            card.award(0.5).warn(format!(
                "Possible header/footer content ({}); some ATS systems skip header/footer areas",
                markers.join(", ")
            ));
        }

        if TABLE_RUN.find_iter(doc.text).count() > MAX_TABLE_RUNS {
            card.warn("Possible table/column layout detected; ATS may scramble multi-column layouts, so use a single column");
        } else {
            card.award(1.5)
                .pass("Layout appears ATS-friendly; no complex table structures detected");
        }

        if IMAGE_REF.is_match(doc.text) {
            card.warn("Image references detected; ATS cannot read images, so keep all information in text form");
        } else {
            card.award(1.0)
                .pass("No image-only content detected; all content is text-based and parseable");
        }

        card.finish()
    }
}
