//! Section headings: critical, important and bonus sections.

use crate::analysis::checkers::{Category, Checker, Scorecard};
use crate::analysis::document::Document;
use crate::analysis::models::CheckOutcome;

const MAX_SCORE: f64 = 15.0;

const CRITICAL: &[(&str, &str, f64)] = &[
    ("experience", "Experience", 4.0),
    ("education", "Education", 4.0),
    ("skills", "Skills", 4.0),
];

const SUMMARY_POINTS: f64 = 1.5;

const BONUS: &[(&str, &str, f64)] = &[
    ("certifications", "Certifications", 0.5),
    ("projects", "Projects", 0.5),
    ("awards", "Awards", 0.3),
    ("languages", "Languages", 0.3),
    ("volunteer", "Volunteer", 0.2),
];

/// Max characters a line may have beyond the keyword and still read as a
/// heading ("Skills & Tools").
const HEADING_SLACK: usize = 15;
const MAX_HEADING_LEN: usize = 50;

pub struct SectionsChecker;

impl Checker for SectionsChecker {
    fn category(&self) -> Category {
        Category::Sections
    }

    fn max_score(&self) -> f64 {
        MAX_SCORE
    }

    fn check(&self, doc: &Document<'_>) -> CheckOutcome {
        let mut card = Scorecard::new(MAX_SCORE);
        let mut found: Vec<&str> = Vec::new();

        for &(key, label, points) in CRITICAL {
            if has_heading(&doc.lower, doc.catalog.section(key)) {
                found.push(label);
                card.award(points).pass(format!("'{label}' section found"));
            } else {
                card.fail(format!(
                    "Missing '{label}' section; this is essential for ATS parsing"
                ));
            }
        }

        if has_heading(&doc.lower, doc.catalog.section("summary")) {
            found.push("Summary");
            card.award(SUMMARY_POINTS)
                .pass("'Summary' section found; helps recruiters quickly assess your profile");
        } else {
            card.warn("No 'Summary' section; a short profile at the top boosts recruiter interest");
        }

        let mut bonus_found = Vec::new();
        for &(key, label, points) in BONUS {
            if has_heading(&doc.lower, doc.catalog.section(key)) {
                bonus_found.push(label);
                card.award(points);
            }
        }
        if bonus_found.is_empty() {
            card.info("Consider adding Certifications, Projects, Awards, or Languages to strengthen your resume");
        } else {
            card.pass(format!("Bonus sections found: {}", bonus_found.join(", ")));
        }
        found.extend(&bonus_found);

        card.info(format!(
            "Total sections detected: {} ({})",
            found.len(),
            found.join(", ")
        ));

        card.finish()
    }
}

/// A keyword counts as a heading only when it sits alone or nearly alone on
/// its own line. Single words must open the line; multi-word phrases may sit
/// anywhere in a short line.
pub(crate) fn has_heading(lower: &str, keywords: &[String]) -> bool {
    lower
        .lines()
        .map(|l| l.trim().trim_end_matches(':').trim())
        .filter(|l| !l.is_empty())
        .any(|line| {
            let len = line.chars().count();
            keywords.iter().any(|kw| {
                let kw = kw.as_str();
                line == kw
                    || (line.starts_with(kw) && len < kw.chars().count() + HEADING_SLACK)
                    || (kw.contains(' ') && line.contains(kw) && len < MAX_HEADING_LEN)
            })
        })
}
