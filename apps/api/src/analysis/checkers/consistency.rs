//! Writing consistency: verb tense, first-person pronouns, mixed
//! abbreviations.

use lazy_static::lazy_static;
use regex::Regex;

use crate::analysis::checkers::{Category, Checker, Scorecard};
use crate::analysis::document::{contains_term, Document};
use crate::analysis::models::CheckOutcome;

const MAX_SCORE: f64 = 7.0;

/// Past/present ratio above which tense usage reads as mixed.
const MIXED_TENSE_RATIO: f64 = 0.6;

const ABBREVIATIONS: &[(&str, &str)] = &[
    ("JavaScript", "JS"),
    ("TypeScript", "TS"),
    ("Structured Query Language", "SQL"),
    ("Application", "App"),
    ("Development", "Dev"),
    ("Management", "Mgmt"),
];

lazy_static! {
    static ref PAST_TENSE: Regex = Regex::new(r"\b\w+ed\b").unwrap();
    static ref PRESENT_TENSE: Regex = Regex::new(
        r"(?i)\b(?:manage|develop|lead|create|design|implement|build|maintain|coordinate|optimize|analyze|deliver|support|organize)\b"
    )
    .unwrap();
    static ref FIRST_PERSON: Regex = Regex::new(r"\b(?:I|[Mm]y|[Mm]e|[Mm]yself)\b").unwrap();
}

pub struct ConsistencyChecker;

impl Checker for ConsistencyChecker {
    fn category(&self) -> Category {
        Category::Consistency
    }

    fn max_score(&self) -> f64 {
        MAX_SCORE
    }

    fn check(&self, doc: &Document<'_>) -> CheckOutcome {
        let mut card = Scorecard::new(MAX_SCORE);

        check_tense(doc.text, &mut card);

        let pronouns = FIRST_PERSON.find_iter(doc.text).count();
        match pronouns {
            0 => {
                card.award(2.5)
                    .pass("No first-person pronouns; correct resume writing style");
            }
            1..=3 => {
                card.award(1.5).warn(format!(
                    "Found {pronouns} first-person pronoun(s) (I/my/me); resumes should omit these"
                ));
            }
            n => {
                card.fail(format!(
                    "{n} first-person pronouns found; remove all 'I', 'my', 'me' from your resume"
                ));
            }
        }

        let mixed: Vec<String> = ABBREVIATIONS
            .iter()
            .filter(|(full, short)| {
                contains_term(&doc.lower, &full.to_lowercase())
                    && contains_term(&doc.lower, &short.to_lowercase())
            })
            .map(|(full, short)| format!("{full}/{short}"))
            .collect();
        if mixed.is_empty() {
            card.award(2.0)
                .pass("Consistent terminology; no mixed abbreviations detected");
        } else {
            card.award(1.0).warn(format!(
                "Mixed abbreviations: {}; pick one form and use it consistently",
                mixed.join(", ")
            ));
        }

        card.finish()
    }
}

fn check_tense(text: &str, card: &mut Scorecard) {
    let past = PAST_TENSE.find_iter(text).count();
    let present = PRESENT_TENSE.find_iter(text).count();

    match (past, present) {
        (0, 0) => {
            card.award(1.0).info("Could not determine verb tense pattern");
        }
        (_, 0) => {
            card.award(2.5)
                .pass("Consistent use of past tense; appropriate for describing completed work");
        }
        (0, _) => {
            card.award(2.0)
                .pass("Present tense usage; appropriate for current role");
        }
        (past, present) => {
            let ratio = past.min(present) as f64 / past.max(present) as f64;
            if ratio > MIXED_TENSE_RATIO {
                card.award(1.0).warn(format!(
                    "Mixed verb tenses (past: ~{past}, present: ~{present}); use past tense for previous roles, present for current"
                ));
            } else {
                let dominant = if past > present { "past" } else { "present" };
                card.award(2.5).pass(format!(
                    "Consistent verb tense; primarily {dominant} tense with appropriate variation"
                ));
            }
        }
    }
}
