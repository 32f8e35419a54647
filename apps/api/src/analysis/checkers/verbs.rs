//! Action verbs by category, plus a penalty for weak or passive phrasing.

use crate::analysis::checkers::{Category, Checker, Scorecard};
use crate::analysis::document::{contains_word_prefix, Document};
use crate::analysis::models::CheckOutcome;

const MAX_SCORE: f64 = 10.0;

/// Suggestions are offered only when at most this many categories are absent.
const MAX_MISSING_FOR_SUGGESTION: usize = 5;

pub struct ActionVerbsChecker;

impl Checker for ActionVerbsChecker {
    fn category(&self) -> Category {
        Category::ActionVerbs
    }

    fn max_score(&self) -> f64 {
        MAX_SCORE
    }

    fn check(&self, doc: &Document<'_>) -> CheckOutcome {
        let mut card = Scorecard::new(MAX_SCORE);
        let groups = &doc.catalog.action_verbs;

        let found: Vec<(&str, Vec<&str>)> = groups
            .iter()
            .filter_map(|group| {
                let matched: Vec<&str> = group
                    .keywords
                    .iter()
                    .map(String::as_str)
                    .filter(|verb| contains_word_prefix(&doc.lower, verb))
                    .collect();
                (!matched.is_empty()).then_some((group.name.as_str(), matched))
            })
            .collect();
        let verbs: usize = found.iter().map(|(_, v)| v.len()).sum();
        let categories = found.len();

        if verbs >= 12 {
            card.set_score(10.0).pass(format!(
                "Outstanding use of action verbs; {verbs} strong verbs across {categories} categories"
            ));
        } else if verbs >= 8 {
            card.set_score(8.0).pass(format!(
                "Excellent action verb usage; {verbs} verbs found in {categories} categories"
            ));
        } else if verbs >= 5 {
            card.set_score(6.0).warn(format!(
                "Good start with {verbs} action verbs; aim for 10+ different verbs"
            ));
        } else if verbs >= 2 {
            card.set_score(3.0).warn(format!(
                "Only {verbs} action verbs found; start every bullet point with a strong action verb"
            ));
        } else {
            card.fail("Very few action verbs; replace 'was responsible for' with verbs like Developed, Led, Implemented");
        }

        for (name, matched) in &found {
            card.info(format!("{name}: {}", matched.join(", ")));
        }

        let missing: Vec<_> = groups
            .iter()
            .filter(|g| !found.iter().any(|(name, _)| *name == g.name))
            .collect();
        if !missing.is_empty() && missing.len() <= MAX_MISSING_FOR_SUGGESTION {
            let suggestions: Vec<String> = missing
                .iter()
                .take(3)
                .map(|g| {
                    let sample: Vec<&str> =
                        g.keywords.iter().take(3).map(String::as_str).collect();
                    format!("{} ({})", g.name, sample.join(", "))
                })
                .collect();
            card.warn(format!(
                "Missing verb categories; try adding: {}",
                suggestions.join("; ")
            ));
        }

        let weak: Vec<&str> = doc
            .catalog
            .weak_phrases
            .iter()
            .map(String::as_str)
            .filter(|p| doc.lower.contains(p))
            .collect();
        if weak.is_empty() {
            card.pass("No weak/passive phrases detected; your language is strong");
        } else {
            card.penalize(1.0).fail(format!(
                "Weak phrases detected: '{}'; replace with specific action verbs",
                weak.join(", ")
            ));
        }

        card.finish()
    }
}
