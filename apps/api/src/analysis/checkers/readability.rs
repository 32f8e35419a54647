//! Readability: sentence length, vocabulary complexity, paragraph density.

use lazy_static::lazy_static;
use regex::Regex;

use crate::analysis::checkers::{Category, Checker, Scorecard};
use crate::analysis::document::Document;
use crate::analysis::models::CheckOutcome;

const MAX_SCORE: f64 = 8.0;

/// Score when no sentence structure can be measured.
const UNMEASURABLE_SCORE: f64 = 4.0;

const LONG_SENTENCE_WORDS: usize = 25;
const COMPLEX_WORD_CHARS: usize = 12;
const DENSE_PARAGRAPH_WORDS: usize = 60;

lazy_static! {
    static ref SENTENCE_END: Regex = Regex::new(r"[.!?]+").unwrap();
}

pub struct ReadabilityChecker;

impl Checker for ReadabilityChecker {
    fn category(&self) -> Category {
        Category::Readability
    }

    fn max_score(&self) -> f64 {
        MAX_SCORE
    }

    fn check(&self, doc: &Document<'_>) -> CheckOutcome {
        let mut card = Scorecard::new(MAX_SCORE);

        let sentence_lengths: Vec<usize> = SENTENCE_END
            .split(doc.text)
            .map(|s| s.split_whitespace().count())
            .filter(|&words| words > 2)
            .collect();

        if sentence_lengths.is_empty() {
            card.set_score(UNMEASURABLE_SCORE)
                .warn("Could not analyze sentence structure");
            return card.finish();
        }

        let average =
            sentence_lengths.iter().sum::<usize>() as f64 / sentence_lengths.len() as f64;
        if (10.0..=20.0).contains(&average) {
            card.award(3.0).pass(format!(
                "Good sentence length; avg {average:.1} words per sentence (ideal: 10–20)"
            ));
        } else if average < 10.0 {
            card.award(2.0).pass(format!(
                "Concise writing; avg {average:.1} words per sentence (clear and scannable)"
            ));
        } else {
            card.award(1.0).warn(format!(
                "Long sentences; avg {average:.1} words, so break complex sentences into shorter ones"
            ));
        }

        let long = sentence_lengths
            .iter()
            .filter(|&&w| w > LONG_SENTENCE_WORDS)
            .count();
        match long {
            0 => {
                card.award(2.0)
                    .pass("No overly long sentences; maintains recruiter attention");
            }
            1..=3 => {
                card.award(1.0).warn(format!(
                    "{long} sentence(s) over {LONG_SENTENCE_WORDS} words; consider shortening for clarity"
                ));
            }
            _ => {
                card.fail(format!(
                    "{long} sentences exceed {LONG_SENTENCE_WORDS} words; recruiters scan rather than read, so keep it concise"
                ));
            }
        }

        let words: Vec<&str> = doc.lower.split_whitespace().collect();
        let complex = words
            .iter()
            .filter(|w| w.chars().count() > COMPLEX_WORD_CHARS)
            .count();
        let ratio = complex as f64 / words.len().max(1) as f64;
        if ratio < 0.05 {
            card.award(1.5)
                .pass("Clear vocabulary; professional yet accessible language");
        } else if ratio < 0.1 {
            card.award(1.0).pass(
                "Vocabulary is mostly clear with some technical jargon (appropriate for specialized roles)",
            );
        } else {
            card.award(0.5).warn(
                "Heavy use of complex words; ensure jargon is industry-standard and necessary",
            );
        }

        let dense = doc
            .text
            .split("\n\n")
            .filter(|p| p.split_whitespace().count() > DENSE_PARAGRAPH_WORDS)
            .count();
        if dense == 0 {
            card.award(1.5)
                .pass("Good content density; no large text blocks that overwhelm readers");
        } else {
            card.award(0.5).warn(format!(
                "{dense} dense paragraph(s) found; break into bullet points for better readability"
            ));
        }

        card.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::checkers::test_support::{kinds, run};
    use crate::analysis::models::FindingKind;

    fn sentence(words: usize) -> String {
        format!("{}.", vec!["word"; words].join(" "))
    }

    #[test]
    fn test_unmeasurable_text_scores_midpoint() {
        let outcome = run(&ReadabilityChecker, "Jane Doe. Python. Rust.");
        assert_eq!(outcome.score, 4.0);
        assert_eq!(kinds(&outcome), vec![FindingKind::Warning]);
    }

    #[test]
    fn test_ideal_sentences() {
        let text = [sentence(12), sentence(15), sentence(14)].join(" ");
        let outcome = run(&ReadabilityChecker, &text);
        assert_eq!(outcome.score, 8.0);
        assert_eq!(
            outcome.findings[0].message,
            "Good sentence length; avg 13.7 words per sentence (ideal: 10–20)"
        );
    }

    #[test]
    fn test_short_sentences_are_concise() {
        let text = [sentence(5), sentence(6)].join("\n");
        let outcome = run(&ReadabilityChecker, &text);
        assert_eq!(outcome.findings[0].kind, FindingKind::Pass);
        assert!(outcome.findings[0].message.starts_with("Concise writing; avg 5.5"));
        assert_eq!(outcome.score, 7.0);
    }

    #[test]
    fn test_long_sentences_fail() {
        let text = vec![sentence(30); 4].join(" ");
        let outcome = run(&ReadabilityChecker, &text);
        assert_eq!(outcome.findings[0].kind, FindingKind::Warning);
        assert_eq!(outcome.findings[1].kind, FindingKind::Fail);
        assert!(outcome.findings[1].message.starts_with("4 sentences exceed 25 words"));
        // 1 + 0 + 1.5 + 0.5 (a single 120-word paragraph)
        assert_eq!(outcome.score, 3.0);
    }

    #[test]
    fn test_complex_vocabulary() {
        let text = "Internationalization responsibilities encompassed \
                    comprehensive infrastructure modernization.";
        let outcome = run(&ReadabilityChecker, text);
        assert_eq!(outcome.findings[2].kind, FindingKind::Warning);
    }
}
