//! Keyword optimization: overall density of hard and soft skill terms.

use std::collections::HashMap;

use crate::analysis::checkers::{Category, Checker, Scorecard};
use crate::analysis::document::{contains_term, Document};
use crate::analysis::models::CheckOutcome;

const MAX_SCORE: f64 = 10.0;

const EMPHASIS_MIN_COUNT: usize = 3;
const LIST_CHUNK: usize = 12;
const LIST_LIMIT: usize = 24;

pub struct KeywordOptimizationChecker;

impl Checker for KeywordOptimizationChecker {
    fn category(&self) -> Category {
        Category::KeywordOptimization
    }

    fn max_score(&self) -> f64 {
        MAX_SCORE
    }

    fn check(&self, doc: &Document<'_>) -> CheckOutcome {
        let mut card = Scorecard::new(MAX_SCORE);

        let mut found: Vec<String> = doc
            .catalog
            .all_skill_keywords()
            .map(str::to_lowercase)
            .filter(|kw| contains_term(&doc.lower, kw))
            .collect();
        found.sort_unstable();
        found.dedup();
        let count = found.len();

        if count >= 20 {
            card.set_score(10.0).pass(format!(
                "Outstanding keyword density; {count} ATS-relevant keywords detected"
            ));
        } else if count >= 14 {
            card.set_score(8.0).pass(format!(
                "Strong keyword presence; {count} keywords that ATS systems scan for"
            ));
        } else if count >= 8 {
            card.set_score(5.0).warn(format!(
                "Moderate keyword density ({count}); tailor keywords to match specific job descriptions"
            ));
        } else if count >= 4 {
            card.set_score(3.0).warn(format!(
                "Low keyword density ({count}); you may be filtered out by ATS keyword matching"
            ));
        } else {
            card.fail("Very few ATS keywords; your resume may not pass keyword-based screening");
        }

        let mut frequency: HashMap<&str, usize> = HashMap::new();
        for token in doc.lower.split_whitespace() {
            *frequency.entry(token).or_default() += 1;
        }
        // `found` is already alphabetical; the stable sort keeps ties that way.
        let mut emphasized: Vec<(&str, usize)> = found
            .iter()
            .filter_map(|kw| {
                let n = frequency.get(kw.as_str()).copied().unwrap_or(0);
                (n >= EMPHASIS_MIN_COUNT).then_some((kw.as_str(), n))
            })
            .collect();
        emphasized.sort_by(|a, b| b.1.cmp(&a.1));
        if !emphasized.is_empty() {
            let top: Vec<String> = emphasized
                .iter()
                .take(5)
                .map(|(kw, n)| format!("{kw} ({n}x)"))
                .collect();
            card.info(format!("Most emphasized keywords: {}", top.join(", ")));
        }

        for chunk in found[..count.min(LIST_LIMIT)].chunks(LIST_CHUNK) {
            card.info(format!("Keywords detected: {}", chunk.join(", ")));
        }

        card.info("Pro tip: copy keywords directly from the job description you're applying to; ATS systems match exact phrases");

        card.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::checkers::test_support::{kinds, run};
    use crate::analysis::models::FindingKind;

    #[test]
    fn test_no_keywords() {
        let outcome = run(&KeywordOptimizationChecker, "lorem ipsum");
        assert_eq!(outcome.score, 0.0);
        assert_eq!(kinds(&outcome), vec![FindingKind::Fail, FindingKind::Info]);
    }

    #[test]
    fn test_keywords_listed_alphabetically() {
        let text = "Rust, Python, Docker, AWS and teamwork";
        let outcome = run(&KeywordOptimizationChecker, text);
        assert_eq!(outcome.score, 3.0);
        assert_eq!(
            outcome.findings[1].message,
            "Keywords detected: aws, docker, python, rust, teamwork"
        );
    }

    #[test]
    fn test_emphasized_keywords_sorted_by_count() {
        let text = "python python python rust rust rust rust sql sql sql";
        let outcome = run(&KeywordOptimizationChecker, text);
        assert_eq!(
            outcome.findings[1].message,
            "Most emphasized keywords: rust (4x), python (3x), sql (3x)"
        );
    }

    #[test]
    fn test_keyword_list_capped_in_chunks() {
        let text = "python java javascript typescript ruby php swift kotlin golang rust scala \
                    matlab html css react angular vue django flask spring graphql sql mysql \
                    postgresql mongodb redis";
        let outcome = run(&KeywordOptimizationChecker, text);
        assert_eq!(outcome.score, 10.0);
        let lists: Vec<_> = outcome
            .findings
            .iter()
            .filter(|f| f.message.starts_with("Keywords detected"))
            .collect();
        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0].message.matches(", ").count(), 11);
        assert_eq!(lists[1].message.matches(", ").count(), 11);
    }
}
