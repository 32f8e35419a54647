//! Measurable results: numbers, money, scale, time, volume and impact
//! statements.

use lazy_static::lazy_static;
use regex::Regex;

use crate::analysis::checkers::{Category, Checker, Scorecard};
use crate::analysis::document::{truncate_chars, Document};
use crate::analysis::models::CheckOutcome;

const MAX_SCORE: f64 = 10.0;

const FINANCIAL_WORDS: &[&str] = &["revenue", "budget", "cost", "savings"];

lazy_static! {
    static ref PERCENT: Regex = Regex::new(r"\d+[.\d]*\s*%").unwrap();
    static ref MONEY: Regex =
        Regex::new(r"(?i)\$\s*[\d,]+[.\d]*[kmb]?|\d+[.\d]*\s*(?:dollars|usd)").unwrap();
    static ref PEOPLE: Regex = Regex::new(
        r"(?i)\d[\d,]*\s*(?:users|clients|customers|members|employees|people|students|attendees|team members|engineers)"
    )
    .unwrap();
    static ref TIME: Regex =
        Regex::new(r"(?i)\d[\d,]*\s*(?:hours|days|weeks|months|years|minutes)").unwrap();
    static ref VOLUME: Regex = Regex::new(
        r"(?i)\d[\d,]*\s*(?:projects|applications|features|tickets|deployments|releases|reports|repositories|systems|servers|databases)"
    )
    .unwrap();
    static ref IMPACT: Regex = Regex::new(
        r"(?i)\b(?:increased|decreased|reduced|improved|grew|saved|generated|boosted|cut|raised|doubled|tripled)\b[^.]*?\d+"
    )
    .unwrap();
}

pub struct MeasurableResultsChecker;

impl Checker for MeasurableResultsChecker {
    fn category(&self) -> Category {
        Category::MeasurableResults
    }

    fn max_score(&self) -> f64 {
        MAX_SCORE
    }

    fn check(&self, doc: &Document<'_>) -> CheckOutcome {
        let mut card = Scorecard::new(MAX_SCORE);
        let text = doc.text;

        let classes: [(&str, Vec<&str>); 6] = [
            ("Percentages", matches(&PERCENT, text)),
            ("Financial", matches(&MONEY, text)),
            ("People/Scale", matches(&PEOPLE, text)),
            ("Time", matches(&TIME, text)),
            ("Volume", matches(&VOLUME, text)),
            ("Impact Statements", matches(&IMPACT, text)),
        ];
        let total: usize = classes.iter().map(|(_, found)| found.len()).sum();

        if total >= 8 {
            card.set_score(10.0).pass(format!(
                "Exceptional quantification; {total} measurable results found across your resume"
            ));
        } else if total >= 5 {
            card.set_score(8.0)
                .pass(format!("Strong metrics usage; {total} quantifiable results found"));
        } else if total >= 3 {
            card.set_score(5.0).warn(format!(
                "Moderate metrics ({total} found); add numbers to at least half of your bullet points"
            ));
        } else if total >= 1 {
            card.set_score(2.0).warn(format!(
                "Only {total} measurable result(s); quantify more achievements for stronger impact"
            ));
        } else {
            card.fail("No quantifiable results found; this is a major gap, so add numbers, percentages and dollar amounts");
        }

        for (name, found) in &classes {
            if found.is_empty() {
                continue;
            }
            let sample: Vec<&str> = found
                .iter()
                .take(3)
                .map(|m| truncate_chars(m.trim(), 60))
                .collect();
            card.info(format!("{name}: {}", sample.join(", ")));
        }

        if classes[0].1.is_empty() {
            card.warn("Tip: add percentages (e.g., 'Improved performance by 40%', 'Reduced costs by 25%')");
        }
        let money_words = FINANCIAL_WORDS.iter().any(|w| doc.lower.contains(w));
        if classes[1].1.is_empty() && !money_words {
            card.warn("Tip: include financial impact where possible (e.g., 'Managed $500K budget', 'Generated $2M revenue')");
        }

        card.finish()
    }
}

fn matches<'t>(re: &Regex, text: &'t str) -> Vec<&'t str> {
    re.find_iter(text).map(|m| m.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::checkers::test_support::{kinds, run};
    use crate::analysis::models::FindingKind;

    #[test]
    fn test_rich_metrics() {
        let text = "Increased revenue by 35% in 6 months.\n\
                    Managed a $1.2M budget across 4 projects.\n\
                    Served 10,000 users and mentored 5 engineers.\n\
                    Reduced latency by 40%.";
        let outcome = run(&MeasurableResultsChecker, text);
        assert_eq!(outcome.score, 10.0);
        assert_eq!(outcome.findings[0].kind, FindingKind::Pass);
        assert!(outcome
            .findings
            .iter()
            .any(|f| f.message == "Percentages: 35%, 40%"));
        assert!(outcome
            .findings
            .iter()
            .any(|f| f.message == "People/Scale: 10,000 users, 5 engineers"));
        assert!(!outcome
            .findings
            .iter()
            .any(|f| f.kind == FindingKind::Warning));
    }

    #[test]
    fn test_no_metrics() {
        let outcome = run(&MeasurableResultsChecker, "Worked on many things for a long time.");
        assert_eq!(outcome.score, 0.0);
        assert_eq!(
            kinds(&outcome),
            vec![FindingKind::Fail, FindingKind::Warning, FindingKind::Warning]
        );
    }

    #[test]
    fn test_bare_commas_are_not_metrics() {
        let outcome = run(&MeasurableResultsChecker, "Teams, users, and customers, projects");
        assert_eq!(outcome.findings[0].kind, FindingKind::Fail);
    }

    #[test]
    fn test_budget_word_suppresses_financial_tip() {
        let outcome = run(&MeasurableResultsChecker, "Owned the budget for 3 projects");
        assert_eq!(outcome.score, 2.0);
        let warnings: Vec<_> = outcome
            .findings
            .iter()
            .filter(|f| f.kind == FindingKind::Warning)
            .collect();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[1].message.starts_with("Tip: add percentages"));
    }
}
