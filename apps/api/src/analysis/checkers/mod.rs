//! Category checkers: twelve independent heuristics sharing one contract.
//!
//! Each checker reads the shared `Document` and returns a `CheckOutcome`.
//! The analyzer walks `default_checkers()` in order, so adding, removing or
//! reordering categories never touches aggregation.

pub mod compatibility;
pub mod consistency;
pub mod contact;
pub mod education;
pub mod experience;
pub mod formatting;
pub mod keywords;
pub mod readability;
pub mod results;
pub mod sections;
pub mod skills;
pub mod verbs;

use serde::{Deserialize, Serialize};

use crate::analysis::document::{round1, Document};
use crate::analysis::models::{CheckOutcome, Finding, FindingKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Contact,
    Sections,
    WorkExperience,
    Education,
    Formatting,
    AtsCompatibility,
    ActionVerbs,
    MeasurableResults,
    HardSkills,
    Readability,
    Consistency,
    KeywordOptimization,
}

impl Category {
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Contact => "Contact Information",
            Category::Sections => "Resume Sections",
            Category::WorkExperience => "Work Experience",
            Category::Education => "Education",
            Category::Formatting => "Formatting & Structure",
            Category::AtsCompatibility => "ATS Compatibility",
            Category::ActionVerbs => "Action Verbs",
            Category::MeasurableResults => "Measurable Results",
            Category::HardSkills => "Hard Skills",
            Category::Readability => "Readability",
            Category::Consistency => "Writing Consistency",
            Category::KeywordOptimization => "Keyword Optimization",
        }
    }
}

/// A single quality dimension. Implementations must never panic on any text
/// input: a missing pattern is the lowest-tier finding, not an error.
pub trait Checker: Send + Sync {
    fn category(&self) -> Category;
    fn max_score(&self) -> f64;
    fn check(&self, doc: &Document<'_>) -> CheckOutcome;
}

/// The standard registry, in report order.
pub fn default_checkers() -> Vec<Box<dyn Checker>> {
    vec![
        Box::new(contact::ContactChecker),
        Box::new(sections::SectionsChecker),
        Box::new(experience::ExperienceChecker),
        Box::new(education::EducationChecker),
        Box::new(formatting::FormattingChecker),
        Box::new(compatibility::AtsCompatibilityChecker),
        Box::new(verbs::ActionVerbsChecker),
        Box::new(results::MeasurableResultsChecker),
        Box::new(skills::HardSkillsChecker),
        Box::new(readability::ReadabilityChecker),
        Box::new(consistency::ConsistencyChecker),
        Box::new(keywords::KeywordOptimizationChecker),
    ]
}

// ────────────────────────────────────────────────────────────────────────────
// Scorecard
// ────────────────────────────────────────────────────────────────────────────

/// Accumulates points and findings for one checker run.
#[derive(Debug)]
pub struct Scorecard {
    max_score: f64,
    score: f64,
    findings: Vec<Finding>,
}

impl Scorecard {
    pub fn new(max_score: f64) -> Self {
        Self {
            max_score,
            score: 0.0,
            findings: Vec::new(),
        }
    }

    pub fn award(&mut self, points: f64) -> &mut Self {
        self.score += points;
        self
    }

    /// Replaces the running score; used by step-function checkers.
    pub fn set_score(&mut self, points: f64) -> &mut Self {
        self.score = points;
        self
    }

    /// Subtracts a penalty without going below zero.
    pub fn penalize(&mut self, points: f64) -> &mut Self {
        self.score = (self.score - points).max(0.0);
        self
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn pass(&mut self, message: impl Into<String>) -> &mut Self {
        self.push(FindingKind::Pass, message)
    }

    pub fn warn(&mut self, message: impl Into<String>) -> &mut Self {
        self.push(FindingKind::Warning, message)
    }

    pub fn fail(&mut self, message: impl Into<String>) -> &mut Self {
        self.push(FindingKind::Fail, message)
    }

    pub fn info(&mut self, message: impl Into<String>) -> &mut Self {
        self.push(FindingKind::Info, message)
    }

    fn push(&mut self, kind: FindingKind, message: impl Into<String>) -> &mut Self {
        self.findings.push(Finding::new(kind, message));
        self
    }

    pub fn finish(self) -> CheckOutcome {
        CheckOutcome {
            score: round1(self.score.clamp(0.0, self.max_score)),
            max_score: self.max_score,
            findings: self.findings,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::analysis::catalog::KeywordCatalog;
    use crate::analysis::document::{Document, FileKind};
    use crate::analysis::models::{CheckOutcome, FindingKind};

    use super::Checker;

    pub fn run(checker: &dyn Checker, text: &str) -> CheckOutcome {
        run_with(checker, text, 1, FileKind::Pdf)
    }

    pub fn run_with(
        checker: &dyn Checker,
        text: &str,
        page_count: u32,
        file_kind: FileKind,
    ) -> CheckOutcome {
        let catalog = KeywordCatalog::default();
        let doc = Document::new(text, page_count, file_kind, &catalog);
        checker.check(&doc)
    }

    pub fn run_with_catalog(
        checker: &dyn Checker,
        text: &str,
        catalog: &KeywordCatalog,
    ) -> CheckOutcome {
        let doc = Document::new(text, 1, FileKind::Pdf, catalog);
        checker.check(&doc)
    }

    pub fn kinds(outcome: &CheckOutcome) -> Vec<FindingKind> {
        outcome.findings.iter().map(|f| f.kind).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_and_max_scores() {
        let checkers = default_checkers();
        let summary: Vec<(Category, f64)> = checkers
            .iter()
            .map(|c| (c.category(), c.max_score()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (Category::Contact, 12.0),
                (Category::Sections, 15.0),
                (Category::WorkExperience, 12.0),
                (Category::Education, 10.0),
                (Category::Formatting, 13.0),
                (Category::AtsCompatibility, 8.0),
                (Category::ActionVerbs, 10.0),
                (Category::MeasurableResults, 10.0),
                (Category::HardSkills, 12.0),
                (Category::Readability, 8.0),
                (Category::Consistency, 7.0),
                (Category::KeywordOptimization, 10.0),
            ]
        );
    }

    #[test]
    fn test_scorecard_clamps_and_rounds() {
        let mut card = Scorecard::new(5.0);
        card.award(4.0).award(3.33);
        assert_eq!(card.finish().score, 5.0);

        let mut card = Scorecard::new(5.0);
        card.award(1.26);
        assert_eq!(card.finish().score, 1.3);
    }

    #[test]
    fn test_scorecard_penalty_floors_at_zero() {
        let mut card = Scorecard::new(10.0);
        card.set_score(0.0).penalize(1.0);
        assert_eq!(card.finish().score, 0.0);
    }

    #[test]
    fn test_every_checker_survives_empty_and_odd_input() {
        for text in ["", "   \n\n\t", "€€€ 💥 ——— %%%% $$$", "a\u{0}b"] {
            for checker in default_checkers() {
                let outcome = test_support::run(checker.as_ref(), text);
                assert!(outcome.score >= 0.0 && outcome.score <= outcome.max_score);
                assert!(!outcome.findings.is_empty());
            }
        }
    }
}
