//! Result types produced by the analysis engine.
//!
//! Everything here is created fresh per `analyze` call and serialized as-is
//! by the HTTP layer.

use serde::{Deserialize, Serialize};

use crate::analysis::checkers::Category;

// ────────────────────────────────────────────────────────────────────────────
// Findings
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    Pass,
    Warning,
    Fail,
    Info,
}

/// One observation emitted by a single sub-check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    #[serde(rename = "type")]
    pub kind: FindingKind,
    pub message: String,
}

impl Finding {
    pub fn new(kind: FindingKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Category results
// ────────────────────────────────────────────────────────────────────────────

/// Raw output of a checker: score already clamped to `[0, max_score]` and
/// rounded to one decimal.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    pub score: f64,
    pub max_score: f64,
    pub findings: Vec<Finding>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryResult {
    pub name: String,
    pub score: f64,
    pub max_score: f64,
    pub percentage: u32,
    pub findings: Vec<Finding>,
    #[serde(skip)]
    pub category: Option<Category>,
}

impl CategoryResult {
    pub fn from_outcome(category: Category, outcome: CheckOutcome) -> Self {
        let percentage = if outcome.max_score > 0.0 {
            (100.0 * outcome.score / outcome.max_score).round() as u32
        } else {
            0
        };
        Self {
            name: category.display_name().to_string(),
            score: outcome.score,
            max_score: outcome.max_score,
            percentage,
            findings: outcome.findings,
            category: Some(category),
        }
    }

    pub fn count(&self, kind: FindingKind) -> usize {
        self.findings.iter().filter(|f| f.kind == kind).count()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tips
// ────────────────────────────────────────────────────────────────────────────

/// Declaration order is the sort order: high before medium before low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tip {
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub impact: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Full analysis
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total_checks: usize,
    pub passed: usize,
    pub warnings: usize,
    pub failed: usize,
}

impl SummaryStats {
    pub fn from_categories(categories: &[CategoryResult]) -> Self {
        categories.iter().fold(Self::default(), |stats, c| Self {
            total_checks: stats.total_checks + c.findings.len(),
            passed: stats.passed + c.count(FindingKind::Pass),
            warnings: stats.warnings + c.count(FindingKind::Warning),
            failed: stats.failed + c.count(FindingKind::Fail),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub total_earned: f64,
    pub total_possible: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub overall_score: u32,
    pub verdict: String,
    pub categories: Vec<CategoryResult>,
    pub tips: Vec<Tip>,
    pub summary_stats: SummaryStats,
    pub score_breakdown: ScoreBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(score: f64, max_score: f64) -> CheckOutcome {
        CheckOutcome {
            score,
            max_score,
            findings: vec![
                Finding::new(FindingKind::Pass, "a"),
                Finding::new(FindingKind::Warning, "b"),
                Finding::new(FindingKind::Info, "c"),
            ],
        }
    }

    #[test]
    fn test_finding_serializes_kind_as_type() {
        let json = serde_json::to_value(Finding::new(FindingKind::Warning, "x")).unwrap();
        assert_eq!(json["type"], "warning");
        assert_eq!(json["message"], "x");
    }

    #[test]
    fn test_percentage_is_rounded_ratio() {
        let result = CategoryResult::from_outcome(Category::Contact, outcome(7.0, 12.0));
        assert_eq!(result.percentage, 58);
        assert_eq!(result.name, "Contact Information");
    }

    #[test]
    fn test_category_enum_not_serialized() {
        let result = CategoryResult::from_outcome(Category::Education, outcome(10.0, 10.0));
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("category").is_none());
        assert_eq!(json["percentage"], 100);
    }

    #[test]
    fn test_priority_order() {
        assert!(Priority::High < Priority::Medium);
        assert!(Priority::Medium < Priority::Low);
        assert_eq!(serde_json::to_value(Priority::High).unwrap(), "high");
    }

    #[test]
    fn test_category_counts_findings_by_kind() {
        let result = CategoryResult::from_outcome(Category::Readability, outcome(4.0, 8.0));
        assert_eq!(result.count(FindingKind::Pass), 1);
        assert_eq!(result.count(FindingKind::Info), 1);
        assert_eq!(result.count(FindingKind::Fail), 0);
    }

    #[test]
    fn test_summary_stats_ignores_info_except_total() {
        let categories = vec![
            CategoryResult::from_outcome(Category::Contact, outcome(1.0, 12.0)),
            CategoryResult::from_outcome(Category::Sections, outcome(1.0, 15.0)),
        ];
        let stats = SummaryStats::from_categories(&categories);
        assert_eq!(stats.total_checks, 6);
        assert_eq!(stats.passed, 2);
        assert_eq!(stats.warnings, 2);
        assert_eq!(stats.failed, 0);
    }
}
