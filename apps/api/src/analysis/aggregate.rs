//! Overall score and confidence dampening.

use crate::analysis::document::round1;
use crate::analysis::models::{CategoryResult, ScoreBreakdown};

/// Scale applied to the overall score and every category percentage.
///
/// | confidence | factor |
/// |------------|--------|
/// | < 0.3      | 0.4    |
/// | < 0.5      | 0.65   |
/// | < 0.7      | 0.85   |
/// | otherwise  | 1.0    |
pub fn dampening_factor(confidence: f64) -> f64 {
    if confidence < 0.3 {
        0.4
    } else if confidence < 0.5 {
        0.65
    } else if confidence < 0.7 {
        0.85
    } else {
        1.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Totals {
    /// Undampened `round(100 · Σscore / Σmax)`.
    pub raw_overall: u32,
    pub overall_score: u32,
    pub breakdown: ScoreBreakdown,
}

/// Sums category scores and applies dampening to the overall score and, in
/// place, to each category percentage.
pub fn aggregate(categories: &mut [CategoryResult], confidence: f64) -> Totals {
    let earned: f64 = categories.iter().map(|c| c.score).sum();
    let possible: f64 = categories.iter().map(|c| c.max_score).sum();
    let raw_overall = if possible > 0.0 {
        (100.0 * earned / possible).round() as u32
    } else {
        0
    };

    let factor = dampening_factor(confidence);
    let overall_score = scale(raw_overall, factor);
    if factor < 1.0 {
        for category in categories.iter_mut() {
            category.percentage = scale(category.percentage, factor);
        }
    }

    Totals {
        raw_overall,
        overall_score,
        breakdown: ScoreBreakdown {
            total_earned: round1(earned),
            total_possible: possible,
        },
    }
}

fn scale(value: u32, factor: f64) -> u32 {
    (value as f64 * factor).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::checkers::Category;
    use crate::analysis::models::CheckOutcome;

    fn category(category: Category, score: f64, max_score: f64) -> CategoryResult {
        CategoryResult::from_outcome(
            category,
            CheckOutcome {
                score,
                max_score,
                findings: Vec::new(),
            },
        )
    }

    #[test]
    fn test_dampening_tiers() {
        assert_eq!(dampening_factor(0.0), 0.4);
        assert_eq!(dampening_factor(0.29), 0.4);
        assert_eq!(dampening_factor(0.3), 0.65);
        assert_eq!(dampening_factor(0.5), 0.85);
        assert_eq!(dampening_factor(0.7), 1.0);
        assert_eq!(dampening_factor(1.0), 1.0);
    }

    #[test]
    fn test_full_confidence_is_undampened() {
        let mut categories = vec![
            category(Category::Contact, 9.0, 12.0),
            category(Category::Sections, 12.5, 15.0),
        ];
        let totals = aggregate(&mut categories, 0.9);
        // 21.5 / 27 = 79.6%
        assert_eq!(totals.raw_overall, 80);
        assert_eq!(totals.overall_score, 80);
        assert_eq!(categories[0].percentage, 75);
        assert_eq!(totals.breakdown.total_earned, 21.5);
        assert_eq!(totals.breakdown.total_possible, 27.0);
    }

    #[test]
    fn test_low_confidence_scales_overall_and_percentages() {
        let mut categories = vec![
            category(Category::Contact, 12.0, 12.0),
            category(Category::Sections, 7.5, 15.0),
        ];
        let totals = aggregate(&mut categories, 0.2);
        assert_eq!(totals.raw_overall, 72);
        assert_eq!(totals.overall_score, 29);
        assert_eq!(categories[0].percentage, 40);
        assert_eq!(categories[1].percentage, 20);
    }

    #[test]
    fn test_medium_confidence() {
        let mut categories = vec![category(Category::Education, 10.0, 10.0)];
        let totals = aggregate(&mut categories, 0.6);
        assert_eq!(totals.overall_score, 85);
        assert_eq!(categories[0].percentage, 85);
    }

    #[test]
    fn test_empty_registry() {
        let totals = aggregate(&mut [], 1.0);
        assert_eq!(totals.raw_overall, 0);
        assert_eq!(totals.breakdown.total_possible, 0.0);
    }
}
