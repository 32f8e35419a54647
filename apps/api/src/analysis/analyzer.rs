use std::sync::Arc;

use tracing::{debug, info};

use crate::analysis::aggregate::aggregate;
use crate::analysis::catalog::KeywordCatalog;
use crate::analysis::checkers::{default_checkers, Checker};
use crate::analysis::confidence::estimate_confidence;
use crate::analysis::document::{Document, FileKind};
use crate::analysis::models::{AnalysisResult, CategoryResult, SummaryStats};
use crate::analysis::tips::generate_tips;
use crate::analysis::verdict::select_verdict;

/// Runs the checker registry over one document and assembles the report.
///
/// Holds only immutable data, so one instance is shared by every request.
pub struct Analyzer {
    catalog: Arc<KeywordCatalog>,
    checkers: Vec<Box<dyn Checker>>,
}

impl Analyzer {
    pub fn new(catalog: Arc<KeywordCatalog>) -> Self {
        Self::with_checkers(catalog, default_checkers())
    }

    pub fn with_checkers(catalog: Arc<KeywordCatalog>, checkers: Vec<Box<dyn Checker>>) -> Self {
        Self { catalog, checkers }
    }

    pub fn catalog(&self) -> &KeywordCatalog {
        &self.catalog
    }

    /// `page_count` of 0 is treated as a single page.
    pub fn analyze(&self, text: &str, page_count: u32, file_kind: FileKind) -> AnalysisResult {
        let doc = Document::new(text, page_count.max(1), file_kind, &self.catalog);
        let confidence = estimate_confidence(&doc);

        let mut categories: Vec<CategoryResult> = self
            .checkers
            .iter()
            .map(|checker| {
                let result = CategoryResult::from_outcome(checker.category(), checker.check(&doc));
                debug!(
                    "{}: {}/{} ({} findings)",
                    result.name,
                    result.score,
                    result.max_score,
                    result.findings.len()
                );
                result
            })
            .collect();

        let totals = aggregate(&mut categories, confidence);
        info!(
            "Analysis complete: confidence={:.2}, raw={}, overall={}",
            confidence, totals.raw_overall, totals.overall_score
        );

        let verdict = select_verdict(confidence, totals.overall_score).to_string();
        let tips = generate_tips(&categories, totals.overall_score);
        let summary_stats = SummaryStats::from_categories(&categories);

        AnalysisResult {
            overall_score: totals.overall_score,
            verdict,
            categories,
            tips,
            summary_stats,
            score_breakdown: totals.breakdown,
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(Arc::new(KeywordCatalog::default()))
    }
}
