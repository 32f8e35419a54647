// Resume analysis engine.
// Pure and synchronous: text in, AnalysisResult out. No file or network access here;
// extraction lives in crate::extraction and the HTTP surface in handlers.

pub mod aggregate;
pub mod analyzer;
pub mod catalog;
pub mod checkers;
pub mod confidence;
pub mod document;
pub mod handlers;
pub mod models;
pub mod tips;
pub mod verdict;

pub use analyzer::Analyzer;
