//! Text extraction: an uploaded PDF or DOCX becomes plain text plus a page
//! count for the analysis engine.
//!
//! `AppState` holds an `Arc<dyn TextExtractor>`; `LocalExtractor` is the
//! default in-process backend. Parsing runs on the blocking pool and a parser
//! panic surfaces as `ExtractionError::Worker`.

pub mod docx;
pub mod pdf;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

use crate::analysis::document::FileKind;

/// Plain text and page count recovered from one upload.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedDocument {
    pub text: String,
    pub page_count: u32,
}

impl ExtractedDocument {
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Could not read PDF: {0}")]
    Pdf(String),

    #[error("Could not read DOCX: {0}")]
    Docx(String),

    #[error("Could not extract text. The file may be image-based; use a text-based resume.")]
    NoText,

    #[error("Extraction worker failed: {0}")]
    Worker(String),
}

#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(
        &self,
        bytes: Bytes,
        kind: FileKind,
    ) -> Result<ExtractedDocument, ExtractionError>;
}

/// Decompressed `document.xml` allowed per byte of upload.
const DOCX_EXPANSION_FACTOR: usize = 20;

/// In-process extraction: `lopdf` + `pdf-extract` for PDF, the zip container
/// for DOCX.
pub struct LocalExtractor {
    max_docx_xml_bytes: usize,
}

impl LocalExtractor {
    /// DOCX bodies may expand to `DOCX_EXPANSION_FACTOR` times the upload limit.
    pub fn new(max_upload_bytes: usize) -> Self {
        Self {
            max_docx_xml_bytes: max_upload_bytes.saturating_mul(DOCX_EXPANSION_FACTOR),
        }
    }
}

#[async_trait]
impl TextExtractor for LocalExtractor {
    async fn extract(
        &self,
        bytes: Bytes,
        kind: FileKind,
    ) -> Result<ExtractedDocument, ExtractionError> {
        let max_docx_xml_bytes = self.max_docx_xml_bytes;
        tokio::task::spawn_blocking(move || match kind {
            FileKind::Pdf => pdf::extract(&bytes),
            FileKind::Docx => docx::extract(&bytes, max_docx_xml_bytes),
        })
        .await
        .map_err(|e| ExtractionError::Worker(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_local_extractor_rejects_garbage_pdf() {
        let err = LocalExtractor::new(1024)
            .extract(Bytes::from_static(b"definitely not a pdf"), FileKind::Pdf)
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Pdf(_)));
    }

    #[tokio::test]
    async fn test_local_extractor_reads_docx() {
        let bytes = docx::tests::build_docx(&["Jane Doe", "Software Engineer"]);
        let doc = LocalExtractor::new(1024 * 1024)
            .extract(Bytes::from(bytes), FileKind::Docx)
            .await
            .unwrap();
        assert_eq!(doc.text, "Jane Doe\nSoftware Engineer");
        assert_eq!(doc.page_count, 1);
        assert_eq!(doc.word_count(), 4);
    }

    #[tokio::test]
    async fn test_docx_expansion_is_bounded_by_upload_limit() {
        let long = vec!["word"; 500].join(" ");
        let bytes = docx::tests::build_docx(&[long.as_str()]);
        // 100 * 20 = 2000 bytes of XML allowed; the body alone is ~2500.
        let err = LocalExtractor::new(100)
            .extract(Bytes::from(bytes), FileKind::Docx)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("expands beyond 2000 bytes"));
    }

    #[test]
    fn test_has_text() {
        let blank = ExtractedDocument {
            text: " \n\t ".to_string(),
            page_count: 1,
        };
        assert!(!blank.has_text());
    }
}
