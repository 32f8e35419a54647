use crate::extraction::{ExtractedDocument, ExtractionError};

/// Page count from the page tree, text from `pdf-extract`.
pub fn extract(bytes: &[u8]) -> Result<ExtractedDocument, ExtractionError> {
    let page_count = page_count(bytes)?;
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractionError::Pdf(e.to_string()))?;
    Ok(ExtractedDocument { text, page_count })
}

pub fn page_count(bytes: &[u8]) -> Result<u32, ExtractionError> {
    let document =
        lopdf::Document::load_mem(bytes).map_err(|e| ExtractionError::Pdf(e.to_string()))?;
    Ok(document.get_pages().len() as u32)
}
