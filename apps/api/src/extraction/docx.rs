//! DOCX text from `word/document.xml`.
//!
//! Only the main document part is read. Paragraphs become lines, `<w:tab/>`
//! becomes a tab and `<w:br/>`/`<w:cr/>` a line break. DOCX carries no
//! reliable page count, so pages are estimated from the word count.

use std::io::{Cursor, Read};

use lazy_static::lazy_static;
use regex::Regex;

use crate::extraction::{ExtractedDocument, ExtractionError};

const DOCUMENT_PART: &str = "word/document.xml";

/// Words per page used for the page estimate.
const WORDS_PER_PAGE: usize = 450;

lazy_static! {
    static ref TOKEN: Regex = Regex::new(
        r"<w:t(?:\s[^>]*)?>(?P<text>[^<]*)</w:t>|<w:t\s*/>|(?P<tab><w:tab\s*/>)|(?P<br><w:(?:br|cr)(?:\s[^>]*)?/>)|(?P<para></w:p>|<w:p\s*/>)"
    )
    .unwrap();
}

/// `max_xml_bytes` caps the decompressed size of the document part.
pub fn extract(bytes: &[u8], max_xml_bytes: usize) -> Result<ExtractedDocument, ExtractionError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractionError::Docx(e.to_string()))?;
    let entry = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ExtractionError::Docx(format!("{DOCUMENT_PART}: {e}")))?;

    let mut raw = Vec::new();
    entry
        .take(max_xml_bytes as u64 + 1)
        .read_to_end(&mut raw)
        .map_err(|e| ExtractionError::Docx(e.to_string()))?;
    if raw.len() > max_xml_bytes {
        return Err(ExtractionError::Docx(format!(
            "{DOCUMENT_PART} expands beyond {max_xml_bytes} bytes"
        )));
    }
    let xml = String::from_utf8(raw).map_err(|e| ExtractionError::Docx(e.to_string()))?;

    let text = document_text(&xml);
    let page_count = (text.split_whitespace().count() / WORDS_PER_PAGE).max(1) as u32;
    Ok(ExtractedDocument { text, page_count })
}

/// Flattens WordprocessingML runs into plain text.
fn document_text(xml: &str) -> String {
    let mut text = String::new();
    for caps in TOKEN.captures_iter(xml) {
        if let Some(run) = caps.name("text") {
            text.push_str(&decode_entities(run.as_str()));
        } else if caps.name("tab").is_some() {
            text.push('\t');
        } else if caps.name("br").is_some() || caps.name("para").is_some() {
            text.push('\n');
        }
    }
    text.truncate(text.trim_end_matches('\n').len());
    text
}

fn decode_entities(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let decoded = tail
            .find(';')
            .and_then(|semi| decode_entity(&tail[1..semi]).map(|c| (c, semi)));
        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &tail[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let code = name.strip_prefix('#')?;
            let value = match code.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse().ok()?,
            };
            char::from_u32(value)
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::io::Write;

    use zip::write::FileOptions;

    use super::*;

    const LIMIT: usize = 1024 * 1024;

    /// A minimal DOCX whose body has one paragraph per entry.
    pub(crate) fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
        let body: String = paragraphs
            .iter()
            .map(|p| format!("<w:p><w:r><w:t xml:space=\"preserve\">{p}</w:t></w:r></w:p>"))
            .collect();
        build_docx_xml(&body)
    }

    pub(crate) fn build_docx_xml(body: &str) -> Vec<u8> {
        let xml = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
             <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
             <w:body>{body}</w:body></w:document>"
        );
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("[Content_Types].xml", FileOptions::default())
            .unwrap();
        writer.write_all(b"<Types/>").unwrap();
        writer
            .start_file(DOCUMENT_PART, FileOptions::default())
            .unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_paragraphs_become_lines() {
        let doc = extract(&build_docx(&["Experience", "Acme Corp"]), LIMIT).unwrap();
        assert_eq!(doc.text, "Experience\nAcme Corp");
    }

    #[test]
    fn test_runs_tabs_and_breaks() {
        let body = "<w:p><w:pPr><w:tabs><w:tab w:val=\"left\" w:pos=\"720\"/></w:tabs></w:pPr>\
                    <w:r><w:t>Acme</w:t></w:r><w:r><w:tab/><w:t>2020</w:t></w:r>\
                    <w:r><w:br/><w:t>Line two</w:t></w:r></w:p><w:p/>\
                    <w:p><w:r><w:t>R&amp;D &#8211; Q&#x26;A</w:t></w:r></w:p>";
        let doc = extract(&build_docx_xml(body), LIMIT).unwrap();
        assert_eq!(doc.text, "Acme\t2020\nLine two\n\nR&D – Q&A");
    }

    #[test]
    fn test_page_estimate_from_word_count() {
        let long = vec!["word"; 1000].join(" ");
        let doc = extract(&build_docx(&[long.as_str()]), LIMIT).unwrap();
        assert_eq!(doc.page_count, 2);

        let short = extract(&build_docx(&["one"]), LIMIT).unwrap();
        assert_eq!(short.page_count, 1);
    }

    #[test]
    fn test_document_part_size_is_capped() {
        let long = vec!["word"; 2000].join(" ");
        let bytes = build_docx(&[long.as_str()]);
        let err = extract(&bytes, 4096).unwrap_err();
        assert!(err.to_string().contains("expands beyond 4096 bytes"));
        assert!(extract(&bytes, LIMIT).is_ok());
    }

    #[test]
    fn test_not_a_zip() {
        let err = extract(b"PK? nope", LIMIT).unwrap_err();
        assert!(matches!(err, ExtractionError::Docx(_)));
    }

    #[test]
    fn test_zip_without_document_part() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("readme.txt", FileOptions::default())
            .unwrap();
        writer.write_all(b"hello").unwrap();
        let bytes = writer.finish().unwrap().into_inner();
        let err = extract(&bytes, LIMIT).unwrap_err();
        assert!(err.to_string().contains("word/document.xml"));
    }

    #[test]
    fn test_decode_entities_leaves_unknown_alone() {
        assert_eq!(decode_entities("a &bogus; b & c"), "a &bogus; b & c");
        assert_eq!(decode_entities("&lt;tag&gt;"), "<tag>");
    }
}
