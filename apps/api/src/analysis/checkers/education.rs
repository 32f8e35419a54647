//! Education: degree, field of study, institution, graduation year, GPA or
//! honors.

use lazy_static::lazy_static;
use regex::Regex;

use crate::analysis::checkers::{Category, Checker, Scorecard};
use crate::analysis::document::{push_unique, truncate_chars, Document};
use crate::analysis::models::CheckOutcome;

const MAX_SCORE: f64 = 10.0;

/// Characters scanned for graduation years after an education heading.
const SECTION_WINDOW: usize = 800;
/// Characters scanned at the end of the document when there is no heading.
const TAIL_WINDOW: usize = 600;

lazy_static! {
    static ref DEGREES: Vec<(&'static str, Regex)> = vec![
        (
            "Doctorate/PhD",
            Regex::new(r"(?i)\b(?:ph\.?d\.?|doctorate|doctor of)").unwrap(),
        ),
        (
            "Master's",
            Regex::new(
                r"(?i)\b(?:master(?:'?s)?\s+(?:of|in|degree)|msc|mba|m\.?eng\b|m\.?tech\b|m\.?s\.?\s+in\b)"
            )
            .unwrap(),
        ),
        (
            "Bachelor's",
            Regex::new(
                r"(?i)\b(?:bachelor(?:'?s)?\s+(?:of|in|degree)|bsc|b\.?eng\b|b\.?tech\b|b\.?s\.?\s+in\b|b\.?a\.?\s+in\b)"
            )
            .unwrap(),
        ),
        (
            "Associate's",
            Regex::new(r"(?i)\bassociate(?:'?s)?\s+(?:of|in|degree)\b").unwrap(),
        ),
        (
            "Diploma",
            Regex::new(r"(?i)\bdiploma\s+(?:in|of)\b").unwrap(),
        ),
    ];
    static ref FIELD: Regex = Regex::new(
        r"(?i)\b(?:computer science|information technology|software engineering|electrical engineering|mechanical engineering|civil engineering|data science|mathematics|statistics|physics|chemistry|biology|business administration|finance|accounting|economics|marketing|communications|psychology|political science|english|history|graphic design|information systems|cybersecurity|business analytics|data analytics|data engineering|web development|mobile development|artificial intelligence|machine learning)\b"
    )
    .unwrap();
    static ref INSTITUTION: Regex = Regex::new(
        r"(?i)\b(?:university|college|institute|school|academy|polytechnic)\s+(?:of\s+)?[A-Z][\w \t,]{2,40}"
    )
    .unwrap();
    static ref NAMED_INSTITUTION: Regex = Regex::new(
        r"\b(?:MIT|Stanford|Harvard|Oxford|Cambridge|Berkeley|UCLA|NYU|Georgia Tech|Carnegie Mellon|Caltech|Princeton|Yale|Columbia|Cornell|UPenn|IIT|LUMS|NUST|FAST|COMSATS|NED|UET|GIKI|PIEAS)\b"
    )
    .unwrap();
    static ref EDUCATION_WORD: Regex =
        Regex::new(r"(?i)\b(?:education|academic|qualifications?)\b").unwrap();
    static ref YEAR: Regex = Regex::new(r"\b(?:19|20)\d{2}\b").unwrap();
    static ref GPA: Regex =
        Regex::new(r"(?i)\b(?:gpa|cgpa|grade)[:\s]*\d+\.?\d*(?:\s*/\s*\d+\.?\d*)?").unwrap();
    static ref HONORS: Regex = Regex::new(
        r"(?i)\b(?:summa cum laude|magna cum laude|cum laude|dean'?s list|honou?rs?(?:\s+(?:roll|society))?|distinction|first class|second class|merit)\b"
    )
    .unwrap();
}

pub struct EducationChecker;

impl Checker for EducationChecker {
    fn category(&self) -> Category {
        Category::Education
    }

    fn max_score(&self) -> f64 {
        MAX_SCORE
    }

    fn check(&self, doc: &Document<'_>) -> CheckOutcome {
        let mut card = Scorecard::new(MAX_SCORE);
        let text = doc.text;

        let degrees: Vec<&str> = DEGREES
            .iter()
            .filter(|(_, re)| re.is_match(text))
            .map(|(name, _)| *name)
            .collect();
        if degrees.is_empty() {
            card.fail("No degree type found; specify your degree (e.g., Bachelor of Science, Master of Arts, MBA)");
        } else {
            card.award(3.0)
                .pass(format!("Degree level detected: {}", degrees.join(", ")));
        }

        let mut fields = Vec::new();
        for m in FIELD.find_iter(text) {
            push_unique(&mut fields, m.as_str().to_lowercase());
        }
        if fields.is_empty() {
            card.warn("No field of study detected; include your major (e.g., 'BS in Computer Science')");
        } else {
            fields.truncate(3);
            card.award(2.0)
                .pass(format!("Field of study: {}", fields.join(", ")));
        }

        let mut institutions = Vec::new();
        for m in INSTITUTION.find_iter(text).chain(NAMED_INSTITUTION.find_iter(text)) {
            push_unique(
                &mut institutions,
                truncate_chars(m.as_str().trim(), 50).trim_end().to_string(),
            );
        }
        if institutions.is_empty() {
            card.warn("No institution name detected; include your university or college name");
        } else {
            institutions.truncate(3);
            card.award(2.0)
                .pass(format!("Institution(s): {}", institutions.join(", ")));
        }

        let mut years: Vec<&str> = YEAR
            .find_iter(education_window(text))
            .map(|m| m.as_str())
            .collect();
        years.sort_unstable();
        years.dedup();
        if years.is_empty() {
            card.warn("No graduation year found in the education section; add your graduation or expected graduation year");
        } else {
            card.award(1.5)
                .pass(format!("Education year(s): {}", years.join(", ")));
        }

        if let Some(gpa) = GPA.find(text) {
            card.award(1.0)
                .pass(format!("GPA listed: {}", gpa.as_str().trim()));
        } else {
            let mut honors = Vec::new();
            for m in HONORS.find_iter(text) {
                push_unique(&mut honors, m.as_str().to_lowercase());
            }
            if honors.is_empty() {
                card.info("No GPA or honors found; include GPA if 3.0+ or list academic honors");
            } else {
                card.award(1.0)
                    .pass(format!("Academic honors: {}", honors.join(", ")));
            }
        }

        card.finish()
    }
}

/// The slice searched for graduation years: the window after the first
/// education-type heading line, else the tail of the document.
fn education_window(text: &str) -> &str {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        let trimmed = line.trim();
        if trimmed.chars().count() < 50 && EDUCATION_WORD.is_match(trimmed) {
            let section = &text[offset..];
            return truncate_chars(section, SECTION_WINDOW);
        }
        offset += line.len();
    }
    suffix_chars(text, TAIL_WINDOW)
}

fn suffix_chars(s: &str, n: usize) -> &str {
    let count = s.chars().count();
    if count <= n {
        return s;
    }
    match s.char_indices().nth(count - n) {
        Some((idx, _)) => &s[idx..],
        None => s,
    }
}
