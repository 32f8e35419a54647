//! Layout and structure: length, bullets, dates, line length, capitalization.

use lazy_static::lazy_static;
use regex::Regex;

use crate::analysis::checkers::{Category, Checker, Scorecard};
use crate::analysis::confidence::BULLET_GLYPHS;
use crate::analysis::document::Document;
use crate::analysis::models::CheckOutcome;

const MAX_SCORE: f64 = 13.0;

/// Plain-text bullet markers accepted on top of the typographic glyphs.
const ASCII_BULLETS: &[char] = &['-', '*'];

const LONG_LINE_CHARS: usize = 120;

lazy_static! {
    static ref YEAR: Regex = Regex::new(r"\b(?:19|20)\d{2}\b").unwrap();
    static ref MONTH: Regex = Regex::new(
        r"(?i)\b(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|jun(?:e)?|jul(?:y)?|aug(?:ust)?|sep(?:tember)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\b"
    )
    .unwrap();
    static ref OPEN_END: Regex = Regex::new(r"(?i)present|current|ongoing").unwrap();
}

pub struct FormattingChecker;

impl Checker for FormattingChecker {
    fn category(&self) -> Category {
        Category::Formatting
    }

    fn max_score(&self) -> f64 {
        MAX_SCORE
    }

    fn check(&self, doc: &Document<'_>) -> CheckOutcome {
        let mut card = Scorecard::new(MAX_SCORE);
        let lines: Vec<&str> = doc.non_empty_lines().map(str::trim).collect();

        match doc.page_count.max(1) {
            1 => {
                card.award(2.0).pass("Single-page resume; ideal for most positions");
            }
            2 => {
                card.award(2.0)
                    .pass("Two-page resume; acceptable for experienced professionals");
            }
            n => {
                card.award(0.5).warn(format!(
                    "{n}-page resume detected; keep it to 1–2 pages unless you have 10+ years of experience"
                ));
            }
        }

        check_word_count(doc.text.split_whitespace().count(), &mut card);
        check_bullets(&lines, &mut card);
        check_dates(doc.text, &mut card);

        let long_lines = lines
            .iter()
            .filter(|l| l.chars().count() > LONG_LINE_CHARS)
            .count();
        if long_lines as f64 > lines.len() as f64 * 0.3 {
            card.award(0.5).warn(format!(
                "{long_lines} very long lines detected; break up dense paragraphs into shorter bullet points"
            ));
        } else {
            card.award(1.5)
                .pass("Content has good line-length distribution; readable for both ATS and humans");
        }

        let caps_lines = lines
            .iter()
            .filter(|l| l.chars().count() > 3 && is_all_caps(l))
            .count();
        if caps_lines > 6 {
            card.warn(format!(
                "Excessive ALL CAPS text ({caps_lines} lines); use title case for headings instead"
            ));
        } else if caps_lines > 0 {
            card.award(0.5)
                .pass("Appropriate use of capitalization for section headings");
        } else {
            card.info("No capitalized section headings detected");
        }

        card.finish()
    }
}

fn check_word_count(words: usize, card: &mut Scorecard) {
    match words {
        400..=800 => {
            card.award(2.0).pass(format!(
                "Optimal word count: {words} words (ideal range: 400–800)"
            ));
        }
        300..=399 => {
            card.award(1.5).warn(format!(
                "Slightly short ({words} words); aim for 400–800 words to provide enough detail"
            ));
        }
        801..=1100 => {
            card.award(1.5).warn(format!(
                "Slightly long ({words} words); consider trimming less relevant details"
            ));
        }
        0..=299 => {
            card.award(0.5).fail(format!(
                "Too short ({words} words); your resume needs more content to be competitive"
            ));
        }
        _ => {
            card.award(0.5).fail(format!(
                "Too long ({words} words); recruiters spend seconds on the initial scan, be concise"
            ));
        }
    }
}

fn check_bullets(lines: &[&str], card: &mut Scorecard) {
    let bullets = lines
        .iter()
        .filter(|l| {
            l.chars()
                .next()
                .is_some_and(|c| BULLET_GLYPHS.contains(&c) || ASCII_BULLETS.contains(&c))
        })
        .count();
    let ratio = bullets as f64 / lines.len().max(1) as f64;

    if ratio > 0.2 {
        card.award(3.0).pass(format!(
            "Excellent bullet point usage ({bullets} bullet lines, {}% of content)",
            (ratio * 100.0).round()
        ));
    } else if ratio > 0.1 {
        card.award(2.0).pass(format!(
            "Good bullet usage ({bullets} bullets); could add a few more for readability"
        ));
    } else if ratio > 0.03 {
        card.award(1.0).warn(format!(
            "Limited bullet points ({bullets} found); restructure experience as bullet points for better ATS parsing"
        ));
    } else {
        card.fail("Almost no bullet points; ATS systems and recruiters strongly prefer bulleted experience");
    }
}

fn check_dates(text: &str, card: &mut Scorecard) {
    let years = YEAR.find_iter(text).count();
    let months = MONTH.find_iter(text).count();

    if years > 0 && months > 0 {
        let mut message =
            format!("Proper date formatting ({years} years, {months} months detected)");
        if OPEN_END.is_match(text) {
            message.push_str("; current position marked 'Present'");
        }
        card.award(3.0).pass(message);
    } else if years > 0 {
        card.award(2.0).warn(format!(
            "Year dates found ({years}) but no month names; use 'Jan 2023 – Present' format for best ATS parsing"
        ));
    } else {
        card.fail("No date information detected; add employment and education dates (e.g., 'Sep 2021 – Jun 2024')");
    }
}

/// At least one uppercase letter and no lowercase ones.
fn is_all_caps(line: &str) -> bool {
    line.chars().any(char::is_uppercase) && !line.chars().any(char::is_lowercase)
}
