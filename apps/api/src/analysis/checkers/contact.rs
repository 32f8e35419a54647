//! Contact information: email, phone, LinkedIn, GitHub/portfolio, location.
//!
//! PDF extraction frequently breaks URLs across lines or inserts spaces, so
//! link detection runs against the raw text, the whitespace-collapsed text and
//! a fully de-spaced variant before falling back to a bare keyword mention.

use lazy_static::lazy_static;
use regex::Regex;

use crate::analysis::checkers::{Category, Checker, Scorecard};
use crate::analysis::document::{has_phone_number, Document};
use crate::analysis::models::CheckOutcome;

const MAX_SCORE: f64 = 12.0;

const FREE_MAIL_DOMAINS: &[&str] = &[
    "gmail.com",
    "outlook.com",
    "yahoo.com",
    "hotmail.com",
    "protonmail.com",
];

lazy_static! {
    static ref EMAIL_SPACED: Regex =
        Regex::new(r"[a-zA-Z0-9._%+\-]+\s*@\s*[a-zA-Z0-9.\-]+\.\s*[a-zA-Z]{2,}").unwrap();
    static ref EMAIL_STRICT: Regex =
        Regex::new(r"[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}").unwrap();
    static ref LINKEDIN_URL: Regex = Regex::new(r"(?i)linkedin\.com/in/[\w\-]+").unwrap();
    static ref LINKEDIN_SPACED: Regex =
        Regex::new(r"(?i)linkedin\s*\.\s*com\s*/\s*in\s*/\s*[\w\-]+").unwrap();
    static ref LINKEDIN_SQUASHED: Regex = Regex::new(r"linkedin\.?com/?in/?[\w\-]+").unwrap();
    static ref LINKEDIN_WORD: Regex = Regex::new(r"\blinkedin\b").unwrap();
    static ref GITHUB_URL: Regex = Regex::new(r"(?i)github\.com/[\w\-]+").unwrap();
    static ref GITHUB_SPACED: Regex =
        Regex::new(r"(?i)github\s*\.\s*com\s*/\s*[\w\-]+").unwrap();
    static ref GITHUB_SQUASHED: Regex = Regex::new(r"github\.?com/?[\w\-]+").unwrap();
    static ref GITHUB_WORD: Regex = Regex::new(r"\bgithub\b").unwrap();
    static ref WEBSITE_LINK: Regex = Regex::new(r"(?i)(?:portfolio|website|http|www\.)\S+").unwrap();
    static ref WEBSITE_WORD: Regex = Regex::new(r"\b(?:portfolio|website)\b").unwrap();
    static ref LOCATION_WORD: Regex =
        Regex::new(r"\b(?:city|state|country|zip|located in|based in|remote|hybrid)\b").unwrap();
    static ref CITY_STATE: Regex = Regex::new(r"\b[A-Z][a-z]+,\s*[A-Z]{2}\b").unwrap();
    static ref CITY_COUNTRY: Regex = Regex::new(r"\b[A-Z][a-z]+,\s*[A-Z][a-z]+\b").unwrap();
}

/// How a profile link was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinkEvidence {
    Url,
    KeywordOnly,
    Missing,
}

pub struct ContactChecker;

impl Checker for ContactChecker {
    fn category(&self) -> Category {
        Category::Contact
    }

    fn max_score(&self) -> f64 {
        MAX_SCORE
    }

    fn check(&self, doc: &Document<'_>) -> CheckOutcome {
        let mut card = Scorecard::new(MAX_SCORE);
        let squashed: String = doc.lower.split_whitespace().collect();

        check_email(doc, &mut card);

        if has_phone_number(doc.text) {
            card.award(3.0).pass("Phone number detected");
        } else {
            card.fail("No phone number found; recruiters need a way to call you");
        }

        let linkedin = profile_evidence(
            doc,
            &squashed,
            &LINKEDIN_URL,
            &LINKEDIN_SPACED,
            &LINKEDIN_SQUASHED,
            &LINKEDIN_WORD,
        );
        match linkedin {
            LinkEvidence::Url => {
                card.award(2.0).pass("LinkedIn profile URL detected");
            }
            LinkEvidence::KeywordOnly => {
                card.award(2.0).pass(
                    "LinkedIn mentioned without a readable URL (the link may be hyperlinked in the original file)",
                );
            }
            LinkEvidence::Missing => {
                card.warn("No LinkedIn URL; most recruiters check LinkedIn, so add your profile link");
            }
        }

        let github = profile_evidence(
            doc,
            &squashed,
            &GITHUB_URL,
            &GITHUB_SPACED,
            &GITHUB_SQUASHED,
            &GITHUB_WORD,
        );
        let website = WEBSITE_LINK.is_match(doc.text)
            || WEBSITE_LINK.is_match(&doc.collapsed)
            || WEBSITE_WORD.is_match(&doc.lower);
        match github {
            LinkEvidence::Url => {
                card.award(2.0).pass("GitHub profile URL detected");
            }
            LinkEvidence::KeywordOnly => {
                card.award(2.0).pass(
                    "GitHub mentioned without a readable URL (the link may be hyperlinked in the original file)",
                );
            }
            LinkEvidence::Missing if website => {
                card.award(2.0).pass("Portfolio/website link detected");
            }
            LinkEvidence::Missing => {
                card.info("No portfolio or GitHub link; consider adding one to stand out");
            }
        }

        let has_location = LOCATION_WORD.is_match(&doc.lower)
            || CITY_STATE.is_match(doc.text)
            || CITY_COUNTRY.is_match(doc.text);
        if has_location {
            card.award(2.0).pass("Location information detected");
        } else {
            card.warn("No location detected; add city/state or 'Remote' since some employers filter by location");
        }

        card.finish()
    }
}

fn check_email(doc: &Document<'_>, card: &mut Scorecard) {
    let found = EMAIL_SPACED
        .find(doc.text)
        .or_else(|| EMAIL_STRICT.find(&doc.collapsed))
        .map(|m| m.as_str().split_whitespace().collect::<String>().to_lowercase());

    let Some(address) = found else {
        card.fail("No email address found; this is critical for ATS systems to contact you");
        return;
    };

    card.award(3.0);
    let (local, domain) = address.split_once('@').unwrap_or((address.as_str(), ""));
    let unprofessional = doc
        .catalog
        .unprofessional_email_words
        .iter()
        .any(|w| local.contains(w.as_str()));

    if unprofessional {
        card.warn(format!(
            "Email found ({address}) but may seem unprofessional; prefer a firstname.lastname format"
        ));
    } else if FREE_MAIL_DOMAINS.contains(&domain) {
        card.pass(format!("Professional email found: {address}"));
    } else {
        card.pass(format!("Email address found: {address}"));
    }
}

/// A readable URL in any text variant beats a bare keyword mention.
fn profile_evidence(
    doc: &Document<'_>,
    squashed: &str,
    url: &Regex,
    spaced: &Regex,
    squashed_url: &Regex,
    word: &Regex,
) -> LinkEvidence {
    let has_url = url.is_match(doc.text)
        || spaced.is_match(doc.text)
        || url.is_match(&doc.collapsed)
        || squashed_url.is_match(squashed);
    if has_url {
        LinkEvidence::Url
    } else if word.is_match(&doc.lower) {
        LinkEvidence::KeywordOnly
    } else {
        LinkEvidence::Missing
    }
}
