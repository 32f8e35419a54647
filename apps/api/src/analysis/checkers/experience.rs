//! Work experience: date ranges, career span, job titles, employers, current
//! role and work location.

use lazy_static::lazy_static;
use regex::Regex;

use crate::analysis::checkers::{Category, Checker, Scorecard};
use crate::analysis::document::{push_unique, truncate_chars, Document};
use crate::analysis::models::CheckOutcome;

const MAX_SCORE: f64 = 12.0;

const MONTH: &str = r"(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|jun(?:e)?|jul(?:y)?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)";
const YEAR: &str = r"(?:19|20)\d{2}";
const OPEN_END: &str = r"present|current|now|ongoing";

lazy_static! {
    static ref FULL_RANGE: Regex = Regex::new(&format!(
        r"(?i)\b{MONTH}\.?\s*{YEAR}\s*[–\-—to]+\s*(?:{MONTH}\.?\s*{YEAR}|{OPEN_END})"
    ))
    .unwrap();
    static ref YEAR_RANGE: Regex = Regex::new(&format!(
        r"(?i)\b{YEAR}\s*[–\-—to]+\s*(?:{YEAR}|{OPEN_END})\b"
    ))
    .unwrap();
    static ref YEAR_MENTION: Regex = Regex::new(&format!(r"\b{YEAR}\b")).unwrap();
    static ref JOB_TITLE: Regex = Regex::new(
        r"(?i)\b(?:software engineer|web developer|data scientist|product manager|project manager|frontend developer|backend developer|full[- ]stack developer|devops engineer|ui/?ux designer|graphic designer|business analyst|data analyst|data engineer|machine learning engineer|cloud engineer|qa engineer|systems engineer|marketing manager|sales manager|operations manager|hr manager|account manager|cto|ceo|cfo|coo|vp of\s+\w+|vice president|team lead|tech lead|senior\s+\w+\s+\w+|junior\s+\w+|lead\s+\w+|principal\s+\w+|staff\s+\w+|head of\s+\w+|director of\s+\w+)\b"
    )
    .unwrap();
    static ref COMPANY: Regex = Regex::new(
        r"(?i)\b\w[\w \t&]{1,30}(?:Inc\.?|LLC|Ltd\.?|Corp\.?|Corporation|Company|Co\.|Technologies|Solutions|Services|Group|Labs|Studio|Consulting|Partners|Enterprises|Systems|Software|Digital|Media|Agency|Foundation|Institute)\b"
    )
    .unwrap();
    static ref CURRENT_ROLE: Regex = Regex::new(r"(?i)\b(?:present|current|ongoing)\b").unwrap();
    static ref WORK_LOCATION: Regex =
        Regex::new(r"\b[A-Z][a-z]+,\s*[A-Z]{2}\b|(?i:\b(?:remote|hybrid|on-?site)\b)").unwrap();
}

pub struct ExperienceChecker;

impl Checker for ExperienceChecker {
    fn category(&self) -> Category {
        Category::WorkExperience
    }

    fn max_score(&self) -> f64 {
        MAX_SCORE
    }

    fn check(&self, doc: &Document<'_>) -> CheckOutcome {
        let mut card = Scorecard::new(MAX_SCORE);

        check_date_ranges(doc.text, &mut card);
        check_career_span(doc.text, &mut card);
        check_titles(doc.text, &mut card);
        check_companies(doc.text, &mut card);

        if CURRENT_ROLE.is_match(doc.text) {
            card.award(1.0)
                .pass("Current position indicated ('Present'); ATS understands you are currently employed");
        } else {
            card.info("No 'Present' date found; if currently employed, mark your latest role as '... – Present'");
        }

        let mut locations = Vec::new();
        for m in WORK_LOCATION.find_iter(doc.text).take(4) {
            push_unique(&mut locations, m.as_str().trim().to_string());
        }
        if locations.is_empty() {
            card.info("No work location listed; add a city/state or Remote next to each role");
        } else {
            card.award(0.5)
                .pass(format!("Work location(s) detected: {}", locations.join(", ")));
        }

        card.finish()
    }
}

fn check_date_ranges(text: &str, card: &mut Scorecard) {
    let full: Vec<(usize, usize)> = FULL_RANGE
        .find_iter(text)
        .map(|m| (m.start(), m.end()))
        .collect();
    // A year-only range inside a month range ("Jan 2020 – Present") is the
    // same range, not a second one.
    let year_only = YEAR_RANGE
        .find_iter(text)
        .filter(|m| !full.iter().any(|&(s, e)| m.start() < e && s < m.end()))
        .count();
    let total = full.len() + year_only;

    if full.len() >= 2 {
        card.award(3.0).pass(format!(
            "{} proper date ranges found (Month Year – Month Year), ideal for ATS",
            full.len()
        ));
    } else if total >= 2 {
        card.award(2.0).warn(format!(
            "{total} date ranges found but some lack month names; use 'Jan 2022 – Mar 2024' format"
        ));
    } else if total == 1 {
        card.award(1.0)
            .warn("Only 1 date range found; add start and end dates for every position");
    } else {
        card.fail("No employment date ranges detected; ATS needs dates to build your work timeline");
    }
}

fn check_career_span(text: &str, card: &mut Scorecard) {
    let mut years: Vec<u32> = YEAR_MENTION
        .find_iter(text)
        .filter_map(|m| m.as_str().parse().ok())
        .collect();
    years.sort_unstable();
    years.dedup();

    match (years.first(), years.last()) {
        (Some(&first), Some(&last)) if years.len() >= 3 => {
            card.award(1.5).pass(format!(
                "Career spans {} years ({first}–{last})",
                last - first
            ));
        }
        (Some(_), _) => {
            let listed: Vec<String> = years.iter().map(u32::to_string).collect();
            card.info(format!("Year(s) found: {}", listed.join(", ")));
        }
        _ => {
            card.info("No years found; career length cannot be determined");
        }
    }
}

fn check_titles(text: &str, card: &mut Scorecard) {
    let mut titles = Vec::new();
    for m in JOB_TITLE.find_iter(text) {
        push_unique(&mut titles, m.as_str().trim().to_lowercase());
    }

    if titles.len() >= 3 {
        card.award(3.0).pass(format!(
            "Clear job titles detected ({}): {}",
            titles.len(),
            titles.iter().take(6).cloned().collect::<Vec<_>>().join(", ")
        ));
    } else if !titles.is_empty() {
        card.award(1.5).warn(format!(
            "Job title(s) found: {}; ensure each position has a clear title",
            titles.join(", ")
        ));
    } else {
        card.fail("No recognizable job titles; use standard titles like 'Software Engineer' or 'Project Manager'");
    }
}

fn check_companies(text: &str, card: &mut Scorecard) {
    let mut companies = Vec::new();
    for m in COMPANY.find_iter(text) {
        push_unique(&mut companies, m.as_str().trim().to_string());
    }

    match companies.len() {
        0 => {
            card.fail("No clear company names detected; list full company names (e.g., 'Google LLC', 'Acme Technologies')");
        }
        1 => {
            card.award(1.5).warn(format!(
                "1 company found: {}; make sure all employers are clearly listed",
                truncate_chars(&companies[0], 40)
            ));
        }
        n => {
            let names: Vec<&str> = companies
                .iter()
                .take(5)
                .map(|c| truncate_chars(c, 40))
                .collect();
            card.award(2.5)
                .pass(format!("Companies identified ({n}): {}", names.join(", ")));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::checkers::test_support::{kinds, run};
    use crate::analysis::models::FindingKind;

    const STRONG: &str = "Senior Software Engineer\nAcme Technologies | Austin, TX\n\
                          Jan 2021 – Present\n\
                          Software Engineer\nGlobex Solutions | Remote\n\
                          Jun 2018 – Dec 2020\n\
                          Web Developer\nInitech LLC\nMar 2016 - May 2018";

    #[test]
    fn test_strong_history_scores_near_max() {
        let outcome = run(&ExperienceChecker, STRONG);
        assert_eq!(outcome.findings[0].kind, FindingKind::Pass);
        assert!(outcome.findings[0].message.starts_with("3 proper date ranges"));
        assert_eq!(outcome.findings[1].message, "Career spans 5 years (2016–2021)");
        assert_eq!(outcome.findings[2].kind, FindingKind::Pass);
        assert_eq!(outcome.findings[3].kind, FindingKind::Pass);
        assert_eq!(outcome.findings[4].kind, FindingKind::Pass);
        assert_eq!(outcome.findings[5].kind, FindingKind::Pass);
        assert_eq!(outcome.score, 11.5);
    }

    #[test]
    fn test_year_only_ranges_get_partial_credit() {
        let outcome = run(&ExperienceChecker, "Acme 2015 - 2018\nGlobex 2018 - 2020");
        assert_eq!(outcome.findings[0].kind, FindingKind::Warning);
        assert!(outcome.findings[0].message.starts_with("2 date ranges"));
    }

    #[test]
    fn test_month_range_to_present_counts_once() {
        let outcome = run(&ExperienceChecker, "Jan 2020 – Present");
        assert_eq!(
            outcome.findings[0].message,
            "Only 1 date range found; add start and end dates for every position"
        );
    }

    #[test]
    fn test_nothing_found() {
        let outcome = run(&ExperienceChecker, "hello there");
        assert_eq!(outcome.score, 0.0);
        assert_eq!(
            kinds(&outcome),
            vec![
                FindingKind::Fail,
                FindingKind::Info,
                FindingKind::Fail,
                FindingKind::Fail,
                FindingKind::Info,
                FindingKind::Info,
            ]
        );
    }

    #[test]
    fn test_titles_are_deduplicated() {
        let outcome = run(&ExperienceChecker, "Data Analyst\ndata analyst\nDATA ANALYST");
        assert_eq!(
            outcome.findings[2].message,
            "Job title(s) found: data analyst; ensure each position has a clear title"
        );
    }
}
