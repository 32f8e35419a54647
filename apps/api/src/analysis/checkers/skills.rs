//! Hard (technical) skills across the catalog's skill domains.

use crate::analysis::checkers::{Category, Checker, Scorecard};
use crate::analysis::document::{contains_term, Document};
use crate::analysis::models::CheckOutcome;

const MAX_SCORE: f64 = 12.0;

pub struct HardSkillsChecker;

impl Checker for HardSkillsChecker {
    fn category(&self) -> Category {
        Category::HardSkills
    }

    fn max_score(&self) -> f64 {
        MAX_SCORE
    }

    fn check(&self, doc: &Document<'_>) -> CheckOutcome {
        let mut card = Scorecard::new(MAX_SCORE);
        let groups = &doc.catalog.hard_skills;

        let found: Vec<(&str, Vec<&str>)> = groups
            .iter()
            .filter_map(|group| {
                let matched: Vec<&str> = group
                    .keywords
                    .iter()
                    .map(String::as_str)
                    .filter(|skill| contains_term(&doc.lower, &skill.to_lowercase()))
                    .collect();
                (!matched.is_empty()).then_some((group.name.as_str(), matched))
            })
            .collect();

        // A skill listed under two domains is still one skill.
        let mut distinct: Vec<&str> = found.iter().flat_map(|(_, s)| s.iter().copied()).collect();
        distinct.sort_unstable();
        distinct.dedup();
        let skills = distinct.len();
        let domains = found.len();

        if skills >= 12 {
            card.set_score(12.0).pass(format!(
                "Excellent hard skill coverage; {skills} technical skills across {domains} categories"
            ));
        } else if skills >= 8 {
            card.set_score(10.0).pass(format!(
                "Strong technical skills; {skills} hard skills detected in {domains} categories"
            ));
        } else if skills >= 5 {
            card.set_score(7.0).warn(format!(
                "Decent technical skills ({skills}); add more relevant skills from job descriptions"
            ));
        } else if skills >= 2 {
            card.set_score(4.0).warn(format!(
                "Limited hard skills ({skills}); technical skills are crucial for ATS filtering"
            ));
        } else {
            card.fail("Very few technical skills detected; ATS systems heavily weight hard skills for filtering");
        }

        for (name, matched) in &found {
            card.info(format!("{name}: {}", matched.join(", ")));
        }

        let missing: Vec<&str> = groups
            .iter()
            .map(|g| g.name.as_str())
            .filter(|name| !found.iter().any(|(f, _)| f == name))
            .take(4)
            .collect();
        if !missing.is_empty() {
            card.info(format!("Categories not represented: {}", missing.join(", ")));
        }

        card.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::checkers::test_support::run;
    use crate::analysis::models::FindingKind;

    #[test]
    fn test_broad_skill_set() {
        let text = "Skills: Python, Rust, TypeScript, React, Django, PostgreSQL, Redis, \
                    AWS, Docker, Kubernetes, Terraform, Git, Jira, Figma";
        let outcome = run(&HardSkillsChecker, text);
        assert_eq!(outcome.score, 12.0);
        assert!(outcome.findings[0].message.contains("14 technical skills across 5 categories"));
        assert_eq!(
            outcome.findings[1].message,
            "Programming Languages: python, typescript, rust"
        );
        assert_eq!(
            outcome.findings.last().unwrap().message,
            "Categories not represented: Data & AI, Security, Mobile"
        );
    }

    #[test]
    fn test_shared_skill_counts_once() {
        let outcome = run(&HardSkillsChecker, "Swift and Kotlin developer");
        assert_eq!(outcome.score, 4.0);
        assert!(outcome.findings[0].message.contains("(2)"));
        assert_eq!(outcome.findings[2].message, "Mobile: swift, kotlin");
    }

    #[test]
    fn test_substrings_do_not_count() {
        let outcome = run(&HardSkillsChecker, "JavaScript and MySQL");
        assert_eq!(
            outcome.findings[1].message,
            "Programming Languages: javascript"
        );
        assert_eq!(outcome.findings[2].message, "Databases: mysql");
    }

    #[test]
    fn test_no_skills() {
        let outcome = run(&HardSkillsChecker, "I like long walks");
        assert_eq!(outcome.score, 0.0);
        assert_eq!(outcome.findings[0].kind, FindingKind::Fail);
        assert_eq!(
            outcome.findings[1].message,
            "Categories not represented: Programming Languages, Web Technologies, Databases, Cloud & DevOps"
        );
    }
}
