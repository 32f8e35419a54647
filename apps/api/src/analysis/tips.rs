//! Prioritized improvement tips derived from category percentages.

use crate::analysis::checkers::Category;
use crate::analysis::models::{CategoryResult, Priority, Tip};

const MAX_TIPS: usize = 8;

/// Overall score at which the "already doing well" tips apply.
const STRONG_OVERALL: u32 = 80;

struct TipRule {
    category: Category,
    /// A tip fires when the category percentage is below this.
    below: u32,
    priority: Priority,
    title: &'static str,
    description: &'static str,
    impact: &'static str,
}

/// Evaluated in this order; ties within a priority keep it.
const RULES: &[TipRule] = &[
    TipRule {
        category: Category::Contact,
        below: 80,
        priority: Priority::High,
        title: "Complete Your Contact Information",
        description: "Add missing contact details. Include: professional email, phone number, LinkedIn URL, city/state, and a portfolio link if relevant.",
        impact: "ATS systems need complete contact info to create your candidate profile.",
    },
    TipRule {
        category: Category::HardSkills,
        below: 60,
        priority: Priority::High,
        title: "Add More Technical Skills",
        description: "List specific tools, technologies, and platforms you've used. Copy exact skill names from the job description.",
        impact: "ATS keyword matching relies heavily on hard skills; this is often the first filter.",
    },
    TipRule {
        category: Category::MeasurableResults,
        below: 60,
        priority: Priority::High,
        title: "Quantify Your Achievements",
        description: "Add numbers to at least half of your bullet points. Include percentages, dollar amounts, team sizes, project counts, and time saved.",
        impact: "Quantified achievements give recruiters concrete evidence of impact.",
    },
    TipRule {
        category: Category::ActionVerbs,
        below: 70,
        priority: Priority::Medium,
        title: "Strengthen Your Language",
        description: "Start every bullet point with a powerful action verb. Use: Developed, Implemented, Led, Designed, Optimized, Achieved, Spearheaded.",
        impact: "Action verbs signal initiative and impact to both ATS and human reviewers.",
    },
    TipRule {
        category: Category::Sections,
        below: 80,
        priority: Priority::Medium,
        title: "Add Missing Sections",
        description: "Ensure you have Summary/Objective, Experience, Education, and Skills at minimum. Add Certifications, Projects, or Awards as bonus sections.",
        impact: "Standard sections help ATS categorize your information correctly.",
    },
    TipRule {
        category: Category::Readability,
        below: 70,
        priority: Priority::Medium,
        title: "Improve Readability",
        description: "Shorten long sentences (aim for 10–20 words). Break dense paragraphs into bullet points. Use clear, professional language.",
        impact: "Recruiters skim resumes in seconds; clear formatting catches their eye.",
    },
    TipRule {
        category: Category::Formatting,
        below: 70,
        priority: Priority::Medium,
        title: "Optimize Your Formatting",
        description: "Use consistent bullet points, proper date formats (e.g., 'Jan 2023 – Present'), and keep the resume to 1–2 pages.",
        impact: "Proper formatting ensures ATS can parse all your information accurately.",
    },
    TipRule {
        category: Category::WorkExperience,
        below: 70,
        priority: Priority::High,
        title: "Strengthen Your Work Experience Section",
        description: "Add clear job titles, full company names, and proper date ranges (e.g., 'Jan 2022 – Mar 2024'). Each position needs a title, company, dates, and bullet points.",
        impact: "ATS systems build your career timeline from dates and company names; missing info means broken parsing.",
    },
    TipRule {
        category: Category::Education,
        below: 60,
        priority: Priority::Medium,
        title: "Complete Your Education Details",
        description: "Include degree type (Bachelor's, Master's), field of study, university name, and graduation year. Add GPA if 3.0+ or any academic honors.",
        impact: "Many ATS filters require specific degree levels; missing education data can auto-reject your application.",
    },
    TipRule {
        category: Category::AtsCompatibility,
        below: 80,
        priority: Priority::Medium,
        title: "Improve ATS Compatibility",
        description: "Use a single-column layout, avoid tables/images, use standard section headings, and save as PDF or DOCX.",
        impact: "Documents an ATS cannot parse are often rejected before a human sees them.",
    },
];

impl TipRule {
    fn to_tip(&self) -> Tip {
        Tip {
            priority: self.priority,
            title: self.title.to_string(),
            description: self.description.to_string(),
            impact: self.impact.to_string(),
        }
    }
}

/// Builds the tip list from dampened category percentages. A category absent
/// from `categories` counts as 100%.
pub fn generate_tips(categories: &[CategoryResult], overall_score: u32) -> Vec<Tip> {
    let percentage = |category: Category| {
        categories
            .iter()
            .find(|c| c.category == Some(category))
            .map_or(100, |c| c.percentage)
    };

    let mut tips: Vec<Tip> = RULES
        .iter()
        .filter(|rule| percentage(rule.category) < rule.below)
        .map(TipRule::to_tip)
        .collect();

    if overall_score >= STRONG_OVERALL {
        if tips.len() < 2 {
            tips.push(Tip {
                priority: Priority::Low,
                title: "Tailor for Each Application".to_string(),
                description: "Your resume is well-optimized! To maximize results, customize keywords for each job by mirroring the exact phrases from the job description.".to_string(),
                impact: "Tailored resumes are far more likely to get past ATS screening.".to_string(),
            });
        }
        tips.push(Tip {
            priority: Priority::Low,
            title: "Keep Your Resume Updated".to_string(),
            description: "Update your resume every 3–6 months with new achievements, skills, and metrics. Even small updates keep it fresh.".to_string(),
            impact: "Regularly updated resumes reflect continuous growth to recruiters.".to_string(),
        });
    }

    // `sort_by_key` is stable, so generation order survives within a tier.
    tips.sort_by_key(|t| t.priority);
    tips.truncate(MAX_TIPS);
    tips
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::CheckOutcome;

    fn with_percentages(entries: &[(Category, u32)]) -> Vec<CategoryResult> {
        entries
            .iter()
            .map(|&(category, pct)| {
                let mut result = CategoryResult::from_outcome(
                    category,
                    CheckOutcome {
                        score: 0.0,
                        max_score: 10.0,
                        findings: Vec::new(),
                    },
                );
                result.percentage = pct;
                result
            })
            .collect()
    }

    fn titles(tips: &[Tip]) -> Vec<&str> {
        tips.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn test_strong_resume_gets_only_low_tips() {
        let tips = generate_tips(&with_percentages(&[(Category::Contact, 100)]), 90);
        assert_eq!(
            titles(&tips),
            vec!["Tailor for Each Application", "Keep Your Resume Updated"]
        );
        assert!(tips.iter().all(|t| t.priority == Priority::Low));
    }

    #[test]
    fn test_high_priority_sorted_before_medium() {
        let categories = with_percentages(&[
            (Category::Contact, 100),
            (Category::ActionVerbs, 50),
            (Category::WorkExperience, 50),
        ]);
        let tips = generate_tips(&categories, 60);
        assert_eq!(
            titles(&tips),
            vec!["Strengthen Your Work Experience Section", "Strengthen Your Language"]
        );
    }

    #[test]
    fn test_threshold_is_strict() {
        let tips = generate_tips(&with_percentages(&[(Category::Contact, 80)]), 50);
        assert!(tips.is_empty());
        let tips = generate_tips(&with_percentages(&[(Category::Contact, 79)]), 50);
        assert_eq!(titles(&tips), vec!["Complete Your Contact Information"]);
    }

    #[test]
    fn test_all_failing_truncates_to_eight_keeping_high_first() {
        let all = [
            Category::Contact,
            Category::Sections,
            Category::WorkExperience,
            Category::Education,
            Category::Formatting,
            Category::AtsCompatibility,
            Category::ActionVerbs,
            Category::MeasurableResults,
            Category::HardSkills,
            Category::Readability,
        ];
        let entries: Vec<(Category, u32)> = all.iter().map(|&c| (c, 0)).collect();
        let tips = generate_tips(&with_percentages(&entries), 0);
        assert_eq!(tips.len(), 8);
        assert_eq!(
            titles(&tips)[..4],
            [
                "Complete Your Contact Information",
                "Add More Technical Skills",
                "Quantify Your Achievements",
                "Strengthen Your Work Experience Section",
            ]
        );
        // Two of the six medium tips are cut; the survivors keep rule order.
        assert_eq!(
            titles(&tips)[4..],
            [
                "Strengthen Your Language",
                "Add Missing Sections",
                "Improve Readability",
                "Optimize Your Formatting",
            ]
        );
    }

    #[test]
    fn test_missing_category_counts_as_full_marks() {
        let tips = generate_tips(&[], 50);
        assert!(tips.is_empty());
    }
}
