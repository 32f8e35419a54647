//! Keyword catalog: the static tables every checker reads.
//!
//! Built-in tables back `KeywordCatalog::default()`. A JSON file with the same
//! shape can replace them at startup; after that the catalog is shared behind
//! an `Arc` and never mutated.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A named, ordered list of keywords. Order is preserved in findings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordGroup {
    pub name: String,
    pub keywords: Vec<String>,
}

impl KeywordGroup {
    fn from_static(name: &str, keywords: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordCatalog {
    /// Headings counted by the confidence estimator.
    pub resume_headings: Vec<String>,
    /// Section name → heading keywords (lowercase).
    pub sections: Vec<KeywordGroup>,
    pub action_verbs: Vec<KeywordGroup>,
    pub weak_phrases: Vec<String>,
    pub hard_skills: Vec<KeywordGroup>,
    pub soft_skills: Vec<KeywordGroup>,
    pub unprofessional_email_words: Vec<String>,
    pub ats_unfriendly_chars: Vec<char>,
}

impl KeywordCatalog {
    /// Loads a catalog from a JSON file. Missing fields fall back to the
    /// built-in tables.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read keyword catalog {}", path.display()))?;
        Self::from_json(&raw)
            .with_context(|| format!("Invalid keyword catalog JSON in {}", path.display()))
    }

    /// Parses a JSON catalog and lowercases every keyword table, since
    /// checkers match against lowercased text.
    pub fn from_json(raw: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(raw)?;
        Ok(catalog.normalized())
    }

    fn normalized(mut self) -> Self {
        lowercase_all(&mut self.resume_headings);
        lowercase_all(&mut self.weak_phrases);
        lowercase_all(&mut self.unprofessional_email_words);
        for group in &mut self.sections {
            group.name = group.name.trim().to_lowercase();
        }
        for group in self
            .sections
            .iter_mut()
            .chain(&mut self.action_verbs)
            .chain(&mut self.hard_skills)
            .chain(&mut self.soft_skills)
        {
            lowercase_all(&mut group.keywords);
        }
        self
    }

    /// Heading keywords for a section; empty when the catalog lacks it.
    pub fn section(&self, name: &str) -> &[String] {
        self.sections
            .iter()
            .find(|g| g.name == name)
            .map(|g| g.keywords.as_slice())
            .unwrap_or(&[])
    }

    /// Every hard and soft skill keyword, in catalog order.
    pub fn all_skill_keywords(&self) -> impl Iterator<Item = &str> {
        self.hard_skills
            .iter()
            .chain(&self.soft_skills)
            .flat_map(|g| g.keywords.iter().map(String::as_str))
    }
}

fn lowercase_all(words: &mut Vec<String>) {
    for word in words.iter_mut() {
        *word = word.trim().to_lowercase();
    }
    words.retain(|w| !w.is_empty());
}

impl Default for KeywordCatalog {
    fn default() -> Self {
        Self {
            resume_headings: to_strings(RESUME_HEADINGS),
            sections: groups(SECTION_HEADINGS),
            action_verbs: groups(ACTION_VERBS),
            weak_phrases: to_strings(WEAK_PHRASES),
            hard_skills: groups(HARD_SKILLS),
            soft_skills: groups(SOFT_SKILLS),
            unprofessional_email_words: to_strings(UNPROFESSIONAL_EMAIL_WORDS),
            ats_unfriendly_chars: ATS_UNFRIENDLY_CHARS.to_vec(),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn groups(table: &[(&str, &[&str])]) -> Vec<KeywordGroup> {
    table
        .iter()
        .map(|(name, keywords)| KeywordGroup::from_static(name, keywords))
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Built-in tables
// ────────────────────────────────────────────────────────────────────────────

const RESUME_HEADINGS: &[&str] = &[
    "experience",
    "work experience",
    "professional experience",
    "education",
    "skills",
    "technical skills",
    "summary",
    "objective",
    "certifications",
    "projects",
];

const SECTION_HEADINGS: &[(&str, &[&str])] = &[
    (
        "summary",
        &[
            "summary",
            "objective",
            "professional summary",
            "career objective",
            "career summary",
            "professional profile",
            "executive summary",
        ],
    ),
    (
        "experience",
        &[
            "experience",
            "work experience",
            "professional experience",
            "work history",
            "employment history",
            "employment",
            "relevant experience",
        ],
    ),
    (
        "education",
        &["education", "academic background", "educational background"],
    ),
    (
        "skills",
        &[
            "skills",
            "technical skills",
            "competencies",
            "proficiencies",
            "core competencies",
            "areas of expertise",
            "key skills",
        ],
    ),
    (
        "certifications",
        &["certifications", "certificates", "professional certifications"],
    ),
    (
        "projects",
        &["projects", "personal projects", "academic projects", "key projects"],
    ),
    ("awards", &["awards", "honors", "achievements"]),
    ("languages", &["languages", "language proficiency"]),
    ("volunteer", &["volunteer", "volunteering", "community service"]),
];

const ACTION_VERBS: &[(&str, &[&str])] = &[
    (
        "Leadership",
        &[
            "led", "directed", "managed", "supervised", "oversaw", "headed", "spearheaded",
            "coordinated", "mentored", "guided", "delegated", "chaired",
        ],
    ),
    (
        "Achievement",
        &[
            "achieved", "exceeded", "surpassed", "earned", "attained", "accomplished", "awarded",
            "won", "outperformed", "delivered",
        ],
    ),
    (
        "Technical",
        &[
            "developed", "engineered", "built", "designed", "implemented", "programmed", "coded",
            "configured", "deployed", "automated", "architected", "integrated", "debugged",
            "tested", "maintained",
        ],
    ),
    (
        "Communication",
        &[
            "presented", "authored", "published", "documented", "reported", "communicated",
            "articulated", "briefed", "advocated", "negotiated",
        ],
    ),
    (
        "Improvement",
        &[
            "improved", "enhanced", "increased", "optimized", "streamlined", "modernized",
            "accelerated", "transformed", "revamped", "upgraded", "refined", "restructured",
        ],
    ),
    (
        "Analysis",
        &[
            "analyzed", "assessed", "evaluated", "researched", "investigated", "examined",
            "audited", "forecasted", "identified", "measured", "quantified",
        ],
    ),
    (
        "Creation",
        &[
            "created", "established", "founded", "initiated", "launched", "pioneered",
            "introduced", "generated", "formulated", "devised", "invented",
        ],
    ),
    (
        "Operations",
        &[
            "executed", "administered", "facilitated", "organized", "planned", "produced",
            "processed", "consolidated", "resolved", "performed", "collaborated", "conducted",
            "trained",
        ],
    ),
];

const WEAK_PHRASES: &[&str] = &[
    "helped",
    "assisted",
    "tried",
    "worked on",
    "was responsible for",
    "responsible for",
    "duties included",
    "tasked with",
    "participated in",
    "involved in",
    "handled",
];

const HARD_SKILLS: &[(&str, &[&str])] = &[
    (
        "Programming Languages",
        &[
            "python", "java", "javascript", "typescript", "c++", "c#", "ruby", "php", "swift",
            "kotlin", "golang", "rust", "scala", "matlab",
        ],
    ),
    (
        "Web Technologies",
        &[
            "html", "css", "react", "angular", "vue", "node.js", "nodejs", "express", "django",
            "flask", "spring", "asp.net", "next.js", "tailwind", "bootstrap", "graphql",
            "rest api", "restful",
        ],
    ),
    (
        "Databases",
        &[
            "sql", "mysql", "postgresql", "mongodb", "redis", "elasticsearch", "dynamodb",
            "oracle", "firebase", "cassandra", "sqlite",
        ],
    ),
    (
        "Cloud & DevOps",
        &[
            "aws", "azure", "gcp", "google cloud", "docker", "kubernetes", "jenkins", "terraform",
            "ansible", "ci/cd", "github actions", "gitlab",
        ],
    ),
    (
        "Data & AI",
        &[
            "machine learning", "deep learning", "data analysis", "data science", "tensorflow",
            "pytorch", "pandas", "numpy", "tableau", "power bi", "nlp", "computer vision",
            "artificial intelligence", "big data", "spark", "hadoop",
        ],
    ),
    (
        "Tools & Software",
        &[
            "git", "jira", "confluence", "figma", "adobe", "photoshop", "excel", "powerpoint",
            "microsoft office", "slack", "trello", "postman", "vs code", "intellij",
        ],
    ),
    (
        "Security",
        &[
            "cybersecurity", "penetration testing", "encryption", "oauth", "ssl", "firewall",
            "siem", "vulnerability", "compliance",
        ],
    ),
    (
        "Mobile",
        &["android", "ios", "react native", "flutter", "swift", "kotlin"],
    ),
];

const SOFT_SKILLS: &[(&str, &[&str])] = &[
    (
        "Leadership",
        &[
            "leadership", "team lead", "mentorship", "delegation", "decision making",
            "strategic thinking", "vision", "coaching",
        ],
    ),
    (
        "Communication",
        &[
            "communication", "presentation", "public speaking", "writing", "negotiation",
            "interpersonal", "active listening", "storytelling",
        ],
    ),
    (
        "Problem Solving",
        &[
            "problem solving", "critical thinking", "analytical", "troubleshooting",
            "innovation", "creative thinking", "root cause analysis",
        ],
    ),
    (
        "Collaboration",
        &[
            "teamwork", "collaboration", "cross-functional", "stakeholder management",
            "partnership", "relationship building", "conflict resolution",
        ],
    ),
    (
        "Management",
        &[
            "project management", "time management", "agile", "scrum", "kanban",
            "resource management", "risk management", "budget management", "planning",
        ],
    ),
    (
        "Adaptability",
        &[
            "adaptability", "flexibility", "fast learner", "quick learner", "self-motivated",
            "proactive", "detail-oriented", "multitasking",
        ],
    ),
];

const UNPROFESSIONAL_EMAIL_WORDS: &[&str] = &[
    "cute", "hot", "sexy", "babe", "cool", "princess", "prince", "love", "angel", "devil", "420",
    "69", "xxx", "gamer", "ninja", "swag", "yolo",
];

const ATS_UNFRIENDLY_CHARS: &[char] = &[
    '\u{2022}', '\u{25cf}', '\u{25aa}', '\u{25a0}', '\u{2192}', '\u{2190}', '\u{2605}', '\u{2606}',
    '\u{2713}', '\u{2717}', '\u{25b6}', '\u{25c0}', '\u{2764}', '\u{2603}', '\u{263a}',
];
