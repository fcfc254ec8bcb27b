//! Line bucketing: files résumé lines under a fixed set of section categories.
//!
//! Each line is matched against `SECTION_RULES` in order; the first rule whose
//! keyword occurs in the lower-cased line wins. Unmatched lines are dropped.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionCategory {
    Qualifications,
    Experience,
    Company,
    Education,
    Skills,
}

impl SectionCategory {
    pub const ALL: [SectionCategory; 5] = [
        SectionCategory::Qualifications,
        SectionCategory::Experience,
        SectionCategory::Company,
        SectionCategory::Education,
        SectionCategory::Skills,
    ];
}

/// A keyword substring and the section it files a line under.
#[derive(Debug, Clone, Copy)]
pub struct SectionRule {
    pub keyword: &'static str,
    pub category: SectionCategory,
}

/// Priority order is the slice order. Keywords must be lower-case.
pub const SECTION_RULES: &[SectionRule] = &[
    SectionRule {
        keyword: "qualification",
        category: SectionCategory::Qualifications,
    },
    SectionRule {
        keyword: "experience",
        category: SectionCategory::Experience,
    },
    SectionRule {
        keyword: "company",
        category: SectionCategory::Company,
    },
    SectionRule {
        keyword: "education",
        category: SectionCategory::Education,
    },
    SectionRule {
        keyword: "skill",
        category: SectionCategory::Skills,
    },
];

/// Lines grouped per category, in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SectionBuckets {
    pub qualifications: Vec<String>,
    pub experience: Vec<String>,
    pub company: Vec<String>,
    pub education: Vec<String>,
    pub skills: Vec<String>,
}

impl SectionBuckets {
    pub fn get(&self, category: SectionCategory) -> &[String] {
        match category {
            SectionCategory::Qualifications => &self.qualifications,
            SectionCategory::Experience => &self.experience,
            SectionCategory::Company => &self.company,
            SectionCategory::Education => &self.education,
            SectionCategory::Skills => &self.skills,
        }
    }

    fn bucket_mut(&mut self, category: SectionCategory) -> &mut Vec<String> {
        match category {
            SectionCategory::Qualifications => &mut self.qualifications,
            SectionCategory::Experience => &mut self.experience,
            SectionCategory::Company => &mut self.company,
            SectionCategory::Education => &mut self.education,
            SectionCategory::Skills => &mut self.skills,
        }
    }

    pub fn total_lines(&self) -> usize {
        SectionCategory::ALL.iter().map(|c| self.get(*c).len()).sum()
    }
}

/// Returns the category of the first rule matching `line`, if any.
pub fn classify_line(line: &str, rules: &[SectionRule]) -> Option<SectionCategory> {
    let lower = line.to_lowercase();
    rules
        .iter()
        .find(|rule| lower.contains(rule.keyword))
        .map(|rule| rule.category)
}

pub fn bucket_lines(text: &str) -> SectionBuckets {
    bucket_lines_with(text, SECTION_RULES)
}

pub fn bucket_lines_with(text: &str, rules: &[SectionRule]) -> SectionBuckets {
    let mut buckets = SectionBuckets::default();
    for line in text.split('\n') {
        if let Some(category) = classify_line(line, rules) {
            buckets.bucket_mut(category).push(line.trim().to_string());
        }
    }
    buckets
}
