//! Content Models
//!
//! Page content records, deserialized from `content/portfolio.json`.
//! All of them are immutable once loaded; vector order is display order.

use serde::{Deserialize, Serialize};

/// Whole page content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub education: Vec<Education>,
    pub contact: Contact,
    #[serde(default)]
    pub footer: String,
}

/// Header name and intro section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    #[serde(default)]
    pub bio: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(rename = "technicalDetails")]
    pub technical_details: String,
    #[serde(rename = "lessonsLearned")]
    pub lessons_learned: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(rename = "liveUrl")]
    pub live_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    /// Graduation year or "In Progress"
    pub status: String,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub blurb: String,
    pub email: String,
    #[serde(rename = "linkedinUrl")]
    pub linkedin_url: String,
    #[serde(rename = "githubUrl")]
    pub github_url: String,
}

impl Education {
    /// "Institution | Status" line shown under the degree
    pub fn byline(&self) -> String {
        format!("{} | {}", self.institution, self.status)
    }
}
