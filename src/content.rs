//! Page Content
//!
//! The page text, links and lists come from `content/portfolio.json`,
//! embedded at compile time and parsed once on first access.

use std::sync::OnceLock;

use crate::models::Portfolio;

const EMBEDDED_CONTENT: &str = include_str!("../content/portfolio.json");

static CONTENT: OnceLock<Result<Portfolio, String>> = OnceLock::new();

/// Embedded content, parsed and validated on first call
pub fn portfolio() -> Result<&'static Portfolio, String> {
    CONTENT
        .get_or_init(|| parse_portfolio(EMBEDDED_CONTENT))
        .as_ref()
        .map_err(|e| e.clone())
}

/// Parse and validate a content document
pub fn parse_portfolio(json: &str) -> Result<Portfolio, String> {
    let portfolio: Portfolio =
        serde_json::from_str(json).map_err(|e| format!("invalid content: {}", e))?;
    validate(&portfolio)?;
    Ok(portfolio)
}

fn validate(portfolio: &Portfolio) -> Result<(), String> {
    require(&portfolio.profile.name, "profile name")?;

    for (i, project) in portfolio.projects.iter().enumerate() {
        require(&project.title, &format!("project #{} title", i + 1))?;
        require(&project.live_url, &format!("live url of '{}'", project.title))?;
    }

    for (i, group) in portfolio.skills.iter().enumerate() {
        require(&group.category, &format!("skill group #{} category", i + 1))?;
    }

    let contact = &portfolio.contact;
    require(&contact.email, "contact email")?;
    require(&contact.linkedin_url, "LinkedIn url")?;
    require(&contact.github_url, "GitHub url")?;
    Ok(())
}

fn require(value: &str, what: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("missing {}", what))
    } else {
        Ok(())
    }
}
