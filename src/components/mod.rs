//! UI Components
//!
//! Page sections and the small pieces they share.

mod icon;
mod link_anchor;
mod theme_toggle;
mod site_header;
mod intro_section;
mod project_card;
mod projects_section;
mod skills_section;
mod education_section;
mod contact_section;
mod site_footer;
mod load_error;

pub use icon::Icon;
pub use link_anchor::LinkAnchor;
pub use theme_toggle::ThemeToggle;
pub use site_header::SiteHeader;
pub use intro_section::IntroSection;
pub use project_card::ProjectCard;
pub use projects_section::ProjectsSection;
pub use skills_section::SkillsSection;
pub use education_section::EducationSection;
pub use contact_section::ContactSection;
pub use site_footer::SiteFooter;
pub use load_error::LoadError;
