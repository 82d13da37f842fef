//! Render Plan
//!
//! Pure helpers that decide what the sections render and in which order:
//! list blocks with their divider boundary, in-page anchors, and the
//! outbound links. Nothing here depends on the theme.

use crate::models::{Contact, Project};

/// One display block of a list section
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block<'a, T> {
    pub item: &'a T,
    /// Dividers go between blocks, never after the last one
    pub divider_after: bool,
}

/// Blocks in insertion order; no sorting or filtering
pub fn blocks<T>(items: &[T]) -> Vec<Block<'_, T>> {
    let last = items.len().saturating_sub(1);
    items
        .iter()
        .enumerate()
        .map(|(index, item)| Block {
            item,
            divider_after: index != last,
        })
        .collect()
}

/// Spacing of a project article; the bottom border is the divider
pub const fn article_layout(divider_after: bool) -> &'static str {
    if divider_after {
        "pb-12 border-b"
    } else {
        "pb-12"
    }
}

/// Sections reachable from the header navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Projects,
    Skills,
    Contact,
}

pub const NAV_SECTIONS: [Section; 3] = [Section::Projects, Section::Skills, Section::Contact];

impl Section {
    /// Element id of the section
    pub const fn anchor(self) -> &'static str {
        match self {
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    pub const fn href(self) -> &'static str {
        match self {
            Section::Projects => "#projects",
            Section::Skills => "#skills",
            Section::Contact => "#contact",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }
}

/// Inline SVG icon shown next to a link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    ExternalLink,
    Mail,
    LinkedIn,
    GitHub,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutboundLink {
    pub label: String,
    /// Passed to the anchor as-is
    pub href: String,
    pub icon: IconKind,
    /// Opens in a new tab with `rel="noopener noreferrer"`
    pub external: bool,
}

/// The "Live" demo link of a project card
pub fn project_link(project: &Project) -> OutboundLink {
    OutboundLink {
        label: "Live".to_string(),
        href: project.live_url.clone(),
        icon: IconKind::ExternalLink,
        external: true,
    }
}

/// Mail, LinkedIn and GitHub links, in display order
pub fn contact_links(contact: &Contact) -> Vec<OutboundLink> {
    vec![
        OutboundLink {
            label: contact.email.clone(),
            href: format!("mailto:{}", contact.email),
            icon: IconKind::Mail,
            external: false,
        },
        OutboundLink {
            label: "LinkedIn".to_string(),
            href: contact.linkedin_url.clone(),
            icon: IconKind::LinkedIn,
            external: true,
        },
        OutboundLink {
            label: "GitHub".to_string(),
            href: contact.github_url.clone(),
            icon: IconKind::GitHub,
            external: true,
        },
    ]
}
