//! Project Card Component
//!
//! One project block: title with its live link, summary, technical notes,
//! lessons learned and technology pills.

use leptos::prelude::*;

use crate::components::LinkAnchor;
use crate::context::use_theme;
use crate::layout::{article_layout, project_link};
use crate::models::Project;
use crate::theme::{Region, Tone};

#[component]
pub fn ProjectCard(
    project: &'static Project,
    /// Draw the bottom border separating this card from the next one
    divider_after: bool,
) -> impl IntoView {
    let theme = use_theme();

    view! {
        <article class=theme.class(Region::Divider, article_layout(divider_after))>
            <div class="flex justify-between items-start mb-3">
                <h4 class="text-xl font-semibold">{project.title.as_str()}</h4>
                <LinkAnchor
                    link=project_link(project)
                    layout="flex items-center gap-1 text-sm"
                    icon_size=14
                />
            </div>

            <p class=theme.tone(Region::Background, Tone::Soft, "mb-4")>{project.description.as_str()}</p>

            <div class="mb-4">
                <h5 class=theme.class(Region::MutedText, "text-sm font-semibold mb-2")>"Technical Details"</h5>
                <p class=theme.class(Region::MutedText, "text-sm leading-relaxed")>
                    {project.technical_details.as_str()}
                </p>
            </div>

            <div class="mb-4">
                <h5 class=theme.class(Region::MutedText, "text-sm font-semibold mb-2")>"What I Learned"</h5>
                <p class=theme.class(Region::MutedText, "text-sm leading-relaxed")>
                    {project.lessons_learned.as_str()}
                </p>
            </div>

            <div class="flex flex-wrap gap-2">
                {project.technologies.iter().map(move |tech| view! {
                    <span class=theme.class(Region::TagPill, "text-xs px-2 py-1 rounded")>
                        {tech.as_str()}
                    </span>
                }).collect_view()}
            </div>
        </article>
    }
}
