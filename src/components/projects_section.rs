//! Projects Section Component

use leptos::prelude::*;

use crate::components::ProjectCard;
use crate::context::use_theme;
use crate::layout::{blocks, Section};
use crate::models::Project;
use crate::theme::{Region, Tone};

#[component]
pub fn ProjectsSection(projects: &'static [Project]) -> impl IntoView {
    let theme = use_theme();

    view! {
        <section id=Section::Projects.anchor() class=theme.tone(Region::Background, Tone::Band, "py-16")>
            <div class="max-w-4xl mx-auto px-6">
                <h3 class="text-2xl font-bold mb-8">"Projects"</h3>
                <div class="space-y-12">
                    {blocks(projects).into_iter().map(|block| view! {
                        <ProjectCard project=block.item divider_after=block.divider_after />
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
