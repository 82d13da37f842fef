//! Skills Section Component
//!
//! Skill groups in a two-column grid, each a bulleted list.

use leptos::prelude::*;

use crate::context::use_theme;
use crate::layout::{blocks, Section};
use crate::models::SkillGroup;
use crate::theme::Region;

#[component]
pub fn SkillsSection(skills: &'static [SkillGroup]) -> impl IntoView {
    let theme = use_theme();

    view! {
        <section id=Section::Skills.anchor() class="py-16">
            <div class="max-w-4xl mx-auto px-6">
                <h3 class="text-2xl font-bold mb-8">"Skills & Experience"</h3>
                <div class="grid md:grid-cols-2 gap-8">
                    {blocks(skills).into_iter().map(move |block| view! {
                        <div>
                            <h4 class="font-semibold mb-3">{block.item.category.as_str()}</h4>
                            <ul class="space-y-2">
                                {block.item.items.iter().map(move |item| view! {
                                    <li class=theme.class(Region::MutedText, "text-sm")>
                                        "• " {item.as_str()}
                                    </li>
                                }).collect_view()}
                            </ul>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
