//! Site Header Component
//!
//! Sticky bar with the owner's name, in-page navigation and the theme toggle.

use leptos::prelude::*;

use crate::components::ThemeToggle;
use crate::context::use_theme;
use crate::layout::NAV_SECTIONS;
use crate::theme::{Region, Tone};

#[component]
pub fn SiteHeader(name: &'static str) -> impl IntoView {
    let theme = use_theme();

    view! {
        <header class=theme.class(Region::Header, "border-b sticky top-0 backdrop-blur-sm z-10")>
            <div class="max-w-4xl mx-auto px-6 py-4 flex justify-between items-center">
                <h1 class="font-semibold">{name}</h1>
                <nav class="flex gap-6 items-center">
                    {NAV_SECTIONS.iter().map(move |section| view! {
                        <a
                            href=section.href()
                            class=theme.tone(Region::MutedText, Tone::Interactive, "text-sm")
                        >
                            {section.label()}
                        </a>
                    }).collect_view()}
                    <ThemeToggle />
                </nav>
            </div>
        </header>
    }
}
