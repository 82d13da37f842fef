//! Intro Section Component

use leptos::prelude::*;

use crate::context::use_theme;
use crate::models::Profile;
use crate::theme::{Region, Tone};

#[component]
pub fn IntroSection(profile: &'static Profile) -> impl IntoView {
    let theme = use_theme();

    view! {
        <section class="max-w-4xl mx-auto px-6 py-16">
            <div class="mb-8">
                <h2 class="text-3xl font-bold mb-4">{profile.headline.as_str()}</h2>
                {profile.bio.iter().map(move |paragraph| view! {
                    <p class=theme.tone(Region::Background, Tone::Soft, "text-lg leading-relaxed mb-4")>{paragraph.as_str()}</p>
                }).collect_view()}
            </div>
        </section>
    }
}
