//! Education Section Component

use leptos::prelude::*;

use crate::context::use_theme;
use crate::models::Education;
use crate::theme::{Region, Tone};

/// Degrees in listed order. Renders nothing when the list is empty.
#[component]
pub fn EducationSection(education: &'static [Education]) -> impl IntoView {
    let theme = use_theme();

    (!education.is_empty()).then(move || view! {
        <section class=theme.tone(Region::Background, Tone::Band, "py-16")>
            <div class="max-w-4xl mx-auto px-6">
                <h3 class="text-2xl font-bold mb-6">"Education"</h3>
                <div class="space-y-6">
                    {education.iter().map(move |entry| view! {
                        <div>
                            <h4 class="font-semibold mb-1">{entry.degree.as_str()}</h4>
                            <p class=theme.class(Region::MutedText, "text-sm mb-2")>{entry.byline()}</p>
                            {entry.summary.as_deref().map(|summary| view! {
                                <p class=theme.class(Region::MutedText, "text-sm")>{summary}</p>
                            })}
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    })
}
