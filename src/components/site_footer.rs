//! Site Footer Component

use leptos::prelude::*;

use crate::context::use_theme;
use crate::theme::{Region, Tone};

#[component]
pub fn SiteFooter(text: &'static str) -> impl IntoView {
    let theme = use_theme();

    view! {
        <footer class=theme.class(Region::Header, "border-t py-6")>
            <div class="max-w-4xl mx-auto px-6">
                <p class=theme.tone(Region::MutedText, Tone::Soft, "text-sm text-center")>{text}</p>
            </div>
        </footer>
    }
}
