//! Theme Toggle Button

use leptos::prelude::*;

use crate::context::use_theme;
use crate::theme::Region;

/// Button labelled with the theme it switches to
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            class=theme.class(Region::Button, "text-xs px-3 py-1 rounded")
            on:click=move |_| theme.toggle()
        >
            {move || theme.theme().switch_label()}
        </button>
    }
}
