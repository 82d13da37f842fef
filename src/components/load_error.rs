//! Content Load Error View

use leptos::prelude::*;

/// Shown instead of the page when the embedded content cannot be loaded
#[component]
pub fn LoadError(message: String) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-900 text-gray-100 flex items-center justify-center">
            <p class="text-sm text-red-400">{format!("Unable to load page content: {}", message)}</p>
        </div>
    }
}
