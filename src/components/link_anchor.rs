//! Outbound Link Component

use leptos::prelude::*;

use crate::components::Icon;
use crate::context::use_theme;
use crate::layout::OutboundLink;
use crate::theme::Region;

/// Themed anchor with a leading icon
///
/// The href is rendered exactly as given; only the color follows the theme.
#[component]
pub fn LinkAnchor(
    link: OutboundLink,
    /// Layout classes placed before the themed link color
    layout: &'static str,
    #[prop(default = 16)] icon_size: u32,
) -> impl IntoView {
    let theme = use_theme();
    let (target, rel) = if link.external {
        (Some("_blank"), Some("noopener noreferrer"))
    } else {
        (None, None)
    };

    view! {
        <a href=link.href target=target rel=rel class=theme.class(Region::Link, layout)>
            <Icon kind=link.icon size=icon_size />
            {link.label}
        </a>
    }
}
