//! Contact Section Component

use leptos::prelude::*;

use crate::components::LinkAnchor;
use crate::context::use_theme;
use crate::layout::{contact_links, Section};
use crate::models::Contact;
use crate::theme::{Region, Tone};

#[component]
pub fn ContactSection(contact: &'static Contact) -> impl IntoView {
    let theme = use_theme();

    view! {
        <section id=Section::Contact.anchor() class="py-16">
            <div class="max-w-4xl mx-auto px-6">
                <h3 class="text-2xl font-bold mb-6">"Get In Touch"</h3>
                <p class=theme.tone(Region::Background, Tone::Soft, "mb-6")>{contact.blurb.as_str()}</p>
                <div class="flex gap-6 flex-wrap">
                    {contact_links(contact).into_iter().map(|link| view! {
                        <LinkAnchor link=link layout="flex items-center gap-2" icon_size=18 />
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
