//! Portfolio App
//!
//! The page view: owns the theme state and assembles the sections.

use leptos::prelude::*;
use leptos_theme::ThemeState;

use crate::components::{
    ContactSection, EducationSection, IntroSection, ProjectsSection, SiteFooter, SiteHeader,
    SkillsSection,
};
use crate::context::ThemeContext;
use crate::models::Portfolio;
use crate::theme::Region;

#[component]
pub fn App(portfolio: &'static Portfolio) -> impl IntoView {
    // Theme lives as long as this view; nothing is persisted
    let theme = ThemeContext::new(ThemeState::default());
    provide_context(theme);

    view! {
        <div
            class=theme.class(Region::Background, "min-h-screen")
            data-theme=move || theme.theme().as_str()
        >
            <SiteHeader name=portfolio.profile.name.as_str() />
            <main>
                <IntroSection profile=&portfolio.profile />
                <ProjectsSection projects=&portfolio.projects />
                <SkillsSection skills=&portfolio.skills />
                <EducationSection education=&portfolio.education />
                <ContactSection contact=&portfolio.contact />
            </main>
            <SiteFooter text=portfolio.footer.as_str() />
        </div>
    }
}
