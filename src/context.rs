//! Theme Context
//!
//! Theme signals shared with every section via the Leptos Context API.

use leptos::prelude::*;
use leptos_theme::{create_theme_signals, toggle_theme, ThemeSignals, ThemeState};

use crate::theme::{region_class, Region, Tone};

/// Theme state owned by the page view
#[derive(Clone, Copy)]
pub struct ThemeContext {
    signals: ThemeSignals,
}

impl ThemeContext {
    pub fn new(initial: ThemeState) -> Self {
        Self {
            signals: create_theme_signals(initial),
        }
    }

    /// Current theme (tracked)
    pub fn theme(&self) -> ThemeState {
        self.signals.theme_read.get()
    }

    /// Flip between dark and light
    pub fn toggle(&self) {
        toggle_theme(&self.signals);
        log_switch(self.signals.theme_read.get_untracked());
    }

    /// Reactive class for a region, after its static layout classes
    pub fn class(&self, region: Region, static_classes: &'static str) -> impl Fn() -> String + Copy + Send + Sync + 'static {
        self.tone(region, Tone::Base, static_classes)
    }

    /// Like `class`, with a secondary tone of the region
    pub fn tone(
        &self,
        region: Region,
        tone: Tone,
        static_classes: &'static str,
    ) -> impl Fn() -> String + Copy + Send + Sync + 'static {
        let theme = self.signals.theme_read;
        move || region_class(region, theme.get(), tone, static_classes)
    }
}

#[cfg(target_arch = "wasm32")]
fn log_switch(theme: ThemeState) {
    web_sys::console::log_1(&format!("[THEME] switched to {}", theme.as_str()).into());
}

#[cfg(not(target_arch = "wasm32"))]
fn log_switch(_theme: ThemeState) {}

/// Get the theme context provided by `App`
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::style_for;

    #[test]
    fn test_initial_context_renders_dark_styles() {
        let owner = Owner::new();
        owner.set();

        let theme = ThemeContext::new(ThemeState::default());
        assert_eq!(theme.theme(), ThemeState::Dark);
        for region in Region::ALL {
            let class = theme.class(region, "");
            assert_eq!(class(), style_for(region, ThemeState::Dark).class());
        }
    }

    #[test]
    fn test_class_keeps_static_layout_first() {
        let owner = Owner::new();
        owner.set();

        let theme = ThemeContext::new(ThemeState::Light);
        let class = theme.class(Region::Divider, "pb-12 border-b");
        assert_eq!(class(), "pb-12 border-b border-gray-200");
    }

    #[test]
    fn test_toggle_restyles_every_region() {
        let owner = Owner::new();
        owner.set();

        let theme = ThemeContext::new(ThemeState::default());
        let classes: Vec<_> = Region::ALL.iter().map(|r| (*r, theme.class(*r, ""))).collect();

        theme.toggle();
        assert_eq!(theme.theme(), ThemeState::Light);
        for (region, class) in &classes {
            assert_eq!(class(), style_for(*region, ThemeState::Light).class());
        }

        theme.toggle();
        assert_eq!(theme.theme(), ThemeState::Dark);
        for (region, class) in &classes {
            assert_eq!(class(), style_for(*region, ThemeState::Dark).class());
        }
    }

    #[test]
    fn test_tone_follows_toggle() {
        let owner = Owner::new();
        owner.set();

        let theme = ThemeContext::new(ThemeState::default());
        let band = theme.tone(Region::Background, Tone::Band, "py-16");
        assert_eq!(band(), "py-16 bg-gray-800/30");

        theme.toggle();
        assert_eq!(band(), "py-16 bg-gray-50");
    }
}
