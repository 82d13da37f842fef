//! Region Styles
//!
//! Tailwind class fragments for every styled region of the page, per theme.
//! `style_for` is one exhaustive match, so a region without a style in
//! either theme fails to compile.

use leptos_theme::ThemeState;

/// Independently styled area of the page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    Header,
    Background,
    Link,
    MutedText,
    Divider,
    TagPill,
    Button,
}

impl Region {
    pub const ALL: [Region; 7] = [
        Region::Header,
        Region::Background,
        Region::Link,
        Region::MutedText,
        Region::Divider,
        Region::TagPill,
        Region::Button,
    ];
}

/// Which fragments of a descriptor a themed element uses
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    /// surface, text, border and hover
    Base,
    /// base plus the region's accent hover, for links inside a region
    Interactive,
    /// secondary surface (tinted section bands); base when the region has none
    Band,
    /// secondary text color; base when the region has none
    Soft,
}

/// Visual attributes of one (region, theme) pair
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleDescriptor {
    pub surface: &'static str,
    pub text: &'static str,
    pub border: &'static str,
    pub hover: &'static str,
    pub accent_hover: &'static str,
    pub band: &'static str,
    pub soft: &'static str,
}

impl StyleDescriptor {
    const fn new(surface: &'static str, text: &'static str, border: &'static str, hover: &'static str) -> Self {
        Self { surface, text, border, hover, accent_hover: "", band: "", soft: "" }
    }

    const fn accent_hover(mut self, accent_hover: &'static str) -> Self {
        self.accent_hover = accent_hover;
        self
    }

    const fn band(mut self, band: &'static str) -> Self {
        self.band = band;
        self
    }

    const fn soft(mut self, soft: &'static str) -> Self {
        self.soft = soft;
        self
    }

    /// Base tone: non-empty fragments joined by single spaces
    pub fn class(&self) -> String {
        join(&[self.surface, self.text, self.border, self.hover])
    }

    pub fn tone_class(&self, tone: Tone) -> String {
        match tone {
            Tone::Base => self.class(),
            Tone::Interactive => join(&[self.surface, self.text, self.border, self.hover, self.accent_hover]),
            Tone::Band if !self.band.is_empty() => self.band.to_string(),
            Tone::Soft if !self.soft.is_empty() => self.soft.to_string(),
            Tone::Band | Tone::Soft => self.class(),
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.class().is_empty()
    }
}

fn join(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

pub const fn style_for(region: Region, theme: ThemeState) -> StyleDescriptor {
    use ThemeState::{Dark, Light};

    match (region, theme) {
        (Region::Header, Dark) => StyleDescriptor::new("bg-gray-900/95", "", "border-gray-800", ""),
        (Region::Header, Light) => StyleDescriptor::new("bg-white/95", "", "border-gray-200", ""),

        (Region::Background, Dark) => StyleDescriptor::new("bg-gray-900", "text-gray-100", "", "")
            .band("bg-gray-800/30")
            .soft("text-gray-300"),
        (Region::Background, Light) => StyleDescriptor::new("bg-white", "text-gray-900", "", "")
            .band("bg-gray-50")
            .soft("text-gray-700"),

        (Region::Link, Dark) => StyleDescriptor::new("", "text-blue-400", "", "hover:text-blue-300"),
        (Region::Link, Light) => StyleDescriptor::new("", "text-blue-600", "", "hover:text-blue-700"),

        (Region::MutedText, Dark) => StyleDescriptor::new("", "text-gray-400", "", "")
            .accent_hover("hover:text-gray-200")
            .soft("text-gray-500"),
        (Region::MutedText, Light) => StyleDescriptor::new("", "text-gray-600", "", "")
            .accent_hover("hover:text-gray-900")
            .soft("text-gray-600"),

        (Region::Divider, Dark) => StyleDescriptor::new("", "", "border-gray-700", ""),
        (Region::Divider, Light) => StyleDescriptor::new("", "", "border-gray-200", ""),

        (Region::TagPill, Dark) => StyleDescriptor::new("bg-gray-700/50", "text-gray-300", "", ""),
        (Region::TagPill, Light) => StyleDescriptor::new("bg-gray-200", "text-gray-700", "", ""),

        (Region::Button, Dark) => StyleDescriptor::new("bg-gray-800", "", "", "hover:bg-gray-700"),
        (Region::Button, Light) => StyleDescriptor::new("bg-gray-100", "", "", "hover:bg-gray-200"),
    }
}

/// `static_classes` followed by the region's themed classes in `tone`
pub fn region_class(region: Region, theme: ThemeState, tone: Tone, static_classes: &str) -> String {
    let themed = style_for(region, theme).tone_class(tone);
    if static_classes.is_empty() {
        themed
    } else {
        format!("{} {}", static_classes, themed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_region_styled_in_both_themes() {
        for region in Region::ALL {
            for theme in ThemeState::ALL {
                let style = style_for(region, theme);
                assert!(!style.is_empty(), "{:?}/{:?} has no style", region, theme);
                assert!(!style.class().is_empty());
            }
        }
    }

    #[test]
    fn test_fourteen_distinct_mappings() {
        let classes: HashSet<String> = Region::ALL
            .into_iter()
            .flat_map(|r| ThemeState::ALL.into_iter().map(move |t| style_for(r, t).class()))
            .collect();
        assert_eq!(classes.len(), 14);
    }

    #[test]
    fn test_initial_theme_uses_dark_styles() {
        let theme = ThemeState::default();
        assert_eq!(style_for(Region::Background, theme).class(), "bg-gray-900 text-gray-100");
        assert_eq!(style_for(Region::Link, theme).class(), "text-blue-400 hover:text-blue-300");
    }

    #[test]
    fn test_double_toggle_restores_styles() {
        for theme in ThemeState::ALL {
            for region in Region::ALL {
                assert_eq!(style_for(region, theme.toggled().toggled()), style_for(region, theme));
                assert_ne!(style_for(region, theme.toggled()), style_for(region, theme));
            }
        }
    }

    #[test]
    fn test_class_skips_empty_fragments() {
        assert_eq!(style_for(Region::Divider, ThemeState::Light).class(), "border-gray-200");
        assert_eq!(style_for(Region::Header, ThemeState::Dark).class(), "bg-gray-900/95 border-gray-800");
    }

    #[test]
    fn test_region_class_prefixes_static_classes() {
        assert_eq!(
            region_class(Region::TagPill, ThemeState::Light, Tone::Base, "text-xs px-2 py-1 rounded"),
            "text-xs px-2 py-1 rounded bg-gray-200 text-gray-700"
        );
        assert_eq!(region_class(Region::Button, ThemeState::Dark, Tone::Base, ""), "bg-gray-800 hover:bg-gray-700");
    }

    #[test]
    fn test_section_band_and_body_text_follow_theme() {
        let dark = style_for(Region::Background, ThemeState::Dark);
        let light = style_for(Region::Background, ThemeState::Light);
        assert_eq!(dark.tone_class(Tone::Band), "bg-gray-800/30");
        assert_eq!(light.tone_class(Tone::Band), "bg-gray-50");
        assert_eq!(dark.tone_class(Tone::Soft), "text-gray-300");
        assert_eq!(light.tone_class(Tone::Soft), "text-gray-700");
    }

    #[test]
    fn test_muted_text_tones() {
        let dark = style_for(Region::MutedText, ThemeState::Dark);
        let light = style_for(Region::MutedText, ThemeState::Light);
        assert_eq!(dark.tone_class(Tone::Interactive), "text-gray-400 hover:text-gray-200");
        assert_eq!(light.tone_class(Tone::Interactive), "text-gray-600 hover:text-gray-900");
        assert_eq!(dark.tone_class(Tone::Soft), "text-gray-500");
        assert_eq!(light.tone_class(Tone::Soft), "text-gray-600");
        // plain muted text does not react to hover
        assert_eq!(dark.class(), "text-gray-400");
    }

    #[test]
    fn test_missing_tone_falls_back_to_base() {
        for theme in ThemeState::ALL {
            let pill = style_for(Region::TagPill, theme);
            assert_eq!(pill.tone_class(Tone::Band), pill.class());
            assert_eq!(pill.tone_class(Tone::Soft), pill.class());
            assert_eq!(pill.tone_class(Tone::Interactive), pill.class());
        }
    }

    #[test]
    fn test_every_tone_defined_for_every_region() {
        for region in Region::ALL {
            for theme in ThemeState::ALL {
                for tone in [Tone::Base, Tone::Interactive, Tone::Band, Tone::Soft] {
                    assert!(!style_for(region, theme).tone_class(tone).is_empty());
                }
            }
        }
    }
}
