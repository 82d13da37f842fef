//! Leptos Theme Utilities
//!
//! Two-valued light/dark theme state and the signal pair that owns it.
//! The toggle is synchronous: readers observe the new value on the next
//! render pass, never an intermediate one.

use leptos::prelude::*;

/// Theme variant
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeState {
    #[default]
    Dark,
    Light,
}

impl ThemeState {
    /// Both variants, dark first.
    pub const ALL: [ThemeState; 2] = [ThemeState::Dark, ThemeState::Light];

    /// The other variant. Applying it twice yields the original value.
    pub const fn toggled(self) -> Self {
        match self {
            ThemeState::Dark => ThemeState::Light,
            ThemeState::Light => ThemeState::Dark,
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, ThemeState::Dark)
    }

    /// Lowercase name, usable as a `data-theme` attribute value.
    pub const fn as_str(self) -> &'static str {
        match self {
            ThemeState::Dark => "dark",
            ThemeState::Light => "light",
        }
    }

    /// Label for a toggle button: names the theme the button switches to.
    pub const fn switch_label(self) -> &'static str {
        match self {
            ThemeState::Dark => "Light",
            ThemeState::Light => "Dark",
        }
    }
}

/// Theme state signals
#[derive(Clone, Copy)]
pub struct ThemeSignals {
    pub theme_read: ReadSignal<ThemeState>,
    pub theme_write: WriteSignal<ThemeState>,
}

pub fn create_theme_signals(initial: ThemeState) -> ThemeSignals {
    let (theme_read, theme_write) = signal(initial);
    ThemeSignals {
        theme_read,
        theme_write,
    }
}

/// Flip the theme. The only writer of the signal.
pub fn toggle_theme(signals: &ThemeSignals) {
    signals.theme_write.update(|theme| *theme = theme.toggled());
}

/// Read the theme without subscribing the caller.
pub fn current_theme(signals: &ThemeSignals) -> ThemeState {
    signals.theme_read.get_untracked()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(ThemeState::default(), ThemeState::Dark);
        assert!(ThemeState::default().is_dark());
    }

    #[test]
    fn test_toggled_is_involution() {
        for theme in ThemeState::ALL {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn test_switch_label_names_target_theme() {
        assert_eq!(ThemeState::Dark.switch_label(), "Light");
        assert_eq!(ThemeState::Light.switch_label(), "Dark");
        assert_eq!(ThemeState::Dark.as_str(), "dark");
        assert_eq!(ThemeState::Light.as_str(), "light");
    }

    #[test]
    fn test_toggle_theme_signal() {
        let owner = Owner::new();
        owner.set();

        let signals = create_theme_signals(ThemeState::default());
        assert_eq!(current_theme(&signals), ThemeState::Dark);

        toggle_theme(&signals);
        assert_eq!(current_theme(&signals), ThemeState::Light);

        toggle_theme(&signals);
        assert_eq!(current_theme(&signals), ThemeState::Dark);
    }
}
