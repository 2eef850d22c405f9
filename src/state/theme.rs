#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Presentation theme for the site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a persisted preference. Only the exact strings `"light"` and
    /// `"dark"` count; anything else means "no explicit preference".
    pub fn from_stored(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Storage value and `color-scheme` string for this theme.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite theme.
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    fn from_os(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

/// Theme resolution state.
///
/// `resolved` starts false and becomes true exactly once per session, when
/// the startup lookup (storage, then OS preference) completes. The document
/// and storage are only written once `resolved` is true, so the wrong theme
/// never flashes before the lookup finishes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub theme: Theme,
    pub resolved: bool,
}

impl ThemeState {
    /// Startup transition: adopt an explicit stored preference when present,
    /// otherwise infer from the OS dark-mode signal. Later calls are no-ops;
    /// a session resolves exactly once.
    pub fn resolve(&mut self, stored: Option<Theme>, os_prefers_dark: bool) {
        if self.resolved {
            return;
        }
        self.theme = stored.unwrap_or_else(|| Theme::from_os(os_prefers_dark));
        self.resolved = true;
    }

    /// Force-set the theme.
    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Flip light <-> dark.
    pub fn toggle(&mut self) {
        self.theme = self.theme.flipped();
    }

    /// OS preference change while mounted: an explicit stored preference
    /// wins; without one, follow the OS live.
    pub fn on_os_preference_change(&mut self, stored: Option<Theme>, os_prefers_dark: bool) {
        if stored.is_some() {
            return;
        }
        self.theme = Theme::from_os(os_prefers_dark);
    }
}
