//! The two-state theme model and its persisted wire form.

use std::fmt;

/// Visual theme of the page. Exactly two modes exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// String name used as the persisted value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a persisted value. Anything unrecognized (corrupt, foreign,
    /// empty) falls back to the light default, same as an absent value.
    pub fn parse(s: &str) -> Self {
        match s {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// Body class the page styling keys off of. The two classes are
    /// mutually exclusive.
    pub fn css_class(&self) -> &'static str {
        match self {
            Theme::Light => "light-mode",
            Theme::Dark => "dark-mode",
        }
    }

    /// Toggle-control glyph. Shows the theme a click would switch *to*,
    /// not the current one: moon while light, sun while dark.
    pub fn glyph(&self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀",
        }
    }

    /// The other theme. A click always moves here.
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
