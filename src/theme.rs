//! Theme names, color pairs, and the palette lookup table.
//!
//! A [`Palette`] maps each recognized [`ThemeName`] to a [`ThemeStyle`].
//! Names outside the table are still valid preferences; they just have no
//! styling rule, so applying them changes nothing on the page.
//!
//! Two palettes ship with the crate ([`ThemeVariant`]). They agree on blue
//! and orange and differ on green and on which theme a fresh visitor gets.

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// A color-scheme identifier as stored in the preference store.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeName(String);

impl ThemeName {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ThemeName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ThemeName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The `(primary, accent)` color pair for a theme.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeStyle {
    pub primary: String,
    pub accent: String,
}

impl ThemeStyle {
    #[must_use]
    pub fn new(primary: impl Into<String>, accent: impl Into<String>) -> Self {
        Self { primary: primary.into(), accent: accent.into() }
    }
}

/// Ordered lookup table from theme name to style.
///
/// Order is insertion order; hosts use it to list picker options.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<(ThemeName, ThemeStyle)>,
}

impl Palette {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a theme, replacing the style in place if the name already exists.
    pub fn insert(&mut self, name: ThemeName, style: ThemeStyle) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = style,
            None => self.entries.push((name, style)),
        }
    }

    #[must_use]
    pub fn with(mut self, name: &str, primary: &str, accent: &str) -> Self {
        self.insert(ThemeName::from(name), ThemeStyle::new(primary, accent));
        self
    }

    /// Style for `name`, or `None` if the palette has no rule for it.
    pub fn lookup(&self, name: &str) -> Option<&ThemeStyle> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate.as_str() == name)
            .map(|(_, style)| style)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &ThemeName> {
        self.entries.iter().map(|(name, _)| name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ThemeName, &ThemeStyle)> {
        self.entries.iter().map(|(name, style)| (name, style))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Which shipped palette (and default theme) a page uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    /// Bright green palette; new visitors start on blue.
    Classic,
    /// Dark green palette; new visitors start on green.
    #[default]
    Forest,
}

impl ThemeVariant {
    #[must_use]
    pub fn palette(self) -> Palette {
        let shared = Palette::new()
            .with("blue", "#00aaff", "#0077cc")
            .with("orange", "#ff6600", "#cc5200");
        match self {
            Self::Classic => shared.with("green", "#66cc33", "#4d9926"),
            Self::Forest => shared.with("green", "#123524", "#17442eff"),
        }
    }

    #[must_use]
    pub fn default_theme(self) -> ThemeName {
        match self {
            Self::Classic => ThemeName::from("blue"),
            Self::Forest => ThemeName::from("green"),
        }
    }
}
