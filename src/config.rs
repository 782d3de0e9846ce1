//! Theme configuration parsed from an optional JSON document.
//!
//! Every field is optional. Absent fields come from the selected
//! [`ThemeVariant`]; `themes` entries extend or override its palette.
//!
//! ```json
//! {
//!   "variant": "classic",
//!   "storage_key": "themeColor",
//!   "picker_id": "themePicker",
//!   "default_theme": "blue",
//!   "themes": { "purple": { "primary": "#800080", "accent": "#4b0082" } }
//! }
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::color::is_hex_color;
use crate::theme::{Palette, ThemeName, ThemeStyle, ThemeVariant};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_STORAGE_KEY: &str = "themeColor";
pub const DEFAULT_PICKER_ID: &str = "themePicker";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid theme config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("theme config field {field} must not be empty")]
    EmptyField { field: &'static str },
    #[error("theme {theme:?} has invalid {field} color {value:?}")]
    InvalidColor { theme: String, field: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    pub variant: ThemeVariant,
    pub storage_key: String,
    pub picker_id: String,
    pub default_theme: ThemeName,
    pub palette: Palette,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::for_variant(ThemeVariant::default())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigDocument {
    variant: ThemeVariant,
    storage_key: Option<String>,
    picker_id: Option<String>,
    default_theme: Option<ThemeName>,
    themes: BTreeMap<String, ThemeStyle>,
}

impl ThemeConfig {
    /// Stock configuration for one of the shipped palettes.
    #[must_use]
    pub fn for_variant(variant: ThemeVariant) -> Self {
        Self {
            variant,
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            picker_id: DEFAULT_PICKER_ID.to_owned(),
            default_theme: variant.default_theme(),
            palette: variant.palette(),
        }
    }

    /// Parse and validate a JSON config document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on malformed JSON, unknown fields, empty
    /// identifiers, or palette colors that are not CSS hex colors.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let doc: ConfigDocument = serde_json::from_str(raw)?;
        let mut config = Self::for_variant(doc.variant);
        if let Some(key) = doc.storage_key {
            config.storage_key = key;
        }
        if let Some(id) = doc.picker_id {
            config.picker_id = id;
        }
        if let Some(theme) = doc.default_theme {
            config.default_theme = theme;
        }
        for (name, style) in doc.themes {
            config.palette.insert(ThemeName::from(name), style);
        }
        config.validate()?;
        Ok(config)
    }

    /// Configuration for a page, given the text of its optional config element.
    ///
    /// No element means the stock default. A document that fails to parse is
    /// logged and also falls back to the default, so the page still themes.
    #[must_use]
    pub fn from_page_json(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring page theme config: {err}");
                Self::default()
            }
        }
    }

    /// Check identifiers are non-empty and every palette color parses.
    ///
    /// A default theme with no palette entry is allowed: it is stored and
    /// shown in the picker but leaves the page styling alone.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyField { field: "storage_key" });
        }
        if self.picker_id.trim().is_empty() {
            return Err(ConfigError::EmptyField { field: "picker_id" });
        }
        if self.default_theme.as_str().trim().is_empty() {
            return Err(ConfigError::EmptyField { field: "default_theme" });
        }
        for (name, style) in self.palette.iter() {
            if name.as_str().is_empty() {
                return Err(ConfigError::EmptyField { field: "themes" });
            }
            for (field, value) in [("primary", &style.primary), ("accent", &style.accent)] {
                if !is_hex_color(value) {
                    return Err(ConfigError::InvalidColor {
                        theme: name.to_string(),
                        field,
                        value: value.clone(),
                    });
                }
            }
        }
        if !self.palette.contains(self.default_theme.as_str()) {
            log::warn!("default theme {:?} has no palette entry; it will not restyle the page", self.default_theme.as_str());
        }
        Ok(())
    }
}
