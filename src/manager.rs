//! Theme preference manager: persist a theme choice and apply its colors.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns one manager. `initialize` runs once when the document has
//! been parsed; `change` runs on every user selection. Storage and styling
//! are injected so the same logic runs against the browser or in tests.
//!
//! TRADE-OFFS
//! ==========
//! Names without a palette entry are stored as-is and simply leave the page
//! styling alone. Store and style failures are returned to the caller; a
//! failing picker is logged and skipped since the picker is optional.

use crate::config::ThemeConfig;
use crate::error::BackendError;
use crate::picker::SelectorControl;
use crate::store::PreferenceStore;
use crate::style::{ACCENT_VAR, PRIMARY_VAR, StyleSink};
use crate::theme::ThemeName;

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

/// Whether the page-ready initialization has run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lifecycle {
    #[default]
    Uninitialized,
    Initialized,
}

/// What `apply` did to the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Both color variables were set.
    Styled,
    /// No palette entry for the name; styling untouched.
    Unrecognized,
}

/// How far the host document has been parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentState {
    Loading,
    Parsed,
}

impl DocumentState {
    /// Whether `initialize` has to wait for the document-parsed event.
    pub fn defers_initialize(self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Owns the page's theme preference: where it is stored, how it is shown,
/// and whether page-ready initialization has happened.
pub struct ThemePreferenceManager<S, T> {
    config: ThemeConfig,
    store: S,
    style: T,
    lifecycle: Lifecycle,
    current: Option<ThemeName>,
}

impl<S: PreferenceStore, T: StyleSink> ThemePreferenceManager<S, T> {
    #[must_use]
    pub fn new(config: ThemeConfig, store: S, style: T) -> Self {
        Self { config, store, style, lifecycle: Lifecycle::Uninitialized, current: None }
    }

    /// Set the color variables for `name` if the palette knows it.
    ///
    /// The pair is written primary first. If the accent write fails the
    /// previous primary is put back, so the page never shows a mixed pair.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the style sink rejects a variable.
    pub fn apply(&mut self, name: &str) -> Result<ApplyOutcome, BackendError> {
        let Some(style) = self.config.palette.lookup(name) else {
            log::debug!("theme {name:?} has no palette entry; styling unchanged");
            return Ok(ApplyOutcome::Unrecognized);
        };
        let previous_primary = self.style.variable(PRIMARY_VAR)?;
        self.style.set_variable(PRIMARY_VAR, &style.primary)?;
        if let Err(err) = self.style.set_variable(ACCENT_VAR, &style.accent) {
            let restored = match &previous_primary {
                Some(value) => self.style.set_variable(PRIMARY_VAR, value),
                None => self.style.remove_variable(PRIMARY_VAR),
            };
            if let Err(restore_err) = restored {
                log::warn!("could not restore {PRIMARY_VAR} after failed theme write: {restore_err}");
            }
            return Err(err);
        }
        log::debug!("applied theme {name:?} ({}, {})", style.primary, style.accent);
        Ok(ApplyOutcome::Styled)
    }

    /// Persist `name` as the preference, then apply it.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the store write or the styling fails. A
    /// failed write leaves styling untouched.
    pub fn change(&mut self, name: &str) -> Result<ApplyOutcome, BackendError> {
        self.store.set(&self.config.storage_key, name)?;
        self.current = Some(ThemeName::from(name));
        self.apply(name)
    }

    /// Resolve the preference, sync the picker, and apply the theme.
    ///
    /// The stored value wins; an absent or empty value falls back to the
    /// configured default. Later calls return the current theme without
    /// touching the store, picker, or styling.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the store cannot be read or styling fails.
    pub fn initialize(&mut self, picker: Option<&mut dyn SelectorControl>) -> Result<ThemeName, BackendError> {
        if let (Lifecycle::Initialized, Some(current)) = (self.lifecycle, &self.current) {
            log::debug!("theme manager already initialized with {current}");
            return Ok(current.clone());
        }

        let resolved = match self.stored_preference()? {
            Some(stored) => stored,
            None => self.config.default_theme.clone(),
        };

        if let Some(picker) = picker {
            if let Err(err) = picker.set_value(resolved.as_str()) {
                log::warn!("theme picker not updated: {err}");
            }
        }

        self.apply(resolved.as_str())?;
        self.lifecycle = Lifecycle::Initialized;
        self.current = Some(resolved.clone());
        log::debug!("theme manager initialized with {resolved}");
        Ok(resolved)
    }

    /// The persisted preference, if one was ever written.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the store cannot be read.
    pub fn stored_preference(&self) -> Result<Option<ThemeName>, BackendError> {
        let stored = self.store.get(&self.config.storage_key)?;
        Ok(stored.filter(|value| !value.is_empty()).map(ThemeName::from))
    }

    /// The theme most recently resolved or chosen, if any.
    pub fn current(&self) -> Option<&ThemeName> {
        self.current.as_ref()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn style(&self) -> &T {
        &self.style
    }
}
