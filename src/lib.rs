//! # themepref
//!
//! Client-side theme preference: persist a color-scheme name, and set the
//! `--primary-color` / `--accent-color` CSS variables for it on the page.
//!
//! The core is plain Rust and runs anywhere. With the `hydrate` feature the
//! crate compiles to a WASM module whose `web` entry points drive the
//! browser's `localStorage` and `<html>` element.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`manager`] | [`manager::ThemePreferenceManager`]: `apply`, `change`, `initialize` |
//! | [`theme`] | Theme names, color pairs, and the shipped palettes |
//! | [`config`] | JSON configuration and validation |
//! | [`color`] | CSS hex color parsing |
//! | [`store`] | Preference storage seam (`localStorage` in the browser) |
//! | [`style`] | Style variable seam (`<html>` inline style in the browser) |
//! | [`picker`] | Optional on-page theme picker control |
//! | [`error`] | Backend failure type |

pub mod color;
pub mod config;
pub mod error;
pub mod manager;
pub mod picker;
pub mod store;
pub mod style;
pub mod theme;
#[cfg(feature = "hydrate")]
pub mod web;

pub use config::{ConfigError, ThemeConfig};
pub use error::BackendError;
pub use manager::{ApplyOutcome, DocumentState, Lifecycle, ThemePreferenceManager};
pub use theme::{Palette, ThemeName, ThemeStyle, ThemeVariant};
