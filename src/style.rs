//! Document-wide styling variables.

use std::collections::BTreeMap;

use crate::error::BackendError;

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

/// CSS custom property holding a theme's primary color.
pub const PRIMARY_VAR: &str = "--primary-color";
/// CSS custom property holding a theme's accent color.
pub const ACCENT_VAR: &str = "--accent-color";

/// Somewhere named style variables can be written.
pub trait StyleSink {
    /// Set the custom property `name` to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Style`] when the property cannot be set.
    fn set_variable(&mut self, name: &str, value: &str) -> Result<(), BackendError>;

    /// Current value of `name`, `None` when it is not set.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Style`] when the property cannot be read.
    fn variable(&self, name: &str) -> Result<Option<String>, BackendError>;

    /// Unset the custom property `name`.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Style`] when the property cannot be removed.
    fn remove_variable(&mut self, name: &str) -> Result<(), BackendError>;
}

/// Records variables in memory. Used by tests and headless hosts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStyle {
    variables: BTreeMap<String, String>,
}

impl MemoryStyle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    pub fn variables(&self) -> &BTreeMap<String, String> {
        &self.variables
    }
}

impl StyleSink for MemoryStyle {
    fn set_variable(&mut self, name: &str, value: &str) -> Result<(), BackendError> {
        self.variables.insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn variable(&self, name: &str) -> Result<Option<String>, BackendError> {
        Ok(self.variables.get(name).cloned())
    }

    fn remove_variable(&mut self, name: &str) -> Result<(), BackendError> {
        self.variables.remove(name);
        Ok(())
    }
}

/// Inline style of `document.documentElement` (the `<html>` element).
#[cfg(feature = "hydrate")]
pub struct DocumentRootStyle {
    style: web_sys::CssStyleDeclaration,
}

#[cfg(feature = "hydrate")]
impl DocumentRootStyle {
    /// Bind to the current document's root element.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Unavailable`] when there is no document or its
    /// root is not an HTML element.
    pub fn open() -> Result<Self, BackendError> {
        use wasm_bindgen::JsCast;

        let unavailable = BackendError::Unavailable { backend: "document root element" };
        let Some(root) = web_sys::window().and_then(|w| w.document()).and_then(|doc| doc.document_element()) else {
            return Err(unavailable);
        };
        match root.dyn_into::<web_sys::HtmlElement>() {
            Ok(root) => Ok(Self { style: root.style() }),
            Err(_) => Err(unavailable),
        }
    }
}

#[cfg(feature = "hydrate")]
impl StyleSink for DocumentRootStyle {
    fn set_variable(&mut self, name: &str, value: &str) -> Result<(), BackendError> {
        self.style
            .set_property(name, value)
            .map_err(|err| style_error(name, &err))
    }

    fn variable(&self, name: &str) -> Result<Option<String>, BackendError> {
        let value = self.style.get_property_value(name).map_err(|err| style_error(name, &err))?;
        Ok(Some(value).filter(|v| !v.is_empty()))
    }

    fn remove_variable(&mut self, name: &str) -> Result<(), BackendError> {
        self.style.remove_property(name).map_err(|err| style_error(name, &err))?;
        Ok(())
    }
}

#[cfg(feature = "hydrate")]
fn style_error(property: &str, err: &wasm_bindgen::JsValue) -> BackendError {
    BackendError::Style { property: property.to_owned(), message: crate::web::describe(err) }
}
