//! The optional on-page control that shows the current theme.
//!
//! Only the value is written here. Listening for the user's selection and
//! calling back into the manager is left to the page.

use crate::error::BackendError;

#[cfg(test)]
#[path = "picker_test.rs"]
mod picker_test;

/// A control exposing a settable current value, e.g. a `<select>`.
pub trait SelectorControl {
    /// Show `value` as the control's current choice.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Picker`] if the control rejects the value.
    fn set_value(&mut self, value: &str) -> Result<(), BackendError>;
}

/// Control stand-in that remembers the last value it was given.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryPicker {
    pub value: Option<String>,
}

impl SelectorControl for MemoryPicker {
    fn set_value(&mut self, value: &str) -> Result<(), BackendError> {
        self.value = Some(value.to_owned());
        Ok(())
    }
}

/// A DOM element looked up by id whose `value` property is written.
///
/// Works for `<select>` and `<input>` alike by setting the property
/// reflectively instead of casting to a concrete element type.
#[cfg(feature = "hydrate")]
pub struct ElementPicker {
    element: web_sys::Element,
}

#[cfg(feature = "hydrate")]
impl ElementPicker {
    /// Find the element with `id`, or `None` if the page has no such element.
    pub fn find(id: &str) -> Option<Self> {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(id))
            .map(|element| Self { element })
    }
}

#[cfg(feature = "hydrate")]
impl SelectorControl for ElementPicker {
    fn set_value(&mut self, value: &str) -> Result<(), BackendError> {
        let target: &wasm_bindgen::JsValue = self.element.as_ref();
        match js_sys::Reflect::set(target, &"value".into(), &value.into()) {
            Ok(true) => Ok(()),
            Ok(false) => Err(BackendError::Picker { message: "value property is read-only".to_owned() }),
            Err(err) => Err(BackendError::Picker { message: crate::web::describe(&err) }),
        }
    }
}
