//! Failures reported by the browser-facing backends.
//!
//! The manager propagates store and style failures to its caller and only
//! swallows picker failures, since the picker is an optional element.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    #[error("{backend} is not available in this context")]
    Unavailable { backend: &'static str },
    #[error("preference store rejected key {key:?}: {message}")]
    Store { key: String, message: String },
    #[error("failed to set style property {property}: {message}")]
    Style { property: String, message: String },
    #[error("failed to update theme picker: {message}")]
    Picker { message: String },
}
