//! The output error type produced by the humanizer.

use std::fmt::{self, Display};

/// A single human-readable message derived from a recognized failure.
///
/// `HumanError` is constructed only as the direct translation of a
/// validation or duplicate-key failure; it keeps no reference to the
/// failure it was derived from and is immutable once built.
///
/// # Example
///
/// ```rust
/// use mollify::HumanError;
///
/// let error = HumanError::new("name must be unique");
/// assert_eq!(error.message, "name must be unique");
/// assert_eq!(error.name(), HumanError::NAME);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HumanError {
    /// The consolidated human-readable message.
    pub message: String,
}

impl HumanError {
    /// The distinguishing name/tag carried by every `HumanError`.
    pub const NAME: &'static str = "HumanError";

    /// Creates a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the error's distinguishing name/tag.
    pub fn name(&self) -> &'static str {
        Self::NAME
    }
}

impl Display for HumanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for HumanError {}

// HumanError is Send + Sync since its only field is an owned String.
// This is automatically derived, but we add these assertions to ensure
// it remains true if the type changes.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<HumanError>();
    assert_sync::<HumanError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_error_creation() {
        let error = HumanError::new("age must be at least 1");
        assert_eq!(error.message, "age must be at least 1");
        assert_eq!(error.name(), "HumanError");
    }

    #[test]
    fn test_human_error_display_is_message_only() {
        let error = HumanError::new("country cannot be other");
        assert_eq!(error.to_string(), "country cannot be other");
    }

    #[test]
    fn test_human_error_equality() {
        assert_eq!(HumanError::new("same"), HumanError::new("same"));
        assert_ne!(HumanError::new("a"), HumanError::new("b"));
    }
}
