//! The error humanizer: turns recognized failures into single messages.
//!
//! This module provides [`humanize`], the pure transform from an optional
//! [`RawFailure`] to an [`Outcome`], and [`handle`], the hook form that
//! invokes a host continuation exactly once with that outcome.

use serde_json::Value;

use crate::error::HumanError;
use crate::failure::{FieldViolation, RawFailure, ServerFailure, ValidationFailure, ViolationKind};

/// What the humanizer hands to the host's continuation.
///
/// The host layer's continuation accepts zero or one argument; `Outcome`
/// makes that explicit: [`Outcome::Clear`] is the zero-argument call, the
/// other variants carry the single argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// No failure to report; the host proceeds as if nothing went wrong.
    Clear,
    /// A recognized failure, rewritten into one human-readable message.
    Humanized(HumanError),
    /// An unrecognized failure, forwarded exactly as it arrived.
    Passthrough(RawFailure),
}

impl Outcome {
    /// Returns true if the continuation would be called with no argument.
    pub fn is_clear(&self) -> bool {
        matches!(self, Outcome::Clear)
    }

    /// Returns the humanized error, if this outcome carries one.
    pub fn as_human(&self) -> Option<&HumanError> {
        match self {
            Outcome::Humanized(error) => Some(error),
            _ => None,
        }
    }

    /// Returns the forwarded failure, if this outcome carries one.
    pub fn as_passthrough(&self) -> Option<&RawFailure> {
        match self {
            Outcome::Passthrough(failure) => Some(failure),
            _ => None,
        }
    }

    /// Converts the outcome into the error a host should propagate, if any.
    ///
    /// Hosts that cannot suppress an already-raised failure can hand this
    /// straight to their error pipeline.
    pub fn into_error(self) -> Option<Box<dyn std::error::Error + Send + Sync>> {
        match self {
            Outcome::Clear => None,
            Outcome::Humanized(error) => Some(Box::new(error)),
            Outcome::Passthrough(failure) => Some(Box::new(failure)),
        }
    }
}

/// Translates an optional failure into the outcome for the host.
///
/// - No failure stays no failure.
/// - A validation failure becomes one [`HumanError`] joining every field's
///   friendly message with `", "`, in the failure's field-map order.
/// - A duplicate-key server failure becomes one [`HumanError`] naming the
///   key pattern's fields. Server failures with any other code are
///   swallowed: callers rely on non-uniqueness server errors not surfacing
///   through this layer, so that behavior is kept as-is.
/// - Anything else is forwarded unchanged.
///
/// # Example
///
/// ```rust
/// use mollify::{humanize, FieldViolation, ValidationFailure};
///
/// let failure = ValidationFailure::new()
///     .with_violation(FieldViolation::required("name"))
///     .with_violation(FieldViolation::min("age", 1));
///
/// let outcome = humanize(Some(failure.into()));
/// let error = outcome.as_human().unwrap();
/// assert_eq!(error.message, "name required, age must be at least 1");
/// ```
pub fn humanize(failure: Option<RawFailure>) -> Outcome {
    match failure {
        None => Outcome::Clear,
        Some(RawFailure::Validation(failure)) => Outcome::Humanized(humanize_validation(&failure)),
        Some(RawFailure::Server(failure)) => match humanize_server(&failure) {
            Some(error) => Outcome::Humanized(error),
            None => Outcome::Clear,
        },
        Some(other) => Outcome::Passthrough(other),
    }
}

/// Invokes the continuation exactly once with the translated outcome.
///
/// This is the form meant to be registered as a post-failure hook on the
/// mapping layer: it never returns anything to the caller, never retries,
/// and performs no I/O.
///
/// # Example
///
/// ```rust
/// use mollify::handle;
///
/// handle(None, |outcome| assert!(outcome.is_clear()));
/// ```
pub fn handle<F>(failure: Option<RawFailure>, next: F)
where
    F: FnOnce(Outcome),
{
    next(humanize(failure))
}

/// Renders one field violation as a human-readable substring.
///
/// This is the per-field rule behind [`humanize`]'s validation branch,
/// exposed so hosts can render a single violation on its own.
pub fn friendly_message(violation: &FieldViolation) -> String {
    let path = &violation.path;
    match &violation.kind {
        ViolationKind::Required => format!("{} required", path),
        ViolationKind::Enum { value } => {
            format!("{} cannot be {}", path, render_value(value))
        }
        ViolationKind::Min { min } => format!("{} must be at least {}", path, min),
        ViolationKind::Max { max } => format!("{} cannot exceed {}", path, max),
        ViolationKind::MinLength { min_length } => {
            format!("{} must be at least {} character(s) long", path, min_length)
        }
        ViolationKind::MaxLength { max_length } => {
            format!(
                "{} cannot be more than {} character(s) long",
                path, max_length
            )
        }
        ViolationKind::Other { message } => message.clone(),
    }
}

fn humanize_validation(failure: &ValidationFailure) -> HumanError {
    let message = failure
        .violations()
        .map(friendly_message)
        .collect::<Vec<_>>()
        .join(", ");
    HumanError::new(message)
}

fn humanize_server(failure: &ServerFailure) -> Option<HumanError> {
    if !failure.is_duplicate_key() {
        return None;
    }
    let fields = failure.key_fields().collect::<Vec<_>>().join(", ");
    Some(HumanError::new(format!("{} must be unique", fields)))
}

// Strings render without JSON quoting; everything else keeps its JSON form.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure::DUPLICATE_KEY_CODE;
    use serde_json::json;

    fn message(outcome: Outcome) -> String {
        outcome.as_human().expect("expected humanized outcome").message.clone()
    }

    #[test]
    fn test_friendly_message_required() {
        let violation = FieldViolation::required("name");
        assert_eq!(friendly_message(&violation), "name required");
    }

    #[test]
    fn test_friendly_message_enum_renders_string_unquoted() {
        let violation = FieldViolation::enum_("country", json!("other"));
        assert_eq!(friendly_message(&violation), "country cannot be other");
    }

    #[test]
    fn test_friendly_message_enum_non_string_value() {
        let violation = FieldViolation::enum_("level", json!(7));
        assert_eq!(friendly_message(&violation), "level cannot be 7");
    }

    #[test]
    fn test_friendly_message_min() {
        let violation = FieldViolation::min("age", 1);
        assert_eq!(friendly_message(&violation), "age must be at least 1");
    }

    #[test]
    fn test_friendly_message_max() {
        let violation = FieldViolation::max("age", 150);
        assert_eq!(friendly_message(&violation), "age cannot exceed 150");
    }

    #[test]
    fn test_friendly_message_min_length() {
        let violation = FieldViolation::min_length("name", 2);
        assert_eq!(
            friendly_message(&violation),
            "name must be at least 2 character(s) long"
        );
    }

    #[test]
    fn test_friendly_message_max_length() {
        let violation = FieldViolation::max_length("city", 10);
        assert_eq!(
            friendly_message(&violation),
            "city cannot be more than 10 character(s) long"
        );
    }

    #[test]
    fn test_friendly_message_nested_path() {
        let violation = FieldViolation::min("birthday.year", 1900);
        assert_eq!(
            friendly_message(&violation),
            "birthday.year must be at least 1900"
        );
    }

    #[test]
    fn test_friendly_message_other_is_verbatim() {
        let violation = FieldViolation::other("name", "Cast to String failed");
        assert_eq!(friendly_message(&violation), "Cast to String failed");
    }

    #[test]
    fn test_humanize_none_is_clear() {
        assert!(humanize(None).is_clear());
    }

    #[test]
    fn test_humanize_validation_joins_in_map_order() {
        let failure = ValidationFailure::new()
            .with_violation(FieldViolation::required("phone"))
            .with_violation(FieldViolation::required("email"))
            .with_violation(FieldViolation::required("name"));

        assert_eq!(
            message(humanize(Some(failure.into()))),
            "phone required, email required, name required"
        );
    }

    #[test]
    fn test_humanize_duplicate_key() {
        let failure = ServerFailure::new(DUPLICATE_KEY_CODE, "E11000").with_key("name", 1);
        assert_eq!(message(humanize(Some(failure.into()))), "name must be unique");
    }

    #[test]
    fn test_humanize_compound_key_pattern() {
        let failure = ServerFailure::new(DUPLICATE_KEY_CODE, "E11000")
            .with_key("email", 1)
            .with_key("phone", 1);
        assert_eq!(
            message(humanize(Some(failure.into()))),
            "email, phone must be unique"
        );
    }

    #[test]
    fn test_humanize_swallows_other_server_codes() {
        let failure = ServerFailure::new(50, "operation exceeded time limit");
        assert!(humanize(Some(failure.into())).is_clear());
    }

    #[test]
    fn test_humanize_forwards_unrecognized_failures() {
        let original = crate::failure::OtherFailure::new("CastError", "bad object id");
        let outcome = humanize(Some(original.clone().into()));

        assert_eq!(
            outcome.as_passthrough(),
            Some(&RawFailure::Other(original))
        );
    }

    #[test]
    fn test_handle_calls_continuation_once() {
        let mut calls = 0;
        handle(None, |outcome| {
            calls += 1;
            assert!(outcome.is_clear());
        });
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_outcome_into_error() {
        assert!(Outcome::Clear.into_error().is_none());

        let boxed = Outcome::Humanized(HumanError::new("name required"))
            .into_error()
            .unwrap();
        assert_eq!(boxed.to_string(), "name required");

        let failure: RawFailure =
            crate::failure::OtherFailure::new("CastError", "bad object id").into();
        let boxed = Outcome::Passthrough(failure).into_error().unwrap();
        assert_eq!(boxed.to_string(), "CastError: bad object id");
    }

    #[test]
    fn test_humanize_is_deterministic() {
        let build = || {
            ValidationFailure::new()
                .with_violation(FieldViolation::required("name"))
                .with_violation(FieldViolation::enum_("country", json!("other")))
        };

        let first = message(humanize(Some(build().into())));
        let second = message(humanize(Some(build().into())));
        assert_eq!(first, second);
    }
}
