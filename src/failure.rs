//! Boundary model for failures raised by the document mapper.
//!
//! The external mapping layer reports failures as loosely shaped objects.
//! This module translates them at the boundary into a closed tagged union,
//! [`RawFailure`], so the humanizer can match on an explicit discriminant
//! instead of probing duck-typed fields.

use std::fmt::{self, Display};

use indexmap::IndexMap;
use serde_json::{Number, Value};

use crate::path::FieldPath;

/// The server-side error code that identifies a uniqueness violation.
pub const DUPLICATE_KEY_CODE: i64 = 11000;

/// One failed validation rule on one field.
///
/// The kind carries its own constraint parameters, so a violation can never
/// reference a constraint bound that was not supplied.
///
/// # Example
///
/// ```rust
/// use mollify::{FieldPath, FieldViolation};
///
/// let violation = FieldViolation::min(FieldPath::parse("age"), 1);
/// assert_eq!(violation.path.to_string(), "age");
/// assert_eq!(violation.kind_name(), "min");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FieldViolation {
    /// The dotted location of the field that failed.
    pub path: FieldPath,
    /// Which rule failed, with its constraint parameters.
    pub kind: ViolationKind,
}

/// The rule a [`FieldViolation`] broke, with its parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationKind {
    /// A required field was missing.
    Required,
    /// A value was outside the allowed enumeration.
    Enum {
        /// The rejected value.
        value: Value,
    },
    /// A numeric value fell below the minimum.
    Min {
        /// The lower bound from the schema.
        min: Number,
    },
    /// A numeric value exceeded the maximum.
    Max {
        /// The upper bound from the schema.
        max: Number,
    },
    /// A string was shorter than allowed.
    MinLength {
        /// The minimum length from the schema.
        min_length: u64,
    },
    /// A string was longer than allowed.
    MaxLength {
        /// The maximum length from the schema.
        max_length: u64,
    },
    /// A rule this crate does not recognize; carries the mapping layer's
    /// own message verbatim.
    Other {
        /// Fallback message from the mapping layer.
        message: String,
    },
}

impl FieldViolation {
    /// A missing required field.
    pub fn required(path: impl Into<FieldPath>) -> Self {
        Self {
            path: path.into(),
            kind: ViolationKind::Required,
        }
    }

    /// A value outside the allowed enumeration.
    pub fn enum_(path: impl Into<FieldPath>, value: impl Into<Value>) -> Self {
        Self {
            path: path.into(),
            kind: ViolationKind::Enum {
                value: value.into(),
            },
        }
    }

    /// A numeric value below the schema's minimum.
    pub fn min(path: impl Into<FieldPath>, min: impl Into<Number>) -> Self {
        Self {
            path: path.into(),
            kind: ViolationKind::Min { min: min.into() },
        }
    }

    /// A numeric value above the schema's maximum.
    pub fn max(path: impl Into<FieldPath>, max: impl Into<Number>) -> Self {
        Self {
            path: path.into(),
            kind: ViolationKind::Max { max: max.into() },
        }
    }

    /// A string shorter than the schema's minimum length.
    pub fn min_length(path: impl Into<FieldPath>, min_length: u64) -> Self {
        Self {
            path: path.into(),
            kind: ViolationKind::MinLength { min_length },
        }
    }

    /// A string longer than the schema's maximum length.
    pub fn max_length(path: impl Into<FieldPath>, max_length: u64) -> Self {
        Self {
            path: path.into(),
            kind: ViolationKind::MaxLength { max_length },
        }
    }

    /// A violation of a kind this crate does not recognize.
    pub fn other(path: impl Into<FieldPath>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: ViolationKind::Other {
                message: message.into(),
            },
        }
    }

    /// The mapping layer's discriminant string for this violation's kind.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            ViolationKind::Required => "required",
            ViolationKind::Enum { .. } => "enum",
            ViolationKind::Min { .. } => "min",
            ViolationKind::Max { .. } => "max",
            ViolationKind::MinLength { .. } => "minlength",
            ViolationKind::MaxLength { .. } => "maxlength",
            ViolationKind::Other { .. } => "other",
        }
    }
}

/// A schema validation failure: one or more field violations, keyed by path.
///
/// The map preserves insertion order, which is the order the external layer
/// iterated its own field map. The humanized message follows this order.
///
/// # Example
///
/// ```rust
/// use mollify::{FieldViolation, ValidationFailure};
///
/// let failure = ValidationFailure::new()
///     .with_violation(FieldViolation::required("name"))
///     .with_violation(FieldViolation::min("age", 1));
///
/// assert_eq!(failure.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationFailure {
    errors: IndexMap<String, FieldViolation>,
}

impl ValidationFailure {
    /// Creates a validation failure with no violations yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a violation, keyed by its path, and returns self for chaining.
    ///
    /// A second violation on the same path replaces the first, matching the
    /// external layer's one-entry-per-path field map.
    pub fn with_violation(mut self, violation: FieldViolation) -> Self {
        self.errors.insert(violation.path.to_string(), violation);
        self
    }

    /// Returns the violations in insertion order.
    pub fn violations(&self) -> impl Iterator<Item = &FieldViolation> {
        self.errors.values()
    }

    /// Returns the violation recorded for the given dotted path, if any.
    pub fn at_path(&self, path: &str) -> Option<&FieldViolation> {
        self.errors.get(path)
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if no violations were recorded.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed with {} violation(s)", self.len())
    }
}

impl std::error::Error for ValidationFailure {}

/// A failure reported by the database server rather than the schema layer.
///
/// Only the duplicate-key code ([`DUPLICATE_KEY_CODE`]) is recognized by the
/// humanizer; the key pattern names the fields of the violated unique index.
///
/// # Example
///
/// ```rust
/// use mollify::{ServerFailure, DUPLICATE_KEY_CODE};
///
/// let failure = ServerFailure::new(DUPLICATE_KEY_CODE, "E11000 duplicate key error")
///     .with_key("name", 1);
///
/// assert!(failure.is_duplicate_key());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ServerFailure {
    /// Numeric error code assigned by the server.
    pub code: i64,
    /// The server's own message.
    pub message: String,
    key_pattern: IndexMap<String, Value>,
}

impl ServerFailure {
    /// Creates a server failure with the given code and server message.
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            key_pattern: IndexMap::new(),
        }
    }

    /// Adds a field to the violated index's key pattern and returns self
    /// for chaining. The marker value is opaque (usually `1`).
    pub fn with_key(mut self, field: impl Into<String>, marker: impl Into<Value>) -> Self {
        self.key_pattern.insert(field.into(), marker.into());
        self
    }

    /// Returns the field names of the key pattern in insertion order.
    pub fn key_fields(&self) -> impl Iterator<Item = &str> {
        self.key_pattern.keys().map(String::as_str)
    }

    /// Returns true if the code identifies a uniqueness violation.
    pub fn is_duplicate_key(&self) -> bool {
        self.code == DUPLICATE_KEY_CODE
    }
}

impl Display for ServerFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "server error {}: {}", self.code, self.message)
    }
}

impl std::error::Error for ServerFailure {}

/// Any failure shape this crate does not recognize.
///
/// These are forwarded through the humanizer untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct OtherFailure {
    /// The external error's name/tag.
    pub name: String,
    /// The external error's message.
    pub message: String,
}

impl OtherFailure {
    /// Creates an unrecognized failure with the given name and message.
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

impl Display for OtherFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.message)
    }
}

impl std::error::Error for OtherFailure {}

/// A failure as reported by the persistence attempt, after boundary
/// translation into an explicit discriminant.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RawFailure {
    /// Schema validation failed for one or more fields.
    #[error(transparent)]
    Validation(ValidationFailure),
    /// The database server rejected the operation.
    #[error(transparent)]
    Server(ServerFailure),
    /// Anything else; forwarded unchanged.
    #[error(transparent)]
    Other(OtherFailure),
}

impl From<ValidationFailure> for RawFailure {
    fn from(failure: ValidationFailure) -> Self {
        RawFailure::Validation(failure)
    }
}

impl From<ServerFailure> for RawFailure {
    fn from(failure: ServerFailure) -> Self {
        RawFailure::Server(failure)
    }
}

impl From<OtherFailure> for RawFailure {
    fn from(failure: OtherFailure) -> Self {
        RawFailure::Other(failure)
    }
}
