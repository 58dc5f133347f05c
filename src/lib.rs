//! # Mollify
//!
//! A post-hoc error translator for a document-database object mapper.
//! Mollify takes the structured validation and duplicate-key failures the
//! mapping layer raises after a persistence attempt and rewrites them into
//! a single human-readable message, leaving everything it does not
//! recognize untouched.
//!
//! ## Core Types
//!
//! - [`RawFailure`]: the failure as reported by the mapping layer, as a
//!   closed tagged union ([`ValidationFailure`] | [`ServerFailure`] |
//!   [`OtherFailure`])
//! - [`FieldViolation`]: one failed rule on one field, with its
//!   [`ViolationKind`] and constraint parameters
//! - [`HumanError`]: the single consolidated message handed forward
//! - [`Outcome`]: what the host's continuation receives
//!
//! ## Example
//!
//! ```rust
//! use mollify::{humanize, FieldViolation, ValidationFailure};
//!
//! let failure = ValidationFailure::new()
//!     .with_violation(FieldViolation::required("name"))
//!     .with_violation(FieldViolation::max_length("city", 10));
//!
//! let outcome = humanize(Some(failure.into()));
//! assert_eq!(
//!     outcome.as_human().unwrap().message,
//!     "name required, city cannot be more than 10 character(s) long"
//! );
//! ```
//!
//! The hook form, [`handle`], invokes a host continuation exactly once
//! instead of returning the outcome; register it wherever the mapping
//! layer runs its post-failure hooks.

pub mod error;
pub mod failure;
pub mod humanize;
pub mod path;

pub use error::HumanError;
pub use failure::{
    FieldViolation, OtherFailure, RawFailure, ServerFailure, ValidationFailure, ViolationKind,
    DUPLICATE_KEY_CODE,
};
pub use humanize::{friendly_message, handle, humanize, Outcome};
pub use path::{FieldPath, PathSegment};
