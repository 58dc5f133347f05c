//! The human-readable error handed to the host's failure pipeline.

mod human_error;

pub use human_error::HumanError;
