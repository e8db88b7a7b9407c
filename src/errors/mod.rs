//! Error handling for the wizard engine.

pub mod domain;

pub use domain::{DomainError, ValidationKind};
