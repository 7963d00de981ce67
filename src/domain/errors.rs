//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    #[error("Contact name cannot be empty")]
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    #[error("Invalid phone number format, expected 10 digits: {0}")]
    InvalidPhone(String),

    /// The provided birthday is not a real DD.MM.YYYY date.
    #[error("Invalid birthday format, expected DD.MM.YYYY: {0}")]
    InvalidDate(String),
}
