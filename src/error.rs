//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Fixed reply for malformed field input.
pub const MSG_BAD_INPUT: &str = "Give me name and phone please.";

/// Fixed reply when a command names an unknown contact.
pub const MSG_CONTACT_NOT_FOUND: &str = "Contact not found.";

/// Fixed reply for structurally invalid commands.
pub const MSG_INVALID_SYNTAX: &str = "Invalid command syntax.";

/// Errors raised by operations on a single contact.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The contact already has a birthday; it must be cleared first
    #[error("Birthday already exists")]
    BirthdayAlreadySet,
}

/// Errors surfaced by command handlers.
///
/// Every variant is recoverable: the command loop prints
/// [`CommandError::user_message`] and keeps reading.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Phone argument is not ten digits
    #[error("Invalid phone number format: {0}")]
    InvalidPhoneFormat(String),

    /// Birthday argument is not a real DD.MM.YYYY date
    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    /// Contact name argument is blank
    #[error("Contact name cannot be empty")]
    EmptyName,

    /// Birthday is already present on the contact
    #[error("Birthday already exists")]
    BirthdayAlreadySet,

    /// No contact is filed under the given name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// Wrong number of arguments for a command
    #[error("{command} expects {expected} argument(s), got {got}")]
    InvalidArity {
        command: &'static str,
        expected: usize,
        got: usize,
    },

    /// The contact has no phone number to change
    #[error("Contact has no phone numbers: {0}")]
    NoPhones(String),
}

impl CommandError {
    /// The fixed text shown to the user for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidPhoneFormat(_)
            | Self::InvalidDateFormat(_)
            | Self::EmptyName
            | Self::BirthdayAlreadySet
            | Self::InvalidArity { .. } => MSG_BAD_INPUT,
            Self::ContactNotFound(_) => MSG_CONTACT_NOT_FOUND,
            Self::NoPhones(_) => MSG_INVALID_SYNTAX,
        }
    }
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptyName => Self::EmptyName,
            ValidationError::InvalidPhone(phone) => Self::InvalidPhoneFormat(phone),
            ValidationError::InvalidDate(date) => Self::InvalidDateFormat(date),
        }
    }
}

impl From<ContactError> for CommandError {
    fn from(err: ContactError) -> Self {
        match err {
            ContactError::Validation(inner) => inner.into(),
            ContactError::BirthdayAlreadySet => Self::BirthdayAlreadySet,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CommandError::ContactNotFound("Ghost".to_string());
        assert_eq!(err.to_string(), "Contact not found: Ghost");

        let err = CommandError::InvalidArity {
            command: "phone",
            expected: 1,
            got: 0,
        };
        assert_eq!(err.to_string(), "phone expects 1 argument(s), got 0");

        let err = ConfigError::InvalidValue {
            var: "LOG_LEVEL".to_string(),
            reason: "bad".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for LOG_LEVEL: bad");
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            CommandError::InvalidPhoneFormat("1".into()).user_message(),
            "Give me name and phone please."
        );
        assert_eq!(
            CommandError::InvalidDateFormat("x".into()).user_message(),
            "Give me name and phone please."
        );
        assert_eq!(
            CommandError::BirthdayAlreadySet.user_message(),
            "Give me name and phone please."
        );
        assert_eq!(
            CommandError::ContactNotFound("x".into()).user_message(),
            "Contact not found."
        );
        assert_eq!(
            CommandError::InvalidArity {
                command: "all",
                expected: 0,
                got: 2
            }
            .user_message(),
            "Give me name and phone please."
        );
        assert_eq!(
            CommandError::NoPhones("x".into()).user_message(),
            "Invalid command syntax."
        );
    }

    #[test]
    fn test_contact_error_conversion() {
        let err: CommandError =
            ContactError::Validation(ValidationError::InvalidDate("1.1.1".into())).into();
        assert_eq!(err, CommandError::InvalidDateFormat("1.1.1".into()));

        let err: CommandError = ContactError::BirthdayAlreadySet.into();
        assert_eq!(err, CommandError::BirthdayAlreadySet);
    }
}
