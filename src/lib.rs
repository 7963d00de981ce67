//! Address Book - a command-line assistant bot for contacts.
//!
//! The bot keeps names, phone numbers and birthdays in memory, validates
//! every field on entry and reports which birthdays fall in the coming week.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: The contact record
//! - **directory**: The address book and the upcoming-birthdays query
//! - **commands**: Command parsing and handlers
//! - **repl**: Interactive loop over any reader/writer pair
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod commands;
pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;

pub use commands::{Command, Reply};
pub use config::Config;
pub use directory::{AddressBook, UpcomingBirthdays, WeekdayBucket};
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, ContactError};
pub use models::Contact;
pub use repl::Session;
