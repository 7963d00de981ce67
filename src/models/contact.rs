//! Contact model representing a person in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::ContactError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reply used when a contact has no birthday on file.
pub const BIRTHDAY_NOT_SET: &str = "Birthday not set.";

/// A contact: one name, any number of phones, at most one birthday.
///
/// Phones keep insertion order and may repeat. Phone operations match on the
/// phone text and act on the first match only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    name: ContactName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Contact {
    /// Create a contact with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Result<Self, ContactError> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// Create a contact with an optional first phone and birthday.
    ///
    /// Every provided field is validated; nothing is built if one fails.
    pub fn with_details(
        name: impl Into<String>,
        phone: Option<&str>,
        birthday: Option<&str>,
    ) -> Result<Self, ContactError> {
        let mut contact = Self::new(name)?;
        if let Some(phone) = phone {
            contact.phones.push(PhoneNumber::new(phone)?);
        }
        if let Some(birthday) = birthday {
            contact.birthday = Some(Birthday::parse(birthday)?);
        }
        Ok(contact)
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone after validating it.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ContactError> {
        self.phones.push(PhoneNumber::new(phone)?);
        Ok(())
    }

    /// Remove the first phone equal to `phone`. Missing phones are ignored.
    pub fn delete_phone(&mut self, phone: &str) {
        if let Some(index) = self.position_of(phone) {
            self.phones.remove(index);
        }
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// `new` is validated even when `old` is absent; an absent `old` leaves
    /// the contact unchanged without error.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ContactError> {
        let replacement = PhoneNumber::new(new)?;
        if let Some(index) = self.position_of(old) {
            self.phones[index] = replacement;
        }
        Ok(())
    }

    pub fn has_phone(&self, phone: &str) -> bool {
        self.position_of(phone).is_some()
    }

    /// Set the birthday; an existing birthday must be cleared first.
    pub fn set_birthday(&mut self, birthday: &str) -> Result<(), ContactError> {
        if self.birthday.is_some() {
            return Err(ContactError::BirthdayAlreadySet);
        }
        self.birthday = Some(Birthday::parse(birthday)?);
        Ok(())
    }

    pub fn clear_birthday(&mut self) {
        self.birthday = None;
    }

    /// Birthday text, or [`BIRTHDAY_NOT_SET`].
    pub fn show_birthday(&self) -> String {
        match &self.birthday {
            Some(birthday) => birthday.to_string(),
            None => BIRTHDAY_NOT_SET.to_string(),
        }
    }

    /// One-line summary used by the `all` command.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    fn position_of(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == phone)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        let birthday = self
            .birthday
            .map(|b| b.to_string())
            .unwrap_or_else(|| "Not set".to_string());

        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name, phones, birthday
        )
    }
}
