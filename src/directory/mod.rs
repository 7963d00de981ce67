//! The address book: every contact, keyed by name.
//!
//! Iteration follows insertion order. Re-adding a name replaces the stored
//! contact wholesale but keeps the name's original position.

mod birthdays;

pub use birthdays::{weekday_name, UpcomingBirthdays, WeekdayBucket, BIRTHDAY_WINDOW_DAYS};

use crate::models::Contact;
use std::collections::HashMap;
use tracing::debug;

/// In-memory directory owning all contacts.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    contacts: HashMap<String, Contact>,
    order: Vec<String>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a contact, overwriting any contact with the same name.
    pub fn add(&mut self, contact: Contact) {
        let name = contact.name().to_string();
        if self.contacts.insert(name.clone(), contact).is_some() {
            debug!(name = %name, "Replaced existing contact");
        } else {
            debug!(name = %name, "Added contact");
            self.order.push(name);
        }
    }

    pub fn find(&self, name: &str) -> Option<&Contact> {
        self.contacts.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.contacts.get_mut(name)
    }

    /// Delete a contact by name, returning it if it existed.
    pub fn remove(&mut self, name: &str) -> Option<Contact> {
        let removed = self.contacts.remove(name)?;
        self.order.retain(|n| n != name);
        debug!(name = %name, "Removed contact");
        Some(removed)
    }

    /// Contacts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.order.iter().filter_map(|name| self.contacts.get(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Contact;
    type IntoIter = Box<dyn Iterator<Item = &'a Contact> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
