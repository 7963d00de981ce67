//! Shared helpers for integration tests.

#![allow(dead_code)]

use address_book::{AddressBook, Contact};
use chrono::NaiveDate;

/// Monday 10 June 2024, the reference "today" for birthday scenarios.
pub fn monday_june_10() -> NaiveDate {
    date(2024, 6, 10)
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Contact with one phone and an optional birthday.
pub fn sample_contact(name: &str, phone: &str, birthday: Option<&str>) -> Contact {
    Contact::with_details(name, Some(phone), birthday).expect("valid fixture contact")
}

/// Address book built from `(name, birthday)` pairs, phones auto-assigned.
pub fn book_with_birthdays(entries: &[(&str, Option<&str>)]) -> AddressBook {
    let mut book = AddressBook::new();
    for (i, (name, birthday)) in entries.iter().enumerate() {
        let phone = format!("{:010}", i + 1);
        book.add(sample_contact(name, &phone, *birthday));
    }
    book
}

/// Turn string literals into owned command arguments.
pub fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
