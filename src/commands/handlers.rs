//! Handlers for the assistant bot commands.
//!
//! Each handler validates its argument count, performs the operation on the
//! address book and returns the text to print. Failures come back as
//! [`CommandError`] so the caller decides how to present them.

use crate::directory::AddressBook;
use crate::error::{CommandError, CommandResult};
use crate::models::Contact;
use chrono::NaiveDate;
use tracing::debug;

/// Reply for `all` on an empty address book.
pub const MSG_NO_CONTACTS: &str = "No contacts saved.";

/// Reply for `birthdays` when nothing falls inside the window.
pub const MSG_NO_UPCOMING_BIRTHDAYS: &str = "No upcoming birthdays.";

fn expect_arity(command: &'static str, args: &[String], expected: usize) -> CommandResult<()> {
    if args.len() != expected {
        return Err(CommandError::InvalidArity {
            command,
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

fn find_contact<'a>(book: &'a AddressBook, name: &str) -> CommandResult<&'a Contact> {
    book.find(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
}

fn find_contact_mut<'a>(book: &'a mut AddressBook, name: &str) -> CommandResult<&'a mut Contact> {
    book.find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
}

pub fn hello() -> String {
    "How can I help you?".to_string()
}

pub fn goodbye() -> String {
    "Good bye!".to_string()
}

/// `add <name> <phone>`: create or replace a contact with one phone.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    expect_arity("add", args, 2)?;
    let (name, phone) = (&args[0], &args[1]);

    let contact = Contact::with_details(name.as_str(), Some(phone.as_str()), None)?;
    book.add(contact);
    Ok("Contact added.".to_string())
}

/// `change <name> <phone>`: replace the contact's first phone.
pub fn change_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    expect_arity("change", args, 2)?;
    let (name, new_phone) = (&args[0], &args[1]);

    let contact = find_contact_mut(book, name)?;
    let first = contact
        .phones()
        .first()
        .map(|p| p.as_str().to_string())
        .ok_or_else(|| CommandError::NoPhones(name.clone()))?;

    contact.edit_phone(&first, new_phone)?;
    debug!(name = %name, "Changed first phone");
    Ok("Contact updated.".to_string())
}

/// `phone <name>`: list the contact's phones.
pub fn show_phone(args: &[String], book: &AddressBook) -> CommandResult<String> {
    expect_arity("phone", args, 1)?;

    let contact = find_contact(book, &args[0])?;
    Ok(contact
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", "))
}

/// `all`: describe every contact, one per line.
pub fn show_all(args: &[String], book: &AddressBook) -> CommandResult<String> {
    expect_arity("all", args, 0)?;

    if book.is_empty() {
        return Ok(MSG_NO_CONTACTS.to_string());
    }
    Ok(book
        .iter()
        .map(Contact::describe)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    expect_arity("add-birthday", args, 2)?;
    let (name, birthday) = (&args[0], &args[1]);

    find_contact_mut(book, name)?.set_birthday(birthday)?;
    Ok("Birthday added to the contact.".to_string())
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[String], book: &AddressBook) -> CommandResult<String> {
    expect_arity("show-birthday", args, 1)?;
    Ok(find_contact(book, &args[0])?.show_birthday())
}

/// `birthdays`: upcoming birthdays grouped by announcement weekday.
pub fn birthdays(
    args: &[String],
    book: &AddressBook,
    today: NaiveDate,
    window_days: i64,
) -> CommandResult<String> {
    expect_arity("birthdays", args, 0)?;

    let upcoming = book.upcoming_birthdays_within(today, window_days);
    if upcoming.is_empty() {
        return Ok(MSG_NO_UPCOMING_BIRTHDAYS.to_string());
    }
    Ok(upcoming.lines().join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_add_contact() {
        let mut book = AddressBook::new();
        assert_eq!(
            add_contact(&args(&["Alice", "0501234567"]), &mut book).unwrap(),
            "Contact added."
        );
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_add_contact_invalid_phone() {
        let mut book = AddressBook::new();
        let err = add_contact(&args(&["Alice", "050-123"]), &mut book).unwrap_err();
        assert_eq!(err, CommandError::InvalidPhoneFormat("050-123".to_string()));
        assert!(book.is_empty());
    }

    #[test]
    fn test_arity_is_checked_first() {
        let mut book = AddressBook::new();
        let err = add_contact(&args(&["Alice"]), &mut book).unwrap_err();
        assert_eq!(
            err,
            CommandError::InvalidArity {
                command: "add",
                expected: 2,
                got: 1
            }
        );
        assert!(matches!(
            show_all(&args(&["extra"]), &book),
            Err(CommandError::InvalidArity { .. })
        ));
        assert!(matches!(
            show_phone(&args(&[]), &book),
            Err(CommandError::InvalidArity { .. })
        ));
    }

    #[test]
    fn test_change_contact_without_phones() {
        let mut book = AddressBook::new();
        book.add(Contact::new("Alice").unwrap());
        assert_eq!(
            change_contact(&args(&["Alice", "0501234567"]), &mut book),
            Err(CommandError::NoPhones("Alice".to_string()))
        );
    }

    #[test]
    fn test_change_contact_invalid_phone_keeps_old() {
        let mut book = AddressBook::new();
        add_contact(&args(&["Alice", "0501234567"]), &mut book).unwrap();
        assert!(change_contact(&args(&["Alice", "bad"]), &mut book).is_err());
        assert_eq!(
            show_phone(&args(&["Alice"]), &book).unwrap(),
            "0501234567"
        );
    }

    #[test]
    fn test_show_phone_not_found() {
        let book = AddressBook::new();
        assert_eq!(
            show_phone(&args(&["Ghost"]), &book),
            Err(CommandError::ContactNotFound("Ghost".to_string()))
        );
    }

    #[test]
    fn test_show_all_empty() {
        let book = AddressBook::new();
        assert_eq!(show_all(&args(&[]), &book).unwrap(), "No contacts saved.");
    }

    #[test]
    fn test_birthdays_empty() {
        let book = AddressBook::new();
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        assert_eq!(
            birthdays(&args(&[]), &book, today, 7).unwrap(),
            "No upcoming birthdays."
        );
    }
}
