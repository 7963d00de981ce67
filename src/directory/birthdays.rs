//! Upcoming birthdays grouped by the weekday they will be announced on.

use super::AddressBook;
use chrono::{Datelike, Local, NaiveDate, Weekday};
use tracing::debug;

/// Days ahead of today, inclusive, that count as "upcoming".
pub const BIRTHDAY_WINDOW_DAYS: i64 = 7;

/// English weekday name, e.g. `"Wednesday"`.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Weekend birthdays are announced on Monday.
fn announcement_day(date: NaiveDate) -> Weekday {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => Weekday::Mon,
        weekday => weekday,
    }
}

/// Names announced on one weekday, in address book order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekdayBucket {
    pub weekday: Weekday,
    pub names: Vec<String>,
}

impl WeekdayBucket {
    /// Names joined with `", "`.
    pub fn joined(&self) -> String {
        self.names.join(", ")
    }
}

/// Result of the birthday-window query.
///
/// Buckets appear in the order they first received a name. Days without
/// birthdays have no bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpcomingBirthdays {
    buckets: Vec<WeekdayBucket>,
}

impl UpcomingBirthdays {
    fn push(&mut self, weekday: Weekday, name: &str) {
        match self.buckets.iter_mut().find(|b| b.weekday == weekday) {
            Some(bucket) => bucket.names.push(name.to_string()),
            None => self.buckets.push(WeekdayBucket {
                weekday,
                names: vec![name.to_string()],
            }),
        }
    }

    /// Joined names for `weekday`, if any birthday falls on it.
    pub fn get(&self, weekday: Weekday) -> Option<String> {
        self.buckets
            .iter()
            .find(|b| b.weekday == weekday)
            .map(WeekdayBucket::joined)
    }

    pub fn buckets(&self) -> &[WeekdayBucket] {
        &self.buckets
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// `"Weekday: a, b"` lines, one per bucket.
    pub fn lines(&self) -> Vec<String> {
        self.buckets
            .iter()
            .map(|b| format!("{}: {}", weekday_name(b.weekday), b.joined()))
            .collect()
    }
}

impl AddressBook {
    /// Birthdays within [`BIRTHDAY_WINDOW_DAYS`] of `today`, by weekday.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> UpcomingBirthdays {
        self.upcoming_birthdays_within(today, BIRTHDAY_WINDOW_DAYS)
    }

    /// Same as [`AddressBook::upcoming_birthdays`] for the local calendar date.
    pub fn upcoming_birthdays_from_now(&self) -> UpcomingBirthdays {
        self.upcoming_birthdays(Local::now().date_naive())
    }

    /// Birthdays between `today` and `today + days`, inclusive.
    pub fn upcoming_birthdays_within(&self, today: NaiveDate, days: i64) -> UpcomingBirthdays {
        let mut upcoming = UpcomingBirthdays::default();

        for contact in self.iter() {
            let Some(birthday) = contact.birthday() else {
                continue;
            };
            let Some(next) = birthday.next_occurrence(today) else {
                continue;
            };

            let delta_days = (next - today).num_days();
            if (0..=days).contains(&delta_days) {
                upcoming.push(announcement_day(next), contact.name());
            }
        }

        debug!(
            today = %today,
            window_days = days,
            days_with_birthdays = upcoming.len(),
            "Computed upcoming birthdays"
        );
        upcoming
    }
}
