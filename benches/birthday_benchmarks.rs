//! Performance benchmarks for the upcoming-birthdays query.
//!
//! Measures the weekly digest over address books of different sizes, with
//! birthdays spread evenly over the year.

use address_book::{AddressBook, Contact};
use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Build an address book with `size` contacts, one birthday per contact.
fn create_book(size: usize) -> AddressBook {
    let start = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
    let mut book = AddressBook::new();

    for i in 0..size {
        let birthday = start.checked_add_days(Days::new((i % 365) as u64)).unwrap();
        let phone = format!("{:010}", i);
        let birthday = birthday.format("%d.%m.%Y").to_string();
        let contact = Contact::with_details(
            format!("Contact{}", i),
            Some(phone.as_str()),
            Some(birthday.as_str()),
        )
        .unwrap();
        book.add(contact);
    }

    book
}

fn bench_upcoming_birthdays(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    let mut group = c.benchmark_group("upcoming_birthdays");

    for size in [10, 100, 1000, 10000].iter() {
        let book = create_book(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(&book).upcoming_birthdays(black_box(today)));
        });
    }

    group.finish();
}

fn bench_describe_all(c: &mut Criterion) {
    let book = create_book(1000);

    c.bench_function("describe_all_1000", |b| {
        b.iter(|| {
            black_box(&book)
                .iter()
                .map(Contact::describe)
                .collect::<Vec<_>>()
                .join("\n")
        });
    });
}

criterion_group!(benches, bench_upcoming_birthdays, bench_describe_all);
criterion_main!(benches);
