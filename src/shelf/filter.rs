//! Predicate evaluation for the three record views.
//!
//! Every function here is a pure function of (record, criteria): no state,
//! no I/O, recomputed from scratch on each call. Active constraints AND
//! together; an empty field is vacuously satisfied.
//!
//! Matching rules per field shape:
//! - free text (title, author, genre, customer name, email): case-insensitive
//!   substring
//! - identifiers: the id's decimal text must contain the filter value, which
//!   makes partial-ID search work ("4" finds #4, #14, #40)
//! - availability: strict equality against "true"/"false"
//! - dates: exact string equality, never substring. Deliberate asymmetry,
//!   kept because the borrow/return workflow filters on whole days.

use crate::criteria::{bool_text, id_text, FilterCriteria};
use crate::model::{Book, Customer, Transaction};

fn text_matches(value: &str, filter: &str) -> bool {
    filter.is_empty() || value.to_lowercase().contains(&filter.to_lowercase())
}

fn id_matches(id: u32, filter: &str) -> bool {
    filter.is_empty() || id_text(id).contains(filter)
}

fn bool_matches(value: bool, filter: &str) -> bool {
    filter.is_empty() || bool_text(value) == filter
}

/// Exact-match dates. A record with no date fails every non-empty filter.
fn date_matches(value: Option<&str>, filter: &str) -> bool {
    filter.is_empty() || value == Some(filter)
}

pub fn book_matches(book: &Book, criteria: &FilterCriteria) -> bool {
    id_matches(book.book_id, &criteria.book_id)
        && text_matches(&book.title, &criteria.title)
        && text_matches(&book.author_name(), &criteria.author)
        && text_matches(book.genre_name(), &criteria.genre)
        && bool_matches(book.availability, &criteria.availability)
}

pub fn customer_matches(customer: &Customer, criteria: &FilterCriteria) -> bool {
    id_matches(customer.customer_id, &criteria.customer_id)
        && text_matches(&customer.full_name(), &criteria.customer_name)
        && text_matches(&customer.email, &criteria.email)
}

pub fn transaction_matches(tx: &Transaction, criteria: &FilterCriteria) -> bool {
    id_matches(tx.transaction_id, &criteria.transaction_id)
        && id_matches(tx.book_id, &criteria.book_id)
        && id_matches(tx.customer_id, &criteria.customer_id)
        && date_matches(Some(&tx.date_borrowed), &criteria.date_borrowed)
        && date_matches(tx.date_returned.as_deref(), &criteria.date_returned)
}

pub fn filter_books(books: &[Book], criteria: &FilterCriteria) -> Vec<Book> {
    books
        .iter()
        .filter(|b| book_matches(b, criteria))
        .cloned()
        .collect()
}

pub fn filter_customers(customers: &[Customer], criteria: &FilterCriteria) -> Vec<Customer> {
    customers
        .iter()
        .filter(|c| customer_matches(c, criteria))
        .cloned()
        .collect()
}

pub fn filter_transactions(
    transactions: &[Transaction],
    criteria: &FilterCriteria,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| transaction_matches(t, criteria))
        .cloned()
        .collect()
}
