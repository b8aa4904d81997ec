//! Filter criteria shared across the three record views.
//!
//! One struct holds every filter field for books, customers, and
//! transactions; a field left as the empty string places no constraint.
//! The same shape serves both the draft the user is editing and the
//! applied snapshot the evaluator runs against (see [`crate::session`]).

use crate::error::{Result, ShelfError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical text form of a record identifier, shared by the evaluator,
/// the CLI, and tests so partial-ID matching always sees the same digits.
pub fn id_text(id: u32) -> String {
    id.to_string()
}

/// Canonical text form of a boolean filter value.
pub fn bool_text(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// All filter fields, as strings; empty string means "no constraint".
///
/// `book_id` and `customer_id` do double duty: they constrain the books and
/// customers views directly and the matching columns of the transactions
/// view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub book_id: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    /// One of "", "true", "false". Build values with [`bool_text`].
    pub availability: String,
    pub customer_id: String,
    pub customer_name: String,
    pub email: String,
    pub transaction_id: String,
    /// Exact-match calendar date, `%Y-%m-%d`.
    pub date_borrowed: String,
    /// Exact-match calendar date, `%Y-%m-%d`.
    pub date_returned: String,
}

impl FilterCriteria {
    /// True when no field places a constraint.
    pub fn is_empty(&self) -> bool {
        FilterField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::BookId => &self.book_id,
            FilterField::Title => &self.title,
            FilterField::Author => &self.author,
            FilterField::Genre => &self.genre,
            FilterField::Availability => &self.availability,
            FilterField::CustomerId => &self.customer_id,
            FilterField::CustomerName => &self.customer_name,
            FilterField::Email => &self.email,
            FilterField::TransactionId => &self.transaction_id,
            FilterField::DateBorrowed => &self.date_borrowed,
            FilterField::DateReturned => &self.date_returned,
        }
    }

    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FilterField::BookId => self.book_id = value,
            FilterField::Title => self.title = value,
            FilterField::Author => self.author = value,
            FilterField::Genre => self.genre = value,
            FilterField::Availability => self.availability = value,
            FilterField::CustomerId => self.customer_id = value,
            FilterField::CustomerName => self.customer_name = value,
            FilterField::Email => self.email = value,
            FilterField::TransactionId => self.transaction_id = value,
            FilterField::DateBorrowed => self.date_borrowed = value,
            FilterField::DateReturned => self.date_returned = value,
        }
    }
}

/// Names every criteria field so callers (CLI flags, embedding UIs) can
/// address fields uniformly instead of poking struct members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    BookId,
    Title,
    Author,
    Genre,
    Availability,
    CustomerId,
    CustomerName,
    Email,
    TransactionId,
    DateBorrowed,
    DateReturned,
}

impl FilterField {
    pub const ALL: &'static [FilterField] = &[
        FilterField::BookId,
        FilterField::Title,
        FilterField::Author,
        FilterField::Genre,
        FilterField::Availability,
        FilterField::CustomerId,
        FilterField::CustomerName,
        FilterField::Email,
        FilterField::TransactionId,
        FilterField::DateBorrowed,
        FilterField::DateReturned,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::BookId => "book_id",
            FilterField::Title => "title",
            FilterField::Author => "author",
            FilterField::Genre => "genre",
            FilterField::Availability => "availability",
            FilterField::CustomerId => "customer_id",
            FilterField::CustomerName => "customer_name",
            FilterField::Email => "email",
            FilterField::TransactionId => "transaction_id",
            FilterField::DateBorrowed => "date_borrowed",
            FilterField::DateReturned => "date_returned",
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FilterField {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self> {
        FilterField::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ShelfError::Api(format!("Unknown filter field: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_criteria_is_empty() {
        assert!(FilterCriteria::default().is_empty());
    }

    #[test]
    fn test_set_and_get_round_trip_every_field() {
        let mut criteria = FilterCriteria::default();
        for (i, field) in FilterField::ALL.iter().enumerate() {
            criteria.set(*field, format!("v{}", i));
        }
        assert!(!criteria.is_empty());
        for (i, field) in FilterField::ALL.iter().enumerate() {
            assert_eq!(criteria.get(*field), format!("v{}", i));
        }
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in FilterField::ALL {
            let parsed: FilterField = field.as_str().parse().unwrap();
            assert_eq!(parsed, *field);
        }
    }

    #[test]
    fn test_unknown_field_name_is_an_api_error() {
        let err = "publisher".parse::<FilterField>().unwrap_err();
        assert!(matches!(err, ShelfError::Api(_)));
    }

    #[test]
    fn test_id_text_is_plain_decimal() {
        assert_eq!(id_text(0), "0");
        assert_eq!(id_text(1042), "1042");
    }

    #[test]
    fn test_bool_text() {
        assert_eq!(bool_text(true), "true");
        assert_eq!(bool_text(false), "false");
    }

    #[test]
    fn test_criteria_deserializes_with_missing_fields() {
        let criteria: FilterCriteria = serde_json::from_str(r#"{"title": "moby"}"#).unwrap();
        assert_eq!(criteria.title, "moby");
        assert_eq!(criteria.genre, "");
        assert!(!criteria.is_empty());
    }
}
