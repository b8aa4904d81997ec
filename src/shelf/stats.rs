//! Aggregate statistics over already-filtered record sets.
//!
//! Pure functions, same contract as [`crate::filter`]: callers pass the
//! filtered slice in, nothing here reads or caches state.

use crate::model::{Book, Transaction};
use std::collections::HashMap;

/// Genres surfaced individually in the statistics display. Anything else
/// still lands in the tally under its own lower-cased name.
pub const NAMED_GENRES: [&str; 6] = [
    "fiction",
    "romance",
    "mystery",
    "fantasy",
    "memoir",
    "nonfiction",
];

/// Count of books per lower-cased genre name. Books with no genre assigned
/// are left out entirely rather than counted under a placeholder key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreTally {
    counts: HashMap<String, usize>,
}

impl GenreTally {
    /// Count for a genre, case-insensitive; zero when absent.
    pub fn count(&self, genre: &str) -> usize {
        self.counts.get(&genre.to_lowercase()).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &HashMap<String, usize> {
        &self.counts
    }

    /// The fixed set of surfaced genres paired with their counts, in
    /// [`NAMED_GENRES`] order. Zero counts are included so displays stay
    /// stable as the filtered set changes.
    pub fn named_counts(&self) -> Vec<(&'static str, usize)> {
        NAMED_GENRES.iter().map(|g| (*g, self.count(g))).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

pub fn genre_tally(books: &[Book]) -> GenreTally {
    let mut counts = HashMap::new();
    for book in books {
        let genre = book.genre_name();
        if !genre.is_empty() {
            *counts.entry(genre.to_lowercase()).or_insert(0) += 1;
        }
    }
    GenreTally { counts }
}

/// Mean price over the filtered set. An unparsable or missing price counts
/// as zero in the sum but still counts toward the divisor; an empty set
/// averages to zero instead of dividing by it.
pub fn average_price(books: &[Book]) -> f64 {
    if books.is_empty() {
        return 0.0;
    }
    let total: f64 = books.iter().map(|b| b.price.unwrap_or(0.0)).sum();
    total / books.len() as f64
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReturnedCounts {
    pub returned: usize,
    pub unreturned: usize,
}

impl ReturnedCounts {
    pub fn total(&self) -> usize {
        self.returned + self.unreturned
    }
}

/// Split of the filtered transactions into returned and still-out. The two
/// counts always sum to the slice length.
pub fn returned_counts(transactions: &[Transaction]) -> ReturnedCounts {
    let returned = transactions.iter().filter(|t| t.is_returned()).count();
    ReturnedCounts {
        returned,
        unreturned: transactions.len() - returned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Author, Genre};

    fn book_with_genre(id: u32, genre: Option<&str>) -> Book {
        Book {
            book_id: id,
            title: format!("Book {}", id),
            author: Some(Author::new("A", "B")),
            genre: genre.map(Genre::new),
            published_date: "2020-01-01".to_string(),
            price: Some(10.0),
            availability: true,
        }
    }

    fn book_with_price(id: u32, price: Option<f64>) -> Book {
        Book {
            price,
            ..book_with_genre(id, None)
        }
    }

    fn tx(id: u32, returned: Option<&str>) -> Transaction {
        Transaction {
            transaction_id: id,
            book_id: 1,
            customer_id: 1,
            date_borrowed: "2024-01-05".to_string(),
            date_returned: returned.map(str::to_string),
        }
    }

    #[test]
    fn test_genre_tally_folds_case_and_skips_missing() {
        let books = vec![
            book_with_genre(1, Some("Fiction")),
            book_with_genre(2, Some("fiction")),
            book_with_genre(3, None),
        ];
        let tally = genre_tally(&books);
        assert_eq!(tally.count("fiction"), 2);
        assert_eq!(tally.counts().len(), 1);
    }

    #[test]
    fn test_genre_tally_skips_empty_genre_name() {
        let books = vec![book_with_genre(1, Some("")), book_with_genre(2, Some("Memoir"))];
        let tally = genre_tally(&books);
        assert_eq!(tally.counts().len(), 1);
        assert_eq!(tally.count("memoir"), 1);
    }

    #[test]
    fn test_genre_tally_keeps_unnamed_genres_internally() {
        let books = vec![
            book_with_genre(1, Some("Western")),
            book_with_genre(2, Some("Fantasy")),
        ];
        let tally = genre_tally(&books);

        // "western" is tallied but gets no dedicated slot.
        assert_eq!(tally.count("western"), 1);
        let named = tally.named_counts();
        assert!(named.iter().all(|(name, _)| *name != "western"));
        assert!(named.contains(&("fantasy", 1)));
        assert_eq!(named.len(), NAMED_GENRES.len());
    }

    #[test]
    fn test_named_counts_report_zero_for_absent_genres() {
        let tally = genre_tally(&[]);
        assert!(tally.is_empty());
        for (_, count) in tally.named_counts() {
            assert_eq!(count, 0);
        }
    }

    #[test]
    fn test_average_price_of_empty_set_is_zero() {
        assert_eq!(average_price(&[]), 0.0);
    }

    #[test]
    fn test_average_price_counts_bad_prices_in_the_divisor() {
        // [10, unparsable, 20] averages to 10, not 15.
        let books = vec![
            book_with_price(1, Some(10.0)),
            book_with_price(2, None),
            book_with_price(3, Some(20.0)),
        ];
        assert_eq!(average_price(&books), 10.0);
    }

    #[test]
    fn test_average_price_plain_mean() {
        let books = vec![
            book_with_price(1, Some(4.0)),
            book_with_price(2, Some(6.0)),
        ];
        assert_eq!(average_price(&books), 5.0);
    }

    #[test]
    fn test_returned_counts_partition_the_set() {
        let transactions = vec![
            tx(1, Some("2024-01-12")),
            tx(2, None),
            tx(3, None),
            tx(4, Some("2024-02-01")),
            tx(5, None),
        ];
        let counts = returned_counts(&transactions);
        assert_eq!(counts.returned, 2);
        assert_eq!(counts.unreturned, 3);
        assert_eq!(counts.total(), transactions.len());
    }

    #[test]
    fn test_returned_counts_empty() {
        let counts = returned_counts(&[]);
        assert_eq!(counts, ReturnedCounts::default());
        assert_eq!(counts.total(), 0);
    }
}
