use crate::error::{Result, ShelfError};
use crate::model::Library;
use crate::store::DataStore;
use std::path::PathBuf;

/// In-memory store for tests: the snapshot is cloned out on load and
/// cloned in on save, so callers see the same whole-document semantics as
/// the file store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    library: Library,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_library(library: Library) -> Self {
        Self { library }
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Library> {
        Ok(self.library.clone())
    }

    fn save(&mut self, library: &Library) -> Result<()> {
        self.library = library.clone();
        Ok(())
    }

    fn data_path(&self) -> Result<PathBuf> {
        Err(ShelfError::Store(
            "in-memory store has no data file".to_string(),
        ))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Author, Book, Customer, Genre, Transaction};

    /// Builder for seeding a store with records. Identifiers are assigned
    /// in insertion order, so the first book is #1, the second #2, and so
    /// on per collection.
    pub struct LibraryFixture {
        library: Library,
    }

    impl Default for LibraryFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl LibraryFixture {
        pub fn new() -> Self {
            Self {
                library: Library::default(),
            }
        }

        pub fn with_book(self, title: &str, author: (&str, &str), genre: &str, price: f64) -> Self {
            self.with_book_availability(title, author, genre, price, true)
        }

        pub fn with_unavailable_book(
            self,
            title: &str,
            author: (&str, &str),
            genre: &str,
            price: f64,
        ) -> Self {
            self.with_book_availability(title, author, genre, price, false)
        }

        pub fn with_book_availability(
            mut self,
            title: &str,
            author: (&str, &str),
            genre: &str,
            price: f64,
            availability: bool,
        ) -> Self {
            let book = Book {
                book_id: self.library.allocate_book_id(),
                title: title.to_string(),
                author: Some(Author::new(author.0, author.1)),
                genre: Some(Genre::new(genre)),
                published_date: "2020-01-01".to_string(),
                price: Some(price),
                availability,
            };
            self.library.books.push(book);
            self
        }

        /// A book with no author and no genre assigned.
        pub fn with_bare_book(mut self, title: &str) -> Self {
            let book = Book {
                book_id: self.library.allocate_book_id(),
                title: title.to_string(),
                author: None,
                genre: None,
                published_date: "2020-01-01".to_string(),
                price: None,
                availability: true,
            };
            self.library.books.push(book);
            self
        }

        pub fn with_customer(mut self, first: &str, last: &str, email: &str) -> Self {
            let customer = Customer {
                customer_id: self.library.allocate_customer_id(),
                first_name: first.to_string(),
                last_name: last.to_string(),
                email: email.to_string(),
            };
            self.library.customers.push(customer);
            self
        }

        pub fn with_transaction(
            mut self,
            book_id: u32,
            customer_id: u32,
            borrowed: &str,
            returned: Option<&str>,
        ) -> Self {
            let tx = Transaction {
                transaction_id: self.library.allocate_transaction_id(),
                book_id,
                customer_id,
                date_borrowed: borrowed.to_string(),
                date_returned: returned.map(str::to_string),
            };
            self.library.transactions.push(tx);
            self
        }

        pub fn build(self) -> InMemoryStore {
            InMemoryStore::with_library(self.library)
        }

        pub fn build_library(self) -> Library {
            self.library
        }
    }
}
