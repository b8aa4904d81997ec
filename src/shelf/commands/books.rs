use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::model::{Author, Book, Genre};
use crate::store::DataStore;

/// Caller-supplied fields for a new or updated book. The identifier and
/// the availability transitions stay with the store and the transaction
/// commands respectively.
#[derive(Debug, Clone)]
pub struct BookDraft {
    pub title: String,
    pub author: Option<Author>,
    pub genre: Option<Genre>,
    pub published_date: String,
    pub price: Option<f64>,
    pub availability: bool,
}

impl Default for BookDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: None,
            genre: None,
            published_date: String::new(),
            price: None,
            // New books go on the shelf unless the caller says otherwise.
            availability: true,
        }
    }
}

pub fn add<S: DataStore>(store: &mut S, draft: BookDraft) -> Result<CmdResult> {
    let mut library = store.load()?;

    let book = Book {
        book_id: library.allocate_book_id(),
        title: draft.title,
        author: draft.author,
        genre: draft.genre,
        published_date: draft.published_date,
        price: draft.price,
        availability: draft.availability,
    };
    library.books.push(book.clone());
    store.save(&library)?;

    let mut result = CmdResult::default().with_books(vec![book.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Book added (#{}): {}",
        book.book_id, book.title
    )));
    Ok(result)
}

pub fn update<S: DataStore>(store: &mut S, id: u32, draft: BookDraft) -> Result<CmdResult> {
    let mut library = store.load()?;

    let book = library
        .book_mut(id)
        .ok_or(ShelfError::BookNotFound(id))?;
    book.title = draft.title;
    book.author = draft.author;
    book.genre = draft.genre;
    book.published_date = draft.published_date;
    book.price = draft.price;
    book.availability = draft.availability;
    let updated = book.clone();

    store.save(&library)?;

    let mut result = CmdResult::default().with_books(vec![updated.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Book updated (#{}): {}",
        updated.book_id, updated.title
    )));
    Ok(result)
}

pub fn remove<S: DataStore>(store: &mut S, id: u32) -> Result<CmdResult> {
    let mut library = store.load()?;

    let position = library
        .books
        .iter()
        .position(|b| b.book_id == id)
        .ok_or(ShelfError::BookNotFound(id))?;
    let removed = library.books.remove(position);

    store.save(&library)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book removed (#{}): {}",
        removed.book_id, removed.title
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::LibraryFixture;
    use crate::store::memory::InMemoryStore;

    fn draft(title: &str) -> BookDraft {
        BookDraft {
            title: title.to_string(),
            author: Some(Author::new("Jane", "Austen")),
            genre: Some(Genre::new("Fiction")),
            published_date: "1815-12-23".to_string(),
            price: Some(12.0),
            ..BookDraft::default()
        }
    }

    #[test]
    fn test_add_allocates_next_id_and_persists() {
        let mut store = LibraryFixture::new()
            .with_book("First", ("A", "B"), "Mystery", 5.0)
            .build();

        let result = add(&mut store, draft("Emma")).unwrap();
        assert_eq!(result.books[0].book_id, 2);

        let library = store.load().unwrap();
        assert_eq!(library.books.len(), 2);
        assert_eq!(library.book(2).unwrap().title, "Emma");
    }

    #[test]
    fn test_add_defaults_to_available() {
        let mut store = InMemoryStore::new();
        let result = add(&mut store, draft("Emma")).unwrap();
        assert!(result.books[0].availability);
    }

    #[test]
    fn test_update_replaces_fields() {
        let mut store = LibraryFixture::new()
            .with_book("Emma", ("Jane", "Austen"), "Fiction", 12.0)
            .build();

        let mut new_draft = draft("Persuasion");
        new_draft.genre = Some(Genre::new("Romance"));
        new_draft.price = Some(9.5);
        update(&mut store, 1, new_draft).unwrap();

        let library = store.load().unwrap();
        let book = library.book(1).unwrap();
        assert_eq!(book.title, "Persuasion");
        assert_eq!(book.genre_name(), "Romance");
        assert_eq!(book.price, Some(9.5));
    }

    #[test]
    fn test_update_missing_book_fails() {
        let mut store = InMemoryStore::new();
        match update(&mut store, 9, draft("Ghost")) {
            Err(ShelfError::BookNotFound(id)) => assert_eq!(id, 9),
            other => panic!("Expected BookNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_remove_deletes_the_record() {
        let mut store = LibraryFixture::new()
            .with_book("Emma", ("Jane", "Austen"), "Fiction", 12.0)
            .with_book("Persuasion", ("Jane", "Austen"), "Fiction", 11.0)
            .build();

        remove(&mut store, 1).unwrap();

        let library = store.load().unwrap();
        assert_eq!(library.books.len(), 1);
        assert!(library.book(1).is_none());
        assert!(library.book(2).is_some());
    }

    #[test]
    fn test_remove_missing_book_fails() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            remove(&mut store, 1),
            Err(ShelfError::BookNotFound(1))
        ));
    }

    #[test]
    fn test_removed_highest_id_gets_reused() {
        let mut store = LibraryFixture::new()
            .with_book("Emma", ("Jane", "Austen"), "Fiction", 12.0)
            .build();

        remove(&mut store, 1).unwrap();
        let result = add(&mut store, draft("Persuasion")).unwrap();
        assert_eq!(result.books[0].book_id, 1);
    }
}
