use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::model::Transaction;
use crate::store::DataStore;

#[derive(Debug, Clone, Default)]
pub struct TransactionDraft {
    pub book_id: u32,
    pub customer_id: u32,
    pub date_borrowed: String,
    pub date_returned: Option<String>,
}

/// Borrow a book: the book must exist and be on the shelf. The new
/// transaction takes the book out of circulation.
pub fn checkout<S: DataStore>(store: &mut S, draft: TransactionDraft) -> Result<CmdResult> {
    let mut library = store.load()?;

    let book = library
        .book(draft.book_id)
        .ok_or(ShelfError::BookNotFound(draft.book_id))?;
    if !book.availability {
        return Err(ShelfError::BookUnavailable(draft.book_id));
    }
    let title = book.title.clone();

    let tx = Transaction {
        transaction_id: library.allocate_transaction_id(),
        book_id: draft.book_id,
        customer_id: draft.customer_id,
        date_borrowed: draft.date_borrowed,
        date_returned: draft.date_returned,
    };
    if let Some(book) = library.book_mut(draft.book_id) {
        book.availability = false;
    }
    library.transactions.push(tx.clone());
    store.save(&library)?;

    let mut result = CmdResult::default().with_transactions(vec![tx.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Checked out \"{}\" to customer #{} (transaction #{})",
        title, tx.customer_id, tx.transaction_id
    )));
    Ok(result)
}

/// Rewrite a transaction. Availability follows the edit: on the same book,
/// setting a return date frees it and clearing one takes it back out; on a
/// book switch, the old book is freed (when still out) and the new one is
/// claimed unless the edited transaction is already returned.
pub fn update<S: DataStore>(store: &mut S, id: u32, draft: TransactionDraft) -> Result<CmdResult> {
    let mut library = store.load()?;

    let orig = library
        .transaction(id)
        .ok_or(ShelfError::TransactionNotFound(id))?;
    let orig_book_id = orig.book_id;
    let orig_returned = orig.date_returned.is_some();

    if library.book(draft.book_id).is_none() {
        return Err(ShelfError::BookNotFound(draft.book_id));
    }

    let new_returned = draft.date_returned.is_some();
    {
        let tx = library
            .transaction_mut(id)
            .ok_or(ShelfError::TransactionNotFound(id))?;
        tx.book_id = draft.book_id;
        tx.customer_id = draft.customer_id;
        tx.date_borrowed = draft.date_borrowed;
        tx.date_returned = draft.date_returned;
    }

    if draft.book_id == orig_book_id {
        if !orig_returned && new_returned {
            if let Some(book) = library.book_mut(orig_book_id) {
                book.availability = true;
            }
        } else if orig_returned && !new_returned {
            if let Some(book) = library.book_mut(orig_book_id) {
                book.availability = false;
            }
        }
    } else {
        if !orig_returned {
            if let Some(book) = library.book_mut(orig_book_id) {
                book.availability = true;
            }
        }
        if let Some(book) = library.book_mut(draft.book_id) {
            book.availability = new_returned;
        }
    }

    let updated = library
        .transaction(id)
        .cloned()
        .ok_or(ShelfError::TransactionNotFound(id))?;
    store.save(&library)?;

    let mut result = CmdResult::default().with_transactions(vec![updated]);
    result.add_message(CmdMessage::success(format!(
        "Transaction updated (#{})",
        id
    )));
    Ok(result)
}

/// Close out a borrow: stamps the return date and puts the book back on
/// the shelf. Refuses transactions that are already closed.
pub fn return_book<S: DataStore>(store: &mut S, id: u32, returned_on: &str) -> Result<CmdResult> {
    let mut library = store.load()?;

    let tx = library
        .transaction_mut(id)
        .ok_or(ShelfError::TransactionNotFound(id))?;
    if tx.date_returned.is_some() {
        return Err(ShelfError::AlreadyReturned(id));
    }
    tx.date_returned = Some(returned_on.to_string());
    let book_id = tx.book_id;
    let updated = tx.clone();

    if let Some(book) = library.book_mut(book_id) {
        book.availability = true;
    }
    store.save(&library)?;

    let mut result = CmdResult::default().with_transactions(vec![updated]);
    result.add_message(CmdMessage::success(format!(
        "Book returned (transaction #{}, {})",
        id, returned_on
    )));
    Ok(result)
}

/// Drop a transaction. A still-open borrow frees its book on the way out.
pub fn remove<S: DataStore>(store: &mut S, id: u32) -> Result<CmdResult> {
    let mut library = store.load()?;

    let position = library
        .transactions
        .iter()
        .position(|t| t.transaction_id == id)
        .ok_or(ShelfError::TransactionNotFound(id))?;
    let removed = library.transactions.remove(position);

    if !removed.is_returned() {
        if let Some(book) = library.book_mut(removed.book_id) {
            book.availability = true;
        }
    }
    store.save(&library)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Transaction removed (#{})",
        removed.transaction_id
    )));
    Ok(result)
}
