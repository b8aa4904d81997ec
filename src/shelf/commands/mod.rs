//! Command layer: the business logic behind every CLI action, written as
//! pure functions over a [`crate::store::DataStore`]. Each command loads
//! the snapshot, works on its own copy, and saves the whole thing back;
//! nothing edits stored state in place.

use crate::model::{Book, Customer, Transaction};
use std::path::PathBuf;

pub mod backup;
pub mod books;
pub mod customers;
pub mod list;
pub mod stats;
pub mod transactions;

pub use stats::StatsReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a command hands back to the caller: the records it listed or
/// touched, any statistics it computed, and messages for the user.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub books: Vec<Book>,
    pub customers: Vec<Customer>,
    pub transactions: Vec<Transaction>,
    pub stats: Option<StatsReport>,
    pub archive_path: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_books(mut self, books: Vec<Book>) -> Self {
        self.books = books;
        self
    }

    pub fn with_customers(mut self, customers: Vec<Customer>) -> Self {
        self.customers = customers;
        self
    }

    pub fn with_transactions(mut self, transactions: Vec<Transaction>) -> Self {
        self.transactions = transactions;
        self
    }

    pub fn with_stats(mut self, stats: StatsReport) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_archive_path(mut self, path: PathBuf) -> Self {
        self.archive_path = Some(path);
        self
    }
}
