//! Thin facade over the command layer. UIs hold a [`ShelfApi`] and a
//! [`Session`](crate::session::Session); everything else stays behind it.
//!
//! The api keeps no snapshot of its own: every call reads fresh from the
//! store, so a successful mutation is followed by a full reload on the
//! next listing rather than an in-place patch.

use crate::commands;
use crate::commands::books::BookDraft;
use crate::commands::customers::CustomerDraft;
use crate::commands::transactions::TransactionDraft;
use crate::error::Result;
use crate::model::Library;
use crate::session::Session;
use crate::store::DataStore;
use std::path::PathBuf;

pub struct ShelfApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> ShelfApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The full current snapshot, read fresh.
    pub fn library(&self) -> Result<Library> {
        self.store.load()
    }

    pub fn list(&self, session: &Session) -> Result<CmdResult> {
        commands::list::run(&self.store, session)
    }

    pub fn stats(&self, session: &Session) -> Result<CmdResult> {
        commands::stats::run(&self.store, session)
    }

    pub fn add_book(&mut self, draft: BookDraft) -> Result<CmdResult> {
        commands::books::add(&mut self.store, draft)
    }

    pub fn update_book(&mut self, id: u32, draft: BookDraft) -> Result<CmdResult> {
        commands::books::update(&mut self.store, id, draft)
    }

    pub fn remove_book(&mut self, id: u32) -> Result<CmdResult> {
        commands::books::remove(&mut self.store, id)
    }

    pub fn add_customer(&mut self, draft: CustomerDraft) -> Result<CmdResult> {
        commands::customers::add(&mut self.store, draft)
    }

    pub fn update_customer(&mut self, id: u32, draft: CustomerDraft) -> Result<CmdResult> {
        commands::customers::update(&mut self.store, id, draft)
    }

    pub fn remove_customer(&mut self, id: u32) -> Result<CmdResult> {
        commands::customers::remove(&mut self.store, id)
    }

    pub fn checkout(&mut self, draft: TransactionDraft) -> Result<CmdResult> {
        commands::transactions::checkout(&mut self.store, draft)
    }

    pub fn update_transaction(&mut self, id: u32, draft: TransactionDraft) -> Result<CmdResult> {
        commands::transactions::update(&mut self.store, id, draft)
    }

    pub fn return_book(&mut self, id: u32, returned_on: &str) -> Result<CmdResult> {
        commands::transactions::return_book(&mut self.store, id, returned_on)
    }

    pub fn remove_transaction(&mut self, id: u32) -> Result<CmdResult> {
        commands::transactions::remove(&mut self.store, id)
    }

    pub fn backup(&self, dest: Option<PathBuf>) -> Result<CmdResult> {
        commands::backup::run(&self.store, dest)
    }
}

// Convenience re-exports so binaries and embedders only need the api module.
pub use crate::commands::books::BookDraft as NewBook;
pub use crate::commands::customers::CustomerDraft as NewCustomer;
pub use crate::commands::transactions::TransactionDraft as NewTransaction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, StatsReport};
