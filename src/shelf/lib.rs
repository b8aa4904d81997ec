//! # Shelf Architecture
//!
//! Shelf is a **UI-agnostic library-management core**. The crate is a library
//! that happens to ship a CLI client, not the other way around; a browser
//! front end or a REST service could sit on the same core unchanged.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats tables, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic: CRUD, filtered listings, statistics      │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait over a whole-library snapshot   │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Filter Engine
//!
//! The heart of the crate is a pure filter/aggregate engine over the three
//! record collections (books, customers, transactions):
//!
//! - [`criteria`]: one shared [`criteria::FilterCriteria`] shape across all
//!   views, plus the canonical field-value conversions
//! - [`filter`]: per-kind predicates and `filter_*` functions
//! - [`stats`]: genre tallies, average price, returned/unreturned counts
//! - [`session`]: the draft/applied lifecycle a caller owns
//!
//! These modules hold no state and do no I/O; they take immutable snapshots
//! in and hand owned results back. Draft edits in a [`session::Session`]
//! never leak into rendered output until the caller applies them.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns
//! `Result<CmdResult>`, never touches stdout/stderr, and never assumes a
//! terminal.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core record types (`Book`, `Customer`, `Transaction`,
//!   `Library`)
//! - [`criteria`] / [`filter`] / [`stats`] / [`session`]: the filter engine
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: argument parsing and printing for the binary (not part of the
//!   lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod criteria;
pub mod error;
pub mod filter;
pub mod model;
pub mod session;
pub mod stats;
pub mod store;
