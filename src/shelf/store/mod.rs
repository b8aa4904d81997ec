//! # Storage Layer
//!
//! The [`DataStore`] trait abstracts where the library snapshot lives so
//! the command layer works against any backend.
//!
//! ## Design Rationale
//!
//! - **Testing** runs against [`memory::InMemoryStore`] with no filesystem.
//! - **Backends** can change (file today, a service tomorrow) without
//!   touching command logic.
//! - The snapshot moves as a whole: `load` hands out the full [`Library`],
//!   `save` replaces it. There is no partial update surface, matching the
//!   reload-everything lifecycle of the record collections.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one `library.json` document under the data root.
//! - [`memory::InMemoryStore`]: snapshot held in memory, for tests.

use crate::error::Result;
use crate::model::Library;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for snapshot storage.
pub trait DataStore {
    /// Load the full library snapshot. A store with nothing saved yet
    /// returns an empty library.
    fn load(&self) -> Result<Library>;

    /// Replace the stored snapshot wholesale.
    fn save(&mut self, library: &Library) -> Result<()>;

    /// Path of the backing document, for file-based stores.
    fn data_path(&self) -> Result<PathBuf>;
}
