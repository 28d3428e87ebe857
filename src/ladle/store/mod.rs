//! # Storage Layer
//!
//! The [`DataStore`] trait abstracts persistence of the recipe collection.
//! The collection is always read and written as a whole: one JSON array,
//! rewritten completely after every mutation. There is no incremental or
//! append persistence.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production whole-file JSON storage
//!   - a missing document is an empty collection, not an error
//!   - an unparseable document falls back to an empty collection; the CLI
//!     surfaces a diagnostic once at startup via [`fs::FileStore::parse_warning`]
//!   - writes go to a temporary file first, then rename over the original
//!
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!   - no persistence, fast isolated test execution
//!
//! Exactly one process is assumed to use the document during a session;
//! concurrent external writers are out of scope.

use crate::error::Result;
use crate::model::Recipe;

pub mod fs;
pub mod memory;

/// Abstract interface for recipe collection storage.
///
/// `load_recipes` must always return a usable (possibly empty) collection
/// in original insertion order; `save_recipes` replaces the stored
/// collection completely.
pub trait DataStore {
    /// Load the full collection.
    fn load_recipes(&self) -> Result<Vec<Recipe>>;

    /// Persist the full collection, replacing whatever was stored before.
    fn save_recipes(&mut self, recipes: &[Recipe]) -> Result<()>;
}
