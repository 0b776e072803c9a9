//! Local storage module
//!
//! Provides SQLite-backed, read-only access to the catalogue entity graph
//! and the repository seam the statistics engine fetches through.

mod database;
mod error;
mod repository;

pub use database::Database;
pub use error::StorageError;
pub use repository::{CatalogueRepository, SqliteRepository};
