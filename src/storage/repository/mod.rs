//! Repository layer for hydrated entity reads
//!
//! The statistics engine fetches its root entities through
//! [`CatalogueRepository`]. Every method returns the full relation graph
//! the engine walks; nothing is loaded lazily afterwards.

mod artifact;
mod artifact_type;
mod catalogue;
mod site;

#[cfg(test)]
pub(crate) mod fixtures;


use std::sync::{Arc, Mutex};

use async_trait::async_trait;

pub use super::error::StorageError;
use super::Database;
use crate::models::{ArtifactType, ArtifactTypeId, Catalogue, Site};

/// Read access to the catalogue entity graph
///
/// Relation paths hydrated by each method:
/// - `find_site`: `artifacts.artifactType.materials`, `artifacts.bladeShape`,
///   `artifacts.baseShape`, `artifacts.haftingShape`, `artifacts.crossSection`
/// - `find_catalogue`: the same paths under `sites.`
/// - `find_artifact_type`: `materials` plus the artifact shape paths
///
/// `Ok(None)` means no entity has that id.
#[async_trait]
pub trait CatalogueRepository: Send + Sync {
    async fn find_site(&self, id: i64) -> Result<Option<Site>, StorageError>;

    async fn find_catalogue(&self, id: i64) -> Result<Option<Catalogue>, StorageError>;

    async fn find_artifact_type(
        &self,
        id: ArtifactTypeId,
    ) -> Result<Option<ArtifactType>, StorageError>;
}

/// [`CatalogueRepository`] backed by the shared SQLite database
///
/// Queries run on the blocking pool because `rusqlite::Connection` is
/// synchronous.
#[derive(Clone)]
pub struct SqliteRepository {
    db: Arc<Mutex<Database>>,
}

impl SqliteRepository {
    pub fn new(db: Arc<Mutex<Database>>) -> Self {
        Self { db }
    }

    async fn with_db<T, F>(&self, query: F) -> Result<T, StorageError>
    where
        T: Send + 'static,
        F: FnOnce(&Database) -> Result<T, StorageError> + Send + 'static,
    {
        let db = Arc::clone(&self.db);
        tokio::task::spawn_blocking(move || {
            let guard = db.lock().map_err(|_| StorageError::LockError)?;
            query(&guard)
        })
        .await
        .map_err(|e| StorageError::Task(e.to_string()))?
    }
}

#[async_trait]
impl CatalogueRepository for SqliteRepository {
    async fn find_site(&self, id: i64) -> Result<Option<Site>, StorageError> {
        self.with_db(move |db| db.load_site(id)).await
    }

    async fn find_catalogue(&self, id: i64) -> Result<Option<Catalogue>, StorageError> {
        self.with_db(move |db| db.load_catalogue(id)).await
    }

    async fn find_artifact_type(
        &self,
        id: ArtifactTypeId,
    ) -> Result<Option<ArtifactType>, StorageError> {
        self.with_db(move |db| db.load_artifact_type(id)).await
    }
}
