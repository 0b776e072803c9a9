//! Artifact type reads
//!
//! Provides hydrated artifact type lookups for the Database.

use rusqlite::OptionalExtension;

use super::artifact::{parse_type_id, ArtifactFilter, MaterialCache};
use super::StorageError;
use crate::models::{ArtifactType, ArtifactTypeId};
use crate::storage::Database;

impl Database {
    /// Load an artifact type with its materials and all of its artifacts
    ///
    /// Each artifact's `artifact_type` relation is the root type itself.
    ///
    /// # Returns
    /// `None` if the type row is absent
    pub fn load_artifact_type(
        &self,
        id: ArtifactTypeId,
    ) -> Result<Option<ArtifactType>, StorageError> {
        let raw_id: Option<String> = self
            .connection()
            .query_row(
                "SELECT id FROM artifact_types WHERE id = ?1",
                [id.as_str()],
                |row| row.get(0),
            )
            .optional()?;

        let Some(raw_id) = raw_id else {
            return Ok(None);
        };
        let id = parse_type_id(&raw_id)?;

        let materials = self.load_materials(id)?;
        let mut cache = MaterialCache::new();
        cache.insert(id, materials.clone());
        let artifacts = self.load_artifacts(ArtifactFilter::ArtifactType(id), &mut cache)?;

        Ok(Some(ArtifactType {
            id,
            materials,
            artifacts,
        }))
    }
}
