//! Site reads
//!
//! Provides hydrated site lookups for the Database.

use rusqlite::{OptionalExtension, Row};

use super::artifact::{ArtifactFilter, MaterialCache};
use super::StorageError;
use crate::models::{Region, Site};
use crate::storage::Database;

pub(super) const SITE_SELECT: &str = "
    SELECT s.id, s.name, s.description, s.location, s.catalogue_id,
           r.id, r.name, r.description
    FROM sites s
    LEFT JOIN regions r ON r.id = s.region_id";

pub(super) fn map_site_row(row: &Row<'_>) -> rusqlite::Result<Site> {
    let region_id: Option<i64> = row.get(5)?;
    let region = match region_id {
        Some(id) => Some(Region {
            id,
            name: row.get(6)?,
            description: row.get(7)?,
        }),
        None => None,
    };

    Ok(Site {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        location: row.get(3)?,
        catalogue_id: row.get(4)?,
        region,
        artifacts: Vec::new(),
    })
}

impl Database {
    /// Load a site with its artifacts and their relations
    ///
    /// # Returns
    /// `None` if no site has this id
    pub fn load_site(&self, id: i64) -> Result<Option<Site>, StorageError> {
        let sql = format!("{} WHERE s.id = ?1", SITE_SELECT);
        let site = self
            .connection()
            .query_row(&sql, [id], map_site_row)
            .optional()?;

        let Some(mut site) = site else {
            return Ok(None);
        };

        let mut cache = MaterialCache::new();
        site.artifacts = self.load_artifacts(ArtifactFilter::Site(site.id), &mut cache)?;
        Ok(Some(site))
    }
}
