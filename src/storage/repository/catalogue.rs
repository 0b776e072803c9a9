//! Catalogue reads
//!
//! Provides hydrated catalogue lookups for the Database.

use rusqlite::OptionalExtension;

use super::artifact::{ArtifactFilter, MaterialCache};
use super::site::{map_site_row, SITE_SELECT};
use super::StorageError;
use crate::models::Catalogue;
use crate::storage::Database;

impl Database {
    /// Load a catalogue with every site and every site's artifacts
    ///
    /// Sites come back in id order, each with its artifacts in id order.
    ///
    /// # Returns
    /// `None` if no catalogue has this id
    pub fn load_catalogue(&self, id: i64) -> Result<Option<Catalogue>, StorageError> {
        let catalogue = self
            .connection()
            .query_row(
                "SELECT id, name, description FROM catalogues WHERE id = ?1",
                [id],
                |row| {
                    Ok(Catalogue {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        description: row.get(2)?,
                        sites: Vec::new(),
                    })
                },
            )
            .optional()?;

        let Some(mut catalogue) = catalogue else {
            return Ok(None);
        };

        let sql = format!("{} WHERE s.catalogue_id = ?1 ORDER BY s.id", SITE_SELECT);
        let mut stmt = self.connection().prepare(&sql)?;
        let mut sites = stmt
            .query_map([catalogue.id], map_site_row)?
            .collect::<Result<Vec<_>, _>>()?;

        // One cache across all sites: materials are per artifact type, not per site
        let mut cache = MaterialCache::new();
        for site in &mut sites {
            site.artifacts = self.load_artifacts(ArtifactFilter::Site(site.id), &mut cache)?;
        }

        catalogue.sites = sites;
        Ok(Some(catalogue))
    }
}
