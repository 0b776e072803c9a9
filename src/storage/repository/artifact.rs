//! Artifact row hydration
//!
//! Loads artifacts with their four shape relations in one query and
//! attaches artifact-type materials, loading each type's materials once.

use std::collections::HashMap;

use rusqlite::{params_from_iter, Row, ToSql};

use super::StorageError;
use crate::models::{
    Artifact, ArtifactTypeId, ArtifactTypeRef, Material, Shape, ShapeKind, UnknownArtifactType,
};
use crate::storage::Database;

const ARTIFACT_SELECT: &str = "
    SELECT a.id, a.name, a.location, a.description, a.length, a.width, a.thickness,
           a.site_id, a.artifact_type_id,
           bl.id, bl.name, ba.id, ba.name, ha.id, ha.name, cs.id, cs.name
    FROM artifacts a
    LEFT JOIN blade_shapes bl ON bl.id = a.blade_shape_id
    LEFT JOIN base_shapes ba ON ba.id = a.base_shape_id
    LEFT JOIN hafting_shapes ha ON ha.id = a.hafting_shape_id
    LEFT JOIN cross_sections cs ON cs.id = a.cross_section_id";

/// Index of the first shape column; each shape takes an (id, name) pair
/// in `ShapeKind::ALL` order.
const FIRST_SHAPE_COLUMN: usize = 9;

/// Which artifacts to load
#[derive(Debug, Clone, Copy)]
pub(super) enum ArtifactFilter {
    Site(i64),
    ArtifactType(ArtifactTypeId),
}

/// Materials per artifact type, filled on first use during one hydration
pub(super) type MaterialCache = HashMap<ArtifactTypeId, Vec<Material>>;

pub(super) fn parse_type_id(raw: &str) -> Result<ArtifactTypeId, StorageError> {
    raw.parse()
        .map_err(|e: UnknownArtifactType| StorageError::InvalidData(e.to_string()))
}

fn map_artifact_row(row: &Row<'_>) -> rusqlite::Result<(Artifact, String)> {
    let mut artifact = Artifact {
        id: row.get(0)?,
        name: row.get(1)?,
        location: row.get(2)?,
        description: row.get(3)?,
        dimensions: [row.get(4)?, row.get(5)?, row.get(6)?],
        site_id: row.get(7)?,
        artifact_type: None,
        blade_shape: None,
        base_shape: None,
        hafting_shape: None,
        cross_section: None,
    };
    let type_id: String = row.get(8)?;

    for (i, kind) in ShapeKind::ALL.into_iter().enumerate() {
        let column = FIRST_SHAPE_COLUMN + i * 2;
        let id: Option<i64> = row.get(column)?;
        let name: Option<String> = row.get(column + 1)?;
        if let (Some(id), Some(name)) = (id, name) {
            *artifact.shape_mut(kind) = Some(Shape { id, name });
        }
    }

    Ok((artifact, type_id))
}

impl Database {
    /// Load the materials of one artifact type, in id order
    pub fn load_materials(&self, type_id: ArtifactTypeId) -> Result<Vec<Material>, StorageError> {
        let mut stmt = self.connection().prepare(
            "SELECT id, name, description FROM materials WHERE artifact_type_id = ?1 ORDER BY id",
        )?;

        let materials = stmt
            .query_map([type_id.as_str()], |row| {
                Ok(Material {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    description: row.get(2)?,
                    artifact_type_id: type_id,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(materials)
    }

    /// Load artifacts matching `filter`, in id order, fully hydrated
    pub(super) fn load_artifacts(
        &self,
        filter: ArtifactFilter,
        cache: &mut MaterialCache,
    ) -> Result<Vec<Artifact>, StorageError> {
        let (clause, param): (&str, Box<dyn ToSql>) = match filter {
            ArtifactFilter::Site(id) => ("a.site_id = ?1", Box::new(id)),
            ArtifactFilter::ArtifactType(id) => ("a.artifact_type_id = ?1", Box::new(id.as_str())),
        };
        let sql = format!("{} WHERE {} ORDER BY a.id", ARTIFACT_SELECT, clause);

        let mut stmt = self.connection().prepare(&sql)?;
        let rows = stmt
            .query_map(params_from_iter([param]), map_artifact_row)?
            .collect::<Result<Vec<_>, _>>()?;

        let mut artifacts = Vec::with_capacity(rows.len());
        for (mut artifact, raw_type_id) in rows {
            let type_id = parse_type_id(&raw_type_id)?;
            let materials = match cache.get(&type_id) {
                Some(materials) => materials.clone(),
                None => {
                    let materials = self.load_materials(type_id)?;
                    cache.insert(type_id, materials.clone());
                    materials
                }
            };
            artifact.artifact_type = Some(ArtifactTypeRef {
                id: type_id,
                materials,
            });
            artifacts.push(artifact);
        }

        Ok(artifacts)
    }
}
