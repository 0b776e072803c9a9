//! Test fixtures that seed catalogue rows with plain SQL

use rusqlite::params;

use crate::models::{ArtifactTypeId, ShapeKind};
use crate::storage::Database;

/// Row values for one seeded artifact
#[derive(Debug, Clone)]
pub struct ArtifactSeed {
    pub name: String,
    pub site_id: i64,
    pub type_id: ArtifactTypeId,
    pub dimensions: [f64; 3],
    pub blade_shape: Option<String>,
    pub base_shape: Option<String>,
    pub hafting_shape: Option<String>,
    pub cross_section: Option<String>,
}

impl ArtifactSeed {
    pub fn new(site_id: i64, type_id: ArtifactTypeId) -> Self {
        Self {
            name: "Test Point".to_string(),
            site_id,
            type_id,
            dimensions: [1.0, 1.0, 1.0],
            blade_shape: None,
            base_shape: None,
            hafting_shape: None,
            cross_section: None,
        }
    }

    pub fn dimensions(mut self, dimensions: [f64; 3]) -> Self {
        self.dimensions = dimensions;
        self
    }

    pub fn shape(mut self, kind: ShapeKind, name: &str) -> Self {
        let slot = match kind {
            ShapeKind::Blade => &mut self.blade_shape,
            ShapeKind::Base => &mut self.base_shape,
            ShapeKind::Hafting => &mut self.hafting_shape,
            ShapeKind::CrossSection => &mut self.cross_section,
        };
        *slot = Some(name.to_string());
        self
    }

    /// Attach all four test shapes used by the single-artifact scenario
    pub fn with_test_shapes(self) -> Self {
        self.shape(ShapeKind::Blade, "Test Blade Shape")
            .shape(ShapeKind::Base, "Test Base Shape")
            .shape(ShapeKind::Hafting, "Test Hafting Shape")
            .shape(ShapeKind::CrossSection, "Test Cross Section")
    }
}

/// Lookup table holding a shape taxonomy
fn shape_table(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Blade => "blade_shapes",
        ShapeKind::Base => "base_shapes",
        ShapeKind::Hafting => "hafting_shapes",
        ShapeKind::CrossSection => "cross_sections",
    }
}

impl Database {
    pub fn insert_catalogue(&self, name: &str) -> i64 {
        self.connection()
            .execute("INSERT INTO catalogues (name) VALUES (?1)", [name])
            .unwrap();
        self.connection().last_insert_rowid()
    }

    pub fn insert_region(&self, name: &str) -> i64 {
        self.connection()
            .execute("INSERT INTO regions (name) VALUES (?1)", [name])
            .unwrap();
        self.connection().last_insert_rowid()
    }

    pub fn insert_site(&self, catalogue_id: i64, region_id: Option<i64>, name: &str) -> i64 {
        self.connection()
            .execute(
                "INSERT INTO sites (name, catalogue_id, region_id) VALUES (?1, ?2, ?3)",
                params![name, catalogue_id, region_id],
            )
            .unwrap();
        self.connection().last_insert_rowid()
    }

    pub fn insert_material(&self, type_id: ArtifactTypeId, name: &str) -> i64 {
        self.connection()
            .execute(
                "INSERT INTO materials (name, artifact_type_id) VALUES (?1, ?2)",
                params![name, type_id.as_str()],
            )
            .unwrap();
        self.connection().last_insert_rowid()
    }

    /// Insert a shape name into its taxonomy, reusing an existing row
    pub fn insert_shape(&self, kind: ShapeKind, name: &str) -> i64 {
        let table = shape_table(kind);
        self.connection()
            .execute(
                &format!("INSERT OR IGNORE INTO {} (name) VALUES (?1)", table),
                [name],
            )
            .unwrap();
        self.connection()
            .query_row(
                &format!("SELECT id FROM {} WHERE name = ?1", table),
                [name],
                |row| row.get(0),
            )
            .unwrap()
    }

    pub fn insert_artifact(&self, seed: &ArtifactSeed) -> i64 {
        let shape_id = |kind: ShapeKind, name: &Option<String>| {
            name.as_deref().map(|name| self.insert_shape(kind, name))
        };
        let blade = shape_id(ShapeKind::Blade, &seed.blade_shape);
        let base = shape_id(ShapeKind::Base, &seed.base_shape);
        let hafting = shape_id(ShapeKind::Hafting, &seed.hafting_shape);
        let cross = shape_id(ShapeKind::CrossSection, &seed.cross_section);

        self.connection()
            .execute(
                "INSERT INTO artifacts (name, length, width, thickness, site_id, artifact_type_id,
                                        blade_shape_id, base_shape_id, hafting_shape_id, cross_section_id)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                params![
                    seed.name,
                    seed.dimensions[0],
                    seed.dimensions[1],
                    seed.dimensions[2],
                    seed.site_id,
                    seed.type_id.as_str(),
                    blade,
                    base,
                    hafting,
                    cross,
                ],
            )
            .unwrap();
        self.connection().last_insert_rowid()
    }

    /// A catalogue with one site holding one fully classified Lithic point
    ///
    /// # Returns
    /// (catalogue id, site id)
    pub fn seed_single_artifact_site(&self) -> (i64, i64) {
        let catalogue_id = self.insert_catalogue("Test Catalogue");
        let region_id = self.insert_region("Test Region");
        let site_id = self.insert_site(catalogue_id, Some(region_id), "Test Site");
        self.insert_material(ArtifactTypeId::Lithic, "Test Lithic Material");
        self.insert_artifact(&ArtifactSeed::new(site_id, ArtifactTypeId::Lithic).with_test_shapes());
        (catalogue_id, site_id)
    }
}
