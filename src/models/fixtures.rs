//! In-memory entity builders for tests

use super::{Artifact, ArtifactTypeId, ArtifactTypeRef, Material, Shape, ShapeKind};

/// An artifact type relation listing the given material names
pub fn type_ref(id: ArtifactTypeId, materials: &[&str]) -> ArtifactTypeRef {
    ArtifactTypeRef {
        id,
        materials: materials
            .iter()
            .enumerate()
            .map(|(i, name)| Material {
                id: i as i64 + 1,
                name: name.to_string(),
                description: None,
                artifact_type_id: id,
            })
            .collect(),
    }
}

/// A Lithic artifact with no materials, no shapes and unit dimensions
pub fn artifact(id: i64) -> Artifact {
    Artifact {
        id,
        name: format!("Point {}", id),
        location: None,
        description: None,
        dimensions: [1.0, 1.0, 1.0],
        site_id: 1,
        artifact_type: Some(type_ref(ArtifactTypeId::Lithic, &[])),
        blade_shape: None,
        base_shape: None,
        hafting_shape: None,
        cross_section: None,
    }
}

/// Chainable tweaks for test artifacts
pub trait ArtifactExt {
    fn with_type(self, type_ref: ArtifactTypeRef) -> Self;
    fn with_shape(self, kind: ShapeKind, name: &str) -> Self;
    fn with_dimensions(self, dimensions: [f64; 3]) -> Self;
    fn without_type(self) -> Self;
}

impl ArtifactExt for Artifact {
    fn with_type(mut self, type_ref: ArtifactTypeRef) -> Self {
        self.artifact_type = Some(type_ref);
        self
    }

    fn with_shape(mut self, kind: ShapeKind, name: &str) -> Self {
        *self.shape_mut(kind) = Some(Shape {
            id: 1,
            name: name.to_string(),
        });
        self
    }

    fn with_dimensions(mut self, dimensions: [f64; 3]) -> Self {
        self.dimensions = dimensions;
        self
    }

    fn without_type(mut self) -> Self {
        self.artifact_type = None;
        self
    }
}
