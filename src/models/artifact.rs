//! Artifact data models
//!
//! Defines projectile points, their artifact types and materials, and the
//! four shape taxonomies an artifact may be classified under.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Fixed artifact type identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtifactTypeId {
    Lithic,
    Ceramic,
    Faunal,
}

impl ArtifactTypeId {
    /// All known identifiers, in declaration order
    pub const ALL: [ArtifactTypeId; 3] = [Self::Lithic, Self::Ceramic, Self::Faunal];

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactTypeId::Lithic => "Lithic",
            ArtifactTypeId::Ceramic => "Ceramic",
            ArtifactTypeId::Faunal => "Faunal",
        }
    }
}

impl fmt::Display for ArtifactTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known artifact type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownArtifactType(pub String);

impl fmt::Display for UnknownArtifactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown artifact type: {}", self.0)
    }
}

impl std::error::Error for UnknownArtifactType {}

impl FromStr for ArtifactTypeId {
    type Err = UnknownArtifactType;

    /// Matches the exact identifier (`"Lithic"`, not `"lithic"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownArtifactType(s.to_string()))
    }
}

/// A substance classification attached to an artifact type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub artifact_type_id: ArtifactTypeId,
}

/// A named entry in one of the shape taxonomies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    pub id: i64,
    pub name: String,
}

/// The four independent shape taxonomies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Blade,
    Base,
    Hafting,
    CrossSection,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [Self::Blade, Self::Base, Self::Hafting, Self::CrossSection];
}

/// The artifact-type relation as hydrated on an artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactTypeRef {
    pub id: ArtifactTypeId,
    #[serde(default)]
    pub materials: Vec<Material>,
}

/// Coarse artifact category owning a set of materials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactType {
    pub id: ArtifactTypeId,
    #[serde(default)]
    pub materials: Vec<Material>,
    /// Artifacts in ascending id order
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
}

/// A catalogued find (projectile point)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub id: i64,
    /// Subtype classification
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Length, width, thickness
    pub dimensions: [f64; 3],
    pub site_id: i64,
    /// `None` only when the relation was not hydrated
    #[serde(default)]
    pub artifact_type: Option<ArtifactTypeRef>,
    #[serde(default)]
    pub blade_shape: Option<Shape>,
    #[serde(default)]
    pub base_shape: Option<Shape>,
    #[serde(default)]
    pub hafting_shape: Option<Shape>,
    #[serde(default)]
    pub cross_section: Option<Shape>,
}

impl Artifact {
    /// The shape attached under the given taxonomy, if any
    pub fn shape(&self, kind: ShapeKind) -> Option<&Shape> {
        match kind {
            ShapeKind::Blade => self.blade_shape.as_ref(),
            ShapeKind::Base => self.base_shape.as_ref(),
            ShapeKind::Hafting => self.hafting_shape.as_ref(),
            ShapeKind::CrossSection => self.cross_section.as_ref(),
        }
    }

    /// Mutable access to the shape slot for the given taxonomy
    pub fn shape_mut(&mut self, kind: ShapeKind) -> &mut Option<Shape> {
        match kind {
            ShapeKind::Blade => &mut self.blade_shape,
            ShapeKind::Base => &mut self.base_shape,
            ShapeKind::Hafting => &mut self.hafting_shape,
            ShapeKind::CrossSection => &mut self.cross_section,
        }
    }
}
