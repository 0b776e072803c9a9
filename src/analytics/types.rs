//! Analytics type definitions
//!
//! Contains the ordered label map, the two-part aggregate report and the
//! four-way outcome returned by the aggregator entry points.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::AppError;

/// Insertion-ordered string-keyed map
///
/// Iteration and serialization follow first-insertion order, so tallies
/// list labels in the order they were first seen.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Insert or replace a value; a replaced key keeps its original position
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        match self.get_mut(&key) {
            Some(slot) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl<V, K: Into<String>> FromIterator<(K, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Label -> count, in first-seen order
pub type TallyMap = OrderedMap<usize>;

/// Label -> fraction rendered with two decimals (`"0.25"`)
pub type PercentageMap = OrderedMap<String>;

/// Material half of the report
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MaterialData {
    /// Total material mentions across all artifacts
    pub material_count: usize,
    /// Distinct material names, first-seen order
    pub material_types: Vec<String>,
    /// `None` when there are no artifacts
    pub material_percentages: Option<PercentageMap>,
}

/// Distinct shape names per taxonomy
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectileShapes {
    pub blade_shapes: Vec<String>,
    pub base_shapes: Vec<String>,
    pub hafting_shapes: Vec<String>,
    pub cross_sections: Vec<String>,
}

/// Shape percentage breakdown per taxonomy
///
/// A taxonomy no artifact is classified under holds an empty map.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectilePercentages {
    pub blade_shape: PercentageMap,
    pub base_shape: PercentageMap,
    pub hafting_shape: PercentageMap,
    pub cross_section: PercentageMap,
}

/// Projectile half of the report
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectileData {
    pub projectile_count: usize,
    pub projectile_shapes: ProjectileShapes,
    /// `None` when there are no artifacts
    pub projectile_percentages: Option<ProjectilePercentages>,
    /// Distinct artifact type ids, first-seen order
    pub projectile_types: Vec<String>,
    /// Componentwise mean of length, width, thickness; `None` when there
    /// are no artifacts
    pub average_dimensions: Option<[f64; 3]>,
}

/// Statistics for one collection of artifacts
///
/// Serializes through [`super::normalizer::normalize`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AggregateReport {
    pub material_data: MaterialData,
    pub projectile_data: ProjectileData,
}

/// Granularity an aggregate was requested at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Site,
    Catalogue,
    ArtifactType,
}

impl Scope {
    /// Entity name as used in messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Site => "Site",
            Scope::Catalogue => "Catalogue",
            Scope::ArtifactType => "ArtifactType",
        }
    }

    /// The domain-miss message for this scope, e.g. `"Site not found"`
    pub fn not_found_message(&self) -> String {
        format!("{} not found", self.as_str())
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of an aggregate entry point
///
/// - `Empty`: no identifier was given, nothing was fetched
/// - `NotFound`: the identifier matches no entity
/// - `Failure`: the fetch failed or returned an unhydrated graph
/// - `Success`: a complete report, possibly over zero artifacts
#[derive(Debug)]
pub enum AggregateOutcome {
    Empty,
    NotFound(Scope),
    Failure(AppError),
    Success(AggregateReport),
}

impl AggregateOutcome {
    pub fn report(&self) -> Option<&AggregateReport> {
        match self {
            AggregateOutcome::Success(report) => Some(report),
            _ => None,
        }
    }

    pub fn into_report(self) -> Option<AggregateReport> {
        match self {
            AggregateOutcome::Success(report) => Some(report),
            _ => None,
        }
    }
}
