//! Analytics calculation logic
//!
//! Label tallies, percentage breakdowns, shape extraction, dimension
//! averages and material rollups over a collection of artifacts.

use std::collections::HashSet;

use crate::models::{Artifact, ShapeKind};

use super::{PercentageMap, ProjectilePercentages, ProjectileShapes, TallyMap};

/// Counts occurrences of each label, keeping first-occurrence order
///
/// The counts always sum to the number of labels given.
pub fn tally<I, S>(labels: I) -> TallyMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts = TallyMap::new();
    for label in labels {
        let label = label.as_ref();
        match counts.get_mut(label) {
            Some(count) => *count += 1,
            None => {
                counts.insert(label, 1);
            }
        }
    }
    counts
}

/// Turns counts into fractions of `total`, rendered with two decimals
///
/// `total` is the number of label occurrences, not distinct labels.
///
/// # Returns
/// `None` for empty counts (no data), never an empty map
pub fn percentages(counts: &TallyMap, total: usize) -> Option<PercentageMap> {
    if counts.is_empty() || total == 0 {
        return None;
    }

    Some(
        counts
            .iter()
            .map(|(label, &count)| (label, format_fraction(count, total)))
            .collect(),
    )
}

/// Formats `count / total` fixed to two decimals, rounding half up
///
/// Works on exact integers so `1/8` renders `"0.13"` rather than
/// depending on binary float representation.
pub fn format_fraction(count: usize, total: usize) -> String {
    let (count, total) = (count as u128, total as u128);
    let hundredths = (count * 200 + total) / (total * 2);
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}

/// Rounds to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Label streams pulled from a set of artifacts
///
/// Shape streams keep duplicates so they can be tallied; an artifact
/// without a given shape contributes nothing to that stream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeBreakdown {
    pub blade: Vec<String>,
    pub base: Vec<String>,
    pub hafting: Vec<String>,
    pub cross_section: Vec<String>,
    /// Distinct artifact type ids, first-seen order
    pub type_ids: Vec<String>,
}

impl ShapeBreakdown {
    pub fn labels(&self, kind: ShapeKind) -> &[String] {
        match kind {
            ShapeKind::Blade => &self.blade,
            ShapeKind::Base => &self.base,
            ShapeKind::Hafting => &self.hafting,
            ShapeKind::CrossSection => &self.cross_section,
        }
    }

    fn labels_mut(&mut self, kind: ShapeKind) -> &mut Vec<String> {
        match kind {
            ShapeKind::Blade => &mut self.blade,
            ShapeKind::Base => &mut self.base,
            ShapeKind::Hafting => &mut self.hafting,
            ShapeKind::CrossSection => &mut self.cross_section,
        }
    }

    /// Distinct names per taxonomy, each derived from its own stream
    pub fn distinct_shapes(&self) -> ProjectileShapes {
        ProjectileShapes {
            blade_shapes: distinct(&self.blade),
            base_shapes: distinct(&self.base),
            hafting_shapes: distinct(&self.hafting),
            cross_sections: distinct(&self.cross_section),
        }
    }

    /// Percentage map per taxonomy; an empty stream gives an empty map
    pub fn percentages(&self) -> ProjectilePercentages {
        let breakdown = |kind: ShapeKind| {
            let labels = self.labels(kind);
            percentages(&tally(labels), labels.len()).unwrap_or_default()
        };

        ProjectilePercentages {
            blade_shape: breakdown(ShapeKind::Blade),
            base_shape: breakdown(ShapeKind::Base),
            hafting_shape: breakdown(ShapeKind::Hafting),
            cross_section: breakdown(ShapeKind::CrossSection),
        }
    }
}

/// Extracts the four shape label streams and the distinct type ids
pub fn extract_shape_breakdown(artifacts: &[Artifact]) -> ShapeBreakdown {
    let mut breakdown = ShapeBreakdown::default();
    let mut seen_types = HashSet::new();

    for artifact in artifacts {
        for kind in ShapeKind::ALL {
            if let Some(shape) = artifact.shape(kind) {
                breakdown.labels_mut(kind).push(shape.name.clone());
            }
        }

        if let Some(artifact_type) = &artifact.artifact_type {
            if seen_types.insert(artifact_type.id) {
                breakdown.type_ids.push(artifact_type.id.to_string());
            }
        }
    }

    breakdown
}

/// Deduplicates labels, keeping the first occurrence of each
pub fn distinct(labels: &[String]) -> Vec<String> {
    let mut seen: HashSet<&String> = HashSet::new();
    labels
        .iter()
        .filter(|label| seen.insert(*label))
        .cloned()
        .collect()
}

/// Componentwise mean of artifact dimensions, rounded to two decimals
///
/// # Returns
/// `None` for no artifacts, so absence is never confused with a zero mean
pub fn average_dimensions(artifacts: &[Artifact]) -> Option<[f64; 3]> {
    if artifacts.is_empty() {
        return None;
    }

    let mut sums = [0.0_f64; 3];
    for artifact in artifacts {
        for (sum, value) in sums.iter_mut().zip(artifact.dimensions) {
            *sum += value;
        }
    }

    let count = artifacts.len() as f64;
    Some(sums.map(|sum| round2(sum / count)))
}

/// Material totals across a set of artifacts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialRollup {
    /// Every material mention, duplicates included
    pub count: usize,
    pub distinct_names: Vec<String>,
    /// `None` when there are no artifacts
    pub percentages: Option<PercentageMap>,
}

/// Flattens each artifact's `artifact_type.materials` into one stream
/// and summarizes it
///
/// An artifact type listing several materials contributes each of them
/// once per artifact of that type.
pub fn material_rollup(artifacts: &[Artifact]) -> MaterialRollup {
    let names: Vec<String> = artifacts
        .iter()
        .filter_map(|artifact| artifact.artifact_type.as_ref())
        .flat_map(|artifact_type| artifact_type.materials.iter())
        .map(|material| material.name.clone())
        .collect();

    let breakdown = if artifacts.is_empty() {
        None
    } else {
        percentages(&tally(&names), names.len())
    };

    MaterialRollup {
        count: names.len(),
        distinct_names: distinct(&names),
        percentages: breakdown,
    }
}

/// Percentage breakdown for each of the four shape taxonomies
///
/// `breakdown` must have been extracted from `artifacts`.
///
/// # Returns
/// `None` only for an empty artifact collection
pub fn projectile_percentages(
    artifacts: &[Artifact],
    breakdown: &ShapeBreakdown,
) -> Option<ProjectilePercentages> {
    if artifacts.is_empty() {
        return None;
    }
    Some(breakdown.percentages())
}
