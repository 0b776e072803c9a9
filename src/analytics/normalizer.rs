//! Report normalization
//!
//! Converts an [`AggregateReport`] into the plain nested JSON object the
//! HTTP layer returns. Key names and key order here are what consumers
//! match on.

use serde::{Serialize, Serializer};
use serde_json::{json, Map, Value};

use super::{AggregateReport, PercentageMap, ProjectilePercentages};

fn ordered_to_value(map: &PercentageMap) -> Value {
    let object: Map<String, Value> = map
        .iter()
        .map(|(label, fraction)| (label.to_string(), Value::String(fraction.clone())))
        .collect();
    Value::Object(object)
}

fn optional_percentages(map: Option<&PercentageMap>) -> Value {
    map.map(ordered_to_value).unwrap_or(Value::Null)
}

fn projectile_percentages_value(percentages: Option<&ProjectilePercentages>) -> Value {
    let Some(p) = percentages else {
        return Value::Null;
    };

    // Singular keys here, plural keys under "Projectile Shapes"
    Value::Object(
        [
            ("Blade Shape", &p.blade_shape),
            ("Base Shape", &p.base_shape),
            ("Hafting Shape", &p.hafting_shape),
            ("Cross Section", &p.cross_section),
        ]
        .into_iter()
        .map(|(key, map)| (key.to_string(), ordered_to_value(map)))
        .collect(),
    )
}

/// Builds the two-part `{"Material Data": .., "Projectile Data": ..}` object
pub fn normalize(report: &AggregateReport) -> Value {
    let material = &report.material_data;
    let projectile = &report.projectile_data;
    let shapes = &projectile.projectile_shapes;

    json!({
        "Material Data": {
            "Material Count": material.material_count,
            "Material Types": material.material_types,
            "Material Percentages": optional_percentages(material.material_percentages.as_ref()),
        },
        "Projectile Data": {
            "Projectile Count": projectile.projectile_count,
            "Projectile Shapes": {
                "Blade Shapes": shapes.blade_shapes,
                "Base Shapes": shapes.base_shapes,
                "Hafting Shapes": shapes.hafting_shapes,
                "Cross Sections": shapes.cross_sections,
            },
            "Projectile Percentages": projectile_percentages_value(projectile.projectile_percentages.as_ref()),
            "Projectile Types": projectile.projectile_types,
            "Average Dimensions": projectile.average_dimensions,
        },
    })
}

impl AggregateReport {
    pub fn to_json(&self) -> Value {
        normalize(self)
    }
}

impl Serialize for AggregateReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        normalize(self).serialize(serializer)
    }
}
