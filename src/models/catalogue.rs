//! Collection hierarchy data models
//!
//! Catalogues group sites, sites group artifacts.

use serde::{Deserialize, Serialize};

use super::artifact::Artifact;

/// Top-level collection grouping sites
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalogue {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Sites in ascending id order
    #[serde(default)]
    pub sites: Vec<Site>,
}

impl Catalogue {
    /// Iterates every artifact of every site, site by site
    pub fn artifacts(&self) -> impl Iterator<Item = &Artifact> {
        self.sites.iter().flat_map(|site| site.artifacts.iter())
    }
}

/// Geographic region a site belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A dig or find location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub catalogue_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
    /// Artifacts in ascending id order
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
}
