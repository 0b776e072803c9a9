//! Catalogue data models
//!
//! This module defines the entity graph the statistics engine reads:
//! catalogues, sites, artifacts, artifact types, materials and shapes.

pub mod artifact;
pub mod catalogue;

pub use artifact::*;
pub use catalogue::*;

#[cfg(test)]
pub(crate) mod fixtures;
