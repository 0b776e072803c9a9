//! Analytics module for collection statistics
//!
//! Computes material and projectile-point statistics over the artifacts of
//! a site, a catalogue or an artifact type.
//!
//! ## Architecture
//!
//! - **Calculator**: tallies, percentage breakdowns, shape extraction,
//!   dimension averages and material rollups over a slice of artifacts
//! - **Aggregator**: the three entry points; fetch one hydrated root
//!   entity, then summarize its artifacts in a single pass
//! - **Normalizer**: turns a report into the nested JSON object served
//!   over HTTP

mod types;


pub use types::*;

/// Calculator module for tallies and averages
pub mod calculator;


/// Aggregate entry points by site, catalogue and artifact type
pub mod aggregator;


pub mod normalizer;

pub use aggregator::{aggregate_by_catalogue, aggregate_by_point_type, aggregate_by_site, build_report};
