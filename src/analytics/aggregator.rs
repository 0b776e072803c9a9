//! Aggregate statistics entry points
//!
//! Resolves a site, catalogue or artifact type through the repository and
//! summarizes its artifacts into an [`AggregateReport`]. Every call fetches
//! afresh; nothing is cached between calls.

use tracing::{debug, error, warn};

use crate::error::AppError;
use crate::models::{Artifact, ArtifactTypeId};
use crate::storage::{CatalogueRepository, StorageError};

use super::calculator::{
    average_dimensions, extract_shape_breakdown, material_rollup, projectile_percentages,
};
use super::{AggregateOutcome, AggregateReport, MaterialData, ProjectileData, Scope};

/// Checks that every relation the report reads was hydrated
///
/// Shape relations are optional and need no check; the artifact type is
/// mandatory, so an artifact without one means the fetch broke its
/// contract.
fn ensure_hydrated(artifacts: &[Artifact]) -> Result<(), AppError> {
    match artifacts.iter().find(|a| a.artifact_type.is_none()) {
        Some(artifact) => Err(AppError::MalformedGraph {
            artifact_id: artifact.id,
            relation: "artifactType",
        }),
        None => Ok(()),
    }
}

/// Summarizes a collection of artifacts into the two-part report
///
/// Zero artifacts is a valid, empty report: counts are 0, percentage and
/// average fields are `None`, lists are empty.
pub fn build_report(artifacts: &[Artifact]) -> Result<AggregateReport, AppError> {
    ensure_hydrated(artifacts)?;

    let materials = material_rollup(artifacts);
    let breakdown = extract_shape_breakdown(artifacts);

    Ok(AggregateReport {
        material_data: MaterialData {
            material_count: materials.count,
            material_types: materials.distinct_names,
            material_percentages: materials.percentages,
        },
        projectile_data: ProjectileData {
            projectile_count: artifacts.len(),
            projectile_shapes: breakdown.distinct_shapes(),
            projectile_percentages: projectile_percentages(artifacts, &breakdown),
            projectile_types: breakdown.type_ids,
            average_dimensions: average_dimensions(artifacts),
        },
    })
}

/// Maps a fetch result onto the four-way outcome
fn resolve(
    scope: Scope,
    id: &str,
    fetched: Result<Option<Vec<Artifact>>, StorageError>,
) -> AggregateOutcome {
    match fetched {
        Ok(Some(artifacts)) => match build_report(&artifacts) {
            Ok(report) => {
                debug!(
                    scope = %scope,
                    id,
                    artifacts = artifacts.len(),
                    materials = report.material_data.material_count,
                    "aggregate report built"
                );
                AggregateOutcome::Success(report)
            }
            Err(e) => {
                error!(scope = %scope, id, error = %e, "aggregate over malformed graph");
                AggregateOutcome::Failure(e)
            }
        },
        Ok(None) => {
            warn!(scope = %scope, id, "{}", scope.not_found_message());
            AggregateOutcome::NotFound(scope)
        }
        Err(e) => {
            error!(scope = %scope, id, error = %e, "aggregate fetch failed");
            AggregateOutcome::Failure(e.into())
        }
    }
}

/// Statistics over the artifacts of one site
///
/// # Returns
/// `Empty` without fetching when `id` is `None`
pub async fn aggregate_by_site<R>(repo: &R, id: Option<i64>) -> AggregateOutcome
where
    R: CatalogueRepository + ?Sized,
{
    let Some(id) = id else {
        return AggregateOutcome::Empty;
    };
    debug!(site_id = id, "fetching site for aggregation");

    let fetched = repo
        .find_site(id)
        .await
        .map(|site| site.map(|site| site.artifacts));
    resolve(Scope::Site, &id.to_string(), fetched)
}

/// Statistics over every artifact of every site in a catalogue
///
/// Artifacts are taken site by site, in the order the repository returns
/// the sites.
pub async fn aggregate_by_catalogue<R>(repo: &R, id: Option<i64>) -> AggregateOutcome
where
    R: CatalogueRepository + ?Sized,
{
    let Some(id) = id else {
        return AggregateOutcome::Empty;
    };
    debug!(catalogue_id = id, "fetching catalogue for aggregation");

    let fetched = repo
        .find_catalogue(id)
        .await
        .map(|catalogue| catalogue.map(|catalogue| catalogue.artifacts().cloned().collect()));
    resolve(Scope::Catalogue, &id.to_string(), fetched)
}

/// Statistics over the artifacts of one artifact type (`"Lithic"`, ...)
///
/// An id that names no known artifact type is a domain miss and is not
/// fetched.
pub async fn aggregate_by_point_type<R>(repo: &R, id: Option<&str>) -> AggregateOutcome
where
    R: CatalogueRepository + ?Sized,
{
    let Some(raw_id) = id else {
        return AggregateOutcome::Empty;
    };

    let type_id: ArtifactTypeId = match raw_id.parse() {
        Ok(type_id) => type_id,
        Err(e) => {
            warn!(artifact_type = raw_id, error = %e, "ArtifactType not found");
            return AggregateOutcome::NotFound(Scope::ArtifactType);
        }
    };
    debug!(artifact_type = %type_id, "fetching artifact type for aggregation");

    let fetched = repo
        .find_artifact_type(type_id)
        .await
        .map(|artifact_type| artifact_type.map(|artifact_type| artifact_type.artifacts));
    resolve(Scope::ArtifactType, raw_id, fetched)
}
