//! HTTP route handlers
//!
//! Serves the aggregate statistics endpoints and maps each of the four
//! aggregate outcomes onto a status code and JSON body.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::analytics::{
    aggregate_by_catalogue, aggregate_by_point_type, aggregate_by_site, AggregateOutcome,
};
use crate::error::ErrorResponse;
use crate::storage::CatalogueRepository;

/// Shared state
pub struct AppState {
    pub repo: Arc<dyn CatalogueRepository>,
}

/// `?id=` for site and catalogue routes
#[derive(Debug, Clone, Deserialize)]
pub struct NumericIdQuery {
    pub id: Option<i64>,
}

/// `?id=` for the point type route (`Lithic`, `Ceramic`, `Faunal`)
#[derive(Debug, Clone, Deserialize)]
pub struct TypeIdQuery {
    pub id: Option<String>,
}

/// Plain message body for non-success outcomes
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Maps an aggregate outcome to an HTTP response
pub fn outcome_response(outcome: AggregateOutcome) -> Response {
    match outcome {
        AggregateOutcome::Success(report) => (StatusCode::OK, Json(report.to_json())).into_response(),
        AggregateOutcome::NotFound(scope) => (
            StatusCode::NOT_FOUND,
            Json(MessageResponse {
                message: scope.not_found_message(),
            }),
        )
            .into_response(),
        AggregateOutcome::Empty => (
            StatusCode::BAD_REQUEST,
            Json(MessageResponse {
                message: "Missing id".to_string(),
            }),
        )
            .into_response(),
        AggregateOutcome::Failure(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::from(&err)),
        )
            .into_response(),
    }
}

/// GET /api/stats/site
pub async fn site_stats(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NumericIdQuery>,
) -> Response {
    outcome_response(aggregate_by_site(state.repo.as_ref(), query.id).await)
}

/// GET /api/stats/catalogue
pub async fn catalogue_stats(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NumericIdQuery>,
) -> Response {
    outcome_response(aggregate_by_catalogue(state.repo.as_ref(), query.id).await)
}

/// GET /api/stats/point-type
pub async fn point_type_stats(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TypeIdQuery>,
) -> Response {
    outcome_response(aggregate_by_point_type(state.repo.as_ref(), query.id.as_deref()).await)
}

/// GET /api/health
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
