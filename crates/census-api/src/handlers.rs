//! REST API request handlers.
//!
//! The CRUD handlers are generic over [`Record`] and instantiated once per
//! table by the router.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use census_core::entities::Individual;
use census_core::responses::{MessageResponse, OptionsResponse};
use census_db::Record;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Pagination query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pagination {
    /// Rows to skip.
    #[serde(default)]
    pub skip: Option<i64>,
    /// Maximum rows; defaults to the configured `server.default_limit`.
    #[serde(default)]
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}

// ============================================================================
// Handler Functions
// ============================================================================

/// POST /{entity}/ - Create, or overwrite for the 1:1 detail tables.
///
/// Child rows are rejected with 404 before touching their table when the
/// referenced individual does not exist.
pub async fn create<R>(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<R::New>, JsonRejection>,
) -> Result<Json<R>, ApiError>
where
    R: Record + Serialize,
    R::New: DeserializeOwned,
{
    let Json(new) = payload?;
    let session = state.db.session().await?;

    if let Some(individual_id) = R::parent_id(&new) {
        if !session.exists::<Individual>(individual_id).await? {
            return Err(ApiError::NotFound("Individual not found".into()));
        }
    }

    let created = session.create::<R>(&new).await?;
    debug!(table = R::table(), key = created.key(), "created");
    Ok(Json(created))
}

/// GET /{entity}/?skip=&limit= - List rows ordered by key.
pub async fn list<R>(
    State(state): State<Arc<AppState>>,
    query: Result<Query<Pagination>, QueryRejection>,
) -> Result<Json<Vec<R>>, ApiError>
where
    R: Record + Serialize,
{
    let Query(page) = query?;
    let session = state.db.session().await?;
    let rows = session
        .get_many::<R>(
            page.skip.unwrap_or(0),
            page.limit.unwrap_or(state.default_limit),
        )
        .await?;
    Ok(Json(rows))
}

/// GET /{entity}/{id}
pub async fn get_one<R>(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<R>, ApiError>
where
    R: Record + Serialize,
{
    let Path(id) = id?;
    let session = state.db.session().await?;
    Ok(Json(session.get_one::<R>(id).await?))
}

/// PUT /{entity}/{id} - Partial update; absent fields are unchanged.
pub async fn update<R>(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<R::Patch>, JsonRejection>,
) -> Result<Json<R>, ApiError>
where
    R: Record + Serialize,
    R::Patch: DeserializeOwned,
{
    let Path(id) = id?;
    let Json(patch) = payload?;
    let session = state.db.session().await?;
    Ok(Json(session.update::<R>(id, &patch).await?))
}

/// DELETE /{entity}/{id}
pub async fn delete<R>(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError>
where
    R: Record,
{
    let Path(id) = id?;
    let session = state.db.session().await?;
    Ok(Json(session.delete::<R>(id).await?))
}

/// GET /
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome to the Census Income API"))
}

/// GET /healthz - Succeeds once the store answers a trivial query.
pub async fn healthz(State(state): State<Arc<AppState>>) -> Result<Json<HealthResponse>, ApiError> {
    let session = state.db.session().await?;
    session.ping().await?;
    Ok(Json(HealthResponse {
        status: "ok".into(),
    }))
}

/// GET /options - Allowed enumerations and form vocabularies.
pub async fn options() -> Json<OptionsResponse> {
    Json(OptionsResponse::default())
}
