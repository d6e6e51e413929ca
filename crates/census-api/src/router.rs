//! REST API router and configuration.

use std::sync::Arc;

use axum::Router;
use axum::http::{Method, header};
use axum::routing::get;
use census_config::ServerConfig;
use census_core::entities::{
    EducationDetails, Employment, IncomeDetails, Individual, JobDetails, RelationshipDetails,
};
use census_db::Record;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the REST API router.
///
/// Endpoints, for each of `individuals`, `employment`, `jobdetails`,
/// `educationdetails`, `incomedetails`, `relationshipdetails`:
/// - POST   /{entity}/      - Create (upsert for 1:1 details)
/// - GET    /{entity}/      - List (`skip`, `limit`)
/// - GET    /{entity}/:id   - Get one
/// - PUT    /{entity}/:id   - Partial update
/// - DELETE /{entity}/:id   - Delete
///
/// The collection routes also answer without the trailing slash.
/// Plus `GET /`, `GET /healthz` and `GET /options`.
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    let state = Arc::new(state);

    let router = Router::new()
        .route("/", get(handlers::root))
        .route("/healthz", get(handlers::healthz))
        .route("/options", get(handlers::options))
        .merge(entity_routes::<Individual>("individuals"))
        .merge(entity_routes::<Employment>("employment"))
        .merge(entity_routes::<JobDetails>("jobdetails"))
        .merge(entity_routes::<EducationDetails>("educationdetails"))
        .merge(entity_routes::<IncomeDetails>("incomedetails"))
        .merge(entity_routes::<RelationshipDetails>("relationshipdetails"))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE])
            .allow_origin(Any);

        router.layer(cors)
    } else {
        router
    }
}

fn entity_routes<R>(path: &str) -> Router<Arc<AppState>>
where
    R: Record + Serialize + 'static,
    R::New: DeserializeOwned + 'static,
    R::Patch: DeserializeOwned + 'static,
{
    let collection = get(handlers::list::<R>).post(handlers::create::<R>);
    Router::new()
        .route(&format!("/{path}"), collection.clone())
        .route(&format!("/{path}/"), collection)
        .route(
            &format!("/{path}/:id"),
            get(handlers::get_one::<R>)
                .put(handlers::update::<R>)
                .delete(handlers::delete::<R>),
        )
}
