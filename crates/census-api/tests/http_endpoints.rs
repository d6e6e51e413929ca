//! Drive the router with `tower::ServiceExt::oneshot`, no socket involved.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use census_api::{AppState, create_router};
use census_config::{ServerConfig, UpsertStrategy};
use census_db::CensusDb;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn test_app(strategy: UpsertStrategy) -> Router {
    test_app_with_db(strategy).await.0
}

async fn test_app_with_db(strategy: UpsertStrategy) -> (Router, Arc<CensusDb>) {
    let db = Arc::new(
        CensusDb::open_local(":memory:")
            .await
            .unwrap()
            .with_upsert_strategy(strategy),
    );
    let config = ServerConfig::default();
    let app = create_router(
        AppState::new(Arc::clone(&db), config.default_limit),
        &config,
    );
    (app, db)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create_individual(app: &Router, age: i64) -> i64 {
    let (status, body) = send(
        app,
        Method::POST,
        "/individuals/",
        Some(json!({
            "age": age,
            "fnlwgt": 77516,
            "sex": "Male",
            "hours_per_week": 40,
            "native_country": "United-States"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body["individual_id"].as_i64().unwrap()
}

#[tokio::test]
async fn root_and_health() {
    let app = test_app(UpsertStrategy::Native).await;

    let (status, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("Census"));

    let (status, body) = send(&app, Method::GET, "/healthz", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn options_lists_enumerations() {
    let app = test_app(UpsertStrategy::Native).await;
    let (status, body) = send(&app, Method::GET, "/options", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sex"], json!(["Male", "Female", "other"]));
    assert_eq!(body["income_class"], json!(["<=50K", ">50K"]));
    assert!(body["workclass"].as_array().unwrap().len() > 1);
}

#[rstest]
#[case(UpsertStrategy::Native)]
#[case(UpsertStrategy::Fallback)]
#[tokio::test]
async fn income_posted_twice_keeps_latest(#[case] strategy: UpsertStrategy) {
    let app = test_app(strategy).await;
    let id = create_individual(&app, 39).await;
    assert_eq!(id, 1);

    for class in [">50K", "<=50K"] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/incomedetails/",
            Some(json!({"individual_id": id, "income_class": class})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&app, Method::GET, "/incomedetails/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{"individual_id": 1, "income_class": "<=50K"}]));
}

#[tokio::test]
async fn child_for_missing_individual_is_404() {
    let app = test_app(UpsertStrategy::Native).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/incomedetails/",
        Some(json!({"individual_id": 999, "income_class": ">50K"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Individual not found"}));

    let (status, _) = send(
        &app,
        Method::POST,
        "/employment/",
        Some(json!({"individual_id": 999})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[case("/individuals/", json!({"age": 39, "fnlwgt": 1, "sex": "M", "hours_per_week": 40}))]
#[case("/incomedetails/", json!({"individual_id": 1, "income_class": "50K"}))]
#[case("/individuals/", json!({"age": "old"}))]
#[tokio::test]
async fn invalid_payloads_are_422(#[case] uri: &str, #[case] payload: Value) {
    let app = test_app(UpsertStrategy::Native).await;
    create_individual(&app, 39).await;

    let (status, body) = send(&app, Method::POST, uri, Some(payload)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());

    let (_, rows) = send(&app, Method::GET, "/incomedetails/", None).await;
    assert_eq!(rows, json!([]));
}

#[tokio::test]
async fn pagination_bounds() {
    let app = test_app(UpsertStrategy::Native).await;
    for age in [20, 30, 40] {
        create_individual(&app, age).await;
    }

    let (status, body) = send(&app, Method::GET, "/individuals/?skip=1&limit=1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["age"], 30);

    let (status, body) = send(&app, Method::GET, "/individuals/?skip=10", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = send(&app, Method::GET, "/individuals/?skip=-1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("non-negative"));
}

#[tokio::test]
async fn get_update_delete_individual() {
    let app = test_app(UpsertStrategy::Native).await;
    let id = create_individual(&app, 39).await;
    let uri = format!("/individuals/{id}");

    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sex"], "Male");

    let (status, body) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({"hours_per_week": 60, "native_country": null})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hours_per_week"], 60);
    assert_eq!(body["age"], 39);
    assert_eq!(body["native_country"], Value::Null);

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Individual deleted successfully"}));

    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Individual not found"}));
}

#[tokio::test]
async fn update_missing_row_is_404() {
    let app = test_app(UpsertStrategy::Native).await;
    let (status, body) = send(
        &app,
        Method::PUT,
        "/jobdetails/5",
        Some(json!({"workclass": "Private"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "JobDetails not found"}));
}

#[tokio::test]
async fn deleting_individual_cascades_over_http() {
    let app = test_app(UpsertStrategy::Native).await;
    let id = create_individual(&app, 45).await;

    let details = [
        ("/jobdetails/", json!({"individual_id": id, "workclass": "Private", "occupation": "Sales"})),
        ("/educationdetails/", json!({"individual_id": id, "education_level": "Bachelors", "education_num": 13})),
        ("/relationshipdetails/", json!({"individual_id": id, "marital_status": "Divorced", "relationship_status": "Unmarried"})),
        ("/employment/", json!({"individual_id": id, "capital_gain": 14084})),
    ];
    for (uri, payload) in details {
        let (status, body) = send(&app, Method::POST, uri, Some(payload)).await;
        assert_eq!(status, StatusCode::OK, "{uri}: {body}");
    }

    let (status, _) = send(&app, Method::DELETE, &format!("/individuals/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    for uri in ["/jobdetails/", "/educationdetails/", "/relationshipdetails/", "/employment/"] {
        let (_, rows) = send(&app, Method::GET, uri, None).await;
        assert_eq!(rows, json!([]), "{uri} should be empty");
    }
}

#[tokio::test]
async fn employment_uses_its_own_id() {
    let app = test_app(UpsertStrategy::Native).await;
    let id = create_individual(&app, 45).await;

    let (_, created) = send(
        &app,
        Method::POST,
        "/employment/",
        Some(json!({"individual_id": id, "capital_loss": 1902})),
    )
    .await;
    assert_eq!(created["capital_gain"], 0);
    let employment_id = created["employment_id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/employment/{employment_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["capital_loss"], 1902);
}

#[tokio::test]
async fn non_numeric_id_is_422() {
    let app = test_app(UpsertStrategy::Native).await;
    let (status, body) = send(&app, Method::GET, "/individuals/abc", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn unresolved_upsert_conflict_is_500() {
    let (app, db) = test_app_with_db(UpsertStrategy::Fallback).await;
    let id = create_individual(&app, 39).await;

    {
        // Every insert reports a conflict, but there is no row to update.
        let session = db.session().await.unwrap();
        session
            .conn()
            .execute_batch(
                "CREATE TRIGGER income_phantom_conflict BEFORE INSERT ON incomedetails \
                 BEGIN SELECT RAISE(ABORT, 'UNIQUE constraint failed: incomedetails.individual_id'); END;",
            )
            .await
            .unwrap();
    }

    let (status, body) = send(
        &app,
        Method::POST,
        "/incomedetails/",
        Some(json!({"individual_id": id, "income_class": ">50K"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["detail"].as_str().unwrap().contains("Integrity conflict"), "{body}");

    let (_, rows) = send(&app, Method::GET, "/incomedetails/", None).await;
    assert_eq!(rows, json!([]));
}

#[tokio::test]
async fn collection_routes_accept_missing_trailing_slash() {
    let app = test_app(UpsertStrategy::Native).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/individuals",
        Some(json!({"age": 52, "fnlwgt": 209_642, "sex": "Female", "hours_per_week": 45})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");

    let (status, body) = send(&app, Method::GET, "/individuals", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["sex"], "Female");
}
