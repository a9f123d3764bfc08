//! Axum integration tests
//!
//! Exercises the `ParsedQuery` extractor and the GET-only middleware
//! through a real router with `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde_json::{json, Value};
use tower::ServiceExt;

use axum_query_builder::{parse_query, BuilderConfig, ParsedQuery};

// =============================================================================
// Helper Functions
// =============================================================================

async fn echo_extractor(parsed: ParsedQuery) -> Json<Value> {
    Json(json!({ "filter": parsed.filter, "limit": parsed.options.limit }))
}

async fn echo_extension(Extension(parsed): Extension<ParsedQuery>) -> Json<Value> {
    Json(json!({ "filter": parsed.filter, "limit": parsed.options.limit }))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn extractor_router(config: BuilderConfig) -> Router {
    Router::new()
        .route("/items", get(echo_extractor))
        .with_state(config)
}

fn middleware_router(config: BuilderConfig) -> Router {
    Router::new()
        .route("/items", get(echo_extension))
        .route("/items", post(|| async { StatusCode::CREATED }))
        .layer(from_fn_with_state(config, parse_query))
}

fn get_request(uri: &str) -> Request {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

// =============================================================================
// Extractor
// =============================================================================

#[tokio::test]
async fn test_extractor_compiles_query() {
    let app = extractor_router(BuilderConfig::default());
    let response = app
        .oneshot(get_request("/items?age[$gte]=18&name=john&$limit=10"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body["filter"],
        json!({ "age": { "$gte": 18 }, "name": "john" })
    );
    assert_eq!(body["limit"], json!(10));
}

#[tokio::test]
async fn test_extractor_applies_defaults() {
    let app = extractor_router(BuilderConfig::default());
    let response = app.oneshot(get_request("/items")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["filter"], json!({}));
    assert_eq!(body["limit"], json!(50));
}

#[tokio::test]
async fn test_extractor_rejects_bad_limit() {
    let app = extractor_router(BuilderConfig::default());
    let response = app.oneshot(get_request("/items?$limit=ten")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], json!(400));
}

#[tokio::test]
async fn test_extractor_repeated_search_keys() {
    let app = extractor_router(BuilderConfig::default());
    let response = app
        .oneshot(get_request("/items?$search=name%7Cjo&$search=city%7Cny"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body["filter"]["$or"],
        json!([
            { "name": { "$regex": "jo" } },
            { "city": { "$regex": "ny" } },
        ])
    );
}

// =============================================================================
// Middleware
// =============================================================================

#[tokio::test]
async fn test_middleware_attaches_extension_on_get() {
    let app = middleware_router(BuilderConfig::default());
    let response = app
        .oneshot(get_request("/items?status[$in]=a,b&$skip=5"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["filter"], json!({ "status": { "$in": ["a", "b"] } }));
}

#[tokio::test]
async fn test_middleware_skips_non_get() {
    let app = middleware_router(BuilderConfig::default());
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/items?$limit=ten") // would be a 400 on GET
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_middleware_answers_400_on_bad_query() {
    let app = middleware_router(BuilderConfig::default());
    let response = app
        .oneshot(get_request("/items?$search=name%7C%28unclosed"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], json!(400));
    assert!(body["error"].as_str().unwrap().contains("pattern"));
}
