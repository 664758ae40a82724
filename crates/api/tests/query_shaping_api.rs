//! Integration tests for the query-shaping rejection paths.
//!
//! Invalid `orderBy` and `fields` expressions must be rejected with a
//! 400 before any query reaches the database; the test pool points at
//! an unreachable address precisely so a regression that queries
//! storage first surfaces as a loud failure instead of a silent pass.

mod common;

use axum::http::StatusCode;
use common::{build_test_app, get_expecting};

// ---------------------------------------------------------------------------
// orderBy validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_order_by_field_returns_400() {
    let app = build_test_app();
    let json = get_expecting(
        app,
        "/api/v1/authors?orderBy=title",
        StatusCode::BAD_REQUEST,
    )
    .await;

    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].as_str().unwrap().contains("orderBy"));
}

#[tokio::test]
async fn unknown_field_in_multi_token_order_by_returns_400() {
    let app = build_test_app();
    get_expecting(
        app,
        "/api/v1/authors?orderBy=name%20desc,bogus",
        StatusCode::BAD_REQUEST,
    )
    .await;
}

// ---------------------------------------------------------------------------
// fields validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_projection_field_returns_400() {
    let app = build_test_app();
    let json = get_expecting(
        app,
        "/api/v1/authors?fields=id,title",
        StatusCode::BAD_REQUEST,
    )
    .await;

    assert!(json["error"].as_str().unwrap().contains("fields"));
}

#[tokio::test]
async fn unknown_projection_field_on_single_author_returns_400() {
    let app = build_test_app();
    get_expecting(
        app,
        "/api/v1/authors/25320c5e-f58a-4b1f-b63a-8ee07a840bdf?fields=nope",
        StatusCode::BAD_REQUEST,
    )
    .await;
}

// ---------------------------------------------------------------------------
// id parsing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_author_collection_ids_return_400() {
    let app = build_test_app();
    get_expecting(
        app,
        "/api/v1/authorcollections/not-a-uuid",
        StatusCode::BAD_REQUEST,
    )
    .await;
}

#[tokio::test]
async fn malformed_author_uuid_in_path_is_rejected() {
    let app = build_test_app();
    let response = common::get(app, "/api/v1/authors/not-a-uuid").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
