use axum::http::StatusCode;
use chrono::{Duration, Utc};
use tower::ServiceExt;
use uuid::Uuid;

use crate::helpers::{
    basic_auth, body_json, create_assignment, create_user, get_request, make_test_app,
};

#[tokio::test]
async fn list_returns_assignments_newest_first() {
    let (app, state) = make_test_app().await;
    let owner = create_user(state.db(), "ada@example.com", "s3cret").await;
    let first = create_assignment(state.db(), &owner, 3, Utc::now() + Duration::hours(1)).await;
    let second = create_assignment(state.db(), &owner, 3, Utc::now() + Duration::hours(2)).await;

    let auth = basic_auth("ada@example.com", "s3cret");
    let response = app
        .oneshot(get_request("/v1/assignments", Some(&auth)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["id"], second.id.to_string());
    assert_eq!(data[1]["id"], first.id.to_string());
    // The list projection omits the owner.
    assert!(data[0].get("user_id").is_none());
}

#[tokio::test]
async fn list_rejects_query_parameters() {
    let (app, state) = make_test_app().await;
    create_user(state.db(), "ada@example.com", "s3cret").await;

    let auth = basic_auth("ada@example.com", "s3cret");
    let response = app
        .oneshot(get_request("/v1/assignments?page=1", Some(&auth)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_by_id_includes_the_owner() {
    let (app, state) = make_test_app().await;
    let owner = create_user(state.db(), "ada@example.com", "s3cret").await;
    let assignment =
        create_assignment(state.db(), &owner, 3, Utc::now() + Duration::hours(1)).await;

    let auth = basic_auth("ada@example.com", "s3cret");
    let uri = format!("/v1/assignments/{}", assignment.id);
    let response = app.oneshot(get_request(&uri, Some(&auth))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], assignment.id.to_string());
    assert_eq!(json["data"]["user_id"], owner.id.to_string());
    assert_eq!(json["data"]["points"], 5);
}

#[tokio::test]
async fn get_by_id_is_not_restricted_to_the_owner() {
    let (app, state) = make_test_app().await;
    let owner = create_user(state.db(), "ada@example.com", "s3cret").await;
    create_user(state.db(), "grace@example.com", "pw").await;
    let assignment =
        create_assignment(state.db(), &owner, 3, Utc::now() + Duration::hours(1)).await;

    let auth = basic_auth("grace@example.com", "pw");
    let uri = format!("/v1/assignments/{}", assignment.id);
    let response = app.oneshot(get_request(&uri, Some(&auth))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn malformed_id_is_a_bad_request_not_a_missing_record() {
    let (app, state) = make_test_app().await;
    create_user(state.db(), "ada@example.com", "s3cret").await;

    let auth = basic_auth("ada@example.com", "s3cret");
    let response = app
        .oneshot(get_request("/v1/assignments/not-a-uuid", Some(&auth)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Invalid assignment ID format");
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let (app, state) = make_test_app().await;
    create_user(state.db(), "ada@example.com", "s3cret").await;

    let auth = basic_auth("ada@example.com", "s3cret");
    let uri = format!("/v1/assignments/{}", Uuid::new_v4());
    let response = app.oneshot(get_request(&uri, Some(&auth))).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn repeated_reads_observe_identical_state() {
    let (app, state) = make_test_app().await;
    let owner = create_user(state.db(), "ada@example.com", "s3cret").await;
    create_assignment(state.db(), &owner, 3, Utc::now() + Duration::hours(1)).await;

    let auth = basic_auth("ada@example.com", "s3cret");
    let first = body_json(
        app.clone()
            .oneshot(get_request("/v1/assignments", Some(&auth)))
            .await
            .unwrap(),
    )
    .await;
    let second = body_json(
        app.oneshot(get_request("/v1/assignments", Some(&auth)))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(first, second);
}
