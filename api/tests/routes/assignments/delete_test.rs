use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{Duration, Utc};
use tower::ServiceExt;
use uuid::Uuid;

use db::models::submission::Model as SubmissionModel;

use crate::helpers::{
    basic_auth, create_assignment, create_user, get_request, make_test_app,
};

fn delete_request(uri: &str, auth: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .header("Authorization", auth)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn owner_can_delete_and_the_record_is_gone() {
    let (app, state) = make_test_app().await;
    let owner = create_user(state.db(), "ada@example.com", "s3cret").await;
    let assignment =
        create_assignment(state.db(), &owner, 3, Utc::now() + Duration::hours(1)).await;

    let auth = basic_auth("ada@example.com", "s3cret");
    let uri = format!("/v1/assignments/{}", assignment.id);
    let response = app
        .clone()
        .oneshot(delete_request(&uri, &auth))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(get_request(&uri, Some(&auth))).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_cascades_to_submissions() {
    let (app, state) = make_test_app().await;
    let owner = create_user(state.db(), "ada@example.com", "s3cret").await;
    let assignment =
        create_assignment(state.db(), &owner, 3, Utc::now() + Duration::hours(1)).await;

    SubmissionModel::admit(state.db(), &assignment, "ada@example.com", "https://x.com/a.zip")
        .await
        .unwrap();

    let auth = basic_auth("ada@example.com", "s3cret");
    let uri = format!("/v1/assignments/{}", assignment.id);
    let response = app.oneshot(delete_request(&uri, &auth)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let count = SubmissionModel::count_for_assignment(state.db(), assignment.id)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn non_owner_delete_is_forbidden() {
    let (app, state) = make_test_app().await;
    let owner = create_user(state.db(), "ada@example.com", "s3cret").await;
    create_user(state.db(), "grace@example.com", "pw").await;
    let assignment =
        create_assignment(state.db(), &owner, 3, Utc::now() + Duration::hours(1)).await;

    let auth = basic_auth("grace@example.com", "pw");
    let uri = format!("/v1/assignments/{}", assignment.id);
    let response = app.oneshot(delete_request(&uri, &auth)).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn delete_of_a_missing_assignment_is_not_found() {
    let (app, state) = make_test_app().await;
    create_user(state.db(), "ada@example.com", "s3cret").await;

    let auth = basic_auth("ada@example.com", "s3cret");
    let uri = format!("/v1/assignments/{}", Uuid::new_v4());
    let response = app.oneshot(delete_request(&uri, &auth)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_with_a_body_is_rejected() {
    let (app, state) = make_test_app().await;
    let owner = create_user(state.db(), "ada@example.com", "s3cret").await;
    let assignment =
        create_assignment(state.db(), &owner, 3, Utc::now() + Duration::hours(1)).await;

    let auth = basic_auth("ada@example.com", "s3cret");
    let req = Request::builder()
        .method("DELETE")
        .uri(format!("/v1/assignments/{}", assignment.id))
        .header("Authorization", &auth)
        .header("Content-Length", "2")
        .body(Body::from("{}"))
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
