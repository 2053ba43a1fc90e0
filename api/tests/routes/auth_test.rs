//! The generic-401 property: every credential failure — missing header,
//! undecodable pair, non-email username, unknown user, wrong password —
//! produces the same response, so callers cannot probe which accounts exist.

use axum::http::StatusCode;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use tower::ServiceExt;

use crate::helpers::{basic_auth, body_json, create_user, get_request, make_test_app};

#[tokio::test]
async fn every_credential_failure_maps_to_the_same_401() {
    let (app, state) = make_test_app().await;
    create_user(state.db(), "ada@example.com", "s3cret").await;

    let bad_headers = [
        None,
        Some("Basic !!!not-base64!!!".to_string()),
        Some(format!("Basic {}", BASE64.encode("no-colon-here"))),
        Some(basic_auth("not-an-email", "s3cret")),
        Some(basic_auth("ghost@example.com", "s3cret")),
        Some(basic_auth("ada@example.com", "wrong")),
    ];

    for header in bad_headers {
        let req = get_request("/v1/assignments", header.as_deref());
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Authentication failed");
    }
}

#[tokio::test]
async fn valid_credentials_pass_the_auth_gate() {
    let (app, state) = make_test_app().await;
    create_user(state.db(), "ada@example.com", "s3cret").await;

    let auth = basic_auth("ada@example.com", "s3cret");
    let req = get_request("/v1/assignments", Some(&auth));
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
