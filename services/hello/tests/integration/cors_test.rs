use axum_test::TestServer;
use http::{HeaderName, HeaderValue, Method, StatusCode, header};

use hello_service::config::HelloConfig;
use hello_service::router::build_router;

use crate::helpers::{FRONTEND_ORIGIN, frontend_only_server, wildcard_server};

fn origin(value: &'static str) -> (HeaderName, HeaderValue) {
    (header::ORIGIN, HeaderValue::from_static(value))
}

// ── Wildcard policy ──────────────────────────────────────────────────────────

#[tokio::test]
async fn should_allow_frontend_with_wildcard() {
    let server = wildcard_server();
    let (name, value) = origin(FRONTEND_ORIGIN);

    let response = server.get("/").add_header(name, value).await;

    response.assert_status_ok();
    assert_eq!(response.text(), "hello world !!!");
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert!(
        response.headers().get(header::ACCESS_CONTROL_MAX_AGE).is_none(),
        "max-age belongs on preflight responses only"
    );
}

#[tokio::test]
async fn should_answer_preflight_with_wildcard_and_max_age() {
    let server = wildcard_server();
    let (name, value) = origin(FRONTEND_ORIGIN);

    let response = server
        .method(Method::OPTIONS, "/")
        .add_header(name, value)
        .add_header(
            header::ACCESS_CONTROL_REQUEST_METHOD,
            HeaderValue::from_static("GET"),
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(response.headers()[header::ACCESS_CONTROL_MAX_AGE], "3600");
    assert!(response.text().is_empty(), "preflight must not reach the handler");
}

// ── Single-origin policy ─────────────────────────────────────────────────────

#[tokio::test]
async fn should_echo_allowed_origin() {
    let server = frontend_only_server();
    let (name, value) = origin(FRONTEND_ORIGIN);

    let response = server.get("/").add_header(name, value).await;

    response.assert_status_ok();
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        FRONTEND_ORIGIN
    );
}

#[tokio::test]
async fn should_allow_frontend_configured_in_upper_case() {
    let cors = HelloConfig::from_lookup(|key| {
        (key == "CORS_ALLOWED_ORIGINS").then(|| "HTTP://LOCALHOST:3001".to_string())
    })
    .unwrap()
    .cors;
    let server = TestServer::new(build_router(&cors)).unwrap();
    let (name, value) = origin(FRONTEND_ORIGIN);

    let response = server.get("/").add_header(name, value).await;

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        FRONTEND_ORIGIN
    );
}

#[tokio::test]
async fn should_not_allow_other_origin() {
    let server = frontend_only_server();
    let (name, value) = origin("http://localhost:4000");

    let response = server.get("/").add_header(name, value).await;

    // The body is still served; the browser enforces the block.
    response.assert_status_ok();
    assert_eq!(response.text(), "hello world !!!");
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}

#[tokio::test]
async fn should_answer_preflight_without_max_age() {
    let server = frontend_only_server();
    let (name, value) = origin(FRONTEND_ORIGIN);

    let response = server
        .method(Method::OPTIONS, "/")
        .add_header(name, value)
        .add_header(
            header::ACCESS_CONTROL_REQUEST_METHOD,
            HeaderValue::from_static("GET"),
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        FRONTEND_ORIGIN
    );
    assert!(response.headers().get(header::ACCESS_CONTROL_MAX_AGE).is_none());
}

#[tokio::test]
async fn should_apply_policy_to_greeting_route() {
    let server = frontend_only_server();
    let (name, value) = origin(FRONTEND_ORIGIN);

    let response = server
        .get("/greeting")
        .add_query_param("lang", "en")
        .add_header(name, value)
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        FRONTEND_ORIGIN
    );
}
