mod common;

use axum::http::{Method, StatusCode};
use common::{parse_body, TestApp, CREATOR};

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();
    let res = app.request(Method::GET, "/health", None).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["status"], "ok");
}

#[tokio::test]
async fn test_list_sessions_with_filters() {
    let app = TestApp::new();

    let res = app.request(Method::GET, &format!("/api/v1/creators/{}/sessions", CREATOR), None).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await.as_array().unwrap().len(), 3);

    let res = app.request(Method::GET, &format!("/api/v1/creators/{}/sessions?course_only=true", CREATOR), None).await;
    let body = parse_body(res).await;
    let ids: Vec<&str> = body.as_array().unwrap().iter().map(|s| s["session_id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["S3"]);

    let res = app.request(Method::GET, &format!("/api/v1/creators/{}/sessions?active_only=true", CREATOR), None).await;
    let body = parse_body(res).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_sessions_unknown_creator() {
    let app = TestApp::new();
    let res = app.request(Method::GET, "/api/v1/creators/ghost/sessions", None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(parse_body(res).await["error"], "Creator not found");
}
