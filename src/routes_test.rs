use super::*;
use axum::body::Body;
use axum::http::Request;
use http_body_util::BodyExt;
use tower::ServiceExt;

fn test_options() -> LeptosOptions {
    LeptosOptions::builder().output_name("taskrs").build()
}

async fn get_path(path: &str) -> (StatusCode, String) {
    let response = app(test_options())
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn healthz_route_is_mounted() {
    let (status, _) = get_path("/healthz").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn root_renders_page_scaffold() {
    let (status, html) = get_path("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"role="switch""#), "missing theme switch: {html}");
    assert!(html.contains("scaffold__sidenav"), "missing side navigation: {html}");
    assert!(html.contains("Logout"));
    assert!(html.contains("Nothing here yet."));
}

#[tokio::test]
async fn missing_bundle_file_is_not_found() {
    let (status, _) = get_path("/pkg/does-not-exist.wasm").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
