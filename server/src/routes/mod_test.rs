use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt as _;

use super::*;

fn public_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../public")
}

fn layered() -> Router {
    with_layers(with_static(
        Router::new().route("/dashboard", get(|| async { "dashboard" })),
        &public_dir(),
    ))
}

#[tokio::test]
async fn healthz_returns_ok() {
    let req = Request::builder().uri("/healthz").body(Body::empty()).unwrap();
    let resp = layered().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn layered_router_guards_dashboard() {
    let req = Request::builder().uri("/dashboard").body(Body::empty()).unwrap();
    let resp = layered().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/login");
}

#[tokio::test]
async fn public_assets_are_served_from_site_root() {
    for path in ["/avatar.png", "/avatar2.png", "/logo.svg"] {
        let req = Request::builder().uri(path).body(Body::empty()).unwrap();
        let resp = layered().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK, "{path}");
    }
}

#[tokio::test]
async fn unknown_asset_is_not_found() {
    let req = Request::builder().uri("/missing.png").body(Body::empty()).unwrap();
    let resp = layered().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
