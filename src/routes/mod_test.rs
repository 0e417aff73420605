use super::*;
use std::net::SocketAddr;

async fn spawn_app() -> SocketAddr {
    let registry = app::build_registry().expect("routes should register");
    let router = super::app(AppState::new(registry));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server failed");
    });
    addr
}

#[tokio::test]
async fn healthz_returns_ok() {
    let addr = spawn_app().await;
    let res = reqwest::get(format!("http://{addr}/healthz")).await.unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
async fn profile_route_serves_html_page() {
    let addr = spawn_app().await;
    let res = reqwest::get(format!("http://{addr}/profile/42")).await.unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let content_type = res
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(content_type.starts_with("text/html"));
    let body = res.text().await.unwrap();
    assert!(body.contains(r#"{"profileId":"42"}"#));
}

#[tokio::test]
async fn query_string_does_not_affect_matching() {
    let addr = spawn_app().await;
    let res = reqwest::get(format!("http://{addr}/preview/abc?draft=1")).await.unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    assert!(res.text().await.unwrap().contains(r#"{"projectId":"abc"}"#));
}

#[tokio::test]
async fn unknown_route_serves_not_found_page() {
    let addr = spawn_app().await;
    let res = reqwest::get(format!("http://{addr}/missing")).await.unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::NOT_FOUND);
    assert!(res.text().await.unwrap().contains("Page not found"));
}
