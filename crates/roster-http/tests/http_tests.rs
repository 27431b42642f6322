//! Endpoint and client tests

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use roster_controller::{MemoryHistory, Navigator, SearchController};
use roster_core::{
    CommitPolicy, ControllerConfig, Latency, SearchBackend, SearchError, SearchErrorKind,
    SearchResult,
};
use roster_http::{
    router, serve, ApiError, AppState, ClientError, HealthResponse, HttpSearchBackend,
};
use roster_test_utils::classic_service;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower::ServiceExt;
use url::Url;

fn state() -> AppState {
    AppState::new(Arc::new(classic_service()))
}

async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
    let response = router(state())
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

/// Server on an ephemeral port; dropping the sender stops it
async fn spawn_server(state: AppState) -> (Url, oneshot::Sender<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel::<()>();
    tokio::spawn(async move {
        serve(listener, state, async {
            let _ = rx.await;
        })
        .await
        .unwrap();
    });
    (Url::parse(&format!("http://{addr}/")).unwrap(), tx)
}

#[tokio::test]
async fn test_search_returns_wire_shape() {
    let (status, body) = get("/search?query=jane").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["matchCount"], 1);
    assert_eq!(json["pageSize"], 10);
    assert_eq!(json["items"][0]["fullName"], "Jane Smith");
    assert_eq!(json["items"][0]["email"], "janesmith@example.com");
}

#[tokio::test]
async fn test_missing_query_lists_everyone() {
    let (status, body) = get("/search").await;
    assert_eq!(status, StatusCode::OK);

    let result: SearchResult = serde_json::from_slice(&body).unwrap();
    assert_eq!(result.match_count, 40);
    assert_eq!(result.items.len(), 10);
    assert_eq!(result, classic_service().query(""));
}

#[tokio::test]
async fn test_empty_query_matches_missing_query() {
    let (_, with_empty) = get("/search?query=").await;
    let (_, without) = get("/search").await;
    assert_eq!(with_empty, without);
}

#[tokio::test]
async fn test_long_query_is_an_ordinary_miss() {
    let long = "a".repeat(257);
    let (status, body) = get(&format!("/search?query={long}")).await;
    assert_eq!(status, StatusCode::OK);

    let result: SearchResult = serde_json::from_slice(&body).unwrap();
    assert_eq!(result.match_count, 0);
    assert!(result.items.is_empty());
    assert_eq!(result.page_size, 10);
}

#[tokio::test]
async fn test_health_reports_directory_size() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);

    let health: HealthResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        health,
        HealthResponse {
            status: "ok".to_string(),
            people: 40,
        }
    );
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let (status, body) = get("/people").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let error: ApiError = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.code, "NOT_FOUND");
}

#[tokio::test]
async fn test_client_round_trip() {
    let (base, _shutdown) = spawn_server(state()).await;
    let backend = HttpSearchBackend::new(&base, Duration::from_secs(5)).unwrap();
    assert_eq!(backend.endpoint().path(), "/search");

    let result = backend.search("sm").await.unwrap();
    assert_eq!(result, classic_service().query("sm"));

    let everyone = backend.search("").await.unwrap();
    assert_eq!(everyone.match_count, 40);
}

#[tokio::test]
async fn test_client_encodes_query() {
    let (base, _shutdown) = spawn_server(state()).await;
    let backend = HttpSearchBackend::new(&base, Duration::from_secs(5)).unwrap();

    let result = backend.search("ane sm").await.unwrap();
    assert_eq!(result.names().collect::<Vec<_>>(), vec!["Jane Smith"]);

    let none = backend.search("&query=jane").await.unwrap();
    assert_eq!(none.match_count, 0);
}

#[tokio::test]
async fn test_client_long_query_returns_empty_page() {
    let (base, _shutdown) = spawn_server(state()).await;
    let backend = HttpSearchBackend::new(&base, Duration::from_secs(5)).unwrap();

    let long = "x".repeat(4096);
    let result = backend.search(&long).await.unwrap();
    assert_eq!(result.match_count, 0);
    assert!(result.items.is_empty());
}

/// Upstream that answers every search with `status`
async fn spawn_failing_upstream(status: StatusCode) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = axum::Router::new().route(
        "/search",
        axum::routing::get(move || async move {
            (status, axum::Json(ApiError::new("UPSTREAM", "rejected by upstream")))
        }),
    );
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    Url::parse(&format!("http://{addr}/")).unwrap()
}

#[tokio::test]
async fn test_client_maps_upstream_statuses() {
    let base = spawn_failing_upstream(StatusCode::BAD_REQUEST).await;
    let backend = HttpSearchBackend::new(&base, Duration::from_secs(5)).unwrap();
    let err = backend.search("jane").await.unwrap_err();
    assert_eq!(err, SearchError::Validation("rejected by upstream".to_string()));

    let base = spawn_failing_upstream(StatusCode::INTERNAL_SERVER_ERROR).await;
    let backend = HttpSearchBackend::new(&base, Duration::from_secs(5)).unwrap();
    let err = backend.search("jane").await.unwrap_err();
    assert_eq!(err.kind(), SearchErrorKind::ServiceUnavailable);
}

#[test]
fn test_client_rejects_base_without_path() {
    let base = Url::parse("mailto:search@example.com").unwrap();
    let err = HttpSearchBackend::new(&base, Duration::from_secs(1)).unwrap_err();
    assert!(matches!(err, ClientError::InvalidBaseUrl { .. }));
}

#[tokio::test]
async fn test_client_times_out() {
    let slow = classic_service().with_latency(Latency::fixed(Duration::from_millis(500)));
    let (base, _shutdown) = spawn_server(AppState::new(Arc::new(slow))).await;
    let backend = HttpSearchBackend::new(&base, Duration::from_millis(50)).unwrap();

    let err = backend.search("jane").await.unwrap_err();
    assert_eq!(err, SearchError::Timeout { after_ms: 50 });
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_client_reports_unreachable_server() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let base = Url::parse(&format!("http://{addr}/")).unwrap();
    let backend = HttpSearchBackend::new(&base, Duration::from_secs(1)).unwrap();

    let err = backend.search("jane").await.unwrap_err();
    assert_eq!(err.kind(), SearchErrorKind::ServiceUnavailable);
}

#[tokio::test]
async fn test_controller_over_http() {
    let (base, _shutdown) = spawn_server(state()).await;
    let backend = Arc::new(HttpSearchBackend::new(&base, Duration::from_secs(5)).unwrap());
    let history = MemoryHistory::parse("http://localhost/people").unwrap();
    let config = ControllerConfig::default().with_commit(CommitPolicy::Immediate);
    let mut controller = SearchController::mount(backend, history, config);

    controller.on_input("j");
    controller.on_input("ja");
    controller.on_input("jane");
    controller.settle_all().await;

    let view = controller.current_view();
    assert!(view.is_fresh());
    assert_eq!(view.display_value, "jane");
    assert_eq!(view.result.unwrap().names().collect::<Vec<_>>(), vec!["Jane Smith"]);
    assert_eq!(
        controller.navigator().current().as_str(),
        "http://localhost/people?search=jane"
    );
}

#[tokio::test]
async fn test_controller_flags_unreachable_server() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let base = Url::parse(&format!("http://{addr}/")).unwrap();
    let backend = Arc::new(HttpSearchBackend::new(&base, Duration::from_secs(1)).unwrap());
    let history = MemoryHistory::parse("http://localhost/people?search=jane").unwrap();
    let mut controller = SearchController::mount(backend, history, ControllerConfig::default());
    controller.settle_all().await;

    let view = controller.current_view();
    assert!(view.result.is_none());
    assert!(!view.is_loading);
    assert_eq!(view.error, Some(SearchErrorKind::ServiceUnavailable));
}
