use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use eventix::app::ports::{EventRepository, EventSearchRequest, RemoteDataSource};
use eventix::app::repository::{EventRepositoryImpl, QueryPolicy};
use eventix::common::error::EventixError;
use eventix::infra::api_key_provider::StaticApiKeyProvider;
use eventix::infra::http_client::ReqwestDiscoveryClient;

#[derive(Clone, Default)]
struct MockApi {
    searches: Arc<Mutex<Vec<HashMap<String, String>>>>,
    details: Arc<Mutex<Vec<(String, HashMap<String, String>)>>>,
}

fn unauthorized() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"fault": {"faultstring": "Invalid ApiKey", "detail": {"errorcode": "oauth.v2.InvalidApiKey"}}})),
    )
}

async fn search(
    State(api): State<MockApi>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    api.searches.lock().await.push(params.clone());
    if params.get("apikey").map(String::as_str) == Some("bad-key") {
        return unauthorized();
    }

    let page: u32 = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(0);
    (
        StatusCode::OK,
        Json(json!({
            "_embedded": {"events": [
                {
                    "id": format!("evt-{}-a", page),
                    "name": "Jazz at the Garden",
                    "test": false,
                    "images": [{"ratio": "16_9", "url": "https://img/a.jpg", "width": 1024, "height": 576}],
                    "dates": {"start": {"localDate": "2024-12-25", "localTime": "19:30:00"}},
                    "_embedded": {"venues": [{
                        "name": "Madison Square Garden",
                        "city": {"name": "New York"},
                        "state": {"name": "New York", "stateCode": "NY"},
                        "address": {"line1": "4 Pennsylvania Plaza"}
                    }]}
                },
                {
                    "id": format!("evt-{}-b", page),
                    "name": "Sparse Listing"
                }
            ]},
            "_links": {"self": {"href": "/discovery/v2/events.json?page=0"}},
            "page": {"size": 20, "totalElements": 2, "totalPages": 1, "number": page}
        })),
    )
}

async fn detail(
    State(api): State<MockApi>,
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    api.details.lock().await.push((id.clone(), params.clone()));
    if id == "missing" {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"errors": [{"code": "DIS1004", "detail": "Resource not found with provided criteria (locale=en-us, id=missing)"}]})),
        );
    }
    (
        StatusCode::OK,
        Json(json!({
            "id": id,
            "name": "Symphony Gala",
            "url": "https://tickets.example.com/gala",
            "dates": {"start": {"localDate": "2025-06-14", "localTime": "20:00:00"}},
            "priceRanges": [{"type": "standard", "currency": "USD", "min": 35.0, "max": 120.5}]
        })),
    )
}

async fn start_mock_api() -> (SocketAddr, MockApi) {
    let api = MockApi::default();
    let app = Router::new()
        .route("/discovery/v2/events.json", get(search))
        .route("/discovery/v2/events/:id", get(detail))
        .with_state(api.clone());

    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind mock server");
    listener.set_nonblocking(true).unwrap();
    let addr = listener.local_addr().unwrap();
    let server = axum::Server::from_tcp(listener)
        .unwrap()
        .serve(app.into_make_service());
    tokio::spawn(async move {
        server.await.ok();
    });

    (addr, api)
}

fn client(addr: SocketAddr) -> ReqwestDiscoveryClient {
    ReqwestDiscoveryClient::new(&format!("http://{}", addr), Duration::from_secs(5)).unwrap()
}

fn request(api_key: &str, keyword: Option<&str>) -> EventSearchRequest {
    EventSearchRequest {
        page: 2,
        size: 20,
        country_code: "US".into(),
        api_key: api_key.into(),
        sort: "date,asc".into(),
        start_date_time: Some("2025-01-02T00:00:00Z".into()),
        keyword: keyword.map(str::to_string),
    }
}

#[tokio::test]
async fn test_search_sends_query_parameters() {
    let (addr, api) = start_mock_api().await;

    let response = client(addr)
        .get_events(&request("test-api-key", Some("jazz")))
        .await
        .unwrap();

    assert!(!response.has_next_page());
    assert_eq!(response.into_events().len(), 2);

    let searches = api.searches.lock().await;
    let params = &searches[0];
    assert_eq!(params["page"], "2");
    assert_eq!(params["size"], "20");
    assert_eq!(params["countryCode"], "US");
    assert_eq!(params["apikey"], "test-api-key");
    assert_eq!(params["sort"], "date,asc");
    assert_eq!(params["startDateTime"], "2025-01-02T00:00:00Z");
    assert_eq!(params["keyword"], "jazz");
}

#[tokio::test]
async fn test_optional_parameters_are_omitted() {
    let (addr, api) = start_mock_api().await;
    let mut req = request("test-api-key", None);
    req.start_date_time = None;

    client(addr).get_events(&req).await.unwrap();

    let searches = api.searches.lock().await;
    assert!(!searches[0].contains_key("keyword"));
    assert!(!searches[0].contains_key("startDateTime"));
}

#[tokio::test]
async fn test_error_status_carries_fault_message() {
    let (addr, _api) = start_mock_api().await;

    let err = client(addr)
        .get_events(&request("bad-key", None))
        .await
        .unwrap_err();

    match err {
        EventixError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid ApiKey");
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_detail_request_by_id() {
    let (addr, api) = start_mock_api().await;

    let event = client(addr).get_event_details("G5vYZ9", "detail-key").await.unwrap();

    assert_eq!(event.id.as_deref(), Some("G5vYZ9"));
    assert_eq!(event.name.as_deref(), Some("Symphony Gala"));

    let details = api.details.lock().await;
    assert_eq!(details[0].0, "G5vYZ9");
    assert_eq!(details[0].1["apikey"], "detail-key");
}

#[tokio::test]
async fn test_detail_id_with_reserved_characters_stays_one_segment() {
    let (addr, api) = start_mock_api().await;

    let event = client(addr)
        .get_event_details("odd/id?x=1#frag", "detail-key")
        .await
        .unwrap();

    assert_eq!(event.id.as_deref(), Some("odd/id?x=1#frag"));

    let details = api.details.lock().await;
    assert_eq!(details[0].0, "odd/id?x=1#frag");
    assert_eq!(details[0].1["apikey"], "detail-key");
    assert!(!details[0].1.contains_key("x"));
}

#[tokio::test]
async fn test_connection_failure_is_http_error() {
    // Grab a free port, then close it so nothing is listening
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };

    let err = client(addr)
        .get_events(&request("test-api-key", None))
        .await
        .unwrap_err();

    assert!(matches!(err, EventixError::Http(_)));
}

#[tokio::test]
async fn test_repository_over_http_maps_events() {
    let (addr, api) = start_mock_api().await;
    let repository = EventRepositoryImpl::new(
        Arc::new(client(addr)),
        Arc::new(StaticApiKeyProvider::new("test-api-key")),
        QueryPolicy::default(),
    );

    let events = repository.get_events(0, 20, None).await.unwrap();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].name, "Jazz at the Garden");
    assert_eq!(events[0].venue.as_ref().unwrap().state, "NY");
    assert_eq!(events[1].name, "Sparse Listing");
    assert_eq!(events[1].image_url, "");
    assert_eq!(events[1].time, "19:00:00");
    assert!(events[1].venue.is_none());

    let searches = api.searches.lock().await;
    assert!(searches[0]["startDateTime"].ends_with("T00:00:00Z"));
}

#[tokio::test]
async fn test_repository_over_http_reports_errors_as_messages() {
    let (addr, _api) = start_mock_api().await;
    let repository = EventRepositoryImpl::new(
        Arc::new(client(addr)),
        Arc::new(StaticApiKeyProvider::new("bad-key")),
        QueryPolicy::default(),
    );

    let err = repository.get_events(0, 20, None).await.unwrap_err();
    assert_eq!(err.message(), "API error (401): Invalid ApiKey");

    let err = repository.get_event_details("missing").await.unwrap_err();
    assert!(err.message().starts_with("API error (404): Resource not found"));
}

#[tokio::test]
async fn test_repository_over_http_maps_detail() {
    let (addr, _api) = start_mock_api().await;
    let repository = EventRepositoryImpl::new(
        Arc::new(client(addr)),
        Arc::new(StaticApiKeyProvider::new("test-api-key")),
        QueryPolicy::default(),
    );

    let detail = repository.get_event_details("gala-1").await.unwrap();

    assert_eq!(detail.id, "gala-1");
    assert_eq!(detail.price.as_deref(), Some("$35.00 - $120.50"));
    assert_eq!(detail.ticket_url.as_deref(), Some("https://tickets.example.com/gala"));
}
