//! Tests for pagination module

use super::*;
use crate::error::Error;
use crate::http::{HttpClient, HttpClientConfig};
use pretty_assertions::assert_eq;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use test_case::test_case;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
struct Item {
    id: usize,
}

fn page_body(ids: std::ops::Range<usize>) -> Value {
    let size = ids.len();
    let data: Vec<Value> = ids.map(|id| json!({ "id": id })).collect();
    json!({
        "data": data,
        "pagination": {"offset": 0, "max": 200, "size": size, "links": []}
    })
}

fn test_client(server: &MockServer) -> HttpClient {
    let config = HttpClientConfig::builder()
        .base_url(server.uri())
        .rate_limit_retries(Duration::from_millis(1), 10)
        .no_rate_limit()
        .build();
    HttpClient::with_config(config).unwrap()
}

async fn mount_page(server: &MockServer, offset: usize, ids: std::ops::Range<usize>) {
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("max", "200"))
        .and(query_param("offset", offset.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(ids)))
        .expect(1)
        .mount(server)
        .await;
}

// ============================================================================
// PagePlan Tests
// ============================================================================

#[test_case(0, 1 ; "zero")]
#[test_case(1, 1 ; "one")]
#[test_case(200, 1 ; "exactly one page")]
#[test_case(201, 2 ; "one over")]
#[test_case(450, 3 ; "partial last page")]
#[test_case(1000, 5 ; "exact multiple")]
fn test_page_count(requested: usize, expected: usize) {
    assert_eq!(PagePlan::new(requested).page_count(), expected);
}

#[test]
fn test_page_plan_single() {
    assert!(PagePlan::new(0).is_single());
    assert!(PagePlan::new(200).is_single());
    assert!(!PagePlan::new(201).is_single());
}

#[test]
fn test_page_plan_offsets() {
    let offsets: Vec<usize> = PagePlan::new(450).offsets().collect();
    assert_eq!(offsets, vec![0, 200, 400]);
}

#[test]
fn test_page_plan_custom_page_size() {
    let plan = PagePlan::with_page_size(7, 3);
    assert_eq!(plan.page_count(), 3);
    assert_eq!(plan.offsets().collect::<Vec<_>>(), vec![0, 3, 6]);

    let clamped = PagePlan::with_page_size(2, 0);
    assert_eq!(clamped.page_size(), 1);
}

#[test]
fn test_page_plan_endpoints() {
    let plan = PagePlan::new(450);
    assert_eq!(
        plan.page_endpoint("/users?name=x", 400),
        "/users?name=x&max=200&offset=400"
    );
    assert_eq!(plan.single_endpoint("/users"), "/users?max=450");
    assert_eq!(PagePlan::new(0).single_endpoint("/users?name=x"), "/users?name=x");
}

// ============================================================================
// Paginator Tests
// ============================================================================

#[tokio::test]
async fn test_single_request_under_page_cap() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("max", "50"))
        .and(query_param_is_missing("offset"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(0..50)))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let items: Vec<Item> = Paginator::new(&client).paginate("/users", 50).await.unwrap();

    assert_eq!(items.len(), 50);
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_single_request_returns_fewer_when_collection_is_small() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(0..7)))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let items: Vec<Item> = Paginator::new(&client).paginate("/users", 200).await.unwrap();

    assert_eq!(items.len(), 7);
}

#[tokio::test]
async fn test_zero_requested_uses_service_default() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param_is_missing("max"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(0..20)))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let items: Vec<Item> = Paginator::new(&client).paginate("/users", 0).await.unwrap();

    assert_eq!(items.len(), 20);
}

#[tokio::test]
async fn test_fan_out_merges_and_truncates() {
    let server = MockServer::start().await;

    mount_page(&server, 0, 0..200).await;
    mount_page(&server, 200, 200..400).await;
    mount_page(&server, 400, 400..600).await;

    let client = test_client(&server);
    let mut items: Vec<Item> = Paginator::new(&client).paginate("/users", 450).await.unwrap();

    assert_eq!(items.len(), 450);
    assert_eq!(server.received_requests().await.unwrap().len(), 3);

    // every page contributed once, none twice
    items.sort();
    items.dedup();
    assert_eq!(items.len(), 450);
}

#[tokio::test]
async fn test_fan_out_with_exhausted_collection() {
    let server = MockServer::start().await;

    mount_page(&server, 0, 0..200).await;
    mount_page(&server, 200, 200..300).await;
    mount_page(&server, 400, 0..0).await;

    let client = test_client(&server);
    let mut items: Vec<Item> = Paginator::new(&client).paginate("/users", 450).await.unwrap();

    assert_eq!(items.len(), 300);
    items.sort();
    let ids: Vec<usize> = items.iter().map(|i| i.id).collect();
    assert_eq!(ids, (0..300).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_fan_out_keeps_filter_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("name", "mario"))
        .and(query_param("max", "200"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(0..200)))
        .expect(2)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let items: Vec<Item> = Paginator::new(&client)
        .paginate("/users?name=mario", 400)
        .await
        .unwrap();

    assert_eq!(items.len(), 400);
}

#[tokio::test]
async fn test_fan_out_single_page_failure() {
    let server = MockServer::start().await;

    mount_page(&server, 0, 0..200).await;
    mount_page(&server, 400, 400..450).await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("offset", "200"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "boom"})))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result: Result<Vec<Item>, Error> = Paginator::new(&client).paginate("/users", 450).await;

    match result {
        Err(Error::Remote { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("Expected Remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fan_out_reports_every_failed_page() {
    let server = MockServer::start().await;

    mount_page(&server, 0, 0..200).await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("offset", "200"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "boom"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("offset", "400"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result: Result<Vec<Item>, Error> = Paginator::new(&client).paginate("/users", 450).await;

    match result {
        Err(Error::Pages { errors }) => {
            assert_eq!(errors.len(), 2);
            assert!(errors.iter().any(|e| matches!(e, Error::Remote { .. })));
            assert!(errors.iter().any(|e| matches!(e, Error::Deserialize(_))));
        }
        other => panic!("Expected Pages error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_page_requests_carry_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(wiremock::matchers::header("X-API-Key", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(0..200)))
        .expect(2)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let mut headers = crate::types::StringMap::new();
    headers.insert("X-API-Key".to_string(), "secret".to_string());

    let items: Vec<Item> = Paginator::new(&client)
        .with_headers(headers)
        .paginate("/users", 201)
        .await
        .unwrap();

    assert_eq!(items.len(), 201);
}

#[tokio::test]
async fn test_pages_are_fetched_concurrently() {
    let server = MockServer::start().await;

    for (offset, ids) in [(0, 0..200), (200, 200..400), (400, 400..600)] {
        Mock::given(method("GET"))
            .and(path("/users"))
            .and(query_param("offset", offset.to_string()))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(page_body(ids))
                    .set_delay(Duration::from_millis(300)),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = test_client(&server);
    let started = std::time::Instant::now();
    let items: Vec<Item> = Paginator::new(&client).paginate("/users", 450).await.unwrap();
    let elapsed = started.elapsed();

    assert_eq!(items.len(), 450);
    // sequential pages would take at least 900ms
    assert!(elapsed < Duration::from_millis(700), "took {elapsed:?}");
}

#[tokio::test]
async fn test_huge_request_stops_at_end_of_collection() {
    let server = MockServer::start().await;

    mount_page(&server, 0, 0..50).await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(0..0)))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let items: Vec<Item> = Paginator::new(&client)
        .paginate("/users", usize::MAX)
        .await
        .unwrap();

    assert_eq!(items.len(), 50);
    let requests = server.received_requests().await.unwrap().len();
    assert!(requests <= crate::types::MAX_CONCURRENT_PAGES, "{requests} requests");
}

#[tokio::test]
async fn test_fan_out_window_limits_pages_in_flight() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(0..2)))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let items: Vec<Item> = Paginator::new(&client)
        .with_page_size(2)
        .paginate("/users", 100)
        .await
        .unwrap();

    // every page is full, so all 50 pages are fetched through the window
    assert_eq!(items.len(), 100);
    assert_eq!(server.received_requests().await.unwrap().len(), 50);
}
