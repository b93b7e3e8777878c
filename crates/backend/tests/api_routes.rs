//! HTTP surface tests: the full router over in-memory storage, driven with
//! `tower::ServiceExt::oneshot` so no socket is opened.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use backend::routes::configure_routes;
use backend::storage::{MemStorage, Storage};
use contracts::domain::reporting::InsertRegionalSalesData;
use contracts::domain::store::InsertStore;

fn app() -> Router {
    configure_routes(Arc::new(MemStorage::new()))
}

/// Router plus a handle to its backing store, for tests that need rows
/// the facade has no write route for.
fn app_with_storage() -> (Router, Arc<MemStorage>) {
    let storage = Arc::new(MemStorage::new());
    (configure_routes(storage.clone()), storage)
}

fn regional(region: &str, revenue: &str, store_count: i32) -> InsertRegionalSalesData {
    InsertRegionalSalesData {
        event_id: Some(1),
        region: region.to_string(),
        store_count,
        revenue: revenue.to_string(),
        growth_rate: "5.0".to_string(),
        performance_vs_target: "102.0".to_string(),
    }
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn with_json(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_answers_ok() {
    let response = app().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn empty_collections_are_empty_arrays() {
    let app = app();
    for uri in [
        "/api/events",
        "/api/products",
        "/api/incidents",
        "/api/hourly-sales",
        "/api/inventory-alerts",
    ] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert_eq!(body_json(response).await, json!([]), "{uri}");
    }
}

#[tokio::test]
async fn latest_endpoints_answer_empty_object_not_404() {
    let app = app();
    for uri in ["/api/metrics/latest", "/api/customer-behavior/latest"] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert_eq!(body_json(response).await, json!({}), "{uri}");
    }
}

#[tokio::test]
async fn malformed_body_is_a_400_with_message() {
    let response = app()
        .oneshot(with_json(Method::POST, "/api/products", json!({"name": "x"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn product_round_trip_and_missing_lookup() {
    let app = app();
    let response = app
        .clone()
        .oneshot(with_json(
            Method::POST,
            "/api/products",
            json!({
                "name": "PowerMax Foam",
                "category": "mattress",
                "size": "Queen",
                "price": "899.99",
                "sku": "PMF-001"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["sku"], "PMF-001");

    let response = app
        .clone()
        .oneshot(get(&format!("/api/products/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "PowerMax Foam");

    let response = app.oneshot(get("/api/products/9999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Product not found");
}

#[tokio::test]
async fn updating_a_missing_event_is_404() {
    let response = app()
        .oneshot(with_json(
            Method::PUT,
            "/api/events/42",
            json!({"status": "active"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Event not found");
}

#[tokio::test]
async fn incident_lifecycle_over_http() {
    let app = app();

    let response = app
        .clone()
        .oneshot(with_json(
            Method::POST,
            "/api/incidents",
            json!({
                "incidentId": "INC-2025-001",
                "title": "Payment Gateway Timeout",
                "description": "Checkout requests time out",
                "severity": "critical"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["status"], "open");
    assert_eq!(created["escalationLevel"], 1);

    let response = app
        .clone()
        .oneshot(with_json(
            Method::POST,
            &format!("/api/incidents/{id}/escalate"),
            json!({"level": 3}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["escalationLevel"], 3);

    let response = app
        .clone()
        .oneshot(with_json(
            Method::PUT,
            &format!("/api/incidents/{id}"),
            json!({"status": "resolved"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let resolved = body_json(response).await;
    assert!(resolved["resolvedAt"].is_string());

    let response = app
        .clone()
        .oneshot(get("/api/incidents?active=true"))
        .await
        .unwrap();
    assert_eq!(body_json(response).await, json!([]));

    let response = app.oneshot(get("/api/incidents")).await.unwrap();
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn participant_creation_takes_the_incident_id_from_the_path() {
    let app = app();
    let response = app
        .clone()
        .oneshot(with_json(
            Method::POST,
            "/api/incidents",
            json!({
                "incidentId": "INC-2025-002",
                "title": "Mobile App Crashes",
                "description": "Crash loop on checkout",
                "severity": "high"
            }),
        ))
        .await
        .unwrap();
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(with_json(
            Method::POST,
            &format!("/api/incidents/{id}/participants"),
            json!({
                "incidentId": 777,
                "participantType": "human",
                "name": "On-call SRE",
                "role": "lead",
                "status": "active"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["incidentId"], id);

    let response = app
        .oneshot(get(&format!("/api/incidents/{id}/participants")))
        .await
        .unwrap();
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn field_config_delete_acknowledges_twice() {
    let app = app();
    let response = app
        .clone()
        .oneshot(with_json(
            Method::POST,
            "/api/field-configs",
            json!({
                "bundleId": "sales",
                "dataSource": "pos",
                "fieldName": "revenue"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["updateFrequency"], "realtime");
    assert_eq!(created["retentionDays"], 7);

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::DELETE)
                    .uri(format!("/api/field-configs/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"success": true}));
    }
}

#[tokio::test]
async fn live_metrics_falls_back_to_empty_object() {
    let response = app().oneshot(get("/api/live/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({}));
}

#[tokio::test]
async fn live_metrics_jitters_the_latest_snapshot() {
    let (app, storage) = app_with_storage();
    storage
        .create_regional_sales(regional("West Coast", "100000.00", 24))
        .await
        .unwrap();
    app.clone()
        .oneshot(with_json(
            Method::POST,
            "/api/metrics",
            json!({
                "timestamp": "2024-11-29T12:00:00Z",
                "totalSales": "0.00",
                "activeCustomers": 1000,
                "avgBasketSize": "425.50",
                "conversionRate": "3.2",
                "inventoryHealth": "92"
            }),
        ))
        .await
        .unwrap();

    let response = app.oneshot(get("/api/live/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    // Recomputed base is 118000.00; the jitter stays within ±5%.
    let total: f64 = body["totalSales"].as_str().unwrap().parse().unwrap();
    assert!((112100.0..=123900.0).contains(&total), "{total}");
    let customers = body["activeCustomers"].as_i64().unwrap();
    assert!((975..=1025).contains(&customers), "{customers}");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn store_metrics_and_regional_performance_roll_up() {
    let (app, storage) = app_with_storage();
    storage
        .create_regional_sales(regional("West Coast", "485000.00", 24))
        .await
        .unwrap();
    storage
        .create_regional_sales(regional("East Coast", "392000.00", 18))
        .await
        .unwrap();
    storage
        .create_store(InsertStore {
            name: "West Coast Region".to_string(),
            region: "West Coast".to_string(),
            address: None,
            status: "active".to_string(),
            store_count: 45,
        })
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(get("/api/store-metrics"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["totalStores"], 42);
    assert_eq!(body["activeStores"], 39);
    assert_eq!(body["inactiveStores"], 3);
    assert_eq!(body["regions"], 2);

    let response = app
        .oneshot(get("/api/regional-performance"))
        .await
        .unwrap();
    let rows = body_json(response).await;
    let rows = rows.as_array().unwrap().clone();
    assert_eq!(rows.len(), 2);
    let west = rows.iter().find(|r| r["region"] == "West Coast").unwrap();
    assert_eq!(west["revenue"], "485000.00");
    assert_eq!(west["storeCount"], 45);
    let east = rows.iter().find(|r| r["region"] == "East Coast").unwrap();
    assert_eq!(east["storeCount"], 0);
}
