use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use pricing_server::api::build_app;
use pricing_server::{Config, InMemoryRuleProvider, RentalCatalog, ServerState};
use serde_json::{Value, json};
use shared::models::{Condition, ConditionGroup, Operator, PriceRule, RuleType};
use tower::ServiceExt;

fn test_rules() -> Vec<PriceRule> {
    vec![
        PriceRule::new("multi-day", "Multi-day", RuleType::Percentage, 10.0)
            .with_priority(1)
            .with_stackable(true)
            .with_conditions(ConditionGroup::all(vec![
                Condition::new("duration", Operator::Gte, 3).into(),
            ])),
        PriceRule::new("interstate", "Interstate Fee", RuleType::Fixed, -20.0)
            .with_priority(2)
            .with_stackable(true)
            .with_conditions(ConditionGroup::all(vec![
                Condition::eq("route", "interstate").into(),
            ])),
    ]
}

fn app() -> Router {
    let state = ServerState::new(
        Config::default(),
        Arc::new(InMemoryRuleProvider::new(test_rules())),
        RentalCatalog::default(),
    );
    build_app(state)
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["environment"], "development");
    assert_eq!(body["rules_loaded"], 2);
}

#[tokio::test]
async fn test_request_id_header() {
    let response = app().oneshot(get("/health")).await.unwrap();
    let id = response.headers().get("x-request-id").unwrap();
    assert!(!id.is_empty());
}

#[tokio::test]
async fn test_list_and_get_rules() {
    let (status, body) = send(get("/api/price-rules")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let (status, body) = send(get("/api/price-rules/interstate")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["type"], "fixed");
    assert_eq!(body["data"]["value"], -20.0);
}

#[tokio::test]
async fn test_get_unknown_rule() {
    let (status, body) = send(get("/api/price-rules/nope")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 1001);
    assert_eq!(body["details"]["id"], "nope");
}

#[tokio::test]
async fn test_unknown_route() {
    let (status, body) = send(get("/api/nowhere")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 3);
    assert_eq!(body["details"]["resource"], "Route /api/nowhere");
}

#[tokio::test]
async fn test_reload_in_memory_keeps_rules() {
    let (status, body) = send(post("/api/price-rules/reload", json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["count"], 2);
}

#[tokio::test]
async fn test_calculate_with_explicit_rules() {
    let (status, body) = send(post(
        "/api/pricing/calculate",
        json!({
            "basePrice": 100,
            "duration": 7,
            "context": { "duration": 7 },
            "rules": [{
                "id": "weekly",
                "name": "Weekly",
                "type": "percentage",
                "value": 15,
                "active": true,
                "stackable": false,
                "conditionLogic": {
                    "logic": "AND",
                    "conditions": [{ "type": "duration", "operator": "gte", "value": 7 }]
                }
            }]
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["originalPrice"], 700.0);
    assert_eq!(data["finalPrice"], 595.0);
    assert_eq!(data["savings"], 105.0);
    assert_eq!(data["appliedRules"][0]["id"], "weekly");
}

#[tokio::test]
async fn test_calculate_with_loaded_rules() {
    let (status, body) = send(post(
        "/api/pricing/calculate",
        json!({
            "basePrice": 50,
            "duration": 4,
            "context": { "duration": 4, "route": "interstate" }
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    // 200 - 20 (10%) + 20 (fixed fee)
    assert_eq!(body["data"]["finalPrice"], 200.0);
    assert_eq!(body["data"]["appliedRules"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_calculate_rejects_negative_price() {
    let (status, body) = send(post(
        "/api/pricing/calculate",
        json!({ "basePrice": -1, "duration": 1 }),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 8);
}

#[tokio::test]
async fn test_calculate_rejects_unrepresentable_base() {
    let (status, body) = send(post(
        "/api/pricing/calculate",
        json!({ "basePrice": 1e30, "duration": 1, "rules": [] }),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 8);
}

#[tokio::test]
async fn test_calculate_skips_overflowing_rule() {
    let (status, body) = send(post(
        "/api/pricing/calculate",
        json!({
            "basePrice": 1000,
            "rules": [
                { "id": "huge", "name": "Huge", "type": "percentage", "value": 1e27,
                  "active": true, "stackable": true, "priority": 1 },
                { "id": "flat", "name": "Flat", "type": "fixed", "value": 100,
                  "active": true, "stackable": true, "priority": 2 }
            ]
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["finalPrice"], 900.0);
    assert_eq!(body["data"]["appliedRules"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"]["appliedRules"][0]["id"], "flat");
}

#[tokio::test]
async fn test_evaluate_xor() {
    let logic = json!({
        "logic": "XOR",
        "conditions": [
            { "type": "pickupLocation", "value": "custom" },
            { "type": "differentReturn", "value": true }
        ]
    });

    let (_, body) = send(post(
        "/api/pricing/evaluate",
        json!({
            "conditionLogic": logic,
            "context": { "pickupLocation": "custom", "differentReturn": false }
        }),
    ))
    .await;
    assert_eq!(body["data"]["applicable"], true);

    let (_, body) = send(post(
        "/api/pricing/evaluate",
        json!({
            "conditionLogic": logic,
            "context": { "pickupLocation": "custom", "differentReturn": true }
        }),
    ))
    .await;
    assert_eq!(body["data"]["applicable"], false);
}

#[tokio::test]
async fn test_evaluate_invalid_logic() {
    let (status, body) = send(post(
        "/api/pricing/evaluate",
        json!({ "conditionLogic": { "logic": "NAND", "conditions": [] } }),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 1003);
}

#[tokio::test]
async fn test_quote_fleet() {
    let (status, body) = send(post(
        "/api/quotes",
        json!({
            "carModel": "sedan",
            "carYear": 2020,
            "duration": 3,
            "addOns": ["gps"],
            "carQuantity": 2,
            "bookingDate": "2024-03-13"
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["unitPrice"], 55.0);
    assert_eq!(data["originalPrice"], 330.0);
    assert_eq!(data["finalPrice"], 297.0);
    assert_eq!(data["perCar"]["finalPrice"], 148.5);
    assert_eq!(data["context"]["carQuantity"], 2);
}

#[tokio::test]
async fn test_quote_with_service() {
    let (status, body) = send(post(
        "/api/quotes",
        json!({
            "carModel": "economy",
            "carYear": 2020,
            "duration": 1,
            "selectedServices": ["customPickup"],
            "serviceValues": { "customPickup": 30 },
            "bookingDate": "2024-03-13"
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["finalPrice"], 60.0);
    assert_eq!(body["data"]["perCar"]["appliedRules"][0]["id"], "service-customPickup");
}

#[tokio::test]
async fn test_quote_errors() {
    let (status, body) = send(post(
        "/api/quotes",
        json!({ "carModel": "spaceship", "carYear": 2020, "duration": 3 }),
    ))
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 2001);

    let (status, body) = send(post(
        "/api/quotes",
        json!({ "carModel": "sedan", "carYear": 2020, "duration": 0 }),
    ))
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 2005);

    let (status, body) = send(post(
        "/api/quotes",
        json!({
            "carModel": "sedan",
            "carYear": 2020,
            "duration": 2,
            "selectedServices": ["customPickup"],
            "serviceValues": { "customPickup": 17 }
        }),
    ))
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 2004);
}
