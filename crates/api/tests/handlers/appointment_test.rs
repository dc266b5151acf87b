use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::test_utils::TestContext;

// Booking rules run before any database access, so these requests are
// answered without a reachable PostgreSQL.

#[tokio::test]
async fn test_booking_in_the_past_is_rejected() {
    let ctx = TestContext::new();

    let response = ctx
        .server()
        .post("/appointments")
        .json(&json!({
            "provider_id": Uuid::new_v4(),
            "user_id": Uuid::new_v4(),
            "date": "2020-05-02T09:00:00",
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        json!("Validation error: You can't book an appointment on a past date")
    );
}

#[tokio::test]
async fn test_booking_the_current_hour_is_rejected() {
    let ctx = TestContext::new();

    let response = ctx
        .server()
        .post("/appointments")
        .json(&json!({
            "provider_id": Uuid::new_v4(),
            "user_id": Uuid::new_v4(),
            "date": "2020-05-02T10:45:00",
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_booking_with_yourself_is_rejected() {
    let ctx = TestContext::new();
    let user_id = Uuid::new_v4();

    let response = ctx
        .server()
        .post("/appointments")
        .json(&json!({
            "provider_id": user_id,
            "user_id": user_id,
            "date": "2020-05-03T09:00:00",
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("yourself"));
}

#[tokio::test]
async fn test_booking_after_closing_time_is_rejected() {
    let ctx = TestContext::new();

    let response = ctx
        .server()
        .post("/appointments")
        .json(&json!({
            "provider_id": Uuid::new_v4(),
            "user_id": Uuid::new_v4(),
            "date": "2020-05-03T18:00:00",
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("between 8:00 and 17:00"));
}

#[tokio::test]
async fn test_provider_schedule_rejects_invalid_date() {
    let ctx = TestContext::new();

    let response = ctx
        .server()
        .get(&format!("/providers/{}/appointments", Uuid::new_v4()))
        .add_query_param("year", 2020)
        .add_query_param("month", 4)
        .add_query_param("day", 31)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
