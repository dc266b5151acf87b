use axum::http::StatusCode;
use barbershop_core::models::availability::{DayAvailabilitySlot, MonthAvailabilitySlot};
use mockall::predicate::eq;
use pretty_assertions::assert_eq;
use serde_json::Value;
use uuid::Uuid;

use crate::test_utils::{appointment, at, TestContext};

#[tokio::test]
async fn test_day_availability_marks_booked_and_started_hours() {
    let mut ctx = TestContext::new();
    let provider_id = Uuid::new_v4();
    let rows = vec![
        appointment(provider_id, at(2020, 5, 2, 11, 0)),
        appointment(provider_id, at(2020, 5, 2, 13, 0)),
    ];

    ctx.appointments
        .expect_find_by_provider_and_day()
        .with(eq(provider_id), eq(2020), eq(5u32), eq(2u32))
        .times(1)
        .returning(move |_, _, _, _| Ok(rows.clone()));

    let response = ctx
        .server()
        .get(&format!("/providers/{}/day-availability", provider_id))
        .add_query_param("year", 2020)
        .add_query_param("month", 5)
        .add_query_param("day", 2)
        .await;

    response.assert_status_ok();
    let slots: Vec<DayAvailabilitySlot> = response.json();
    let unavailable: Vec<u32> = slots
        .iter()
        .filter(|slot| !slot.available)
        .map(|slot| slot.hour)
        .collect();

    assert_eq!(slots.len(), 10);
    assert_eq!(unavailable, vec![8u32, 9, 10, 11, 13]);
}

#[tokio::test]
async fn test_day_availability_rejects_invalid_date_without_querying() {
    let mut ctx = TestContext::new();
    ctx.appointments.expect_find_by_provider_and_day().never();

    let response = ctx
        .server()
        .get(&format!("/providers/{}/day-availability", Uuid::new_v4()))
        .add_query_param("year", 2021)
        .add_query_param("month", 2)
        .add_query_param("day", 29)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("not a valid date"));
}

#[tokio::test]
async fn test_day_availability_requires_all_date_components() {
    let ctx = TestContext::new();

    let response = ctx
        .server()
        .get(&format!("/providers/{}/day-availability", Uuid::new_v4()))
        .add_query_param("year", 2020)
        .add_query_param("month", 5)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_day_availability_rejects_malformed_provider_id() {
    let ctx = TestContext::new();

    let response = ctx
        .server()
        .get("/providers/not-a-uuid/day-availability")
        .add_query_param("year", 2020)
        .add_query_param("month", 5)
        .add_query_param("day", 2)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_month_availability_marks_fully_booked_days() {
    let mut ctx = TestContext::new();
    let provider_id = Uuid::new_v4();
    let mut rows: Vec<_> = (8..=17)
        .map(|hour| appointment(provider_id, at(2020, 5, 20, hour, 0)))
        .collect();
    rows.push(appointment(provider_id, at(2020, 5, 21, 15, 0)));

    ctx.appointments
        .expect_find_by_provider_and_month()
        .with(eq(provider_id), eq(2020), eq(5u32))
        .times(1)
        .returning(move |_, _, _| Ok(rows.clone()));

    let response = ctx
        .server()
        .get(&format!("/providers/{}/month-availability", provider_id))
        .add_query_param("year", 2020)
        .add_query_param("month", 5)
        .await;

    response.assert_status_ok();
    let slots: Vec<MonthAvailabilitySlot> = response.json();

    assert_eq!(slots.len(), 31);
    assert_eq!(slots.first().map(|slot| slot.day), Some(1));
    assert_eq!(slots.last().map(|slot| slot.day), Some(31));
    assert_eq!(
        slots.iter().filter(|slot| !slot.available).map(|slot| slot.day).collect::<Vec<_>>(),
        vec![20u32]
    );
}

#[tokio::test]
async fn test_month_availability_rejects_month_out_of_range() {
    let mut ctx = TestContext::new();
    ctx.appointments.expect_find_by_provider_and_month().never();

    let response = ctx
        .server()
        .get(&format!("/providers/{}/month-availability", Uuid::new_v4()))
        .add_query_param("year", 2020)
        .add_query_param("month", 13)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_query_failure_maps_to_internal_error() {
    let mut ctx = TestContext::new();
    ctx.appointments
        .expect_find_by_provider_and_month()
        .returning(|_, _, _| Err(eyre::eyre!("connection reset by peer")));

    let response = ctx
        .server()
        .get(&format!("/providers/{}/month-availability", Uuid::new_v4()))
        .add_query_param("year", 2020)
        .add_query_param("month", 5)
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().starts_with("Database error"));
}
