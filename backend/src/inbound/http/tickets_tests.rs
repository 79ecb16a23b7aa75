//! Handler tests for the ticket endpoints.

use std::sync::Arc;

use actix_web::http::{Method, StatusCode};
use actix_web::test as actix_test;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use crate::domain::ports::{MockTicketsCommand, MockTicketsQuery, MockUsersQuery};
use crate::domain::Error;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::test_utils::{seeded_state, test_app};

#[fixture]
fn state() -> HttpState {
    seeded_state()
}

async fn call(
    state: HttpState,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Option<Value>) {
    let app = actix_test::init_service(test_app(state)).await;
    let mut request = actix_test::TestRequest::default().method(method).uri(uri);
    if let Some(body) = body {
        request = request.set_json(body);
    }
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let bytes = actix_test::read_body(response).await;
    let json = (!bytes.is_empty())
        .then(|| serde_json::from_slice(&bytes).expect("JSON body"));
    (status, json)
}

#[rstest]
#[actix_web::test]
async fn list_returns_seed_tickets_in_order(state: HttpState) {
    let (status, body) = call(state, Method::GET, "/api/tickets", None).await;
    assert_eq!(status, StatusCode::OK);
    let tickets = body.expect("body");
    let ids: Vec<_> = tickets
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|t| t["id"].as_u64())
        .collect();
    assert_eq!(ids, (1..=20).collect::<Vec<_>>());
}

#[rstest]
#[actix_web::test]
async fn get_returns_ticket_with_null_assignee(state: HttpState) {
    let (status, body) = call(state, Method::GET, "/api/tickets/4", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        Some(json!({
            "id": 4,
            "description": "Configure keyboard shortcuts",
            "assigneeId": null,
            "completed": false
        }))
    );
}

#[rstest]
#[case("/api/tickets/99", StatusCode::NOT_FOUND, "not_found")]
#[case("/api/tickets/abc", StatusCode::BAD_REQUEST, "invalid_request")]
#[actix_web::test]
async fn get_reports_missing_and_malformed_ids(
    state: HttpState,
    #[case] uri: &str,
    #[case] status: StatusCode,
    #[case] code: &str,
) {
    let (actual, body) = call(state, Method::GET, uri, None).await;
    assert_eq!(actual, status);
    assert_eq!(body.expect("error body")["code"], code);
}

#[rstest]
#[actix_web::test]
async fn create_returns_created_ticket(state: HttpState) {
    let (status, body) = call(
        state,
        Method::POST,
        "/api/tickets",
        Some(json!({ "description": "  Fix the lamp  " })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        Some(json!({
            "id": 21,
            "description": "Fix the lamp",
            "assigneeId": null,
            "completed": false
        }))
    );
}

#[rstest]
#[case(json!({ "description": "   " }))]
#[case(json!({ "description": "" }))]
#[case(json!({}))]
#[actix_web::test]
async fn create_rejects_blank_or_missing_description(state: HttpState, #[case] payload: Value) {
    let (status, body) = call(state, Method::POST, "/api/tickets", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.expect("error body")["code"], "invalid_request");
}

#[rstest]
#[actix_web::test]
async fn assign_then_complete_is_visible_on_get(state: HttpState) {
    let app = actix_test::init_service(test_app(state)).await;

    for (method, uri) in [
        (Method::PUT, "/api/tickets/4/assign/2"),
        (Method::PUT, "/api/tickets/4/complete"),
    ] {
        let request = actix_test::TestRequest::default()
            .method(method)
            .uri(uri)
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    let request = actix_test::TestRequest::get().uri("/api/tickets/4").to_request();
    let ticket: Value = actix_test::call_and_read_body_json(&app, request).await;
    assert_eq!(ticket["assigneeId"], 2);
    assert_eq!(ticket["completed"], true);
}

#[rstest]
#[case(Method::PUT, "/api/tickets/4/assign/42")]
#[case(Method::PUT, "/api/tickets/99/assign/2")]
#[case(Method::PUT, "/api/tickets/99/unassign")]
#[case(Method::PUT, "/api/tickets/99/complete")]
#[case(Method::DELETE, "/api/tickets/99/complete")]
#[actix_web::test]
async fn mutations_on_unknown_records_are_unprocessable(
    state: HttpState,
    #[case] method: Method,
    #[case] uri: &str,
) {
    let (status, body) = call(state, method, uri, None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body.expect("error body")["code"], "unprocessable_entity");
}

#[rstest]
#[actix_web::test]
async fn failed_assignment_leaves_ticket_unchanged(state: HttpState) {
    let app = actix_test::init_service(test_app(state)).await;
    let request = actix_test::TestRequest::put()
        .uri("/api/tickets/4/assign/42")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let request = actix_test::TestRequest::get().uri("/api/tickets/4").to_request();
    let ticket: Value = actix_test::call_and_read_body_json(&app, request).await;
    assert_eq!(ticket["assigneeId"], Value::Null);
}

#[rstest]
#[actix_web::test]
async fn unassign_of_unassigned_ticket_succeeds(state: HttpState) {
    let (status, body) = call(state, Method::PUT, "/api/tickets/4/unassign", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_none());
}

#[rstest]
#[actix_web::test]
async fn reopen_clears_completed_flag(state: HttpState) {
    let app = actix_test::init_service(test_app(state)).await;
    let request = actix_test::TestRequest::delete()
        .uri("/api/tickets/5/complete")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let request = actix_test::TestRequest::get().uri("/api/tickets/5").to_request();
    let ticket: Value = actix_test::call_and_read_body_json(&app, request).await;
    assert_eq!(ticket["completed"], false);
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted_by_handlers() {
    let mut query = MockTicketsQuery::new();
    query
        .expect_list_tickets()
        .times(1)
        .return_once(|| Err(Error::internal("ticket store lock poisoned")));
    let state = HttpState::new(
        Arc::new(query),
        Arc::new(MockTicketsCommand::new()),
        Arc::new(MockUsersQuery::new()),
    );

    let (status, body) = call(state, Method::GET, "/api/tickets", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let body = body.expect("error body");
    assert_eq!(body["code"], "internal_error");
    assert_eq!(body["message"], "Internal server error");
}
