#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for the swipe endpoints.

use std::cell::{Cell, RefCell};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::Value;
use tokio::runtime::Runtime;
use tower::ServiceExt;
use trippick_core::{NewDestination, SwipeLedger};
use trippick_server::{AppState, router};

/// Aggregate fixtures shared across the BDD scenarios.
pub struct TestContext {
    runtime: Runtime,
    state: RefCell<Option<AppState>>,
    status: Cell<Option<StatusCode>>,
}

#[fixture]
/// Build a fresh `TestContext` for each scenario run.
pub fn context() -> TestContext {
    TestContext {
        runtime: tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("runtime"),
        state: RefCell::new(None),
        status: Cell::new(None),
    }
}

fn draft(name: &str, region: &str, category: &str, tag: &str) -> NewDestination {
    NewDestination {
        name: name.to_owned(),
        name_korean: name.to_owned(),
        description: format!("{name} description"),
        region: region.to_owned(),
        category: category.to_owned(),
        image_url: "https://example.com/card.jpg".to_owned(),
        rating: 4.5,
        tags: vec![tag.to_owned()],
        latitude: None,
        longitude: None,
    }
}

fn app(context: &TestContext) -> Router {
    router(
        context
            .state
            .borrow()
            .clone()
            .expect("state must be initialised"),
    )
}

fn send(context: &TestContext, request: Request<Body>) -> (StatusCode, Value) {
    let app = app(context);
    context.runtime.block_on(async move {
        let response = app.oneshot(request).await.expect("infallible router");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    })
}

fn post_swipe(context: &TestContext, payload: &str) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/swipe")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_owned()))
        .expect("request");
    let (status, _) = send(context, request);
    context.status.set(Some(status));
}

#[given("a server with a jeju beach and a seoul city")]
fn server(context: &TestContext) {
    let state = AppState::with_catalogue([
        draft("Jeju", "jeju", "nature", "beach"),
        draft("Seoul", "seoul", "urban", "city"),
    ]);
    *context.state.borrow_mut() = Some(state);
}

#[when("session s1 posts a swipe with action maybe")]
fn post_maybe(context: &TestContext) {
    post_swipe(
        context,
        r#"{"destinationId": 1, "action": "maybe", "sessionId": "s1"}"#,
    );
}

#[when("session s1 posts a like for destination 1")]
fn post_like(context: &TestContext) {
    post_swipe(
        context,
        r#"{"destinationId": 1, "action": "like", "sessionId": "s1"}"#,
    );
    assert_eq!(context.status.get(), Some(StatusCode::OK));
}

#[when("session s1 posts a pass for destination 2")]
fn post_pass(context: &TestContext) {
    post_swipe(
        context,
        r#"{"destinationId": 2, "action": "pass", "sessionId": "s1"}"#,
    );
    assert_eq!(context.status.get(), Some(StatusCode::OK));
}

#[then("the response status is 400")]
fn bad_request(context: &TestContext) {
    assert_eq!(context.status.get(), Some(StatusCode::BAD_REQUEST));
}

#[then("the swipe ledger is still empty")]
fn ledger_empty(context: &TestContext) {
    let state = context.state.borrow();
    let state = state.as_ref().expect("state must be initialised");
    assert_eq!(state.swipes.len().expect("ledger length"), 0);
}

#[then("the liked list of session s1 holds destination 1 only")]
fn liked_jeju_only(context: &TestContext) {
    let request = Request::builder()
        .uri("/api/liked/s1")
        .body(Body::empty())
        .expect("request");
    let (status, body) = send(context, request);
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<u64> = body
        .as_array()
        .expect("array body")
        .iter()
        .filter_map(|d| d.get("id").and_then(Value::as_u64))
        .collect();
    assert_eq!(ids, vec![1]);
}

#[scenario(path = "tests/features/swipe_api.feature", index = 0)]
fn unknown_action_rejected(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/swipe_api.feature", index = 1)]
fn likes_replayed(context: TestContext) {
    let _ = context;
}
