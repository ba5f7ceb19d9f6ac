//! Router-level tests driving every API route in-process.
#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when requests cannot be built"
)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use tower::ServiceExt;
use trippick_core::{NewDestination, SwipeLedger};
use trippick_server::{AppState, router};

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

#[fixture]
fn state() -> AppState {
    AppState::with_catalogue([
        draft("Jeju", "jeju", "nature", "beach"),
        draft("Seoul", "seoul", "urban", "city"),
    ])
}

async fn call(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_owned())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).expect("request"))
        .await
        .expect("infallible router");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}

fn ids(value: &Value) -> Vec<u64> {
    value
        .as_array()
        .expect("array body")
        .iter()
        .filter_map(|d| d.get("id").and_then(Value::as_u64))
        .collect()
}

#[rstest]
#[tokio::test]
async fn lists_every_destination(state: AppState) {
    let app = router(state);
    let (status, body) = call(&app, "GET", "/api/destinations", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 2]);
    let first = body.get(0).expect("first destination");
    assert_eq!(first.get("nameKorean"), Some(&json!("Jeju")));
    assert_eq!(first.get("latitude"), Some(&Value::Null));
}

#[rstest]
#[case("/api/destinations/region/seoul", vec![2])]
#[case("/api/destinations/region/busan", vec![])]
#[case("/api/destinations/category/nature", vec![1])]
#[case("/api/destinations/category/%EC%9E%90%EC%97%B0", vec![])]
#[tokio::test]
async fn filters_by_path_segment(state: AppState, #[case] uri: &str, #[case] expected: Vec<u64>) {
    let (status, body) = call(&router(state), "GET", uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), expected);
}

#[rstest]
#[tokio::test]
async fn category_segments_are_percent_decoded() {
    let app = router(AppState::seeded());
    let (status, body) = call(&app, "GET", "/api/destinations/category/%ED%95%B4%EB%B3%80", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![2]);
}

#[rstest]
#[case("/api/destinations/1", StatusCode::OK)]
#[case("/api/destinations/99", StatusCode::NOT_FOUND)]
#[case("/api/destinations/abc", StatusCode::NOT_FOUND)]
#[case("/api/destinations/-1", StatusCode::NOT_FOUND)]
#[tokio::test]
async fn looks_up_by_id(state: AppState, #[case] uri: &str, #[case] expected: StatusCode) {
    let (status, body) = call(&router(state), "GET", uri, None).await;
    assert_eq!(status, expected);
    if expected == StatusCode::NOT_FOUND {
        assert_eq!(body, json!({ "message": "Destination not found" }));
    }
}

#[rstest]
#[case("/api/destinations/random?region=seoul", Some("seoul"))]
#[case("/api/destinations/random?region=all", None)]
#[case("/api/destinations/random?region=", None)]
#[case("/api/destinations/random", None)]
#[tokio::test]
async fn random_pick_honours_region(
    state: AppState,
    #[case] uri: &str,
    #[case] region: Option<&str>,
) {
    let (status, body) = call(&router(state), "GET", uri, None).await;
    assert_eq!(status, StatusCode::OK);
    if let Some(region) = region {
        assert_eq!(body.get("region"), Some(&json!(region)));
    }
}

#[rstest]
#[tokio::test]
async fn random_pick_without_matches_is_not_found(state: AppState) {
    let (status, body) = call(
        &router(state),
        "GET",
        "/api/destinations/random?region=busan",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "No destinations found" }));
}

#[rstest]
#[tokio::test]
async fn records_swipes_and_replays_likes(state: AppState) {
    let app = router(state);
    let (status, event) = call(
        &app,
        "POST",
        "/api/swipe",
        Some(r#"{"destinationId": 1, "action": "like", "sessionId": "s1"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        event,
        json!({ "id": 1, "destinationId": 1, "action": "like", "sessionId": "s1" })
    );
    let (status, _) = call(
        &app,
        "POST",
        "/api/swipe",
        Some(r#"{"destinationId": 2, "action": "pass", "sessionId": "s1"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, liked) = call(&app, "GET", "/api/liked/s1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&liked), vec![1]);

    let (_, other) = call(&app, "GET", "/api/liked/s2", None).await;
    assert_eq!(other, json!([]));
}

#[rstest]
#[case(r#"{"destinationId": 1, "action": "maybe", "sessionId": "s1"}"#)]
#[case(r#"{"destinationId": "one", "action": "like", "sessionId": "s1"}"#)]
#[case(r#"{"destinationId": 1, "action": "like"}"#)]
#[case("not json")]
#[tokio::test]
async fn invalid_swipes_are_rejected(state: AppState, #[case] payload: &str) {
    let app = router(state.clone());
    let (status, body) = call(&app, "POST", "/api/swipe", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Invalid swipe action data" }));
    assert_eq!(state.swipes.len().expect("ledger length"), 0);
}

#[rstest]
#[tokio::test]
async fn swipes_without_json_content_type_are_rejected(state: AppState) {
    let app = router(state);
    let request = Request::builder()
        .method("POST")
        .uri("/api/swipe")
        .body(Body::from(
            r#"{"destinationId": 1, "action": "like", "sessionId": "s1"}"#,
        ))
        .expect("request");
    let response = app.oneshot(request).await.expect("infallible router");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[rstest]
#[tokio::test]
async fn cors_preflight_allows_post(state: AppState) {
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/swipe")
        .header(header::ORIGIN, "https://trippick.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .expect("request");
    let response = router(state)
        .oneshot(request)
        .await
        .expect("infallible router");
    assert_eq!(response.status(), StatusCode::OK);
    let methods = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .and_then(|value| value.to_str().ok())
        .expect("allow-methods header");
    assert!(methods.contains("POST"));
}
