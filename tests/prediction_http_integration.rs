//! Integration tests for the prediction client over HTTP.
//!
//! These tests verify the end-to-end flow:
//! 1. PredictionClient serializes the profile and posts it to `/predict`
//! 2. HttpPredictionService maps statuses, bodies, and transport failures
//! 3. The request state settles in `Succeeded` or `Failed` accordingly
//! 4. Late responses after a reset are discarded
//!
//! A small axum app bound to `127.0.0.1:0` stands in for the scoring service.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

use personality_predictor::adapters::prediction::{HttpPredictionService, HttpServiceConfig};
use personality_predictor::application::{PredictionClient, SubmitError};
use personality_predictor::domain::prediction::{RequestPhase, RequestState};
use personality_predictor::domain::profile::{PersonalityProfile, ProfileStore, TraitName};
use personality_predictor::ports::{PredictionError, PredictionService};

// =============================================================================
// Test Infrastructure
// =============================================================================

const ENGINEER_BODY: &str = r#"{"predicted_role":{"role":"Engineer","percentage":73.5},"alternative_roles":[{"role":"Designer","percentage":20.1}]}"#;

/// Shared state of the stand-in service.
#[derive(Clone, Default)]
struct MockState {
    /// Request bodies received on `/predict`.
    bodies: Arc<Mutex<Vec<Value>>>,
    /// Number of `/predict` hits.
    hits: Arc<AtomicUsize>,
    /// When set, `/predict` waits for a notification before answering.
    gate: Option<Arc<Notify>>,
}

impl MockState {
    fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Default::default()
        }
    }
}

/// `/predict` answering with the engineer prediction.
async fn predict_ok(State(state): State<MockState>, Json(body): Json<Value>) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);
    state.bodies.lock().unwrap().push(body);
    if let Some(gate) = &state.gate {
        gate.notified().await;
    }
    (
        StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, "application/json")],
        ENGINEER_BODY,
    )
}

async fn welcome() -> impl IntoResponse {
    Json(json!({ "message": "Welcome to the AI Career Guidance API" }))
}

fn predict_router(state: MockState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/predict", post(predict_ok))
        .with_state(state)
}

/// Router whose `/predict` always answers with `status` and `body`.
fn fixed_router(status: StatusCode, body: &'static str) -> Router {
    Router::new().route(
        "/predict",
        post(move || async move {
            (
                status,
                [(axum::http::header::CONTENT_TYPE, "application/json")],
                body,
            )
        }),
    )
}

/// Start the stand-in service on a random port and return the base URL.
async fn start_mock_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}

fn http_service(base_url: &str) -> HttpPredictionService {
    HttpPredictionService::new(
        HttpServiceConfig::new(base_url).with_timeout(Duration::from_secs(5)),
    )
    .unwrap()
}

fn http_client(base_url: &str) -> Arc<PredictionClient> {
    Arc::new(PredictionClient::new(Arc::new(http_service(base_url))))
}

async fn wait_for_hits(state: &MockState, hits: usize) {
    for _ in 0..500 {
        if state.hits.load(Ordering::SeqCst) >= hits {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("service never received {} request(s)", hits);
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn test_success_response_becomes_succeeded() {
    let base_url = start_mock_server(predict_router(MockState::default())).await;
    let client = http_client(&base_url);

    client.submit(PersonalityProfile::neutral()).await.unwrap();

    let state = client.current_state();
    let result = state.result().expect("expected Succeeded");
    assert_eq!(result.predicted_role.role, "Engineer");
    assert!((result.predicted_role.percentage - 73.5).abs() < f64::EPSILON);
    assert_eq!(result.alternative_roles.len(), 1);
    assert_eq!(result.alternative_roles[0].role, "Designer");
}

#[tokio::test]
async fn test_request_body_carries_every_trait_unchanged() {
    let state = MockState::default();
    let base_url = start_mock_server(predict_router(state.clone())).await;
    let client = http_client(&base_url);

    let mut store = ProfileStore::new();
    for (i, name) in TraitName::ALL.into_iter().enumerate() {
        store.set_trait(name, (i as i64) * 11);
    }
    let profile = store.get();

    client.submit(profile).await.unwrap();

    let bodies = state.bodies.lock().unwrap().clone();
    assert_eq!(bodies.len(), 1);
    let body = bodies[0].as_object().expect("body should be an object");
    assert_eq!(body.len(), 10);
    for (name, score) in profile.iter() {
        assert_eq!(body[name.as_str()], json!(score.value()), "trait {}", name);
    }

    let parsed: PersonalityProfile = serde_json::from_value(bodies[0].clone()).unwrap();
    assert_eq!(parsed, profile);
}

#[tokio::test]
async fn test_http_500_becomes_failed() {
    let base_url =
        start_mock_server(fixed_router(StatusCode::INTERNAL_SERVER_ERROR, "{\"detail\":\"boom\"}"))
            .await;
    let client = http_client(&base_url);

    client.submit(PersonalityProfile::neutral()).await.unwrap();

    let state = client.current_state();
    let message = state.error_message().expect("expected Failed");
    assert!(!message.is_empty());
    assert!(message.contains("500"));
    assert!(matches!(
        client.last_error(),
        Some(PredictionError::Service { status: 500, .. })
    ));
}

#[tokio::test]
async fn test_validation_rejection_becomes_failed() {
    let base_url = start_mock_server(fixed_router(
        StatusCode::UNPROCESSABLE_ENTITY,
        "{\"detail\":[{\"msg\":\"field required\"}]}",
    ))
    .await;
    let client = http_client(&base_url);

    client.submit(PersonalityProfile::neutral()).await.unwrap();

    assert_eq!(client.current_state().phase(), RequestPhase::Failed);
    match client.last_error() {
        Some(PredictionError::Service { status, body }) => {
            assert_eq!(status, 422);
            assert!(body.contains("field required"));
        }
        other => panic!("expected Service error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_becomes_failed() {
    let base_url = start_mock_server(fixed_router(StatusCode::OK, "not json at all")).await;
    let client = http_client(&base_url);

    client.submit(PersonalityProfile::neutral()).await.unwrap();

    assert_eq!(client.current_state().phase(), RequestPhase::Failed);
    assert!(matches!(
        client.last_error(),
        Some(PredictionError::ResponseFormat(_))
    ));
}

#[tokio::test]
async fn test_wrong_shape_body_becomes_failed() {
    let base_url = start_mock_server(fixed_router(
        StatusCode::OK,
        "{\"predicted_role\":{\"role\":\"Engineer\",\"percentage\":\"high\"},\"alternative_roles\":[]}",
    ))
    .await;
    let client = http_client(&base_url);

    client.submit(PersonalityProfile::neutral()).await.unwrap();

    assert!(matches!(
        client.last_error(),
        Some(PredictionError::ResponseFormat(_))
    ));
}

#[tokio::test]
async fn test_unreachable_service_becomes_failed() {
    let base_url = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };
    let client = http_client(&base_url);

    client.submit(PersonalityProfile::neutral()).await.unwrap();

    let state = client.current_state();
    assert!(state.error_message().is_some_and(|m| !m.is_empty()));
    assert!(matches!(
        client.last_error(),
        Some(PredictionError::Transport(_))
    ));
}

#[tokio::test]
async fn test_slow_service_times_out() {
    let gate = Arc::new(Notify::new());
    let base_url = start_mock_server(predict_router(MockState::gated(gate))).await;
    let service = HttpPredictionService::new(
        HttpServiceConfig::new(&base_url).with_timeout(Duration::from_secs(1)),
    )
    .unwrap();
    let client = PredictionClient::new(Arc::new(service));

    client.submit(PersonalityProfile::neutral()).await.unwrap();

    assert_eq!(
        client.last_error(),
        Some(PredictionError::Timeout { timeout_secs: 1 })
    );
    assert_eq!(client.current_state().phase(), RequestPhase::Failed);
}

#[tokio::test]
async fn test_concurrent_submit_is_rejected() {
    let gate = Arc::new(Notify::new());
    let state = MockState::gated(gate.clone());
    let base_url = start_mock_server(predict_router(state.clone())).await;
    let client = http_client(&base_url);

    let first = tokio::spawn({
        let client = client.clone();
        async move { client.submit(PersonalityProfile::neutral()).await }
    });
    wait_for_hits(&state, 1).await;

    let second = client.submit(PersonalityProfile::neutral()).await;
    assert_eq!(second, Err(SubmitError::AlreadyInProgress));
    assert_eq!(client.current_state(), RequestState::Pending);

    gate.notify_one();
    first.await.unwrap().unwrap();

    assert_eq!(state.hits.load(Ordering::SeqCst), 1);
    assert_eq!(client.current_state().phase(), RequestPhase::Succeeded);
}

#[tokio::test]
async fn test_late_response_after_reset_is_discarded() {
    let gate = Arc::new(Notify::new());
    let state = MockState::gated(gate.clone());
    let base_url = start_mock_server(predict_router(state.clone())).await;
    let client = http_client(&base_url);

    let submit = tokio::spawn({
        let client = client.clone();
        async move { client.submit(PersonalityProfile::neutral()).await }
    });
    wait_for_hits(&state, 1).await;

    client.reset();
    assert_eq!(client.current_state(), RequestState::Idle);

    gate.notify_one();
    submit.await.unwrap().unwrap();

    assert_eq!(client.current_state(), RequestState::Idle);
    assert!(client.last_error().is_none());
}

#[tokio::test]
async fn test_welcome_returns_service_message() {
    let base_url = start_mock_server(predict_router(MockState::default())).await;

    let message = http_service(&base_url).welcome().await.unwrap();

    assert_eq!(message, "Welcome to the AI Career Guidance API");
}
