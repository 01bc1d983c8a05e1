//! HTTP transport — routes, auth, and body recovery.
//!
//! The transport owns everything the core must never see: the shared
//! secret check runs before any turn processing, and a body that is not
//! valid JSON is answered with a 400 without touching the pipeline. Valid
//! JSON of the wrong shape is the adapter's problem, not an error.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tracing::warn;

use crate::pipeline::Orchestrator;

/// Header carrying the shared secret.
const API_KEY_HEADER: &str = "x-api-key";

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<Orchestrator>,
    /// Expected `x-api-key` value. `None` rejects everything.
    pub api_key: Option<SecretString>,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/api/honeypot", post(honeypot))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "HoneyPot Server Running",
        "description": "Send POST to /api/honeypot",
    }))
}

async fn honeypot(State(state): State<AppState>, headers: HeaderMap, body: String) -> Response {
    if !authorized(&state, &headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "Unauthorized"})),
        )
            .into_response();
    }

    let raw: Value = match serde_json::from_str(&body) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "Rejected request with invalid JSON body");
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Invalid JSON body"})),
            )
                .into_response();
        }
    };

    Json(state.orchestrator.handle(raw).await).into_response()
}

/// Byte-for-byte comparison of the supplied header against the configured
/// secret. An unconfigured secret fails closed.
fn authorized(state: &AppState, headers: &HeaderMap) -> bool {
    let Some(expected) = &state.api_key else {
        return false;
    };
    headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|provided| provided.as_bytes() == expected.expose_secret().as_bytes())
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;
    use crate::persona::PersonaEngine;
    use crate::session::SessionStore;

    fn state_with_key(key: Option<&str>) -> AppState {
        AppState {
            orchestrator: Arc::new(Orchestrator::new(
                Arc::new(SessionStore::new()),
                PersonaEngine::with_seed(3),
                None,
            )),
            api_key: key.map(SecretString::from),
        }
    }

    fn headers_with_key(key: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, HeaderValue::from_str(key).unwrap());
        headers
    }

    #[test]
    fn matching_key_is_authorized() {
        let state = state_with_key(Some("hunter2"));
        assert!(authorized(&state, &headers_with_key("hunter2")));
    }

    #[test]
    fn wrong_key_is_rejected() {
        let state = state_with_key(Some("hunter2"));
        assert!(!authorized(&state, &headers_with_key("hunter3")));
    }

    #[test]
    fn missing_header_is_rejected() {
        let state = state_with_key(Some("hunter2"));
        assert!(!authorized(&state, &HeaderMap::new()));
    }

    #[test]
    fn unconfigured_secret_fails_closed() {
        let state = state_with_key(None);
        assert!(!authorized(&state, &headers_with_key("anything")));
    }
}
