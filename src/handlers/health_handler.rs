use axum::extract::State;
use serde_json::{json, Value};

use crate::config::AppState;
use crate::interceptors::ApiSuccess;

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> ApiSuccess<Value> {
    let data = json!({
        "status": "ok",
        "service": state.config.app_name,
        "version": state.config.app_version,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    ApiSuccess::new("Service is healthy", data)
}
