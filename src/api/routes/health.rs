use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::api::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let threshold = state.detector.threshold();
    Json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "commit": env!("PLAGCHECK_GIT_HASH"),
        "built_at": env!("PLAGCHECK_BUILD_TIMESTAMP"),
        "language": state.detector.tokenizer().language(),
        "threshold": threshold.value(),
        "threshold_policy": threshold.policy().as_str(),
    }))
}
