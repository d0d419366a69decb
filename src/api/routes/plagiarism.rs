use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::debug;

use crate::api::models::PossibilityRequest;
use crate::api::AppState;
use crate::errors::PlagiarismError;

/// `POST /plagiarism/possibility`: echo the request object with `result` added.
pub async fn possibility(
    State(state): State<AppState>,
    Json(mut body): Json<Value>,
) -> Result<Json<Value>, PlagiarismError> {
    let request = PossibilityRequest::from_json(&body)?;

    let comparison = state
        .detector
        .compare(&request.suspicious_text, &request.original_text);

    debug!(
        original_len = request.original_text.len(),
        suspicious_len = request.suspicious_text.len(),
        result = comparison.result,
        "Plagiarism possibility computed"
    );

    let obj = body
        .as_object_mut()
        .ok_or_else(|| PlagiarismError::Internal("request body changed shape".into()))?;
    obj.insert("result".into(), json!(comparison.result));

    if state.detector.diagnostics() {
        obj.insert("coefficient".into(), json!(comparison.coefficient));
        obj.insert(
            "bigrams".into(),
            json!({
                "suspect": comparison.suspect_bigrams,
                "original": comparison.original_bigrams,
            }),
        );
    }

    Ok(Json(body))
}
