use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tracing::{error, warn};

use crate::errors::PlagiarismError;

impl IntoResponse for PlagiarismError {
    fn into_response(self) -> axum::response::Response {
        let class = self.classify();
        let status = match &self {
            PlagiarismError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            PlagiarismError::Config(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(kind = class.error_type, error = %self, "Request failed");
        } else {
            warn!(kind = class.error_type, error = %self, "Request rejected");
        }

        (status, Json(json!({"error": self.to_string(), "kind": class.error_type}))).into_response()
    }
}
