// POST /check-plagiarism — run the full detection pipeline.
//
// Returns 200 with the three-level report, or 400 in the failure shape when
// validation rejects the input. The oversize check is the caller-side bound
// on the quadratic sentence-matching cost.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use tracing::info;

use crate::detect::detect;
use crate::web::{api_error, AppState};

/// Request body: the two documents to compare.
#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    #[serde(default)]
    pub text1: String,
    #[serde(default)]
    pub text2: String,
}

pub async fn check_plagiarism(
    State(state): State<AppState>,
    Json(request): Json<CheckRequest>,
) -> Response {
    let len1 = request.text1.chars().count();
    let len2 = request.text2.chars().count();

    let max = state.config.max_text_len;
    if len1 > max || len2 > max {
        return api_error(
            StatusCode::BAD_REQUEST,
            &format!("Texts must be no longer than {max} characters"),
        );
    }

    info!(text1_chars = len1, text2_chars = len2, "processing plagiarism check");

    match detect(&request.text1, &request.text2) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => api_error(StatusCode::BAD_REQUEST, &e.to_string()),
    }
}
