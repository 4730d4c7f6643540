use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use veracity_core::AnalysisResult;
use veracity_pipeline::AnalysisRequest;

use crate::middleware::RequestId;

use super::{map_pipeline_error, ApiError, AppState};

/// `POST /analyze`: runs the full pipeline and returns the flat result.
pub(super) async fn analyze(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let Json(request) = body.map_err(|rejection| {
        ApiError::new(req_id.0.clone(), "bad_request", rejection.body_text())
    })?;

    let result = state
        .pipeline
        .analyze(request)
        .await
        .map_err(|e| map_pipeline_error(req_id.0.clone(), &e))?;

    Ok(Json(result))
}
