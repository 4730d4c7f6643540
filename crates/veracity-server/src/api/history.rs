use axum::{extract::State, Extension, Json};
use veracity_core::AnalysisResult;
use veracity_pipeline::PipelineError;

use crate::middleware::RequestId;

use super::{map_pipeline_error, ApiError, AppState};

/// `GET /history`: most recent analyses, newest first.
pub(super) async fn list_history(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<Vec<AnalysisResult>>, ApiError> {
    let results = state
        .history
        .recent(state.history_limit)
        .await
        .map_err(|e| map_pipeline_error(req_id.0.clone(), &PipelineError::from(e)))?;

    Ok(Json(results))
}
