//! Request/response bodies for `POST /language/:analyze-text`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AnalyzeTextRequest<'a> {
    pub kind: &'static str,
    pub parameters: AnalyzeParameters,
    pub analysis_input: AnalysisInput<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AnalyzeParameters {
    pub model_version: &'static str,
    pub opinion_mining: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct AnalysisInput<'a> {
    pub documents: Vec<InputDocument<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct InputDocument<'a> {
    pub id: &'static str,
    pub text: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnalyzeTextResponse {
    pub results: SentimentResults,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SentimentResults {
    #[serde(default)]
    pub documents: Vec<DocumentSentiment>,
    #[serde(default)]
    pub errors: Vec<DocumentError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DocumentSentiment {
    pub sentiment: String,
    pub confidence_scores: WireConfidenceScores,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireConfidenceScores {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DocumentError {
    pub error: ServiceError,
}

/// Error object used both per-document and as the top-level error envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct ServiceError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ServiceError,
}
