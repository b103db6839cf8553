use thiserror::Error;

use crate::utils::api::ApiError;

/// Why a round trip to the inference service produced no usable verdict.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no Gemini API key configured")]
    MissingApiKey,
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("inference service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to read response body: {0}")]
    Body(String),
    #[error("request blocked by the service: {0}")]
    Blocked(String),
    #[error("no data returned from AI")]
    EmptyResponse,
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("reply does not match the verdict schema: {0}")]
    Schema(String),
}
