use futures::future::LocalBoxFuture;

use crate::analysis::error::AnalysisError;
use crate::analysis::gemini::{parse_reply, GenerateContentRequest};
use crate::analysis::types::{now_millis, AnalysisReport, AnalysisResult};
use crate::camera::CapturedFrame;
use crate::config::AnalysisConfig;
use crate::utils::api::Api;

const ERROR_BODY_PREVIEW: usize = 200;

/// Turns a captured frame into a report. Never fails: service problems come
/// back as a degraded report.
#[cfg_attr(test, mockall::automock)]
pub trait Analyzer {
    fn analyze(&self, frame: CapturedFrame) -> LocalBoxFuture<'static, AnalysisReport>;
}

/// One-shot client for the Gemini `generateContent` endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct GeminiClient {
    config: AnalysisConfig,
}

impl GeminiClient {
    pub fn new(config: AnalysisConfig) -> Self {
        if config.api_key.is_none() {
            log::warn!("GEMINI_API_KEY was not set at build time; scans will return the fallback result");
        }
        Self { config }
    }

    pub fn from_build_env() -> Self {
        Self::new(AnalysisConfig::from_build_env())
    }

    /// Single request/response round trip without the fallback policy.
    pub async fn try_analyze(&self, frame: &CapturedFrame) -> Result<AnalysisResult, AnalysisError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(AnalysisError::MissingApiKey)?;

        let (width, height) = frame.dimensions();
        log::info!(
            "Sending {}x{} frame to {}",
            width,
            height,
            self.config.model
        );

        let response = Api::post(&self.config.generate_content_url())
            .header("x-goog-api-key", api_key)
            .timeout(self.config.timeout_ms)
            .json(&GenerateContentRequest::for_frame(frame))?
            .send()
            .await?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AnalysisError::Body(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(AnalysisError::Status {
                status,
                body: body.chars().take(ERROR_BODY_PREVIEW).collect(),
            });
        }

        parse_reply(&body, now_millis())
    }
}

impl Analyzer for GeminiClient {
    fn analyze(&self, frame: CapturedFrame) -> LocalBoxFuture<'static, AnalysisReport> {
        let client = self.clone();
        Box::pin(async move {
            let outcome = client.try_analyze(&frame).await;
            settle(outcome, now_millis())
        })
    }
}

/// Apply the fallback policy: any error becomes the degraded report.
pub fn settle(outcome: Result<AnalysisResult, AnalysisError>, now: i64) -> AnalysisReport {
    match outcome {
        Ok(result) => AnalysisReport::verified(result),
        Err(err) => {
            log::warn!("Gemini analysis failed: {}", err);
            AnalysisReport::degraded(now)
        }
    }
}
