use serde::{Deserialize, Serialize};

pub const FALLBACK_DESCRIPTION: &str = "Analysis unavailable (API Error)";
pub const FALLBACK_DETAILS: [&str; 3] = ["Connection failed", "Check API Key", "Retry scan"];

/// Verdict for one captured frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(rename = "isAIGenerated")]
    pub is_ai_generated: bool,
    /// 0 to 100
    pub confidence: f64,
    pub description: String,
    pub details: Vec<String>,
    /// Unix epoch milliseconds
    pub timestamp: i64,
}

impl AnalysisResult {
    /// Substitute result used whenever the inference service fails.
    pub fn fallback(timestamp: i64) -> Self {
        Self {
            is_ai_generated: false,
            confidence: 0.0,
            description: FALLBACK_DESCRIPTION.to_string(),
            details: FALLBACK_DETAILS.iter().map(|d| d.to_string()).collect(),
            timestamp,
        }
    }

    pub fn confidence_label(&self) -> String {
        format!("{:.0}%", self.confidence)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalysisStatus {
    /// Parsed from a real service reply.
    Verified,
    /// The fallback stands in for a failed call.
    Degraded,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisReport {
    pub result: AnalysisResult,
    pub status: AnalysisStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    AiGenerated,
    Authentic,
    Unverified,
}

impl Verdict {
    pub fn badge(self) -> &'static str {
        match self {
            Verdict::AiGenerated => "⚠️ AI GENERATED",
            Verdict::Authentic => "✓ AUTHENTIC",
            Verdict::Unverified => "○ UNVERIFIED",
        }
    }
}

impl AnalysisReport {
    pub fn verified(result: AnalysisResult) -> Self {
        Self {
            result,
            status: AnalysisStatus::Verified,
        }
    }

    pub fn degraded(timestamp: i64) -> Self {
        Self {
            result: AnalysisResult::fallback(timestamp),
            status: AnalysisStatus::Degraded,
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.status == AnalysisStatus::Degraded
    }

    pub fn verdict(&self) -> Verdict {
        if self.is_degraded() {
            Verdict::Unverified
        } else if self.result.is_ai_generated {
            Verdict::AiGenerated
        } else {
            Verdict::Authentic
        }
    }
}

pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
