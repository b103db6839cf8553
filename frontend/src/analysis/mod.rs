pub mod client;
pub mod error;
pub mod gemini;
pub mod types;

pub use client::{Analyzer, GeminiClient};
pub use types::{AnalysisReport, Verdict};
