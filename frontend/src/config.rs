use std::fmt;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_ANALYSIS_TIMEOUT_MS: u32 = 15_000;

/// Settings for the inference endpoint, baked in at build time.
///
/// Trunk forwards the environment to `rustc`, so `GEMINI_API_KEY=... trunk build`
/// is all that is needed. A missing key is not an error here: every scan then
/// degrades to the fallback result.
#[derive(Clone, PartialEq)]
pub struct AnalysisConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub timeout_ms: u32,
}

impl AnalysisConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            first_non_blank(option_env!("GEMINI_API_KEY"), option_env!("API_KEY")),
            option_env!("GEMINI_MODEL"),
            option_env!("GEMINI_API_BASE"),
            option_env!("XR_ANALYSIS_TIMEOUT_MS"),
        )
    }

    pub fn from_values(
        api_key: Option<&str>,
        model: Option<&str>,
        api_base: Option<&str>,
        timeout_ms: Option<&str>,
    ) -> Self {
        let timeout_ms = match non_blank(timeout_ms).map(str::parse::<u32>) {
            Some(Ok(ms)) if ms > 0 => ms,
            Some(_) => {
                log::warn!(
                    "Ignoring invalid XR_ANALYSIS_TIMEOUT_MS, using {} ms",
                    DEFAULT_ANALYSIS_TIMEOUT_MS
                );
                DEFAULT_ANALYSIS_TIMEOUT_MS
            }
            None => DEFAULT_ANALYSIS_TIMEOUT_MS,
        };

        Self {
            api_key: non_blank(api_key).map(str::to_string),
            model: non_blank(model).unwrap_or(DEFAULT_GEMINI_MODEL).to_string(),
            api_base: non_blank(api_base)
                .unwrap_or(DEFAULT_GEMINI_API_BASE)
                .trim_end_matches('/')
                .to_string(),
            timeout_ms,
        }
    }

    pub fn generate_content_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::from_values(None, None, None, None)
    }
}

// Keeps the key out of logs.
impl fmt::Debug for AnalysisConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn first_non_blank<'a>(preferred: Option<&'a str>, fallback: Option<&'a str>) -> Option<&'a str> {
    non_blank(preferred).or_else(|| non_blank(fallback))
}
