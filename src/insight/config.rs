use std::fmt;
use std::time::Duration;

use super::DEFAULT_TEMPERATURE;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT_SECS: u64 = 8;
const MAX_TEMPERATURE: f32 = 2.0;

/// Settings for the insight provider, read once at server startup.
///
/// - `GEMINI_API_KEY` (or `API_KEY`): optional, a missing key makes every
///   request fall back
/// - `INSIGHT_MODEL`, `INSIGHT_ENDPOINT`
/// - `INSIGHT_TIMEOUT_SECS`: whole seconds, zero or garbage means default
/// - `INSIGHT_TEMPERATURE`: clamped to `[0, 2]`
#[derive(Clone, PartialEq)]
pub struct InsightConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    pub timeout: Duration,
    pub temperature: f32,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl InsightConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let timeout = get("INSIGHT_TIMEOUT_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);
        let temperature = get("INSIGHT_TEMPERATURE")
            .and_then(|v| v.parse::<f32>().ok())
            .filter(|t| t.is_finite())
            .map(|t| t.clamp(0.0, MAX_TEMPERATURE))
            .unwrap_or(defaults.temperature);

        Self {
            api_key: get("GEMINI_API_KEY").or_else(|| get("API_KEY")),
            model: get("INSIGHT_MODEL").unwrap_or(defaults.model),
            endpoint: get("INSIGHT_ENDPOINT")
                .map(|e| e.trim_end_matches('/').to_string())
                .unwrap_or(defaults.endpoint),
            timeout,
            temperature,
        }
    }

    pub fn generate_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

impl fmt::Debug for InsightConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsightConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .field("temperature", &self.temperature)
            .finish()
    }
}
