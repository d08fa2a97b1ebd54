//! Gemini `generateContent` client.

use http::StatusCode;
use serde::{Deserialize, Serialize};

use super::{InsightError, InsightPrompt};

#[cfg(feature = "ssr")]
use super::{InsightConfig, InsightProvider};
#[cfg(feature = "ssr")]
use async_trait::async_trait;
#[cfg(feature = "ssr")]
use reqwest::Client;

#[derive(Serialize, Debug)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize, Debug)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<TextPart<'a>>,
}

#[derive(Serialize, Debug)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Serialize, Debug)]
struct GenerationConfig {
    temperature: f32,
}

impl<'a> GenerateRequest<'a> {
    fn new(prompt: &'a InsightPrompt) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![TextPart { text: &prompt.text }],
            }],
            generation_config: GenerationConfig {
                temperature: prompt.temperature,
            },
        }
    }
}

#[derive(Deserialize, Debug)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<ApiError>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize, Debug)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ApiError {
    message: String,
}

/// Extracts the answer text from a `generateContent` response body.
///
/// The text parts of the first candidate are joined. A candidate without text
/// yields an empty string, leaving the blank-answer policy to the caller.
fn parse_response(status: StatusCode, body: &str) -> Result<String, InsightError> {
    let parsed = serde_json::from_str::<GenerateResponse>(body);

    if !status.is_success() {
        let message = match parsed {
            Ok(GenerateResponse {
                error: Some(err), ..
            }) => err.message,
            _ => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
        };
        return Err(InsightError::Provider {
            status: status.as_u16(),
            message,
        });
    }

    let response = parsed.map_err(|e| InsightError::Malformed(e.to_string()))?;
    if let Some(err) = response.error {
        return Err(InsightError::Provider {
            status: status.as_u16(),
            message: err.message,
        });
    }
    let candidate = response
        .candidates
        .and_then(|c| c.into_iter().next())
        .ok_or_else(|| InsightError::Malformed("no candidates".to_string()))?;

    Ok(candidate
        .content
        .map(|c| {
            c.parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default())
}

#[cfg(feature = "ssr")]
pub struct GeminiProvider {
    client: Client,
    api_key: Option<String>,
    url: String,
}

#[cfg(feature = "ssr")]
impl GeminiProvider {
    /// The timeout from `config` bounds the whole request, including the body.
    pub fn new(config: &InsightConfig) -> Result<Self, InsightError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| InsightError::Transport(e.to_string()))?;
        if config.api_key.is_none() {
            tracing::warn!("no Gemini API key set; career tips will use the fallback text");
        }
        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            url: config.generate_url(),
        })
    }
}

#[cfg(feature = "ssr")]
fn transport_error(err: reqwest::Error) -> InsightError {
    if err.is_timeout() {
        InsightError::Timeout
    } else {
        InsightError::Transport(err.without_url().to_string())
    }
}

#[cfg(feature = "ssr")]
#[async_trait]
impl InsightProvider for GeminiProvider {
    #[tracing::instrument(skip_all, fields(topic = %prompt.topic))]
    async fn generate(&self, prompt: &InsightPrompt) -> Result<String, InsightError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(InsightError::MissingCredential)?;

        let response = self
            .client
            .post(&self.url)
            .header("x-goog-api-key", api_key)
            .json(&GenerateRequest::new(prompt))
            .send()
            .await
            .map_err(transport_error)?;
        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;
        tracing::debug!(%status, bytes = body.len(), "gemini responded");

        parse_response(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::Topic;

    #[test]
    fn test_request_body_shape() {
        let prompt = InsightPrompt::new(Topic::Cybersecurity, "Uttam Kumar", 0.8);
        let body = serde_json::to_value(GenerateRequest::new(&prompt)).unwrap();
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], prompt.text.as_str());
        let temperature = body["generationConfig"]["temperature"].as_f64().unwrap();
        assert!((temperature - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_parse_joins_text_parts() {
        let body = r#"{
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": " Keep "}, {"text": "shipping. "}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ],
            "usageMetadata": {"promptTokenCount": 40}
        }"#;
        assert_eq!(parse_response(StatusCode::OK, body).unwrap(), " Keep shipping. ");
    }

    #[test]
    fn test_parse_candidate_without_text_is_empty() {
        let body = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        assert_eq!(parse_response(StatusCode::OK, body).unwrap(), "");
    }

    #[test]
    fn test_parse_rejects_missing_candidates() {
        assert!(matches!(
            parse_response(StatusCode::OK, "{}"),
            Err(InsightError::Malformed(_))
        ));
        assert!(matches!(
            parse_response(StatusCode::OK, "not json"),
            Err(InsightError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_error_status() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}}"#;
        assert_eq!(
            parse_response(StatusCode::BAD_REQUEST, body),
            Err(InsightError::Provider {
                status: 400,
                message: "API key not valid".to_string()
            })
        );
        assert_eq!(
            parse_response(StatusCode::BAD_GATEWAY, "<html>oops</html>"),
            Err(InsightError::Provider {
                status: 502,
                message: "Bad Gateway".to_string()
            })
        );
    }

    #[test]
    fn test_parse_error_object_on_success_status() {
        let body = r#"{"error": {"message": "quota exceeded"}}"#;
        assert!(matches!(
            parse_response(StatusCode::OK, body),
            Err(InsightError::Provider { status: 200, .. })
        ));
    }
}

#[cfg(all(test, feature = "ssr"))]
mod provider_tests {
    use super::*;
    use crate::insight::{InsightFetcher, ERROR_FALLBACK};
    use crate::nav::Topic;

    // Nothing listens on the discard port, so connects are refused.
    fn unreachable_config() -> InsightConfig {
        InsightConfig::from_lookup(|key| match key {
            "GEMINI_API_KEY" => Some("test-key".to_string()),
            "INSIGHT_ENDPOINT" => Some("http://127.0.0.1:9".to_string()),
            "INSIGHT_TIMEOUT_SECS" => Some("1".to_string()),
            _ => None,
        })
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_sending() {
        let config = InsightConfig {
            endpoint: "http://127.0.0.1:9".to_string(),
            ..InsightConfig::default()
        };
        assert_eq!(config.api_key, None);
        let provider = GeminiProvider::new(&config).unwrap();
        let prompt = InsightPrompt::new(Topic::Cybersecurity, "Uttam Kumar", 0.8);
        // an attempted request would surface as Transport, not MissingCredential
        assert_eq!(
            provider.generate(&prompt).await,
            Err(InsightError::MissingCredential)
        );

        let fetcher = InsightFetcher::new(GeminiProvider::new(&InsightConfig::default()).unwrap());
        assert_eq!(fetcher.fetch(Topic::Cybersecurity).await, ERROR_FALLBACK);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_uses_error_fallback() {
        let config = unreachable_config();
        let provider = GeminiProvider::new(&config).unwrap();
        let prompt = InsightPrompt::new(Topic::ProfessionalGrowth, "Uttam Kumar", 0.8);
        let err = provider.generate(&prompt).await.unwrap_err();
        assert!(
            matches!(err, InsightError::Transport(_) | InsightError::Timeout),
            "unexpected error: {err:?}"
        );

        let fetcher = InsightFetcher::new(GeminiProvider::new(&config).unwrap());
        assert_eq!(fetcher.fetch(Topic::ProfessionalGrowth).await, ERROR_FALLBACK);
    }
}
