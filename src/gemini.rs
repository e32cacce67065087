//! Gemini model client for itinerary generation
//!
//! This module provides HTTP client functionality for the generative
//! language API: one `generateContent` call per form submission, with a
//! bounded request timeout and typed error mapping. Failed calls are not
//! retried; the failure surfaces as a single user-visible error.

use crate::config::GeminiConfig;
use crate::error::PlannerError;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, instrument, warn};

/// An interface for sending a prompt to a generative text model and
/// receiving the raw response text.
///
/// Implementors encapsulate transport and vendor-specific API details.
/// Consumers (the web handlers) remain decoupled from any particular
/// provider, and tests substitute a fake.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Send one prompt and return the model's raw response text.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Client for the Gemini `generateContent` REST endpoint
pub struct GeminiClient {
    /// HTTP client
    client: Client,
    /// Model API configuration, credential included
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a new model client from injected configuration
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_seconds.into());

        let client = Client::builder()
            .timeout(timeout)
            .user_agent("TripPlanner/0.1.0")
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    #[instrument(skip(self, prompt), fields(model = %self.config.model))]
    async fn generate(&self, prompt: &str) -> Result<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| PlannerError::config("GEMINI_API_KEY belum diset"))?;

        info!("Requesting itinerary from model '{}'", self.config.model);
        let start_time = Instant::now();

        let body = wire::GenerateContentRequest::from_prompt(prompt);
        debug!("Prompt length: {} chars", prompt.len());

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!("Network error calling model API: {}", e);
                PlannerError::api(format!("Network error: {e}"))
            })?;

        let status = response.status();
        if status.as_u16() == 401 || status.as_u16() == 403 {
            error!("Model API rejected the credential (HTTP {})", status);
            return Err(
                PlannerError::api("Invalid API key. Please check your GEMINI_API_KEY.").into(),
            );
        }

        if !status.is_success() {
            warn!("Model API request failed: HTTP {}", status);
            return Err(PlannerError::api(format!(
                "Model API request failed with status: {} - {}",
                status,
                status.canonical_reason().unwrap_or("Unknown error")
            ))
            .into());
        }

        let generate_response: wire::GenerateContentResponse = response
            .json()
            .await
            .with_context(|| "Failed to parse generateContent response")
            .map_err(|e| {
                error!("Malformed envelope from model API: {}", e);
                PlannerError::api("Invalid response envelope received from the model API")
            })?;

        let text = generate_response
            .into_text()
            .ok_or_else(|| PlannerError::api("Model response contained no candidates"))?;

        let total_duration = start_time.elapsed();
        info!(
            "Model responded with {} chars in {:.3}s",
            text.len(),
            total_duration.as_secs_f64()
        );

        if total_duration.as_secs() > 5 {
            warn!(
                "Slow model response detected: {:.3}s",
                total_duration.as_secs_f64()
            );
        }

        Ok(text)
    }
}

/// Request and response structures for the `generateContent` wire format
mod wire {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize)]
    pub struct GenerateContentRequest {
        pub contents: Vec<RequestContent>,
    }

    #[derive(Debug, Serialize)]
    pub struct RequestContent {
        pub role: String,
        pub parts: Vec<Part>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct Part {
        pub text: String,
    }

    impl GenerateContentRequest {
        pub fn from_prompt(prompt: &str) -> Self {
            Self {
                contents: vec![RequestContent {
                    role: "user".to_string(),
                    parts: vec![Part {
                        text: prompt.to_string(),
                    }],
                }],
            }
        }
    }

    #[derive(Debug, Deserialize)]
    pub struct GenerateContentResponse {
        pub candidates: Option<Vec<Candidate>>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Candidate {
        pub content: Option<CandidateContent>,
    }

    #[derive(Debug, Deserialize)]
    pub struct CandidateContent {
        pub parts: Option<Vec<Part>>,
    }

    impl GenerateContentResponse {
        /// Concatenated text parts of the first candidate, if any
        pub fn into_text(self) -> Option<String> {
            let candidate = self.candidates?.into_iter().next()?;
            let parts = candidate.content?.parts?;
            if parts.is_empty() {
                return None;
            }
            Some(parts.into_iter().map(|p| p.text).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn test_config(base_url: String) -> GeminiConfig {
        GeminiConfig {
            api_key: Some("test-key".to_string()),
            model: "gemini-1.5-flash".to_string(),
            base_url,
            timeout_seconds: 5,
        }
    }

    #[tokio::test]
    async fn test_generate_returns_candidate_text() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/models/gemini-1.5-flash:generateContent")
            .match_header("x-goog-api-key", "test-key")
            .match_body(Matcher::PartialJson(json!({
                "contents": [{"role": "user", "parts": [{"text": "test prompt"}]}]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"candidates":[{"content":{"parts":[{"text":"{\"days\":[]}"}]}}]}"#,
            )
            .create_async()
            .await;

        let client = GeminiClient::new(test_config(server.url())).unwrap();
        let text = client.generate("test prompt").await.unwrap();

        assert_eq!(text, r#"{"days":[]}"#);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generate_concatenates_parts() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/models/gemini-1.5-flash:generateContent")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"candidates":[{"content":{"parts":[{"text":"{\"days\""},{"text":":[]}"}]}}]}"#,
            )
            .create_async()
            .await;

        let client = GeminiClient::new(test_config(server.url())).unwrap();
        let text = client.generate("test prompt").await.unwrap();

        assert_eq!(text, r#"{"days":[]}"#);
    }

    #[tokio::test]
    async fn test_generate_maps_auth_failure() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/models/gemini-1.5-flash:generateContent")
            .with_status(403)
            .create_async()
            .await;

        let client = GeminiClient::new(test_config(server.url())).unwrap();
        let err = client.generate("test prompt").await.unwrap_err();

        assert!(err.to_string().contains("API key"));
    }

    #[tokio::test]
    async fn test_generate_maps_server_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/models/gemini-1.5-flash:generateContent")
            .with_status(500)
            .create_async()
            .await;

        let client = GeminiClient::new(test_config(server.url())).unwrap();
        let err = client.generate("test prompt").await.unwrap_err();

        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_generate_rejects_empty_candidates() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/models/gemini-1.5-flash:generateContent")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"candidates":[]}"#)
            .create_async()
            .await;

        let client = GeminiClient::new(test_config(server.url())).unwrap();
        let err = client.generate("test prompt").await.unwrap_err();

        assert!(err.to_string().contains("no candidates"));
    }
}
