//! Gemini text generation client
//!
//! Calls the `generateContent` REST endpoint. Any failure is returned as an
//! error; turning it into user-facing text is the assistance service's job.

use crate::config::API_KEY_ENVS;
use crate::error::{AppError, Result};
use crate::services::assistance::TextGenerator;
use crate::services::settings::AssistantSettings;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Concatenated text of the first candidate
fn extract_text(response: GenerateContentResponse) -> String {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default()
}

/// First non-empty API key from the environment
pub fn api_key_from_env() -> Option<String> {
    API_KEY_ENVS
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|key| !key.trim().is_empty())
}

/// Gemini `generateContent` client
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(settings: &AssistantSettings, api_key: Option<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("leetdaily/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            api_key,
        })
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint, self.model
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            AppError::Assistance(format!(
                "no API key configured (set {})",
                API_KEY_ENVS.join(" or ")
            ))
        })?;

        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
        };

        tracing::debug!("Sending generateContent request to model {}", self.model);

        let response = self
            .http
            .post(self.url())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Assistance(format!(
                "text generation service returned status {}",
                status
            )));
        }

        let parsed: GenerateContentResponse = response.json().await?;
        Ok(extract_text(parsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn settings_for(endpoint: String) -> AssistantSettings {
        AssistantSettings {
            endpoint,
            timeout_secs: 5,
            ..AssistantSettings::default()
        }
    }

    /// Serve one HTTP request with a canned response; returns the raw request
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];

            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);

                let text = String::from_utf8_lossy(&request).to_string();
                if let Some(header_end) = text.find("\r\n\r\n") {
                    let content_length = text[..header_end]
                        .lines()
                        .find_map(|line| {
                            let lower = line.to_ascii_lowercase();
                            lower
                                .strip_prefix("content-length:")
                                .map(|v| v.trim().parse::<usize>().unwrap())
                        })
                        .unwrap_or(0);
                    if request.len() >= header_end + 4 + content_length {
                        break;
                    }
                }
            }

            let response = format!(
                "{}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();

            String::from_utf8_lossy(&request).to_string()
        });

        (format!("http://{}", addr), handle)
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Hint 1. "},{"text":"Hint 2."}]}}]}"#,
        )
        .unwrap();

        assert_eq!(extract_text(response), "Hint 1. Hint 2.");
    }

    #[test]
    fn test_extract_text_without_candidates() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(extract_text(response), "");
    }

    #[tokio::test]
    async fn test_missing_api_key_is_error() {
        let client = GeminiClient::new(&AssistantSettings::default(), None).unwrap();

        let err = client.generate("hello").await.unwrap_err();
        assert!(matches!(err, AppError::Assistance(_)));
    }

    #[tokio::test]
    async fn test_generate_posts_prompt_and_reads_text() {
        let (endpoint, server) = serve_once(
            "HTTP/1.1 200 OK",
            r#"{"candidates":[{"content":{"parts":[{"text":"Use a hash map."}]}}]}"#,
        )
        .await;
        let client = GeminiClient::new(&settings_for(endpoint), Some("test-key".to_string())).unwrap();

        let text = client.generate("Give hints for Two Sum").await.unwrap();
        assert_eq!(text, "Use a hash map.");

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /v1beta/models/gemini-3-flash-preview:generateContent"));
        assert!(request.to_ascii_lowercase().contains("x-goog-api-key: test-key"));
        assert!(request.contains("Give hints for Two Sum"));
    }

    #[tokio::test]
    async fn test_error_status_is_error() {
        let (endpoint, server) =
            serve_once("HTTP/1.1 503 Service Unavailable", r#"{"error":{}}"#).await;
        let client = GeminiClient::new(&settings_for(endpoint), Some("test-key".to_string())).unwrap();

        let err = client.generate("prompt").await.unwrap_err();
        assert!(err.to_string().contains("503"));

        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_error() {
        // Bind then drop to get a port nobody listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = GeminiClient::new(
            &settings_for(format!("http://{}", addr)),
            Some("test-key".to_string()),
        )
        .unwrap();

        assert!(client.generate("prompt").await.is_err());
    }
}
