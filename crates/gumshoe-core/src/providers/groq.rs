//! Groq provider (OpenAI-compatible Chat Completions).

use anyhow::Result;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};

use crate::providers::sse::ChatCompletionSseParser;
use crate::providers::{
    ChatMessage, ProviderError, ProviderErrorKind, ProviderStream, resolve_api_key,
    resolve_base_url,
};

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

/// Groq API configuration.
#[derive(Debug, Clone)]
pub struct GroqConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl GroqConfig {
    /// Creates a new config from environment.
    ///
    /// Authentication resolution order:
    /// 1. `config_api_key` parameter (from config file)
    /// 2. `API_KEY` environment variable
    ///
    /// Environment variables:
    /// - `API_KEY` (fallback if not in config)
    /// - `GROQ_BASE_URL` (optional)
    ///
    /// # Errors
    /// Returns an error if no API key is available or the base URL is invalid.
    pub fn from_env(
        model: String,
        config_base_url: Option<&str>,
        config_api_key: Option<&str>,
    ) -> Result<Self> {
        let api_key = resolve_api_key(config_api_key, "API_KEY", "groq")?;
        let base_url = resolve_base_url(config_base_url, "GROQ_BASE_URL", DEFAULT_BASE_URL, "Groq")?;

        Ok(Self {
            api_key,
            base_url,
            model,
        })
    }
}

/// Sampling parameters for a single completion request.
#[derive(Debug, Clone)]
pub struct SamplingParams {
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
    pub stop: Option<Vec<String>>,
}

/// Groq chat completions client. The credential is owned by the client;
/// nothing is read from ambient state after construction.
pub struct GroqClient {
    config: GroqConfig,
    http: reqwest::Client,
}

impl GroqClient {
    pub fn new(config: GroqConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Sends one non-streaming completion request and returns the
    /// assistant's text content.
    ///
    /// # Errors
    /// Returns a classified [`ProviderError`] on transport, HTTP, or
    /// response-shape failures. No retry; any failure is terminal.
    pub async fn complete(
        &self,
        messages: &[ChatMessage],
        params: &SamplingParams,
    ) -> Result<String> {
        let request = ChatCompletionRequest::new(&self.config, messages, params, false);
        let response = self.send(&request).await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(ProviderError::http_status(status.as_u16(), &error_body).into());
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::parse(format!("Failed to parse completion: {e}")))?;

        tracing::debug!(model = %self.config.model, "completion received");

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| ProviderError::parse("Response contained no choices").into())
    }

    /// Sends one streaming completion request and returns the event stream.
    ///
    /// # Errors
    /// Returns a classified [`ProviderError`] if the request itself fails;
    /// mid-stream failures surface as stream items.
    pub async fn complete_stream(
        &self,
        messages: &[ChatMessage],
        params: &SamplingParams,
    ) -> Result<ProviderStream> {
        let request = ChatCompletionRequest::new(&self.config, messages, params, true);
        let response = self.send(&request).await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(ProviderError::http_status(status.as_u16(), &error_body).into());
        }

        let byte_stream = response.bytes_stream();
        Ok(Box::pin(ChatCompletionSseParser::new(byte_stream)))
    }

    async fn send(&self, request: &ChatCompletionRequest<'_>) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.config.base_url, CHAT_COMPLETIONS_PATH);
        tracing::debug!(%url, model = %self.config.model, stream = request.stream, "sending chat completion request");

        self.http
            .post(&url)
            .headers(build_headers(&self.config.api_key, request.stream))
            .json(request)
            .send()
            .await
            .map_err(|e| classify_reqwest_error(e).into())
    }
}

fn build_headers(api_key: &str, streaming: bool) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        "Authorization",
        HeaderValue::from_str(&format!("Bearer {api_key}"))
            .unwrap_or_else(|_| HeaderValue::from_static("")),
    );
    headers.insert("content-type", HeaderValue::from_static("application/json"));
    headers.insert(
        "user-agent",
        HeaderValue::from_static(crate::providers::shared::USER_AGENT),
    );
    if streaming {
        headers.insert("accept", HeaderValue::from_static("text/event-stream"));
    }

    headers
}

fn classify_reqwest_error(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::timeout(format!("Request timed out: {e}"))
    } else if e.is_connect() {
        ProviderError::timeout(format!("Connection failed: {e}"))
    } else {
        ProviderError::new(ProviderErrorKind::HttpStatus, format!("Network error: {e}"))
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    top_p: f32,
    max_tokens: u32,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    stop: Option<&'a [String]>,
}

impl<'a> ChatCompletionRequest<'a> {
    fn new(
        config: &'a GroqConfig,
        messages: &'a [ChatMessage],
        params: &'a SamplingParams,
        stream: bool,
    ) -> Self {
        Self {
            model: &config.model,
            messages,
            temperature: params.temperature,
            top_p: params.top_p,
            max_tokens: params.max_tokens,
            stream,
            stop: params.stop.as_deref(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GroqConfig {
        GroqConfig {
            api_key: "test-key".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: "deepseek-r1-distill-llama-70b".to_string(),
        }
    }

    /// Request wire shape: one user message plus the named sampling fields;
    /// `stop` is omitted when unset.
    #[test]
    fn test_request_serialization() {
        let messages = vec![ChatMessage::user("What is Rust?")];
        let params = SamplingParams {
            temperature: 0.6,
            top_p: 0.95,
            max_tokens: 500,
            stop: None,
        };
        let config = config();
        let request = ChatCompletionRequest::new(&config, &messages, &params, false);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "deepseek-r1-distill-llama-70b");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "What is Rust?");
        assert!((value["temperature"].as_f64().unwrap() - 0.6).abs() < 1e-6);
        assert!((value["top_p"].as_f64().unwrap() - 0.95).abs() < 1e-6);
        assert_eq!(value["max_tokens"], 500);
        assert_eq!(value["stream"], false);
        assert!(value.get("stop").is_none());
    }

    #[test]
    fn test_request_serialization_streaming() {
        let messages = vec![ChatMessage::user("Hello")];
        let params = SamplingParams {
            temperature: 0.6,
            top_p: 0.95,
            max_tokens: 4096,
            stop: Some(vec!["END".to_string()]),
        };
        let config = config();
        let request = ChatCompletionRequest::new(&config, &messages, &params, true);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["stream"], true);
        assert_eq!(value["max_tokens"], 4096);
        assert_eq!(value["stop"][0], "END");
    }

    #[test]
    fn test_response_parsing() {
        let body = r#"{
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "hi there"},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 3, "completion_tokens": 2, "total_tokens": 5}
        }"#;

        let response: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            response.choices[0].message.content.as_deref(),
            Some("hi there")
        );
    }

    #[test]
    fn test_streaming_headers_request_event_stream() {
        let headers = build_headers("k", true);
        assert_eq!(headers.get("accept").unwrap(), "text/event-stream");
        assert_eq!(headers.get("Authorization").unwrap(), "Bearer k");

        let headers = build_headers("k", false);
        assert!(headers.get("accept").is_none());
    }
}
