// ABOUTME: Generic OpenAI-compatible LLM provider for cloud and local endpoints
// ABOUTME: Serves Groq, OpenAI, Ollama, vLLM and LocalAI with json_schema response formats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aquaclub Contributors

//! # `OpenAI`-Compatible Provider
//!
//! One client for every endpoint implementing the `OpenAI` chat completions
//! API. Groq and `OpenAI` are configured with their cloud base URLs; local
//! servers are configured from the environment.
//!
//! ## Configuration
//!
//! - `GROQ_API_KEY`: Groq cloud key
//! - `OPENAI_API_KEY`: `OpenAI` cloud key
//! - `LOCAL_LLM_BASE_URL`: Local base URL (default: <http://localhost:11434/v1> for Ollama)
//! - `LOCAL_LLM_MODEL`: Local model (default: `qwen2.5:14b-instruct`)
//! - `LOCAL_LLM_API_KEY`: Local API key (optional, empty for local servers)
//!
//! ## Structured output
//!
//! When a request carries a [`ResponseSchema`] and the endpoint supports it,
//! the schema is sent as `response_format: {"type": "json_schema", ...}`.
//! Endpoints with only JSON mode get `{"type": "json_object"}`.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use super::{
    ChatMessage, ChatRequest, ChatResponse, LlmCapabilities, LlmProvider, ResponseSchema,
    TokenUsage,
};
use crate::constants::{llm_endpoints, service_names, timeouts};
use crate::errors::{AppError, ErrorCode};

// ============================================================================
// Configuration Constants
// ============================================================================

/// Environment variable for the Groq API key
const GROQ_API_KEY_ENV: &str = "GROQ_API_KEY";

/// Environment variable for the `OpenAI` API key
const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variable for local LLM base URL
const LOCAL_LLM_BASE_URL_ENV: &str = "LOCAL_LLM_BASE_URL";

/// Environment variable for local LLM model
const LOCAL_LLM_MODEL_ENV: &str = "LOCAL_LLM_MODEL";

/// Environment variable for local LLM API key (optional)
const LOCAL_LLM_API_KEY_ENV: &str = "LOCAL_LLM_API_KEY";

/// Well-known Groq models
const GROQ_MODELS: &[&str] = &[
    "llama-3.3-70b-versatile",
    "llama-3.1-8b-instant",
    "openai/gpt-oss-120b",
    "moonshotai/kimi-k2-instruct",
];

/// Well-known `OpenAI` models
const OPENAI_MODELS: &[&str] = &["gpt-4o-mini", "gpt-4o", "gpt-4.1-mini", "gpt-4.1"];

/// Common models served through Ollama
const LOCAL_MODELS: &[&str] = &[
    "qwen2.5:14b-instruct",
    "qwen2.5:7b-instruct",
    "qwen2.5:32b-instruct",
    "llama3.1:8b-instruct",
    "llama3.3:70b-instruct",
    "mistral:7b-instruct",
];

// ============================================================================
// API Request/Response Types (OpenAI-compatible format)
// ============================================================================

/// OpenAI-compatible API request structure
#[derive(Debug, Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

/// `response_format` request field
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ResponseFormat {
    /// Any syntactically valid JSON object
    JsonObject,
    /// Output constrained to a JSON Schema
    JsonSchema { json_schema: JsonSchemaFormat },
}

/// Named schema inside a `json_schema` response format
#[derive(Debug, Serialize)]
struct JsonSchemaFormat {
    name: String,
    // Strict mode demands every property be required; sessions carry
    // optional fields, so the schema is advisory and re-validated locally.
    strict: bool,
    schema: Value,
}

/// Message structure for OpenAI-compatible API
#[derive(Debug, Clone, Serialize, Deserialize)]
struct OpenAiMessage {
    role: String,
    content: String,
}

impl From<&ChatMessage> for OpenAiMessage {
    fn from(msg: &ChatMessage) -> Self {
        Self {
            role: msg.role.as_str().to_owned(),
            content: msg.content.clone(),
        }
    }
}

/// OpenAI-compatible API response structure
#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    #[serde(default)]
    choices: Vec<OpenAiChoice>,
    #[serde(default)]
    usage: Option<OpenAiUsage>,
    model: String,
}

/// Choice in response
#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
    finish_reason: Option<String>,
}

/// Message in response
#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
}

/// Usage statistics in response
#[derive(Debug, Deserialize)]
struct OpenAiUsage {
    #[serde(rename = "prompt_tokens")]
    prompt: u32,
    #[serde(rename = "completion_tokens")]
    completion: u32,
    #[serde(rename = "total_tokens")]
    total: u32,
}

/// Error response structure
#[derive(Debug, Deserialize)]
struct OpenAiErrorResponse {
    error: OpenAiErrorDetail,
}

/// Error detail structure
#[derive(Debug, Deserialize)]
struct OpenAiErrorDetail {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
}

// ============================================================================
// Provider Configuration
// ============================================================================

/// Configuration for the `OpenAI`-compatible provider
#[derive(Clone)]
pub struct OpenAiCompatibleConfig {
    /// Base URL for the API (e.g., <http://localhost:11434/v1>)
    pub base_url: String,
    /// API key (optional for local servers)
    pub api_key: Option<String>,
    /// Default model to use
    pub default_model: String,
    /// Provider name for logging
    pub provider_name: &'static str,
    /// Provider display name
    pub display_name: &'static str,
    /// Service label used in error messages
    pub service_label: &'static str,
    /// Well-known models of this endpoint
    pub models: &'static [&'static str],
    /// Capabilities of this endpoint
    pub capabilities: LlmCapabilities,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Whole-request timeout
    pub request_timeout: Duration,
}

impl OpenAiCompatibleConfig {
    /// Configuration for Groq's cloud API
    #[must_use]
    pub fn groq(api_key: impl Into<String>) -> Self {
        Self {
            base_url: llm_endpoints::GROQ_BASE_URL.to_owned(),
            api_key: Some(api_key.into()),
            default_model: llm_endpoints::GROQ_DEFAULT_MODEL.to_owned(),
            provider_name: "groq",
            display_name: "Groq (Llama)",
            service_label: service_names::GROQ,
            models: GROQ_MODELS,
            capabilities: LlmCapabilities::structured(),
            connect_timeout: Duration::from_secs(timeouts::CLOUD_CONNECT_SECS),
            request_timeout: Duration::from_secs(timeouts::CLOUD_REQUEST_SECS),
        }
    }

    /// Configuration for the `OpenAI` cloud API
    #[must_use]
    pub fn openai(api_key: impl Into<String>) -> Self {
        Self {
            base_url: llm_endpoints::OPENAI_BASE_URL.to_owned(),
            api_key: Some(api_key.into()),
            default_model: llm_endpoints::OPENAI_DEFAULT_MODEL.to_owned(),
            provider_name: "openai",
            display_name: "OpenAI",
            service_label: service_names::OPENAI,
            models: OPENAI_MODELS,
            capabilities: LlmCapabilities::structured(),
            connect_timeout: Duration::from_secs(timeouts::CLOUD_CONNECT_SECS),
            request_timeout: Duration::from_secs(timeouts::CLOUD_REQUEST_SECS),
        }
    }

    /// Configuration for a local server
    ///
    /// The display name is derived from the port of the well-known servers.
    #[must_use]
    pub fn local(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let (provider_name, display_name) = if base_url.contains(":11434") {
            ("ollama", "Ollama (Local)")
        } else if base_url.contains(":8000") {
            ("vllm", "vLLM (Local)")
        } else if base_url.contains(":8080") {
            ("localai", "LocalAI")
        } else {
            ("local", "Local LLM")
        };

        Self {
            base_url,
            api_key: None,
            default_model: model.into(),
            provider_name,
            display_name,
            service_label: service_names::LOCAL_LLM,
            models: LOCAL_MODELS,
            capabilities: LlmCapabilities::SYSTEM_MESSAGES | LlmCapabilities::JSON_MODE,
            connect_timeout: Duration::from_secs(timeouts::LOCAL_CONNECT_SECS),
            request_timeout: Duration::from_secs(timeouts::LOCAL_REQUEST_SECS),
        }
    }

    /// Point the configuration at another base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the API key
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the default model
    #[must_use]
    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }
}

impl Debug for OpenAiCompatibleConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("OpenAiCompatibleConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("default_model", &self.default_model)
            .field("provider_name", &self.provider_name)
            .field("capabilities", &self.capabilities)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Generic `OpenAI`-compatible LLM provider
#[derive(Debug)]
pub struct OpenAiCompatibleProvider {
    client: Client,
    config: OpenAiCompatibleConfig,
}

impl OpenAiCompatibleProvider {
    /// Create a new provider with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: OpenAiCompatibleConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Create a Groq provider from `GROQ_API_KEY`
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not set or the HTTP client cannot be created.
    pub fn groq_from_env() -> Result<Self, AppError> {
        Self::new(OpenAiCompatibleConfig::groq(required_key(GROQ_API_KEY_ENV)?))
    }

    /// Create an `OpenAI` provider from `OPENAI_API_KEY`
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not set or the HTTP client cannot be created.
    pub fn openai_from_env() -> Result<Self, AppError> {
        Self::new(OpenAiCompatibleConfig::openai(required_key(OPENAI_API_KEY_ENV)?))
    }

    /// Create a local provider from environment variables
    ///
    /// Reads:
    /// - `LOCAL_LLM_BASE_URL`: Base URL (default: Ollama at localhost:11434)
    /// - `LOCAL_LLM_MODEL`: Model name (default: qwen2.5:14b-instruct)
    /// - `LOCAL_LLM_API_KEY`: API key (optional)
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn local_from_env() -> Result<Self, AppError> {
        let base_url = env::var(LOCAL_LLM_BASE_URL_ENV)
            .unwrap_or_else(|_| llm_endpoints::OLLAMA_BASE_URL.to_owned());
        let model = env::var(LOCAL_LLM_MODEL_ENV)
            .unwrap_or_else(|_| llm_endpoints::LOCAL_DEFAULT_MODEL.to_owned());

        let mut config = OpenAiCompatibleConfig::local(base_url, model);
        config.api_key = env::var(LOCAL_LLM_API_KEY_ENV)
            .ok()
            .filter(|k| !k.is_empty());

        info!(
            "Initializing {} provider: base_url={}, model={}",
            config.display_name, config.base_url, config.default_model
        );

        Self::new(config)
    }

    /// Provider configuration
    #[must_use]
    pub const fn config(&self) -> &OpenAiCompatibleConfig {
        &self.config
    }

    /// Override the default model
    #[must_use]
    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.config.default_model = model.into();
        self
    }

    /// Build the API URL for a given endpoint
    fn api_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.config.base_url.trim_end_matches('/'))
    }

    /// Pick the `response_format` this endpoint can honour
    fn response_format(&self, schema: Option<&ResponseSchema>) -> Option<ResponseFormat> {
        let schema = schema?;
        if self.config.capabilities.supports_structured_output() {
            Some(ResponseFormat::JsonSchema {
                json_schema: JsonSchemaFormat {
                    name: schema.name.clone(),
                    strict: false,
                    schema: schema.schema.clone(),
                },
            })
        } else if self.config.capabilities.supports_json_mode() {
            Some(ResponseFormat::JsonObject)
        } else {
            None
        }
    }

    /// Add authorization header if API key is configured
    fn add_auth_header(&self, request: RequestBuilder) -> RequestBuilder {
        if let Some(ref api_key) = self.config.api_key {
            request.bearer_auth(api_key)
        } else {
            request
        }
    }

    /// Map a transport failure to an application error
    fn transport_error(&self, e: &reqwest::Error) -> AppError {
        error!(
            "Failed to send request to {}: {}",
            self.config.provider_name, e
        );
        if e.is_connect() || e.is_timeout() {
            AppError::new(
                ErrorCode::ExternalServiceUnavailable,
                format!(
                    "Cannot reach {} at {}: {e}",
                    self.config.display_name, self.config.base_url
                ),
            )
        } else {
            AppError::external_service(
                self.config.service_label,
                format!("Failed to connect: {e}"),
            )
        }
    }

    /// Parse error response from API
    fn parse_error_response(&self, status: StatusCode, body: &str) -> AppError {
        let service = self.config.service_label;

        if let Ok(error_response) = serde_json::from_str::<OpenAiErrorResponse>(body) {
            let message = error_response.error.message;
            return match status.as_u16() {
                401 | 403 => AppError::auth_invalid(format!(
                    "{service} authentication failed: {message}"
                )),
                429 => AppError::new(
                    ErrorCode::ExternalRateLimited,
                    extract_rate_limit_message(&message),
                ),
                404 => AppError::external_service(
                    service,
                    format!("Model or endpoint not found: {message}"),
                ),
                500..=504 => AppError::new(
                    ErrorCode::ExternalServiceUnavailable,
                    format!("{service} is unavailable: {message}"),
                ),
                _ => {
                    let error_type = error_response
                        .error
                        .error_type
                        .unwrap_or_else(|| "unknown".to_owned());
                    AppError::external_service(service, format!("{error_type} - {message}"))
                }
            };
        }

        // Non-JSON error bodies are common with local servers and proxies
        match status.as_u16() {
            401 | 403 => AppError::auth_invalid(format!("{service} rejected the API key")),
            429 => AppError::new(
                ErrorCode::ExternalRateLimited,
                extract_rate_limit_message(body),
            ),
            500..=504 => AppError::new(
                ErrorCode::ExternalServiceUnavailable,
                format!("{service} is not responding ({status})"),
            ),
            _ => AppError::external_service(
                service,
                format!(
                    "API error ({}): {}",
                    status,
                    body.chars().take(200).collect::<String>()
                ),
            ),
        }
    }
}

/// Read a mandatory API key
fn required_key(name: &str) -> Result<String, AppError> {
    env::var(name)
        .ok()
        .filter(|k| !k.trim().is_empty())
        .ok_or_else(|| {
            AppError::new(
                ErrorCode::ConfigMissing,
                format!("{name} environment variable not set"),
            )
        })
}

/// Extract a user-friendly rate limit message from an OpenAI-style error
///
/// Groq and `OpenAI` embed "try again in 1.5s" in the message.
fn extract_rate_limit_message(message: &str) -> String {
    let lower = message.to_lowercase();
    if let Some(retry_pos) = lower.find("try again in ") {
        let after_prefix = &lower[retry_pos + "try again in ".len()..];
        let end_pos = after_prefix
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .unwrap_or(after_prefix.len());
        if let Ok(seconds) = after_prefix[..end_pos].parse::<f64>() {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let seconds_int = seconds.ceil() as u64;
            return format!("LLM rate limit reached. Please try again in {seconds_int} seconds.");
        }
    }
    "LLM rate limit reached. Please wait a moment and try again.".to_owned()
}

#[async_trait]
impl LlmProvider for OpenAiCompatibleProvider {
    fn name(&self) -> &'static str {
        self.config.provider_name
    }

    fn display_name(&self) -> &'static str {
        self.config.display_name
    }

    fn capabilities(&self) -> LlmCapabilities {
        self.config.capabilities
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }

    fn available_models(&self) -> &'static [&'static str] {
        self.config.models
    }

    #[instrument(skip(self, request), fields(provider = self.config.provider_name, model = %request.model.as_deref().unwrap_or(&self.config.default_model)))]
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let model = request
            .model
            .as_deref()
            .unwrap_or(&self.config.default_model);

        let openai_request = OpenAiRequest {
            model: model.to_owned(),
            messages: request.messages.iter().map(OpenAiMessage::from).collect(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            stream: false,
            response_format: self.response_format(request.response_schema.as_ref()),
        };

        debug!(
            messages = openai_request.messages.len(),
            structured = openai_request.response_format.is_some(),
            "Sending chat completion request to {}",
            self.config.provider_name
        );

        let http_request = self
            .client
            .post(self.api_url("chat/completions"))
            .json(&openai_request);

        let response = self
            .add_auth_header(http_request)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read API response: {}", e);
            AppError::external_service(
                self.config.service_label,
                format!("Failed to read response: {e}"),
            )
        })?;

        if !status.is_success() {
            error!(status = %status, "{} API error", self.config.provider_name);
            return Err(self.parse_error_response(status, &body));
        }

        let openai_response: OpenAiResponse = serde_json::from_str(&body).map_err(|e| {
            error!(
                "Failed to parse API response: {} - body: {}",
                e,
                body.chars().take(500).collect::<String>()
            );
            AppError::external_service(
                self.config.service_label,
                format!("Failed to parse response: {e}"),
            )
        })?;

        let usage = openai_response.usage.map(|u| TokenUsage {
            prompt_tokens: u.prompt,
            completion_tokens: u.completion,
            total_tokens: u.total,
        });

        // No choices means no output; the caller treats empty content as a failed generation
        let Some(choice) = openai_response.choices.into_iter().next() else {
            warn!(
                provider = self.config.provider_name,
                "API returned no choices"
            );
            return Ok(ChatResponse {
                content: String::new(),
                model: openai_response.model,
                usage,
                finish_reason: None,
            });
        };

        let content = choice.message.content.unwrap_or_default();

        debug!(
            "Received response from {}: {} chars, finish_reason: {:?}",
            self.config.provider_name,
            content.len(),
            choice.finish_reason
        );

        Ok(ChatResponse {
            content,
            model: openai_response.model,
            usage,
            finish_reason: choice.finish_reason,
        })
    }

    #[instrument(skip(self), fields(provider = self.config.provider_name))]
    async fn health_check(&self) -> Result<bool, AppError> {
        debug!(
            "Performing {} health check at {}",
            self.config.provider_name, self.config.base_url
        );

        let response = self
            .add_auth_header(self.client.get(self.api_url("models")))
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        Ok(response.status().is_success())
    }
}
