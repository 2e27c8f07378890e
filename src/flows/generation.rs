// ABOUTME: Generation service boundary between plan flows and generative models
// ABOUTME: Includes the LLM-backed implementation that turns chat completions into JSON values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aquaclub Contributors

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::LlmConfig;
use crate::errors::{AppError, ErrorCode, PlanKind};
use crate::llm::{ChatMessage, ChatRequest, LlmProvider, ResponseSchema};

/// One request to the generation service
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Plan being generated
    pub plan: PlanKind,
    /// Rendered instruction
    pub instruction: String,
    /// Validated, augmented input record
    pub input: Value,
    /// JSON Schema the output must follow
    pub output_schema: Value,
}

/// Produces a structured record from an instruction and an input record
///
/// `Ok(None)` means the model answered with nothing usable. Implementations
/// make a single attempt per call.
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Generate one record
    async fn generate(&self, request: &GenerationRequest) -> Result<Option<Value>, AppError>;
}

#[async_trait]
impl<T: GenerationService + ?Sized> GenerationService for &T {
    async fn generate(&self, request: &GenerationRequest) -> Result<Option<Value>, AppError> {
        (**self).generate(request).await
    }
}

#[async_trait]
impl<T: GenerationService + ?Sized> GenerationService for Box<T> {
    async fn generate(&self, request: &GenerationRequest) -> Result<Option<Value>, AppError> {
        (**self).generate(request).await
    }
}

/// Generation service backed by any [`LlmProvider`]
///
/// The instruction becomes the system message and the input record the user
/// message. Providers with native structured output receive the schema as a
/// constraint; the others get it spelled out at the end of the instruction.
#[derive(Debug)]
pub struct LlmGenerationService<P> {
    provider: P,
    model: Option<String>,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

impl<P: LlmProvider> LlmGenerationService<P> {
    /// Wrap a provider using its default model and sampling settings
    #[must_use]
    pub const fn new(provider: P) -> Self {
        Self {
            provider,
            model: None,
            temperature: None,
            max_tokens: None,
        }
    }

    /// Wrap a provider with the model and sampling settings from `config`
    #[must_use]
    pub fn from_config(provider: P, config: &LlmConfig) -> Self {
        Self {
            provider,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    /// Use a specific model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the sampling temperature
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Cap the generated tokens
    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Wrapped provider
    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Build the chat request sent for `request`
    ///
    /// # Errors
    ///
    /// Returns an error if the input record or schema cannot be serialized.
    pub fn chat_request(&self, request: &GenerationRequest) -> Result<ChatRequest, AppError> {
        let capabilities = self.provider.capabilities();

        let mut instruction = request.instruction.clone();
        if !capabilities.supports_structured_output() {
            let schema = serde_json::to_string_pretty(&request.output_schema)?;
            instruction.push_str("\n\n## Esquema JSON de la respuesta\n\n```json\n");
            instruction.push_str(&schema);
            instruction.push_str("\n```\n");
        }

        let input = serde_json::to_string(&request.input)?;
        let messages = if capabilities.supports_system_messages() {
            vec![ChatMessage::system(instruction), ChatMessage::user(input)]
        } else {
            vec![ChatMessage::user(format!("{instruction}\n\n{input}"))]
        };

        let mut chat = ChatRequest::new(messages).with_response_schema(ResponseSchema::new(
            format!("{}_plan", request.plan),
            request.output_schema.clone(),
        ));
        if let Some(model) = &self.model {
            chat = chat.with_model(model.clone());
        }
        if let Some(temperature) = self.temperature {
            chat = chat.with_temperature(temperature);
        }
        if let Some(max_tokens) = self.max_tokens {
            chat = chat.with_max_tokens(max_tokens);
        }
        Ok(chat)
    }
}

#[async_trait]
impl<P: LlmProvider> GenerationService for LlmGenerationService<P> {
    #[instrument(skip_all, fields(plan = %request.plan, provider = self.provider.name()))]
    async fn generate(&self, request: &GenerationRequest) -> Result<Option<Value>, AppError> {
        let chat = self.chat_request(request)?;
        let response = self.provider.complete(&chat).await?;

        debug!(
            model = %response.model,
            finish_reason = response.finish_reason.as_deref().unwrap_or("unknown"),
            chars = response.content.len(),
            "Model response received"
        );
        if response.finish_reason.as_deref() == Some("length") {
            warn!("Model output was truncated by the token limit");
        }

        parse_model_output(&response.content)
    }
}

/// Parse the text of a model response as a JSON value
///
/// Accepts bare JSON, a fenced ```` ```json ```` block, or an object embedded
/// in surrounding prose. Blank text yields `None`.
///
/// # Errors
///
/// Returns a `GenerationFailed` error if no JSON can be recovered.
pub fn parse_model_output(text: &str) -> Result<Option<Value>, AppError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let unfenced = strip_code_fence(trimmed);
    match serde_json::from_str(unfenced) {
        Ok(value) => Ok(Some(value)),
        Err(parse_error) => embedded_object(unfenced).map(Some).ok_or_else(|| {
            AppError::new(
                ErrorCode::GenerationFailed,
                format!("model output is not valid JSON: {parse_error}"),
            )
            .with_source(parse_error)
        }),
    }
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// The first `{` to the last `}` of prose-wrapped output, parsed unchanged
fn embedded_object(text: &str) -> Option<Value> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }
    serde_json::from_str(&text[start..=end]).ok()
}
