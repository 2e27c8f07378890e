// ABOUTME: Application constants for service naming, LLM defaults and HTTP timeouts
// ABOUTME: Re-exports the wire-level plan constants defined in aquaclub-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aquaclub Contributors

//! # Constants Module
//!
//! Hardcoded defaults for the main crate. Plan field names and bounds are
//! owned by `aquaclub-core` and re-exported here.

pub use aquaclub_core::constants::{language, nutrition_fields, plan_limits, training_fields};

/// Service names used in logs and error messages
pub mod service_names {
    /// Name reported by the logging layer
    pub const AQUACLUB: &str = "aquaclub";
    /// Groq cloud inference
    pub const GROQ: &str = "Groq";
    /// `OpenAI` cloud API
    pub const OPENAI: &str = "OpenAI";
    /// Google Gemini API
    pub const GEMINI: &str = "Gemini";
    /// Self-hosted `OpenAI`-compatible server
    pub const LOCAL_LLM: &str = "LocalLLM";
}

/// Endpoints and default models of the supported LLM backends
pub mod llm_endpoints {
    /// Groq `OpenAI`-compatible base URL
    pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
    /// Default Groq model
    pub const GROQ_DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

    /// `OpenAI` base URL
    pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
    /// Default `OpenAI` model
    pub const OPENAI_DEFAULT_MODEL: &str = "gpt-4o-mini";

    /// Gemini Generative Language API base URL
    pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
    /// Default Gemini model
    pub const GEMINI_DEFAULT_MODEL: &str = "gemini-2.5-flash";

    /// Ollama's `OpenAI`-compatible endpoint
    pub const OLLAMA_BASE_URL: &str = "http://localhost:11434/v1";
    /// Default model for local inference
    pub const LOCAL_DEFAULT_MODEL: &str = "qwen2.5:14b-instruct";
}

/// HTTP client timeouts
pub mod timeouts {
    /// Connection timeout for cloud APIs
    pub const CLOUD_CONNECT_SECS: u64 = 10;
    /// Request timeout for cloud APIs; a full mesocycle can take a while
    pub const CLOUD_REQUEST_SECS: u64 = 120;
    /// Connection timeout for local servers
    pub const LOCAL_CONNECT_SECS: u64 = 30;
    /// Request timeout for local servers (local inference is slower)
    pub const LOCAL_REQUEST_SECS: u64 = 300;
}
