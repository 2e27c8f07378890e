// ABOUTME: Tests for environment-driven LLM and logging configuration
// ABOUTME: Serialized with serial_test because they mutate process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aquaclub Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp)]
#![allow(missing_docs)]

use std::env;

use aquaclub::config::{LlmConfig, LlmProviderType};
use aquaclub::errors::ErrorCode;
use aquaclub::llm::{ChatProvider, LlmProvider};
use aquaclub::logging::{LogFormat, LoggingConfig};
use serial_test::serial;

const LLM_VARS: [&str; 10] = [
    LlmProviderType::ENV_VAR,
    LlmConfig::MODEL_ENV_VAR,
    LlmConfig::TEMPERATURE_ENV_VAR,
    LlmConfig::MAX_TOKENS_ENV_VAR,
    "GROQ_API_KEY",
    "GEMINI_API_KEY",
    "OPENAI_API_KEY",
    "LOCAL_LLM_BASE_URL",
    "LOCAL_LLM_MODEL",
    "LOCAL_LLM_API_KEY",
];

fn clear_llm_env() {
    for var in LLM_VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_provider_aliases() {
    assert_eq!(LlmProviderType::parse("Groq"), Some(LlmProviderType::Groq));
    assert_eq!(LlmProviderType::parse(" google "), Some(LlmProviderType::Gemini));
    assert_eq!(LlmProviderType::parse("OPENAI"), Some(LlmProviderType::OpenAi));
    for alias in ["local", "ollama", "vllm", "localai"] {
        assert_eq!(LlmProviderType::parse(alias), Some(LlmProviderType::Local));
    }
    assert_eq!(LlmProviderType::parse("anthropic"), None);
    assert_eq!(
        LlmProviderType::from_str_or_default("anthropic"),
        LlmProviderType::Groq
    );
}

#[test]
fn test_provider_display_round_trips_through_parse() {
    for provider in [
        LlmProviderType::Groq,
        LlmProviderType::Gemini,
        LlmProviderType::OpenAi,
        LlmProviderType::Local,
    ] {
        assert_eq!(LlmProviderType::parse(&provider.to_string()), Some(provider));
    }
    assert_eq!(LlmProviderType::Local.api_key_env_var(), None);
    assert_eq!(
        LlmProviderType::Gemini.api_key_env_var(),
        Some("GEMINI_API_KEY")
    );
}

#[test]
#[serial]
fn test_defaults_when_unset() {
    clear_llm_env();

    let config = LlmConfig::from_env().unwrap();

    assert_eq!(config, LlmConfig::default());
    assert_eq!(config.provider, LlmProviderType::Groq);
}

#[test]
#[serial]
fn test_values_are_read_and_trimmed() {
    clear_llm_env();
    env::set_var(LlmProviderType::ENV_VAR, "gemini");
    env::set_var(LlmConfig::MODEL_ENV_VAR, "  gemini-2.5-pro ");
    env::set_var(LlmConfig::TEMPERATURE_ENV_VAR, "0.4");
    env::set_var(LlmConfig::MAX_TOKENS_ENV_VAR, "8192");

    let config = LlmConfig::from_env().unwrap();

    assert_eq!(config.provider, LlmProviderType::Gemini);
    assert_eq!(config.model.as_deref(), Some("gemini-2.5-pro"));
    assert_eq!(config.temperature, Some(0.4));
    assert_eq!(config.max_tokens, Some(8192));
    clear_llm_env();
}

#[test]
#[serial]
fn test_blank_values_count_as_unset() {
    clear_llm_env();
    env::set_var(LlmConfig::MODEL_ENV_VAR, "   ");
    env::set_var(LlmConfig::TEMPERATURE_ENV_VAR, "");

    let config = LlmConfig::from_env().unwrap();

    assert!(config.model.is_none());
    assert!(config.temperature.is_none());
    clear_llm_env();
}

#[test]
#[serial]
fn test_invalid_values_are_config_errors() {
    for (var, value) in [
        (LlmConfig::TEMPERATURE_ENV_VAR, "tibia"),
        (LlmConfig::TEMPERATURE_ENV_VAR, "2.5"),
        (LlmConfig::TEMPERATURE_ENV_VAR, "-0.1"),
        (LlmConfig::MAX_TOKENS_ENV_VAR, "-1"),
    ] {
        clear_llm_env();
        env::set_var(var, value);

        let error = LlmConfig::from_env().unwrap_err();

        assert_eq!(error.code, ErrorCode::ConfigInvalid, "{var}={value}");
        assert!(error.message.contains(var));
    }
    clear_llm_env();
}

#[test]
#[serial]
fn test_unknown_provider_falls_back_to_default() {
    clear_llm_env();
    env::set_var(LlmProviderType::ENV_VAR, "mystery");

    assert_eq!(LlmProviderType::from_env(), LlmProviderType::Groq);
    clear_llm_env();
}

#[test]
#[serial]
fn test_missing_api_key_is_reported() {
    clear_llm_env();
    env::set_var(LlmProviderType::ENV_VAR, "openai");

    let error = ChatProvider::from_env().unwrap_err();

    assert_eq!(error.code, ErrorCode::ConfigMissing);
    assert!(error.message.contains("OPENAI_API_KEY"));
    clear_llm_env();
}

#[test]
#[serial]
fn test_provider_selection_and_model_override() {
    clear_llm_env();
    env::set_var("GROQ_API_KEY", "gsk-test");
    env::set_var(LlmConfig::MODEL_ENV_VAR, "llama-3.1-8b-instant");

    let provider = ChatProvider::from_env().unwrap();

    assert_eq!(provider.provider_type(), LlmProviderType::Groq);
    assert_eq!(provider.name(), "groq");
    assert_eq!(provider.default_model(), "llama-3.1-8b-instant");
    assert!(provider.capabilities().supports_structured_output());
    clear_llm_env();
}

#[test]
#[serial]
fn test_local_provider_needs_no_key() {
    clear_llm_env();
    env::set_var(LlmProviderType::ENV_VAR, "ollama");
    env::set_var("LOCAL_LLM_BASE_URL", "http://localhost:11434/v1");

    let provider = ChatProvider::from_config(&LlmConfig::from_env().unwrap()).unwrap();

    assert_eq!(provider.provider_type(), LlmProviderType::Local);
    assert_eq!(provider.name(), "ollama");
    assert!(provider.capabilities().supports_json_mode());
    assert!(!provider.capabilities().supports_structured_output());
    clear_llm_env();
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("compact"), LogFormat::Compact);
    assert_eq!(LogFormat::from_str_or_default("fancy"), LogFormat::Pretty);
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("LOG_FORMAT", "json");
    env::set_var("SERVICE_NAME", "aquaclub-test");
    env::remove_var("LOG_INCLUDE_LOCATION");

    let config = LoggingConfig::from_env();

    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.service_name, "aquaclub-test");
    assert!(!config.include_location);
    env::remove_var("LOG_FORMAT");
    env::remove_var("SERVICE_NAME");
}
