// ABOUTME: Shared test utilities for the plan generation integration tests
// ABOUTME: Provides a counting stub generation service and conformant plan fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aquaclub Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `aquaclub`

use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

use aquaclub::constants::{nutrition_fields, training_fields};
use aquaclub::errors::{AppError, ErrorCode};
use aquaclub::flows::{GenerationRequest, GenerationService};
use aquaclub::models::Weekday;
use async_trait::async_trait;
use serde_json::{json, Map, Value};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// What the stub answers with
#[derive(Debug, Clone)]
pub enum StubReply {
    /// `Ok(value)`
    Output(Option<Value>),
    /// `Err(AppError::new(code, message))`
    Failure(ErrorCode, String),
}

/// Generation service returning a canned reply and counting calls
#[derive(Debug)]
pub struct StubGenerationService {
    reply: StubReply,
    calls: Arc<AtomicUsize>,
    last_request: Mutex<Option<GenerationRequest>>,
}

impl StubGenerationService {
    pub fn new(reply: StubReply) -> Self {
        init_test_logging();
        Self {
            reply,
            calls: Arc::new(AtomicUsize::new(0)),
            last_request: Mutex::new(None),
        }
    }

    pub fn returning(value: Value) -> Self {
        Self::new(StubReply::Output(Some(value)))
    }

    pub fn empty() -> Self {
        Self::new(StubReply::Output(None))
    }

    pub fn failing(code: ErrorCode, message: &str) -> Self {
        Self::new(StubReply::Failure(code, message.to_owned()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationService for StubGenerationService {
    async fn generate(&self, request: &GenerationRequest) -> Result<Option<Value>, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        match &self.reply {
            StubReply::Output(value) => Ok(value.clone()),
            StubReply::Failure(code, message) => Err(AppError::new(*code, message.clone())),
        }
    }
}

/// One day of meals with every slot filled
pub fn conformant_day(day: Weekday) -> Value {
    let meals: Map<String, Value> = nutrition_fields::MEAL_SLOTS
        .iter()
        .map(|slot| {
            (
                (*slot).to_owned(),
                Value::from(format!("{} - {slot}: arroz con lentejas", day.spanish_name())),
            )
        })
        .collect();
    Value::Object(meals)
}

/// A full seven-day nutrition plan
pub fn conformant_week() -> Value {
    let days: Map<String, Value> = Weekday::ALL
        .into_iter()
        .map(|day| (day.key().to_owned(), conformant_day(day)))
        .collect();
    Value::Object(days)
}

/// A mesocycle with `weeks` microcycles of two sessions each
pub fn conformant_mesocycle(weeks: usize) -> Value {
    let microcycles: Vec<Value> = (1..=weeks)
        .map(|week| {
            json!({
                (training_fields::WEEK): format!("Semana {week}"),
                (training_fields::MAIN_OBJECTIVE): "Consolidar la técnica de aleteo",
                (training_fields::SESSIONS): [
                    {
                        (training_fields::DAY): "Lunes",
                        (training_fields::FOCUS): "Resistencia aeróbica",
                        (training_fields::DURATION): 60,
                        (training_fields::ACTIVITIES): "Calentamiento, 8x100 m aleteo, vuelta a la calma",
                        (training_fields::PAUSES): "20 s entre series"
                    },
                    {
                        (training_fields::DAY): "Jueves",
                        (training_fields::FOCUS): "Juego reducido",
                        (training_fields::DURATION): 75,
                        (training_fields::ACTIVITIES): "Posesión 3x3 en medio campo",
                        (training_fields::FIELD_DIMENSIONS): "12 x 8 m"
                    }
                ]
            })
        })
        .collect();

    json!({
        (training_fields::MESOCYCLE_OBJECTIVE): "Mejorar la transición defensa-ataque",
        (training_fields::MICROCYCLES): microcycles,
    })
}
