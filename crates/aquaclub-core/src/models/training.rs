// ABOUTME: Training mesocycle models for the AI periodization generator
// ABOUTME: Methodology, TrainingPlanInput, Session, Microcycle and TrainingPlanOutput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aquaclub Contributors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::training_fields;
use crate::errors::FieldError;

/// Training methodology used to structure the mesocycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Methodology {
    /// Classic periodization: general to specific, volume then intensity
    Traditional,
    /// Tactical periodization: every session trains the game model
    TacticalPeriodization,
    /// Structured microcycle: sessions built around the athlete's structures
    StructuredMicrocycle,
}

impl Methodology {
    /// Every accepted methodology
    pub const ALL: [Self; 3] = [
        Self::Traditional,
        Self::TacticalPeriodization,
        Self::StructuredMicrocycle,
    ];

    /// Wire tag of the variant
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Traditional => "traditional",
            Self::TacticalPeriodization => "tactical_periodization",
            Self::StructuredMicrocycle => "structured_microcycle",
        }
    }

    /// Every accepted wire tag
    #[must_use]
    pub const fn tags() -> &'static [&'static str] {
        &["traditional", "tactical_periodization", "structured_microcycle"]
    }

    /// Spanish display name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Traditional => "Periodización tradicional",
            Self::TacticalPeriodization => "Periodización táctica",
            Self::StructuredMicrocycle => "Microciclo estructurado",
        }
    }

    /// Narrative description interpolated into the training prompt
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Traditional => {
                "periodización tradicional (Matveev): progresión de lo general a lo \
                 específico, con un aumento inicial del volumen y un aumento posterior \
                 de la intensidad; las capacidades físicas se trabajan de forma aislada \
                 antes de integrarlas en la técnica y la táctica"
            }
            Self::TacticalPeriodization => {
                "periodización táctica: el modelo de juego guía todo el proceso; cada \
                 sesión trabaja principios tácticos en situaciones reales de juego, con \
                 un patrón semanal estable de recuperación, tensión, duración, \
                 velocidad y activación antes de la competición"
            }
            Self::StructuredMicrocycle => {
                "microciclo estructurado: las sesiones se diseñan a partir de las \
                 estructuras del deportista (condicional, coordinativa, cognitiva, \
                 socioafectiva), con tareas en espacios reducidos de dimensiones \
                 definidas y pausas controladas entre series"
            }
        }
    }
}

impl fmt::Display for Methodology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Methodology {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|methodology| methodology.as_str() == s)
            .ok_or_else(|| {
                FieldError::new(
                    training_fields::METHODOLOGY,
                    format!("must be one of [{}], got '{s}'", Self::tags().join(", ")),
                )
            })
    }
}

/// Input of the training plan generator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TrainingPlanInput {
    /// Team or age category (e.g. "Sub-15 hockey subacuático")
    pub category: String,
    /// Methodology tag
    pub methodology: Methodology,
    /// Narrative description of the methodology, filled in by the generator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub methodology_description: Option<String>,
    /// What the mesocycle must achieve
    pub mesocycle_objective: String,
    /// Number of weekly microcycles
    pub weeks: u8,
}

impl TrainingPlanInput {
    /// Create an input without a methodology description
    #[must_use]
    pub fn new(
        category: impl Into<String>,
        methodology: Methodology,
        mesocycle_objective: impl Into<String>,
        weeks: u8,
    ) -> Self {
        Self {
            category: category.into(),
            methodology,
            methodology_description: None,
            mesocycle_objective: mesocycle_objective.into(),
            weeks,
        }
    }
}

/// One training session of a microcycle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Session {
    /// Day name
    pub day: String,
    /// What the session trains
    pub focus: String,
    /// Duration in minutes
    pub duration: u32,
    /// Activities, drills and their order
    pub activities: String,
    /// Pitch or pool area used by the drills
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_dimensions: Option<String>,
    /// Recovery and pause guidance between sets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pauses: Option<String>,
}

/// One week of the mesocycle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Microcycle {
    /// Week label (e.g. "Semana 1")
    pub week: String,
    /// Main objective of the week
    pub main_objective: String,
    /// Sessions in training order
    pub sessions: Vec<Session>,
}

impl Microcycle {
    /// Total planned minutes for the week
    #[must_use]
    pub fn total_minutes(&self) -> u32 {
        self.sessions
            .iter()
            .fold(0_u32, |total, session| total.saturating_add(session.duration))
    }
}

/// Multi-week plan produced by the training generator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TrainingPlanOutput {
    /// Objective of the mesocycle, restated by the model
    pub mesocycle_objective: String,
    /// One microcycle per week, in order
    pub microcycles: Vec<Microcycle>,
}
