// ABOUTME: Athlete attributes shared by the body-composition calculators
// ABOUTME: Gender parsing accepts the Spanish labels stored on athlete records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aquaclub Contributors

use serde::{Deserialize, Serialize};

/// Gender recorded on an athlete profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    #[serde(alias = "Masculino", alias = "masculino")]
    Male,
    /// Female
    #[serde(alias = "Femenino", alias = "femenino")]
    Female,
}

impl Gender {
    /// Parse a stored gender label
    ///
    /// Accepts `Masculino`/`male`/`m` and `Femenino`/`female`/`f`, case
    /// insensitive and trimmed. Anything else yields `None`.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "masculino" | "male" | "m" | "hombre" => Some(Self::Male),
            "femenino" | "female" | "f" | "mujer" => Some(Self::Female),
            _ => None,
        }
    }

    /// Spanish display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Masculino",
            Self::Female => "Femenino",
        }
    }
}
