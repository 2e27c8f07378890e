// ABOUTME: Weekly nutrition plan models for the AI meal-plan generator
// ABOUTME: DietType, Weekday, DailyMealPlan and the seven-day NutritionPlanOutput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aquaclub Contributors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::nutrition_fields;
use crate::errors::FieldError;

/// Diet goal selected by the athlete
///
/// Closed set: anything else is rejected rather than mapped to a default.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    /// Caloric deficit
    WeightLoss,
    /// Caloric surplus
    WeightGain,
    /// Plant-based, no animal products
    Vegan,
}

impl DietType {
    /// Every accepted diet type, in display order
    pub const ALL: [Self; 3] = [Self::WeightLoss, Self::WeightGain, Self::Vegan];

    /// Wire tag of the variant
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WeightLoss => "weight_loss",
            Self::WeightGain => "weight_gain",
            Self::Vegan => "vegan",
        }
    }

    /// Every accepted wire tag
    #[must_use]
    pub const fn tags() -> &'static [&'static str] {
        &["weight_loss", "weight_gain", "vegan"]
    }

    /// Narrative description interpolated into the nutrition prompt
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::WeightLoss => {
                "una dieta para bajar de peso, con déficit calórico moderado, \
                 alta en proteínas y fibra, y baja en azúcares y harinas refinadas"
            }
            Self::WeightGain => {
                "una dieta para subir de peso y ganar masa muscular, con superávit \
                 calórico, abundante proteína y carbohidratos complejos en cada comida"
            }
            Self::Vegan => {
                "una dieta vegana equilibrada, sin ningún producto de origen animal, \
                 que combine legumbres, cereales integrales, frutos secos y semillas \
                 para cubrir las proteínas"
            }
        }
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DietType {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|diet| diet.as_str() == s)
            .ok_or_else(|| {
                FieldError::new(
                    nutrition_fields::DIET_TYPE,
                    format!("must be one of [{}], got '{s}'", Self::tags().join(", ")),
                )
            })
    }
}

/// Input of the nutrition plan generator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NutritionPlanInput {
    /// Diet goal
    pub diet_type: DietType,
}

impl NutritionPlanInput {
    /// Create an input for the given diet type
    #[must_use]
    pub const fn new(diet_type: DietType) -> Self {
        Self { diet_type }
    }
}

/// Day of the week, keyed by its English lowercase name on the wire
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
    /// Sunday
    Sunday,
}

impl Weekday {
    /// The seven days, Monday first
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// JSON key of the day
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }

    /// Spanish display name used in prompts and rendered plans
    #[must_use]
    pub const fn spanish_name(self) -> &'static str {
        match self {
            Self::Monday => "Lunes",
            Self::Tuesday => "Martes",
            Self::Wednesday => "Miércoles",
            Self::Thursday => "Jueves",
            Self::Friday => "Viernes",
            Self::Saturday => "Sábado",
            Self::Sunday => "Domingo",
        }
    }
}

/// The five meals of one day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DailyMealPlan {
    /// Breakfast
    pub breakfast: String,
    /// Mid-morning snack
    pub morning_snack: String,
    /// Lunch
    pub lunch: String,
    /// Afternoon snack
    pub afternoon_snack: String,
    /// Dinner
    pub dinner: String,
}

impl DailyMealPlan {
    /// Meals paired with their JSON key, in serving order
    #[must_use]
    pub fn slots(&self) -> [(&'static str, &str); 5] {
        [
            (nutrition_fields::BREAKFAST, &self.breakfast),
            (nutrition_fields::MORNING_SNACK, &self.morning_snack),
            (nutrition_fields::LUNCH, &self.lunch),
            (nutrition_fields::AFTERNOON_SNACK, &self.afternoon_snack),
            (nutrition_fields::DINNER, &self.dinner),
        ]
    }
}

/// Seven-day meal plan produced by the nutrition generator
///
/// Every weekday is a required field and unknown keys are rejected, so a
/// deserialized value always holds exactly seven days.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct NutritionPlanOutput {
    /// Monday meals
    pub monday: DailyMealPlan,
    /// Tuesday meals
    pub tuesday: DailyMealPlan,
    /// Wednesday meals
    pub wednesday: DailyMealPlan,
    /// Thursday meals
    pub thursday: DailyMealPlan,
    /// Friday meals
    pub friday: DailyMealPlan,
    /// Saturday meals
    pub saturday: DailyMealPlan,
    /// Sunday meals
    pub sunday: DailyMealPlan,
}

impl NutritionPlanOutput {
    /// Meals for a given day
    #[must_use]
    pub const fn day(&self, day: Weekday) -> &DailyMealPlan {
        match day {
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
            Weekday::Saturday => &self.saturday,
            Weekday::Sunday => &self.sunday,
        }
    }

    /// Iterate the week, Monday first
    pub fn days(&self) -> impl Iterator<Item = (Weekday, &DailyMealPlan)> {
        Weekday::ALL.into_iter().map(move |day| (day, self.day(day)))
    }
}
