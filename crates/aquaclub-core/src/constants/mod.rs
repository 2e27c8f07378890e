// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Weekday keys, meal slots, plan bounds and prompt language for the plan generators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aquaclub Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large list. Wire-level names (JSON keys) live here so the models, the
//! schema descriptors and the prompts agree on a single spelling.

/// JSON keys of the nutrition plan records
pub mod nutrition_fields {
    /// Diet type input field
    pub const DIET_TYPE: &str = "dietType";
    /// Breakfast slot
    pub const BREAKFAST: &str = "breakfast";
    /// Mid-morning snack slot
    pub const MORNING_SNACK: &str = "morningSnack";
    /// Lunch slot
    pub const LUNCH: &str = "lunch";
    /// Afternoon snack slot
    pub const AFTERNOON_SNACK: &str = "afternoonSnack";
    /// Dinner slot
    pub const DINNER: &str = "dinner";

    /// Meal slots of a day, in serving order
    pub const MEAL_SLOTS: [&str; 5] = [BREAKFAST, MORNING_SNACK, LUNCH, AFTERNOON_SNACK, DINNER];
}

/// JSON keys of the training plan records
pub mod training_fields {
    /// Sport category
    pub const CATEGORY: &str = "category";
    /// Training methodology tag
    pub const METHODOLOGY: &str = "methodology";
    /// Narrative description of the methodology
    pub const METHODOLOGY_DESCRIPTION: &str = "methodologyDescription";
    /// Objective of the whole mesocycle
    pub const MESOCYCLE_OBJECTIVE: &str = "mesocycleObjective";
    /// Number of weeks
    pub const WEEKS: &str = "weeks";
    /// Weekly microcycles
    pub const MICROCYCLES: &str = "microcycles";
    /// Week label of a microcycle
    pub const WEEK: &str = "week";
    /// Main objective of a microcycle
    pub const MAIN_OBJECTIVE: &str = "mainObjective";
    /// Sessions of a microcycle
    pub const SESSIONS: &str = "sessions";
    /// Day of a session
    pub const DAY: &str = "day";
    /// Focus of a session
    pub const FOCUS: &str = "focus";
    /// Duration of a session, minutes
    pub const DURATION: &str = "duration";
    /// Activity description of a session
    pub const ACTIVITIES: &str = "activities";
    /// Optional field-dimension specification
    pub const FIELD_DIMENSIONS: &str = "fieldDimensions";
    /// Optional recovery/pause guidance
    pub const PAUSES: &str = "pauses";
}

/// Bounds enforced on plan inputs and outputs
pub mod plan_limits {
    /// Minimum mesocycle length in weeks
    pub const MIN_WEEKS: u8 = 1;
    /// Maximum mesocycle length in weeks
    pub const MAX_WEEKS: u8 = 8;
    /// Minimum characters in a mesocycle objective
    pub const MIN_OBJECTIVE_LENGTH: usize = 10;
    /// Minimum session duration in minutes
    pub const MIN_SESSION_MINUTES: u32 = 1;
    /// Maximum session duration in minutes (one full day)
    pub const MAX_SESSION_MINUTES: u32 = 1440;
}

/// Language settings for generated content
pub mod language {
    /// Language every generated plan is written in
    pub const TARGET_LANGUAGE: &str = "español";
}
