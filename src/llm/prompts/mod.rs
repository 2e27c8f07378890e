// ABOUTME: Instruction templates for the plan generators loaded at compile time
// ABOUTME: Renders {{placeholder}} slots for the nutrition and training prompts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aquaclub Contributors

//! # Plan Prompts
//!
//! Prompts are loaded at compile time from markdown files for easy
//! maintenance. Slots are written `{{name}}` and filled by [`render`].

/// Weekly nutrition plan instruction
///
/// Slots: `diet_type`, `diet_description`, `target_language`.
pub const NUTRITION_PLAN_TEMPLATE: &str = include_str!("nutrition_plan.md");

/// Training mesocycle instruction
///
/// Slots: `category`, `methodology`, `methodology_name`,
/// `methodology_description`, `mesocycle_objective`, `weeks`,
/// `target_language`.
pub const TRAINING_PLAN_TEMPLATE: &str = include_str!("training_plan.md");

/// Fill `{{name}}` slots in a template
///
/// The template is scanned once, left to right; inserted values are never
/// rescanned, so a value containing `{{slot}}` text is emitted verbatim.
/// Slots without a value are left untouched.
#[must_use]
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        rendered.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            rest = &rest[start..];
            break;
        };
        let name = &after[..end];
        match values.iter().find(|(slot, _)| *slot == name) {
            Some((_, value)) => rendered.push_str(value),
            None => rendered.push_str(&rest[start..start + end + 4]),
        }
        rest = &after[end + 2..];
    }
    rendered.push_str(rest);
    rendered
}

/// Slots that remain unfilled in a rendered prompt
#[must_use]
pub fn unfilled_slots(rendered: &str) -> Vec<&str> {
    let mut slots = Vec::new();
    let mut rest = rendered;
    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            break;
        };
        slots.push(&after[..end]);
        rest = &after[end + 2..];
    }
    slots
}
