// ABOUTME: Validates JSON values against plan schema descriptors
// ABOUTME: Collects every failure with its dotted/bracketed path instead of stopping at the first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aquaclub Contributors

use serde_json::{Map, Value};

use super::{Field, Schema, SchemaKind};
use crate::errors::FieldError;

impl Schema {
    /// Check `value` against this descriptor
    ///
    /// # Errors
    ///
    /// Returns every field-level failure found. Paths are relative to the
    /// validated value; the root itself has an empty path.
    pub fn validate(&self, value: &Value) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        self.check(value, "", &mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn check(&self, value: &Value, path: &str, errors: &mut Vec<FieldError>) {
        match &self.kind {
            SchemaKind::String { min_length } => check_string(value, *min_length, path, errors),
            SchemaKind::Integer { minimum, maximum } => {
                check_integer(value, *minimum, *maximum, path, errors);
            }
            SchemaKind::Number { minimum, maximum } => {
                check_number(value, *minimum, *maximum, path, errors);
            }
            SchemaKind::Enum { values } => check_enum(value, values, path, errors),
            SchemaKind::Object { fields } => check_object(value, fields, path, errors),
            SchemaKind::Array {
                items,
                min_items,
                max_items,
            } => check_array(value, items, (*min_items, *max_items), path, errors),
        }
    }
}

fn child_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_owned()
    } else {
        format!("{parent}.{key}")
    }
}

fn fail(errors: &mut Vec<FieldError>, path: &str, message: impl Into<String>) {
    errors.push(FieldError::new(path, message));
}

fn check_string(value: &Value, min_length: Option<usize>, path: &str, errors: &mut Vec<FieldError>) {
    let Some(text) = value.as_str() else {
        fail(errors, path, "expected string");
        return;
    };
    if let Some(min) = min_length {
        if text.trim().chars().count() < min {
            fail(errors, path, format!("must be at least {min} characters"));
        }
    }
}

fn check_integer(
    value: &Value,
    minimum: Option<i64>,
    maximum: Option<i64>,
    path: &str,
    errors: &mut Vec<FieldError>,
) {
    let number = value
        .as_i64()
        .map(i128::from)
        .or_else(|| value.as_u64().map(i128::from));
    let Some(number) = number else {
        fail(errors, path, "expected integer");
        return;
    };
    if let Some(min) = minimum {
        if number < i128::from(min) {
            fail(errors, path, format!("must be >= {min}"));
        }
    }
    if let Some(max) = maximum {
        if number > i128::from(max) {
            fail(errors, path, format!("must be <= {max}"));
        }
    }
}

fn check_number(
    value: &Value,
    minimum: Option<f64>,
    maximum: Option<f64>,
    path: &str,
    errors: &mut Vec<FieldError>,
) {
    let Some(number) = value.as_f64().filter(|n| n.is_finite()) else {
        fail(errors, path, "expected number");
        return;
    };
    if let Some(min) = minimum {
        if number < min {
            fail(errors, path, format!("must be >= {min}"));
        }
    }
    if let Some(max) = maximum {
        if number > max {
            fail(errors, path, format!("must be <= {max}"));
        }
    }
}

fn check_enum(value: &Value, values: &[&str], path: &str, errors: &mut Vec<FieldError>) {
    match value.as_str() {
        Some(tag) if values.contains(&tag) => {}
        Some(tag) => fail(
            errors,
            path,
            format!("must be one of [{}], got '{tag}'", values.join(", ")),
        ),
        None => fail(errors, path, "expected string"),
    }
}

fn check_object(value: &Value, fields: &[Field], path: &str, errors: &mut Vec<FieldError>) {
    let Some(map) = value.as_object() else {
        fail(errors, path, "expected object");
        return;
    };

    for field in fields {
        let field_path = child_path(path, field.name);
        match map.get(field.name) {
            Some(Value::Null) | None if !field.required => {}
            Some(member) => field.schema.check(member, &field_path, errors),
            None => fail(errors, &field_path, "is required"),
        }
    }

    reject_unknown_keys(map, fields, path, errors);
}

fn reject_unknown_keys(
    map: &Map<String, Value>,
    fields: &[Field],
    path: &str,
    errors: &mut Vec<FieldError>,
) {
    for key in map.keys() {
        if !fields.iter().any(|field| field.name == key) {
            fail(errors, &child_path(path, key), "unexpected field");
        }
    }
}

fn check_array(
    value: &Value,
    items: &Schema,
    (min_items, max_items): (Option<usize>, Option<usize>),
    path: &str,
    errors: &mut Vec<FieldError>,
) {
    let Some(elements) = value.as_array() else {
        fail(errors, path, "expected array");
        return;
    };

    if let Some(min) = min_items {
        if elements.len() < min {
            fail(errors, path, format!("must contain at least {min} items"));
        }
    }
    if let Some(max) = max_items {
        if elements.len() > max {
            fail(errors, path, format!("must contain at most {max} items"));
        }
    }

    for (index, element) in elements.iter().enumerate() {
        items.check(element, &format!("{path}[{index}]"), errors);
    }
}
