// ABOUTME: Declarative shape descriptors for plan inputs and generated plans
// ABOUTME: One descriptor drives both local validation and the JSON Schema sent to providers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aquaclub Contributors

//! # Plan Schemas
//!
//! A [`Schema`] is plain data: a tree of typed nodes with optional bounds.
//! Two interpreters walk it:
//!
//! - [`Schema::validate`] checks a `serde_json::Value` and reports every
//!   failure with its path (`microcycles[0].sessions[2].duration`)
//! - [`Schema::to_json_schema`] renders the same tree as JSON Schema for
//!   structured-output requests
//!
//! Objects are closed: keys not declared by the descriptor are rejected.

mod json_schema;
mod plans;
mod validation;

pub use plans::{
    nutrition_input_schema, nutrition_output_schema, training_input_schema,
    training_output_schema,
};

/// Type of a schema node
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaKind {
    /// UTF-8 string, optionally with a minimum length in characters
    String {
        /// Minimum length, counted on the trimmed value
        min_length: Option<usize>,
    },
    /// Whole number with optional inclusive bounds
    Integer {
        /// Inclusive lower bound
        minimum: Option<i64>,
        /// Inclusive upper bound
        maximum: Option<i64>,
    },
    /// Any finite number with optional inclusive bounds
    Number {
        /// Inclusive lower bound
        minimum: Option<f64>,
        /// Inclusive upper bound
        maximum: Option<f64>,
    },
    /// String restricted to a closed set of tags
    Enum {
        /// Accepted tags
        values: &'static [&'static str],
    },
    /// Closed record of named fields
    Object {
        /// Declared fields, in rendering order
        fields: Vec<Field>,
    },
    /// Ordered sequence of items sharing one schema
    Array {
        /// Schema of every item
        items: Box<Schema>,
        /// Minimum item count
        min_items: Option<usize>,
        /// Maximum item count
        max_items: Option<usize>,
    },
}

/// A schema node with an optional description
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    /// Node type and constraints
    pub kind: SchemaKind,
    /// Human-readable description, rendered into JSON Schema
    pub description: Option<&'static str>,
}

/// Named member of an object schema
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// JSON key
    pub name: &'static str,
    /// Schema of the value
    pub schema: Schema,
    /// Whether the key must be present
    pub required: bool,
}

impl Field {
    /// A field that must be present
    #[must_use]
    pub const fn required(name: &'static str, schema: Schema) -> Self {
        Self {
            name,
            schema,
            required: true,
        }
    }

    /// A field that may be absent
    #[must_use]
    pub const fn optional(name: &'static str, schema: Schema) -> Self {
        Self {
            name,
            schema,
            required: false,
        }
    }
}

impl Schema {
    const fn of(kind: SchemaKind) -> Self {
        Self {
            kind,
            description: None,
        }
    }

    /// Unbounded string
    #[must_use]
    pub const fn string() -> Self {
        Self::of(SchemaKind::String { min_length: None })
    }

    /// String with at least one non-whitespace character
    #[must_use]
    pub const fn non_empty_string() -> Self {
        Self::of(SchemaKind::String {
            min_length: Some(1),
        })
    }

    /// Unbounded integer
    #[must_use]
    pub const fn integer() -> Self {
        Self::of(SchemaKind::Integer {
            minimum: None,
            maximum: None,
        })
    }

    /// Unbounded number
    #[must_use]
    pub const fn number() -> Self {
        Self::of(SchemaKind::Number {
            minimum: None,
            maximum: None,
        })
    }

    /// Closed enumeration of string tags
    #[must_use]
    pub const fn enumeration(values: &'static [&'static str]) -> Self {
        Self::of(SchemaKind::Enum { values })
    }

    /// Closed record
    #[must_use]
    pub const fn object(fields: Vec<Field>) -> Self {
        Self::of(SchemaKind::Object { fields })
    }

    /// Sequence of `items`
    #[must_use]
    pub fn array(items: Self) -> Self {
        Self::of(SchemaKind::Array {
            items: Box::new(items),
            min_items: None,
            max_items: None,
        })
    }

    /// Attach a description
    #[must_use]
    pub const fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    /// Require at least `min` characters (string nodes only)
    #[must_use]
    pub fn min_length(mut self, min: usize) -> Self {
        if let SchemaKind::String { min_length } = &mut self.kind {
            *min_length = Some(min);
        }
        self
    }

    /// Inclusive lower bound (integer and number nodes)
    #[must_use]
    pub fn minimum(mut self, min: i64) -> Self {
        match &mut self.kind {
            SchemaKind::Integer { minimum, .. } => *minimum = Some(min),
            SchemaKind::Number { minimum, .. } => *minimum = Some(min as f64),
            _ => {}
        }
        self
    }

    /// Inclusive upper bound (integer and number nodes)
    #[must_use]
    pub fn maximum(mut self, max: i64) -> Self {
        match &mut self.kind {
            SchemaKind::Integer { maximum, .. } => *maximum = Some(max),
            SchemaKind::Number { maximum, .. } => *maximum = Some(max as f64),
            _ => {}
        }
        self
    }

    /// Inclusive bounds for number nodes
    #[must_use]
    pub fn range(mut self, min: f64, max: f64) -> Self {
        if let SchemaKind::Number { minimum, maximum } = &mut self.kind {
            *minimum = Some(min);
            *maximum = Some(max);
        }
        self
    }

    /// Minimum item count (array nodes only)
    #[must_use]
    pub fn min_items(mut self, min: usize) -> Self {
        if let SchemaKind::Array { min_items, .. } = &mut self.kind {
            *min_items = Some(min);
        }
        self
    }

    /// Maximum item count (array nodes only)
    #[must_use]
    pub fn max_items(mut self, max: usize) -> Self {
        if let SchemaKind::Array { max_items, .. } = &mut self.kind {
            *max_items = Some(max);
        }
        self
    }

    /// Exact item count (array nodes only)
    #[must_use]
    pub fn exact_items(self, count: usize) -> Self {
        self.min_items(count).max_items(count)
    }

    /// Field declared under `name`, for object nodes
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        match &self.kind {
            SchemaKind::Object { fields } => fields.iter().find(|f| f.name == name),
            _ => None,
        }
    }
}
