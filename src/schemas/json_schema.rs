// ABOUTME: Renders plan schema descriptors as JSON Schema documents
// ABOUTME: Output is passed to providers as the structured-output constraint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aquaclub Contributors

use serde_json::{json, Map, Value};

use super::{Field, Schema, SchemaKind};

impl Schema {
    /// Render this descriptor as a JSON Schema document
    ///
    /// Objects list every required key and set `additionalProperties: false`.
    #[must_use]
    pub fn to_json_schema(&self) -> Value {
        let mut node = match &self.kind {
            SchemaKind::String { min_length } => {
                let mut node = type_node("string");
                insert_opt(&mut node, "minLength", *min_length);
                node
            }
            SchemaKind::Integer { minimum, maximum } => {
                let mut node = type_node("integer");
                insert_opt(&mut node, "minimum", *minimum);
                insert_opt(&mut node, "maximum", *maximum);
                node
            }
            SchemaKind::Number { minimum, maximum } => {
                let mut node = type_node("number");
                insert_opt(&mut node, "minimum", *minimum);
                insert_opt(&mut node, "maximum", *maximum);
                node
            }
            SchemaKind::Enum { values } => {
                let mut node = type_node("string");
                node.insert("enum".to_owned(), json!(values));
                node
            }
            SchemaKind::Object { fields } => object_node(fields),
            SchemaKind::Array {
                items,
                min_items,
                max_items,
            } => {
                let mut node = type_node("array");
                node.insert("items".to_owned(), items.to_json_schema());
                insert_opt(&mut node, "minItems", *min_items);
                insert_opt(&mut node, "maxItems", *max_items);
                node
            }
        };

        if let Some(description) = self.description {
            node.insert("description".to_owned(), Value::from(description));
        }
        Value::Object(node)
    }
}

fn type_node(kind: &str) -> Map<String, Value> {
    let mut node = Map::new();
    node.insert("type".to_owned(), Value::from(kind));
    node
}

fn insert_opt<T: Into<Value>>(node: &mut Map<String, Value>, key: &str, value: Option<T>) {
    if let Some(value) = value {
        node.insert(key.to_owned(), value.into());
    }
}

fn object_node(fields: &[Field]) -> Map<String, Value> {
    let properties: Map<String, Value> = fields
        .iter()
        .map(|field| (field.name.to_owned(), field.schema.to_json_schema()))
        .collect();
    let required: Vec<&str> = fields
        .iter()
        .filter(|field| field.required)
        .map(|field| field.name)
        .collect();

    let mut node = type_node("object");
    node.insert("properties".to_owned(), Value::Object(properties));
    node.insert("required".to_owned(), json!(required));
    node.insert("additionalProperties".to_owned(), Value::Bool(false));
    node
}
