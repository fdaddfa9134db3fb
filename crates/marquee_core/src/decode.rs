//! Turning raw model text into typed responses.
//!
//! The lenient policy never fails: anything it cannot read becomes the
//! field's zero value. The strict policy reports the first problem instead.

use crate::{FieldKind, OutputSchema, StructuredResponse};
use marquee_error::JsonError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// How to treat model output that does not match the schema.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DecodePolicy {
    /// Back-fill unreadable fields with empty values.
    #[default]
    Lenient,
    /// Reject output that is not a schema-conformant JSON object.
    Strict,
}

/// Decode `raw` into `R` under the given policy.
pub fn decode<R: StructuredResponse>(raw: &str, policy: DecodePolicy) -> Result<R, JsonError> {
    match policy {
        DecodePolicy::Lenient => Ok(decode_lenient(raw)),
        DecodePolicy::Strict => decode_strict(raw),
    }
}

/// Decode `raw`, substituting empty values for anything missing or malformed.
///
/// # Examples
///
/// ```
/// use marquee_core::{EventResponse, decode_lenient};
///
/// let event: EventResponse = decode_lenient("the model rambled instead");
/// assert!(event.banner_text().is_empty());
/// assert!(event.hashtags().is_empty());
/// ```
pub fn decode_lenient<R: StructuredResponse>(raw: &str) -> R {
    let schema = R::DOMAIN.schema();
    let object = match serde_json::from_str::<Value>(strip_code_fence(raw)) {
        Ok(Value::Object(object)) => object,
        Ok(other) => {
            warn!(schema = schema.name, found = json_type(&other), "Model output is not an object");
            Map::new()
        }
        Err(e) => {
            warn!(schema = schema.name, error = %e, "Model output is not JSON");
            Map::new()
        }
    };

    let normalized = normalize(schema, &object);
    serde_json::from_value(Value::Object(normalized)).unwrap_or_else(|e| {
        warn!(schema = schema.name, error = %e, "Normalized output did not deserialize");
        R::default()
    })
}

/// Decode `raw`, failing on anything the schema does not allow.
///
/// Extra keys are ignored; missing required fields and wrong JSON types are
/// errors.
pub fn decode_strict<R: StructuredResponse>(raw: &str) -> Result<R, JsonError> {
    let schema = R::DOMAIN.schema();
    let value: Value = serde_json::from_str(strip_code_fence(raw))
        .map_err(|e| JsonError::new(format!("{} output is not JSON: {}", schema.name, e)))?;
    let Value::Object(object) = value else {
        return Err(JsonError::new(format!(
            "{} output is a JSON {}, expected an object",
            schema.name,
            json_type(&value)
        )));
    };

    for field in schema.fields {
        match (object.get(field.name), field.kind) {
            (None, _) if field.required => {
                return Err(JsonError::new(format!(
                    "{} is missing required field `{}`",
                    schema.name, field.name
                )));
            }
            (None, _) | (Some(Value::String(_)), FieldKind::String) => {}
            (Some(Value::Array(items)), FieldKind::StringArray)
                if items.iter().all(Value::is_string) => {}
            (Some(other), kind) => {
                return Err(JsonError::new(format!(
                    "{} field `{}` is a JSON {}, expected {}",
                    schema.name,
                    field.name,
                    json_type(other),
                    kind
                )));
            }
        }
    }

    serde_json::from_value(Value::Object(object))
        .map_err(|e| JsonError::new(format!("{} did not deserialize: {}", schema.name, e)))
}

fn normalize(schema: &OutputSchema, object: &Map<String, Value>) -> Map<String, Value> {
    let mut normalized = Map::with_capacity(schema.fields.len());
    for field in schema.fields {
        let found = object.get(field.name);
        let value = match (field.kind, found) {
            (FieldKind::String, Some(Value::String(s))) => Value::String(s.clone()),
            (FieldKind::StringArray, Some(Value::Array(items))) => Value::Array(
                items
                    .iter()
                    .filter(|item| item.is_string())
                    .cloned()
                    .collect(),
            ),
            (kind, found) => {
                if let Some(other) = found {
                    warn!(
                        schema = schema.name,
                        field = field.name,
                        found = json_type(other),
                        expected = %kind,
                        "Dropping mistyped field"
                    );
                } else {
                    debug!(schema = schema.name, field = field.name, "Field missing from output");
                }
                zero_value(kind)
            }
        };
        normalized.insert(field.name.to_string(), value);
    }
    normalized
}

fn zero_value(kind: FieldKind) -> Value {
    match kind {
        FieldKind::String => Value::String(String::new()),
        FieldKind::StringArray => Value::Array(Vec::new()),
    }
}

/// Remove a surrounding Markdown code fence, if the model added one.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Skip the info string ("json") on the opening line.
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    body.strip_suffix("```").unwrap_or(body).trim()
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
