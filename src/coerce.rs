// Field coercion helpers shared by the supplier adapters
//
// Required fields fail the record when absent. Everything else defaults:
// `0.0` for numbers, `""` for strings, empty lists for sequences.

use serde_json::{Map, Value};

use crate::error::ParseError;
use crate::model::Image;

pub type Record = Map<String, Value>;

/// Borrows a raw array element as a record.
pub fn as_record(raw: &Value) -> Result<&Record, ParseError> {
    raw.as_object().ok_or(ParseError::NotARecord)
}

// Scalar values rendered as text; `None` for null, arrays and objects.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Reads a field that must be present and textual.
pub fn required_string(record: &Record, key: &'static str) -> Result<String, ParseError> {
    match record.get(key) {
        None | Some(Value::Null) => Err(ParseError::MissingField(key)),
        Some(value) => scalar_to_string(value).ok_or_else(|| ParseError::InvalidField {
            field: key,
            reason: format!("expected a scalar, got {}", type_name(value)),
        }),
    }
}

/// Reads the hotel id. Registry keys are never blank, so an empty or
/// whitespace-only id fails the record.
pub fn required_id(record: &Record, key: &'static str) -> Result<String, ParseError> {
    let id = required_string(record, key)?;
    if id.trim().is_empty() {
        return Err(ParseError::InvalidField {
            field: key,
            reason: "empty".into(),
        });
    }
    Ok(id)
}

pub fn string_or_default(record: &Record, key: &str) -> String {
    record
        .get(key)
        .and_then(scalar_to_string)
        .unwrap_or_default()
}

/// Tolerant float read: numbers, numeric strings and booleans convert,
/// anything else (including NaN/inf) is `0.0`.
pub fn float_or_default(record: &Record, key: &str) -> f64 {
    let parsed = match record.get(key) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };
    parsed.filter(|f| f.is_finite()).unwrap_or(0.0)
}

/// Nested object at `key`, or an empty record when missing or not an object.
pub fn record_or_empty<'a>(record: &'a Record, key: &str) -> &'a Record {
    static EMPTY: std::sync::OnceLock<Record> = std::sync::OnceLock::new();
    match record.get(key) {
        Some(Value::Object(map)) => map,
        _ => EMPTY.get_or_init(Record::new),
    }
}

fn list_items<'a>(record: &'a Record, key: &str) -> &'a [Value] {
    match record.get(key) {
        Some(Value::Array(items)) => items,
        _ => &[],
    }
}

/// List of strings kept verbatim. Non-string scalars are stringified,
/// nulls and nested structures are skipped.
pub fn string_list_or_default(record: &Record, key: &str) -> Vec<String> {
    list_items(record, key)
        .iter()
        .filter_map(scalar_to_string)
        .collect()
}

/// Like [`string_list_or_default`], but drops falsy items and trims the rest.
pub fn trimmed_list_or_default(record: &Record, key: &str) -> Vec<String> {
    list_items(record, key)
        .iter()
        .filter(|item| is_truthy(item))
        .filter_map(scalar_to_string)
        .map(|s| s.trim().to_string())
        .collect()
}

/// Images under `key` that carry both `link_key` and `caption_key`.
/// Entries missing either, or that are not objects, are dropped.
pub fn image_list(record: &Record, key: &str, link_key: &str, caption_key: &str) -> Vec<Image> {
    list_items(record, key)
        .iter()
        .filter_map(Value::as_object)
        .filter_map(|img| {
            let link = img.get(link_key)?;
            let caption = img.get(caption_key)?;
            Some(Image::new(
                scalar_to_string(link).unwrap_or_default(),
                scalar_to_string(caption).unwrap_or_default(),
            ))
        })
        .collect()
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
