use lppkit_frame::{DataItem, Frame, FrameError};
use lppkit_types::{registry, Field, TypeError};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::config::{ProjectionConfig, TypeLabel};
use crate::error::{JsonError, Result};

#[derive(Deserialize)]
struct Entry {
    channel: u8,
    #[serde(rename = "type")]
    type_ref: TypeRef,
    value: Reading,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TypeRef {
    Id(u16),
    Name(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Reading {
    Scalar(f64),
    Vector(Vec<f64>),
}

/// Project a frame as an ordered array of `{channel, type, value}` objects.
///
/// Values are rendered as the payload carries them, after scaling and
/// truncation. Single-field readings render `value` as a number,
/// multi-field readings as an array. Fields with a scale of 1 render as
/// integers. Fails with `ValueOutOfRange` if an item cannot be encoded.
pub fn to_value(frame: &Frame, label: TypeLabel) -> Result<Value> {
    let entries = frame
        .iter()
        .map(|item| entry_value(item, label))
        .collect::<Result<Vec<_>>>()?;
    Ok(Value::Array(entries))
}

/// Render a frame as a JSON string.
pub fn to_json(frame: &Frame, config: &ProjectionConfig) -> Result<String> {
    let value = to_value(frame, config.type_label)?;
    let text = if config.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(text)
}

/// Build a frame from its JSON projection.
///
/// `type` may be a numeric identifier or a type name (case-insensitive).
/// Items are appended in array order under the given byte budget.
pub fn from_value(value: Value, max_size: usize) -> Result<Frame> {
    let entries: Vec<Value> = serde_json::from_value(value)?;
    let mut frame = Frame::with_max_size(max_size);

    for (index, raw) in entries.into_iter().enumerate() {
        let entry: Entry = serde_json::from_value(raw).map_err(|err| JsonError::InvalidEntry {
            index,
            message: err.to_string(),
        })?;

        let type_id = match entry.type_ref {
            TypeRef::Id(id) => id,
            TypeRef::Name(name) => registry::lookup_by_name(&name)
                .map(|desc| u16::from(desc.id))
                .ok_or_else(|| JsonError::InvalidEntry {
                    index,
                    message: format!("unknown type name {name:?}"),
                })?,
        };
        let values = match entry.value {
            Reading::Scalar(value) => vec![value],
            Reading::Vector(values) => values,
        };

        frame.add(type_id, entry.channel, &values)?;
    }

    debug!(items = frame.len(), size = frame.size(), "built frame from JSON");
    Ok(frame)
}

/// Parse a JSON string into a frame. See [`from_value`].
pub fn from_json(input: &str, max_size: usize) -> Result<Frame> {
    let value: Value = serde_json::from_str(input)?;
    from_value(value, max_size)
}

fn entry_value(item: &DataItem, label: TypeLabel) -> Result<Value> {
    let type_value = match label {
        TypeLabel::Id => Value::from(item.type_id()),
        TypeLabel::Name => Value::from(item.name()),
    };

    let descriptor = item.descriptor();
    let mut numbers = Vec::with_capacity(descriptor.dimension());
    let pairs = descriptor.fields.iter().zip(item.values().iter());
    for (index, (field, &value)) in pairs.enumerate() {
        let wire = field
            .quantize(value)
            .ok_or(FrameError::Type(TypeError::ValueOutOfRange {
                type_id: descriptor.id,
                field: index,
                value,
            }))?;
        numbers.push(number(field, wire));
    }
    let value = if numbers.len() == 1 {
        numbers.remove(0)
    } else {
        Value::Array(numbers)
    };

    Ok(json!({
        "channel": item.channel(),
        "type": type_value,
        "value": value,
    }))
}

fn number(field: &Field, value: f64) -> Value {
    if field.scale == 1 {
        Value::from(value as i64)
    } else {
        Value::from(value)
    }
}
