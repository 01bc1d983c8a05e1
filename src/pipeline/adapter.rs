//! Wire-format adapters — normalize both observed request shapes.
//!
//! Two formats arrive in the wild:
//! - flat: `{conversation_id, message, history: [{content}]}`
//! - nested: `{sessionId, message: {text}, conversationHistory: [{text}]}`
//!
//! Everything downstream operates on [`TurnRequest`] only. Malformed
//! fields are coerced, never rejected: a non-string message becomes `""`,
//! a non-array history becomes empty, a missing session key becomes
//! `"default"`. A honeypot that 400s on sloppy input stops collecting.

use serde_json::Value;

use crate::pipeline::types::{TurnRequest, WireFormat};

/// Session key used when the caller supplies none.
pub const DEFAULT_SESSION_KEY: &str = "default";

/// Normalize a raw JSON body into a [`TurnRequest`]. Total: any JSON
/// value produces a usable request.
pub fn normalize(raw: &Value) -> TurnRequest {
    match detect_format(raw) {
        WireFormat::Nested => from_nested(raw),
        WireFormat::Flat => from_flat(raw),
    }
}

/// Nested markers win; anything else is treated as the flat shape.
fn detect_format(raw: &Value) -> WireFormat {
    let message_is_object = raw.get("message").is_some_and(Value::is_object);
    if message_is_object || raw.get("sessionId").is_some() || raw.get("conversationHistory").is_some()
    {
        WireFormat::Nested
    } else {
        WireFormat::Flat
    }
}

fn from_flat(raw: &Value) -> TurnRequest {
    TurnRequest {
        format: WireFormat::Flat,
        session_key: string_or_default(raw.get("conversation_id")),
        message: string_or_empty(raw.get("message")),
        history: history_texts(raw.get("history"), "content"),
    }
}

fn from_nested(raw: &Value) -> TurnRequest {
    TurnRequest {
        format: WireFormat::Nested,
        session_key: string_or_default(raw.get("sessionId")),
        message: string_or_empty(raw.get("message").and_then(|m| m.get("text"))),
        history: history_texts(raw.get("conversationHistory"), "text"),
    }
}

fn string_or_default(value: Option<&Value>) -> String {
    match value.and_then(Value::as_str) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => DEFAULT_SESSION_KEY.to_string(),
    }
}

fn string_or_empty(value: Option<&Value>) -> String {
    value.and_then(Value::as_str).unwrap_or_default().to_string()
}

fn history_texts(value: Option<&Value>, field: &str) -> Vec<String> {
    let Some(entries) = value.and_then(Value::as_array) else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(|entry| entry.get(field).and_then(Value::as_str))
        .filter(|text| !text.is_empty())
        .map(String::from)
        .collect()
}
