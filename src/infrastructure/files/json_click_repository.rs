//! JSON implementation of click repository.

use serde_json::{Map, Value};
use std::fs;
use std::path::PathBuf;

use crate::domain::entities::ClickEvent;
use crate::domain::repositories::ClickRepository;
use crate::domain::{Loaded, RecordSource, SkipReason, Skipped};
use crate::error::AppError;
use crate::utils::{extract_identifier, parse_timestamp};

/// Reads click events from a decodes JSON file.
///
/// The file must hold a top-level array. Each element is expected to be an
/// object with string `bitlink` and `timestamp` fields; any other fields
/// (`user_agent`, `ip_address`, ...) are ignored.
pub struct JsonClickRepository {
    path: PathBuf,
}

impl JsonClickRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ClickRepository for JsonClickRepository {
    fn load_clicks(&self) -> Result<Loaded<Vec<ClickEvent>>, AppError> {
        tracing::debug!(path = %self.path.display(), "Parsing decodes file");

        let bytes = fs::read(&self.path).map_err(|e| AppError::from_io(&self.path, e))?;
        let document: Value = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::parse(&self.path, format!("invalid JSON: {e}")))?;

        let items = match document {
            Value::Array(items) => items,
            other => {
                return Err(AppError::parse(
                    &self.path,
                    format!("expected a top-level JSON array, found {}", json_kind(&other)),
                ));
            }
        };

        let mut events = Vec::with_capacity(items.len());
        let mut skipped = Vec::new();

        for (idx, item) in items.iter().enumerate() {
            match parse_event(item) {
                Ok(event) => events.push(event),
                Err(reason) => skipped.push(Skipped::at(RecordSource::Decodes, idx + 1, reason)),
            }
        }

        tracing::info!(
            path = %self.path.display(),
            events = items.len(),
            valid = events.len(),
            skipped = skipped.len(),
            "Parsed decodes file"
        );

        Ok(Loaded::new(events, items.len(), skipped))
    }
}

/// Validates a single decodes entry.
fn parse_event(item: &Value) -> Result<ClickEvent, SkipReason> {
    let object = item.as_object().ok_or(SkipReason::NotAnObject)?;

    let bitlink = string_field(object, "bitlink")?;
    let identifier = extract_identifier(bitlink)?;

    let timestamp = string_field(object, "timestamp")?;
    let timestamp = parse_timestamp(timestamp)?;

    Ok(ClickEvent::new(identifier, timestamp))
}

/// Reads a required string field; `null` counts as missing.
fn string_field<'a>(
    object: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a str, SkipReason> {
    match object.get(field) {
        None | Some(Value::Null) => Err(SkipReason::MissingField(field)),
        Some(Value::String(value)) => Ok(value.as_str()),
        Some(_) => Err(SkipReason::NotAString(field)),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_json(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn load(content: &str) -> Loaded<Vec<ClickEvent>> {
        let file = write_json(content);
        JsonClickRepository::new(file.path()).load_clicks().unwrap()
    }

    #[test]
    fn test_load_valid_events() {
        let content = json!([
            {
                "bitlink": "http://bit.ly/a1b2c3",
                "timestamp": "2021-03-15T10:30:00+00:00",
                "user_agent": "Mozilla/5.0",
                "ip_address": "192.168.1.1"
            },
            {
                "bitlink": "http://bit.ly/d4e5f6",
                "timestamp": "2020-12-31T10:30:00Z",
                "user_agent": "Mozilla/5.0",
                "ip_address": "192.168.1.2"
            }
        ])
        .to_string();

        let loaded = load(&content);

        assert_eq!(loaded.total, 2);
        assert!(loaded.skipped.is_empty());
        assert_eq!(loaded.value[0].identifier, "a1b2c3");
        assert_eq!(loaded.value[0].timestamp.year(), 2021);
        assert_eq!(loaded.value[1].identifier, "d4e5f6");
        assert_eq!(loaded.value[1].timestamp.year(), 2020);
    }

    #[test]
    fn test_load_file_not_found() {
        let result = JsonClickRepository::new("definitely/not/here/decodes.json").load_clicks();

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[test]
    fn test_load_invalid_json() {
        let file = write_json("{ invalid json content");

        let result = JsonClickRepository::new(file.path()).load_clicks();

        assert!(matches!(result, Err(AppError::Parse { .. })));
    }

    #[test]
    fn test_load_not_an_array() {
        let file = write_json(r#"{"not": "an array"}"#);

        let result = JsonClickRepository::new(file.path()).load_clicks();

        match result {
            Err(AppError::Parse { message, .. }) => assert!(message.contains("an object")),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_empty_file_is_parse_error() {
        let file = write_json("");

        let result = JsonClickRepository::new(file.path()).load_clicks();

        assert!(matches!(result, Err(AppError::Parse { .. })));
    }

    #[test]
    fn test_load_empty_array() {
        let loaded = load("[]");

        assert!(loaded.value.is_empty());
        assert_eq!(loaded.total, 0);
        assert!(loaded.skipped.is_empty());
    }

    #[test]
    fn test_load_skips_malformed_events() {
        let content = json!([
            { "timestamp": "2021-03-15T10:30:00+00:00" },
            { "bitlink": "", "timestamp": "2021-03-15T10:30:00+00:00" },
            { "bitlink": "http://bit.ly/abc" },
            { "bitlink": "http://bit.ly/abc", "timestamp": "invalid-timestamp" },
            { "bitlink": "http://bit.ly", "timestamp": "2021-03-15T10:30:00+00:00" },
            { "bitlink": 42, "timestamp": "2021-03-15T10:30:00+00:00" },
            { "bitlink": "http://bit.ly/abc", "timestamp": null },
            "not an object",
            { "bitlink": "http://bit.ly/ok", "timestamp": "2021-03-15T10:30:00+00:00" }
        ])
        .to_string();

        let loaded = load(&content);

        assert_eq!(loaded.total, 9);
        assert_eq!(loaded.value.len(), 1);
        assert_eq!(loaded.value[0].identifier, "ok");

        let reasons: Vec<(Option<usize>, SkipReason)> = loaded
            .skipped
            .into_iter()
            .map(|s| (s.position, s.reason))
            .collect();
        assert_eq!(
            reasons,
            vec![
                (Some(1), SkipReason::MissingField("bitlink")),
                (Some(2), SkipReason::EmptyField("bitlink")),
                (Some(3), SkipReason::MissingField("timestamp")),
                (
                    Some(4),
                    SkipReason::InvalidTimestamp("invalid-timestamp".to_string())
                ),
                (
                    Some(5),
                    SkipReason::NoIdentifier("http://bit.ly".to_string())
                ),
                (Some(6), SkipReason::NotAString("bitlink")),
                (Some(7), SkipReason::MissingField("timestamp")),
                (Some(8), SkipReason::NotAnObject),
            ]
        );
    }

    #[test]
    fn test_load_keeps_file_order_and_duplicates() {
        let content = json!([
            { "bitlink": "http://bit.ly/b", "timestamp": "2021-01-01T00:00:00Z" },
            { "bitlink": "http://bit.ly/a", "timestamp": "2021-01-02T00:00:00Z" },
            { "bitlink": "http://bit.ly/b", "timestamp": "2021-01-03T00:00:00Z" }
        ])
        .to_string();

        let loaded = load(&content);

        let ids: Vec<&str> = loaded.value.iter().map(|e| e.identifier.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "b"]);
    }

    #[test]
    fn test_json_kind() {
        assert_eq!(json_kind(&json!(null)), "null");
        assert_eq!(json_kind(&json!("x")), "a string");
        assert_eq!(json_kind(&json!({})), "an object");
    }
}
