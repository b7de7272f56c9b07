use serde_json::{Map, Value};
use crate::error::{MalformedKind, ReviewError};
use crate::models::{ClassificationResult, ClassificationTask};

const FENCE: &str = "```";

/// Turns a raw classification completion into a validated result.
pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(task: ClassificationTask, raw: &str) -> Result<ClassificationResult, ReviewError> {
        let payload = Self::strip_wrapping(raw);

        let value: Value = serde_json::from_str(payload).map_err(|e| {
            ReviewError::malformed(
                MalformedKind::Syntax,
                format!("{} completion is not valid JSON: {}", task, e),
            )
        })?;

        let object = value.as_object().ok_or_else(|| {
            ReviewError::malformed(
                MalformedKind::Syntax,
                format!("{} completion is JSON but not an object", task),
            )
        })?;

        let category = Self::string_field(task, object, "category")?;
        let reason = Self::string_field(task, object, "reason")?;

        ClassificationResult::new(task, category, reason)
    }

    /// Removes surrounding whitespace and an optional code fence (with or
    /// without a language tag). Input without a fence is returned trimmed.
    pub fn strip_wrapping(raw: &str) -> &str {
        let mut text = raw.trim();

        if let Some(rest) = text.strip_prefix(FENCE) {
            text = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
        }

        if let Some(rest) = text.trim_end().strip_suffix(FENCE) {
            text = rest;
        }

        text.trim()
    }

    fn string_field<'a>(
        task: ClassificationTask,
        object: &'a Map<String, Value>,
        field: &str,
    ) -> Result<&'a str, ReviewError> {
        match object.get(field) {
            Some(Value::String(value)) => Ok(value.as_str()),
            Some(other) => Err(ReviewError::malformed(
                MalformedKind::MissingField,
                format!("{} field \"{}\" must be a string, got {}", task, field, other),
            )),
            None => Err(ReviewError::malformed(
                MalformedKind::MissingField,
                format!("{} completion has no \"{}\" field", task, field),
            )),
        }
    }
}
