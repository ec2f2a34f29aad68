use serde_json::Value;

/// Returns the string if `value` is a string with at least one
/// non-whitespace character.
#[must_use]
pub fn text(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

/// True iff `value` is a string with at least one non-whitespace character.
#[must_use]
pub fn has_text(value: Option<&Value>) -> bool {
    text(value).is_some()
}
