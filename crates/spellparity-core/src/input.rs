//! Word-list loading.
//!
//! `.json` files hold either `{"test_cases": [{"word": ..}, ..]}` or a flat
//! array of scalars; anything else is read as plain text, one word per line.

use crate::errors::ParityError;
use serde_json::Value;
use std::path::Path;

/// Used when no input file is given.
pub const DEFAULT_WORDS: &[&str] = &[
    "cjase",
    "cjar",
    "gjal",
    "scjalde",
    "spieli",
    "storie",
    "tradizion",
    "gjaldins",
    "cjant",
    "gjerât",
    "scjasie",
];

pub fn default_words() -> Vec<String> {
    DEFAULT_WORDS.iter().map(|w| w.to_string()).collect()
}

pub fn load_words(path: &Path) -> Result<Vec<String>, ParityError> {
    if !path.exists() {
        return Err(ParityError::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    let raw = std::fs::read_to_string(path).map_err(|e| ParityError::io(path, e))?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let words = if is_json {
        let data: Value = serde_json::from_str(&raw).map_err(|e| ParityError::json(path, e))?;
        words_from_json(&data).unwrap_or_else(|| {
            tracing::warn!(path = %path.display(), "unknown JSON word list format");
            Vec::new()
        })
    } else {
        raw.lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect()
    };

    tracing::info!(count = words.len(), path = %path.display(), "loaded words");
    Ok(words)
}

/// `None` when the document has neither supported layout.
fn words_from_json(data: &Value) -> Option<Vec<String>> {
    if let Some(cases) = data.get("test_cases") {
        let cases = cases.as_array()?;
        return Some(
            cases
                .iter()
                .filter_map(|case| case.get("word"))
                .filter(|w| is_truthy(w))
                .map(scalar_text)
                .collect(),
        );
    }
    let items = data.as_array()?;
    Some(items.iter().filter(|v| is_truthy(v)).map(scalar_text).collect())
}

fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn scalar_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
