use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};

fn word_boundaries() -> &'static [Regex] {
  static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
  PATTERNS
    .get_or_init(|| {
      vec![
        Regex::new(r"([a-z\d])([A-Z])").expect("invalid lower/upper boundary regex"),
        Regex::new(r"([A-Z]+)([A-Z][a-z\d]+)").expect("invalid acronym boundary regex"),
      ]
    })
    .as_slice()
}

/// Convert a camelCase key into snake_case.
///
/// Keys without uppercase characters are returned untouched, which keeps the conversion
/// stable when it is applied to an already converted manifest.
pub fn decamelize(key: &str) -> String {
  if !key.chars().any(|c| c.is_ascii_uppercase()) {
    return key.to_string();
  }

  let mut converted = key.to_string();
  for pattern in word_boundaries() {
    converted = pattern.replace_all(&converted, "${1}_${2}").into_owned();
  }
  converted.to_lowercase()
}

/// Recursively convert every object key in `value` to snake_case.
///
/// Arrays keep their element order and scalars are copied as-is.
pub fn decamelize_keys(value: &Value) -> Value {
  match value {
    Value::Object(map) => Value::Object(decamelize_map(map)),
    Value::Array(items) => Value::Array(items.iter().map(decamelize_keys).collect()),
    scalar => scalar.clone(),
  }
}

pub(crate) fn decamelize_map(map: &Map<String, Value>) -> Map<String, Value> {
  map
    .iter()
    .map(|(key, value)| (decamelize(key), decamelize_keys(value)))
    .collect()
}
