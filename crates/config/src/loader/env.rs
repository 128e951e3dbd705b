//! Environment variable overlay for settings.
//!
//! Responsibilities:
//! - Read `THALIA_*` variables and turn them into a nested settings layer.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Merging layers or validating the result (see builder.rs).
//! - .env file loading (handled by `SettingsLoader::load_dotenv`).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Only variables whose first segment names a top-level setting are read;
//!   other `THALIA_*` variables (e.g. `THALIA_CACHE_DIR`) are left alone.
//! - Names are case-insensitive; nested segments are joined with ':'.

use serde_json::{Map, Value};

use super::error::ConfigError;
use crate::constants::{ENV_NESTED_DELIMITER, ENV_PREFIX};
use crate::settings::TOP_LEVEL_FIELDS;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Build the settings layer contributed by the process environment.
pub(crate) fn env_layer() -> Result<Value, ConfigError> {
    let vars = std::env::vars_os().filter_map(|(name, value)| {
        let name = name.into_string().ok()?;
        let value = value.into_string().ok()?;
        Some((name, value))
    });
    layer_from_vars(vars)
}

/// Build a settings layer from `(name, value)` pairs.
pub(crate) fn layer_from_vars(
    vars: impl IntoIterator<Item = (String, String)>,
) -> Result<Value, ConfigError> {
    let mut root = Map::new();

    for (name, raw) in vars {
        let upper = name.to_ascii_uppercase();
        let Some(rest) = upper.strip_prefix(ENV_PREFIX) else {
            continue;
        };
        let path: Vec<String> = rest
            .split(ENV_NESTED_DELIMITER)
            .map(|segment| segment.to_ascii_lowercase())
            .collect();
        if !TOP_LEVEL_FIELDS.contains(&path[0].as_str()) {
            continue;
        }
        if path.iter().any(String::is_empty) {
            return Err(ConfigError::InvalidValue {
                var: name,
                message: "empty segment in variable name".to_string(),
            });
        }

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }

        insert_path(&mut root, &path, parse_value(trimmed)).map_err(|message| {
            ConfigError::InvalidValue {
                var: name.clone(),
                message,
            }
        })?;
    }

    Ok(Value::Object(root))
}

/// Structured values (objects and lists) are given as JSON; everything else
/// is taken verbatim as a string.
fn parse_value(raw: &str) -> Value {
    match serde_json::from_str::<Value>(raw) {
        Ok(value @ (Value::Object(_) | Value::Array(_))) => value,
        _ => Value::String(raw.to_string()),
    }
}

fn insert_path(root: &mut Map<String, Value>, path: &[String], value: Value) -> Result<(), String> {
    let Some((last, parents)) = path.split_last() else {
        return Ok(());
    };

    let mut current = root;
    for segment in parents {
        let entry = current
            .entry(segment.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        current = match entry {
            Value::Object(map) => map,
            _ => return Err(format!("'{segment}' is set both as a value and a table")),
        };
    }
    current.insert(last.clone(), value);
    Ok(())
}
