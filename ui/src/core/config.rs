//! Read-only configuration store shared by every component in a tree.
//!
//! Components never mutate the config. They look values up by key and fall
//! back to defaults whenever a value is missing or has an unexpected shape.

use std::collections::BTreeMap;
use std::rc::Rc;

use serde_json::{Map, Value};
use thiserror::Error;

/// Keys understood by the toolbar components.
pub mod keys {
    pub const MODE: &str = "mode";
    pub const STATUSBAR_PADDING: &str = "statusbarPadding";
    pub const BACK_BUTTON_TEXT: &str = "backButtonText";
    pub const BACK_BUTTON_ICON: &str = "backButtonIcon";
    /// Opt into the historical lookup where the icon default was read from
    /// `backButtonText` and the label default from `backButtonIcon`.
    pub const LEGACY_BACK_BUTTON_KEYS: &str = "legacyBackButtonKeys";
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config document must be a JSON object, found {0}")]
    NotAnObject(&'static str),
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Config {
    values: Rc<BTreeMap<String, Value>>,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse a JSON object such as `{"mode": "ios", "statusbarPadding": true}`.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        match serde_json::from_str::<Value>(source)? {
            Value::Object(map) => Ok(Self::from_map(map)),
            other => Err(ConfigError::NotAnObject(kind_of(&other))),
        }
    }

    /// Like [`Config::from_json`], but a broken document yields an empty config.
    pub fn from_json_or_default(source: &str) -> Self {
        Self::from_json(source).unwrap_or_else(|err| {
            tracing::warn!("ignoring config document: {err}");
            Self::default()
        })
    }

    fn from_map(map: Map<String, Value>) -> Self {
        Self {
            values: Rc::new(map.into_iter().collect()),
        }
    }

    /// String lookup. Numbers and booleans are stringified; missing, null or
    /// structured values yield `fallback`.
    pub fn get(&self, key: &str, fallback: &str) -> String {
        match self.values.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => fallback.to_string(),
        }
    }

    /// Boolean lookup. Anything that is not clearly "on" reads as `false`.
    pub fn get_boolean(&self, key: &str) -> bool {
        match self.values.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => {
                matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "on" | "1")
            }
            Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
            _ => false,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

#[derive(Debug, Default)]
pub struct ConfigBuilder {
    values: BTreeMap<String, Value>,
}

impl ConfigBuilder {
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Config {
        Config {
            values: Rc::new(self.values),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
