//! Module Configuration
//!
//! Options arrive from the host as an opaque name/value map. The handful
//! this module understands are read into [`SimpleLoginConfig`]; everything
//! else is carried along untouched.

use std::collections::BTreeMap;

use kernel::error::app_error::{AppError, AppResult};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// State shared between stacked modules of one attempt
///
/// Stored by the module but never interpreted.
pub type SharedState = BTreeMap<String, Value>;

/// Read-only option map supplied at `initialize`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModuleOptions(BTreeMap<String, Value>);

impl ModuleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object such as `{"debug": true}`
    pub fn from_json(raw: &str) -> AppResult<Self> {
        match serde_json::from_str::<Value>(raw)? {
            Value::Object(map) => Ok(Self(map.into_iter().collect())),
            other => Err(AppError::bad_input(format!(
                "Module options must be a JSON object, got {}",
                json_type_name(&other)
            ))
            .with_hint("Use a form like {\"debug\": true}")),
        }
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn to_json(&self) -> Value {
        Value::Object(
            self.0
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect::<Map<String, Value>>(),
        )
    }
}

impl FromIterator<(String, Value)> for ModuleOptions {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<BTreeMap<String, Value>> for ModuleOptions {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self(map)
    }
}

/// Options recognised by the simple login module
///
/// Each flag accepts a JSON boolean or the strings `"true"` / `"false"`
/// (any case). Missing flags are `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SimpleLoginConfig {
    /// Log option entries and shared-state keys at initialize
    #[serde(deserialize_with = "flag")]
    pub debug: bool,
    /// Refuse to grant roles unless login succeeded in this cycle
    #[serde(deserialize_with = "flag")]
    pub strict_commit: bool,
    /// Compare credentials in constant time
    #[serde(deserialize_with = "flag")]
    pub constant_time_compare: bool,
}

impl SimpleLoginConfig {
    /// Read the recognised flags; unknown options are ignored
    pub fn from_options(options: &ModuleOptions) -> AppResult<Self> {
        let config = serde_json::from_value(options.to_json())?;
        Ok(config)
    }
}

fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => Ok(value),
        Flag::Text(text) if text.eq_ignore_ascii_case("true") => Ok(true),
        Flag::Text(text) if text.eq_ignore_ascii_case("false") => Ok(false),
        Flag::Text(text) => Err(D::Error::custom(format!(
            "expected a boolean, got {text:?}"
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
