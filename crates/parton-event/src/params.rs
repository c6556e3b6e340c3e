// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Module configuration parameter sets.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde_json::Value;
use thiserror::Error;

use crate::tag::InputTag;

/// Error type for configuration access.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required parameter absent from the set.
    #[error("missing parameter: {0}")]
    MissingParameter(String),
    /// Parameter present with an unusable type or value.
    #[error("parameter {key} has wrong type (expected {expected})")]
    WrongParameterType {
        /// Offending key.
        key: String,
        /// Type the caller asked for.
        expected: &'static str,
    },
    /// Parameter set text failed to parse.
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// String-keyed configuration values for one module instance.
///
/// Values are JSON-typed; typed getters convert at the access site and
/// report [`ConfigError::WrongParameterType`] on mismatch. There are no
/// defaults: a module asking for a key the host did not supply gets
/// [`ConfigError::MissingParameter`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterSet {
    values: BTreeMap<String, Value>,
}

impl ParameterSet {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Parses a parameter set from JSON object text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let values: BTreeMap<String, Value> = serde_json::from_str(text)?;
        Ok(Self { values })
    }

    /// Sets `key` to `value`, replacing any existing entry.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Deserializes the value for `key` into a `T`.
    ///
    /// Shape mismatches surface as [`ConfigError::Parse`]; use the
    /// dedicated getters when a precise wrong-type diagnostic matters.
    pub fn get<T>(&self, key: &str) -> Result<T, ConfigError>
    where
        T: serde::de::DeserializeOwned,
    {
        let value = self
            .values
            .get(key)
            .ok_or_else(|| ConfigError::MissingParameter(key.to_owned()))?;
        Ok(serde_json::from_value(value.clone())?)
    }

    /// Returns the string value for `key`.
    pub fn get_str(&self, key: &str) -> Result<&str, ConfigError> {
        let value = self
            .values
            .get(key)
            .ok_or_else(|| ConfigError::MissingParameter(key.to_owned()))?;
        value.as_str().ok_or_else(|| ConfigError::WrongParameterType {
            key: key.to_owned(),
            expected: "string",
        })
    }

    /// Returns the input tag named by `key`.
    ///
    /// Empty labels are rejected as [`ConfigError::WrongParameterType`];
    /// a tag that names nothing cannot resolve to a product.
    pub fn input_tag(&self, key: &str) -> Result<InputTag, ConfigError> {
        let label = self.get_str(key)?;
        InputTag::from_str(label).map_err(|_| ConfigError::WrongParameterType {
            key: key.to_owned(),
            expected: "non-empty input tag",
        })
    }
}
