//! Tunable parameters declared by the rules and resolved by the host.
//!
//! A configuration UI renders one control per [`OptionSpec`], clamps user input
//! to the declared bounds and passes the resulting [`OptionValues`] into
//! `init_grid` / `step_grid`. The engine itself only checks kinds.

use crate::{Error, Result};
use ahash::AHashMap;
use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};
use std::fmt;

pub const WRAP_AROUND: &str = "wrap_around";
pub const ALIVE_CHANCE: &str = "alive_chance";
pub const FOOD_CHANCE: &str = "food_chance";
pub const CELL_SIZE: &str = "cell_size";
pub const TICK_INTERVAL: &str = "tick_interval";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionKind {
    Number,
    Boolean,
    String,
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::String => "string",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Boolean(bool),
    Number(f64),
    String(String),
}

impl OptionValue {
    pub fn kind(&self) -> OptionKind {
        match self {
            Self::Number(_) => OptionKind::Number,
            Self::Boolean(_) => OptionKind::Boolean,
            Self::String(_) => OptionKind::String,
        }
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

/// Declaration of a single tunable parameter.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OptionSpec {
    pub kind: OptionKind,
    pub default: OptionValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
}

impl OptionSpec {
    pub fn boolean(default: bool) -> Self {
        Self {
            kind: OptionKind::Boolean,
            default: OptionValue::Boolean(default),
            min: None,
            max: None,
            step: None,
        }
    }

    pub fn number(default: f64) -> Self {
        Self {
            kind: OptionKind::Number,
            default: OptionValue::Number(default),
            min: None,
            max: None,
            step: None,
        }
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    /// Clamps a number into the declared bounds; other values are returned as is.
    ///
    /// Meant for the host's configuration layer, the rules never clamp.
    pub fn clamp(&self, value: OptionValue) -> OptionValue {
        match value {
            OptionValue::Number(mut x) => {
                if let Some(min) = self.min {
                    x = x.max(min);
                }
                if let Some(max) = self.max {
                    x = x.min(max);
                }
                OptionValue::Number(x)
            }
            other => other,
        }
    }
}

/// Ordered list of option declarations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OptionsSchema(Vec<(String, OptionSpec)>);

impl Serialize for OptionsSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, spec) in &self.0 {
            map.serialize_entry(name, spec)?;
        }
        map.end()
    }
}

impl OptionsSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, spec: OptionSpec) -> Self {
        self.0.push((name.to_string(), spec));
        self
    }

    pub fn get(&self, name: &str) -> Option<&OptionSpec> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, spec)| spec)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionSpec)> {
        self.0.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    /// Concatenation of two schemas, `self` first.
    pub fn merged(mut self, other: &OptionsSchema) -> Self {
        for (name, spec) in other.iter() {
            if self.get(name).is_none() {
                self.0.push((name.to_string(), spec.clone()));
            }
        }
        self
    }

    /// Default value of every declared option.
    pub fn defaults(&self) -> OptionValues {
        let mut values = OptionValues::new();
        for (name, spec) in self.iter() {
            values.set(name, spec.default.clone());
        }
        values
    }

    /// Defaults overlaid with `overrides`.
    ///
    /// Fails on names the schema does not declare and on kind mismatches.
    /// Numeric bounds are not checked.
    pub fn resolve(&self, overrides: &OptionValues) -> Result<OptionValues> {
        let mut values = self.defaults();
        for (name, value) in overrides.iter() {
            let spec = self
                .get(name)
                .ok_or_else(|| Error::invalid_option(name, "not declared"))?;
            if spec.kind != value.kind() {
                return Err(Error::invalid_option(
                    name,
                    format!("expected {}, got {}", spec.kind, value.kind()),
                ));
            }
            values.set(name, value.clone());
        }
        Ok(values)
    }
}

/// Options declared for every algorithm and consumed by the host only.
pub fn global_options() -> OptionsSchema {
    OptionsSchema::new()
        .with(CELL_SIZE, OptionSpec::number(10.).with_range(2., 20.))
        .with(TICK_INTERVAL, OptionSpec::number((1000 / 30) as f64))
}

/// Resolved option values keyed by name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionValues(AHashMap<String, OptionValue>);

impl OptionValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl Into<OptionValue>) -> Self {
        self.set(name, value.into());
        self
    }

    pub fn set(&mut self, name: &str, value: OptionValue) {
        self.0.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn number(&self, name: &str) -> Result<f64> {
        match self.require(name)? {
            OptionValue::Number(x) => Ok(*x),
            other => Err(kind_mismatch(name, OptionKind::Number, other)),
        }
    }

    pub fn boolean(&self, name: &str) -> Result<bool> {
        match self.require(name)? {
            OptionValue::Boolean(b) => Ok(*b),
            other => Err(kind_mismatch(name, OptionKind::Boolean, other)),
        }
    }

    pub fn string(&self, name: &str) -> Result<&str> {
        match self.require(name)? {
            OptionValue::String(s) => Ok(s),
            other => Err(kind_mismatch(name, OptionKind::String, other)),
        }
    }

    fn require(&self, name: &str) -> Result<&OptionValue> {
        self.get(name)
            .ok_or_else(|| Error::invalid_option(name, "missing"))
    }
}

fn kind_mismatch(name: &str, expected: OptionKind, got: &OptionValue) -> Error {
    Error::invalid_option(name, format!("expected {}, got {}", expected, got.kind()))
}
