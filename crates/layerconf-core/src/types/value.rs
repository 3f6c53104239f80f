//! Resolution results with provenance

use std::fmt;

/// A value together with the source that supplied it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValue {
    /// The key that was looked up
    pub key: String,
    /// The raw value
    pub value: String,
    /// Name of the source that provided the value
    pub source_name: String,
    /// Effective priority the source was registered with
    pub priority: i32,
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={} (from {} @ {})",
            self.key, self.value, self.source_name, self.priority
        )
    }
}

/// Outcome of resolving a single key
///
/// Exactly one source's value is ever reported; values are selected, never
/// merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedValue {
    /// The highest-priority source defining the key
    Present(ConfigValue),
    /// No registered source defines the key
    Absent { key: String },
}

impl ResolvedValue {
    pub fn is_present(&self) -> bool {
        matches!(self, ResolvedValue::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    pub fn key(&self) -> &str {
        match self {
            ResolvedValue::Present(v) => &v.key,
            ResolvedValue::Absent { key } => key,
        }
    }

    /// The raw value, if present
    pub fn value(&self) -> Option<&str> {
        self.config_value().map(|v| v.value.as_str())
    }

    /// Name of the source that supplied the value, if present
    pub fn source_name(&self) -> Option<&str> {
        self.config_value().map(|v| v.source_name.as_str())
    }

    pub fn config_value(&self) -> Option<&ConfigValue> {
        match self {
            ResolvedValue::Present(v) => Some(v),
            ResolvedValue::Absent { .. } => None,
        }
    }

    /// Drop provenance and keep only the value
    pub fn into_value(self) -> Option<String> {
        self.into_config_value().map(|v| v.value)
    }

    pub fn into_config_value(self) -> Option<ConfigValue> {
        match self {
            ResolvedValue::Present(v) => Some(v),
            ResolvedValue::Absent { .. } => None,
        }
    }
}
