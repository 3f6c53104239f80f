//! Injection point descriptors

use crate::types::ConfigKey;

use super::error::ConfigResult;

/// A required property injection point
///
/// Resolves to the source value, else the declared default, else
/// `ConfigError::MissingProperty`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigProperty {
    key: ConfigKey,
    default_value: Option<String>,
}

impl ConfigProperty {
    pub fn new(key: impl Into<String>) -> ConfigResult<Self> {
        Ok(Self {
            key: ConfigKey::new(key)?,
            default_value: None,
        })
    }

    /// Value used when no source defines the key
    #[must_use]
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn key(&self) -> &ConfigKey {
        &self.key
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }
}

/// An optional property injection point
///
/// Absence is a normal outcome: it resolves to the declared default, or to
/// `None` when there is none. A property that is present with an empty value
/// resolves to `Some("")`, never `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionalProperty {
    key: ConfigKey,
    default_value: Option<String>,
}

impl OptionalProperty {
    pub fn new(key: impl Into<String>) -> ConfigResult<Self> {
        Ok(Self {
            key: ConfigKey::new(key)?,
            default_value: None,
        })
    }

    #[must_use]
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn key(&self) -> &ConfigKey {
        &self.key
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }
}
