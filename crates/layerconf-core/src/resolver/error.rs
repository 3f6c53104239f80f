//! Resolver error types

use thiserror::Error;

/// Errors surfaced to callers of the resolver and its collaborators
///
/// Source read failures never appear here; the resolver absorbs them.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Empty or whitespace-only key
    #[error("Invalid configuration key: {0:?}")]
    InvalidKey(String),

    /// A required property has no value and no default
    #[error("Required property not found: {key}")]
    MissingProperty { key: String },

    /// A value could not be converted to the requested type
    #[error("Cannot convert {key}={value:?} to {target}: {reason}")]
    Conversion {
        key: String,
        value: String,
        target: &'static str,
        reason: String,
    },

    /// A deployment descriptor does not declare the named servlet or filter
    #[error("Unknown {kind}: {name}")]
    UnknownComponent { kind: &'static str, name: String },

    #[error("Configuration for context '{0}' is already initialized")]
    AlreadyInitialized(String),

    #[error("Configuration for context '{0}' is not initialized")]
    NotInitialized(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ConfigError {
    pub fn missing_property(key: impl Into<String>) -> Self {
        Self::MissingProperty { key: key.into() }
    }

    pub fn unknown_servlet(name: impl Into<String>) -> Self {
        Self::UnknownComponent {
            kind: "servlet",
            name: name.into(),
        }
    }

    pub fn unknown_filter(name: impl Into<String>) -> Self {
        Self::UnknownComponent {
            kind: "filter",
            name: name.into(),
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::InvalidKey(String::new()).to_string(),
            "Invalid configuration key: \"\""
        );
        assert_eq!(
            ConfigError::missing_property("foo").to_string(),
            "Required property not found: foo"
        );
        assert_eq!(ConfigError::unknown_filter("gate").to_string(), "Unknown filter: gate");
        assert_eq!(
            ConfigError::NotInitialized("app".to_string()).to_string(),
            "Configuration for context 'app' is not initialized"
        );
    }
}
