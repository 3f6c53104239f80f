//! Validated configuration keys

use std::fmt;
use std::str::FromStr;

use crate::resolver::ConfigError;

/// A non-blank configuration property name
///
/// Keys are otherwise opaque: dots, dashes, and case are preserved and
/// compared exactly.
///
/// # Example
///
/// ```
/// use layerconf_core::types::ConfigKey;
///
/// let key = ConfigKey::new("greeting").unwrap();
/// assert_eq!(key.as_str(), "greeting");
/// assert!(ConfigKey::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Validate and wrap a key
    ///
    /// Returns `ConfigError::InvalidKey` for empty or whitespace-only input.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::InvalidKey(key));
        }
        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for ConfigKey {
    type Error = ConfigError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for ConfigKey {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_keys() {
        for raw in ["greeting", "app.max-size", "APP_GREETING", " padded "] {
            let key = ConfigKey::new(raw).unwrap();
            assert_eq!(key.as_str(), raw);
            assert_eq!(key.to_string(), raw);
        }
    }

    #[test]
    fn test_blank_keys_rejected() {
        for raw in ["", " ", "\t\n"] {
            let err = ConfigKey::new(raw).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidKey(ref k) if k == raw));
        }
    }

    #[test]
    fn test_conversions() {
        let parsed: ConfigKey = "foo".parse().unwrap();
        let from_str = ConfigKey::try_from("foo").unwrap();
        let from_string = ConfigKey::try_from("foo".to_string()).unwrap();
        assert_eq!(parsed, from_str);
        assert_eq!(from_str, from_string);
        assert_eq!(parsed.into_string(), "foo");
    }
}
