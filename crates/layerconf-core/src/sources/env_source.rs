//! Environment variable property source

use std::collections::HashMap;

use super::traits::{PropertySource, SourceResult, SourceTier};

/// Property source over a snapshot of environment variables
///
/// The snapshot is taken when the source is built, so lookups never touch
/// process-wide state and tests can supply their own variables.
///
/// # Name Mapping
///
/// Property names rarely match environment variable names exactly, so a key
/// is tried in three forms, first match wins:
/// - the key as given (`app.greeting`)
/// - every non-alphanumeric character replaced by `_` (`app_greeting`)
/// - the replaced form upper-cased (`APP_GREETING`)
///
/// Variables set to an empty string are treated as undefined.
///
/// # Example
///
/// ```
/// use layerconf_core::sources::{EnvPropertySource, PropertySource};
///
/// let source = EnvPropertySource::from_vars([("APP_GREETING", "hi")]);
/// assert_eq!(source.get("app.greeting").unwrap(), Some("hi".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct EnvPropertySource {
    vars: HashMap<String, String>,
    priority: i32,
}

impl EnvPropertySource {
    /// Snapshot the current process environment
    ///
    /// Variables whose name or value is not valid Unicode are skipped.
    pub fn from_process() -> Self {
        Self::from_vars(
            std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?))),
        )
    }

    /// Build from explicit name/value pairs
    pub fn from_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            priority: SourceTier::Environment.priority(),
        }
    }

    /// Override the default environment priority
    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Environment variable names tried for a key, in lookup order
    pub fn candidate_names(key: &str) -> Vec<String> {
        let sanitized: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        let upper = sanitized.to_ascii_uppercase();

        let mut names = vec![key.to_string()];
        for name in [sanitized, upper] {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    fn lookup(&self, name: &str) -> Option<&String> {
        self.vars.get(name).filter(|v| !v.is_empty())
    }
}

impl PropertySource for EnvPropertySource {
    fn name(&self) -> &str {
        "environment"
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn get(&self, key: &str) -> SourceResult<Option<String>> {
        Ok(Self::candidate_names(key)
            .iter()
            .find_map(|name| self.lookup(name))
            .cloned())
    }

    fn property_names(&self) -> SourceResult<Vec<String>> {
        let mut names: Vec<String> = self
            .vars
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, _)| k.clone())
            .collect();
        names.sort();
        Ok(names)
    }
}
