//! In-memory property source

use std::collections::BTreeMap;

use parking_lot::RwLock;

use super::traits::{PropertySource, SourceResult, SourceTier};

/// In-memory property source
///
/// Backs every tier whose values are known up front: explicitly supplied
/// system properties, servlet and filter init parameters, context
/// parameters, and static defaults.
///
/// # Thread Safety
///
/// Properties sit behind a `RwLock`, so setup code may still call `set`
/// after the source has been shared. The resolver only ever reads.
///
/// # Example
///
/// ```
/// use layerconf_core::sources::{MapPropertySource, PropertySource};
///
/// let source = MapPropertySource::new("overrides", 500);
/// source.set("greeting", "hi");
/// assert_eq!(source.get("greeting").unwrap(), Some("hi".to_string()));
/// ```
#[derive(Debug)]
pub struct MapPropertySource {
    name: String,
    priority: i32,
    properties: RwLock<BTreeMap<String, String>>,
}

impl MapPropertySource {
    /// Create an empty source
    pub fn new(name: impl Into<String>, priority: i32) -> Self {
        Self {
            name: name.into(),
            priority,
            properties: RwLock::new(BTreeMap::new()),
        }
    }

    /// Create a source with initial properties
    pub fn with_properties<K, V>(
        name: impl Into<String>,
        priority: i32,
        properties: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            priority,
            properties: RwLock::new(
                properties
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Create a source named and prioritized after a tier
    pub fn for_tier<K, V>(tier: SourceTier, properties: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::with_properties(tier.as_str(), tier.priority(), properties)
    }

    /// Insert or replace a property
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.write().insert(key.into(), value.into());
    }

    /// Remove a property, returning its previous value
    pub fn remove(&self, key: &str) -> Option<String> {
        self.properties.write().remove(key)
    }

    pub fn clear(&self) {
        self.properties.write().clear();
    }

    pub fn len(&self) -> usize {
        self.properties.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PropertySource for MapPropertySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn get(&self, key: &str) -> SourceResult<Option<String>> {
        Ok(self.properties.read().get(key).cloned())
    }

    fn property_names(&self) -> SourceResult<Vec<String>> {
        Ok(self.properties.read().keys().cloned().collect())
    }
}

impl Clone for MapPropertySource {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            priority: self.priority,
            properties: RwLock::new(self.properties.read().clone()),
        }
    }
}
