//! Resolution of configuration properties across prioritized sources
//!
//! Sources are kept sorted by descending priority. A lookup walks them in
//! that order and returns the first value found; sources with equal
//! priority are consulted in registration order.
//!
//! Registration takes `&mut self`, so it can only happen while the resolver
//! is exclusively owned. Once it is shared (typically behind an `Arc`),
//! lookups are plain reads with no locking in the resolver itself.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::descriptor::DeploymentDescriptor;
use crate::logging::{LoggerExt, SharedLogger, TracingLogger};
use crate::sources::{PropertySource, SharedSource};
use crate::types::{ConfigKey, ConfigValue, ResolvedValue};

use super::error::{ConfigError, ConfigResult};
use super::property::{ConfigProperty, OptionalProperty};

/// A source together with the priority it was registered under
#[derive(Clone)]
pub struct RegisteredSource {
    pub source: SharedSource,
    pub priority: i32,
}

impl fmt::Debug for RegisteredSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredSource")
            .field("name", &self.source.name())
            .field("priority", &self.priority)
            .finish()
    }
}

/// Resolves configuration properties from an ordered list of sources
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use layerconf_core::resolver::ConfigResolver;
/// use layerconf_core::sources::{MapPropertySource, SourceTier};
///
/// let mut resolver = ConfigResolver::new();
/// resolver.add_source(Arc::new(MapPropertySource::for_tier(
///     SourceTier::ServletContext,
///     [("greeting", "context-context")],
/// )));
/// resolver.add_source(Arc::new(MapPropertySource::for_tier(
///     SourceTier::System,
///     [("greeting", "system-system")],
/// )));
///
/// let resolved = resolver.resolve("greeting").unwrap();
/// assert_eq!(resolved.value(), Some("system-system"));
/// assert_eq!(resolved.source_name(), Some("system"));
/// ```
#[derive(Clone)]
pub struct ConfigResolver {
    sources: Vec<RegisteredSource>,
    logger: SharedLogger,
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigResolver {
    /// Create a resolver with no sources, logging through `tracing`
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            logger: Arc::new(TracingLogger::new()),
        }
    }

    /// Build a resolver holding the servlet, filter, and context parameters
    /// a deployment descriptor declares for one servlet
    pub fn for_deployment(
        descriptor: &DeploymentDescriptor,
        servlet: &str,
        filter: Option<&str>,
    ) -> ConfigResult<Self> {
        let mut resolver = Self::new();
        for source in descriptor.sources_for(servlet, filter)? {
            resolver.add_source(source);
        }
        Ok(resolver)
    }

    /// Replace the logger
    #[must_use]
    pub fn with_logger(mut self, logger: SharedLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Register a source using its own priority (builder form)
    #[must_use]
    pub fn with_source(mut self, source: SharedSource) -> Self {
        self.add_source(source);
        self
    }

    /// Register a source under an explicit priority
    ///
    /// The source is placed after every source whose priority is greater
    /// than or equal to `priority`, so among equal priorities the first
    /// registered wins.
    pub fn register_source(&mut self, source: SharedSource, priority: i32) {
        let index = self.sources.partition_point(|s| s.priority >= priority);
        self.logger.info_fmt(format_args!(
            "registered source '{}' with priority {} at position {}",
            source.name(),
            priority,
            index
        ));
        self.sources.insert(index, RegisteredSource { source, priority });
    }

    /// Register a source under the priority it reports
    pub fn add_source(&mut self, source: SharedSource) {
        let priority = source.priority();
        self.register_source(source, priority);
    }

    /// Registered sources in resolution order
    pub fn sources(&self) -> &[RegisteredSource] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Resolve a key to the value of the highest-priority source defining it
    ///
    /// Only a blank key is an error. A key no source defines resolves to
    /// `ResolvedValue::Absent`.
    pub fn resolve(&self, key: &str) -> ConfigResult<ResolvedValue> {
        let key = ConfigKey::new(key)?;
        Ok(self.resolve_key(&key))
    }

    /// Resolve an already validated key
    pub fn resolve_key(&self, key: &ConfigKey) -> ResolvedValue {
        for registered in &self.sources {
            if let Some(value) = self.read(registered, key.as_str()) {
                self.logger.debug_fmt(format_args!(
                    "resolved '{}' from source '{}'",
                    key,
                    registered.source.name()
                ));
                return ResolvedValue::Present(ConfigValue {
                    key: key.as_str().to_string(),
                    value,
                    source_name: registered.source.name().to_string(),
                    priority: registered.priority,
                });
            }
        }

        self.logger.debug_fmt(format_args!("'{}' is not defined by any source", key));
        ResolvedValue::Absent {
            key: key.as_str().to_string(),
        }
    }

    /// Resolve a key, reporting absence as `None`
    pub fn resolve_optional(&self, key: &str) -> ConfigResult<Option<String>> {
        Ok(self.resolve(key)?.into_value())
    }

    /// Resolve and convert a required value
    pub fn get_value<T>(&self, key: &str) -> ConfigResult<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        match self.resolve(key)?.into_value() {
            Some(value) => convert(key, value),
            None => Err(ConfigError::missing_property(key)),
        }
    }

    /// Resolve and convert an optional value
    pub fn get_optional_value<T>(&self, key: &str) -> ConfigResult<Option<T>>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        self.resolve(key)?
            .into_value()
            .map(|value| convert(key, value))
            .transpose()
    }

    /// Resolve a required injection point, falling back to its default
    pub fn inject<T>(&self, property: &ConfigProperty) -> ConfigResult<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let key = property.key();
        let value = self
            .resolve_key(key)
            .into_value()
            .or_else(|| property.default_value().map(str::to_string))
            .ok_or_else(|| ConfigError::missing_property(key.as_str()))?;
        convert(key.as_str(), value)
    }

    /// Resolve an optional injection point, falling back to its default
    pub fn inject_optional<T>(&self, property: &OptionalProperty) -> ConfigResult<Option<T>>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let key = property.key();
        self.resolve_key(key)
            .into_value()
            .or_else(|| property.default_value().map(str::to_string))
            .map(|value| convert(key.as_str(), value))
            .transpose()
    }

    /// Sorted union of the property names every available source reports
    pub fn property_names(&self) -> Vec<String> {
        let mut names = BTreeSet::new();
        for registered in &self.sources {
            if !registered.source.is_available() {
                continue;
            }
            match registered.source.property_names() {
                Ok(found) => names.extend(found),
                Err(e) => self.logger.warn_fmt(format_args!(
                    "source '{}' could not list properties: {}",
                    registered.source.name(),
                    e
                )),
            }
        }
        names.into_iter().collect()
    }

    /// Read one source, treating unavailability and errors as "not defined"
    fn read(&self, registered: &RegisteredSource, key: &str) -> Option<String> {
        let source = &registered.source;
        if !source.is_available() {
            self.logger.debug_fmt(format_args!(
                "skipping unavailable source '{}' for '{}'",
                source.name(),
                key
            ));
            return None;
        }
        match source.get(key) {
            Ok(value) => value,
            Err(e) => {
                self.logger.warn_fmt(format_args!(
                    "source '{}' failed reading '{}', treating as undefined: {}",
                    source.name(),
                    key,
                    e
                ));
                None
            }
        }
    }
}

fn convert<T>(key: &str, value: String) -> ConfigResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match value.parse::<T>() {
        Ok(parsed) => Ok(parsed),
        Err(e) => Err(ConfigError::Conversion {
            key: key.to_string(),
            value,
            target: std::any::type_name::<T>(),
            reason: e.to_string(),
        }),
    }
}

impl fmt::Debug for ConfigResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigResolver")
            .field("sources", &self.sources)
            .finish()
    }
}
