//! Core traits and types for property sources

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

/// Errors a property source may report while reading
///
/// The resolver never propagates these: a failing source is treated as one
/// that defines nothing for the key being looked up.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Source not available: {0}")]
    Unavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Source error: {0}")]
    Other(String),
}

pub type SourceResult<T> = Result<T, SourceError>;

/// Named priority bands, highest first
///
/// The ordinals leave gaps so hosts can slot their own sources between
/// the built-in tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SourceTier {
    /// Explicitly supplied system properties
    System,
    /// Process environment variables
    Environment,
    /// Per-servlet init parameters
    ServletInit,
    /// Filter init parameters
    Filter,
    /// Application-wide context parameters
    ServletContext,
    /// Static defaults
    Defaults,
}

impl SourceTier {
    /// All tiers in resolution order
    pub const ALL: [SourceTier; 6] = [
        SourceTier::System,
        SourceTier::Environment,
        SourceTier::ServletInit,
        SourceTier::Filter,
        SourceTier::ServletContext,
        SourceTier::Defaults,
    ];

    /// Ordinal used when a source of this tier is registered
    pub fn priority(&self) -> i32 {
        match self {
            SourceTier::System => 400,
            SourceTier::Environment => 300,
            SourceTier::ServletInit => 60,
            SourceTier::Filter => 50,
            SourceTier::ServletContext => 40,
            SourceTier::Defaults => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceTier::System => "system",
            SourceTier::Environment => "environment",
            SourceTier::ServletInit => "servlet-init",
            SourceTier::Filter => "filter",
            SourceTier::ServletContext => "servlet-context",
            SourceTier::Defaults => "defaults",
        }
    }
}

impl fmt::Display for SourceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named, prioritized provider of configuration key/value pairs
///
/// Implementations can be:
/// - In-memory maps (`MapPropertySource`) for system properties, init
///   parameters, context parameters, and defaults
/// - An environment snapshot (`EnvPropertySource`)
/// - Custom implementations backed by files, databases, remote services
///
/// Sources are read concurrently once registered, so `get` must not rely on
/// exclusive access. Timeouts and retries for remote sources belong here,
/// not in the resolver.
///
/// # Example
///
/// ```
/// use layerconf_core::sources::{MapPropertySource, PropertySource, SourceTier};
///
/// let source = MapPropertySource::for_tier(SourceTier::ServletContext, [("greeting", "hello")]);
/// assert_eq!(source.get("greeting").unwrap(), Some("hello".to_string()));
/// assert_eq!(source.priority(), 40);
/// ```
pub trait PropertySource: Send + Sync {
    /// Human-readable name, reported as the provenance of resolved values
    fn name(&self) -> &str;

    /// Fixed priority of this source (higher wins)
    fn priority(&self) -> i32;

    /// Check if this source can currently be read
    fn is_available(&self) -> bool {
        true
    }

    /// Look up a single property
    ///
    /// `Ok(None)` means the source does not define the key.
    fn get(&self, key: &str) -> SourceResult<Option<String>>;

    /// Names of every property this source defines
    fn property_names(&self) -> SourceResult<Vec<String>>;

    /// Check if this source defines a key, treating failures as absence
    fn has(&self, key: &str) -> bool {
        matches!(self.get(key), Ok(Some(_)))
    }
}

/// Type alias for an Arc-wrapped source
pub type SharedSource = Arc<dyn PropertySource>;
