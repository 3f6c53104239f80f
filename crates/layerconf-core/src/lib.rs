//! layerconf core
//!
//! Layered configuration resolution. A property is looked up across a set of
//! prioritized sources (system properties, environment, servlet init
//! parameters, filter parameters, context parameters, defaults) and the
//! highest-priority definition wins.
//!
//! ```rust
//! use std::sync::Arc;
//! use layerconf_core::{ConfigResolver, MapPropertySource, OptionalProperty, SourceTier};
//!
//! let mut resolver = ConfigResolver::new();
//! resolver.add_source(Arc::new(MapPropertySource::for_tier(
//!     SourceTier::ServletInit,
//!     [("greeting", "init-init")],
//! )));
//! resolver.add_source(Arc::new(MapPropertySource::for_tier(
//!     SourceTier::System,
//!     [("greeting", "system-system")],
//! )));
//!
//! assert_eq!(resolver.resolve("greeting").unwrap().value(), Some("system-system"));
//!
//! let foo = OptionalProperty::new("foo").unwrap();
//! assert_eq!(resolver.inject_optional::<String>(&foo).unwrap(), None);
//! ```

pub mod types;
pub mod sources;
pub mod resolver;
pub mod descriptor;
pub mod context;
pub mod logging;

// Re-export commonly used types
pub use types::{ConfigKey, ConfigValue, ResolvedValue};

pub use sources::{
    PropertySource, SharedSource, SourceError, SourceResult, SourceTier,
    MapPropertySource, EnvPropertySource,
};

pub use resolver::{
    ConfigResolver, RegisteredSource, ConfigError, ConfigResult,
    ConfigProperty, OptionalProperty,
};

pub use descriptor::{DeploymentDescriptor, ComponentDescriptor};

pub use context::ApplicationContext;

pub use logging::{Logger, SharedLogger, NoOpLogger, TracingLogger};
