//! Priority-ordered configuration resolution
//!
//! `ConfigResolver` answers lookups from the highest-priority source that
//! defines a key. `ConfigProperty` and `OptionalProperty` describe typed
//! injection points with optional default values.

mod error;
mod property;
mod config_resolver;

pub use error::{ConfigError, ConfigResult};
pub use property::{ConfigProperty, OptionalProperty};
pub use config_resolver::{ConfigResolver, RegisteredSource};
