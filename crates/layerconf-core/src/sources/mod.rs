//! Property source abstractions and implementations
//!
//! This module provides:
//! - `PropertySource` trait for implementing custom sources
//! - `SourceTier`, the named priority bands sources are registered under
//! - Built-in implementations: `MapPropertySource`, `EnvPropertySource`

mod traits;
mod map_source;
mod env_source;

pub use traits::{PropertySource, SharedSource, SourceError, SourceResult, SourceTier};
pub use map_source::MapPropertySource;
pub use env_source::EnvPropertySource;
