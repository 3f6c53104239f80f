//! Core types shared by sources and the resolver

mod key;
mod value;

pub use key::ConfigKey;
pub use value::{ConfigValue, ResolvedValue};
