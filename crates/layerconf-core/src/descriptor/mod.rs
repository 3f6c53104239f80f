//! Deployment descriptors
//!
//! A YAML document declaring the context parameters, filters, and servlets
//! of an application, turned into property sources for the resolver.

mod file;

pub use file::{ComponentDescriptor, DeploymentDescriptor};
