//! One-time configuration initialization for an application context
//!
//! Startup code builds a `ConfigResolver`, registers every source, and hands
//! it to `ApplicationContext::initialize`. From then on request handlers
//! fetch it with `config()`; nothing can register further sources. Shutdown
//! takes the resolver back out, dropping the sources with it.

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::resolver::{ConfigError, ConfigResolver, ConfigResult};

/// Holds the configuration of one deployed application
#[derive(Debug)]
pub struct ApplicationContext {
    name: String,
    config: OnceCell<Arc<ConfigResolver>>,
}

impl ApplicationContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config: OnceCell::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Freeze `resolver` as this context's configuration
    ///
    /// Fails with `AlreadyInitialized` if called twice.
    pub fn initialize(&self, resolver: ConfigResolver) -> ConfigResult<Arc<ConfigResolver>> {
        let shared = Arc::new(resolver);
        self.config
            .set(Arc::clone(&shared))
            .map_err(|_| ConfigError::AlreadyInitialized(self.name.clone()))?;
        Ok(shared)
    }

    pub fn is_initialized(&self) -> bool {
        self.config.get().is_some()
    }

    /// Programmatic access to the configuration
    pub fn config(&self) -> ConfigResult<Arc<ConfigResolver>> {
        self.config
            .get()
            .cloned()
            .ok_or_else(|| ConfigError::NotInitialized(self.name.clone()))
    }

    /// Tear down the configuration, returning it if it was initialized
    pub fn shutdown(&mut self) -> Option<Arc<ConfigResolver>> {
        self.config.take()
    }
}
