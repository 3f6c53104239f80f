//! Logger backed by the `tracing` crate

use super::traits::Logger;

/// Default logger: forwards every message to `tracing` under one target
///
/// Install any `tracing` subscriber in the host to see the output; without one
/// the events are dropped.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    component: String,
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl TracingLogger {
    /// Create a logger tagged with the default component name
    pub fn new() -> Self {
        Self {
            component: "resolver".to_string(),
        }
    }

    /// Create a logger tagged with a custom component name
    pub fn with_component(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
        }
    }

    pub fn component(&self) -> &str {
        &self.component
    }
}

impl Logger for TracingLogger {
    fn debug(&self, message: &str) {
        tracing::debug!(target: "layerconf", component = %self.component, "{}", message);
    }

    fn info(&self, message: &str) {
        tracing::info!(target: "layerconf", component = %self.component, "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "layerconf", component = %self.component, "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "layerconf", component = %self.component, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_logger_creation() {
        assert_eq!(TracingLogger::new().component(), "resolver");
        assert_eq!(TracingLogger::with_component("descriptor").component(), "descriptor");
    }

    #[test]
    fn test_tracing_logger_without_subscriber() {
        let logger = TracingLogger::default();
        logger.debug("debug message");
        logger.info("info message");
        logger.warn("warn message");
        logger.error("error message");
    }
}
