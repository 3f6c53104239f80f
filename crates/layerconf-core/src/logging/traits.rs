//! Logger trait definition

use std::sync::Arc;

/// Logger abstraction used by the resolver
///
/// Implementations:
/// - `TracingLogger`: forwards to the `tracing` crate (default)
/// - `NoOpLogger`: silent, for tests and embedded hosts
pub trait Logger: Send + Sync {
    /// Log a debug message
    fn debug(&self, message: &str);

    /// Log an info message
    fn info(&self, message: &str);

    /// Log a warning message
    fn warn(&self, message: &str);

    /// Log an error message
    fn error(&self, message: &str);
}

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// Extension trait for logging with format arguments
pub trait LoggerExt: Logger {
    fn debug_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.debug(&args.to_string());
    }

    fn info_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.info(&args.to_string());
    }

    fn warn_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.warn(&args.to_string());
    }

    fn error_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.error(&args.to_string());
    }
}

impl<T: Logger + ?Sized> LoggerExt for T {}


#[cfg(test)]
mod tests {
    use super::testing::RecordingLogger;
    use super::*;

    #[test]
    fn test_logger_ext_formats_arguments() {
        let logger = RecordingLogger::default();
        logger.warn_fmt(format_args!("source {} failed", "env"));
        logger.debug_fmt(format_args!("{} hits", 3));

        assert_eq!(
            logger.lines(),
            vec!["WARN: source env failed".to_string(), "DEBUG: 3 hits".to_string()]
        );
    }

    #[test]
    fn test_shared_logger_is_object_safe() {
        let logger: SharedLogger = Arc::new(RecordingLogger::default());
        logger.info("shared");
    }
}
