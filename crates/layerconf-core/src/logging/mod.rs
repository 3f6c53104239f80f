//! Logging seam for the resolver
//!
//! The resolver never talks to a logging backend directly; it holds a
//! [`SharedLogger`] so hosts can route messages wherever they like.

mod traits;
mod noop;
mod tracing_logger;

pub use traits::{Logger, LoggerExt, SharedLogger};
pub use noop::NoOpLogger;
pub use tracing_logger::TracingLogger;

#[cfg(test)]
pub(crate) use traits::testing::RecordingLogger;
