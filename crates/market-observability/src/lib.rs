//! Observability for the marketplace tools.
//!
//! This crate provides:
//! - `RequestId` - Unique identifier correlating the logs of one invocation
//! - `StructuredLogger` - Structured logging with request context
//! - `SearchMetrics` - Timing and outcome of a single search

mod logging;
mod metrics;
mod request_id;

pub use logging::*;
pub use metrics::*;
pub use request_id::RequestId;
