//! Tourist Observability
//!
//! Structured logging for the Tourist Guide API:
//!
//! - [`init_tracing`] installs the global subscriber (compact console output,
//!   or JSON lines when `LOG_FORMAT=json`)
//! - [`logging_middleware`] logs every request with an id, matched path,
//!   status and latency
//!
//! # Examples
//!
//! ```no_run
//! use tourist_observability::init_tracing;
//!
//! #[tokio::main]
//! async fn main() {
//!     init_tracing();
//!     // ... application code ...
//! }
//! ```

pub mod logging;

pub use logging::{LogFormat, init_tracing, logging_middleware};
