//! Structured logging routed to the host console.
//!
//! Code throughout the crate logs with `tracing` macros. Where those records
//! end up depends on the target:
//!
//! ```text
//! wasm32:  tracing macros → log bridge → console_log → console.log / console.warn
//! native:  tracing macros → EnvFilter → tracing-subscriber fmt layer → stderr
//! ```
//!
//! # Configuration
//!
//! Trace level is controlled via the `trace_level` option of [`Config`](crate::Config).
//! Native builds accept any `EnvFilter` directive (`debug`, `jitters=trace`, ...).
//! In the browser only a bare level is honored; anything else falls back to the default.
//! Default: `"info"`
//!
//! # Usage
//!
//! ```rust
//! use jitters::observability::init_tracing;
//! use jitters::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("widget initialized");
//! ```

mod init;

pub use init::{init_tracing, DEFAULT_TRACE_LEVEL};
