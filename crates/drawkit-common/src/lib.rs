//! # Drawkit Common
//!
//! Shared utilities for the Drawkit crates: logging configuration and
//! setup built on `tracing`.

pub mod logging;

pub use logging::{init_logging, LogConfig, LogFormat};
