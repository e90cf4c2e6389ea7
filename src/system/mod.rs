//! System utilities for embedded devices.
//!
//! This module provides the system-level plumbing the publish guard relies on.
//! It is `no_std` compatible and performs no heap allocation.
//!
//! # Available Utilities
//!
//! - **[`output`]**: Line-oriented diagnostic output through a caller-supplied function
//!
//! # Usage
//!
//! ```rust,no_run
//! use safepublish::system::output::OutputFn;
//!
//! // Route diagnostics to a UART, RTT channel or stdout
//! let uart: OutputFn = |text| {
//!     print!("{}", text);
//! };
//! ```

/// Diagnostic output sink.
///
/// Defines the [`OutputFn`](output::OutputFn) callback type and a bounded line
/// formatter that never allocates.
pub mod output;
