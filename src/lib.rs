//! # safepublish - Guarded MQTT publishing
//!
//! Many embedded MQTT clients keep a single fixed-size transmit buffer. When the
//! topic plus payload plus protocol framing does not fit, their `publish` call simply
//! returns `false` with no hint about why. This crate wraps such a client in a
//! [`PublishGuard`](network::application::mqtt::PublishGuard) that checks the size
//! *before* the call, reports exactly how far over the limit a message is, suggests
//! a buffer size that would fit, and keeps success/failure statistics.
//!
//! ## Features
//!
//! ### Publish Guard
//! - **Pre-flight size check**: oversize messages never reach the client
//! - **Tagged failures**: oversize, disconnected, and rejected publishes are distinguishable
//! - **Buffer sizing**: power-of-two sizing between 128 and 8192 bytes
//! - **Statistics**: success/failure counters with a JSON snapshot
//!
//! ### Diagnostics
//! - Line-oriented output through a caller-supplied function (UART, RTT, stdout)
//! - Optional `defmt` logging
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! safepublish = "0.1.0"
//! ```
//!
//! ### Basic Example
//!
//! ```rust
//! use safepublish::network::{ClientState, MqttClient};
//! use safepublish::network::application::mqtt::PublishGuard;
//!
//! struct Radio {
//!     buffer: usize,
//! }
//!
//! impl ClientState for Radio {
//!     fn connected(&self) -> bool { true }
//!     fn buffer_size(&self) -> usize { self.buffer }
//!     fn set_buffer_size(&mut self, size: usize) { self.buffer = size; }
//! }
//!
//! impl MqttClient for Radio {
//!     fn publish(&mut self, _topic: &str, _payload: &[u8]) -> bool { true }
//! }
//!
//! let mut radio = Radio { buffer: 256 };
//! let mut guard = PublishGuard::new(&mut radio);
//! guard.set_output_function(|line| print!("{}", line));
//!
//! guard.auto_configure_buffer(32, 900);
//! assert!(guard.publish("sensors/temperature", "23.5"));
//! assert_eq!(guard.success_count(), 1);
//! ```
//!
//! ## Platform Support
//!
//! This library is designed to work on:
//! - Embedded microcontrollers (ARM Cortex-M, RISC-V, Xtensa)
//! - Linux-based IoT devices
//! - Any platform supporting Rust's `core` library
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (default: disabled)
//! - `async`: Enable async publishing over [`AsyncMqttClient`](network::AsyncMqttClient)
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

/// MQTT client capability traits and the guarded publish layer.
///
/// The client itself is not implemented here; any type implementing
/// [`MqttClient`](network::MqttClient) can be wrapped.
pub mod network;

/// System utilities shared by the guard.
///
/// Currently the diagnostic output sink and its line formatter.
pub mod system;
