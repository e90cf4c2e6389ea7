//! Guarded MQTT publishing for clients with fixed-size transmit buffers.
//!
//! Embedded MQTT clients commonly serialize every outgoing PUBLISH into one
//! preallocated buffer. A message that does not fit is dropped and `publish`
//! returns `false`, leaving no trace of why. The [`PublishGuard`] in this module
//! performs the size check up front:
//!
//! ```text
//! topic bytes + payload bytes + 10 bytes framing  >  client buffer  ->  rejected, reported
//! ```
//!
//! # Key Features
//!
//! - Oversize messages are rejected before the client is called
//! - Reports include the overflow and a buffer size that would fit
//! - Disconnected and client-rejected publishes are reported too
//! - Per-kind failure statistics with a JSON snapshot
//! - [`PublishGuard::auto_configure_buffer`] sizes the buffer once at startup
//!
//! # Usage
//!
//! ```rust
//! use safepublish::network::{ClientState, MqttClient};
//! use safepublish::network::application::mqtt::{PublishGuard, PublishError};
//! # struct Client { buffer: usize }
//! # impl ClientState for Client {
//! #     fn connected(&self) -> bool { true }
//! #     fn buffer_size(&self) -> usize { self.buffer }
//! #     fn set_buffer_size(&mut self, size: usize) { self.buffer = size; }
//! # }
//! # impl MqttClient for Client {
//! #     fn publish(&mut self, _topic: &str, _payload: &[u8]) -> bool { true }
//! # }
//!
//! let mut client = Client { buffer: 256 };
//! let mut guard = PublishGuard::new(&mut client);
//!
//! let reading = [b'x'; 300];
//! assert_eq!(
//!     guard.try_publish("a", &reading),
//!     Err(PublishError::Oversize { total: 311, buffer: 256 })
//! );
//! assert_eq!(guard.fail_count(), 1);
//! ```

/// The publish guard and its configuration.
pub mod guard;

/// Buffer sizing constants and the power-of-two sizing rule.
pub mod sizing;

/// Success and failure counters.
pub mod stats;

pub use crate::network::error::PublishError;
pub use guard::{Options, PublishGuard};
pub use sizing::BufferSize;
pub use stats::PublishStats;
