//! Capability traits for the MQTT clients the guard can wrap.
//!
//! The guard never speaks MQTT itself. It only needs a small slice of what a
//! typical embedded client offers: a connection flag, the size of its transmit
//! buffer and a way to resize it ([`ClientState`]), plus the publish call
//! ([`MqttClient`]). Both blocking and asynchronous flavours are provided.

#![allow(async_fn_in_trait)]
#![deny(unsafe_code)]

/// Error types for guarded publishing
pub mod error;

/// Application layer protocol wrappers
pub mod application;

/// Re-exports of common traits
pub mod prelude {
    #[cfg(feature = "async")]
    pub use super::AsyncMqttClient;
    pub use super::{ClientState, MqttClient};
    pub use super::error::PublishError;
}

/// Connection and buffer state shared by blocking and async clients.
///
/// Everything the guard needs from a client except the publish call itself.
pub trait ClientState {
    /// Whether the client currently holds a broker session.
    fn connected(&self) -> bool;

    /// Capacity of the transmit buffer in bytes.
    fn buffer_size(&self) -> usize;

    /// Resize the transmit buffer.
    fn set_buffer_size(&mut self, size: usize);
}

/// A blocking MQTT client with a fixed-size transmit buffer.
///
/// Implement this (and [`ClientState`]) for the client your firmware already
/// uses. The guard holds a `&mut` borrow of the implementor for as long as it
/// lives, so the client must outlive the guard.
///
/// # Examples
///
/// ```rust
/// use safepublish::network::{ClientState, MqttClient};
///
/// struct LoopbackClient {
///     buffer: usize,
///     sent: usize,
/// }
///
/// impl ClientState for LoopbackClient {
///     fn connected(&self) -> bool {
///         true
///     }
///
///     fn buffer_size(&self) -> usize {
///         self.buffer
///     }
///
///     fn set_buffer_size(&mut self, size: usize) {
///         self.buffer = size;
///     }
/// }
///
/// impl MqttClient for LoopbackClient {
///     fn publish(&mut self, _topic: &str, _payload: &[u8]) -> bool {
///         self.sent += 1;
///         true
///     }
/// }
/// ```
pub trait MqttClient: ClientState {
    /// Publish `payload` on `topic`.
    ///
    /// Returns `false` on any failure. The reason is opaque to the caller.
    fn publish(&mut self, topic: &str, payload: &[u8]) -> bool;
}

/// An asynchronous MQTT client with a fixed-size transmit buffer.
///
/// Identical to [`MqttClient`] except that publishing may suspend.
#[cfg(feature = "async")]
pub trait AsyncMqttClient: ClientState {
    /// Publish `payload` on `topic` asynchronously.
    async fn publish(&mut self, topic: &str, payload: &[u8]) -> bool;
}
