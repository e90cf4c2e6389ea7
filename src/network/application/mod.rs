//! # Application Layer Wrappers
//!
//! This module contains wrappers that sit on top of application layer (OSI Layer 7)
//! protocol clients. The wrappers do not implement the protocols themselves; they
//! add validation and accounting around clients supplied by the firmware.
//!
//! ## Available Wrappers
//!
//! - **[`mqtt`]**: Publish guard for MQTT clients with fixed-size transmit buffers
//!
//! ## Design Principles
//!
//! - **Client Agnostic**: Work with any type implementing [`MqttClient`](crate::network::MqttClient)
//! - **No-std Compatible**: No heap allocation; diagnostics use fixed-size buffers
//! - **Fail Loud, Fail Safe**: Every rejected call is reported, none panics

/// Guarded MQTT publishing.
///
/// Provides [`PublishGuard`](mqtt::PublishGuard), buffer sizing helpers and
/// publish statistics.
pub mod mqtt;
