//! Failure kinds for guarded publishing

use core::fmt;

/// Why a guarded publish did not go through.
///
/// Every variant increments the guard's shared failure counter. The variant
/// itself is only visible through
/// [`try_publish`](crate::network::application::mqtt::PublishGuard::try_publish)
/// and the per-kind counters in
/// [`PublishStats`](crate::network::application::mqtt::stats::PublishStats).
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PublishError {
    /// Topic, payload and framing overhead do not fit the client's buffer.
    ///
    /// The client was never called.
    Oversize {
        /// Topic length + payload length + overhead, in bytes.
        total: usize,
        /// The client's buffer size at the time of the call.
        buffer: usize,
    },
    /// The client reported that it is not connected.
    Disconnected,
    /// The client accepted the call but reported failure.
    Rejected {
        /// Topic length + payload length + overhead, in bytes.
        total: usize,
        /// The client's buffer size at the time of the call.
        buffer: usize,
    },
}

impl PublishError {
    /// Number of bytes over the limit, for [`PublishError::Oversize`].
    pub fn overflow(&self) -> Option<usize> {
        match *self {
            PublishError::Oversize { total, buffer } => Some(total.saturating_sub(buffer)),
            _ => None,
        }
    }
}

impl fmt::Display for PublishError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PublishError::Oversize { total, buffer } => write!(
                f,
                "message of {} bytes exceeds {} byte buffer by {} bytes",
                total,
                buffer,
                total.saturating_sub(buffer)
            ),
            PublishError::Disconnected => f.write_str("client not connected"),
            PublishError::Rejected { total, buffer } => write!(
                f,
                "client rejected {} byte message (buffer {} bytes)",
                total, buffer
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PublishError {}

#[cfg(feature = "defmt")]
impl defmt::Format for PublishError {
    fn format(&self, f: defmt::Formatter) {
        match *self {
            PublishError::Oversize { total, buffer } => {
                defmt::write!(f, "Oversize {{ total: {}, buffer: {} }}", total, buffer)
            }
            PublishError::Disconnected => defmt::write!(f, "Disconnected"),
            PublishError::Rejected { total, buffer } => {
                defmt::write!(f, "Rejected {{ total: {}, buffer: {} }}", total, buffer)
            }
        }
    }
}
