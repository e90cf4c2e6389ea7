//! Publish statistics.

use crate::network::error::PublishError;
use heapless::String;
use serde::{Deserialize, Serialize};

/// Success and failure counters for a [`PublishGuard`](super::PublishGuard).
///
/// Counters only grow (saturating at `u32::MAX`) until [`reset`](Self::reset).
/// `failed` is always the sum of the three per-kind counters.
///
/// # Examples
///
/// ```rust
/// use safepublish::network::application::mqtt::stats::PublishStats;
///
/// let stats = PublishStats::default();
/// let json = stats.to_json::<128>().unwrap();
/// assert_eq!(
///     json.as_str(),
///     r#"{"success":0,"failed":0,"oversize":0,"disconnected":0,"rejected":0}"#
/// );
/// ```
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct PublishStats {
    /// Publishes the client accepted.
    pub success: u32,
    /// Publishes that failed for any reason.
    pub failed: u32,
    /// Failures caught by the pre-flight size check.
    pub oversize: u32,
    /// Failures because the client was not connected.
    pub disconnected: u32,
    /// Failures reported by the client itself.
    pub rejected: u32,
}

impl PublishStats {
    /// Count one successful publish.
    pub fn record_success(&mut self) {
        self.success = self.success.saturating_add(1);
    }

    /// Count one failed publish of the given kind.
    pub fn record_failure(&mut self, error: &PublishError) {
        self.failed = self.failed.saturating_add(1);
        let kind = match error {
            PublishError::Oversize { .. } => &mut self.oversize,
            PublishError::Disconnected => &mut self.disconnected,
            PublishError::Rejected { .. } => &mut self.rejected,
        };
        *kind = kind.saturating_add(1);
    }

    /// Total number of recorded attempts.
    pub fn attempts(&self) -> u64 {
        u64::from(self.success) + u64::from(self.failed)
    }

    /// Percentage of attempts that failed, or `None` before the first failure.
    pub fn failure_rate(&self) -> Option<f32> {
        if self.failed == 0 {
            return None;
        }
        Some(self.failed as f32 / self.attempts() as f32 * 100.0)
    }

    /// Zero every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Render the counters as a compact JSON object.
    pub fn to_json<const N: usize>(&self) -> Result<String<N>, serde_json_core::ser::Error> {
        serde_json_core::to_string(self)
    }
}
