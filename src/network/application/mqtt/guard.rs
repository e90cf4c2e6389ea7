//! A validating, counting wrapper around an MQTT client's publish call.

use super::sizing::{BufferSize, MAX_BUFFER_SIZE, MQTT_OVERHEAD, SAFETY_MARGIN};
use super::stats::PublishStats;
use crate::network::error::PublishError;
#[cfg(feature = "async")]
use crate::network::AsyncMqttClient;
use crate::network::{ClientState, MqttClient};
use crate::system::output::{self, OutputFn};
use heapless::String;

/// Capacity of the JSON snapshot sent by [`PublishGuard::publish_stats`].
///
/// Large enough for every counter at `u32::MAX`.
pub const STATS_JSON_CAPACITY: usize = 128;

/// Configuration options for a [`PublishGuard`].
///
/// # Examples
///
/// ```rust
/// use safepublish::network::application::mqtt::Options;
///
/// let options = Options {
///     log_success: false,
///     ..Options::default()
/// };
/// assert_eq!(options.overhead_bytes, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Framing bytes added to topic and payload length for the fit check.
    ///
    /// Defaults to [`MQTT_OVERHEAD`].
    pub overhead_bytes: usize,

    /// Headroom added when suggesting or auto-configuring a buffer size.
    ///
    /// Defaults to [`SAFETY_MARGIN`].
    pub safety_margin: usize,

    /// Emit a confirmation line for every successful publish.
    ///
    /// Failures are always reported. Turn this off for chatty telemetry loops.
    pub log_success: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            overhead_bytes: MQTT_OVERHEAD,
            safety_margin: SAFETY_MARGIN,
            log_success: true,
        }
    }
}

/// Guards an MQTT client against silent publish failures.
///
/// The guard borrows the client mutably for its whole lifetime; it never owns
/// or tears down the client. Every publish attempt either increments the
/// success counter or the failure counter, never both, and every attempt is
/// reported through the output function.
///
/// # Type Parameters
///
/// * `M` - The wrapped client, implementing [`MqttClient`] (or
///   [`AsyncMqttClient`](crate::network::AsyncMqttClient) with the `async` feature)
///
/// # Examples
///
/// ```rust
/// use safepublish::network::{ClientState, MqttClient};
/// use safepublish::network::application::mqtt::PublishGuard;
/// # struct Client { buffer: usize, online: bool }
/// # impl ClientState for Client {
/// #     fn connected(&self) -> bool { self.online }
/// #     fn buffer_size(&self) -> usize { self.buffer }
/// #     fn set_buffer_size(&mut self, size: usize) { self.buffer = size; }
/// # }
/// # impl MqttClient for Client {
/// #     fn publish(&mut self, _topic: &str, _payload: &[u8]) -> bool { true }
/// # }
///
/// let mut client = Client { buffer: 512, online: true };
/// let mut guard = PublishGuard::new(&mut client);
///
/// assert!(guard.publish("t", &"x".repeat(100)));
/// assert_eq!(guard.success_count(), 1);
///
/// guard.client_mut().online = false;
/// assert!(!guard.publish("t", "offline"));
/// assert_eq!(guard.fail_count(), 1);
/// ```
#[derive(Debug)]
pub struct PublishGuard<'a, M> {
    client: &'a mut M,
    options: Options,
    stats: PublishStats,
    output_fn: Option<OutputFn>,
}

impl<'a, M> PublishGuard<'a, M> {
    /// Wrap `client` with default [`Options`] and no output function.
    pub fn new(client: &'a mut M) -> Self {
        Self::with_options(client, Options::default())
    }

    /// Wrap `client` with explicit options.
    pub fn with_options(client: &'a mut M, options: Options) -> Self {
        Self {
            client,
            options,
            stats: PublishStats::default(),
            output_fn: None,
        }
    }

    /// Set the function that receives diagnostic lines.
    ///
    /// Each call receives one complete line ending in `"\r\n"`. Without an
    /// output function the guard still counts, but reports nothing.
    pub fn set_output_function(&mut self, output_fn: OutputFn) {
        self.output_fn = Some(output_fn);
    }

    /// The options this guard was created with.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The wrapped client.
    pub fn client(&self) -> &M {
        &*self.client
    }

    /// The wrapped client, mutably.
    pub fn client_mut(&mut self) -> &mut M {
        &mut *self.client
    }

    /// All counters, including the per-kind failure breakdown.
    pub fn stats(&self) -> &PublishStats {
        &self.stats
    }

    /// Number of publishes the client accepted.
    pub fn success_count(&self) -> u32 {
        self.stats.success
    }

    /// Number of publishes that failed for any reason.
    pub fn fail_count(&self) -> u32 {
        self.stats.failed
    }

    /// Zero both counters.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Report the counters, and the failure rate once anything has failed.
    pub fn print_stats(&self) {
        let stats = &self.stats;
        self.line(format_args!("── MQTT Publish Stats ──"));
        self.line(format_args!("  Success: {}", stats.success));
        self.line(format_args!("  Failed:  {}", stats.failed));
        if let Some(rate) = stats.failure_rate() {
            self.line(format_args!("  {:.1}% failure rate", rate));
            self.line(format_args!(
                "  (oversize {}, disconnected {}, rejected {})",
                stats.oversize, stats.disconnected, stats.rejected
            ));
        }
    }

    fn line(&self, args: core::fmt::Arguments<'_>) {
        output::emit(self.output_fn, args);
    }

    fn message_size(&self, topic_len: usize, payload_len: usize) -> usize {
        topic_len
            .saturating_add(payload_len)
            .saturating_add(self.options.overhead_bytes)
    }

    fn size_check(
        &self,
        topic_len: usize,
        payload_len: usize,
        buffer: usize,
    ) -> Result<usize, PublishError> {
        let total = self.message_size(topic_len, payload_len);
        if total > buffer {
            return Err(PublishError::Oversize { total, buffer });
        }
        Ok(total)
    }

    /// Run the pre-flight size check, recording and reporting an oversize message.
    fn admit(
        &mut self,
        topic: &str,
        payload_len: usize,
        buffer: usize,
    ) -> Result<usize, PublishError> {
        let result = self.size_check(topic.len(), payload_len, buffer);
        if let Err(error) = &result {
            self.report_oversize(topic, payload_len, error);
            self.stats.record_failure(error);
        }
        result
    }

    fn reject_disconnected(&mut self, topic: &str) -> PublishError {
        let error = PublishError::Disconnected;
        self.line(format_args!(
            "[MQTT] Publish failed: not connected (topic={})",
            topic
        ));
        #[cfg(feature = "defmt")]
        defmt::warn!("publish to {=str} failed: not connected", topic);
        self.stats.record_failure(&error);
        error
    }

    /// Record the client's verdict on a publish that passed the checks.
    fn settle(
        &mut self,
        topic: &str,
        payload_len: usize,
        total: usize,
        buffer: usize,
        sent: bool,
    ) -> Result<(), PublishError> {
        if sent {
            self.stats.record_success();
            if self.options.log_success {
                self.line(format_args!(
                    "[MQTT] Published: {} ({} bytes)",
                    topic, payload_len
                ));
            }
            #[cfg(feature = "defmt")]
            defmt::debug!("published {=str} ({=usize} bytes)", topic, payload_len);
            return Ok(());
        }

        let error = PublishError::Rejected { total, buffer };
        self.line(format_args!(
            "[MQTT] Failed: {} ({} bytes, buffer={})",
            topic, total, buffer
        ));
        #[cfg(feature = "defmt")]
        defmt::error!(
            "publish to {=str} rejected by client ({=usize} bytes, buffer {=usize})",
            topic,
            total,
            buffer
        );
        self.stats.record_failure(&error);
        Err(error)
    }

    fn report_oversize(&self, topic: &str, payload_len: usize, error: &PublishError) {
        let PublishError::Oversize { total, buffer } = *error else {
            return;
        };
        let suggestion =
            BufferSize::for_needed(total.saturating_add(self.options.safety_margin));

        #[cfg(feature = "defmt")]
        defmt::warn!(
            "publish to {=str} blocked: {=usize} bytes exceeds {=usize} byte buffer",
            topic,
            total,
            buffer
        );

        self.line(format_args!(""));
        self.line(format_args!("╔══════════════════════════════════════════╗"));
        self.line(format_args!("║  MQTT BUFFER OVERFLOW DETECTED           ║"));
        self.line(format_args!("╚══════════════════════════════════════════╝"));
        self.line(format_args!("  Topic:      {} ({} bytes)", topic, topic.len()));
        self.line(format_args!("  Payload:    {} bytes", payload_len));
        self.line(format_args!("  Total:      {} bytes", total));
        self.line(format_args!("  Buffer:     {} bytes", buffer));
        self.line(format_args!(
            "  Overflow:   {} bytes over limit!",
            total.saturating_sub(buffer)
        ));
        self.line(format_args!(""));
        self.line(format_args!("  FIX: call this during setup:"));
        self.line(format_args!("  client.set_buffer_size({});", suggestion.size));
        if suggestion.is_capped() {
            self.line(format_args!(
                "  NOTE: {} bytes is above the {} byte maximum; shorten the topic or split the payload",
                suggestion.needed, MAX_BUFFER_SIZE
            ));
        }
        self.line(format_args!(""));
    }
}

impl<M: ClientState> PublishGuard<'_, M> {
    /// Check whether a message of the given lengths fits the client's buffer.
    ///
    /// Returns the total size including framing overhead. Nothing is counted
    /// or reported.
    pub fn check_fit(&self, topic_len: usize, payload_len: usize) -> Result<usize, PublishError> {
        self.size_check(topic_len, payload_len, self.client.buffer_size())
    }

    /// Size the client's buffer for the largest message you expect to send.
    ///
    /// Computes `max_topic_len + max_payload_len + overhead + safety margin`,
    /// rounds it up with [`next_power_of_two`](super::sizing::next_power_of_two),
    /// applies it to the client and returns it. Call this during setup, before
    /// publishing; calling it later simply resizes the buffer for subsequent
    /// publishes.
    ///
    /// Requirements above [`MAX_BUFFER_SIZE`] still configure the maximum, but a
    /// warning is reported since matching messages will be rejected.
    pub fn auto_configure_buffer(
        &mut self,
        max_topic_len: usize,
        max_payload_len: usize,
    ) -> usize {
        let needed = max_topic_len
            .saturating_add(max_payload_len)
            .saturating_add(self.options.overhead_bytes)
            .saturating_add(self.options.safety_margin);
        let sizing = BufferSize::for_needed(needed);
        self.client.set_buffer_size(sizing.size);

        self.line(format_args!(
            "[MQTT] Buffer auto-configured: {} bytes (needed {})",
            sizing.size, sizing.needed
        ));
        #[cfg(feature = "defmt")]
        defmt::info!(
            "buffer auto-configured: {=usize} bytes (needed {=usize})",
            sizing.size,
            sizing.needed
        );

        if sizing.is_capped() {
            self.line(format_args!(
                "[MQTT] WARNING: needed {} bytes exceeds the {} byte maximum; larger messages will be rejected",
                sizing.needed, MAX_BUFFER_SIZE
            ));
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "buffer requirement {=usize} capped at {=usize}",
                sizing.needed,
                MAX_BUFFER_SIZE
            );
        }

        sizing.size
    }
}

impl<M: MqttClient> PublishGuard<'_, M> {
    /// Publish a text payload, returning whether it was sent.
    ///
    /// 1. Messages larger than the client's buffer are rejected without calling
    ///    the client, with a report suggesting a buffer size that would fit.
    /// 2. Publishing while disconnected is rejected.
    /// 3. Otherwise the client's verdict is recorded and reported.
    ///
    /// Use [`try_publish`](Self::try_publish) to learn which of these happened.
    pub fn publish(&mut self, topic: &str, payload: &str) -> bool {
        self.try_publish(topic, payload.as_bytes()).is_ok()
    }

    /// Publish owned fixed-capacity strings.
    ///
    /// Forwards to [`publish`](Self::publish) unchanged.
    pub fn publish_string<const T: usize, const P: usize>(
        &mut self,
        topic: &String<T>,
        payload: &String<P>,
    ) -> bool {
        self.publish(topic.as_str(), payload.as_str())
    }

    /// Publish a binary payload, returning whether it was sent.
    pub fn publish_bytes(&mut self, topic: &str, payload: &[u8]) -> bool {
        self.try_publish(topic, payload).is_ok()
    }

    /// Publish a payload, returning the failure kind on error.
    ///
    /// Counting and reporting are identical to [`publish`](Self::publish).
    ///
    /// # Errors
    ///
    /// * [`PublishError::Oversize`] - Topic, payload and overhead exceed the buffer
    /// * [`PublishError::Disconnected`] - The client is not connected
    /// * [`PublishError::Rejected`] - The client's publish returned `false`
    pub fn try_publish(&mut self, topic: &str, payload: &[u8]) -> Result<(), PublishError> {
        let buffer = self.client.buffer_size();
        let total = self.admit(topic, payload.len(), buffer)?;

        if !self.client.connected() {
            return Err(self.reject_disconnected(topic));
        }

        let sent = self.client.publish(topic, payload);
        self.settle(topic, payload.len(), total, buffer, sent)
    }

    /// Publish the current [`PublishStats`] as JSON on `topic`.
    ///
    /// The snapshot is taken before the attempt, so it does not include the
    /// attempt itself. The publish goes through the same checks and counters
    /// as any other.
    pub fn publish_stats(&mut self, topic: &str) -> bool {
        self.publish_stats_with::<STATS_JSON_CAPACITY>(topic)
    }

    /// [`publish_stats`](Self::publish_stats) with a snapshot capacity of `N` bytes.
    ///
    /// A snapshot that does not fit in `N` bytes is counted as an oversize
    /// failure. Its `total` is reported as `N + 1`, the smallest size that
    /// cannot fit.
    pub fn publish_stats_with<const N: usize>(&mut self, topic: &str) -> bool {
        let json = match self.stats.to_json::<N>() {
            Ok(json) => json,
            Err(_) => {
                let error = PublishError::Oversize {
                    total: N.saturating_add(1),
                    buffer: N,
                };
                self.line(format_args!(
                    "[MQTT] Stats snapshot exceeds {} bytes, not published",
                    N
                ));
                #[cfg(feature = "defmt")]
                defmt::warn!("stats snapshot exceeds {=usize} bytes", N);
                self.stats.record_failure(&error);
                return false;
            }
        };
        self.publish(topic, &json)
    }
}

#[cfg(feature = "async")]
impl<M: AsyncMqttClient> PublishGuard<'_, M> {
    /// Asynchronous [`publish`](Self::publish).
    pub async fn publish_async(&mut self, topic: &str, payload: &str) -> bool {
        self.try_publish_async(topic, payload.as_bytes()).await.is_ok()
    }

    /// Asynchronous [`try_publish`](Self::try_publish).
    ///
    /// Only the client's publish call is awaited; the checks run synchronously.
    pub async fn try_publish_async(
        &mut self,
        topic: &str,
        payload: &[u8],
    ) -> Result<(), PublishError> {
        let buffer = self.client.buffer_size();
        let total = self.admit(topic, payload.len(), buffer)?;

        if !self.client.connected() {
            return Err(self.reject_disconnected(topic));
        }

        let sent = self.client.publish(topic, payload).await;
        self.settle(topic, payload.len(), total, buffer, sent)
    }
}
