//! Transmit buffer sizing.
//!
//! Buffers are sized in powers of two between [`MIN_BUFFER_SIZE`] and
//! [`MAX_BUFFER_SIZE`]. Requirements above the ceiling cannot be met; instead of
//! silently returning the ceiling, [`BufferSize`] records the original
//! requirement so callers can tell the result is too small.

/// Fixed MQTT framing bytes added to topic and payload length for the fit check.
pub const MQTT_OVERHEAD: usize = 10;

/// Headroom added when suggesting or auto-configuring a buffer size.
pub const SAFETY_MARGIN: usize = 50;

/// Smallest buffer size ever suggested.
pub const MIN_BUFFER_SIZE: usize = 128;

/// Largest buffer size ever suggested.
pub const MAX_BUFFER_SIZE: usize = 8192;

/// Smallest power of two in `[MIN_BUFFER_SIZE, MAX_BUFFER_SIZE]` that is at least `n`.
///
/// Returns [`MAX_BUFFER_SIZE`] for any `n` above it. Use
/// [`BufferSize::for_needed`] when the caller must know whether that happened.
///
/// # Examples
///
/// ```rust
/// use safepublish::network::application::mqtt::sizing::next_power_of_two;
///
/// assert_eq!(next_power_of_two(0), 128);
/// assert_eq!(next_power_of_two(1110), 2048);
/// assert_eq!(next_power_of_two(21060), 8192);
/// ```
pub fn next_power_of_two(n: usize) -> usize {
    let mut size = MIN_BUFFER_SIZE;
    while size < n && size < MAX_BUFFER_SIZE {
        size *= 2;
    }
    size
}

/// A buffer size chosen for a requirement of `needed` bytes.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct BufferSize {
    /// The chosen size.
    pub size: usize,
    /// The requirement the size was chosen for.
    pub needed: usize,
}

impl BufferSize {
    /// Size a buffer for `needed` bytes using [`next_power_of_two`].
    pub fn for_needed(needed: usize) -> Self {
        Self {
            size: next_power_of_two(needed),
            needed,
        }
    }

    /// Size a buffer for the largest expected message.
    ///
    /// Adds [`MQTT_OVERHEAD`] and [`SAFETY_MARGIN`] to the topic and payload lengths.
    /// These are the default values; a guard created with custom
    /// [`Options`](super::Options) sizes its buffer from those instead, so
    /// use [`PublishGuard::auto_configure_buffer`](super::PublishGuard::auto_configure_buffer)
    /// when the options differ.
    pub fn for_message(max_topic_len: usize, max_payload_len: usize) -> Self {
        Self::for_needed(
            max_topic_len
                .saturating_add(max_payload_len)
                .saturating_add(MQTT_OVERHEAD)
                .saturating_add(SAFETY_MARGIN),
        )
    }

    /// `true` when the requirement exceeds [`MAX_BUFFER_SIZE`] and `size` is too small.
    pub fn is_capped(&self) -> bool {
        self.needed > self.size
    }
}
