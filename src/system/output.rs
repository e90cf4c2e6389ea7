//! Line-oriented diagnostic output.
//!
//! Diagnostics are handed to an [`OutputFn`] one complete line at a time, each
//! terminated by `"\r\n"` so they can go straight to a serial console. Lines are
//! formatted into a fixed [`LINE_CAPACITY`] buffer; anything that does not fit is
//! cut off and marked with `...` instead of failing.

use core::fmt::{self, Write};
use heapless::String;

/// Maximum length of one output line, including the line terminator.
pub const LINE_CAPACITY: usize = 160;

const TRUNCATION_MARKER: &str = "...";
const LINE_END: &str = "\r\n";

/// Function signature for output handlers.
///
/// Output handlers receive diagnostic text and are responsible for
/// displaying it through the appropriate mechanism (UART, RTT, LCD, stdout).
///
/// # Examples
///
/// ```rust
/// use safepublish::system::output::OutputFn;
///
/// let uart_output: OutputFn = |text| {
///     // Send text to UART
///     print!("{}", text);
/// };
/// ```
pub type OutputFn = fn(&str);

/// Writes text to standard output.
#[cfg(feature = "std")]
pub fn stdout(text: &str) {
    std::print!("{}", text);
}

/// A single bounded output line.
///
/// # Examples
///
/// ```rust
/// use safepublish::system::output::Line;
///
/// let line = Line::format(format_args!("buffer: {} bytes", 256));
/// assert_eq!(line.as_str(), "buffer: 256 bytes\r\n");
/// assert!(!line.is_truncated());
/// ```
#[derive(Debug, Default)]
pub struct Line {
    buf: String<LINE_CAPACITY>,
    truncated: bool,
}

impl Line {
    /// Format `args` into a terminated line.
    pub fn format(args: fmt::Arguments<'_>) -> Self {
        let mut line = Self::default();
        // `write_str` below never reports an error
        let _ = line.write_fmt(args);
        line.terminate();
        line
    }

    /// An empty line (just the terminator).
    pub fn blank() -> Self {
        Self::format(format_args!(""))
    }

    /// The formatted text, including the terminator.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Whether text was dropped to fit [`LINE_CAPACITY`].
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    fn terminate(&mut self) {
        // Room for both is reserved by `write_str`.
        if self.truncated {
            let _ = self.buf.push_str(TRUNCATION_MARKER);
        }
        let _ = self.buf.push_str(LINE_END);
    }
}

impl Write for Line {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let limit = LINE_CAPACITY - TRUNCATION_MARKER.len() - LINE_END.len();
        for c in s.chars() {
            if self.truncated || self.buf.len() + c.len_utf8() > limit {
                self.truncated = true;
                break;
            }
            let _ = self.buf.push(c);
        }
        Ok(())
    }
}

/// Send one formatted line to `output`, if an output function is set.
pub(crate) fn emit(output: Option<OutputFn>, args: fmt::Arguments<'_>) {
    if let Some(output_fn) = output {
        output_fn(Line::format(args).as_str());
    }
}
