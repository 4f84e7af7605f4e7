//! Formatted construction for character buffers.

use std::fmt;

use tracing::trace;

use super::GrowableBuffer;
use crate::element::CharElement;
use crate::error::BufferError;
use crate::util::BoundedWriter;

impl<T: CharElement, const CACHE: usize> GrowableBuffer<T, CACHE> {
    /// Renders `args` into a NUL-terminated buffer of at most `max_len`
    /// elements.
    ///
    /// The text keeps at most `max_len - 1` code units so the terminator
    /// always fits; longer output is cut at the last whole character that
    /// fits. Truncation is not an error. With `max_len == 0` the buffer holds
    /// only the terminator.
    ///
    /// The [`fmt_buffer!`](crate::fmt_buffer) macro wraps this with
    /// `format_args!`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::OutOfMemory`] if the storage cannot be
    /// allocated.
    ///
    /// # Example
    ///
    /// ```
    /// use growbuf::CharBuffer;
    ///
    /// let buf = CharBuffer::from_fmt(10, format_args!("{}", 42))?;
    /// assert_eq!(buf.size(), 3);
    /// assert_eq!(buf.text(), "42");
    ///
    /// let buf = CharBuffer::from_fmt(4, format_args!("{}", "truncated"))?;
    /// assert_eq!(buf.text(), "tru");
    /// # Ok::<(), growbuf::BufferError>(())
    /// ```
    pub fn from_fmt(max_len: usize, args: fmt::Arguments<'_>) -> Result<Self, BufferError> {
        let mut writer = BoundedWriter::<T>::new(max_len.saturating_sub(1));
        // The writer itself never fails; an erroring Display impl just ends
        // the text where it stopped.
        let _ = fmt::write(&mut writer, args);
        if writer.truncated() {
            trace!(max_len, "formatted text truncated");
        }

        let mut units = writer.into_units();
        units.push(T::NUL);
        Self::from_slice(&units)
    }

    /// Decodes the logical content up to the first NUL, replacing invalid
    /// sequences.
    pub fn text(&self) -> String {
        let units = self.as_slice();
        let end = units.iter().position(|&u| u == T::NUL).unwrap_or(units.len());
        T::decode_lossy(&units[..end])
    }
}

/// Creates a character buffer from a format string, bounded to a maximum
/// length including the terminator.
///
/// Expands to [`GrowableBuffer::from_fmt`]; the element type comes from the
/// surrounding context.
///
/// # Example
///
/// ```
/// use growbuf::{fmt_buffer, WideBuffer};
///
/// let buf: WideBuffer = fmt_buffer!(16, "{}-{}", "id", 7)?;
/// assert_eq!(buf.text(), "id-7");
/// assert_eq!(buf.size(), 5);
/// # Ok::<(), growbuf::BufferError>(())
/// ```
#[macro_export]
macro_rules! fmt_buffer {
    ($max_len:expr, $($arg:tt)+) => {
        $crate::GrowableBuffer::from_fmt($max_len, ::std::format_args!($($arg)+))
    };
}
