//! The growable buffer and its standing instantiations.
//!
//! - [`GrowableBuffer`] - Owned element block with separate size and capacity
//! - [`ByteBuffer`], [`CharBuffer`], [`WideBuffer`] - byte, narrow and wide
//!   character buffers
//! - [`TCharBuffer`] - narrow or wide, selected by the `unicode` feature

mod growable;
mod text;

pub use growable::GrowableBuffer;

use crate::element::WideChar;

/// A buffer of bytes.
pub type ByteBuffer = GrowableBuffer<u8>;

/// Shorthand for [`ByteBuffer`].
pub type Buffer = ByteBuffer;

/// A buffer of narrow characters.
pub type CharBuffer = GrowableBuffer<std::ffi::c_char>;

/// A buffer of wide characters.
pub type WideBuffer = GrowableBuffer<WideChar>;

/// The character buffer of the configured text width.
#[cfg(feature = "unicode")]
pub type TCharBuffer = WideBuffer;

/// The character buffer of the configured text width.
#[cfg(not(feature = "unicode"))]
pub type TCharBuffer = CharBuffer;
