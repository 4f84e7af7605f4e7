//! growbuf
//!
//! Exclusively-owned growable memory buffers for Rust.
//!
//! `growbuf` provides [`GrowableBuffer`], a value type owning a contiguous
//! block of elements. It tracks a logical size separately from the allocated
//! capacity and grows according to an explicit [`GrowthPolicy`]. It is meant
//! as a building block for:
//!
//! - byte staging areas fed by a reader and drained from the front
//! - narrow and wide character scratch buffers
//! - formatted, length-bounded text
//!
//! The crate intentionally:
//! - does NOT synchronize access
//! - does NOT share storage between buffers
//! - does NOT perform I/O or serialization
//!
//! # Example
//!
//! ```
//! use growbuf::{ByteBuffer, GrowableBuffer};
//!
//! fn main() -> Result<(), growbuf::BufferError> {
//!     // bytes arriving in pieces
//!     let mut staging = GrowableBuffer::<u8, 4096>::new();
//!     staging.append_slice(b"HEAD")?;
//!     staging.append_slice(b"payload")?;
//!
//!     // consume the header, keep the rest
//!     staging.drain_front(4);
//!     assert_eq!(staging.as_slice(), b"payload");
//!
//!     // deep copy into an exact-fit buffer
//!     let copy = ByteBuffer::from_buffer(&staging)?;
//!     assert_eq!(copy, staging);
//!     assert_eq!(copy.capacity(), copy.size());
//!     Ok(())
//! }
//! ```
//!
//! # Text
//!
//! ```
//! use growbuf::{fmt_buffer, TCharBuffer};
//!
//! let name: TCharBuffer = fmt_buffer!(32, "worker-{}", 3)?;
//! assert_eq!(name.text(), "worker-3");
//! # Ok::<(), growbuf::BufferError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod buffer;
mod config;
mod element;
mod error;

mod util; // internal (bounded formatting)

//
// Public surface (intentionally tiny)
//

pub use buffer::{Buffer, ByteBuffer, CharBuffer, GrowableBuffer, TCharBuffer, WideBuffer};
pub use config::GrowthPolicy;
pub use element::{CharElement, Element, WideChar};
pub use error::BufferError;
