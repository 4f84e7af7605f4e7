//! Element types a [`GrowableBuffer`](crate::GrowableBuffer) can hold.
//!
//! - [`Element`] - plain copyable values with an all-zero representation
//! - [`CharElement`] - code units that text can be encoded into
//!
//! The standing instantiations are byte (`u8`), narrow character
//! ([`c_char`](std::ffi::c_char)) and wide character ([`WideChar`]).

/// Wide character code unit of the target platform.
///
/// UTF-16 on Windows, UTF-32 everywhere else.
#[cfg(windows)]
pub type WideChar = u16;

/// Wide character code unit of the target platform.
///
/// UTF-16 on Windows, UTF-32 everywhere else.
#[cfg(not(windows))]
pub type WideChar = u32;

/// A value that can be stored in a growable buffer.
///
/// Elements are copied bit-for-bit and must have a zero value, which is what
/// zero-filling writes into the logical region. Equality must coincide with
/// bitwise equality, so only integer types qualify.
pub trait Element: Copy + Eq + 'static {
    /// The all-zero value.
    const ZERO: Self;
}

/// A character code unit usable for formatted construction.
pub trait CharElement: Element {
    /// The string terminator.
    const NUL: Self = Self::ZERO;

    /// Number of code units `c` encodes to.
    fn width(c: char) -> usize;

    /// Appends the encoding of `c` to `out`.
    fn encode(c: char, out: &mut Vec<Self>);

    /// Decodes `units` into a string, replacing invalid sequences.
    fn decode_lossy(units: &[Self]) -> String;
}

macro_rules! impl_element {
    ($($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                const ZERO: Self = 0 as $t;
            }
        )*
    };
}

impl_element!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize);

impl CharElement for u8 {
    fn width(c: char) -> usize {
        c.len_utf8()
    }

    fn encode(c: char, out: &mut Vec<Self>) {
        let mut tmp = [0u8; 4];
        out.extend_from_slice(c.encode_utf8(&mut tmp).as_bytes());
    }

    fn decode_lossy(units: &[Self]) -> String {
        String::from_utf8_lossy(units).into_owned()
    }
}

impl CharElement for i8 {
    fn width(c: char) -> usize {
        c.len_utf8()
    }

    fn encode(c: char, out: &mut Vec<Self>) {
        let mut tmp = [0u8; 4];
        out.extend(c.encode_utf8(&mut tmp).bytes().map(|b| b as i8));
    }

    fn decode_lossy(units: &[Self]) -> String {
        let bytes: Vec<u8> = units.iter().map(|&u| u as u8).collect();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl CharElement for u16 {
    fn width(c: char) -> usize {
        c.len_utf16()
    }

    fn encode(c: char, out: &mut Vec<Self>) {
        let mut tmp = [0u16; 2];
        out.extend_from_slice(c.encode_utf16(&mut tmp));
    }

    fn decode_lossy(units: &[Self]) -> String {
        String::from_utf16_lossy(units)
    }
}

impl CharElement for u32 {
    fn width(_c: char) -> usize {
        1
    }

    fn encode(c: char, out: &mut Vec<Self>) {
        out.push(c as u32);
    }

    fn decode_lossy(units: &[Self]) -> String {
        units
            .iter()
            .map(|&u| char::from_u32(u).unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }
}
