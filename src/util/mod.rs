//! Internal utility functions and helpers.
//!
//! This module contains small helpers used throughout the crate.
//! It is an implementation detail and not part of the public API.

use std::fmt;

use crate::element::CharElement;

/// A `fmt::Write` sink that stores at most `limit` code units.
///
/// Characters are encoded whole; the first character that does not fit ends
/// the output and everything after it is discarded. Writing never fails, so
/// truncation is silent.
pub(crate) struct BoundedWriter<T> {
    units: Vec<T>,
    limit: usize,
    truncated: bool,
}

impl<T: CharElement> BoundedWriter<T> {
    /// Creates a writer holding at most `limit` code units.
    pub(crate) fn new(limit: usize) -> Self {
        Self {
            units: Vec::new(),
            limit,
            truncated: false,
        }
    }

    /// Returns true if some output was discarded.
    pub(crate) fn truncated(&self) -> bool {
        self.truncated
    }

    /// Consumes the writer and returns the rendered units.
    pub(crate) fn into_units(self) -> Vec<T> {
        self.units
    }
}

impl<T: CharElement> fmt::Write for BoundedWriter<T> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Ok(());
        }

        for c in s.chars() {
            if self.units.len() + T::width(c) > self.limit {
                self.truncated = true;
                break;
            }
            T::encode(c, &mut self.units);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Write;

    #[test]
    fn test_fits() {
        let mut w = BoundedWriter::<u8>::new(10);
        write!(w, "{}", 42).unwrap();
        assert!(!w.truncated());
        assert_eq!(w.into_units(), b"42");
    }

    #[test]
    fn test_truncates() {
        let mut w = BoundedWriter::<u8>::new(5);
        write!(w, "{}-{}", "hello", "world").unwrap();
        assert!(w.truncated());
        assert_eq!(w.into_units(), b"hello");
    }

    #[test]
    fn test_stops_at_first_overflow() {
        // 'é' needs two bytes and does not fit, the trailing 'x' must not
        // slip in after it
        let mut w = BoundedWriter::<u8>::new(2);
        write!(w, "aéx").unwrap();
        assert_eq!(w.into_units(), b"a");
    }

    #[test]
    fn test_zero_limit() {
        let mut w = BoundedWriter::<u16>::new(0);
        write!(w, "abc").unwrap();
        assert!(w.truncated());
        assert!(w.into_units().is_empty());
    }
}
