//! Decimal printing of signed integers
//!
//! [`print_integer`] writes the base-10 text of an `i32` to a [`CharSink`],
//! one byte at a time:
//!
//! 1. `0` prints as `"0"`.
//! 2. Negative values print `'-'`, then continue with the magnitude.
//! 3. Digits are peeled off with unsigned `% 10` / `/ 10` into a
//!    [`DigitStack`] and written back out most significant first.
//!
//! The magnitude comes from wrapping negation read as `u32`, so
//! `i32::MIN` prints as `-2147483648` rather than overflowing.
//!
//! - [`sink`]: the [`CharSink`] trait and the [`IoSink`] adapter
//! - [`terminal`]: [`MockTerminal`], an in-memory sink
//! - [`digits`]: [`DigitStack`]

pub mod digits;
pub mod sink;
pub mod terminal;

pub use digits::{DigitStack, MAX_DIGITS};
pub use sink::{CharSink, IoSink};
pub use terminal::MockTerminal;

use log::trace;

/// Write the decimal text of `value` to `out`
///
/// Sink errors are returned as-is; bytes written before the failure stay
/// written.
pub fn print_integer<S: CharSink>(value: i32, out: &mut S) -> Result<(), S::Error> {
    if value == 0 {
        return out.put(b'0');
    }

    let magnitude = if value < 0 {
        out.put(b'-')?;
        value.wrapping_neg() as u32
    } else {
        value as u32
    };

    let mut digits = DigitStack::new();
    digits.fill(magnitude);
    trace!("print_integer: {} -> {} digits", value, digits.len());

    while let Some(digit) = digits.pop() {
        out.put(digit)?;
    }
    Ok(())
}

/// [`print_integer`] followed by a newline
pub fn print_line<S: CharSink>(value: i32, out: &mut S) -> Result<(), S::Error> {
    print_integer(value, out)?;
    out.put(b'\n')
}

/// Decimal text of `value` as a `String`
pub fn format_integer(value: i32) -> String {
    let mut term = MockTerminal::new();
    if let Err(never) = print_integer(value, &mut term) {
        match never {}
    }
    term.output()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_zero() {
        assert_eq!(format_integer(0), "0");
    }

    #[test]
    fn test_negative() {
        assert_eq!(format_integer(-42), "-42");
        assert_eq!(format_integer(-1), "-1");
    }

    #[test]
    fn test_positive() {
        assert_eq!(format_integer(12345), "12345");
        assert_eq!(format_integer(10), "10");
        assert_eq!(format_integer(i32::MAX), "2147483647");
    }

    #[test]
    fn test_min_value_wraps_to_correct_text() {
        assert_eq!(format_integer(i32::MIN), "-2147483648");
    }

    #[test]
    fn test_print_line_appends_newline() {
        let mut term = MockTerminal::new();
        print_line(7, &mut term).unwrap();
        print_line(-80, &mut term).unwrap();
        assert_eq!(term.lines(), vec!["7".to_string(), "-80".to_string()]);
    }

    /// Accepts a fixed number of bytes, then fails
    struct FullSink {
        written: Vec<u8>,
        capacity: usize,
    }

    impl CharSink for FullSink {
        type Error = io::Error;

        fn put(&mut self, byte: u8) -> Result<(), Self::Error> {
            if self.written.len() == self.capacity {
                return Err(io::Error::new(io::ErrorKind::WriteZero, "sink full"));
            }
            self.written.push(byte);
            Ok(())
        }
    }

    #[test]
    fn test_sink_error_propagates() {
        let mut sink = FullSink {
            written: Vec::new(),
            capacity: 2,
        };
        let err = print_integer(-123, &mut sink).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::WriteZero);
        assert_eq!(sink.written, b"-1");
    }
}
