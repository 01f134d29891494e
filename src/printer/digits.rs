//! Fixed-capacity digit buffer

/// Decimal digits in `u32::MAX`, the widest magnitude an `i32` can have
pub const MAX_DIGITS: usize = 10;

/// Last-in-first-out stack of ASCII digits for one conversion
///
/// Digits are pushed least significant first and popped most significant
/// first. Lives on the caller's stack; nothing is allocated.
#[derive(Debug, Clone)]
pub struct DigitStack {
    digits: [u8; MAX_DIGITS],
    len: usize,
}

impl DigitStack {
    pub fn new() -> Self {
        DigitStack {
            digits: [0; MAX_DIGITS],
            len: 0,
        }
    }

    /// Replace the contents with every decimal digit of `magnitude`, lowest
    /// first. Zero leaves the stack empty.
    pub fn fill(&mut self, mut magnitude: u32) {
        self.len = 0;
        while magnitude != 0 {
            self.push(b'0' + (magnitude % 10) as u8);
            magnitude /= 10;
        }
    }

    // A u32 has at most MAX_DIGITS digits and fill starts from empty
    fn push(&mut self, digit: u8) {
        self.digits[self.len] = digit;
        self.len += 1;
    }

    pub fn pop(&mut self) -> Option<u8> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(self.digits[self.len])
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for DigitStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_then_pop_most_significant_first() {
        let mut stack = DigitStack::new();
        stack.fill(907);
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.pop(), Some(b'9'));
        assert_eq!(stack.pop(), Some(b'0'));
        assert_eq!(stack.pop(), Some(b'7'));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_fill_max_magnitude() {
        let mut stack = DigitStack::new();
        stack.fill(u32::MAX);
        assert_eq!(stack.len(), MAX_DIGITS);

        stack = DigitStack::new();
        stack.fill(0);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_refill_replaces_previous_digits() {
        let mut stack = DigitStack::new();
        stack.fill(u32::MAX);
        stack.fill(u32::MAX);
        assert_eq!(stack.len(), MAX_DIGITS);

        stack.fill(42);
        assert_eq!(stack.pop(), Some(b'4'));
        assert_eq!(stack.pop(), Some(b'2'));
        assert_eq!(stack.pop(), None);

        stack.fill(7);
        stack.fill(0);
        assert!(stack.is_empty());
    }
}
