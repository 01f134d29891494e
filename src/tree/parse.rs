//! Reading flat tree arrays from text
//!
//! The format is just the slots in order. Integers are separated by
//! whitespace or commas, and `;` or `#` comments run to the end of the line:
//!
//! ```text
//! ; value left right
//! 10, 3, -1
//! 20, -1, -1   # leaf
//! ```
//!
//! A token may be a decimal `u32` or `i32`, or `0x`-prefixed hex. Values
//! above `i32::MAX` wrap to their two's-complement reading, so `4294967295`
//! and `0xffffffff` both mean `-1`.

use super::errors::TreeError;

/// Parse one integer token, wrapping 32-bit unsigned values into `i32`
pub fn parse_int(token: &str) -> Option<i32> {
    let token = token.trim();
    if let Ok(num) = token.parse::<u32>() {
        Some(num as i32)
    } else if let Ok(num) = token.parse::<i32>() {
        Some(num)
    } else {
        let hex = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))?;
        u32::from_str_radix(hex, 16).ok().map(|num| num as i32)
    }
}

/// Parse a whole tree array
pub fn parse_slots(text: &str) -> Result<Vec<i32>, TreeError> {
    let mut slots = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let end = line.find([';', '#']).unwrap_or(line.len());
        for token in line[..end]
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
        {
            match parse_int(token) {
                Some(num) => slots.push(num),
                None => {
                    return Err(TreeError::InvalidToken {
                        line: line_no + 1,
                        token: token.to_string(),
                    })
                }
            }
        }
    }
    Ok(slots)
}
