//! Hex text <-> big-endian byte conversion used by the shifter and the
//! demo configuration.

use crate::error::{NetsumError, Result};

const UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Decode a hex string into big-endian bytes.
///
/// Surrounding whitespace and a `0x`/`0X` prefix are accepted. Single `_`
/// separators may sit between digits or right after the prefix (`D5_FF`,
/// `0x_ff`). An odd number of digits is read as if it had a leading `0`.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    let trimmed = text.trim();
    let (body, prefixed) = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(body) => (body, true),
        None => (trimmed, false),
    };

    let body = if prefixed {
        body.strip_prefix('_').unwrap_or(body)
    } else {
        body
    };
    if body.starts_with('_') || body.ends_with('_') || body.contains("__") {
        return Err(NetsumError::InvalidHex(format!("misplaced '_' in '{}'", text)));
    }

    let digits: Vec<u8> = body.bytes().filter(|&b| b != b'_').collect();
    if digits.is_empty() {
        return Err(NetsumError::InvalidHex(format!("no hex digits in '{}'", text)));
    }

    let mut out = Vec::with_capacity(digits.len() / 2 + 1);
    let (head, rest) = digits.split_at(digits.len() % 2);
    if let [lone] = head {
        out.push(nibble(*lone, text)?);
    }
    for pair in rest.chunks_exact(2) {
        out.push(nibble(pair[0], text)? << 4 | nibble(pair[1], text)?);
    }
    Ok(out)
}

/// Uppercase hex, two digits per byte
pub fn encode_upper(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        out.push(UPPER[(byte >> 4) as usize] as char);
        out.push(UPPER[(byte & 0x0F) as usize] as char);
    }
    out
}

fn nibble(digit: u8, text: &str) -> Result<u8> {
    match digit {
        b'0'..=b'9' => Ok(digit - b'0'),
        b'a'..=b'f' => Ok(digit - b'a' + 10),
        b'A'..=b'F' => Ok(digit - b'A' + 10),
        _ => Err(NetsumError::InvalidHex(format!(
            "unexpected character '{}' in '{}'",
            digit.escape_ascii(),
            text
        ))),
    }
}
