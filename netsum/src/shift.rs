//! Bit shifting of arbitrarily long hex-encoded values.
//!
//! Values are big-endian byte arrays; shifts carry bits across byte
//! boundaries so no big-integer type is needed. Results are normalized to the
//! shortest byte string that holds the value (at least one byte).

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::{NetsumError, Result};
use crate::hex;

/// Shift direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl FromStr for Direction {
    type Err = NetsumError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            other => {
                debug!(direction = other, "rejecting shift direction");
                Err(NetsumError::InvalidDirection(other.to_string()))
            }
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => f.write_str("left"),
            Direction::Right => f.write_str("right"),
        }
    }
}

/// Shift a hex-encoded value by `shift` bits.
///
/// Returns uppercase hex without a prefix, zero-padded to an even number of
/// digits. Right shifts discard the low bits and any leading zero bytes they
/// leave behind.
pub fn shift_hex(data: &str, shift: usize, direction: &str) -> Result<String> {
    let direction: Direction = direction.parse()?;
    let bytes = hex::decode(data)?;
    let shifted = shift_bytes(&bytes, shift, direction)?;
    trace!(%direction, shift, in_len = bytes.len(), out_len = shifted.len(), "shifted value");
    Ok(hex::encode_upper(&shifted))
}

/// Shift a big-endian byte string by `shift` bits.
///
/// Fails with [`NetsumError::ShiftTooLarge`] when a left shift needs more
/// memory than can be allocated.
pub fn shift_bytes(data: &[u8], shift: usize, direction: Direction) -> Result<Vec<u8>> {
    let value = strip_leading_zeros(data);
    if value.is_empty() {
        return Ok(vec![0]);
    }

    let byte_shift = shift / 8;
    let bit_shift = (shift % 8) as u32;

    let mut out = match direction {
        Direction::Left => shift_left(value, byte_shift, bit_shift).ok_or_else(|| {
            debug!(shift, len = value.len(), "left shift result cannot be allocated");
            NetsumError::ShiftTooLarge(shift)
        })?,
        Direction::Right => shift_right(value, byte_shift, bit_shift),
    };

    let zeros = out.len() - strip_leading_zeros(&out).len();
    if zeros == out.len() {
        return Ok(vec![0]);
    }
    out.drain(..zeros);
    Ok(out)
}

fn shift_left(value: &[u8], byte_shift: usize, bit_shift: u32) -> Option<Vec<u8>> {
    let total = value.len().checked_add(byte_shift)?.checked_add(1)?;
    let mut out = Vec::new();
    out.try_reserve_exact(total).ok()?;

    if bit_shift == 0 {
        out.extend_from_slice(value);
    } else {
        // bits pushed out of the top byte
        out.push(value[0] >> (8 - bit_shift));
        for (i, &byte) in value.iter().enumerate() {
            let next = value.get(i + 1).copied().unwrap_or(0);
            out.push(byte << bit_shift | next >> (8 - bit_shift));
        }
    }
    out.resize(out.len() + byte_shift, 0);
    Some(out)
}

fn shift_right(value: &[u8], byte_shift: usize, bit_shift: u32) -> Vec<u8> {
    if byte_shift >= value.len() {
        return Vec::new();
    }

    let kept = &value[..value.len() - byte_shift];
    if bit_shift == 0 {
        return kept.to_vec();
    }

    let mut prev = 0u8;
    kept.iter()
        .map(|&byte| {
            let shifted = byte >> bit_shift | prev << (8 - bit_shift);
            prev = byte;
            shifted
        })
        .collect()
}

fn strip_leading_zeros(data: &[u8]) -> &[u8] {
    let start = data.iter().position(|&b| b != 0).unwrap_or(data.len());
    &data[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_parse() {
        assert_eq!("left".parse::<Direction>().unwrap(), Direction::Left);
        assert_eq!("right".parse::<Direction>().unwrap(), Direction::Right);
        assert_eq!(
            "Left".parse::<Direction>(),
            Err(NetsumError::InvalidDirection("Left".to_string()))
        );
    }

    #[test]
    fn test_nibble_shift_needs_no_pad() {
        assert_eq!(shift_hex("01", 4, "left").unwrap(), "10");
        assert_eq!(shift_hex("01", 0, "left").unwrap(), "01");
    }

    #[test]
    fn test_odd_digit_results_are_padded() {
        assert_eq!(shift_hex("FF", 4, "left").unwrap(), "0FF0");
        assert_eq!(shift_hex("80", 1, "left").unwrap(), "0100");
        assert_eq!(shift_hex("abc", 4, "left").unwrap(), "ABC0");
    }

    #[test]
    fn test_right_shift_drops_leading_bytes() {
        assert_eq!(shift_hex("1234", 8, "right").unwrap(), "12");
        assert_eq!(shift_hex("0001", 1, "right").unwrap(), "00");
        assert_eq!(shift_hex("0F", 4, "right").unwrap(), "00");
        assert_eq!(shift_hex("1234", 64, "right").unwrap(), "00");
    }

    #[test]
    fn test_zero_value() {
        assert_eq!(shift_hex("0", 3, "left").unwrap(), "00");
        assert_eq!(shift_hex("0000", 9, "right").unwrap(), "00");
    }

    #[test]
    fn test_cross_byte_carry() {
        assert_eq!(shift_bytes(&[0x01, 0x80], 1, Direction::Left).unwrap(), vec![0x03, 0x00]);
        assert_eq!(shift_bytes(&[0x01, 0x80], 1, Direction::Right).unwrap(), vec![0xC0]);
        assert_eq!(shift_bytes(&[0xAB], 12, Direction::Left).unwrap(), vec![0x0A, 0xB0, 0x00]);
    }

    #[test]
    fn test_long_frame() {
        let data = "D5FFFFFFFFFF3F10203004142408081400000D00400040009127C1800A50C6800AD03FC421C421002800C0BEAFDEEDBEAFDEEDBEAFDEEDBEAFDEEDBEAFDEEDBEAFDEADFA";
        let expected = "0357FFFFFFFFFCFC4080C01050902020500000340100010002449F060029431A002B40FF1087108400A00302FABF7BB6FABF7BB6FABF7BB6FABF7BB6FABF7BB6FABF7AB7E8";
        assert_eq!(shift_hex(data, 2, "left").unwrap(), expected);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(shift_hex("01", 1, "up"), Err(NetsumError::InvalidDirection(_))));
        assert!(matches!(shift_hex("zz", 1, "left"), Err(NetsumError::InvalidHex(_))));
    }

    #[test]
    fn test_oversized_left_shift_is_error() {
        assert_eq!(
            shift_hex("01", usize::MAX, "left"),
            Err(NetsumError::ShiftTooLarge(usize::MAX))
        );
        assert_eq!(
            shift_bytes(&[0xFF; 4], usize::MAX - 7, Direction::Left),
            Err(NetsumError::ShiftTooLarge(usize::MAX - 7))
        );
        // Right shifts never allocate more than the input
        assert_eq!(shift_hex("01", usize::MAX, "right").unwrap(), "00");
    }
}
