#![no_main]

use libfuzzer_sys::fuzz_target;
use netsum::shift_hex;

// Fuzz target for hex shifting
// Arbitrary text must never panic, and a left shift must always be undone by
// the matching right shift

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let bits = data[0] as usize;
    let direction = if data[1] & 1 == 0 { "left" } else { "right" };
    let text = String::from_utf8_lossy(&data[2..]);

    let shifted = match shift_hex(&text, bits, direction) {
        Ok(shifted) => shifted,
        Err(_) => return,
    };

    // Output is always whole bytes of uppercase hex
    assert_eq!(shifted.len() % 2, 0);
    assert!(shifted.bytes().all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b)));

    if direction == "left" {
        let back = shift_hex(&shifted, bits, "right").expect("own output must parse");
        let original = shift_hex(&text, 0, "left").expect("input parsed once already");
        assert_eq!(back, original);
    }
});
