//! Frame checksum
//!
//! Each payload byte is folded into an 8-bit accumulator with two chained
//! shift-or steps. The result is deterministic and order-sensitive but it is
//! not a CRC: only the last byte and the low bit of the previous accumulator
//! survive the fold, so many payloads share a checksum. Both ends of the link
//! must use exactly this function.

/// Fold `payload` into a single checksum byte
pub fn checksum(payload: &[u8]) -> u8 {
    payload.iter().fold(0u8, |acc, &byte| {
        let acc = (acc << 3) | byte;
        (acc << 4) | byte
    })
}

/// Check `payload` against a received checksum byte
pub fn verify(expected: u8, payload: &[u8]) -> bool {
    checksum(payload) == expected
}
