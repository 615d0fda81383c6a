//! Inbound command frame

use core::fmt;

use super::checksum::checksum;
use crate::store::CommandRecord;

/// Start marker of an inbound command frame
pub const COMMAND_START: u8 = b'#';

/// Bytes after the start marker: checksum + 10 payload bytes
pub const COMMAND_BODY_LEN: usize = 11;

/// Full frame length including the start marker
pub const COMMAND_FRAME_LEN: usize = COMMAND_BODY_LEN + 1;

/// Received checksum does not match the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecksumMismatch {
    /// Checksum computed over the received payload
    pub computed: u8,
    /// Checksum byte carried by the frame
    pub received: u8,
}

impl fmt::Display for ChecksumMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "checksum mismatch: computed {:#04x}, received {:#04x}",
            self.computed, self.received
        )
    }
}

/// Decode a frame body (checksum byte followed by the payload)
pub fn decode_command(body: &[u8; COMMAND_BODY_LEN]) -> Result<CommandRecord, ChecksumMismatch> {
    let received = body[0];
    let payload = &body[1..];
    let computed = checksum(payload);
    if computed != received {
        return Err(ChecksumMismatch { computed, received });
    }

    let word = |at: usize| i16::from_le_bytes([payload[at], payload[at + 1]]);
    Ok(CommandRecord {
        checksum: received,
        move_type: payload[0] as i8,
        move_value: payload[1] as i8,
        arm: [word(2), word(4), word(6)],
        arm_mode: payload[8] as i8,
        audio_mode: payload[9] as i8,
    })
}

/// Build a complete inbound frame for `record`
///
/// The checksum field of `record` is ignored and recomputed.
pub fn encode_command(record: &CommandRecord) -> [u8; COMMAND_FRAME_LEN] {
    let mut frame = [0u8; COMMAND_FRAME_LEN];
    frame[0] = COMMAND_START;

    let payload = &mut frame[2..];
    payload[0] = record.move_type as u8;
    payload[1] = record.move_value as u8;
    for (joint, angle) in record.arm.iter().enumerate() {
        let at = 2 + joint * 2;
        payload[at..at + 2].copy_from_slice(&angle.to_le_bytes());
    }
    payload[8] = record.arm_mode as u8;
    payload[9] = record.audio_mode as u8;

    frame[1] = checksum(&frame[2..]);
    frame
}
