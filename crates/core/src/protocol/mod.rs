//! Fixed-size binary frame protocol
//!
//! Outbound telemetry frame (48 bytes):
//!
//! ```text
//! '%' | checksum | 22 x i16 LE | digital:u8 | limits:u8
//! ```
//!
//! Inbound command frame (12 bytes):
//!
//! ```text
//! '#' | checksum | move_type:i8 | move_value:i8 | q1,q2,q3: i16 LE | arm_mode:i8 | audio_mode:i8
//! ```
//!
//! The checksum covers the payload only, never the start marker. There is no
//! retransmission: a frame that fails validation is dropped.

mod checksum;
mod command;
mod receiver;
mod telemetry;

pub use checksum::{checksum, verify};
pub use command::{
    decode_command, encode_command, ChecksumMismatch, COMMAND_BODY_LEN, COMMAND_FRAME_LEN,
    COMMAND_START,
};
pub use receiver::{FrameReceiver, ReceiverStats};
pub use telemetry::{encode_telemetry, TELEMETRY_FRAME_LEN, TELEMETRY_START};
