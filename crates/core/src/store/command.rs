//! Command record and its store

use crate::protocol::{decode_command, ChecksumMismatch, COMMAND_BODY_LEN};

/// Sentinel for "no command" in the motion and audio fields
pub const NO_COMMAND: i8 = -1;

/// Locomotion primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveType {
    /// Hold both wheels at zero for a fixed time
    Stop = 0,
    /// Drive forward for a fixed time
    StraightByHeading = 1,
    /// Drive backward for a fixed time
    BackByHeading = 2,
    /// Spin about the axle centre until the heading delta is reached
    RotateInPlace = 3,
    /// Pivot about one stopped wheel until the heading delta is reached
    RotateOnWheel = 4,
}

impl MoveType {
    /// All defined move types in wire order
    pub const ALL: [MoveType; 5] = [
        MoveType::Stop,
        MoveType::StraightByHeading,
        MoveType::BackByHeading,
        MoveType::RotateInPlace,
        MoveType::RotateOnWheel,
    ];

    /// Decode a wire value; `None` for anything outside the five defined types
    pub const fn from_raw(raw: i8) -> Option<Self> {
        match raw {
            0 => Some(MoveType::Stop),
            1 => Some(MoveType::StraightByHeading),
            2 => Some(MoveType::BackByHeading),
            3 => Some(MoveType::RotateInPlace),
            4 => Some(MoveType::RotateOnWheel),
            _ => None,
        }
    }

    /// Wire value
    pub const fn as_raw(self) -> i8 {
        self as i8
    }

    /// Name for logging
    pub const fn name(self) -> &'static str {
        match self {
            MoveType::Stop => "stop",
            MoveType::StraightByHeading => "straight",
            MoveType::BackByHeading => "back",
            MoveType::RotateInPlace => "rotate_in_place",
            MoveType::RotateOnWheel => "rotate_on_wheel",
        }
    }
}

/// Last validated instruction from upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandRecord {
    /// Checksum byte of the frame this record was decoded from
    pub checksum: u8,
    /// Raw move type; see [`MoveType::from_raw`]
    pub move_type: i8,
    /// Signed magnitude, meaning depends on the move type
    pub move_value: i8,
    /// Arm joint angles q1..q3
    pub arm: [i16; 3],
    pub arm_mode: i8,
    pub audio_mode: i8,
}

impl Default for CommandRecord {
    fn default() -> Self {
        Self {
            checksum: 0,
            move_type: NO_COMMAND,
            move_value: NO_COMMAND,
            arm: [90, 90, 90],
            arm_mode: NO_COMMAND,
            audio_mode: NO_COMMAND,
        }
    }
}

impl CommandRecord {
    /// True if the motion fields hold a command rather than the sentinel
    pub fn has_motion(&self) -> bool {
        self.move_type != NO_COMMAND
    }
}

/// Result of applying one received frame body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Checksum matched; the record was fully overwritten
    Accepted,
    /// Checksum mismatch; motion and audio fields were reset to the sentinel
    Rejected(ChecksumMismatch),
}

/// Frame counters of the store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommandStats {
    pub accepted: u32,
    pub rejected: u32,
}

/// Holds the command record plus a one-shot "pending" latch
///
/// A validated frame carrying a motion command sets the latch; the motion
/// state machine consumes it with [`CommandStore::take_pending`] only when it
/// is free to start a new move. A fresher frame arriving before that simply
/// replaces the pending command.
#[derive(Debug, Clone, Default)]
pub struct CommandStore {
    record: CommandRecord,
    pending: bool,
    stats: CommandStats,
}

impl CommandStore {
    /// Create a store holding the boot-time record (no command)
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and apply a complete frame body (checksum + payload)
    ///
    /// On mismatch the motion and audio fields are reset to [`NO_COMMAND`]
    /// while the arm fields keep their last valid values.
    pub fn apply_frame(&mut self, body: &[u8; COMMAND_BODY_LEN]) -> FrameOutcome {
        match decode_command(body) {
            Ok(record) => {
                self.record = record;
                self.pending = record.has_motion();
                self.stats.accepted = self.stats.accepted.saturating_add(1);
                FrameOutcome::Accepted
            }
            Err(mismatch) => {
                self.record.move_type = NO_COMMAND;
                self.record.move_value = NO_COMMAND;
                self.record.audio_mode = NO_COMMAND;
                self.pending = false;
                self.stats.rejected = self.stats.rejected.saturating_add(1);
                FrameOutcome::Rejected(mismatch)
            }
        }
    }

    /// Current record
    pub fn record(&self) -> &CommandRecord {
        &self.record
    }

    /// True if a motion command is waiting to be latched
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Consume the pending motion command, if any
    pub fn take_pending(&mut self) -> Option<CommandRecord> {
        if self.pending {
            self.pending = false;
            Some(self.record)
        } else {
            None
        }
    }

    /// Frame counters
    pub fn stats(&self) -> CommandStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::encode_command;

    fn body_of(record: &CommandRecord) -> [u8; COMMAND_BODY_LEN] {
        let frame = encode_command(record);
        let mut body = [0u8; COMMAND_BODY_LEN];
        body.copy_from_slice(&frame[1..]);
        body
    }

    fn rotate(value: i8) -> CommandRecord {
        CommandRecord {
            move_type: MoveType::RotateInPlace.as_raw(),
            move_value: value,
            arm: [10, 20, 30],
            arm_mode: 1,
            audio_mode: 2,
            ..Default::default()
        }
    }

    #[test]
    fn move_type_from_raw() {
        for kind in MoveType::ALL {
            assert_eq!(MoveType::from_raw(kind.as_raw()), Some(kind));
        }
        assert_eq!(MoveType::from_raw(NO_COMMAND), None);
        assert_eq!(MoveType::from_raw(5), None);
    }

    #[test]
    fn boot_record_has_no_command() {
        let store = CommandStore::new();
        assert!(!store.record().has_motion());
        assert_eq!(store.record().arm, [90, 90, 90]);
        assert!(!store.is_pending());
    }

    #[test]
    fn accepted_frame_overwrites_record_and_sets_pending() {
        let mut store = CommandStore::new();
        let record = rotate(90);

        assert_eq!(store.apply_frame(&body_of(&record)), FrameOutcome::Accepted);
        assert_eq!(store.record().move_type, 3);
        assert_eq!(store.record().move_value, 90);
        assert_eq!(store.record().arm, [10, 20, 30]);
        assert!(store.is_pending());
        assert_eq!(store.stats().accepted, 1);
    }

    #[test]
    fn rejected_frame_resets_motion_and_audio_only() {
        let mut store = CommandStore::new();
        store.apply_frame(&body_of(&rotate(90)));

        let mut corrupt = body_of(&CommandRecord {
            arm: [1, 2, 3],
            arm_mode: 7,
            ..rotate(45)
        });
        corrupt[0] = corrupt[0].wrapping_add(1);

        assert!(matches!(
            store.apply_frame(&corrupt),
            FrameOutcome::Rejected(_)
        ));
        let record = store.record();
        assert_eq!(record.move_type, NO_COMMAND);
        assert_eq!(record.move_value, NO_COMMAND);
        assert_eq!(record.audio_mode, NO_COMMAND);
        assert_eq!(record.arm, [10, 20, 30]);
        assert_eq!(record.arm_mode, 1);
        assert!(!store.is_pending());
        assert_eq!(store.stats().rejected, 1);
    }

    #[test]
    fn take_pending_is_one_shot() {
        let mut store = CommandStore::new();
        store.apply_frame(&body_of(&rotate(-30)));

        let taken = store.take_pending().unwrap();
        assert_eq!(taken.move_value, -30);
        assert!(store.take_pending().is_none());
        // The record itself stays readable
        assert_eq!(store.record().move_value, -30);
    }

    #[test]
    fn valid_frame_without_motion_is_not_pending() {
        let mut store = CommandStore::new();
        let record = CommandRecord {
            arm: [45, 45, 45],
            ..Default::default()
        };
        assert_eq!(store.apply_frame(&body_of(&record)), FrameOutcome::Accepted);
        assert_eq!(store.record().arm, [45, 45, 45]);
        assert!(!store.is_pending());
    }
}
