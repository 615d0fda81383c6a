//! Outbound telemetry frame

use super::checksum::checksum;
use crate::store::TelemetryRecord;

/// Start marker of an outbound telemetry frame
pub const TELEMETRY_START: u8 = b'%';

/// Marker + checksum + 22 x 2-byte fields + 2 x 1-byte bitfields
pub const TELEMETRY_FRAME_LEN: usize = 2 + 22 * 2 + 2;

/// Sequential little-endian writer over a fixed buffer
struct FrameWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> FrameWriter<'a> {
    fn new(buf: &'a mut [u8], pos: usize) -> Self {
        Self { buf, pos }
    }

    fn put_i16(&mut self, value: i16) {
        self.buf[self.pos..self.pos + 2].copy_from_slice(&value.to_le_bytes());
        self.pos += 2;
    }

    fn put_u8(&mut self, value: u8) {
        self.buf[self.pos] = value;
        self.pos += 1;
    }
}

/// Serialize the whole telemetry record into one frame
pub fn encode_telemetry(record: &TelemetryRecord) -> [u8; TELEMETRY_FRAME_LEN] {
    let mut frame = [0u8; TELEMETRY_FRAME_LEN];
    frame[0] = TELEMETRY_START;

    let mut w = FrameWriter::new(&mut frame, 2);
    w.put_i16(record.wheels.left);
    w.put_i16(record.wheels.right);
    w.put_i16(record.move_status.as_i16());

    w.put_i16(record.arm.x);
    w.put_i16(record.arm.y);
    w.put_i16(record.arm.z);
    w.put_i16(record.arm.mode);

    for axis in [record.accel, record.gyro] {
        w.put_i16(axis.x);
        w.put_i16(axis.y);
        w.put_i16(axis.z);
    }

    w.put_i16(record.orientation.yaw);
    w.put_i16(record.orientation.pitch);
    w.put_i16(record.orientation.roll);

    w.put_i16(record.odometer_left);
    w.put_i16(record.odometer_right);
    w.put_i16(record.range.angle);
    w.put_i16(record.range.distance);
    w.put_i16(record.rangers[0]);
    w.put_i16(record.rangers[1]);

    w.put_u8(record.digital.bits());
    w.put_u8(record.limits.bits());
    debug_assert_eq!(w.pos, TELEMETRY_FRAME_LEN);

    frame[1] = checksum(&frame[2..]);
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{
        ArmTelemetry, DigitalSensors, LimitSwitches, MoveStatus, Orientation, RangeScan, Vector3,
        WheelSetpoints,
    };

    fn word(frame: &[u8], field: usize) -> i16 {
        let at = 2 + field * 2;
        i16::from_le_bytes([frame[at], frame[at + 1]])
    }

    fn sample() -> TelemetryRecord {
        TelemetryRecord {
            wheels: WheelSetpoints::new(-100, -100),
            move_status: MoveStatus::Executing,
            arm: ArmTelemetry {
                x: 90,
                y: 45,
                z: -10,
                mode: 1,
            },
            accel: Vector3 {
                x: -123,
                y: -1234,
                z: -12345,
            },
            gyro: Vector3 { x: 1, y: 2, z: 3 },
            orientation: Orientation {
                yaw: 1570,
                pitch: -20,
                roll: 5,
            },
            odometer_left: 11,
            odometer_right: 12,
            range: RangeScan {
                angle: 90,
                distance: 812,
            },
            rangers: [300, 301],
            digital: DigitalSensors::IR_RIGHT,
            limits: LimitSwitches::SW1 | LimitSwitches::SW4,
        }
    }

    #[test]
    fn frame_length_is_48() {
        assert_eq!(TELEMETRY_FRAME_LEN, 48);
    }

    #[test]
    fn field_layout() {
        let frame = encode_telemetry(&sample());

        assert_eq!(frame[0], b'%');
        assert_eq!(word(&frame, 0), -100);
        assert_eq!(word(&frame, 1), -100);
        assert_eq!(word(&frame, 2), 0);
        assert_eq!(word(&frame, 3), 90);
        assert_eq!(word(&frame, 6), 1);
        assert_eq!(word(&frame, 7), -123);
        assert_eq!(word(&frame, 9), -12345);
        assert_eq!(word(&frame, 10), 1);
        assert_eq!(word(&frame, 12), 3);
        assert_eq!(word(&frame, 13), 1570);
        assert_eq!(word(&frame, 14), -20);
        assert_eq!(word(&frame, 15), 5);
        assert_eq!(word(&frame, 16), 11);
        assert_eq!(word(&frame, 17), 12);
        assert_eq!(word(&frame, 18), 90);
        assert_eq!(word(&frame, 19), 812);
        assert_eq!(word(&frame, 20), 300);
        assert_eq!(word(&frame, 21), 301);
        assert_eq!(frame[46], 0b10);
        assert_eq!(frame[47], 0b1001);
    }

    #[test]
    fn little_endian_low_byte_first() {
        let frame = encode_telemetry(&sample());
        // -12345 = 0xCFC7
        assert_eq!(frame[2 + 9 * 2], 0xC7);
        assert_eq!(frame[2 + 9 * 2 + 1], 0xCF);
    }

    #[test]
    fn checksum_covers_payload_not_marker() {
        let frame = encode_telemetry(&sample());
        assert_eq!(frame[1], checksum(&frame[2..]));
    }

    #[test]
    fn idle_record_reports_done_status() {
        let frame = encode_telemetry(&TelemetryRecord::default());
        assert_eq!(word(&frame, 2), 1);
    }
}
