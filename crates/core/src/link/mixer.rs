//! Stick-to-wheel mixing for remote drive

use super::remote::{RemoteSample, REMOTE_CENTER};
use crate::store::{WheelSetpoints, WHEEL_SETPOINT_LIMIT};

/// Map a stick axis reading to [-limit, limit] around the centre
fn axis(raw: i16) -> i32 {
    let limit = i32::from(WHEEL_SETPOINT_LIMIT);
    let centered = i32::from(raw) - i32::from(REMOTE_CENTER);
    (centered * limit / i32::from(REMOTE_CENTER)).clamp(-limit, limit)
}

/// Differential mix of stick 1 into wheel setpoints
///
/// Horizontal is steering (positive turns right), vertical is throttle. When
/// either side would exceed the setpoint limit both are scaled down together,
/// keeping their ratio. The neutral sample yields a stop.
pub fn mix_stick(sample: &RemoteSample) -> WheelSetpoints {
    let steering = axis(sample.x1);
    let throttle = axis(sample.y1);
    let mut left = throttle + steering;
    let mut right = throttle - steering;

    let limit = i32::from(WHEEL_SETPOINT_LIMIT);
    let max_magnitude = left.abs().max(right.abs());
    if max_magnitude > limit {
        left = left * limit / max_magnitude;
        right = right * limit / max_magnitude;
    }

    WheelSetpoints::from_forward(left as i16, right as i16)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stick(x1: i16, y1: i16) -> RemoteSample {
        RemoteSample {
            x1,
            y1,
            ..RemoteSample::NEUTRAL
        }
    }

    #[test]
    fn test_neutral_stops() {
        assert_eq!(mix_stick(&RemoteSample::NEUTRAL), WheelSetpoints::STOP);
    }

    #[test]
    fn test_full_forward() {
        // right wheel is mirrored
        assert_eq!(mix_stick(&stick(512, 1024)), WheelSetpoints::new(1000, -1000));
    }

    #[test]
    fn test_full_reverse() {
        assert_eq!(mix_stick(&stick(512, 0)), WheelSetpoints::new(-1000, 1000));
    }

    #[test]
    fn test_spin_right() {
        assert_eq!(mix_stick(&stick(1024, 512)), WheelSetpoints::new(1000, 1000));
    }

    #[test]
    fn test_forward_right_normalized() {
        // raw left 2000, right 0
        assert_eq!(mix_stick(&stick(1024, 1024)), WheelSetpoints::new(1000, 0));
    }

    #[test]
    fn test_half_forward_half_right() {
        // steering 500, throttle 500 -> left 1000, right 0
        assert_eq!(mix_stick(&stick(768, 768)), WheelSetpoints::new(1000, 0));
    }
}
