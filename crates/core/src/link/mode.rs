/// Operating mode, selected once at boot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkMode {
    /// Handheld transmitter over radio drives the wheels directly
    Remote = 0,
    /// Upstream computer over the serial port
    SupervisedSerial = 1,
    /// Upstream computer over radio; serial stays open for diagnostics
    SupervisedRadio = 2,
}

impl LinkMode {
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(LinkMode::Remote),
            1 => Some(LinkMode::SupervisedSerial),
            2 => Some(LinkMode::SupervisedRadio),
            _ => None,
        }
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            LinkMode::Remote => "remote",
            LinkMode::SupervisedSerial => "serial",
            LinkMode::SupervisedRadio => "radio",
        }
    }

    /// Whether commands and telemetry flow through the frame codec
    pub const fn is_supervised(self) -> bool {
        !matches!(self, LinkMode::Remote)
    }

    /// Serial port baud rate for this mode
    pub const fn serial_baud(self) -> u32 {
        match self {
            LinkMode::Remote | LinkMode::SupervisedSerial => 1_000_000,
            LinkMode::SupervisedRadio => 115_200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_raw() {
        assert_eq!(LinkMode::from_raw(0), Some(LinkMode::Remote));
        assert_eq!(LinkMode::from_raw(1), Some(LinkMode::SupervisedSerial));
        assert_eq!(LinkMode::from_raw(2), Some(LinkMode::SupervisedRadio));
        assert_eq!(LinkMode::from_raw(3), None);
        for mode in [LinkMode::Remote, LinkMode::SupervisedSerial, LinkMode::SupervisedRadio] {
            assert_eq!(LinkMode::from_raw(mode.as_raw()), Some(mode));
        }
    }

    #[test]
    fn test_mode_baud() {
        assert_eq!(LinkMode::Remote.serial_baud(), 1_000_000);
        assert_eq!(LinkMode::SupervisedSerial.serial_baud(), 1_000_000);
        assert_eq!(LinkMode::SupervisedRadio.serial_baud(), 115_200);
        assert!(!LinkMode::Remote.is_supervised());
        assert!(LinkMode::SupervisedRadio.is_supervised());
    }
}
