//! Mock board bundling every mock driver

use super::{
    MockArm, MockImu, MockMux, MockOdometer, MockPeripherals, MockRadio, MockRangeScanner,
    MockRangers, MockSerial, MockWheels,
};
use crate::platform::traits::Board;

/// Board made of mock drivers; fields are public for test setup and checks
#[derive(Debug, Default)]
pub struct MockBoard {
    pub imu: MockImu,
    pub mux: MockMux,
    pub scanner: MockRangeScanner,
    pub rangers: MockRangers,
    pub odometer: MockOdometer,
    pub wheels: MockWheels,
    pub arm: MockArm,
    pub peripherals: MockPeripherals,
    pub serial: MockSerial,
    pub radio: MockRadio,
}

impl MockBoard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Board for MockBoard {
    type Imu = MockImu;
    type Mux = MockMux;
    type Scanner = MockRangeScanner;
    type Rangers = MockRangers;
    type Odometer = MockOdometer;
    type Wheels = MockWheels;
    type Arm = MockArm;
    type Peripherals = MockPeripherals;
    type Serial = MockSerial;
    type Radio = MockRadio;

    fn imu(&mut self) -> &mut Self::Imu {
        &mut self.imu
    }

    fn mux(&mut self) -> &mut Self::Mux {
        &mut self.mux
    }

    fn scanner(&mut self) -> &mut Self::Scanner {
        &mut self.scanner
    }

    fn rangers(&mut self) -> &mut Self::Rangers {
        &mut self.rangers
    }

    fn odometer(&mut self) -> &mut Self::Odometer {
        &mut self.odometer
    }

    fn wheels(&mut self) -> &mut Self::Wheels {
        &mut self.wheels
    }

    fn arm(&mut self) -> &mut Self::Arm {
        &mut self.arm
    }

    fn peripherals(&mut self) -> &mut Self::Peripherals {
        &mut self.peripherals
    }

    fn serial(&mut self) -> &mut Self::Serial {
        &mut self.serial
    }

    fn radio(&mut self) -> &mut Self::Radio {
        &mut self.radio
    }
}
