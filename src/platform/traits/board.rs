//! Board trait: one driver per role
//!
//! Implementations provide concrete driver types via associated types, so
//! the controller is monomorphised per board with no dynamic dispatch.
//!
//! ```ignore
//! impl Board for RobotBoard {
//!     type Imu = Mpu6050Dmp;
//!     type Mux = Cd4051;
//!     // ...
//!     fn imu(&mut self) -> &mut Self::Imu { &mut self.imu }
//!     // ...
//! }
//! ```

use super::{
    ArmDrive, InertialSensor, Odometer, Peripherals, RadioLink, RangeScanner, Rangers, SensorMux,
    SerialPort, WheelDrive,
};

pub trait Board {
    type Imu: InertialSensor;
    type Mux: SensorMux;
    type Scanner: RangeScanner;
    type Rangers: Rangers;
    type Odometer: Odometer;
    type Wheels: WheelDrive;
    type Arm: ArmDrive;
    type Peripherals: Peripherals;
    type Serial: SerialPort;
    type Radio: RadioLink;

    fn imu(&mut self) -> &mut Self::Imu;
    fn mux(&mut self) -> &mut Self::Mux;
    fn scanner(&mut self) -> &mut Self::Scanner;
    fn rangers(&mut self) -> &mut Self::Rangers;
    fn odometer(&mut self) -> &mut Self::Odometer;
    fn wheels(&mut self) -> &mut Self::Wheels;
    fn arm(&mut self) -> &mut Self::Arm;
    fn peripherals(&mut self) -> &mut Self::Peripherals;
    fn serial(&mut self) -> &mut Self::Serial;
    fn radio(&mut self) -> &mut Self::Radio;
}
