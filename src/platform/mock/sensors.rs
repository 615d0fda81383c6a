//! Mock sensors

use crate::platform::{
    traits::{InertialSample, InertialSensor, Odometer, RangeScanner, Rangers, SensorMux},
    PlatformError, Result, SensorError,
};
use std::collections::VecDeque;
use std::vec::Vec;
use wheelbot_core::store::RangeScan;

const SENSOR_FAULT: PlatformError = PlatformError::Sensor(SensorError::Timeout);

/// Mock inertial unit replaying injected samples
#[derive(Debug, Default)]
pub struct MockImu {
    samples: VecDeque<InertialSample>,
    fail_next: bool,
}

impl MockImu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a sample for the next poll
    pub fn push_sample(&mut self, sample: InertialSample) {
        self.samples.push_back(sample);
    }

    /// Make the next poll fail
    pub fn fail_next(&mut self) {
        self.fail_next = true;
    }
}

impl InertialSensor for MockImu {
    fn poll(&mut self) -> Result<Option<InertialSample>> {
        if core::mem::take(&mut self.fail_next) {
            return Err(SENSOR_FAULT);
        }
        Ok(self.samples.pop_front())
    }
}

/// Mock multiplexer with eight addressable signal levels
#[derive(Debug, Default)]
pub struct MockMux {
    levels: [bool; 8],
    selected: Option<u8>,
    fail_on: Option<u8>,
    selections: Vec<u8>,
}

impl MockMux {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the signal level seen at `address`
    pub fn set_level(&mut self, address: u8, level: bool) {
        self.levels[address as usize] = level;
    }

    /// Make every read at `address` fail
    pub fn fail_on(&mut self, address: Option<u8>) {
        self.fail_on = address;
    }

    /// Addresses selected so far, in order
    pub fn selections(&self) -> &[u8] {
        &self.selections
    }
}

impl SensorMux for MockMux {
    fn select(&mut self, address: u8) -> Result<()> {
        if address as usize >= self.levels.len() {
            return Err(PlatformError::Sensor(SensorError::InvalidChannel));
        }
        self.selected = Some(address);
        self.selections.push(address);
        Ok(())
    }

    fn read(&mut self) -> Result<bool> {
        let address = self
            .selected
            .ok_or(PlatformError::Sensor(SensorError::InvalidChannel))?;
        if self.fail_on == Some(address) {
            return Err(SENSOR_FAULT);
        }
        Ok(self.levels[address as usize])
    }
}

/// Mock rotary range finder
#[derive(Debug, Default)]
pub struct MockRangeScanner {
    next: Option<RangeScan>,
}

impl MockRangeScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `scan` on the next poll only
    pub fn set_next(&mut self, scan: RangeScan) {
        self.next = Some(scan);
    }
}

impl RangeScanner for MockRangeScanner {
    fn poll(&mut self) -> Result<Option<RangeScan>> {
        Ok(self.next.take())
    }
}

/// Mock fixed ranging sensors
#[derive(Debug, Default)]
pub struct MockRangers {
    pub distances: [i16; 2],
}

impl Rangers for MockRangers {
    fn distances(&mut self) -> Result<[i16; 2]> {
        Ok(self.distances)
    }
}

/// Mock odometers
#[derive(Debug, Default)]
pub struct MockOdometer {
    pub counts: [i16; 2],
    fail_next: bool,
}

impl MockOdometer {
    pub fn fail_next(&mut self) {
        self.fail_next = true;
    }
}

impl Odometer for MockOdometer {
    fn counts(&mut self) -> Result<[i16; 2]> {
        if core::mem::take(&mut self.fail_next) {
            return Err(SENSOR_FAULT);
        }
        Ok(self.counts)
    }
}
