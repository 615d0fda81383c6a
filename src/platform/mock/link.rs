//! Mock serial port and radio

use crate::platform::{
    traits::{RadioAck, RadioConfig, RadioLink, SerialPort, RADIO_PAYLOAD_MAX},
    PlatformError, RadioError, Result,
};
use std::collections::VecDeque;
use std::vec::Vec;
use wheelbot_core::link::RemoteSample;

/// Mock serial port with in-memory transmit and receive buffers
///
/// ```ignore
/// let mut serial = MockSerial::new();
/// serial.write(b"Hello").unwrap();
/// assert_eq!(serial.tx_buffer(), b"Hello");
/// ```
#[derive(Debug)]
pub struct MockSerial {
    baud_rate: u32,
    tx_buffer: Vec<u8>,
    rx_buffer: VecDeque<u8>,
}

impl MockSerial {
    pub fn new() -> Self {
        Self {
            baud_rate: 9600,
            tx_buffer: Vec::new(),
            rx_buffer: VecDeque::new(),
        }
    }

    /// Transmitted data (for test verification)
    pub fn tx_buffer(&self) -> &[u8] {
        &self.tx_buffer
    }

    pub fn clear_tx_buffer(&mut self) {
        self.tx_buffer.clear();
    }

    /// Inject receive data (for test setup)
    pub fn inject_rx_data(&mut self, data: &[u8]) {
        self.rx_buffer.extend(data.iter().copied());
    }

    /// Bytes not yet read by the controller
    pub fn rx_pending(&self) -> usize {
        self.rx_buffer.len()
    }

    pub fn baud_rate(&self) -> u32 {
        self.baud_rate
    }
}

impl Default for MockSerial {
    fn default() -> Self {
        Self::new()
    }
}

impl SerialPort for MockSerial {
    fn set_baud_rate(&mut self, baud: u32) -> Result<()> {
        self.baud_rate = baud;
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> Result<usize> {
        self.tx_buffer.extend_from_slice(data);
        Ok(data.len())
    }

    fn read_byte(&mut self) -> Result<Option<u8>> {
        Ok(self.rx_buffer.pop_front())
    }
}

/// Mock radio recording payloads and replaying acks and remote samples
#[derive(Debug, Default)]
pub struct MockRadio {
    config: Option<RadioConfig>,
    sent: Vec<Vec<u8>>,
    acks: VecDeque<RadioAck>,
    samples: VecDeque<RemoteSample>,
    fail_receive: bool,
}

impl MockRadio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration applied by the controller, if any
    pub fn config(&self) -> Option<&RadioConfig> {
        self.config.as_ref()
    }

    /// Payloads transmitted so far
    pub fn sent(&self) -> &[Vec<u8>] {
        &self.sent
    }

    /// Attach `payload` to the acknowledgement of the next transmit
    pub fn queue_ack(&mut self, payload: &[u8]) {
        let mut ack = RadioAck::new();
        for &byte in payload.iter().take(RADIO_PAYLOAD_MAX) {
            let _ = ack.push(byte);
        }
        self.acks.push_back(ack);
    }

    /// Deliver `sample` on the next receive
    pub fn queue_sample(&mut self, sample: RemoteSample) {
        self.samples.push_back(sample);
    }

    /// Make every receive fail until cleared
    pub fn fail_receive(&mut self, fail: bool) {
        self.fail_receive = fail;
    }
}

impl RadioLink for MockRadio {
    fn configure(&mut self, config: &RadioConfig) -> Result<()> {
        self.config = Some(*config);
        Ok(())
    }

    fn transmit(&mut self, payload: &[u8]) -> Result<Option<RadioAck>> {
        if payload.len() > RADIO_PAYLOAD_MAX {
            return Err(PlatformError::Radio(RadioError::PayloadTooLarge));
        }
        self.sent.push(payload.to_vec());
        Ok(self.acks.pop_front())
    }

    fn receive_sample(&mut self) -> Result<Option<RemoteSample>> {
        if self.fail_receive {
            return Err(PlatformError::Radio(RadioError::NotPresent));
        }
        Ok(self.samples.pop_front())
    }
}
