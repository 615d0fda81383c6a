//! Link driver interfaces

use crate::platform::Result;
use heapless::Vec;
use wheelbot_core::link::RemoteSample;
use wheelbot_core::parameters::LinkParams;

/// Largest radio payload
pub const RADIO_PAYLOAD_MAX: usize = 32;

/// Payload the receiving side attached to an acknowledgement
pub type RadioAck = Vec<u8, RADIO_PAYLOAD_MAX>;

/// Byte-oriented serial port
pub trait SerialPort {
    fn set_baud_rate(&mut self, baud: u32) -> Result<()>;

    /// Queue `data` for transmission, returns the number of bytes accepted
    fn write(&mut self, data: &[u8]) -> Result<usize>;

    /// Next received byte, `None` when the receive buffer is empty
    fn read_byte(&mut self) -> Result<Option<u8>>;
}

/// Radio role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RadioRole {
    /// Sends telemetry, collects command bytes from acknowledgements
    Transmitter,
    /// Listens for remote samples
    Receiver,
}

/// Transceiver settings applied once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadioConfig {
    pub channel: u8,
    pub auto_ack: bool,
    /// Delay between retries, in transceiver units
    pub retry_delay: u8,
    pub retry_count: u8,
    pub payload_size: u8,
    pub role: RadioRole,
}

impl RadioConfig {
    pub fn from_params(params: &LinkParams, role: RadioRole) -> Self {
        Self {
            channel: params.channel,
            auto_ack: true,
            retry_delay: 0,
            retry_count: params.retries,
            payload_size: RADIO_PAYLOAD_MAX as u8,
            role,
        }
    }
}

/// Short-range radio transceiver with hardware auto-acknowledgement
pub trait RadioLink {
    fn configure(&mut self, config: &RadioConfig) -> Result<()>;

    /// Send one payload of at most [`RADIO_PAYLOAD_MAX`] bytes
    ///
    /// Returns the acknowledgement payload if the receiver attached one.
    fn transmit(&mut self, payload: &[u8]) -> Result<Option<RadioAck>>;

    /// Latest remote sample, `None` when nothing arrived
    fn receive_sample(&mut self) -> Result<Option<RemoteSample>>;
}
