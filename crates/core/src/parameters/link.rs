//! Link parameters
//!
//! # Parameters
//!
//! - `LINK_MODE` - operating mode, fixed at boot (read-only)
//! - `LINK_TIMEOUT_MS` - remote link silence before the neutral sample is forced
//! - `LINK_RX_BURST` - maximum bytes drained per receive task run
//! - `LINK_CHANNEL` - radio channel
//! - `LINK_RETRIES` - radio auto-retransmit count

use super::error::ParameterError;
use super::storage::{ParamFlags, ParamValue, ParameterStore};
use crate::link::LinkMode;

/// Link configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkParams {
    pub mode: LinkMode,
    pub timeout_ms: u32,
    pub rx_burst: usize,
    pub channel: u8,
    pub retries: u8,
}

impl Default for LinkParams {
    fn default() -> Self {
        Self {
            mode: LinkMode::SupervisedSerial,
            timeout_ms: 100,
            rx_burst: 64,
            channel: 0x6A,
            retries: 15,
        }
    }
}

impl LinkParams {
    /// Register link parameters; `boot_mode` becomes the read-only `LINK_MODE`
    pub fn register_defaults(
        store: &mut ParameterStore,
        boot_mode: LinkMode,
    ) -> Result<(), ParameterError> {
        let d = Self::default();
        store.register(
            "LINK_MODE",
            ParamValue::Int(boot_mode.as_raw() as i32),
            ParamFlags::READ_ONLY,
        )?;
        store.register("LINK_TIMEOUT_MS", ParamValue::Int(d.timeout_ms as i32), ParamFlags::empty())?;
        store.register("LINK_RX_BURST", ParamValue::Int(d.rx_burst as i32), ParamFlags::empty())?;
        store.register("LINK_CHANNEL", ParamValue::Int(d.channel as i32), ParamFlags::empty())?;
        store.register("LINK_RETRIES", ParamValue::Int(d.retries as i32), ParamFlags::empty())?;
        Ok(())
    }

    /// Load link parameters from the store
    ///
    /// An unknown `LINK_MODE` falls back to supervised serial.
    pub fn from_store(store: &ParameterStore) -> Self {
        let d = Self::default();
        let mode = u8::try_from(store.get_int_or("LINK_MODE", d.mode.as_raw() as i32))
            .ok()
            .and_then(LinkMode::from_raw)
            .unwrap_or(d.mode);

        Self {
            mode,
            timeout_ms: store.get_int_or("LINK_TIMEOUT_MS", d.timeout_ms as i32).max(0) as u32,
            rx_burst: store.get_int_or("LINK_RX_BURST", d.rx_burst as i32).max(1) as usize,
            channel: store.get_int_or("LINK_CHANNEL", d.channel as i32).clamp(0, 125) as u8,
            retries: store.get_int_or("LINK_RETRIES", d.retries as i32).clamp(0, 15) as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_params_defaults() {
        let mut store = ParameterStore::new();
        LinkParams::register_defaults(&mut store, LinkMode::SupervisedRadio).unwrap();
        let params = LinkParams::from_store(&store);
        assert_eq!(params.mode, LinkMode::SupervisedRadio);
        assert_eq!(params.timeout_ms, 100);
        assert_eq!(params.rx_burst, 64);
        assert_eq!(params.channel, 0x6A);
        assert_eq!(params.retries, 15);
    }

    #[test]
    fn test_link_mode_is_read_only() {
        let mut store = ParameterStore::new();
        LinkParams::register_defaults(&mut store, LinkMode::Remote).unwrap();
        assert_eq!(
            store.set("LINK_MODE", ParamValue::Int(1)),
            Err(ParameterError::ReadOnly)
        );
        assert_eq!(LinkParams::from_store(&store).mode, LinkMode::Remote);
    }

    #[test]
    fn test_link_params_zero_burst_reads_as_one() {
        let mut store = ParameterStore::new();
        LinkParams::register_defaults(&mut store, LinkMode::SupervisedSerial).unwrap();
        store.set("LINK_RX_BURST", ParamValue::Int(0)).unwrap();
        assert_eq!(LinkParams::from_store(&store).rx_burst, 1);
    }
}
