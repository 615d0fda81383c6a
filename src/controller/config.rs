//! Controller configuration
//!
//! The link mode is selected at build time through `WHEELBOT_LINK_MODE`
//! (see `build.rs`) and fixed for the process lifetime. Everything else
//! comes from the parameter groups.

use wheelbot_core::link::LinkMode;
use wheelbot_core::parameters::{
    register_all, LinkParams, MotionParams, ParameterError, ParameterStore, SchedulerParams,
};

/// Link mode baked in at build time
const BUILD_LINK_MODE: &str = env!("WHEELBOT_LINK_MODE");

/// Boot-time link mode; supervised serial if the build value is unusable
pub fn boot_link_mode() -> LinkMode {
    BUILD_LINK_MODE
        .parse::<u8>()
        .ok()
        .and_then(LinkMode::from_raw)
        .unwrap_or(LinkMode::SupervisedSerial)
}

/// Parameter store seeded with every group's defaults
pub fn default_store() -> Result<ParameterStore, ParameterError> {
    let mut store = ParameterStore::new();
    register_all(&mut store, boot_link_mode())?;
    Ok(store)
}

/// Snapshot of every parameter group the controller needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerConfig {
    pub scheduler: SchedulerParams,
    pub motion: MotionParams,
    pub link: LinkParams,
}

impl ControllerConfig {
    /// Defaults with an explicit link mode
    pub fn with_mode(mode: LinkMode) -> Self {
        Self {
            scheduler: SchedulerParams::default(),
            motion: MotionParams::default(),
            link: LinkParams {
                mode,
                ..LinkParams::default()
            },
        }
    }

    pub fn from_store(store: &ParameterStore) -> Self {
        Self {
            scheduler: SchedulerParams::from_store(store),
            motion: MotionParams::from_store(store),
            link: LinkParams::from_store(store),
        }
    }

    pub fn mode(&self) -> LinkMode {
        self.link.mode
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::with_mode(boot_link_mode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wheelbot_core::parameters::ParamValue;

    #[test]
    fn test_default_store_matches_default_config() {
        let store = default_store().unwrap();
        assert_eq!(ControllerConfig::from_store(&store), ControllerConfig::default());
    }

    #[test]
    fn test_from_store_picks_up_overrides() {
        let mut store = default_store().unwrap();
        store.set("MOT_CRUISE", ParamValue::Int(250)).unwrap();
        store.set("SCHED_WHEEL_MS", ParamValue::Int(20)).unwrap();
        let config = ControllerConfig::from_store(&store);
        assert_eq!(config.motion.cruise, 250);
        assert_eq!(config.scheduler.wheels_ms, 20);
        assert_eq!(config.mode(), boot_link_mode());
    }
}
