//! Parameter management
//!
//! A RAM-only store of named tunables plus the typed groups read from it at
//! boot. Groups follow one pattern: `register_defaults` seeds the store,
//! `from_store` takes a snapshot.

pub mod error;
pub mod link;
pub mod motion;
pub mod scheduler;
pub mod storage;

pub use error::ParameterError;
pub use link::LinkParams;
pub use motion::MotionParams;
pub use scheduler::SchedulerParams;
pub use storage::{ParamFlags, ParamMetadata, ParamValue, ParameterStore};
pub use storage::{MAX_PARAMS, PARAM_NAME_LEN};

use crate::link::LinkMode;

/// Register every parameter group
pub fn register_all(
    store: &mut ParameterStore,
    boot_mode: LinkMode,
) -> Result<(), ParameterError> {
    SchedulerParams::register_defaults(store)?;
    MotionParams::register_defaults(store)?;
    LinkParams::register_defaults(store, boot_mode)?;
    Ok(())
}
