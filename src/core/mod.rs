//! Controller infrastructure shared by every task: logging and time

pub mod logging;
pub mod traits;
