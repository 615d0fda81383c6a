//! Link mode selection and the remote joystick link
//!
//! The operating mode is fixed at boot. Supervised modes exchange framed
//! commands and telemetry with an upstream computer; remote mode drives the
//! wheels from a handheld transmitter and falls back to a neutral sample when
//! the transmitter goes quiet.

mod mixer;
mod mode;
mod remote;

pub use mixer::mix_stick;
pub use mode::LinkMode;
pub use remote::{RemoteInput, RemoteSample, RemoteStatus, REMOTE_CENTER, REMOTE_SAMPLE_LEN};
