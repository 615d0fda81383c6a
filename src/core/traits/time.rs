//! Embassy-based time source

pub use wheelbot_core::traits::{MockTime, TimeSource};

/// Time source backed by `embassy_time::Instant`
///
/// ```ignore
/// use wheelbot::core::traits::{EmbassyTime, TimeSource};
///
/// let time = EmbassyTime;
/// let now = time.now_ms();
/// ```
#[cfg(feature = "embassy")]
#[derive(Clone, Copy, Default)]
pub struct EmbassyTime;

#[cfg(feature = "embassy")]
impl TimeSource for EmbassyTime {
    fn now_ms(&self) -> u64 {
        embassy_time::Instant::now().as_millis()
    }

    fn now_us(&self) -> u64 {
        embassy_time::Instant::now().as_micros()
    }
}
