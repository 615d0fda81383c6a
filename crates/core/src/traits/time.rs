//! Monotonic clock abstraction shared by the kernel and the motion state machine.
//!
//! Every timing decision in the controller (task due-ness, move budgets, the
//! remote link watchdog) is an elapsed-time comparison against one
//! `TimeSource`. No sleeps, no timers with callbacks.

use core::cell::Cell;

/// Platform-agnostic monotonic time source.
///
/// - `EmbassyTime` (in the `wheelbot` crate) for embedded targets
/// - `MockTime` for host testing with controllable time
///
/// # Example
///
/// ```
/// use wheelbot_core::traits::{MockTime, TimeSource};
///
/// fn is_due<T: TimeSource>(time: &T, last_fire_ms: u64, period_ms: u64) -> bool {
///     time.elapsed_ms_since(last_fire_ms) >= period_ms
/// }
///
/// let time = MockTime::new();
/// time.advance_ms(48);
/// assert!(is_due(&time, 0, 48));
/// ```
pub trait TimeSource: Clone + Send + Sync {
    /// Returns current time in milliseconds since system start.
    fn now_ms(&self) -> u64;

    /// Returns current time in microseconds since system start.
    fn now_us(&self) -> u64;

    /// Returns elapsed time in microseconds since a reference point.
    ///
    /// Uses saturating subtraction so a reference in the future reads as zero.
    fn elapsed_since(&self, reference_us: u64) -> u64 {
        self.now_us().saturating_sub(reference_us)
    }

    /// Returns elapsed time in milliseconds since a reference point.
    fn elapsed_ms_since(&self, reference_ms: u64) -> u64 {
        self.now_ms().saturating_sub(reference_ms)
    }
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Mock time source with explicit advancement.
///
/// ```
/// use wheelbot_core::traits::{MockTime, TimeSource};
///
/// let time = MockTime::new();
/// time.advance_ms(5);
/// assert_eq!(time.now_ms(), 5);
/// assert_eq!(time.now_us(), 5_000);
/// ```
#[derive(Clone, Default)]
pub struct MockTime {
    current_us: Cell<u64>,
}

// Safety: MockTime is only used in single-threaded test contexts where Cell
// is sound. The Send + Sync bounds on TimeSource exist for embedded statics.
unsafe impl Send for MockTime {}
unsafe impl Sync for MockTime {}

impl MockTime {
    /// Creates a new `MockTime` starting at time 0.
    pub fn new() -> Self {
        Self {
            current_us: Cell::new(0),
        }
    }

    /// Creates a new `MockTime` starting at the given millisecond reading.
    pub fn with_initial_ms(ms: u64) -> Self {
        Self {
            current_us: Cell::new(ms * 1000),
        }
    }

    /// Sets the current time to an absolute value in microseconds.
    pub fn set(&self, us: u64) {
        self.current_us.set(us);
    }

    /// Advances the current time by `us` microseconds.
    pub fn advance(&self, us: u64) {
        self.current_us.set(self.current_us.get() + us);
    }

    /// Advances the current time by `ms` milliseconds.
    pub fn advance_ms(&self, ms: u64) {
        self.advance(ms * 1000);
    }
}

impl TimeSource for MockTime {
    fn now_ms(&self) -> u64 {
        self.current_us.get() / 1000
    }

    fn now_us(&self) -> u64 {
        self.current_us.get()
    }
}
