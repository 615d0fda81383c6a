//! Remote joystick input and its link watchdog

/// Stick reading at rest
pub const REMOTE_CENTER: i16 = 512;

/// Words in one remote sample
pub const REMOTE_SAMPLE_LEN: usize = 6;

/// One reading from the handheld transmitter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteSample {
    /// Stick 1 horizontal axis
    pub x1: i16,
    /// Stick 1 vertical axis
    pub y1: i16,
    pub x2: i16,
    pub y2: i16,
    pub button1: i16,
    pub button2: i16,
}

impl RemoteSample {
    /// Sticks centred, buttons released
    pub const NEUTRAL: Self = Self {
        x1: REMOTE_CENTER,
        y1: REMOTE_CENTER,
        x2: REMOTE_CENTER,
        y2: REMOTE_CENTER,
        button1: 0,
        button2: 0,
    };

    pub const fn from_words(words: [i16; REMOTE_SAMPLE_LEN]) -> Self {
        Self {
            x1: words[0],
            y1: words[1],
            x2: words[2],
            y2: words[3],
            button1: words[4],
            button2: words[5],
        }
    }

    /// Decode a little-endian radio payload
    pub fn from_le_bytes(bytes: &[u8; REMOTE_SAMPLE_LEN * 2]) -> Self {
        let mut words = [0i16; REMOTE_SAMPLE_LEN];
        for (word, pair) in words.iter_mut().zip(bytes.chunks_exact(2)) {
            *word = i16::from_le_bytes([pair[0], pair[1]]);
        }
        Self::from_words(words)
    }
}

impl Default for RemoteSample {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Remote link status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteStatus {
    /// No sample since boot
    NeverConnected,
    /// Samples arriving within the timeout
    Active,
    /// Silence exceeded the timeout; the neutral sample is in force
    Lost,
}

/// Latest remote sample plus the link watchdog
#[derive(Debug, Clone)]
pub struct RemoteInput {
    sample: RemoteSample,
    last_update_ms: u64,
    status: RemoteStatus,
    timeout_ms: u32,
}

impl RemoteInput {
    pub const fn new(timeout_ms: u32) -> Self {
        Self {
            sample: RemoteSample::NEUTRAL,
            last_update_ms: 0,
            status: RemoteStatus::NeverConnected,
            timeout_ms,
        }
    }

    /// Store a fresh sample; recovers a lost link
    pub fn update(&mut self, sample: RemoteSample, now_ms: u64) {
        self.sample = sample;
        self.last_update_ms = now_ms;
        self.status = RemoteStatus::Active;
    }

    /// Check the watchdog
    ///
    /// Returns `true` on the transition to `Lost`. Once lost, the sample
    /// stays neutral until the next `update`.
    pub fn check_timeout(&mut self, now_ms: u64) -> bool {
        if self.status != RemoteStatus::Active {
            return false;
        }
        let silent_ms = now_ms.saturating_sub(self.last_update_ms);
        if silent_ms > u64::from(self.timeout_ms) {
            self.status = RemoteStatus::Lost;
            self.sample = RemoteSample::NEUTRAL;
            return true;
        }
        false
    }

    pub fn sample(&self) -> RemoteSample {
        self.sample
    }

    pub fn status(&self) -> RemoteStatus {
        self.status
    }

    pub fn last_update_ms(&self) -> u64 {
        self.last_update_ms
    }

    pub fn is_active(&self) -> bool {
        self.status == RemoteStatus::Active
    }
}
