//! Byte-at-a-time inbound frame receiver
//!
//! Bytes are ignored until a start marker arrives; the next
//! [`COMMAND_BODY_LEN`] bytes are then collected into a buffer. A start marker
//! seen mid-collection discards the partial buffer and restarts collection
//! from the new marker. This resynchronisation is silent: it is counted, not
//! reported as an error. As a consequence a payload byte equal to the marker
//! can never be carried by a frame.

use heapless::Vec;

use super::command::{COMMAND_BODY_LEN, COMMAND_START};

/// Receiver counters for monitoring
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReceiverStats {
    /// Complete frame bodies handed out
    pub frames: u32,
    /// Partial buffers dropped because a new start marker arrived
    pub resyncs: u32,
    /// Bytes dropped while hunting for a marker or by a resync
    pub discarded_bytes: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RxState {
    Hunting,
    Collecting,
}

/// Inbound frame receiver
#[derive(Debug, Clone)]
pub struct FrameReceiver {
    state: RxState,
    buffer: Vec<u8, COMMAND_BODY_LEN>,
    stats: ReceiverStats,
}

impl Default for FrameReceiver {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameReceiver {
    /// Create a receiver hunting for a start marker
    pub fn new() -> Self {
        Self {
            state: RxState::Hunting,
            buffer: Vec::new(),
            stats: ReceiverStats::default(),
        }
    }

    /// Feed one byte
    ///
    /// Returns the frame body (checksum byte followed by the payload) once
    /// exactly [`COMMAND_BODY_LEN`] bytes have followed a start marker.
    pub fn push(&mut self, byte: u8) -> Option<[u8; COMMAND_BODY_LEN]> {
        if byte == COMMAND_START {
            if self.state == RxState::Collecting && !self.buffer.is_empty() {
                self.stats.resyncs = self.stats.resyncs.saturating_add(1);
                self.discard(self.buffer.len());
            }
            self.buffer.clear();
            self.state = RxState::Collecting;
            return None;
        }

        if self.state == RxState::Hunting {
            self.discard(1);
            return None;
        }

        // The buffer is drained as soon as it fills up, so a full buffer
        // means the receiver state is corrupt; drop it and hunt again.
        if self.buffer.push(byte).is_err() {
            self.discard(self.buffer.len() + 1);
            self.reset();
            return None;
        }
        if self.buffer.len() < COMMAND_BODY_LEN {
            return None;
        }

        let mut body = [0u8; COMMAND_BODY_LEN];
        body.copy_from_slice(&self.buffer);
        self.buffer.clear();
        self.state = RxState::Hunting;
        self.stats.frames = self.stats.frames.saturating_add(1);
        Some(body)
    }

    /// True while bytes after a start marker are being collected
    pub fn is_collecting(&self) -> bool {
        self.state == RxState::Collecting
    }

    /// Number of body bytes collected so far
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Drop any partial frame and hunt for the next marker
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.state = RxState::Hunting;
    }

    /// Receiver counters
    pub fn stats(&self) -> ReceiverStats {
        self.stats
    }

    fn discard(&mut self, count: usize) {
        let count = u32::try_from(count).unwrap_or(u32::MAX);
        self.stats.discarded_bytes = self.stats.discarded_bytes.saturating_add(count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STOP_BODY: [u8; COMMAND_BODY_LEN] = [0xFF, 0x00, 0x00, 90, 0, 90, 0, 90, 0, 0xFF, 0xFF];

    fn feed(rx: &mut FrameReceiver, bytes: &[u8]) -> std::vec::Vec<[u8; COMMAND_BODY_LEN]> {
        bytes.iter().filter_map(|&b| rx.push(b)).collect()
    }

    #[test]
    fn ignores_bytes_before_marker() {
        let mut rx = FrameReceiver::new();
        assert!(feed(&mut rx, &[1, 2, 3, 0xFF]).is_empty());
        assert!(!rx.is_collecting());
        assert_eq!(rx.stats().discarded_bytes, 4);
    }

    #[test]
    fn collects_exactly_one_body_after_marker() {
        let mut rx = FrameReceiver::new();
        let mut bytes = std::vec![0x00, COMMAND_START];
        bytes.extend_from_slice(&STOP_BODY);
        bytes.push(0x42);

        let frames = feed(&mut rx, &bytes);
        assert_eq!(frames, [STOP_BODY]);
        assert!(!rx.is_collecting());
        assert_eq!(rx.stats().frames, 1);
    }

    #[test]
    fn marker_mid_body_restarts_collection() {
        let mut rx = FrameReceiver::new();
        let mut bytes = std::vec![COMMAND_START, 0x01, 0x02, 0x03, COMMAND_START];
        bytes.extend_from_slice(&STOP_BODY);

        let frames = feed(&mut rx, &bytes);
        assert_eq!(frames, [STOP_BODY]);
        assert_eq!(rx.stats().resyncs, 1);
        assert_eq!(rx.stats().discarded_bytes, 3);
    }

    #[test]
    fn repeated_marker_without_data_is_not_a_resync() {
        let mut rx = FrameReceiver::new();
        feed(&mut rx, &[COMMAND_START, COMMAND_START]);
        assert!(rx.is_collecting());
        assert_eq!(rx.buffered(), 0);
        assert_eq!(rx.stats().resyncs, 0);
    }

    #[test]
    fn frames_split_across_calls() {
        let mut rx = FrameReceiver::new();
        assert!(feed(&mut rx, &[COMMAND_START]).is_empty());
        assert!(feed(&mut rx, &STOP_BODY[..4]).is_empty());
        assert_eq!(rx.buffered(), 4);
        assert_eq!(feed(&mut rx, &STOP_BODY[4..]), [STOP_BODY]);
    }

    #[test]
    fn long_marker_free_run_yields_one_frame_then_hunts() {
        let mut rx = FrameReceiver::new();
        let mut bytes = std::vec![COMMAND_START];
        bytes.extend_from_slice(&STOP_BODY);
        bytes.extend_from_slice(&[0x55; 40]);

        let frames = feed(&mut rx, &bytes);
        assert_eq!(frames, [STOP_BODY]);
        assert!(!rx.is_collecting());
        assert_eq!(rx.buffered(), 0);
        assert_eq!(rx.stats().discarded_bytes, 40);
    }

    #[test]
    fn reset_drops_partial_frame() {
        let mut rx = FrameReceiver::new();
        feed(&mut rx, &[COMMAND_START, 1, 2]);
        rx.reset();
        assert!(!rx.is_collecting());
        assert!(feed(&mut rx, &STOP_BODY).is_empty());
    }
}
