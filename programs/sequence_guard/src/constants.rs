/// Constants for the VAA Sequence Guard
pub const TRACKER_SEED: &[u8] = b"tracker";

/// Number of sequence slots per window. The tracker represents the half-open
/// range [next, next + 2 * WINDOW_SIZE) at any point in time; anything below
/// `next` is permanently rejected.
pub const WINDOW_SIZE: usize = 20;

/// DOS protection: maximum distance a sequence number may land ahead of
/// `next`. Bounds the window-slide loop at MAX_SEQUENCE_GAP / WINDOW_SIZE
/// iterations per call.
pub const MAX_SEQUENCE_GAP: u64 = 1_000;
