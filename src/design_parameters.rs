/// Number of edge timestamps captured per round.
pub const CAPTURE_CAPACITY: usize = 1000;

/// Number of histogram buckets.
pub const NUM_BUCKETS: usize = 100;

/// Timer tick count of the shortest period mapped to bucket 0. At the 1 MHz
/// capture tick rate this is 950 us, centering the bucket range on a nominal
/// 1 ms (0x03E8 tick) edge period.
pub const LOW_PERIOD: u16 = 0x03B6;
