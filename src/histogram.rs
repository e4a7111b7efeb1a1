//! Period histogram
//!
//! Bins inter-edge periods into `B` one-tick-wide buckets starting at a
//! configurable low period. Periods outside the bucket range are discarded,
//! not clamped: a spurious or missed edge must not corrupt adjacent buckets.
use crate::capture::Capture;

/// Fixed-size table of period occurrence counts.
///
/// Bucket `i` counts periods of exactly `low_period + i` timer ticks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Buckets<const B: usize> {
    low_period: u16,
    counts: [u16; B],
}

impl<const B: usize> Buckets<B> {
    /// Construct an all-zero table with bucket 0 at `low_period` ticks.
    pub const fn new(low_period: u16) -> Self {
        Self {
            low_period,
            counts: [0; B],
        }
    }

    /// The period, in timer ticks, that maps to bucket 0.
    pub fn low_period(&self) -> u16 {
        self.low_period
    }

    /// Zero all counts. Called once per round, before arming capture.
    pub fn reset(&mut self) {
        self.counts = [0; B];
    }

    /// Count one observed period, in timer ticks.
    ///
    /// Periods outside `[low_period, low_period + B)` are silently discarded.
    pub fn record(&mut self, period: u16) {
        // Wrapping subtraction sends periods below `low_period` far out of
        // range instead of aliasing them into low buckets.
        let index = period.wrapping_sub(self.low_period);
        if let Some(count) = self.counts.get_mut(usize::from(index)) {
            *count = count.saturating_add(1);
        }
    }

    /// Bin the periods between adjacent samples of a completed capture.
    ///
    /// Deltas use 16-bit wrapping subtraction, matching the free-running
    /// counter's modulo arithmetic across counter rollover. The first sample
    /// only seeds the first delta. Not idempotent: binning the same capture
    /// twice doubles every count, so callers reset between rounds.
    pub fn accumulate<const N: usize>(&mut self, capture: &Capture<N>) {
        capture.with_samples(|samples| {
            for pair in samples.windows(2) {
                self.record(pair[1].wrapping_sub(pair[0]));
            }
        });
    }

    /// All counts, indexed by bucket.
    pub fn counts(&self) -> &[u16; B] {
        &self.counts
    }

    /// Non-empty buckets as `(period, count)`, in ascending period order.
    pub fn occupied(&self) -> impl Iterator<Item = (u16, u16)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count != 0)
            .map(|(index, &count)| (self.low_period.wrapping_add(index as u16), count))
    }

    /// Total number of periods binned.
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&count| u32::from(count)).sum()
    }
}
