//! Edge timestamp capture state and interrupt handler body
//!
//! # Design
//! One [`Capture`] instance is shared between the capture-channel interrupt
//! and the main flow, typically as a `static` so the interrupt vector has a
//! stable address. The hand-off protocol makes the two contexts strictly
//! non-overlapping:
//!
//! * The producer ([`edge_isr`]) appends samples only while the edge
//!   interrupt is enabled.
//! * On the edge after the buffer fills, the producer disables the interrupt
//!   source *first* and only then publishes completion.
//! * The consumer reads samples only after observing completion, at which
//!   point the producer is quiesced.
//! * [`Capture::reset`] is called only between rounds, with the producer
//!   still quiesced.
//!
//! The completion flag's Release store / Acquire load pair is the only
//! synchronization edge the protocol needs. The sample vector still sits
//! behind a spin mutex to satisfy aliasing rules for the shared reference,
//! but the protocol keeps it uncontended.
use core::sync::atomic::{AtomicBool, Ordering};

use heapless::Vec;

use crate::timer::CaptureTimer;

/// Shared capture state: the timestamp buffer of one round.
///
/// `N` is the number of samples captured per round
/// ([`CAPTURE_CAPACITY`](crate::design_parameters::CAPTURE_CAPACITY) on the
/// reference configuration).
pub struct Capture<const N: usize> {
    samples: spin::Mutex<Vec<u16, N>>,
    complete: AtomicBool,
}

impl<const N: usize> Capture<N> {
    /// Construct empty capture state. `const` so it can back a `static`.
    pub const fn new() -> Self {
        Self {
            samples: spin::Mutex::new(Vec::new()),
            complete: AtomicBool::new(false),
        }
    }

    /// Discard all samples and clear the completion flag.
    ///
    /// # Note
    /// Must only be called while the producer is quiesced (edge interrupt
    /// disabled), i.e. before re-arming a round.
    pub fn reset(&self) {
        self.samples.lock().clear();
        self.complete.store(false, Ordering::Release);
    }

    /// Append one timer sample from the producer.
    ///
    /// Returns whether the sample was stored. A `false` return means the
    /// buffer already holds `N` samples; nothing is written and the cursor
    /// does not move. The caller treats this as the completion trigger.
    #[must_use]
    pub fn try_append(&self, sample: u16) -> bool {
        self.samples.lock().push(sample).is_ok()
    }

    /// Publish completion of the round.
    ///
    /// Called by the producer after it has disabled its interrupt source, so
    /// that a consumer observing `true` can rely on the producer being
    /// quiesced. Also usable as a test hook to force a round to end.
    pub fn finish(&self) {
        self.complete.store(true, Ordering::Release);
    }

    /// Whether the round is complete. Remains `true` until [`reset`](Self::reset).
    pub fn is_complete(&self) -> bool {
        self.complete.load(Ordering::Acquire)
    }

    /// Number of samples stored so far.
    pub fn len(&self) -> usize {
        self.samples.lock().len()
    }

    /// Whether no samples are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run `f` on the ordered sample sequence.
    ///
    /// # Note
    /// Only meaningful once [`is_complete`](Self::is_complete) has returned
    /// `true`; before that the producer may still be appending.
    pub fn with_samples<R>(&self, f: impl FnOnce(&[u16]) -> R) -> R {
        f(&self.samples.lock())
    }
}

impl<const N: usize> Default for Capture<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Edge-capture interrupt handler body.
///
/// Call once per qualifying edge from the capture-channel interrupt vector.
/// Stores the current counter value if space remains; on the edge after the
/// buffer fills, disables the edge interrupt and publishes completion. The
/// pending interrupt flag is acknowledged on every invocation, on both
/// paths.
pub fn edge_isr<T: CaptureTimer, const N: usize>(timer: &T, capture: &Capture<N>) {
    if !capture.try_append(timer.counter()) {
        // Quiesce before publishing so a consumer that sees completion can
        // never race a live producer.
        timer.unlisten();
        capture.finish();
    }
    timer.clear_irq();
}
