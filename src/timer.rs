//! Capture timer seam
//!
//! The board crate configures a timer peripheral with a free-running counter
//! and an edge-triggered input capture channel, then exposes it to this crate
//! through [`CaptureTimer`]. Methods take `&self`: timer registers have their
//! own hardware interior mutability, and both the interrupt handler and the
//! main flow need to reach the same channel controls.

/// A free-running 16-bit timer with an edge-capture interrupt channel.
pub trait CaptureTimer {
    /// Read the current free-running counter value.
    fn counter(&self) -> u16;

    /// Enable the edge-capture interrupt source.
    fn listen(&self);

    /// Disable the edge-capture interrupt source.
    ///
    /// # Note
    /// After this returns, no further [`counter()`](CaptureTimer::counter)
    /// captures are delivered to the interrupt handler. This is what quiesces
    /// the producer before the main flow reads the capture buffer.
    fn unlisten(&self);

    /// Acknowledge the pending capture interrupt flag.
    ///
    /// Must be idempotent; the handler calls this on every invocation,
    /// whether or not a sample was stored.
    fn clear_irq(&self);
}
