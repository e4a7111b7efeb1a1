//! Capture session controller
//!
//! Drives the arm -> fill -> process -> report cycle, one round at a time.
//! The controller owns the bucket table and holds shared references to the
//! capture state and timer; the capture-channel interrupt is the producer.
//!
//! The wait for completion is a tight poll on the completion flag. There is
//! no scheduler to block on and no timeout: with no edge signal present the
//! round never ends, and the device appears unresponsive until one arrives.
use core::fmt;

use embedded_io::{Read, Write};

use crate::capture::Capture;
use crate::histogram::Buckets;
use crate::report;
use crate::timer::CaptureTimer;

/// Session failure.
///
/// Only the operator console can fail; buffer-full and out-of-range periods
/// are normal control flow, not errors.
#[derive(Debug, thiserror::Error)]
pub enum Error<E> {
    /// The console transport reported an error.
    #[error("console i/o: {0:?}")]
    Console(E),
    /// The console read returned no data (end of input).
    #[error("console closed")]
    ConsoleClosed,
    /// Report rendering failed outside the console transport.
    #[error("report formatting")]
    Format,
}

/// The session controller for one capture channel.
pub struct Session<'a, T, C, const N: usize, const B: usize> {
    timer: &'a T,
    capture: &'a Capture<N>,
    console: C,
    buckets: Buckets<B>,
}

impl<'a, T, C, const N: usize, const B: usize> Session<'a, T, C, N, B>
where
    T: CaptureTimer,
    C: Read + Write,
{
    /// Construct the controller.
    ///
    /// # Args
    /// * `timer` - The capture timer, shared with the interrupt handler.
    /// * `capture` - The capture state, shared with the interrupt handler.
    /// * `console` - The operator console transport.
    /// * `low_period` - The period in timer ticks that maps to bucket 0.
    pub fn new(timer: &'a T, capture: &'a Capture<N>, console: C, low_period: u16) -> Self {
        Self {
            timer,
            capture,
            console,
            buckets: Buckets::new(low_period),
        }
    }

    /// Run capture rounds forever.
    pub fn run(&mut self) -> ! {
        loop {
            if let Err(error) = self.run_round() {
                log::warn!("capture round failed: {}", error);
            }
        }
    }

    /// Drive one full round.
    ///
    /// Prompts the operator, blocks on a keypress, arms capture, spins until
    /// the interrupt producer publishes completion, then bins the periods
    /// and renders the report.
    pub fn run_round(&mut self) -> Result<(), Error<C::Error>> {
        self.write_str("Strike enter to begin capture.\r\n")?;
        self.wait_for_operator()?;

        self.buckets.reset();
        self.capture.reset();
        self.timer.listen();
        log::info!("capture armed: {} samples", N);

        // The producer fills the buffer from interrupt context; completion
        // arrives with the interrupt source already disabled, so the reads
        // below never overlap producer writes.
        while !self.capture.is_complete() {
            core::hint::spin_loop();
        }

        self.buckets.accumulate(self.capture);
        log::info!(
            "capture complete: {} samples, {} periods binned",
            self.capture.len(),
            self.buckets.total()
        );

        self.write_report()
    }

    /// The bucket table of the most recent round.
    pub fn buckets(&self) -> &Buckets<B> {
        &self.buckets
    }

    /// Block until the operator sends a character. One character consumed
    /// per round.
    fn wait_for_operator(&mut self) -> Result<(), Error<C::Error>> {
        let mut byte = [0u8; 1];
        match self.console.read(&mut byte).map_err(Error::Console)? {
            0 => Err(Error::ConsoleClosed),
            _ => Ok(()),
        }
    }

    fn write_str(&mut self, s: &str) -> Result<(), Error<C::Error>> {
        self.console
            .write_all(s.as_bytes())
            .map_err(Error::Console)
    }

    fn write_report(&mut self) -> Result<(), Error<C::Error>> {
        let mut sink = FmtSink {
            console: &mut self.console,
            error: None,
        };
        if report::write_report(&mut sink, &self.buckets).is_err() {
            // The adapter records the transport error behind fmt's unit
            // error before failing the write.
            return Err(match sink.error {
                Some(error) => Error::Console(error),
                None => Error::Format,
            });
        }
        Ok(())
    }
}

/// `core::fmt::Write` adapter over the console transport, capturing the
/// transport error that `fmt::Error` cannot carry.
struct FmtSink<'a, C: Write> {
    console: &'a mut C,
    error: Option<C::Error>,
}

impl<C: Write> fmt::Write for FmtSink<'_, C> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.console.write_all(s.as_bytes()).map_err(|error| {
            self.error = Some(error);
            fmt::Error
        })
    }
}
