//! Test doubles for the hardware seams.
use core::convert::Infallible;
use core::sync::atomic::{AtomicBool, AtomicU16, AtomicUsize, Ordering};

use crate::timer::CaptureTimer;

/// Simulated capture timer: a settable counter plus bookkeeping for the
/// interrupt-control calls the handler is required to make.
#[derive(Default)]
pub struct SimTimer {
    counter: AtomicU16,
    listening: AtomicBool,
    unlistens: AtomicUsize,
    acks: AtomicUsize,
}

impl SimTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_counter(&self, value: u16) {
        self.counter.store(value, Ordering::SeqCst);
    }

    /// Advance the free-running counter, wrapping at 16 bits.
    pub fn advance(&self, ticks: u16) {
        let value = self.counter.load(Ordering::SeqCst).wrapping_add(ticks);
        self.counter.store(value, Ordering::SeqCst);
    }

    pub fn is_listening(&self) -> bool {
        self.listening.load(Ordering::SeqCst)
    }

    pub fn unlisten_count(&self) -> usize {
        self.unlistens.load(Ordering::SeqCst)
    }

    pub fn ack_count(&self) -> usize {
        self.acks.load(Ordering::SeqCst)
    }
}

impl CaptureTimer for SimTimer {
    fn counter(&self) -> u16 {
        self.counter.load(Ordering::SeqCst)
    }

    fn listen(&self) {
        self.listening.store(true, Ordering::SeqCst);
    }

    fn unlisten(&self) {
        self.listening.store(false, Ordering::SeqCst);
        self.unlistens.fetch_add(1, Ordering::SeqCst);
    }

    fn clear_irq(&self) {
        self.acks.fetch_add(1, Ordering::SeqCst);
    }
}

/// In-memory operator console: scripted input, captured output.
pub struct TestConsole {
    input: std::vec::Vec<u8>,
    cursor: usize,
    output: std::vec::Vec<u8>,
}

impl TestConsole {
    pub fn with_input(input: &[u8]) -> Self {
        Self {
            input: input.to_vec(),
            cursor: 0,
            output: std::vec::Vec::new(),
        }
    }

    /// Everything the session wrote, as text.
    pub fn output(&self) -> &str {
        core::str::from_utf8(&self.output).unwrap()
    }
}

impl embedded_io::ErrorType for TestConsole {
    type Error = Infallible;
}

impl embedded_io::Read for TestConsole {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let remaining = &self.input[self.cursor..];
        let count = remaining.len().min(buf.len()).min(1);
        buf[..count].copy_from_slice(&remaining[..count]);
        self.cursor += count;
        Ok(count)
    }
}

impl embedded_io::Write for TestConsole {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.output.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
