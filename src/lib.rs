//! Inter-edge period capture and histogram engine
//!
//! # Description
//! This crate implements the device-independent core of an edge-period meter:
//! a hardware timer channel timestamps qualifying input edges from an
//! interrupt handler into a fixed-capacity buffer, and once the buffer fills,
//! the main flow bins the inter-arrival periods into a histogram and renders
//! it on the operator console.
//!
//! # Design
//! Hardware stays behind two narrow seams: [`timer::CaptureTimer`] for the
//! free-running counter and its edge-interrupt control, and the blocking
//! [`embedded_io`] traits for the console. The board crate owns register
//! setup and the interrupt vector; the vector's only job is to call
//! [`capture::edge_isr`] with the shared [`capture::Capture`] state.
//!
//! Producer and consumer never touch the capture state simultaneously: the
//! interrupt source is disabled before completion is published, and the main
//! flow reads samples only after observing completion. See [`capture`] for
//! the hand-off protocol.
#![cfg_attr(not(test), no_std)]

pub mod capture;
pub mod design_parameters;
pub mod histogram;
pub mod report;
pub mod session;
pub mod timer;

#[cfg(test)]
pub mod testing;

pub use capture::{edge_isr, Capture};
pub use histogram::Buckets;
pub use session::Session;
pub use timer::CaptureTimer;
