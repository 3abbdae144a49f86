#![no_std]
#![deny(missing_docs)]
//! # embedded-twowire
//! A no-std contract for a write-only two-wire (clock + data) serial master.
//!
//! This crate provides a trait-based interface for driving devices that speak
//! a two-wire register protocol but are only ever written to: start and stop
//! conditions, MSB-first byte transmission, and acknowledge sampling.
//! [TwoWire] defines the operations an implementation must provide; the
//! acknowledge bit flows back to callers only as a success/failure signal,
//! never as data.
//!
//! There is deliberately no read path, no arbitration, and no clock
//! stretching: the target devices are single-master, write-only peripherals
//! such as current-output DACs.

mod error;
mod traits;
pub use error::TwoWireError;
pub use traits::TwoWire;

/// Error type for two-wire operations.
pub type TwoWireResult<T, E> = Result<T, TwoWireError<E>>;

/// Direction bit appended to a 7-bit address for a write transfer.
pub const TWOWIRE_DIR_WRITE: u8 = 0x00;
