#![no_std]
#![deny(missing_docs)]

/*! # GP8302
 *
 * A driver for the Guestgood GP8302 current-output DAC, which turns a
 * 12-bit code into a 0-25 mA loop current for standard 4-20 mA
 * instrumentation runs.
 *
 * The chip speaks a write-only two-wire register protocol; this crate is
 * generic over any [`TwoWire`](embedded_twowire::TwoWire) master, typically
 * the bit-banged `twowire-bitbang` implementation since the chip's timing
 * is easiest to meet on a dedicated pin pair. Beyond the current register
 * write, the driver implements the chip's multi-transaction sequence for
 * persisting the latched output to non-volatile memory, and a conversion
 * layer with optional two-point 4-20 mA calibration.
 *
 * The chip does not reliably acknowledge bytes past its address, so by
 * default only the discovery probe looks at the acknowledge bit and every
 * write proceeds unconditionally. The `strict-ack` feature turns on
 * acknowledge checking for every transmitted byte as a hardening measure;
 * leave it off unless your board is known to acknowledge everything.
 */

#[cfg(test)]
extern crate std;

pub use embedded_twowire::{TwoWire, TwoWireError, TwoWireResult};
mod convert;

pub use convert::Calibration;
use embedded_hal::delay::DelayNs;

/// Outcome of a bus discovery probe, numbered as the chip vendor's status
/// codes.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStatus {
    /// The device acknowledged its address.
    Found = 0,
    /// Nothing acknowledged the address.
    NotFound = 2,
}

/// A GP8302 current-output DAC on a write-only two-wire bus.
///
/// Takes ownership of a bus master implementing the
/// [`TwoWire`](embedded_twowire::TwoWire) trait. The driver remembers the
/// last code written so that [`store`](Gp8302::store) can persist it.
pub struct Gp8302<B> {
    bus: B,
    addr: u8,
    calibration: Option<Calibration>,
    digital: u16,
}

impl<B> Gp8302<B> {
    /// Creates a new driver over the given bus, at the chip's factory
    /// address, uncalibrated, with the output code taken as zero.
    pub fn new(bus: B) -> Self {
        Gp8302 {
            bus,
            addr: GP8302_DEFAULT_ADDRESS,
            calibration: None,
            digital: 0,
        }
    }

    /// Set a non-default 7-bit device address.
    pub fn with_address(mut self, addr: u8) -> Self {
        self.addr = addr;
        self
    }

    /// Consumes the driver and gives the bus back.
    pub fn release(self) -> B {
        self.bus
    }

    /// The last 12-bit code written to the output register.
    pub fn output_code(&self) -> u16 {
        self.digital
    }

    /// The active calibration, if one has been accepted.
    ///
    /// [`set_calibration`](Gp8302::set_calibration) rejects invalid pairs
    /// silently, so callers that need to know must re-query through here.
    pub fn calibration(&self) -> Option<Calibration> {
        self.calibration
    }

    /// Installs a two-point 4-20 mA calibration: the codes measured to
    /// produce exactly 4 mA and 20 mA on the loop.
    ///
    /// An invalid pair (`code_4ma >= code_20ma`, or `code_20ma > 4095`) is
    /// ignored and the previous calibration state, including whether one
    /// was active at all, is left untouched.
    pub fn set_calibration(&mut self, code_4ma: u16, code_20ma: u16) {
        if let Some(cal) = Calibration::new(code_4ma, code_20ma) {
            self.calibration = Some(cal);
        }
    }
}

impl<B: TwoWire> Gp8302<B> {
    /// Checks whether the device is reachable: one address byte with the
    /// acknowledge captured, framed by start and stop.
    ///
    /// A failed probe does not latch anywhere; every other operation
    /// proceeds regardless of what this returned.
    ///
    /// # Errors
    /// Only propagated bus/pin errors. An absent device is a status, not
    /// an error.
    pub fn probe(&mut self) -> TwoWireResult<ProbeStatus, B::BusError> {
        self.bus.start()?;
        let acked = self.bus.address_write(self.addr)?;
        self.bus.stop()?;
        Ok(if acked {
            ProbeStatus::Found
        } else {
            ProbeStatus::NotFound
        })
    }

    /// Writes a 12-bit code to the current-output register and returns the
    /// loop current it produces.
    ///
    /// The code is masked to 12 bits and split across two bytes the way the
    /// chip lays its register out: low byte is the bottom nibble shifted
    /// into the top nibble position (its own low nibble always zero), high
    /// byte is the top eight bits.
    ///
    /// # Errors
    /// Only propagated bus/pin errors; acknowledges past the address byte
    /// are not checked unless the `strict-ack` feature is enabled.
    pub fn write_output_code(&mut self, code: u16) -> TwoWireResult<f32, B::BusError> {
        self.digital = code & GP8302_CURRENT_RESOLUTION;
        self.bus.start()?;
        self.send_address()?;
        self.send(GP8302_CURRENT_REG)?;
        self.send(((self.digital << 4) & 0xf0) as u8)?;
        self.send((self.digital >> 4) as u8)?;
        self.bus.stop()?;
        Ok(convert::code_to_current(self.digital))
    }

    /// Outputs a requested loop current, clamped to the chip's 0-25 mA
    /// rating, and returns the 12-bit code that was written.
    ///
    /// With a calibration installed and the clamped request inside the
    /// 4-20 mA band, the calibrated mapping is used; otherwise the
    /// full-range linear mapping applies (see [`Calibration`]).
    ///
    /// # Errors
    /// As for [`write_output_code`](Gp8302::write_output_code).
    pub fn write_output_current(&mut self, ma: f32) -> TwoWireResult<u16, B::BusError> {
        let code = convert::current_to_code(ma, self.calibration);
        self.write_output_code(code)?;
        Ok(self.digital)
    }

    /// Persists the currently latched output code to the chip's
    /// non-volatile memory, so it is restored after power loss.
    ///
    /// This is the chip's fixed unlock-and-commit sequence: a bare header
    /// transaction, an unlock transaction, then the device address followed
    /// by eight zero command bytes sent back-to-back without the per-bit
    /// hold (the chip's store timing permits it and it shortens the
    /// transaction). Blocks for the chip's 10 ms internal write cycle
    /// before returning.
    ///
    /// # Errors
    /// As for [`write_output_code`](Gp8302::write_output_code).
    pub fn store<D: DelayNs>(&mut self, delay: &mut D) -> TwoWireResult<(), B::BusError> {
        self.bus.start()?;
        self.send(GP8302_STORE_TIMING_HEAD)?;
        self.bus.stop()?;

        self.bus.start()?;
        self.send(GP8302_STORE_TIMING_ADDR)?;
        self.send(GP8302_STORE_TIMING_CMD1)?;
        self.bus.stop()?;

        self.bus.start()?;
        self.send_address()?;
        for _ in 0..8 {
            self.send_quick(GP8302_STORE_TIMING_CMD2)?;
        }
        self.bus.stop()?;

        delay.delay_ms(GP8302_STORE_DELAY_MS);
        Ok(())
    }

    fn send_address(&mut self) -> TwoWireResult<(), B::BusError> {
        let _acked = self.bus.address_write(self.addr)?;
        #[cfg(feature = "strict-ack")]
        if !_acked {
            return Err(TwoWireError::NoAcknowledge);
        }
        Ok(())
    }

    fn send(&mut self, byte: u8) -> TwoWireResult<(), B::BusError> {
        let _acked = self.bus.write_byte(byte)?;
        #[cfg(feature = "strict-ack")]
        if !_acked {
            return Err(TwoWireError::NoAcknowledge);
        }
        Ok(())
    }

    fn send_quick(&mut self, byte: u8) -> TwoWireResult<(), B::BusError> {
        let _acked = self.bus.write_byte_quick(byte)?;
        #[cfg(feature = "strict-ack")]
        if !_acked {
            return Err(TwoWireError::NoAcknowledge);
        }
        Ok(())
    }
}

/// Factory-default 7-bit device address.
pub const GP8302_DEFAULT_ADDRESS: u8 = 0x58;
/// Full-scale value of the 12-bit output code.
pub const GP8302_CURRENT_RESOLUTION: u16 = 0x0fff;
/// Rated maximum output current, in mA.
pub const GP8302_MAX_CURRENT_MA: u8 = 25;
/// Factory code for 4 mA, the calibration low point before trimming.
pub const GP8302_DAC_AT_4MA: u16 = 655;
/// Factory code for 20 mA, the calibration high point before trimming.
pub const GP8302_DAC_AT_20MA: u16 = 3277;

const GP8302_CURRENT_REG: u8 = 0x02;
const GP8302_STORE_TIMING_HEAD: u8 = 0x02;
const GP8302_STORE_TIMING_ADDR: u8 = 0x10;
const GP8302_STORE_TIMING_CMD1: u8 = 0x03;
const GP8302_STORE_TIMING_CMD2: u8 = 0x00;
const GP8302_STORE_DELAY_MS: u32 = 10;
