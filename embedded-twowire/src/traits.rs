use crate::{TWOWIRE_DIR_WRITE, TwoWireError, TwoWireResult};

/// Trait for write-only two-wire communication.
/// This trait defines the basic operations required to drive a write-only
/// two-wire device: issuing start and stop conditions and transmitting
/// bytes with acknowledge capture.
pub trait TwoWire {
    /// The error type returned by the operations of this trait.
    /// This type is used to indicate errors in the underlying hardware or communication.
    type BusError;

    /// Issues a start condition, claiming the bus.
    ///
    /// # Errors
    /// This method returns an error if driving the lines fails.
    fn start(&mut self) -> TwoWireResult<(), Self::BusError>;

    /// Issues a stop condition, releasing the bus.
    ///
    /// # Errors
    /// This method returns an error if driving the lines fails.
    fn stop(&mut self) -> TwoWireResult<(), Self::BusError>;

    /// Transmits a byte, most-significant bit first, then samples the
    /// acknowledge slot. Only valid between [start](TwoWire::start) and
    /// [stop](TwoWire::stop).
    ///
    /// # Arguments
    /// * `byte` - The byte to transmit.
    ///
    /// # Returns
    /// `true` if the device pulled the data line low during the acknowledge
    /// slot (acknowledged), `false` otherwise.
    ///
    /// # Errors
    /// This method returns an error if driving or sampling the lines fails.
    /// A missing acknowledge is not an error on this path.
    fn write_byte(&mut self, byte: u8) -> TwoWireResult<bool, Self::BusError>;

    /// Transmits a byte like [write_byte](TwoWire::write_byte) but without
    /// the per-bit hold, shortening the transaction. Intended for repeated
    /// identical bytes in device command sequences whose timing contract
    /// permits it; everything else should use the paced variant.
    ///
    /// # Arguments
    /// * `byte` - The byte to transmit.
    ///
    /// # Returns
    /// The sampled acknowledge, as in [write_byte](TwoWire::write_byte).
    ///
    /// # Errors
    /// This method returns an error if driving or sampling the lines fails.
    fn write_byte_quick(&mut self, byte: u8) -> TwoWireResult<bool, Self::BusError>;

    /// Transmits a byte and fails with [`TwoWireError::NoAcknowledge`] if
    /// the device does not acknowledge it. A hardening wrapper over
    /// [write_byte](TwoWire::write_byte); devices that do not reliably
    /// acknowledge every byte should stay on the unchecked path.
    ///
    /// # Arguments
    /// * `byte` - The byte to transmit.
    ///
    /// # Errors
    /// [`TwoWireError::NoAcknowledge`] on a missing acknowledge, or the
    /// underlying hardware error.
    fn write_byte_checked(&mut self, byte: u8) -> TwoWireResult<(), Self::BusError> {
        if self.write_byte(byte)? {
            Ok(())
        } else {
            Err(TwoWireError::NoAcknowledge)
        }
    }

    /// Transmits a 7-bit device address framed for a write transfer.
    /// The first byte of every transaction should be sent through this
    /// method to address the device.
    ///
    /// # Arguments
    /// * `addr` - The 7-bit device address.
    ///
    /// # Returns
    /// The sampled acknowledge; `false` here usually means no device with
    /// that address is present on the bus.
    ///
    /// # Errors
    /// This method returns an error if driving or sampling the lines fails.
    fn address_write(&mut self, addr: u8) -> TwoWireResult<bool, Self::BusError> {
        self.write_byte((addr << 1) | TWOWIRE_DIR_WRITE)
    }
}
