use crate::{
    BitbangTwoWire,
    line::{BidirPin, CYCLE_AFTER_US, CYCLE_BEFORE_US, CYCLE_TOTAL_US},
};
use embedded_hal::{delay::DelayNs, digital::OutputPin};
use embedded_twowire::{TwoWire, TwoWireResult};

impl<C, S, D, E> BitbangTwoWire<C, S, D>
where
    C: OutputPin<Error = E>,
    S: BidirPin<Error = E>,
    D: DelayNs,
{
    /// Clocks out one byte, MSB first, then releases the data line and
    /// samples the acknowledge slot. `paced` selects whether the clock-high
    /// phase of each bit is held for the full bit period.
    fn transmit(&mut self, byte: u8, paced: bool) -> TwoWireResult<bool, E> {
        for i in 0..8 {
            self.sda.write((byte >> (7 - i)) & 0x01 != 0)?;
            self.scl.set_high()?;
            if paced {
                self.delay.delay_us(CYCLE_TOTAL_US);
            }
            self.scl.set_low()?;
        }
        self.sda.set_input_mode()?;
        self.scl.set_high()?;
        let acked = !self.sda.read()?;
        self.scl.set_low()?;
        self.sda.set_output_mode()?;
        Ok(acked)
    }
}

impl<C, S, D, E> TwoWire for BitbangTwoWire<C, S, D>
where
    C: OutputPin<Error = E>,
    S: BidirPin<Error = E>,
    D: DelayNs,
{
    type BusError = E;

    fn start(&mut self) -> TwoWireResult<(), Self::BusError> {
        self.sda.write(true)?;
        self.scl.set_high()?;
        self.delay.delay_us(CYCLE_BEFORE_US);
        self.sda.write(false)?;
        self.delay.delay_us(CYCLE_AFTER_US);
        self.scl.set_low()?;
        Ok(())
    }

    fn stop(&mut self) -> TwoWireResult<(), Self::BusError> {
        self.sda.write(false)?;
        self.scl.set_high()?;
        self.delay.delay_us(CYCLE_BEFORE_US);
        self.sda.write(true)?;
        self.delay.delay_us(CYCLE_AFTER_US);
        Ok(())
    }

    fn write_byte(&mut self, byte: u8) -> TwoWireResult<bool, Self::BusError> {
        self.transmit(byte, true)
    }

    fn write_byte_quick(&mut self, byte: u8) -> TwoWireResult<bool, Self::BusError> {
        self.transmit(byte, false)
    }
}
