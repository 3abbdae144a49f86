//! The data-line abstraction and the bit timing constants.

/// Full bit period, in microseconds. Held while the clock is high during a
/// paced bit transmission.
pub const CYCLE_TOTAL_US: u32 = 5;

/// Pre-transition hold, in microseconds. Held between raising both lines
/// and moving the data line during start and stop conditions.
pub const CYCLE_BEFORE_US: u32 = 2;

/// Post-transition hold, in microseconds. Held after moving the data line
/// during start and stop conditions.
pub const CYCLE_AFTER_US: u32 = 3;

/// A GPIO line that can be flipped between output and input at runtime.
///
/// The two-wire acknowledge slot requires the master to stop driving the
/// data line and sample it instead; this trait makes that mode switch an
/// explicit operation rather than an implicit property of the pin type.
/// Implementations must make each call atomic from the caller's
/// perspective: no intermediate line state may be observable.
pub trait BidirPin {
    /// The error type returned when reconfiguring or driving the line fails.
    type Error;

    /// Reconfigures the line as an output. The previously written level
    /// becomes visible on the wire.
    fn set_output_mode(&mut self) -> Result<(), Self::Error>;

    /// Reconfigures the line as an input, releasing it so a device can
    /// drive it.
    fn set_input_mode(&mut self) -> Result<(), Self::Error>;

    /// Drives the line high (`true`) or low (`false`). Only meaningful in
    /// output mode.
    fn write(&mut self, high: bool) -> Result<(), Self::Error>;

    /// Samples the line level. Only meaningful in input mode.
    fn read(&mut self) -> Result<bool, Self::Error>;
}
