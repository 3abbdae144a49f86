/// Two-wire communication error type.
#[derive(Debug)]
pub enum TwoWireError<E> {
    /// Encapsulates the error type from the underlying hardware.
    Other(E),
    /// Indicates that a device did not pull the data line low during the
    /// acknowledge slot. Only produced by the checked write path; the
    /// default write path reports the acknowledge level to the caller
    /// instead of failing.
    NoAcknowledge,
}

impl<E> From<E> for TwoWireError<E> {
    fn from(other: E) -> Self {
        Self::Other(other)
    }
}
