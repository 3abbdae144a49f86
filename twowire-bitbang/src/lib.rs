#![no_std]
#![deny(missing_docs)]

/*! # twowire-bitbang
 *
 * A software-timed implementation of the [`TwoWire`](embedded_twowire::TwoWire)
 * master trait over two GPIO lines, for driving write-only two-wire devices
 * on platforms without a spare hardware bus peripheral.
 *
 * The clock line only ever drives out
 * ([`OutputPin`](embedded_hal::digital::OutputPin)); the data line is flipped
 * between output and input mid-transaction to sample the acknowledge slot,
 * which the [`BidirPin`] trait models as an explicit two-state capability.
 * All bit timing comes from an injected
 * [`DelayNs`](embedded_hal::delay::DelayNs), so the protocol logic is
 * testable against a fake clock.
 *
 * Transactions busy-wait to completion on the calling context. The master
 * owns its pins exclusively; nothing else may toggle them while a
 * transaction is in flight, and callers on preemptive platforms must keep
 * scheduling delays out of the byte-level timing window.
 */

#[cfg(test)]
extern crate std;

pub use embedded_twowire::{TwoWire, TwoWireError, TwoWireResult};
mod line;
mod master;

pub use line::{BidirPin, CYCLE_AFTER_US, CYCLE_BEFORE_US, CYCLE_TOTAL_US};

use embedded_hal::{delay::DelayNs, digital::OutputPin};

/// A bit-banged two-wire master over a clock pin, a bidirectional data
/// line, and a delay source.
///
/// The pins should already be configured as outputs driven high (bus idle)
/// when handed over; the master leaves them high between transactions.
pub struct BitbangTwoWire<C, S, D> {
    pub(crate) scl: C,
    pub(crate) sda: S,
    pub(crate) delay: D,
}

impl<C, S, D> BitbangTwoWire<C, S, D>
where
    C: OutputPin,
    S: BidirPin,
    D: DelayNs,
{
    /// Creates a new master from the clock pin, data line and delay source.
    pub fn new(scl: C, sda: S, delay: D) -> Self {
        BitbangTwoWire { scl, sda, delay }
    }

    /// Consumes the master and gives the pins and delay source back.
    pub fn release(self) -> (C, S, D) {
        (self.scl, self.sda, self.delay)
    }
}
