//! Conversion between physical loop current and the chip's 12-bit code.

use crate::{GP8302_CURRENT_RESOLUTION, GP8302_MAX_CURRENT_MA};

/// A validated two-point 4-20 mA calibration.
///
/// Holds the digital codes the chip must output at exactly 4 mA and 20 mA,
/// as measured against a reference meter on the installed loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calibration {
    /// Code producing 4 mA on the loop.
    pub code_4ma: u16,
    /// Code producing 20 mA on the loop.
    pub code_20ma: u16,
}

impl Calibration {
    /// Builds a calibration pair, returning [`None`] unless
    /// `code_4ma < code_20ma <= 4095`.
    pub fn new(code_4ma: u16, code_20ma: u16) -> Option<Self> {
        if code_4ma >= code_20ma || code_20ma > GP8302_CURRENT_RESOLUTION {
            None
        } else {
            Some(Self { code_4ma, code_20ma })
        }
    }
}

/// Converts a requested current to a 12-bit code, clamping to the chip's
/// 0-25 mA rating.
///
/// A calibration only applies inside the 4-20 mA band; outside it, and when
/// no calibration is set, the full-range linear mapping is used. The band
/// rule matches the chip vendor's reference driver, including the
/// discontinuity it produces at the band edges when the calibration pair
/// deviates from the linear defaults.
pub(crate) fn current_to_code(ma: f32, calibration: Option<Calibration>) -> u16 {
    let ma = ma.clamp(0.0, GP8302_MAX_CURRENT_MA as f32);
    match calibration {
        Some(cal) if (4.0..=20.0).contains(&ma) => {
            cal.code_4ma + ((ma - 4.0) * f32::from(cal.code_20ma - cal.code_4ma) / 16.0) as u16
        }
        _ => (ma * f32::from(GP8302_CURRENT_RESOLUTION) / GP8302_MAX_CURRENT_MA as f32) as u16,
    }
}

/// Converts a 12-bit code back to the loop current it produces, always over
/// the full-range linear mapping. Calibration is deliberately not consulted
/// here; this mirrors the vendor driver, which only ever applies this to
/// the code it just wrote.
pub(crate) fn code_to_current(code: u16) -> f32 {
    (f32::from(code) / f32::from(GP8302_CURRENT_RESOLUTION)) * GP8302_MAX_CURRENT_MA as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_or_oversized_pairs() {
        assert!(Calibration::new(100, 50).is_none());
        assert!(Calibration::new(100, 100).is_none());
        assert!(Calibration::new(100, 4096).is_none());
        assert!(Calibration::new(0, 4095).is_some());
    }

    #[test]
    fn uncalibrated_mapping_is_full_range_linear() {
        assert_eq!(current_to_code(0.0, None), 0);
        assert_eq!(current_to_code(25.0, None), 4095);
        assert_eq!(current_to_code(2.0, None), 327); // floor(2 * 4095 / 25)
        assert_eq!(current_to_code(12.0, None), 1965); // floor(12 * 4095 / 25)
    }

    #[test]
    fn clamps_to_the_rated_current() {
        assert_eq!(current_to_code(-5.0, None), current_to_code(0.0, None));
        assert_eq!(current_to_code(30.0, None), current_to_code(25.0, None));
    }

    #[test]
    fn calibration_applies_inside_the_4_20_band() {
        let cal = Calibration::new(655, 3277);
        assert_eq!(current_to_code(4.0, cal), 655);
        assert_eq!(current_to_code(20.0, cal), 3277);
        assert_eq!(current_to_code(12.0, cal), 655 + (12 - 4) * (3277 - 655) / 16);
    }

    #[test]
    fn calibration_is_ignored_outside_the_band() {
        let cal = Calibration::new(655, 3277);
        // below 4 mA the full-range linear mapping applies even when calibrated
        assert_eq!(current_to_code(2.0, cal), 327);
        assert_eq!(current_to_code(25.0, cal), 4095);
    }

    #[test]
    fn band_edges_are_discontinuous_under_calibration() {
        // A calibration pair that deviates from the linear defaults jumps at
        // the 4 mA boundary: just below the band the linear rule gives ~654,
        // at the boundary the calibrated rule gives 1000.
        let cal = Calibration::new(1000, 3000);
        assert_eq!(current_to_code(3.999, cal), 655);
        assert_eq!(current_to_code(4.0, cal), 1000);
    }

    #[test]
    fn code_to_current_never_consults_calibration() {
        assert_eq!(code_to_current(0), 0.0);
        assert_eq!(code_to_current(4095), 25.0);
        assert_eq!(code_to_current(655), (655.0 / 4095.0) * 25.0);
    }
}
