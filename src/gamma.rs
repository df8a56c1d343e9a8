//! Gamma correction for PWM dimming
//!
//! The eye perceives light intensity non-linearly, so a linear duty ramp
//! looks like it jumps to full brightness early. Raising the normalized duty
//! to a power above one flattens the low end.

use crate::math::{byte_to_fraction, map_range, round_to_byte};

/// Positive, finite gamma exponent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gamma(f64);

impl Gamma {
    /// No correction, output duty equals input duty
    pub const LINEAR: Self = Self(1.0);
    /// Common exponent for LEDs driven by PWM
    pub const STANDARD: Self = Self(2.2);

    /// Create a gamma exponent
    ///
    /// Returns `None` unless `exponent` is finite and greater than zero.
    pub fn new(exponent: f64) -> Option<Self> {
        if exponent.is_finite() && exponent > 0.0 {
            Some(Self(exponent))
        } else {
            None
        }
    }

    /// Exponent value
    pub const fn exponent(self) -> f64 {
        self.0
    }

    /// Apply the curve to a raw duty byte
    ///
    /// The byte is normalized to 0.0-1.0, raised to the exponent, mapped back
    /// to 0-255, rounded and clamped.
    pub fn correct(self, duty: u8) -> u8 {
        let fraction = byte_to_fraction(duty);
        let corrected = libm::pow(fraction, self.0);
        round_to_byte(map_range(corrected, 0.0, 1.0, 0.0, 255.0))
    }
}

impl Default for Gamma {
    fn default() -> Self {
        Self::STANDARD
    }
}
