//! Range mapping and brightness conversions
//!
//! Everything here works on `f64` so byte and fraction brightness values
//! share one code path. Rounding and powers go through `libm` to stay `no_std`.

/// Lowest byte brightness
pub const BYTE_MIN: u8 = 0;
/// Highest byte brightness
pub const BYTE_MAX: u8 = u8::MAX;

/// Map a value from `[from_min, from_max]` onto `[to_min, to_max]`
///
/// Linear interpolation without clamping, so values outside the source
/// range extrapolate. Inverted target ranges (`to_min > to_max`) are fine.
///
/// The caller must ensure `from_min != from_max`. A degenerate source range
/// divides by zero and the result is meaningless (`NaN` or infinite).
#[inline]
pub fn map_range(value: f64, from_min: f64, from_max: f64, to_min: f64, to_max: f64) -> f64 {
    (value - from_min) / (from_max - from_min) * (to_max - to_min) + to_min
}

/// Constrain a fraction to `[0.0, 1.0]`
///
/// `NaN` becomes `0.0`.
#[inline]
pub fn clamp_fraction(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Convert a fraction (0.0-1.0) to a byte (0-255), clamping first
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn fraction_to_byte(value: f64) -> u8 {
    let value = clamp_fraction(value);
    libm::round(value * f64::from(BYTE_MAX) + f64::from(BYTE_MIN)) as u8
}

/// Convert a byte (0-255) to a fraction (0.0-1.0)
#[inline]
pub fn byte_to_fraction(value: u8) -> f64 {
    map_range(
        f64::from(value),
        f64::from(BYTE_MIN),
        f64::from(BYTE_MAX),
        0.0,
        1.0,
    )
}

/// Round a real value to the nearest byte, saturating at the byte bounds
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn round_to_byte(value: f64) -> u8 {
    if value.is_nan() {
        return BYTE_MIN;
    }
    libm::round(value).clamp(f64::from(BYTE_MIN), f64::from(BYTE_MAX)) as u8
}
