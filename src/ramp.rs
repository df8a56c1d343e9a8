use embassy_time::Duration;

/// Linear ramp towards a target value
///
/// Holds no clock. Callers measure elapsed time themselves and ask for the
/// value at that point, e.g. to fade an LED in.
#[derive(Debug, Clone)]
pub struct ValueChanger {
    /// Time to go from zero to the target
    full_change: Duration,
    target: u32,
}

impl ValueChanger {
    /// Create a ramp reaching `target` after `full_change`
    ///
    /// `full_change` must be non-zero, otherwise [`ValueChanger::value_after`]
    /// divides by zero.
    pub const fn new(full_change: Duration, target: u32) -> Self {
        Self {
            full_change,
            target,
        }
    }

    pub fn set_target_value(&mut self, target: u32) {
        self.target = target;
    }

    pub const fn target_value(&self) -> u32 {
        self.target
    }

    pub const fn full_change(&self) -> Duration {
        self.full_change
    }

    /// Value after `elapsed` time
    ///
    /// Not clamped: past `full_change` the ramp keeps rising.
    #[allow(clippy::cast_precision_loss)]
    pub fn value_after(&self, elapsed: Duration) -> f64 {
        elapsed.as_micros() as f64 / self.full_change.as_micros() as f64 * f64::from(self.target)
    }
}
