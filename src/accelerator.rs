/// Value growing with constant acceleration steps
///
/// Every [`AcceleratingValue::accelerate`] adds `rate` to the acceleration and
/// then the acceleration to the value, so after `n` steps from reset the value
/// is `rate * n * (n + 1) / 2`. There is no upper bound; clamp before using it
/// as a brightness.
#[derive(Debug, Clone)]
pub struct AcceleratingValue {
    rate: f64,
    acceleration: f64,
    value: f64,
}

impl AcceleratingValue {
    pub const fn new(rate: f64) -> Self {
        Self {
            rate,
            acceleration: 0.0,
            value: 0.0,
        }
    }

    /// Advance one step and return the new value
    pub fn accelerate(&mut self) -> f64 {
        self.acceleration += self.rate;
        self.value += self.acceleration;
        self.value
    }

    /// Zero both the acceleration and the value
    pub fn reset(&mut self) {
        self.acceleration = 0.0;
        self.value = 0.0;
    }

    pub const fn value(&self) -> f64 {
        self.value
    }

    pub const fn acceleration(&self) -> f64 {
        self.acceleration
    }

    pub const fn rate(&self) -> f64 {
        self.rate
    }
}
