use crate::math::{BYTE_MAX, BYTE_MIN};

/// Electrical level of a digital pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

impl Level {
    /// Opposite level
    #[must_use]
    pub const fn inverted(self) -> Self {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }

    /// Returns `true` for [`Level::High`]
    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high { Level::High } else { Level::Low }
    }
}

/// How an LED is wired to its pin
///
/// With `ActiveHigh` the LED is off while the pin is low. With `ActiveLow`
/// (LED tied to the supply, pin sinking current) it is off while the pin is high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Polarity {
    #[default]
    ActiveHigh,
    ActiveLow,
}

impl Polarity {
    /// Digital level that turns the LED off
    pub const fn off_level(self) -> Level {
        match self {
            Polarity::ActiveHigh => Level::Low,
            Polarity::ActiveLow => Level::High,
        }
    }

    /// Digital level that turns the LED on
    pub const fn on_level(self) -> Level {
        self.off_level().inverted()
    }

    /// Raw PWM duty that turns the LED off
    pub const fn off_duty(self) -> u8 {
        match self {
            Polarity::ActiveHigh => BYTE_MIN,
            Polarity::ActiveLow => BYTE_MAX,
        }
    }

    /// Raw PWM duty that turns the LED fully on
    pub const fn on_duty(self) -> u8 {
        if self.off_duty() == BYTE_MIN {
            BYTE_MAX
        } else {
            BYTE_MIN
        }
    }

    /// Physical level for a logical on/off state
    pub const fn level_for(self, on: bool) -> Level {
        if on { self.on_level() } else { self.off_level() }
    }

    pub const fn is_inverted(self) -> bool {
        matches!(self, Polarity::ActiveLow)
    }
}
