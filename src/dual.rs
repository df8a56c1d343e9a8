//! Complementary pair of PWM LEDs
//!
//! Drives two LEDs so that their logical values always add up to full
//! brightness, e.g. warm/cold white channels or a left/right indicator.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::driver::{OutputDriver, PinId};
use crate::gamma::Gamma;
use crate::led::Led;
use crate::math::{BYTE_MAX, clamp_fraction};
use crate::polarity::Polarity;

/// Configuration for a complementary pair
#[derive(Debug, Clone)]
pub struct DualPwmLedConfig {
    /// Wiring of the first LED
    pub polarity1: Polarity,
    /// Wiring of the second LED
    pub polarity2: Polarity,
    /// Gamma shared by both LEDs
    pub gamma: Gamma,
}

/// Two PWM LEDs driven with complementary duty
#[derive(Debug, Clone)]
pub struct DualPwmLed {
    led1: Led,
    led2: Led,
}

impl DualPwmLed {
    /// Pair with both LEDs wired the same way
    pub const fn new(led1_pin: PinId, led2_pin: PinId, polarity: Polarity, gamma: Gamma) -> Self {
        Self::with_polarities(led1_pin, led2_pin, polarity, polarity, gamma)
    }

    /// Pair with independently wired LEDs
    pub const fn with_polarities(
        led1_pin: PinId,
        led2_pin: PinId,
        polarity1: Polarity,
        polarity2: Polarity,
        gamma: Gamma,
    ) -> Self {
        Self {
            led1: Led::pwm(led1_pin, polarity1, gamma),
            led2: Led::pwm(led2_pin, polarity2, gamma),
        }
    }

    pub const fn from_config(led1_pin: PinId, led2_pin: PinId, config: &DualPwmLedConfig) -> Self {
        Self::with_polarities(
            led1_pin,
            led2_pin,
            config.polarity1,
            config.polarity2,
            config.gamma,
        )
    }

    /// Configure both pins and switch both LEDs off
    pub fn begin<D: OutputDriver>(&self, driver: &mut D) -> Result<(), D::Error> {
        self.led1.begin(driver)?;
        self.led2.begin(driver)
    }

    /// Drive LED 1 at `value` and LED 2 at `255 - value`
    pub fn set_bipolar_byte_value<D: OutputDriver>(
        &mut self,
        driver: &mut D,
        value: u8,
    ) -> Result<(), D::Error> {
        #[cfg(feature = "esp32-log")]
        println!("[DualPwmLed.set_bipolar_byte_value] {}", value);
        self.led1.set_byte_value(driver, value)?;
        self.led2.set_byte_value(driver, BYTE_MAX - value)
    }

    /// Drive LED 1 at `value` and LED 2 at `1.0 - value`
    ///
    /// The fraction is clamped to 0.0-1.0 before it is split.
    pub fn set_bipolar_value<D: OutputDriver>(
        &mut self,
        driver: &mut D,
        value: f64,
    ) -> Result<(), D::Error> {
        let value = clamp_fraction(value);
        #[cfg(feature = "esp32-log")]
        println!("[DualPwmLed.set_bipolar_value] {}", value);
        self.led1.set_value(driver, value)?;
        self.led2.set_value(driver, 1.0 - value)
    }

    /// Value currently assigned to LED 1
    pub const fn led1_value(&self) -> u8 {
        self.led1.value()
    }

    /// Value currently assigned to LED 2
    pub const fn led2_value(&self) -> u8 {
        self.led2.value()
    }

    pub const fn led1(&self) -> &Led {
        &self.led1
    }

    pub const fn led2(&self) -> &Led {
        &self.led2
    }

    /// Write both current values to their pins
    pub fn write_value<D: OutputDriver>(&self, driver: &mut D) -> Result<(), D::Error> {
        self.led1.write_value(driver)?;
        self.led2.write_value(driver)
    }
}
