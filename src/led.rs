//! Single LED on a digital or PWM pin
//!
//! The logical value is always a byte where 0 is off and 255 is full
//! brightness, whatever the wiring. Polarity and gamma only come into play
//! when the value is turned into a physical signal in [`Led::write_value`].

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::driver::{OutputDriver, PinId};
use crate::gamma::Gamma;
use crate::math::{BYTE_MAX, BYTE_MIN, fraction_to_byte, map_range, round_to_byte};
use crate::polarity::{Level, Polarity};

/// Byte value at and above which a digital LED is on
pub const DIGITAL_THRESHOLD: u8 = 128;
/// Fraction at and above which a digital LED is on
pub const DIGITAL_FRACTION_THRESHOLD: f64 = 0.5;

/// How the pin is driven
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LedMode {
    /// Plain on/off pin
    Digital,
    /// PWM pin with gamma correction
    Pwm(Gamma),
}

/// Configuration for a single LED
#[derive(Debug, Clone)]
pub struct LedConfig {
    /// Wiring of the LED
    pub polarity: Polarity,
    /// Pin drive mode
    pub mode: LedMode,
}

impl Default for LedConfig {
    fn default() -> Self {
        Self {
            polarity: Polarity::ActiveHigh,
            mode: LedMode::Pwm(Gamma::STANDARD),
        }
    }
}

/// One LED attached to a pin
///
/// The pin itself belongs to the platform; the LED only remembers its id.
#[derive(Debug, Clone)]
pub struct Led {
    pin: PinId,
    polarity: Polarity,
    mode: LedMode,
    /// Logical brightness (0 = off)
    value: u8,
}

impl Led {
    pub const fn new(pin: PinId, config: &LedConfig) -> Self {
        Self {
            pin,
            polarity: config.polarity,
            mode: config.mode,
            value: BYTE_MIN,
        }
    }

    /// LED on a plain digital pin
    pub const fn digital(pin: PinId, polarity: Polarity) -> Self {
        Self::new(
            pin,
            &LedConfig {
                polarity,
                mode: LedMode::Digital,
            },
        )
    }

    /// LED on a PWM pin
    pub const fn pwm(pin: PinId, polarity: Polarity, gamma: Gamma) -> Self {
        Self::new(
            pin,
            &LedConfig {
                polarity,
                mode: LedMode::Pwm(gamma),
            },
        )
    }

    pub const fn pin(&self) -> PinId {
        self.pin
    }

    pub const fn polarity(&self) -> Polarity {
        self.polarity
    }

    pub const fn mode(&self) -> LedMode {
        self.mode
    }

    /// Configure the pin and switch the LED off
    ///
    /// The off level is written raw, without gamma correction.
    pub fn begin<D: OutputDriver>(&self, driver: &mut D) -> Result<(), D::Error> {
        #[cfg(feature = "esp32-log")]
        println!(
            "[Led.begin] pin {} as {:?} ({:?})",
            self.pin, self.mode, self.polarity
        );
        driver.configure_output(self.pin)?;
        match self.mode {
            LedMode::Digital => driver.write_digital(self.pin, self.polarity.off_level()),
            LedMode::Pwm(_) => driver.write_pwm(self.pin, self.polarity.off_duty()),
        }
    }

    /// Set brightness from a byte (0-255) and write it out
    ///
    /// A digital LED is switched on at [`DIGITAL_THRESHOLD`] and above.
    pub fn set_byte_value<D: OutputDriver>(
        &mut self,
        driver: &mut D,
        value: u8,
    ) -> Result<(), D::Error> {
        self.value = match self.mode {
            LedMode::Digital => Self::quantize(value >= DIGITAL_THRESHOLD),
            LedMode::Pwm(_) => value,
        };
        #[cfg(feature = "esp32-log")]
        println!(
            "[Led.set_byte_value] pin {}: {} -> {}",
            self.pin, value, self.value
        );
        self.write_value(driver)
    }

    /// Set brightness from a fraction (0.0-1.0) and write it out
    ///
    /// Out of range fractions are clamped. A digital LED is switched on at
    /// [`DIGITAL_FRACTION_THRESHOLD`] and above.
    pub fn set_value<D: OutputDriver>(&mut self, driver: &mut D, value: f64) -> Result<(), D::Error> {
        self.value = match self.mode {
            LedMode::Digital => Self::quantize(value >= DIGITAL_FRACTION_THRESHOLD),
            LedMode::Pwm(_) => fraction_to_byte(value),
        };
        #[cfg(feature = "esp32-log")]
        println!("[Led.set_value] pin {}: {} -> {}", self.pin, value, self.value);
        self.write_value(driver)
    }

    /// Currently assigned logical value
    ///
    /// For a digital LED this is either 0 or 255.
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Whether the logical value is anything but off
    pub const fn is_on(&self) -> bool {
        self.value != BYTE_MIN
    }

    /// Logical value mapped onto the physical range of the wiring
    ///
    /// This is the duty before gamma correction. LEDs with opposite
    /// polarity and equal value always add up to 255 here.
    pub fn polarity_duty(&self) -> u8 {
        round_to_byte(map_range(
            f64::from(self.value),
            f64::from(BYTE_MIN),
            f64::from(BYTE_MAX),
            f64::from(self.polarity.off_duty()),
            f64::from(self.polarity.on_duty()),
        ))
    }

    /// Physical level of a digital LED
    pub const fn level(&self) -> Level {
        self.polarity.level_for(self.is_on())
    }

    /// Physical value that [`Led::write_value`] emits, as a byte
    ///
    /// Digital LEDs report 0 or 255. PWM LEDs report the polarity mapped
    /// duty after gamma correction.
    pub fn physical_value(&self) -> u8 {
        match self.mode {
            LedMode::Digital => {
                if self.level().is_high() {
                    BYTE_MAX
                } else {
                    BYTE_MIN
                }
            }
            // Gamma works on the physical duty, after polarity inversion.
            LedMode::Pwm(gamma) => gamma.correct(self.polarity_duty()),
        }
    }

    /// Write the current value to the pin
    pub fn write_value<D: OutputDriver>(&self, driver: &mut D) -> Result<(), D::Error> {
        match self.mode {
            LedMode::Digital => driver.write_digital(self.pin, self.level()),
            LedMode::Pwm(_) => driver.write_pwm(self.pin, self.physical_value()),
        }
    }

    const fn quantize(on: bool) -> u8 {
        if on { BYTE_MAX } else { BYTE_MIN }
    }
}
