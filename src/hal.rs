//! [`OutputDriver`] adapters for `embedded-hal` pins
//!
//! HAL pins are configured as outputs by their type, so `configure_output`
//! only checks that the pin exists. Pin ids index into the array the
//! adapter was created with.

use core::fmt;

use embedded_hal::digital::{OutputPin, PinState};
use embedded_hal::pwm::SetDutyCycle;

use crate::driver::{OutputDriver, PinId};
use crate::math::BYTE_MAX;
use crate::polarity::Level;

/// Duty at which a digital-only pin switches high
///
/// Same threshold the Arduino core uses for `analogWrite` on non-PWM pins.
pub const DIGITAL_PWM_THRESHOLD: u8 = 128;

/// Error returned by the `embedded-hal` adapters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalError<E> {
    /// No pin with this id
    UnknownPin(PinId),
    /// The HAL pin reported an error
    Pin(E),
}

impl<E: fmt::Debug> fmt::Display for HalError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HalError::UnknownPin(pin) => write!(f, "unknown pin {pin}"),
            HalError::Pin(err) => write!(f, "pin error: {err:?}"),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for HalError<E> {}

impl From<Level> for PinState {
    fn from(level: Level) -> Self {
        match level {
            Level::Low => PinState::Low,
            Level::High => PinState::High,
        }
    }
}

/// Digital output pins
pub struct DigitalPins<P, const N: usize> {
    pins: [P; N],
}

impl<P: OutputPin, const N: usize> DigitalPins<P, N> {
    pub const fn new(pins: [P; N]) -> Self {
        Self { pins }
    }

    /// Give the pins back
    pub fn release(self) -> [P; N] {
        self.pins
    }

    fn pin_mut(&mut self, pin: PinId) -> Result<&mut P, HalError<P::Error>> {
        self.pins
            .get_mut(usize::from(pin))
            .ok_or(HalError::UnknownPin(pin))
    }
}

impl<P: OutputPin, const N: usize> OutputDriver for DigitalPins<P, N> {
    type Error = HalError<P::Error>;

    fn configure_output(&mut self, pin: PinId) -> Result<(), Self::Error> {
        self.pin_mut(pin).map(|_| ())
    }

    fn write_digital(&mut self, pin: PinId, level: Level) -> Result<(), Self::Error> {
        self.pin_mut(pin)?
            .set_state(level.into())
            .map_err(HalError::Pin)
    }

    fn write_pwm(&mut self, pin: PinId, duty: u8) -> Result<(), Self::Error> {
        self.write_digital(pin, Level::from(duty >= DIGITAL_PWM_THRESHOLD))
    }
}

/// PWM channels
///
/// Byte duties are scaled onto each channel's own maximum duty.
pub struct PwmPins<P, const N: usize> {
    pins: [P; N],
}

impl<P: SetDutyCycle, const N: usize> PwmPins<P, N> {
    pub const fn new(pins: [P; N]) -> Self {
        Self { pins }
    }

    /// Give the channels back
    pub fn release(self) -> [P; N] {
        self.pins
    }

    fn pin_mut(&mut self, pin: PinId) -> Result<&mut P, HalError<P::Error>> {
        self.pins
            .get_mut(usize::from(pin))
            .ok_or(HalError::UnknownPin(pin))
    }
}

impl<P: SetDutyCycle, const N: usize> OutputDriver for PwmPins<P, N> {
    type Error = HalError<P::Error>;

    fn configure_output(&mut self, pin: PinId) -> Result<(), Self::Error> {
        self.pin_mut(pin).map(|_| ())
    }

    fn write_digital(&mut self, pin: PinId, level: Level) -> Result<(), Self::Error> {
        let channel = self.pin_mut(pin)?;
        let result = match level {
            Level::High => channel.set_duty_cycle_fully_on(),
            Level::Low => channel.set_duty_cycle_fully_off(),
        };
        result.map_err(HalError::Pin)
    }

    fn write_pwm(&mut self, pin: PinId, duty: u8) -> Result<(), Self::Error> {
        self.pin_mut(pin)?
            .set_duty_cycle_fraction(u16::from(duty), u16::from(BYTE_MAX))
            .map_err(HalError::Pin)
    }
}
