//! Pin output capability
//!
//! LEDs never touch hardware directly. They borrow an [`OutputDriver`] for
//! every write, which keeps the brightness math testable off-target and lets
//! one driver serve any number of LEDs.

use core::convert::Infallible;
use core::fmt;

use heapless::LinearMap;

use crate::polarity::Level;

/// Platform pin identifier
pub type PinId = u8;

/// Platform output primitives
///
/// Implement this trait to support different hardware platforms.
pub trait OutputDriver {
    type Error;

    /// Mark the pin as an output. Called once from `begin`.
    fn configure_output(&mut self, pin: PinId) -> Result<(), Self::Error>;

    /// Drive a digital pin to the given level
    fn write_digital(&mut self, pin: PinId, level: Level) -> Result<(), Self::Error>;

    /// Set the PWM duty (0-255) of a pin
    fn write_pwm(&mut self, pin: PinId, duty: u8) -> Result<(), Self::Error>;
}

impl<D: OutputDriver + ?Sized> OutputDriver for &mut D {
    type Error = D::Error;

    fn configure_output(&mut self, pin: PinId) -> Result<(), Self::Error> {
        (**self).configure_output(pin)
    }

    fn write_digital(&mut self, pin: PinId, level: Level) -> Result<(), Self::Error> {
        (**self).write_digital(pin, level)
    }

    fn write_pwm(&mut self, pin: PinId, duty: u8) -> Result<(), Self::Error> {
        (**self).write_pwm(pin, duty)
    }
}

/// Last value written to a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinOutput {
    Digital(Level),
    Pwm(u8),
}

/// Recorded state of one pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PinState {
    /// `configure_output` was called for this pin
    pub configured: bool,
    /// Last written value, if any
    pub output: Option<PinOutput>,
    /// Number of writes since creation
    pub writes: u32,
}

/// Error returned by [`MemoryDriver`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryDriverError {
    /// The pin table is full
    TooManyPins(PinId),
}

impl fmt::Display for MemoryDriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemoryDriverError::TooManyPins(pin) => {
                write!(f, "no room to track pin {pin}")
            }
        }
    }
}

impl core::error::Error for MemoryDriverError {}

/// Driver which keeps pin state in memory, for simulation or testing
///
/// Tracks up to `PINS` distinct pins.
#[derive(Debug, Default)]
pub struct MemoryDriver<const PINS: usize> {
    pins: LinearMap<PinId, PinState, PINS>,
}

impl<const PINS: usize> MemoryDriver<PINS> {
    pub const fn new() -> Self {
        Self {
            pins: LinearMap::new(),
        }
    }

    /// Recorded state of a pin
    pub fn pin(&self, pin: PinId) -> Option<&PinState> {
        self.pins.get(&pin)
    }

    /// Last value written to a pin
    pub fn output(&self, pin: PinId) -> Option<PinOutput> {
        self.pin(pin).and_then(|state| state.output)
    }

    /// Last digital level written to a pin
    pub fn level(&self, pin: PinId) -> Option<Level> {
        match self.output(pin)? {
            PinOutput::Digital(level) => Some(level),
            PinOutput::Pwm(_) => None,
        }
    }

    /// Last PWM duty written to a pin
    pub fn duty(&self, pin: PinId) -> Option<u8> {
        match self.output(pin)? {
            PinOutput::Pwm(duty) => Some(duty),
            PinOutput::Digital(_) => None,
        }
    }

    pub fn is_configured(&self, pin: PinId) -> bool {
        self.pin(pin).is_some_and(|state| state.configured)
    }

    /// Total number of writes across all pins
    pub fn total_writes(&self) -> u32 {
        self.pins.values().map(|state| state.writes).sum()
    }

    fn state_mut(&mut self, pin: PinId) -> Result<&mut PinState, MemoryDriverError> {
        if !self.pins.contains_key(&pin) {
            self.pins
                .insert(pin, PinState::default())
                .map_err(|_| MemoryDriverError::TooManyPins(pin))?;
        }
        self.pins
            .get_mut(&pin)
            .ok_or(MemoryDriverError::TooManyPins(pin))
    }

    fn record(&mut self, pin: PinId, output: PinOutput) -> Result<(), MemoryDriverError> {
        let state = self.state_mut(pin)?;
        state.output = Some(output);
        state.writes += 1;
        Ok(())
    }
}

impl<const PINS: usize> OutputDriver for MemoryDriver<PINS> {
    type Error = MemoryDriverError;

    fn configure_output(&mut self, pin: PinId) -> Result<(), Self::Error> {
        self.state_mut(pin)?.configured = true;
        Ok(())
    }

    fn write_digital(&mut self, pin: PinId, level: Level) -> Result<(), Self::Error> {
        self.record(pin, PinOutput::Digital(level))
    }

    fn write_pwm(&mut self, pin: PinId, duty: u8) -> Result<(), Self::Error> {
        self.record(pin, PinOutput::Pwm(duty))
    }
}

/// Driver that discards every write
///
/// Useful when only the computed values matter.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDriver;

impl OutputDriver for NullDriver {
    type Error = Infallible;

    fn configure_output(&mut self, _pin: PinId) -> Result<(), Self::Error> {
        Ok(())
    }

    fn write_digital(&mut self, _pin: PinId, _level: Level) -> Result<(), Self::Error> {
        Ok(())
    }

    fn write_pwm(&mut self, _pin: PinId, _duty: u8) -> Result<(), Self::Error> {
        Ok(())
    }
}
