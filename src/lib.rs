#![no_std]

pub mod accelerator;
pub mod driver;
pub mod dual;
pub mod gamma;
pub mod hal;
pub mod led;
pub mod math;
pub mod polarity;
pub mod ramp;

pub use accelerator::AcceleratingValue;
pub use driver::{MemoryDriver, MemoryDriverError, NullDriver, OutputDriver, PinId, PinOutput};
pub use dual::{DualPwmLed, DualPwmLedConfig};
pub use gamma::Gamma;
pub use hal::{DigitalPins, HalError, PwmPins};
pub use led::{Led, LedConfig, LedMode};
pub use math::map_range;
pub use polarity::{Level, Polarity};
pub use ramp::ValueChanger;
pub use embassy_time::Duration;
