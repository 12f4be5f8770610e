//! The handful of pin level primitives the sensor driver needs from the board.

use crate::types::{PinId, Raw};
use anyhow::Result;

pub mod hal;

#[cfg(feature = "esp")]
pub mod esp;

pub use hal::{AnalogChannel, HalPlatform};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PinMode {
    Input,
    Output,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

impl From<bool> for Level {
    fn from(on: bool) -> Self {
        match on {
            true => Level::High,
            false => Level::Low,
        }
    }
}

/// Source of the ADC full scale voltage. Affects every analog read on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AnalogReference {
    Default,
    External,
}

pub trait Platform {
    fn configure_pin_mode(&mut self, pin: PinId, mode: PinMode) -> Result<()>;
    /// One 10-bit conversion, 0..=1023.
    fn read_analog(&mut self, pin: PinId) -> Result<Raw>;
    fn write_digital(&mut self, pin: PinId, level: Level) -> Result<()>;
    fn set_analog_reference(&mut self, source: AnalogReference) -> Result<()>;
}

impl<P: Platform + ?Sized> Platform for &mut P {
    fn configure_pin_mode(&mut self, pin: PinId, mode: PinMode) -> Result<()> {
        (**self).configure_pin_mode(pin, mode)
    }

    fn read_analog(&mut self, pin: PinId) -> Result<Raw> {
        (**self).read_analog(pin)
    }

    fn write_digital(&mut self, pin: PinId, level: Level) -> Result<()> {
        (**self).write_digital(pin, level)
    }

    fn set_analog_reference(&mut self, source: AnalogReference) -> Result<()> {
        (**self).set_analog_reference(source)
    }
}
