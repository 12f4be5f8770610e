use super::{AnalogReference, Level, PinMode, Platform};
use crate::types::{PinId, Raw, RAW_MAX};
use anyhow::{anyhow, bail, ensure, Result};
use embedded_hal::digital::OutputPin;

/// A single analog input already bound to its ADC.
pub trait AnalogChannel {
    fn pin(&self) -> PinId;
    /// Conversion scaled to 10 bits.
    fn read_raw(&mut self) -> Result<Raw>;
}

/// [`Platform`] over one analog channel and an optional `embedded-hal` output
/// switching the sensor supply.
///
/// The analog reference is only recorded. The channel's full scale is fixed
/// when it is created (attenuation on ESP), so switching reference does not
/// change the hardware.
pub struct HalPlatform<A, E> {
    analog: A,
    enable: Option<(PinId, E)>,
    reference: AnalogReference,
}

impl<A, E> HalPlatform<A, E>
where
    A: AnalogChannel,
    E: OutputPin,
{
    pub fn new(analog: A, enable: Option<(PinId, E)>) -> Self {
        HalPlatform {
            analog,
            enable,
            reference: AnalogReference::Default,
        }
    }

    pub fn reference(&self) -> AnalogReference {
        self.reference
    }

    pub fn release(self) -> (A, Option<(PinId, E)>) {
        (self.analog, self.enable)
    }

    fn enable_pin(&mut self, pin: PinId) -> Result<&mut E> {
        match self.enable.as_mut() {
            Some((enable_pin, driver)) if *enable_pin == pin => Ok(driver),
            _ => Err(anyhow!("pin {} is not wired as an output", pin)),
        }
    }
}

impl<A, E> Platform for HalPlatform<A, E>
where
    A: AnalogChannel,
    E: OutputPin,
{
    fn configure_pin_mode(&mut self, pin: PinId, mode: PinMode) -> Result<()> {
        // Drivers are created with their direction, so this only checks the wiring
        match mode {
            PinMode::Input if pin == self.analog.pin() => Ok(()),
            PinMode::Output => self.enable_pin(pin).map(|_| ()),
            PinMode::Input => bail!("pin {} is not wired as an analog input", pin),
        }
    }

    fn read_analog(&mut self, pin: PinId) -> Result<Raw> {
        ensure!(
            pin == self.analog.pin(),
            "pin {} is not wired as an analog input",
            pin
        );
        let raw = self.analog.read_raw()?;
        Ok(raw.min(RAW_MAX))
    }

    fn write_digital(&mut self, pin: PinId, level: Level) -> Result<()> {
        let driver = self.enable_pin(pin)?;
        match level {
            Level::High => driver.set_high(),
            Level::Low => driver.set_low(),
        }
        .map_err(|e| anyhow!("Failed to drive pin {}: {:?}", pin, e))
    }

    fn set_analog_reference(&mut self, source: AnalogReference) -> Result<()> {
        if source != self.reference {
            log::info!("Analog reference {:?} -> {:?}", self.reference, source);
        }
        self.reference = source;
        Ok(())
    }
}
