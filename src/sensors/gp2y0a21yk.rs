//! Sharp GP2Y0A21YK analog IR distance sensor, roughly 10cm to 80cm.
//!
//! The sensor outputs a voltage that rises as an object gets closer. Distance
//! is read by averaging raw ADC codes and looking the result up in the table
//! for the configured reference voltage. The supply can optionally be switched
//! through a digital output, while it is off every read reports the
//! out-of-range sentinel.

use crate::config::{validate_averaging, ReferenceVoltage, SensorConfig};
use crate::error::Error;
use crate::gpio::{Level, PinMode, Platform};
use crate::schemas::DistanceReport;
use crate::sensors::adc::Adc;
use crate::sensors::lut;
use crate::sensors::traits::DistanceProbe;
use crate::types::*;

pub struct Gp2y0a21yk<P: Platform> {
    platform: P,
    config: SensorConfig,
    adc: Adc,
    enabled: bool,
}

impl<P> Gp2y0a21yk<P>
where
    P: Platform,
{
    pub fn new(platform: P, config: SensorConfig) -> Result<Self, Error> {
        config.validate()?;
        let mut sensor = Self {
            platform,
            config,
            adc: Adc::new(RAW_MAX, config.reference.millivolts()),
            enabled: false,
        };
        sensor.apply()?;
        Ok(sensor)
    }

    /// Swap in a new configuration. If it is rejected or the board refuses it,
    /// the previous configuration stays active.
    pub fn configure(&mut self, config: SensorConfig) -> Result<(), Error> {
        config.validate()?;
        let previous = self.config;
        let was_enabled = self.enabled;

        self.config = config;
        self.adc = Adc::new(RAW_MAX, config.reference.millivolts());
        if let Err(e) = self.apply() {
            log::warn!("Keeping previous configuration: {}", e);
            self.restore(previous, was_enabled);
            return Err(e);
        }

        // Only power down the old supply once the new one is up
        if let Some(old_pin) = previous.enable_pin {
            if config.enable_pin != Some(old_pin) {
                self.platform.write_digital(old_pin, Level::Low)?;
            }
        }
        Ok(())
    }

    fn restore(&mut self, previous: SensorConfig, was_enabled: bool) {
        self.config = previous;
        self.adc = Adc::new(RAW_MAX, previous.reference.millivolts());
        if let Err(e) = self
            .platform
            .set_analog_reference(previous.reference.analog_reference())
        {
            log::error!("Failed to restore analog reference: {}", e);
        }
        if let Err(e) = self.set_enabled(was_enabled) {
            log::error!("Failed to restore sensor supply: {}", e);
        }
    }

    fn apply(&mut self) -> Result<(), Error> {
        log::info!(
            "GP2Y0A21YK on pin {}: {}mV reference, averaging {}, enable pin {:?}",
            self.config.input_pin,
            self.config.reference.millivolts(),
            self.config.averaging,
            self.config.enable_pin
        );
        self.platform
            .configure_pin_mode(self.config.input_pin, PinMode::Input)?;
        self.platform
            .set_analog_reference(self.config.reference.analog_reference())?;
        if let Some(enable_pin) = self.config.enable_pin {
            self.platform.configure_pin_mode(enable_pin, PinMode::Output)?;
        }
        self.set_enabled(true)
    }

    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, on: bool) -> Result<(), Error> {
        if let Some(enable_pin) = self.config.enable_pin {
            self.platform.write_digital(enable_pin, Level::from(on))?;
        }
        if self.enabled != on {
            log::debug!("GP2Y0A21YK {}", if on { "enabled" } else { "disabled" });
        }
        self.enabled = on;
        Ok(())
    }

    pub fn set_averaging(&mut self, count: usize) -> Result<(), Error> {
        if let Err(e) = validate_averaging(count) {
            log::warn!("Keeping averaging at {}: {}", self.config.averaging, e);
            return Err(e);
        }
        self.config.averaging = count;
        Ok(())
    }

    pub fn set_reference_voltage(&mut self, millivolts: Millivolts) -> Result<(), Error> {
        let reference = match ReferenceVoltage::try_from(millivolts) {
            Ok(reference) => reference,
            Err(e) => {
                log::warn!(
                    "Keeping {}mV reference: {}",
                    self.config.reference.millivolts(),
                    e
                );
                return Err(e);
            }
        };
        self.platform
            .set_analog_reference(reference.analog_reference())?;
        self.config.reference = reference;
        self.adc = Adc::new(RAW_MAX, reference.millivolts());
        Ok(())
    }

    /// A single conversion, or [`RAW_OUT_OF_RANGE`] while the sensor is off.
    pub fn read_raw(&mut self) -> Result<Raw, Error> {
        if !self.enabled {
            return Ok(RAW_OUT_OF_RANGE);
        }
        Ok(self.platform.read_analog(self.config.input_pin)?)
    }

    pub fn read_millivolts(&mut self) -> Result<Millivolts, Error> {
        let raw = self.read_raw()?;
        Ok(self.adc.raw_to_millivolts(raw))
    }

    /// Mean of `averaging` fresh conversions.
    fn read_averaged_raw(&mut self) -> Result<Raw, Error> {
        let count = self.config.averaging.max(1);
        let mut sum: u64 = 0;
        for _ in 0..count {
            sum += self.read_raw()? as u64;
        }
        Ok((sum / count as u64) as Raw)
    }

    pub fn read_centimeters(&mut self) -> Result<Centimeters, Error> {
        let raw = self.read_averaged_raw()?;
        let centimeters = lut::lookup(self.config.reference, lut::index_for(raw));
        log::debug!("raw {} -> {}cm", raw, centimeters);
        Ok(centimeters)
    }

    /// Like [`Self::read_centimeters`] but reports the last table slot as nothing detected.
    pub fn read_distance(&mut self) -> Result<Distance, Error> {
        let raw = self.read_averaged_raw()?;
        let index = lut::index_for(raw);
        if index >= lut::LAST_INDEX {
            return Ok(Distance::OutOfRange);
        }
        Ok(Distance::Centimeters(lut::lookup(self.config.reference, index)))
    }

    pub fn report(&mut self) -> Result<DistanceReport, Error> {
        let raw = self.read_raw()?;
        Ok(DistanceReport {
            raw,
            millivolts: self.adc.raw_to_millivolts(raw),
            distance: self.read_distance()?,
            enabled: self.enabled,
        })
    }

    pub fn release(self) -> P {
        self.platform
    }
}

impl<P> DistanceProbe for Gp2y0a21yk<P>
where
    P: Platform,
{
    fn read_centimeters(&mut self) -> Result<Centimeters, Error> {
        Gp2y0a21yk::read_centimeters(self)
    }
}
