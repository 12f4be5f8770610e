use crate::gpio::{AnalogChannel, AnalogReference, Level, PinMode, Platform};
use crate::types::{PinId, Raw, RAW_MAX};
use anyhow::{bail, Result};
use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin};
use std::collections::VecDeque;

/// Board stand-in that plays back scripted ADC samples and records every pin access.
pub struct MockPlatform {
    samples: VecDeque<Raw>,
    steady_state: Raw,
    fail_reads: bool,
    pub pin_modes: Vec<(PinId, PinMode)>,
    pub digital_writes: Vec<(PinId, Level)>,
    pub analog_reference: Option<AnalogReference>,
    pub analog_reads: usize,
}

impl MockPlatform {
    /// Every read returns `raw`.
    pub fn new(raw: Raw) -> Self {
        Self {
            samples: VecDeque::new(),
            steady_state: raw.min(RAW_MAX),
            fail_reads: false,
            pin_modes: Vec::new(),
            digital_writes: Vec::new(),
            analog_reference: None,
            analog_reads: 0,
        }
    }

    /// Plays `samples` back in order, then keeps returning the last one.
    pub fn with_samples(samples: impl IntoIterator<Item = Raw>) -> Self {
        let samples: VecDeque<Raw> = samples.into_iter().collect();
        let mut platform = Self::new(samples.back().copied().unwrap_or(0));
        platform.samples = samples;
        platform
    }

    pub fn push_samples(&mut self, samples: impl IntoIterator<Item = Raw>) {
        self.samples.extend(samples);
        if let Some(last) = self.samples.back() {
            self.steady_state = (*last).min(RAW_MAX);
        }
    }

    pub fn set_fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    pub fn last_level(&self, pin: PinId) -> Option<Level> {
        self.digital_writes
            .iter()
            .rev()
            .find(|(written, _)| *written == pin)
            .map(|(_, level)| *level)
    }
}

impl Platform for MockPlatform {
    fn configure_pin_mode(&mut self, pin: PinId, mode: PinMode) -> Result<()> {
        self.pin_modes.push((pin, mode));
        Ok(())
    }

    fn read_analog(&mut self, pin: PinId) -> Result<Raw> {
        if self.fail_reads {
            bail!("ADC conversion on pin {} timed out", pin);
        }
        self.analog_reads += 1;
        let raw = self.samples.pop_front().unwrap_or(self.steady_state);
        Ok(raw.min(RAW_MAX))
    }

    fn write_digital(&mut self, pin: PinId, level: Level) -> Result<()> {
        self.digital_writes.push((pin, level));
        Ok(())
    }

    fn set_analog_reference(&mut self, source: AnalogReference) -> Result<()> {
        self.analog_reference = Some(source);
        Ok(())
    }
}

/// Analog input that always converts to the same code.
pub struct MockChannel {
    pub pin: PinId,
    pub raw: Raw,
}

impl AnalogChannel for MockChannel {
    fn pin(&self) -> PinId {
        self.pin
    }

    fn read_raw(&mut self) -> Result<Raw> {
        Ok(self.raw)
    }
}

/// `embedded-hal` output that keeps every level it was driven to, `true` is high.
#[derive(Default)]
pub struct MockOutputPin {
    pub levels: Vec<bool>,
    pub broken: bool,
}

impl ErrorType for MockOutputPin {
    type Error = ErrorKind;
}

impl OutputPin for MockOutputPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        if self.broken {
            return Err(ErrorKind::Other);
        }
        self.levels.push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        if self.broken {
            return Err(ErrorKind::Other);
        }
        self.levels.push(true);
        Ok(())
    }
}
