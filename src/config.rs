use crate::error::Error;
use crate::gpio::AnalogReference;
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(try_from = "u16", into = "u16")]
pub enum ReferenceVoltage {
    /// Wire AREF to the 3.3V rail, gives better resolution with its own table
    V3_3,
    #[default]
    V5,
}

impl ReferenceVoltage {
    pub const fn millivolts(&self) -> Millivolts {
        match self {
            ReferenceVoltage::V3_3 => 3300,
            ReferenceVoltage::V5 => 5000,
        }
    }

    pub const fn analog_reference(&self) -> AnalogReference {
        match self {
            ReferenceVoltage::V3_3 => AnalogReference::External,
            ReferenceVoltage::V5 => AnalogReference::Default,
        }
    }
}

impl TryFrom<u16> for ReferenceVoltage {
    type Error = Error;

    fn try_from(millivolts: u16) -> Result<Self, Self::Error> {
        match millivolts {
            3300 => Ok(ReferenceVoltage::V3_3),
            5000 => Ok(ReferenceVoltage::V5),
            other => Err(Error::InvalidConfiguration(format!(
                "unsupported reference voltage {}mV, expected 3300 or 5000",
                other
            ))),
        }
    }
}

impl From<ReferenceVoltage> for u16 {
    fn from(reference: ReferenceVoltage) -> Self {
        reference.millivolts()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorConfig {
    pub input_pin: PinId,
    #[serde(default)]
    pub reference: ReferenceVoltage,
    #[serde(default = "default_averaging")]
    pub averaging: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_pin: Option<PinId>,
}

const fn default_averaging() -> usize {
    DEFAULT_AVERAGING
}

impl SensorConfig {
    /// Every sample passed straight through, board default 5V reference, always powered.
    pub fn new(input_pin: PinId) -> Self {
        SensorConfig {
            input_pin,
            reference: ReferenceVoltage::default(),
            averaging: DEFAULT_AVERAGING,
            enable_pin: None,
        }
    }

    pub fn with_reference(mut self, reference: ReferenceVoltage) -> Self {
        self.reference = reference;
        self
    }

    pub fn with_averaging(mut self, averaging: usize) -> Self {
        self.averaging = averaging;
        self
    }

    pub fn with_enable_pin(mut self, enable_pin: PinId) -> Self {
        self.enable_pin = Some(enable_pin);
        self
    }

    pub fn validate(&self) -> Result<(), Error> {
        validate_averaging(self.averaging)?;
        if self.enable_pin == Some(self.input_pin) {
            return Err(Error::InvalidConfiguration(format!(
                "enable pin {} is also the analog input",
                self.input_pin
            )));
        }
        Ok(())
    }
}

pub fn validate_averaging(averaging: usize) -> Result<(), Error> {
    if averaging < 1 {
        return Err(Error::InvalidConfiguration(
            "averaging count must be at least 1".to_string(),
        ));
    }
    Ok(())
}

pub const DEFAULT_AVERAGING: usize = 1;

pub const DISTANCE_PIN: PinId = 2;
pub const ENABLE_PIN: PinId = 5;
pub const BOARD_AVERAGING: usize = 4;
/// ESP ADC at 11dB attenuation tops out near the 3.3V rail
pub const BOARD_REFERENCE: ReferenceVoltage = ReferenceVoltage::V3_3;
pub const POLL_INTERVAL: Duration = Duration::from_millis(250);
pub const CLOSE_THRESHOLD_CM: Centimeters = 20;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_voltage_accepts_supported_values() {
        assert_eq!(
            ReferenceVoltage::try_from(3300u16).unwrap(),
            ReferenceVoltage::V3_3
        );
        assert_eq!(ReferenceVoltage::try_from(5000u16).unwrap(), ReferenceVoltage::V5);
        assert_eq!(ReferenceVoltage::V3_3.analog_reference(), AnalogReference::External);
        assert_eq!(ReferenceVoltage::V5.analog_reference(), AnalogReference::Default);
    }

    #[test]
    fn test_reference_voltage_rejects_anything_else() {
        for millivolts in [0u16, 3, 5, 1100, 3299, 4999, 5001] {
            match ReferenceVoltage::try_from(millivolts) {
                Err(Error::InvalidConfiguration(_)) => {}
                other => panic!("{}mV should be rejected, got {:?}", millivolts, other),
            }
        }
    }

    #[test]
    fn test_defaults() {
        let config = SensorConfig::new(14);
        assert_eq!(config.averaging, 1);
        assert_eq!(config.reference, ReferenceVoltage::V5);
        assert_eq!(config.enable_pin, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_averaging_is_rejected() {
        let config = SensorConfig::new(14).with_averaging(0);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_enable_pin_cannot_be_the_input() {
        let config = SensorConfig::new(14).with_enable_pin(14);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_board_settings_are_valid() {
        assert_eq!(BOARD_REFERENCE.millivolts(), 3300);
        let config = SensorConfig::new(DISTANCE_PIN)
            .with_reference(BOARD_REFERENCE)
            .with_enable_pin(ENABLE_PIN)
            .with_averaging(BOARD_AVERAGING);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_from_json() {
        let config: SensorConfig =
            serde_json::from_str(r#"{"input_pin": 2, "reference": 3300, "enable_pin": 5}"#)
                .unwrap();
        assert_eq!(
            config,
            SensorConfig::new(2)
                .with_reference(ReferenceVoltage::V3_3)
                .with_enable_pin(5)
        );

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""reference":3300"#));
    }

    #[test]
    fn test_parse_rejects_unsupported_reference() {
        let parsed = serde_json::from_str::<SensorConfig>(r#"{"input_pin": 2, "reference": 4200}"#);
        assert!(parsed.is_err());
    }
}
