use serde::{Deserialize, Serialize};

pub type Raw = u16;
pub type Millivolts = u16;
pub type Centimeters = u8;
pub type PinId = i32;

/// Full scale code of the 10-bit ADC the lookup tables are built for.
pub const RAW_MAX: Raw = 1023;

/// Raw value reported while the sensor is switched off, reads as "nothing in range".
pub const RAW_OUT_OF_RANGE: Raw = RAW_MAX;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Distance {
    Centimeters(Centimeters),
    OutOfRange,
}

impl Distance {
    pub fn centimeters(&self) -> Option<Centimeters> {
        match self {
            Distance::Centimeters(cm) => Some(*cm),
            Distance::OutOfRange => None,
        }
    }
}
