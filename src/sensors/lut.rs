//! Inverse of the GP2Y0A21YK output curve, indexed by the 10-bit ADC code
//! divided by four. One table per supported reference voltage.

use crate::config::ReferenceVoltage;
use crate::types::{Centimeters, Raw};

pub const LUT_SIZE: usize = 256;
pub const LAST_INDEX: usize = LUT_SIZE - 1;

/// Raw codes folded into a single table entry.
pub const RAW_PER_INDEX: Raw = 4;

pub static LUT_5V: [Centimeters; LUT_SIZE] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xE9, 0xD2, 0xBF, 0xAF, 0xA1,
    0x95, 0x8B, 0x82, 0x7A, 0x73, 0x6C, 0x66, 0x61, 0x5C, 0x58, 0x54, 0x50, 0x4D, 0x4A, 0x47, 0x44,
    0x41, 0x3F, 0x3D, 0x3B, 0x39, 0x37, 0x35, 0x34, 0x32, 0x31, 0x2F, 0x2E, 0x2D, 0x2C, 0x2B, 0x29,
    0x28, 0x27, 0x27, 0x26, 0x25, 0x24, 0x23, 0x22, 0x22, 0x21, 0x20, 0x20, 0x1F, 0x1E, 0x1E, 0x1D,
    0x1D, 0x1C, 0x1C, 0x1B, 0x1B, 0x1A, 0x1A, 0x19, 0x19, 0x19, 0x18, 0x18, 0x17, 0x17, 0x17, 0x16,
    0x16, 0x16, 0x15, 0x15, 0x15, 0x14, 0x14, 0x14, 0x14, 0x13, 0x13, 0x13, 0x13, 0x12, 0x12, 0x12,
    0x12, 0x12, 0x11, 0x11, 0x11, 0x11, 0x11, 0x10, 0x10, 0x10, 0x10, 0x10, 0x0F, 0x0F, 0x0F, 0x0F,
    0x0F, 0x0F, 0x0E, 0x0E, 0x0E, 0x0E, 0x0E, 0x0E, 0x0E, 0x0D, 0x0D, 0x0D, 0x0D, 0x0D, 0x0D, 0x0D,
    0x0D, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0B, 0x0B, 0x0B, 0x0B, 0x0B,
    0x0B, 0x0B, 0x0B, 0x0B, 0x0B, 0x0B, 0x0A, 0x0A, 0x0A, 0x0A, 0x0A, 0x0A, 0x0A, 0x0A, 0x0A, 0x0A,
    0x0A, 0x0A, 0x0A, 0x09, 0x09, 0x09, 0x09, 0x09, 0x09, 0x09, 0x09, 0x09, 0x09, 0x09, 0x09, 0x09,
    0x09, 0x09, 0x09, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08,
    0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x07, 0x07, 0x07, 0x07, 0x07, 0x07, 0x07, 0x07, 0x07, 0x07,
    0x07, 0x07, 0x07, 0x07, 0x07, 0x07, 0x07, 0x07, 0x07, 0x07, 0x07, 0x07, 0x07, 0x07, 0x07, 0x07,
    0x06, 0x06, 0x06, 0x06, 0x06, 0x06, 0x06, 0x06, 0x06, 0x06, 0x06, 0x06, 0x06, 0x06, 0x06, 0x06,
    0x06, 0x06, 0x06, 0x06, 0x06, 0x06, 0x06, 0x06, 0x06, 0x06, 0x06, 0x06, 0x06, 0x06, 0x06, 0x06,
];

pub static LUT_3V3: [Centimeters; LUT_SIZE] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xF5, 0xE4, 0xD5, 0xC7, 0xBC, 0xB1, 0xA8, 0x9F, 0x97, 0x90, 0x89, 0x83, 0x7E, 0x79, 0x74, 0x6F,
    0x6B, 0x67, 0x64, 0x60, 0x5D, 0x5A, 0x57, 0x55, 0x52, 0x50, 0x4E, 0x4C, 0x49, 0x48, 0x46, 0x44,
    0x42, 0x41, 0x3F, 0x3E, 0x3C, 0x3B, 0x3A, 0x38, 0x37, 0x36, 0x35, 0x34, 0x33, 0x32, 0x31, 0x30,
    0x2F, 0x2E, 0x2D, 0x2D, 0x2C, 0x2B, 0x2A, 0x2A, 0x29, 0x28, 0x28, 0x27, 0x26, 0x26, 0x25, 0x25,
    0x24, 0x24, 0x23, 0x23, 0x22, 0x22, 0x21, 0x21, 0x20, 0x20, 0x1F, 0x1F, 0x1F, 0x1E, 0x1E, 0x1D,
    0x1D, 0x1D, 0x1C, 0x1C, 0x1C, 0x1B, 0x1B, 0x1B, 0x1A, 0x1A, 0x1A, 0x1A, 0x19, 0x19, 0x19, 0x18,
    0x18, 0x18, 0x18, 0x17, 0x17, 0x17, 0x17, 0x17, 0x16, 0x16, 0x16, 0x16, 0x15, 0x15, 0x15, 0x15,
    0x15, 0x14, 0x14, 0x14, 0x14, 0x14, 0x14, 0x13, 0x13, 0x13, 0x13, 0x13, 0x13, 0x12, 0x12, 0x12,
    0x12, 0x12, 0x12, 0x12, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x10, 0x10, 0x10, 0x10, 0x10,
    0x10, 0x10, 0x10, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0E, 0x0E, 0x0E,
    0x0E, 0x0E, 0x0E, 0x0E, 0x0E, 0x0E, 0x0E, 0x0D, 0x0D, 0x0D, 0x0D, 0x0D, 0x0D, 0x0D, 0x0D, 0x0D,
    0x0D, 0x0D, 0x0D, 0x0D, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C,
    0x0C, 0x0C, 0x0B, 0x0B, 0x0B, 0x0B, 0x0B, 0x0B, 0x0B, 0x0B, 0x0B, 0x0B, 0x0B, 0x0B, 0x0B, 0x0B,
    0x0B, 0x0B, 0x0B, 0x0A, 0x0A, 0x0A, 0x0A, 0x0A, 0x0A, 0x0A, 0x0A, 0x0A, 0x0A, 0x0A, 0x0A, 0x0A,
    0x0A, 0x0A, 0x0A, 0x0A, 0x0A, 0x0A, 0x09, 0x09, 0x09, 0x09, 0x09, 0x09, 0x09, 0x09, 0x09, 0x09,
];

pub fn table(reference: ReferenceVoltage) -> &'static [Centimeters; LUT_SIZE] {
    match reference {
        ReferenceVoltage::V3_3 => &LUT_3V3,
        ReferenceVoltage::V5 => &LUT_5V,
    }
}

pub fn index_for(raw: Raw) -> usize {
    ((raw / RAW_PER_INDEX) as usize).min(LAST_INDEX)
}

pub fn lookup(reference: ReferenceVoltage, index: usize) -> Centimeters {
    table(reference)[index.min(LAST_INDEX)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RAW_MAX;

    #[test]
    fn test_golden_values_5v() {
        assert_eq!(lookup(ReferenceVoltage::V5, 0), 0xFF);
        assert_eq!(lookup(ReferenceVoltage::V5, 10), 0xFF);
        assert_eq!(lookup(ReferenceVoltage::V5, 11), 0xE9);
        assert_eq!(lookup(ReferenceVoltage::V5, 31), 0x44);
        assert_eq!(lookup(ReferenceVoltage::V5, 64), 0x1D);
        assert_eq!(lookup(ReferenceVoltage::V5, LAST_INDEX), 0x06);
    }

    #[test]
    fn test_golden_values_3v3() {
        assert_eq!(lookup(ReferenceVoltage::V3_3, 0), 0xFF);
        assert_eq!(lookup(ReferenceVoltage::V3_3, 15), 0xFF);
        assert_eq!(lookup(ReferenceVoltage::V3_3, 16), 0xF5);
        assert_eq!(lookup(ReferenceVoltage::V3_3, 31), 0x6F);
        assert_eq!(lookup(ReferenceVoltage::V3_3, LAST_INDEX), 0x09);
    }

    #[test]
    fn test_row_boundaries() {
        let golden_5v: [(usize, Centimeters); 12] = [
            (15, 0xA1),
            (16, 0x95),
            (32, 0x41),
            (47, 0x29),
            (48, 0x28),
            (63, 0x1D),
            (96, 0x12),
            (128, 0x0D),
            (160, 0x0A),
            (192, 0x08),
            (223, 0x07),
            (224, 0x06),
        ];
        for (index, centimeters) in golden_5v {
            assert_eq!(lookup(ReferenceVoltage::V5, index), centimeters, "5V index {}", index);
        }

        let golden_3v3: [(usize, Centimeters); 12] = [
            (32, 0x6B),
            (47, 0x44),
            (48, 0x42),
            (63, 0x30),
            (64, 0x2F),
            (80, 0x24),
            (96, 0x1D),
            (128, 0x15),
            (160, 0x10),
            (192, 0x0D),
            (224, 0x0B),
            (240, 0x0A),
        ];
        for (index, centimeters) in golden_3v3 {
            assert_eq!(
                lookup(ReferenceVoltage::V3_3, index),
                centimeters,
                "3.3V index {}",
                index
            );
        }
    }

    #[test]
    fn test_tables_never_get_farther_as_voltage_rises() {
        for reference in [ReferenceVoltage::V3_3, ReferenceVoltage::V5] {
            let table = table(reference);
            assert!(table.windows(2).all(|pair| pair[0] >= pair[1]));
        }
    }

    #[test]
    fn test_index_is_clamped() {
        assert_eq!(index_for(0), 0);
        assert_eq!(index_for(3), 0);
        assert_eq!(index_for(4), 1);
        assert_eq!(index_for(RAW_MAX), LAST_INDEX);
        assert_eq!(index_for(4095), LAST_INDEX);
        assert_eq!(lookup(ReferenceVoltage::V5, 1000), LUT_5V[LAST_INDEX]);
    }
}
