use crate::types::{Millivolts, Raw};

/// Linear raw code to millivolt conversion over the full ADC span.
#[derive(Debug, Clone, Copy)]
pub struct Adc {
    top: u32,
    reference_mv: u32,
}

impl Adc {
    /// `top` is the code that reads as exactly `reference_mv`.
    pub const fn new(top: Raw, reference_mv: Millivolts) -> Self {
        Self {
            top: top as u32,
            reference_mv: reference_mv as u32,
        }
    }

    pub fn raw_to_millivolts(&self, raw: Raw) -> Millivolts {
        let raw = (raw as u32).min(self.top);
        (raw * self.reference_mv / self.top) as Millivolts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RAW_MAX;

    #[test]
    fn test_end_points() {
        for reference in [3300, 5000] {
            let adc = Adc::new(RAW_MAX, reference);
            assert_eq!(adc.raw_to_millivolts(0), 0);
            assert_eq!(adc.raw_to_millivolts(RAW_MAX), reference);
        }
    }

    #[test]
    fn test_monotonic_over_whole_range() {
        for reference in [3300, 5000] {
            let adc = Adc::new(RAW_MAX, reference);
            let mut last = 0;
            for raw in 0..=RAW_MAX {
                let millivolts = adc.raw_to_millivolts(raw);
                assert!(millivolts >= last, "{} dropped at raw {}", reference, raw);
                last = millivolts;
            }
        }
    }

    #[test]
    fn test_truncates_like_integer_map() {
        let adc = Adc::new(RAW_MAX, 5000);
        assert_eq!(adc.raw_to_millivolts(512), 2502);
        assert_eq!(adc.raw_to_millivolts(1), 4);

        let adc = Adc::new(RAW_MAX, 3300);
        assert_eq!(adc.raw_to_millivolts(512), 1651);
    }

    #[test]
    fn test_out_of_range_codes_saturate() {
        let adc = Adc::new(RAW_MAX, 5000);
        assert_eq!(adc.raw_to_millivolts(4095), 5000);
    }
}
