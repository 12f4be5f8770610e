use super::{AnalogChannel, HalPlatform};
use crate::types::{PinId, Raw};
use anyhow::Result;
use core::borrow::Borrow;
use esp_idf_hal::adc::{
    attenuation,
    oneshot::{config::AdcChannelConfig, AdcChannelDriver, AdcDriver},
};
use esp_idf_hal::gpio::{ADCPin, AnyOutputPin, Output, Pin, PinDriver};

/// The ESP ADC converts at 12 bits, the lookup tables expect 10.
const ESP_ADC_SHIFT: u16 = 2;

pub type EspPlatform<'a, T, M> =
    HalPlatform<EspAnalogChannel<'a, T, M>, PinDriver<'a, AnyOutputPin, Output>>;

pub struct EspAnalogChannel<'a, T: ADCPin, M: Borrow<AdcDriver<'a, T::Adc>>> {
    adc_driver: AdcChannelDriver<'a, T, M>,
    pin: PinId,
}

impl<'a, T, M> EspAnalogChannel<'a, T, M>
where
    T: ADCPin,
    M: Borrow<AdcDriver<'a, T::Adc>>,
{
    pub fn new(adc: M, pin: T) -> Result<Self> {
        let pin_id = pin.pin();
        // 11dB spans roughly 0-3.1V, covering the whole sensor output swing
        let probe_config = AdcChannelConfig {
            attenuation: attenuation::DB_11,
            ..Default::default()
        };
        Ok(Self {
            adc_driver: AdcChannelDriver::new(adc, pin, &probe_config)?,
            pin: pin_id,
        })
    }
}

impl<'a, T, M> AnalogChannel for EspAnalogChannel<'a, T, M>
where
    T: ADCPin,
    M: Borrow<AdcDriver<'a, T::Adc>>,
{
    fn pin(&self) -> PinId {
        self.pin
    }

    fn read_raw(&mut self) -> Result<Raw> {
        Ok(self.adc_driver.read_raw()? >> ESP_ADC_SHIFT)
    }
}

impl<'a, T, M> EspPlatform<'a, T, M>
where
    T: ADCPin,
    M: Borrow<AdcDriver<'a, T::Adc>>,
{
    pub fn esp(
        adc: M,
        distance_pin: T,
        enable_pin: Option<AnyOutputPin>,
    ) -> Result<Self> {
        let analog = EspAnalogChannel::new(adc, distance_pin)?;
        let enable = match enable_pin {
            Some(pin) => {
                let driver = PinDriver::output(pin)?;
                Some((driver.pin(), driver))
            }
            None => None,
        };
        Ok(HalPlatform::new(analog, enable))
    }
}
