use anyhow::Result;
use esp_idf_hal::adc::oneshot::AdcDriver;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::OutputPin;
use esp_idf_hal::prelude::Peripherals;
use gp2y0a21yk::config::{
    SensorConfig, BOARD_AVERAGING, BOARD_REFERENCE, CLOSE_THRESHOLD_CM, DISTANCE_PIN, ENABLE_PIN,
    POLL_INTERVAL,
};
use gp2y0a21yk::gpio::esp::EspPlatform;
use gp2y0a21yk::{DistanceProbe, Gp2y0a21yk};

fn main() -> Result<()> {
    // It is necessary to call this function once. Otherwise some patches to the runtime
    // implemented by esp-idf-sys might not link properly. See https://github.com/esp-rs/esp-idf-template/issues/71
    esp_idf_svc::sys::link_patches();
    // Bind the log crate to the ESP Logging facilities
    esp_idf_svc::log::EspLogger::initialize_default();

    let peripherals = Peripherals::take()?;

    let adc = AdcDriver::new(peripherals.adc1)?;
    let platform = EspPlatform::esp(
        &adc,
        peripherals.pins.gpio2,
        Some(peripherals.pins.gpio5.downgrade_output()),
    )?;

    let config = SensorConfig::new(DISTANCE_PIN)
        .with_reference(BOARD_REFERENCE)
        .with_enable_pin(ENABLE_PIN)
        .with_averaging(BOARD_AVERAGING);
    let mut sensor = Gp2y0a21yk::new(platform, config)?;

    loop {
        match sensor.report() {
            Ok(report) => match report.to_json() {
                Ok(json) => log::info!("{}", json),
                Err(e) => log::error!("Failed to serialize report: {:?}", e),
            },
            Err(e) => log::error!("Failed to read distance: {}", e),
        }

        match sensor.is_closer(CLOSE_THRESHOLD_CM) {
            Ok(true) => log::warn!("Object closer than {}cm", CLOSE_THRESHOLD_CM),
            Ok(false) => {}
            Err(e) => log::error!("Failed to read distance: {}", e),
        }

        FreeRtos::delay_ms(POLL_INTERVAL.as_millis() as u32);
    }
}
