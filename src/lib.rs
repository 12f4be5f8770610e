//! Driver for the Sharp GP2Y0A21YK analog infrared distance sensor.
//!
//! The driver talks to the board through [`gpio::Platform`], so the conversion
//! and averaging logic runs the same against real pins, an `embedded-hal`
//! output, or [`mock_platform::MockPlatform`].

pub mod config;
mod error;
pub mod gpio;
pub mod mock_platform;
pub mod schemas;
pub mod sensors;
pub mod types;

pub use config::{ReferenceVoltage, SensorConfig};
pub use error::Error;
pub use sensors::{DistanceProbe, Gp2y0a21yk};
pub use types::Distance;
