pub mod adc;
pub mod gp2y0a21yk;
pub mod lut;
pub mod traits;

pub use gp2y0a21yk::Gp2y0a21yk;
pub use traits::DistanceProbe;
