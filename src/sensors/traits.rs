use crate::error::Error;
use crate::types::Centimeters;

pub trait DistanceProbe {
    fn read_centimeters(&mut self) -> Result<Centimeters, Error>;

    /// Object nearer than `threshold_cm`.
    fn is_closer(&mut self, threshold_cm: Centimeters) -> Result<bool, Error> {
        Ok(self.read_centimeters()? < threshold_cm)
    }

    /// Object beyond `threshold_cm`.
    fn is_farther(&mut self, threshold_cm: Centimeters) -> Result<bool, Error> {
        Ok(self.read_centimeters()? > threshold_cm)
    }
}
