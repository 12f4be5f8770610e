use crate::types::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistanceReport {
    pub raw: Raw,
    pub millivolts: Millivolts,
    pub distance: Distance,
    pub enabled: bool,
}

impl DistanceReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
