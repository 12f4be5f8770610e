pub mod reading;

pub use reading::DistanceReport;
