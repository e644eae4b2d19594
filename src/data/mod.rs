pub mod alerts;
pub mod chart;
pub mod export;
pub mod reading;
pub mod status;
