pub mod analysis;
pub mod biomarkers;
pub mod patient;
pub mod user;
