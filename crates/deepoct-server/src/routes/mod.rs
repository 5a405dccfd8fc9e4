pub mod analyses;
pub mod analysis;
pub mod auth;
pub mod forms;
pub mod health;
pub mod patients;
