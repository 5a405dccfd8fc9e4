//! deepoct-core
//!
//! Pure domain types for macular OCT findings, patients and users.
//! No I/O: this is the shared vocabulary of the DeepOCT system.

pub mod error;
pub mod models;
pub mod vocab;
