//! deepoct-auth
//!
//! Password hashing, credential checks and signed session tokens.

pub mod error;
pub mod flows;
pub mod jwt;
pub mod password;
