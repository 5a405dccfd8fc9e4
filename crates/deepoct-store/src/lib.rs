//! deepoct-store
//!
//! Repository interfaces for users, patients and saved analyses, plus the
//! in-memory implementation the server runs with.

pub mod error;
pub mod memory;
pub mod repository;
pub mod seed;
