//! Error handling module
//!
//! Defines the error taxonomy reported by the deployer

pub mod types;

pub use types::*;
