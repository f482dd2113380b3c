//! Macro Calculator Shared Library
//!
//! This crate contains the macro calculation engine and the types shared by
//! the backend and WASM modules.

pub mod calculator;
pub mod errors;
pub mod types;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use calculator::*;
pub use errors::*;
pub use types::*;
pub use units::*;
