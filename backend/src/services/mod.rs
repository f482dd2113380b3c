//! Business logic services
//!
//! Services sit between the HTTP handlers and the shared calculation engine.

pub mod calculator;

pub use calculator::{CalculationRequest, CalculatorService};
