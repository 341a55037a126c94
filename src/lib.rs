//! NEO Impact - Asteroid Impact and Deflection Engine
//!
//! A library crate computing the consequences of an asteroid strike and the
//! effect of four deflection strategies, using documented simplified
//! scaling laws for an educational simulator.

pub mod config;
pub mod error;
pub mod impact;
pub mod mitigation;
pub mod neo;
pub mod types;

#[cfg(test)]
pub mod test_utils;

pub use config::EngineConfig;
pub use error::{EngineError, Result};
