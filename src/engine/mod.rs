//! The calculator engine and its supporting types.

pub mod config;
pub mod error;
pub mod machine;
pub mod state;

pub use config::{EmptySignFlip, EngineConfig};
pub use error::EngineError;
pub use machine::{CalculatorEngine, DisplayCallback, ERROR_SENTINEL};
pub use state::EngineState;
