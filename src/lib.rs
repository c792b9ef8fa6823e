//! Tenkey: the state machine behind a four-function calculator
//!
//! Tenkey interprets discrete button-press events (digits, decimal
//! point, binary operators, evaluate, clear, sign-flip, percent) and
//! maintains the minimal state needed to produce the correct display
//! string after each press, including chained-operator and
//! repeated-evaluation semantics. Rendering and input wiring stay
//! outside the crate: a UI layer forwards [`ButtonEvent`] values to
//! [`CalculatorEngine::handle`] and receives display updates through a
//! registered callback.
//!
//! # Core Concepts
//!
//! - **ButtonEvent**: one discrete user action, typed per kind
//! - **Operator**: the closed four-function operation table
//! - **OperationHistory**: append-only record of applied operations,
//!   consulted by consecutive evaluate presses
//!
//! # Example
//!
//! ```rust
//! use tenkey::{ButtonEvent, CalculatorEngine, Operator};
//!
//! let mut engine = CalculatorEngine::new();
//! engine.register_display_callback(|display| {
//!     // The UI decides how to render "nothing typed" (usually "0").
//!     println!("display: {}", display.unwrap_or("0"));
//! });
//!
//! engine
//!     .handle_all([
//!         ButtonEvent::Digit('1'),
//!         ButtonEvent::Operator(Operator::Add),
//!         ButtonEvent::Digit('1'),
//!         ButtonEvent::Evaluate,
//!     ])
//!     .unwrap();
//!
//! assert_eq!(engine.current_display(), Some("2"));
//! ```

pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    AppliedOperation, ArithmeticError, ButtonEvent, ButtonKind, EventError, OperationHistory,
    Operator,
};
pub use crate::engine::{
    CalculatorEngine, DisplayCallback, EmptySignFlip, EngineConfig, EngineError, EngineState,
    ERROR_SENTINEL,
};
