//! Core vocabulary: button events, the operation table, and the
//! applied-operation history.

pub mod event;
pub mod history;
pub mod ops;

pub use event::{ButtonEvent, ButtonKind, EventError};
pub use history::{AppliedOperation, OperationHistory};
pub use ops::{percent, ArithmeticError, Operator};
