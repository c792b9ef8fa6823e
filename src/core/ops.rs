//! The four-function arithmetic operation table.
//!
//! Operators form a closed set, so dispatch is a plain `match` on an
//! enum rather than a dynamic lookup. All operations are pure functions
//! over `f64` operands.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by applying an arithmetic operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// The right operand of a division was zero.
    #[error("cannot divide by zero")]
    DivisionByZero,
}

/// One of the four binary calculator operations.
///
/// Each operator knows its display symbol and how to apply itself to a
/// pair of operands.
///
/// # Example
///
/// ```rust
/// use tenkey::core::Operator;
///
/// let sum = Operator::Add.apply(1.0, 2.0).unwrap();
/// assert_eq!(sum, 3.0);
///
/// assert_eq!(Operator::from_symbol('*'), Some(Operator::Multiply));
/// assert_eq!(Operator::Divide.symbol(), '/');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Look up an operator by its button symbol.
    ///
    /// Returns `None` for anything outside `+ - * /`.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// The button symbol for this operator.
    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Apply the operation to a pair of operands.
    ///
    /// Division fails with [`ArithmeticError::DivisionByZero`] when the
    /// right operand is zero; every other combination succeeds.
    pub fn apply(&self, left: f64, right: f64) -> Result<f64, ArithmeticError> {
        match self {
            Self::Add => Ok(left + right),
            Self::Subtract => Ok(left - right),
            Self::Multiply => Ok(left * right),
            Self::Divide => {
                if right == 0.0 {
                    Err(ArithmeticError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
        }
    }
}

/// Scale a value down to its percentage form (`50` becomes `0.5`).
pub fn percent(value: f64) -> f64 {
    value / 100.0
}
