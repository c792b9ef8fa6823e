//! Applied-operation history tracking.
//!
//! The engine records every fully applied operation so that consecutive
//! evaluate presses can repeat the most recent one. Recording follows
//! functional principles: `record` returns a new history rather than
//! mutating in place.

use super::ops::Operator;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of one fully applied operation.
///
/// Entries always carry two defined operands and the operator that was
/// applied to them; partial operations are never recorded.
///
/// # Example
///
/// ```rust
/// use tenkey::core::{AppliedOperation, Operator};
/// use chrono::Utc;
///
/// let entry = AppliedOperation {
///     operator: Operator::Add,
///     left: 1.0,
///     right: 1.0,
///     result: 2.0,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(entry.operator.apply(entry.left, entry.right), Ok(entry.result));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppliedOperation {
    /// The operator that was applied
    pub operator: Operator,
    /// The left operand
    pub left: f64,
    /// The right operand
    pub right: f64,
    /// The value the application produced
    pub result: f64,
    /// When the operation was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered, append-only history of applied operations.
///
/// History is immutable - the `record` method returns a new history
/// with the entry added.
///
/// # Example
///
/// ```rust
/// use tenkey::core::{AppliedOperation, OperationHistory, Operator};
/// use chrono::Utc;
///
/// let history = OperationHistory::new();
/// let history = history.record(AppliedOperation {
///     operator: Operator::Multiply,
///     left: 3.0,
///     right: 4.0,
///     result: 12.0,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.len(), 1);
/// assert_eq!(history.last().unwrap().result, 12.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationHistory {
    entries: Vec<AppliedOperation>,
}

impl OperationHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record an applied operation, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the entry added.
    pub fn record(&self, entry: AppliedOperation) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        Self { entries }
    }

    /// The most recently applied operation, if any.
    ///
    /// Consecutive evaluate presses repeat this entry's operator and
    /// right operand.
    pub fn last(&self) -> Option<&AppliedOperation> {
        self.entries.last()
    }

    /// Get all entries in application order.
    pub fn entries(&self) -> &[AppliedOperation] {
        &self.entries
    }

    /// Number of recorded operations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no operation has been applied yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
