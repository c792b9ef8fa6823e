//! Engine dispatch errors.

use thiserror::Error;

/// Errors that can occur while handling a button event.
///
/// Both variants signal caller or invariant bugs: a well-behaved UI
/// layer going through [`ButtonEvent::from_raw`](crate::ButtonEvent::from_raw)
/// never triggers them, and arithmetic misuse (division by zero) is
/// recovered internally via the error sentinel instead of surfacing
/// here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A hand-built digit event carried a non-digit character.
    #[error("'{0}' is not a digit")]
    InvalidDigit(char),

    /// The display text failed to parse as a number. The handlers keep
    /// the display a valid numeric literal at all times, so this marks
    /// an internal invariant violation.
    #[error("display text '{0}' is not a valid number")]
    MalformedDisplay(String),
}
