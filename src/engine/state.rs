//! Mutable engine state and display-text helpers.

use crate::core::Operator;
use serde::{Deserialize, Serialize};

/// The sole mutable entity behind a calculator, owned exclusively by
/// the engine.
///
/// Fields move between set and unset exactly as the event handlers
/// dictate; `display`, when set and not the error sentinel, is always a
/// syntactically valid numeric literal under construction (digits, at
/// most one decimal point, optional leading minus).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineState {
    /// The text currently entered/shown; unset means nothing is typed.
    pub display: Option<String>,
    /// Running total folded from prior operator applications.
    pub accumulated_value: Option<f64>,
    /// Operator selected but not yet applied, waiting for its operand.
    pub pending_operator: Option<Operator>,
    /// The most recently applied operator, repeated on consecutive
    /// evaluate presses and during operand folding.
    pub last_operator: Option<Operator>,
    /// Set right after an evaluation: the next digit starts a fresh
    /// entry instead of appending to the result.
    pub reset_on_next_digit: bool,
}

impl EngineState {
    /// Reset every field to its initial unset value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Drop a single trailing decimal point, turning `"5."` into `"5"`.
pub(crate) fn strip_trailing_decimal(text: &str) -> &str {
    text.strip_suffix('.').unwrap_or(text)
}

/// Toggle the leading minus: add it if absent, strip it if present.
pub(crate) fn toggle_sign(text: &str) -> String {
    match text.strip_prefix('-') {
        Some(rest) => rest.to_string(),
        None => format!("-{text}"),
    }
}

/// Render a number the way the display shows it: shortest string that
/// round-trips, so `2.0` becomes `"2"` and `-0.0` becomes `"-0"`.
pub(crate) fn format_number(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_fully_unset() {
        let state = EngineState::default();
        assert!(state.display.is_none());
        assert!(state.accumulated_value.is_none());
        assert!(state.pending_operator.is_none());
        assert!(state.last_operator.is_none());
        assert!(!state.reset_on_next_digit);
    }

    #[test]
    fn reset_clears_everything() {
        let mut state = EngineState {
            display: Some("12.5".to_string()),
            accumulated_value: Some(4.0),
            pending_operator: Some(Operator::Add),
            last_operator: Some(Operator::Multiply),
            reset_on_next_digit: true,
        };
        state.reset();
        assert_eq!(state, EngineState::default());
    }

    #[test]
    fn strip_trailing_decimal_only_strips_the_last_dot() {
        assert_eq!(strip_trailing_decimal("5."), "5");
        assert_eq!(strip_trailing_decimal("5.0"), "5.0");
        assert_eq!(strip_trailing_decimal("5"), "5");
        assert_eq!(strip_trailing_decimal("-0."), "-0");
    }

    #[test]
    fn toggle_sign_adds_and_removes_minus() {
        assert_eq!(toggle_sign("12"), "-12");
        assert_eq!(toggle_sign("-12"), "12");
        assert_eq!(toggle_sign("0"), "-0");
        assert_eq!(toggle_sign("-0"), "0");
        assert_eq!(toggle_sign("0."), "-0.");
    }

    #[test]
    fn format_number_uses_shortest_form() {
        assert_eq!(format_number(2.0), "2");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(-0.0), "-0");
    }

    #[test]
    fn state_serializes_correctly() {
        let state = EngineState {
            display: Some("100.01".to_string()),
            accumulated_value: Some(7.0),
            pending_operator: None,
            last_operator: Some(Operator::Add),
            reset_on_next_digit: false,
        };
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: EngineState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
