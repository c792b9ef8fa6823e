//! Button-press events consumed by the calculator engine.
//!
//! The UI layer translates raw input (pointer clicks, key presses) into
//! [`ButtonEvent`] values and feeds them to the engine one at a time.
//! Events are immutable and short-lived.

use super::ops::Operator;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while constructing events from untyped UI input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    /// The kind string was outside the enumerated set. Signals a caller
    /// bug; unreachable from a well-behaved UI layer.
    #[error("unknown button kind '{0}'")]
    InvalidEventKind(String),

    /// A digit or operator event arrived without its value.
    #[error("button kind '{0}' requires a value")]
    MissingValue(String),

    /// The value of a digit event was not an ASCII digit.
    #[error("'{0}' is not a digit")]
    InvalidDigit(char),

    /// The value of an operator event was not one of `+ - * /`.
    #[error("unknown operator symbol '{0}'")]
    UnknownOperator(char),
}

/// The kind of a button press, without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonKind {
    Digit,
    Decimal,
    Operator,
    Evaluate,
    Clear,
    SignFlip,
    Percent,
}

impl ButtonKind {
    /// Get the kind's name for display/logging.
    pub fn name(&self) -> &str {
        match self {
            Self::Digit => "digit",
            Self::Decimal => "decimal",
            Self::Operator => "operator",
            Self::Evaluate => "evaluate",
            Self::Clear => "clear",
            Self::SignFlip => "sign-flip",
            Self::Percent => "percent",
        }
    }
}

/// A single button press.
///
/// Digits carry their character and operators carry their symbol; the
/// remaining kinds are bare markers.
///
/// # Example
///
/// ```rust
/// use tenkey::core::{ButtonEvent, ButtonKind, Operator};
///
/// let event = ButtonEvent::Digit('7');
/// assert_eq!(event.kind(), ButtonKind::Digit);
///
/// // UI layers holding only untyped strings go through `from_raw`.
/// let parsed = ButtonEvent::from_raw("operator", Some('+')).unwrap();
/// assert_eq!(parsed, ButtonEvent::Operator(Operator::Add));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ButtonEvent {
    /// A digit key, `'0'` through `'9'`.
    Digit(char),
    /// The decimal-point key.
    Decimal,
    /// One of the four binary operator keys.
    Operator(Operator),
    /// The `=` key.
    Evaluate,
    /// The all-clear key.
    Clear,
    /// The `+/-` key.
    SignFlip,
    /// The `%` key.
    Percent,
}

impl ButtonEvent {
    /// Build an event from the untyped `(kind, value)` pair a UI layer
    /// typically holds (button dataset attributes, key names).
    ///
    /// Validation happens here so the engine only ever sees well-formed
    /// events: unknown kinds, missing values, non-digit digit values,
    /// and unknown operator symbols are all rejected.
    pub fn from_raw(kind: &str, value: Option<char>) -> Result<Self, EventError> {
        match kind {
            "digit" => {
                let digit = value.ok_or_else(|| EventError::MissingValue(kind.to_string()))?;
                if !digit.is_ascii_digit() {
                    return Err(EventError::InvalidDigit(digit));
                }
                Ok(Self::Digit(digit))
            }
            "operator" => {
                let symbol = value.ok_or_else(|| EventError::MissingValue(kind.to_string()))?;
                Operator::from_symbol(symbol)
                    .map(Self::Operator)
                    .ok_or(EventError::UnknownOperator(symbol))
            }
            "decimal" => Ok(Self::Decimal),
            "evaluate" => Ok(Self::Evaluate),
            "clear" => Ok(Self::Clear),
            "sign-flip" => Ok(Self::SignFlip),
            "percent" => Ok(Self::Percent),
            other => Err(EventError::InvalidEventKind(other.to_string())),
        }
    }

    /// The kind of this event, without its payload.
    pub fn kind(&self) -> ButtonKind {
        match self {
            Self::Digit(_) => ButtonKind::Digit,
            Self::Decimal => ButtonKind::Decimal,
            Self::Operator(_) => ButtonKind::Operator,
            Self::Evaluate => ButtonKind::Evaluate,
            Self::Clear => ButtonKind::Clear,
            Self::SignFlip => ButtonKind::SignFlip,
            Self::Percent => ButtonKind::Percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_parses_digits() {
        assert_eq!(
            ButtonEvent::from_raw("digit", Some('7')),
            Ok(ButtonEvent::Digit('7'))
        );
    }

    #[test]
    fn from_raw_parses_operators() {
        assert_eq!(
            ButtonEvent::from_raw("operator", Some('/')),
            Ok(ButtonEvent::Operator(Operator::Divide))
        );
    }

    #[test]
    fn from_raw_parses_bare_kinds() {
        assert_eq!(
            ButtonEvent::from_raw("decimal", None),
            Ok(ButtonEvent::Decimal)
        );
        assert_eq!(
            ButtonEvent::from_raw("evaluate", None),
            Ok(ButtonEvent::Evaluate)
        );
        assert_eq!(ButtonEvent::from_raw("clear", None), Ok(ButtonEvent::Clear));
        assert_eq!(
            ButtonEvent::from_raw("sign-flip", None),
            Ok(ButtonEvent::SignFlip)
        );
        assert_eq!(
            ButtonEvent::from_raw("percent", None),
            Ok(ButtonEvent::Percent)
        );
    }

    #[test]
    fn from_raw_rejects_unknown_kind() {
        assert_eq!(
            ButtonEvent::from_raw("memory-store", None),
            Err(EventError::InvalidEventKind("memory-store".to_string()))
        );
    }

    #[test]
    fn from_raw_rejects_missing_values() {
        assert_eq!(
            ButtonEvent::from_raw("digit", None),
            Err(EventError::MissingValue("digit".to_string()))
        );
        assert_eq!(
            ButtonEvent::from_raw("operator", None),
            Err(EventError::MissingValue("operator".to_string()))
        );
    }

    #[test]
    fn from_raw_rejects_non_digit_value() {
        assert_eq!(
            ButtonEvent::from_raw("digit", Some('x')),
            Err(EventError::InvalidDigit('x'))
        );
    }

    #[test]
    fn from_raw_rejects_unknown_operator_symbol() {
        assert_eq!(
            ButtonEvent::from_raw("operator", Some('^')),
            Err(EventError::UnknownOperator('^'))
        );
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(ButtonEvent::Digit('1').kind(), ButtonKind::Digit);
        assert_eq!(
            ButtonEvent::Operator(Operator::Add).kind(),
            ButtonKind::Operator
        );
        assert_eq!(ButtonEvent::Clear.kind(), ButtonKind::Clear);
    }

    #[test]
    fn kind_names_are_stable() {
        assert_eq!(ButtonKind::Digit.name(), "digit");
        assert_eq!(ButtonKind::SignFlip.name(), "sign-flip");
    }

    #[test]
    fn event_serializes_correctly() {
        let event = ButtonEvent::Operator(Operator::Subtract);
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: ButtonEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
