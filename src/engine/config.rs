//! Engine configuration.

use serde::{Deserialize, Serialize};

/// What a sign-flip press produces when nothing has been typed yet.
///
/// Observed calculator builds disagree on this point, so the behavior is
/// a configuration value rather than a constant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmptySignFlip {
    /// Flipping an empty display yields `"-0"` (the default).
    #[default]
    NegativeZero,
    /// Flipping an empty display yields `"0"`; only later presses
    /// toggle the sign.
    PlainZero,
}

/// Configuration for a [`CalculatorEngine`](crate::CalculatorEngine).
///
/// # Example
///
/// ```rust
/// use tenkey::engine::{EmptySignFlip, EngineConfig};
///
/// let config = EngineConfig {
///     empty_sign_flip: EmptySignFlip::PlainZero,
/// };
/// assert_ne!(config, EngineConfig::default());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Behavior of the sign-flip key on an empty display.
    pub empty_sign_flip: EmptySignFlip,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flips_to_negative_zero() {
        assert_eq!(
            EngineConfig::default().empty_sign_flip,
            EmptySignFlip::NegativeZero
        );
    }

    #[test]
    fn config_serializes_correctly() {
        let config = EngineConfig {
            empty_sign_flip: EmptySignFlip::PlainZero,
        };
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
