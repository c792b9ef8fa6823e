//! The calculator engine: a synchronous state machine over button events.

use crate::core::history::{AppliedOperation, OperationHistory};
use crate::core::ops::{percent, ArithmeticError, Operator};
use crate::core::ButtonEvent;
use crate::engine::config::{EmptySignFlip, EngineConfig};
use crate::engine::error::EngineError;
use crate::engine::state::{format_number, strip_trailing_decimal, toggle_sign, EngineState};
use chrono::Utc;
use tracing::{debug, trace};

/// Fixed non-numeric display token shown after an arithmetic fault.
///
/// The engine recovers from division by zero by showing this token and
/// resetting its operator bookkeeping; no error ever crosses the UI
/// boundary for arithmetic misuse. The next entry event (digit, decimal,
/// sign-flip, percent) starts fresh.
pub const ERROR_SENTINEL: &str = "Error";

/// Callback invoked with the new display text after every state-mutating
/// event. `None` means nothing is typed; rendering a default glyph for
/// it (usually `"0"`) is the UI's decision, not the engine's.
pub type DisplayCallback = Box<dyn Fn(Option<&str>) + Send + Sync>;

/// Event-driven engine behind a four-function calculator with a single
/// running display.
///
/// The engine consumes [`ButtonEvent`] values one at a time, fully
/// synchronously, and reports each display change through the registered
/// callback within the same call stack. Re-entrant callbacks (a callback
/// that calls back into [`handle`](Self::handle)) are not supported.
///
/// # Example
///
/// ```rust
/// use tenkey::{ButtonEvent, CalculatorEngine, Operator};
///
/// let mut engine = CalculatorEngine::new();
/// engine
///     .handle_all([
///         ButtonEvent::Digit('1'),
///         ButtonEvent::Operator(Operator::Add),
///         ButtonEvent::Digit('1'),
///         ButtonEvent::Evaluate,
///     ])
///     .unwrap();
///
/// assert_eq!(engine.current_display(), Some("2"));
/// ```
pub struct CalculatorEngine {
    state: EngineState,
    history: OperationHistory,
    config: EngineConfig,
    on_display: Option<DisplayCallback>,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Create an engine with the default configuration.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with an explicit configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            state: EngineState::default(),
            history: OperationHistory::new(),
            config,
            on_display: None,
        }
    }

    /// Register the display callback.
    ///
    /// Every state-mutating handler invokes it exactly once, after the
    /// display has been updated. Registering replaces any previous
    /// callback.
    pub fn register_display_callback<F>(&mut self, callback: F)
    where
        F: Fn(Option<&str>) + Send + Sync + 'static,
    {
        self.on_display = Some(Box::new(callback));
    }

    /// The text currently shown, if anything is typed (pure).
    pub fn current_display(&self) -> Option<&str> {
        self.state.display.as_deref()
    }

    /// Get the engine state (pure).
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Get the applied-operation history (pure).
    pub fn history(&self) -> &OperationHistory {
        &self.history
    }

    /// Get the configuration (pure).
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Dispatch a single button event.
    ///
    /// Runs to completion before returning; there is no suspension
    /// point. Errors signal caller bugs (a non-digit character in a
    /// hand-built event) or internal invariant violations, never
    /// ordinary arithmetic misuse.
    pub fn handle(&mut self, event: ButtonEvent) -> Result<(), EngineError> {
        trace!(kind = event.kind().name(), "handling button event");
        match event {
            ButtonEvent::Digit(digit) => self.on_digit(digit),
            ButtonEvent::Decimal => self.on_decimal(),
            ButtonEvent::Operator(operator) => self.on_operator(operator),
            ButtonEvent::Evaluate => self.on_evaluate(),
            ButtonEvent::Clear => self.on_clear(),
            ButtonEvent::SignFlip => self.on_sign_flip(),
            ButtonEvent::Percent => self.on_percent(),
        }
    }

    /// Dispatch a sequence of button events in order.
    pub fn handle_all<I>(&mut self, events: I) -> Result<(), EngineError>
    where
        I: IntoIterator<Item = ButtonEvent>,
    {
        for event in events {
            self.handle(event)?;
        }
        Ok(())
    }

    fn on_digit(&mut self, digit: char) -> Result<(), EngineError> {
        if !digit.is_ascii_digit() {
            return Err(EngineError::InvalidDigit(digit));
        }
        self.clear_error_sentinel();
        if self.state.reset_on_next_digit {
            self.state.display = None;
            self.state.reset_on_next_digit = false;
        }

        let was_negative_zero = self.state.display.as_deref() == Some("-0");

        // A pending operator means the shown text is the finished right
        // operand of the previous step: fold it into the running total
        // before starting the new entry. A bare "-0" is a sign-flip in
        // progress, not a finished operand.
        if self.state.pending_operator.is_some() && self.state.display.is_some() && !was_negative_zero
        {
            let operand = self.parse_current_display()?;
            let folded = match (self.state.accumulated_value, self.state.last_operator) {
                (Some(accumulated), Some(operator)) => {
                    match operator.apply(accumulated, operand) {
                        Ok(value) => value,
                        Err(ArithmeticError::DivisionByZero) => {
                            debug!(accumulated, operand, "division by zero while folding operand");
                            self.enter_error_state();
                            self.emit();
                            return Ok(());
                        }
                    }
                }
                _ => operand,
            };
            self.state.accumulated_value = Some(folded);
            self.state.display = None;
            self.state.last_operator = self.state.pending_operator.take();
        }

        if was_negative_zero {
            self.state.display = Some(format!("-{digit}"));
        } else {
            match self.state.display.as_mut() {
                None => self.state.display = Some(digit.to_string()),
                // Suppress a redundant leading zero.
                Some(display) if display == "0" && digit == '0' => {}
                Some(display) => display.push(digit),
            }
        }
        self.emit();
        Ok(())
    }

    fn on_decimal(&mut self) -> Result<(), EngineError> {
        self.clear_error_sentinel();
        let just_evaluated = self.state.reset_on_next_digit;
        let has_decimal_point = self
            .state
            .display
            .as_deref()
            .is_some_and(|display| display.contains('.'));

        if self.state.display.is_none() || just_evaluated {
            self.state.display = Some("0.".to_string());
            self.state.reset_on_next_digit = false;
            self.emit();
        } else if !has_decimal_point {
            if let Some(display) = self.state.display.as_mut() {
                display.push('.');
            }
            self.emit();
        }
        // A second decimal point on the same number is a no-op.
        Ok(())
    }

    fn on_operator(&mut self, operator: Operator) -> Result<(), EngineError> {
        trace!(symbol = %operator.symbol(), "operator selected");
        self.state.pending_operator = Some(operator);
        self.state.reset_on_next_digit = false;
        // Internal bookkeeping only: the display does not change and the
        // callback is not invoked for operator presses.
        Ok(())
    }

    fn on_evaluate(&mut self) -> Result<(), EngineError> {
        if self.state.pending_operator.is_none() && self.state.last_operator.is_none() {
            return Ok(());
        }
        let Some(display) = self.state.display.as_deref() else {
            return Ok(());
        };
        if display == ERROR_SENTINEL {
            return Ok(());
        }

        let shown = parse_display(strip_trailing_decimal(display))?;
        let (operator, left, right) = if self.state.reset_on_next_digit {
            // Consecutive evaluate: repeat the last applied operation
            // against the previous result.
            let Some(entry) = self.history.last() else {
                return Ok(());
            };
            (entry.operator, shown, entry.right)
        } else {
            let Some(left) = self.state.accumulated_value else {
                return Ok(());
            };
            let Some(operator) = self
                .state
                .pending_operator
                .or(self.state.last_operator)
            else {
                return Ok(());
            };
            (operator, left, shown)
        };

        match operator.apply(left, right) {
            Ok(result) => {
                debug!(symbol = %operator.symbol(), left, right, result, "applied operation");
                self.history = self.history.record(AppliedOperation {
                    operator,
                    left,
                    right,
                    result,
                    timestamp: Utc::now(),
                });
                self.state.display = Some(format_number(result));
                self.state.accumulated_value = None;
                self.state.pending_operator = None;
                self.state.last_operator = Some(operator);
                self.state.reset_on_next_digit = true;
            }
            Err(ArithmeticError::DivisionByZero) => {
                debug!(left, right, "division by zero, showing error sentinel");
                self.enter_error_state();
            }
        }
        self.emit();
        Ok(())
    }

    fn on_clear(&mut self) -> Result<(), EngineError> {
        // History deliberately survives: repeat-evaluate after a fresh
        // operator chain still consults prior entries.
        self.state.reset();
        self.emit();
        Ok(())
    }

    fn on_sign_flip(&mut self) -> Result<(), EngineError> {
        self.clear_error_sentinel();

        // With an operator pending, the shown text is the finished left
        // side: snapshot it so the flip starts the right operand.
        if self.state.pending_operator.is_some() && self.state.display.is_some() {
            let snapshot = self.parse_current_display()?;
            self.state.accumulated_value = Some(snapshot);
            self.state.display = Some(toggle_sign("0"));
        } else if self.state.display.is_none() {
            let initial = match self.config.empty_sign_flip {
                EmptySignFlip::NegativeZero => toggle_sign("0"),
                EmptySignFlip::PlainZero => "0".to_string(),
            };
            self.state.display = Some(initial);
        } else {
            let toggled = toggle_sign(self.state.display.as_deref().unwrap_or("0"));
            self.state.display = Some(toggled);
        }

        self.state.reset_on_next_digit = false;
        self.emit();
        Ok(())
    }

    fn on_percent(&mut self) -> Result<(), EngineError> {
        self.clear_error_sentinel();
        if self.state.display.is_none() {
            return Ok(());
        }
        let value = self.parse_current_display()?;
        self.state.display = Some(format_number(percent(value)));
        self.state.reset_on_next_digit = false;
        self.emit();
        Ok(())
    }

    /// An error sentinel on the display is consumed by the next entry
    /// event, leaving the engine as if nothing were typed.
    fn clear_error_sentinel(&mut self) {
        if self.state.display.as_deref() == Some(ERROR_SENTINEL) {
            self.state.display = None;
        }
    }

    fn enter_error_state(&mut self) {
        self.state.display = Some(ERROR_SENTINEL.to_string());
        self.state.accumulated_value = None;
        self.state.pending_operator = None;
        self.state.last_operator = None;
        self.state.reset_on_next_digit = true;
    }

    fn parse_current_display(&self) -> Result<f64, EngineError> {
        let text = self.state.display.as_deref().unwrap_or("0");
        parse_display(strip_trailing_decimal(text))
    }

    fn emit(&self) {
        if let Some(callback) = &self.on_display {
            callback(self.state.display.as_deref());
        }
    }
}

fn parse_display(text: &str) -> Result<f64, EngineError> {
    text.parse()
        .map_err(|_| EngineError::MalformedDisplay(text.to_string()))
}
