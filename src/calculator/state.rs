//! Calculator state and the operations that mutate it
//!
//! The state is a pair of operand strings, an optional pending operator and a
//! reset-on-next-input flag. Operands stay as typed text until `compute` parses
//! them, so the display can show exactly what was entered (e.g. `"0."`).

use super::operator::Operator;

/// Results are rounded to this many decimal places
const ROUNDING_SCALE: f64 = 100_000_000.0;

/// Logical state derived from the field combination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    EnteringOperand,
    OperatorPending,
    ResultDisplayed,
    ErrorDisplayed,
}

/// What `compute` (or an operator that chained into it) did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Nothing changed
    Ignored,
    /// The operator was applied; the rounded result is now the current operand
    Computed(f64),
    /// Division by zero; operands and operator have been cleared
    DivideByZero,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculatorState {
    current_operand: String,
    previous_operand: String,
    operation: Option<Operator>,
    should_reset_screen: bool,
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_operand(&self) -> &str {
        &self.current_operand
    }

    pub fn previous_operand(&self) -> &str {
        &self.previous_operand
    }

    pub fn operation(&self) -> Option<Operator> {
        self.operation
    }

    pub fn should_reset_screen(&self) -> bool {
        self.should_reset_screen
    }

    pub fn phase(&self) -> Phase {
        if self.should_reset_screen {
            Phase::ResultDisplayed
        } else if self.operation.is_some() && self.current_operand.is_empty() {
            Phase::OperatorPending
        } else if !self.current_operand.is_empty() {
            Phase::EnteringOperand
        } else {
            Phase::Idle
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Drop the last typed character. A just-computed result cannot be edited.
    pub fn delete_last(&mut self) {
        if self.should_reset_screen {
            return;
        }
        self.current_operand.pop();
    }

    /// Append a digit or decimal point to the current operand
    pub fn append_symbol(&mut self, symbol: char) {
        if !symbol.is_ascii_digit() && symbol != '.' {
            return;
        }

        if self.should_reset_screen {
            self.current_operand.clear();
            self.should_reset_screen = false;
        }

        if symbol == '.' && self.current_operand.contains('.') {
            return;
        }

        // "0" followed by a digit replaces the zero; "0." is kept
        if self.current_operand == "0" && symbol != '.' {
            self.current_operand.clear();
        }

        self.current_operand.push(symbol);
    }

    /// Select the pending operator, computing any operator already pending first
    pub fn choose_operator(&mut self, op: Operator) -> Outcome {
        if self.current_operand.is_empty() {
            return Outcome::Ignored;
        }

        let mut outcome = Outcome::Ignored;
        if !self.previous_operand.is_empty() {
            outcome = self.compute();
            if outcome == Outcome::DivideByZero {
                return outcome;
            }
        }

        self.operation = Some(op);
        self.previous_operand = std::mem::take(&mut self.current_operand);
        self.should_reset_screen = false;
        outcome
    }

    /// Apply the pending operator to both operands
    pub fn compute(&mut self) -> Outcome {
        let (Some(prev), Some(current)) = (
            parse_operand(&self.previous_operand),
            parse_operand(&self.current_operand),
        ) else {
            return Outcome::Ignored;
        };

        let Some(op) = self.operation else {
            return Outcome::Ignored;
        };

        if op == Operator::Divide && current == 0.0 {
            self.current_operand.clear();
            self.previous_operand.clear();
            self.operation = None;
            return Outcome::DivideByZero;
        }

        let value = round_result(op.apply(prev, current));
        if !value.is_finite() {
            tracing::debug!(?op, prev, current, "result out of range, ignoring");
            return Outcome::Ignored;
        }

        self.current_operand = value.to_string();
        self.previous_operand.clear();
        self.operation = None;
        self.should_reset_screen = true;
        Outcome::Computed(value)
    }
}

fn parse_operand(operand: &str) -> Option<f64> {
    operand.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Round to 8 decimal places to hide binary floating-point noise
fn round_result(value: f64) -> f64 {
    let scaled = value * ROUNDING_SCALE;
    if !scaled.is_finite() {
        // too large to carry a fractional part anyway
        return value;
    }
    let rounded = scaled.round() / ROUNDING_SCALE;
    if rounded == 0.0 {
        // -0.0 would otherwise print as "-0"
        0.0
    } else {
        rounded
    }
}
