//! Display projection
//!
//! Turns a [`CalculatorState`] into the two text lines a frontend shows.

use super::state::CalculatorState;

const THOUSANDS_SEPARATOR: char = ',';

/// What the two display lines show after a refresh
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayFrame {
    /// Previous-operation line, e.g. `"1,200 ×"`
    pub previous: String,
    /// Current-operation line, or the error message
    pub current: String,
    /// Set while an error message is on screen
    pub is_error: bool,
}

impl DisplayFrame {
    /// Normal projection of a state
    pub fn from_state(state: &CalculatorState) -> Self {
        let current = format_for_display(state.current_operand());
        let current = if current.is_empty() {
            "0".to_string()
        } else {
            current
        };

        let previous = match state.operation() {
            Some(op) => format!("{} {}", format_for_display(state.previous_operand()), op),
            None => String::new(),
        };

        Self {
            previous,
            current,
            is_error: false,
        }
    }

    /// Frame showing an error message in place of the current operand
    pub fn error(message: &str) -> Self {
        Self {
            previous: String::new(),
            current: message.to_string(),
            is_error: true,
        }
    }
}

/// Format an operand for display.
///
/// The integer part gets thousands separators; the fractional part is kept
/// exactly as typed so trailing zeros and a bare `"5."` survive.
///
/// # Example
/// ```
/// use calcnote::calculator::format_for_display;
///
/// assert_eq!(format_for_display("1234567.890"), "1,234,567.890");
/// ```
pub fn format_for_display(operand: &str) -> String {
    let (integer, fraction) = match operand.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (operand, None),
    };

    let integer_display = group_integer(integer).unwrap_or_default();

    match fraction {
        Some(frac) => format!("{}.{}", integer_display, frac),
        None => integer_display,
    }
}

/// Group an optionally signed run of digits, or `None` if it is not one
fn group_integer(integer: &str) -> Option<String> {
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let digits = match digits.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    grouped.push_str(sign);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(c);
    }

    Some(grouped)
}
