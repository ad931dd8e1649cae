//! Arithmetic operators and their external symbols

use std::fmt;

/// One of the four binary operators the calculator knows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Map a key symbol to an operator.
    ///
    /// Accepts both the ASCII keys (`*`, `/`) and the display glyphs (`×`, `÷`).
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" | "×" | "x" => Some(Self::Multiply),
            "/" | "÷" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Glyph shown on the previous-operation line
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Apply the operator. Division by zero is the caller's concern.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_symbol() {
        assert_eq!(Operator::from_symbol("+"), Some(Operator::Add));
        assert_eq!(Operator::from_symbol("-"), Some(Operator::Subtract));
        assert_eq!(Operator::from_symbol("*"), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol("×"), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol("/"), Some(Operator::Divide));
        assert_eq!(Operator::from_symbol("÷"), Some(Operator::Divide));
        assert_eq!(Operator::from_symbol("%"), None);
    }

    #[test]
    fn test_display_symbol() {
        assert_eq!(format!("{}", Operator::Multiply), "×");
        assert_eq!(format!("{}", Operator::Divide), "÷");
    }

    #[test]
    fn test_apply() {
        assert_eq!(Operator::Add.apply(3.0, 4.0), 7.0);
        assert_eq!(Operator::Subtract.apply(3.0, 4.0), -1.0);
        assert_eq!(Operator::Multiply.apply(7.0, 2.0), 14.0);
        assert_eq!(Operator::Divide.apply(9.0, 3.0), 3.0);
    }
}
