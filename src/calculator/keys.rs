//! Key identifiers to calculator commands

use super::dispatcher::Command;
use super::operator::Operator;

/// Named keys recognised as whole words
const NAMED_KEYS: &[&str] = &["enter", "backspace", "escape", "esc", "del"];

impl Command {
    /// Map a key identifier to a command.
    ///
    /// Single-character keys are matched exactly (apart from `c`/`C`); named
    /// keys like `Enter` ignore case.
    pub fn from_key(key: &str) -> Option<Self> {
        if let Some(op) = Operator::from_symbol(key) {
            return Some(Self::Operator(op));
        }

        let mut chars = key.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return match c {
                '0'..='9' | '.' => Some(Self::Append(c)),
                '=' => Some(Self::Compute),
                'c' | 'C' => Some(Self::Clear),
                _ => None,
            };
        }

        match key.to_ascii_lowercase().as_str() {
            "enter" => Some(Self::Compute),
            "backspace" | "del" => Some(Self::DeleteLast),
            "escape" | "esc" => Some(Self::Clear),
            _ => None,
        }
    }
}

/// Split an input line into key identifiers.
///
/// Words naming a key (`Enter`, `Backspace`, ...) are kept whole; any other
/// word is split into characters, so `"12+3="` becomes `1 2 + 3 =`.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut keys = Vec::new();
    for word in line.split_whitespace() {
        if NAMED_KEYS.contains(&word.to_ascii_lowercase().as_str()) {
            keys.push(word.to_string());
        } else {
            keys.extend(word.chars().map(String::from));
        }
    }
    keys
}

/// Tokenize a line and map every recognised key to a command
pub fn parse_line(line: &str) -> Vec<Command> {
    tokenize(line)
        .iter()
        .filter_map(|key| {
            let command = Command::from_key(key);
            if command.is_none() {
                tracing::debug!(key = %key, "ignoring unknown key");
            }
            command
        })
        .collect()
}
