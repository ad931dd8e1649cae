//! CLI commands

pub mod calc;
pub mod notes;
