//! Key-driven arithmetic calculator
//!
//! - `operator`   : the four operators and their symbols
//! - `state`      : operand/operator state and its transitions
//! - `display`    : pure formatting and the two-line display frame
//! - `dispatcher` : command dispatch, refresh and the error auto-clear
//! - `keys`       : key identifiers to commands

pub mod dispatcher;
pub mod display;
pub mod keys;
pub mod operator;
pub mod state;

pub use dispatcher::{Command, Dispatcher, DEFAULT_ERROR_DELAY, DIVIDE_BY_ZERO_MESSAGE};
pub use display::{format_for_display, DisplayFrame};
pub use operator::Operator;
pub use state::{CalculatorState, Outcome, Phase};
