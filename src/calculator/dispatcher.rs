//! Command dispatcher
//!
//! Every command is applied to the state and followed by a display refresh,
//! with one exception: a `Compute` that does nothing while an error message is
//! on screen leaves the error visible. Divide-by-zero puts up an error banner
//! that clears itself once its deadline passes.
//!
//! The dispatcher never reads the clock. Callers pass `now`, and the event loop
//! uses [`Dispatcher::deadline`] to know when to call [`Dispatcher::tick`].

use std::time::{Duration, Instant};

use super::display::DisplayFrame;
use super::operator::Operator;
use super::state::{CalculatorState, Outcome, Phase};

pub const DIVIDE_BY_ZERO_MESSAGE: &str = "Error: Cannot divide by zero";

/// Default time an error message stays on screen
pub const DEFAULT_ERROR_DELAY: Duration = Duration::from_millis(2000);

/// A user action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Append(char),
    Operator(Operator),
    Compute,
    DeleteLast,
    Clear,
}

#[derive(Debug, Clone)]
struct ErrorBanner {
    message: &'static str,
    clear_at: Instant,
}

#[derive(Debug)]
pub struct Dispatcher {
    state: CalculatorState,
    error: Option<ErrorBanner>,
    error_delay: Duration,
    frame: DisplayFrame,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(DEFAULT_ERROR_DELAY)
    }
}

impl Dispatcher {
    pub fn new(error_delay: Duration) -> Self {
        let state = CalculatorState::new();
        let frame = DisplayFrame::from_state(&state);
        Self {
            state,
            error: None,
            error_delay,
            frame,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// The frame currently on screen
    pub fn frame(&self) -> &DisplayFrame {
        &self.frame
    }

    /// When the current error message should be cleared, if one is showing
    pub fn deadline(&self) -> Option<Instant> {
        self.error.as_ref().map(|e| e.clear_at)
    }

    pub fn phase(&self) -> Phase {
        if self.error.is_some() {
            Phase::ErrorDisplayed
        } else {
            self.state.phase()
        }
    }

    /// Apply a command and return the frame to show
    pub fn dispatch(&mut self, command: Command, now: Instant) -> &DisplayFrame {
        tracing::debug!(?command, "dispatch");

        let outcome = match command {
            Command::Append(symbol) => {
                self.state.append_symbol(symbol);
                Outcome::Ignored
            }
            Command::Operator(op) => self.state.choose_operator(op),
            Command::Compute => self.state.compute(),
            Command::DeleteLast => {
                self.state.delete_last();
                Outcome::Ignored
            }
            Command::Clear => {
                self.state.clear();
                Outcome::Ignored
            }
        };

        match outcome {
            Outcome::DivideByZero => self.raise_error(DIVIDE_BY_ZERO_MESSAGE, now),
            Outcome::Ignored if command == Command::Compute && self.error.is_some() => {
                // a no-op compute leaves the error on screen
            }
            Outcome::Computed(value) => {
                tracing::debug!(value, "computed");
                self.refresh();
            }
            Outcome::Ignored => self.refresh(),
        }

        &self.frame
    }

    /// Clear the error message if its deadline has passed.
    ///
    /// Returns the refreshed frame when something changed.
    pub fn tick(&mut self, now: Instant) -> Option<&DisplayFrame> {
        let clear_at = self.deadline()?;
        if now < clear_at {
            return None;
        }
        tracing::debug!("error message expired");
        self.refresh();
        Some(&self.frame)
    }

    fn raise_error(&mut self, message: &'static str, now: Instant) {
        // a newer error replaces any pending deadline
        let clear_at = now + self.error_delay;
        tracing::debug!(message, ?clear_at, "error raised");
        self.error = Some(ErrorBanner { message, clear_at });
        self.frame = DisplayFrame::error(message);
    }

    fn refresh(&mut self) {
        self.error = None;
        self.frame = DisplayFrame::from_state(&self.state);
    }
}
