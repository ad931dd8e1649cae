//! calcnote library
//!
//! A key-driven calculator state machine and a JSON-backed note store.

pub mod calculator;
pub mod config;
pub mod notes;
