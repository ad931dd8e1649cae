//! Title/body notes stored in a single JSON file

pub mod store;

pub use store::{Note, NoteError, NoteStore};
