//! Note commands - add, remove, list, read and edit notes

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use owo_colors::OwoColorize;

use calcnote::notes::{Note, NoteError, NoteStore};

/// A note operation requested on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteCommand {
    Add { title: String, body: String },
    Remove { title: String },
    RemoveAll,
    List,
    Read { title: String },
    Edit { title: String, body: String },
}

/// Execute a note command and print its outcome.
///
/// Returns `false` when the title was unknown or already taken; I/O problems
/// are returned as errors.
pub fn execute(store: &NoteStore, command: &NoteCommand) -> Result<bool> {
    match run(store, command) {
        Ok(output) => {
            println!("{}", output);
            Ok(true)
        }
        Err(e) if e.is_lookup() => {
            println!("{}", e.to_string().yellow());
            Ok(false)
        }
        Err(e) => {
            Err(e).with_context(|| format!("Notes file: {}", store.path().display()))
        }
    }
}

/// Run a note command and return the text to print
pub fn run(store: &NoteStore, command: &NoteCommand) -> Result<String, NoteError> {
    match command {
        NoteCommand::Add { title, body } => {
            store.add(title, body)?;
            Ok("Note added successfully!".green().to_string())
        }
        NoteCommand::Remove { title } => {
            store.remove(title)?;
            Ok("Note removed successfully!".green().to_string())
        }
        NoteCommand::RemoveAll => {
            store.remove_all()?;
            Ok("All notes removed successfully!".green().to_string())
        }
        NoteCommand::List => Ok(format_list(&store.list()?)),
        NoteCommand::Read { title } => Ok(format_note(&store.read(title)?)),
        NoteCommand::Edit { title, body } => {
            store.edit(title, body)?;
            Ok("Note updated successfully!".green().to_string())
        }
    }
}

/// Format note titles as a numbered table
pub fn format_list(notes: &[Note]) -> String {
    if notes.is_empty() {
        return "No notes found!".to_string();
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![Cell::new("#"), Cell::new("Title")]);

    for (index, note) in notes.iter().enumerate() {
        table.add_row(vec![Cell::new(index + 1), Cell::new(&note.title)]);
    }

    format!("Your notes:\n{}\n\n{} note(s)", table, notes.len())
}

pub fn format_note(note: &Note) -> String {
    format!("{} {}\n{} {}", "Title:".bold(), note.title, "Body:".bold(), note.body)
}
