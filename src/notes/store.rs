//! JSON-file-backed note storage
//!
//! The whole file is read for every operation and rewritten on every change.
//! Notes are kept as a pretty-printed JSON array in insertion order.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// A single note, keyed by its title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Error)]
pub enum NoteError {
    #[error("Note title already exists!")]
    DuplicateTitle(String),

    #[error("Note not found!")]
    NotFound(String),

    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize notes: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl NoteError {
    /// Lookup failures are reported to the user; anything else is an I/O problem
    pub fn is_lookup(&self) -> bool {
        matches!(self, Self::DuplicateTitle(_) | Self::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, NoteError>;

pub struct NoteStore {
    path: PathBuf,
}

impl NoteStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all notes.
    ///
    /// A missing or unparseable file reads as an empty list.
    pub fn load(&self) -> Result<Vec<Note>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "notes file missing");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(NoteError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        match serde_json::from_str::<Vec<Note>>(&content) {
            Ok(notes) => {
                tracing::debug!(path = %self.path.display(), count = notes.len(), "loaded notes");
                Ok(notes)
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "notes file is not valid, treating as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    /// Replace the file contents with `notes`.
    ///
    /// Writes go to a temp file in the same directory which is then renamed
    /// over the target.
    pub fn save(&self, notes: &[Note]) -> Result<()> {
        let io_err = |source| NoteError::Io {
            path: self.path.clone(),
            source,
        };

        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(io_err)?;

        let content = serde_json::to_string_pretty(notes)?;
        let mut tmp = NamedTempFile::new_in(&dir).map_err(io_err)?;
        tmp.write_all(content.as_bytes()).map_err(io_err)?;
        tmp.persist(&self.path).map_err(|e| io_err(e.error))?;

        tracing::debug!(path = %self.path.display(), count = notes.len(), "saved notes");
        Ok(())
    }

    pub fn add(&self, title: &str, body: &str) -> Result<()> {
        let mut notes = self.load()?;
        if notes.iter().any(|n| n.title == title) {
            return Err(NoteError::DuplicateTitle(title.to_string()));
        }

        notes.push(Note {
            title: title.to_string(),
            body: body.to_string(),
        });
        self.save(&notes)
    }

    pub fn remove(&self, title: &str) -> Result<()> {
        let mut notes = self.load()?;
        let before = notes.len();
        notes.retain(|n| n.title != title);

        if notes.len() == before {
            return Err(NoteError::NotFound(title.to_string()));
        }
        self.save(&notes)
    }

    pub fn remove_all(&self) -> Result<()> {
        self.save(&[])
    }

    pub fn list(&self) -> Result<Vec<Note>> {
        self.load()
    }

    pub fn read(&self, title: &str) -> Result<Note> {
        self.load()?
            .into_iter()
            .find(|n| n.title == title)
            .ok_or_else(|| NoteError::NotFound(title.to_string()))
    }

    /// Replace the body of an existing note
    pub fn edit(&self, title: &str, body: &str) -> Result<()> {
        let mut notes = self.load()?;
        let note = notes
            .iter_mut()
            .find(|n| n.title == title)
            .ok_or_else(|| NoteError::NotFound(title.to_string()))?;

        note.body = body.to_string();
        self.save(&notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> NoteStore {
        NoteStore::open(dir.path().join("notes.json"))
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "not json").unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_add_and_read() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.add("A", "b").unwrap();

        let note = store.read("A").unwrap();
        assert_eq!(note.title, "A");
        assert_eq!(note.body, "b");
    }

    #[test]
    fn test_add_duplicate_title() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.add("A", "b").unwrap();

        let err = store.add("A", "other").unwrap_err();
        assert!(matches!(err, NoteError::DuplicateTitle(ref t) if t == "A"));
        assert!(err.is_lookup());
        assert_eq!(store.read("A").unwrap().body, "b");
    }

    #[test]
    fn test_edit() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.add("A", "b").unwrap();
        store.edit("A", "c").unwrap();
        assert_eq!(store.read("A").unwrap().body, "c");

        assert!(matches!(
            store.edit("missing", "x"),
            Err(NoteError::NotFound(_))
        ));
    }

    #[test]
    fn test_remove() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.add("A", "b").unwrap();
        store.add("B", "c").unwrap();
        store.remove("A").unwrap();

        assert!(matches!(store.read("A"), Err(NoteError::NotFound(_))));
        assert!(matches!(store.remove("A"), Err(NoteError::NotFound(_))));
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_remove_all() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.add("A", "b").unwrap();
        store.remove_all().unwrap();

        assert!(store.list().unwrap().is_empty());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "[]");
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        for title in ["zeta", "alpha", "mid"] {
            store.add(title, "x").unwrap();
        }

        let titles: Vec<_> = store.list().unwrap().into_iter().map(|n| n.title).collect();
        assert_eq!(titles, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_file_format() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.add("A", "b").unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "[\n  {\n    \"title\": \"A\",\n    \"body\": \"b\"\n  }\n]");
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let store = NoteStore::open(dir.path().join("nested").join("notes.json"));
        store.add("A", "b").unwrap();
        assert!(store.path().exists());
    }
}
