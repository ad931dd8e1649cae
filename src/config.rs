//! Paths and settings

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable overriding the notes file location
pub const NOTES_FILE_ENV: &str = "CALCNOTE_NOTES_FILE";

const APP_DIR: &str = "calcnote";
const NOTES_FILE_NAME: &str = "notes.json";

/// Get the default notes file
/// - Linux: ~/.local/share/calcnote/notes.json
/// - macOS: ~/Library/Application Support/calcnote/notes.json
/// - Windows: %APPDATA%/calcnote/notes.json
pub fn default_notes_file() -> Result<PathBuf> {
    let data = dirs::data_dir().context("Could not determine data directory")?;
    Ok(data.join(APP_DIR).join(NOTES_FILE_NAME))
}

/// Resolve the notes file: explicit path first, then the environment, then the default
pub fn notes_file(explicit: Option<PathBuf>) -> Result<PathBuf> {
    resolve_notes_file(explicit, std::env::var_os(NOTES_FILE_ENV))
}

/// Resolution with the environment value passed in. An empty value is ignored.
fn resolve_notes_file(explicit: Option<PathBuf>, env_value: Option<OsString>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }

    match env_value {
        Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        _ => default_notes_file(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_shape() {
        // data_dir may be unavailable in minimal environments
        if let Ok(path) = default_notes_file() {
            assert!(path.ends_with("calcnote/notes.json"));
        }
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = resolve_notes_file(
            Some(PathBuf::from("/tmp/my-notes.json")),
            Some(OsString::from("/tmp/env-notes.json")),
        )
        .unwrap();
        assert_eq!(path, PathBuf::from("/tmp/my-notes.json"));
    }

    #[test]
    fn test_env_override() {
        let path = resolve_notes_file(None, Some(OsString::from("/tmp/env-notes.json"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/env-notes.json"));
    }

    #[test]
    fn test_empty_env_falls_back() {
        let resolved = resolve_notes_file(None, Some(OsString::new()));
        let unset = resolve_notes_file(None, None);
        assert_eq!(resolved.ok(), unset.ok());
        if let Ok(path) = default_notes_file() {
            assert_eq!(resolve_notes_file(None, Some(OsString::new())).unwrap(), path);
        }
    }
}
