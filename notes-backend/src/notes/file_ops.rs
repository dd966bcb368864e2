//! File operations for the notes store
//!
//! The whole collection lives in one JSON array. It is read once at startup
//! and rewritten in full after every mutation.

use notes_types::Note;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Load all notes from the store file, returning an empty collection if the file doesn't exist
pub fn load_notes(path: &Path) -> Result<Vec<Note>, String> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(format!("Failed to read {}: {}", path.display(), e)),
    };

    serde_json::from_str::<Vec<Note>>(&content)
        .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
}

/// Overwrite the store file with the full collection.
///
/// Writes to a sibling temp file first and renames it over the target, so a
/// crash mid-write leaves the previous contents intact.
pub fn save_notes(path: &Path, notes: &[Note]) -> Result<(), String> {
    let content = serde_json::to_string_pretty(notes)
        .map_err(|e| format!("Failed to serialize notes: {}", e))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
        }
    }

    let tmp = temp_path(path);
    write_file(&tmp, &content).map_err(|e| format!("Failed to write {}: {}", tmp.display(), e))?;
    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        format!("Failed to replace {}: {}", path.display(), e)
    })
}

fn write_file(path: &Path, content: &str) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()
}

/// `notes.json` -> `.notes.json.tmp` in the same directory
fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "notes.json".to_string());
    path.with_file_name(format!(".{}.tmp", name))
}
