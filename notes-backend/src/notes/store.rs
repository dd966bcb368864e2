//! NoteStore — in-memory note collection mirrored to a JSON file
//!
//! Holds the ordered collection behind a mutex. Every mutation rewrites the
//! store file while the lock is held, and only commits to memory once the
//! write succeeded.

use super::file_ops;
use notes_types::Note;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

pub struct NoteStore {
    path: PathBuf,
    notes: Mutex<Vec<Note>>,
}

impl NoteStore {
    /// Load the store from `path`. A missing file starts an empty collection;
    /// a malformed one is an error.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, String> {
        let path = path.into();
        let notes = file_ops::load_notes(&path)?;

        log::info!("[NOTES] Loaded {} notes from {}", notes.len(), path.display());

        Ok(Self {
            path,
            notes: Mutex::new(notes),
        })
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// All notes in insertion order
    pub fn list(&self) -> Vec<Note> {
        self.lock().clone()
    }

    /// Append a new note with a fresh id. Tags are trimmed; text is stored as given.
    pub fn create(
        &self,
        text: String,
        tags: Option<Vec<String>>,
        summary: Option<String>,
    ) -> Result<Note, String> {
        let note = Note {
            id: uuid::Uuid::new_v4().to_string(),
            text,
            summary: summary.unwrap_or_default(),
            tags: tags
                .unwrap_or_default()
                .iter()
                .map(|t| t.trim().to_string())
                .collect(),
        };

        let mut notes = self.lock();
        notes.push(note.clone());
        if let Err(e) = file_ops::save_notes(&self.path, &notes) {
            notes.pop();
            return Err(e);
        }

        log::debug!("[NOTES] Created note {}", note.id);
        Ok(note)
    }

    /// Remove the note with `id`. Returns whether a note was removed; the
    /// store file is rewritten either way.
    pub fn delete(&self, id: &str) -> Result<bool, String> {
        let mut notes = self.lock();

        let remaining: Vec<Note> = notes.iter().filter(|n| n.id != id).cloned().collect();
        let removed = remaining.len() != notes.len();

        file_ops::save_notes(&self.path, &remaining)?;
        *notes = remaining;

        if removed {
            log::debug!("[NOTES] Deleted note {}", id);
        } else {
            log::debug!("[NOTES] Delete of unknown note {} ignored", id);
        }
        Ok(removed)
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Note>> {
        self.notes.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
