//! Memory storage
//!
//! Will be destroyed on system shutdown

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use crate::notes::Note;

use super::CreateNoteValues;
use super::Error;
use super::Result;

/// An in-memory storage of notes
///
/// Cheap to clone, all clones share the same notes. Every operation holds the
/// lock for its whole duration, so ids stay unique with parallel requests.
#[derive(Clone, Debug, Default)]
pub struct NoteStore {
    /// All notes in storage, in order of creation
    notes: Arc<Mutex<Vec<Note>>>,
}

impl NoteStore {
    /// Create a new empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage holding the given notes
    ///
    /// The ids of `notes` must be distinct
    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            notes: Arc::new(Mutex::new(notes)),
        }
    }

    /// Find all notes
    pub async fn find_all_notes(&self) -> Vec<Note> {
        self.notes.lock().await.clone()
    }

    /// Find a single note by its ID
    pub async fn find_single_note_by_id(&self, id: u64) -> Option<Note> {
        self.notes
            .lock()
            .await
            .iter()
            .find(|note| note.id == id)
            .cloned()
    }

    /// Create a note
    ///
    /// The new ID is one more than the highest ID currently stored, so the ID
    /// of a deleted note can come back.
    ///
    /// # Errors
    ///
    /// Will return `Err` when the content is missing or empty, nothing is
    /// stored in that case
    pub async fn create_note(&self, values: &CreateNoteValues<'_>) -> Result<Note> {
        let content = values
            .content
            .filter(|content| !content.is_empty())
            .ok_or(Error::ContentMissing)?;

        let mut notes = self.notes.lock().await;

        let note = Note {
            id: next_id(&notes),
            content: content.to_string(),
            important: values.important.unwrap_or(false),
            date: Utc::now(),
        };

        notes.push(note.clone());

        Ok(note)
    }

    /// Delete a note by its ID
    ///
    /// Deleting an unknown ID is fine
    pub async fn delete_note_by_id(&self, id: u64) {
        self.notes.lock().await.retain(|note| note.id != id);
    }
}

fn next_id(notes: &[Note]) -> u64 {
    notes.iter().map(|note| note.id).max().unwrap_or(0) + 1
}
