//! Notes API endpoints

use axum::Extension;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::notes::Note;
use crate::storage::CreateNoteValues;
use crate::storage::NoteStore;

use super::Error;
use super::Form;
use super::PathParameters;
use super::Success;
use super::parse_note_id;

/// Note response going to the user
#[derive(Debug, Serialize)]
pub struct NoteResponse {
    pub id: u64,
    pub content: String,
    pub date: DateTime<Utc>,
    pub important: bool,
}

impl NoteResponse {
    fn from_note(note: Note) -> Self {
        Self {
            id: note.id,
            content: note.content,
            date: note.date,
            important: note.important,
        }
    }

    fn from_note_multiple(notes: Vec<Note>) -> Vec<Self> {
        notes.into_iter().map(Self::from_note).collect::<Vec<Self>>()
    }
}

/// List all notes
///
/// Request:
/// ```sh
/// curl -v http://localhost:3001/api/notes
/// ```
///
/// Response:
/// ```json
/// [ { "id": 1, "content": "HTML is easy", "date": "2020-01-10T17:30:31.098Z", "important": true } ]
/// ```
pub async fn list(Extension(store): Extension<NoteStore>) -> Success<Vec<NoteResponse>> {
    let notes = store.find_all_notes().await;

    Success::ok(NoteResponse::from_note_multiple(notes))
}

/// Get a single note
///
/// Responds with an empty `404 Not Found` when there is no such note
///
/// Request:
/// ```sh
/// curl -v http://localhost:3001/api/notes/1
/// ```
pub async fn single(
    Extension(store): Extension<NoteStore>,
    PathParameters(note_id): PathParameters<String>,
) -> Result<Success<NoteResponse>, Error> {
    let note = match parse_note_id(&note_id) {
        Some(note_id) => store.find_single_note_by_id(note_id).await,
        None => None,
    };

    note.map(|note| Success::ok(NoteResponse::from_note(note)))
        .ok_or_else(Error::not_found_without_body)
}

#[derive(Debug, Deserialize)]
pub struct CreateNoteForm {
    content: Option<String>,
    important: Option<bool>,
}

/// Create a note
///
/// Request:
/// ```sh
/// curl -v -H 'Content-Type: application/json' \
///     -d '{ "content": "Remember the milk", "important": true }' \
///     http://localhost:3001/api/notes
/// ```
///
/// Response:
/// ```json
/// { "id": 4, "content": "Remember the milk", "date": "...", "important": true }
/// ```
pub async fn create(
    Extension(store): Extension<NoteStore>,
    Form(form): Form<CreateNoteForm>,
) -> Result<Success<NoteResponse>, Error> {
    let values = CreateNoteValues {
        content: form.content.as_deref(),
        important: form.important,
    };

    let note = store
        .create_note(&values)
        .await
        .map_err(Error::bad_request)?;

    tracing::debug!("Created note {}", note.id);

    Ok(Success::ok(NoteResponse::from_note(note)))
}

/// Delete a note
///
/// Always `204 No Content`, also when there is no such note
pub async fn delete(
    Extension(store): Extension<NoteStore>,
    PathParameters(note_id): PathParameters<String>,
) -> Success<()> {
    if let Some(note_id) = parse_note_id(&note_id) {
        store.delete_note_by_id(note_id).await;
    }

    Success::no_content()
}
