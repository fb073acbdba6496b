//! All things related to the storage of notes

use core::fmt;

use chrono::DateTime;
use chrono::ParseError;
use chrono::Utc;

pub use memory::NoteStore;

use crate::notes::Note;

mod memory;

/// Notes every fresh storage starts with
const SEED_NOTES: [(u64, &str, &str, bool); 3] = [
    (1, "HTML is easy", "2020-01-10T17:30:31.098Z", true),
    (
        2,
        "Browser can execute only Javascript",
        "2020-01-10T18:39:34.091Z",
        false,
    ),
    (
        3,
        "GET and POST are the most important methods of HTTP protocol",
        "2020-01-10T19:20:14.298Z",
        true,
    ),
];

/// Setup the storage with the seed notes
///
/// # Errors
///
/// Will return `Err` when a seed date is not valid RFC 3339
pub fn setup() -> core::result::Result<NoteStore, ParseError> {
    let notes = SEED_NOTES
        .iter()
        .map(|&(id, content, date, important)| seed_note(id, content, date, important))
        .collect::<core::result::Result<Vec<Note>, ParseError>>()?;

    tracing::debug!("Seeded storage with {} notes", notes.len());

    Ok(NoteStore::with_notes(notes))
}

fn seed_note(
    id: u64,
    content: &str,
    date: &str,
    important: bool,
) -> core::result::Result<Note, ParseError> {
    Ok(Note {
        id,
        content: content.to_string(),
        important,
        date: DateTime::parse_from_rfc3339(date)?.with_timezone(&Utc),
    })
}

/// Storage errors
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// A note can not be created without content
    ContentMissing,
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::ContentMissing => write!(f, "content missing"),
        }
    }
}

/// Result type for all fallible storage interactions
pub type Result<T> = core::result::Result<T, Error>;

/// Values to create a Note
#[derive(Debug, Default)]
pub struct CreateNoteValues<'a> {
    /// Content of the note
    ///
    /// Required, an empty string counts as missing
    pub content: Option<&'a str>,

    /// Importance of the note, `false` when omitted
    pub important: Option<bool>,
}
