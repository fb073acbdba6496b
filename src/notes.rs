use chrono::DateTime;
use chrono::Utc;

/// A single note
///
/// Never changed after creation, only removed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Note {
    /// Unique among the notes currently in storage
    pub id: u64,
    pub content: String,
    pub important: bool,
    /// Set by the storage on creation
    pub date: DateTime<Utc>,
}
