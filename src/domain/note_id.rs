//! Store-assigned integer note identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a stored note.
///
/// Ids are issued by the store on first insert and are strictly positive.
/// Any value `<= 0` is the "unassigned" sentinel: upserting a note that
/// carries it creates a new row, and looking it up always finds nothing.
///
/// # Examples
///
/// ```
/// use flownotes::domain::NoteId;
///
/// assert!(!NoteId::UNASSIGNED.is_assigned());
/// assert!(NoteId::new(7).is_assigned());
/// assert_eq!("7".parse::<NoteId>().unwrap(), NoteId::new(7));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(i64);

impl NoteId {
    /// Sentinel for a note that has not been stored yet.
    pub const UNASSIGNED: NoteId = NoteId(0);

    /// Wraps a raw identifier.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer value.
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Returns true if this id could have been issued by the store.
    pub const fn is_assigned(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId({})", self.0)
    }
}

impl From<i64> for NoteId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

/// Error returned when parsing an invalid note id.
#[derive(Debug, Clone)]
pub struct ParseNoteIdError {
    value: String,
}

impl fmt::Display for ParseNoteIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid note id '{}': expected an integer", self.value)
    }
}

impl std::error::Error for ParseNoteIdError {}

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(NoteId)
            .map_err(|_| ParseNoteIdError {
                value: s.to_string(),
            })
    }
}
