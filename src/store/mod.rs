//! Note persistence: SQLite repository, live note feed, async store handle

mod feed;
mod note_store;
mod repository;
mod schema;
mod sqlite;

pub use feed::{NoteFeed, Snapshot};
pub use note_store::{MIN_WATCH_INTERVAL, NoteStore, PendingWrite};
pub use repository::{FolderCount, NoteRepository, StoreError, StoreResult};
pub use schema::{SCHEMA_VERSION, create_schema, get_schema_version};
pub use sqlite::{SqliteNotes, Transaction};
