//! Async, cloneable handle over a [`NoteRepository`] with a live note list.
//!
//! Storage calls run on tokio's blocking worker pool. The repository sits
//! behind a mutex, and the snapshot for a write is published while that
//! mutex is still held, so subscribers observe snapshots in the order the
//! table actually changed.

use crate::domain::listing::notes_in_folder;
use crate::domain::{Note, NoteId};
use crate::store::feed::FeedPublisher;
use crate::store::{
    FolderCount, NoteFeed, NoteRepository, Snapshot, SqliteNotes, StoreError, StoreResult,
};
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, info, warn};

struct Inner<R> {
    repo: Mutex<R>,
    feed: FeedPublisher,
    /// External change counter as of the last published snapshot.
    seen_change: Mutex<Option<i64>>,
}

/// Shortest period accepted by [`NoteStore::watch_external_changes`].
pub const MIN_WATCH_INTERVAL: Duration = Duration::from_millis(1);

/// Shared handle to the note store.
///
/// Cloning is cheap; every clone talks to the same table and feed. Pass a
/// clone to each component that needs the store.
///
/// Writes ([`upsert`](Self::upsert), [`delete`](Self::delete)) are handed
/// to the worker pool as soon as they are called and finish even if the
/// returned [`PendingWrite`] is dropped. Reads only start when awaited and
/// can be abandoned freely. Writes issued concurrently may apply in any
/// order; await a write before relying on its effect.
pub struct NoteStore<R = SqliteNotes> {
    inner: Arc<Inner<R>>,
}

impl<R> Clone for NoteStore<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl NoteStore<SqliteNotes> {
    /// Opens (or creates) the database file at `path`.
    pub async fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let repo = tokio::task::spawn_blocking(move || SqliteNotes::open(&path))
            .await
            .map_err(worker_error)??;
        Self::with_repository(repo).await
    }

    /// Opens a throwaway in-memory store.
    pub async fn open_in_memory() -> StoreResult<Self> {
        let repo = tokio::task::spawn_blocking(SqliteNotes::open_in_memory)
            .await
            .map_err(worker_error)??;
        Self::with_repository(repo).await
    }
}

/// Publishes a fresh snapshot if the external change counter moved since
/// the last snapshot.
fn refresh_if_changed<R: NoteRepository>(inner: &Inner<R>) -> StoreResult<()> {
    let repo = inner.repo.lock().map_err(|_| StoreError::Poisoned)?;
    let current = repo.external_change_counter()?;
    let mut seen = inner.seen_change.lock().map_err(|_| StoreError::Poisoned)?;
    if current.is_some() && *seen != current {
        let published = inner.feed.publish(repo.list_all()?);
        *seen = current;
        debug!(change_counter = ?current, published, "picked up external change");
    }
    Ok(())
}

impl<R> NoteStore<R>
where
    R: NoteRepository + Send + 'static,
{
    /// Wraps an already opened repository, loading the initial snapshot.
    pub async fn with_repository(repo: R) -> StoreResult<Self> {
        let (repo, notes, seen_change) = tokio::task::spawn_blocking(move || {
            let seen_change = repo.external_change_counter()?;
            let notes = repo.list_all()?;
            Ok::<_, StoreError>((repo, notes, seen_change))
        })
        .await
        .map_err(worker_error)??;

        info!(notes = notes.len(), "note store ready");
        Ok(Self {
            inner: Arc::new(Inner {
                repo: Mutex::new(repo),
                feed: FeedPublisher::new(notes),
                seen_change: Mutex::new(seen_change),
            }),
        })
    }

    /// Spawns a task that republishes the note list when another process
    /// commits to the same database file.
    ///
    /// Checks every `interval`, raised to [`MIN_WATCH_INTERVAL`] if shorter.
    /// Commits made after the store loaded its first snapshot are picked
    /// up, even those made before the watcher started. The task holds no
    /// strong reference to the store and exits once every handle is
    /// dropped, a check fails, or the repository cannot see outside writes.
    pub fn watch_external_changes(&self, interval: Duration) -> JoinHandle<()> {
        let weak = Arc::downgrade(&self.inner);
        let interval = interval.max(MIN_WATCH_INTERVAL);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                let Some(inner) = weak.upgrade() else {
                    break;
                };
                let tracked = inner
                    .seen_change
                    .lock()
                    .map(|seen| seen.is_some())
                    .unwrap_or(false);
                if !tracked {
                    debug!("repository does not report external changes");
                    break;
                }

                let checked = tokio::task::spawn_blocking(move || refresh_if_changed(&inner))
                    .await
                    .map_err(worker_error)
                    .and_then(|result| result);

                if let Err(err) = checked {
                    warn!(error = %err, "external change watcher stopped");
                    break;
                }
            }
        })
    }

    /// Inserts `note`, or replaces the stored note with the same id.
    ///
    /// Resolves to the id of the stored row. On success every subscriber
    /// receives a new snapshot; on failure nothing is published.
    pub fn upsert(&self, note: Note) -> PendingWrite<NoteId> {
        self.write(move |repo| repo.upsert(&note))
    }

    /// Removes the stored note with the same id as `note`.
    ///
    /// Resolves to `true` if a row was removed; an absent id is a no-op.
    pub fn delete(&self, note: &Note) -> PendingWrite<bool> {
        self.delete_by_id(note.id())
    }

    /// Removes the stored note with the given id.
    pub fn delete_by_id(&self, id: NoteId) -> PendingWrite<bool> {
        self.write(move |repo| repo.delete(id))
    }

    /// Looks up a note by id. The unassigned sentinel is never found.
    pub async fn get(&self, id: NoteId) -> StoreResult<Option<Note>> {
        if !id.is_assigned() {
            return Ok(None);
        }
        self.read(move |repo| repo.get(id)).await
    }

    /// Lists distinct folder values with their note counts.
    pub async fn folders(&self) -> StoreResult<Vec<FolderCount>> {
        self.read(|repo| repo.folders()).await
    }

    /// Returns the number of stored notes.
    pub async fn count(&self) -> StoreResult<usize> {
        self.read(|repo| repo.count()).await
    }

    /// Subscribes to the live note list.
    pub fn observe(&self) -> NoteFeed {
        self.inner.feed.subscribe()
    }

    /// Returns the latest published snapshot.
    pub fn snapshot(&self) -> Snapshot {
        self.inner.feed.current()
    }

    /// Deletes every note whose folder equals `folder` exactly.
    ///
    /// Reads the current snapshot and issues one delete per matching note.
    /// This is not atomic: a failed deletion does not undo earlier ones, and
    /// a concurrent write can race with the batch. Resolves to the deleted
    /// ids, or `StoreError::PartialBulkFailure` naming what was and was not
    /// deleted.
    pub async fn delete_folder(&self, folder: &str) -> StoreResult<Vec<NoteId>> {
        let snapshot = self.snapshot();
        let targets: Vec<NoteId> = notes_in_folder(snapshot.notes(), folder)
            .into_iter()
            .map(|n| n.id())
            .collect();

        let mut deleted = Vec::with_capacity(targets.len());
        let mut failed = Vec::new();
        for id in targets {
            match self.delete_by_id(id).await {
                Ok(_) => deleted.push(id),
                Err(err) => {
                    warn!(%id, folder, error = %err, "folder delete: note failed");
                    failed.push(id);
                }
            }
        }

        if failed.is_empty() {
            debug!(folder, deleted = deleted.len(), "deleted folder");
            Ok(deleted)
        } else {
            Err(StoreError::PartialBulkFailure {
                folder: folder.to_string(),
                deleted,
                failed,
            })
        }
    }

    fn write<T, F>(&self, op: F) -> PendingWrite<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut R) -> StoreResult<T> + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        let handle = tokio::task::spawn_blocking(move || {
            let mut repo = inner.repo.lock().map_err(|_| StoreError::Poisoned)?;
            let value = op(&mut *repo)?;
            // The write is committed; a failed re-list only leaves the feed stale
            match repo.list_all() {
                Ok(notes) => {
                    let version = inner.feed.publish(notes);
                    debug!(
                        version,
                        observers = inner.feed.subscriber_count(),
                        "published snapshot"
                    );
                }
                Err(err) => warn!(error = %err, "write applied but note list could not be re-read"),
            }
            Ok(value)
        });
        PendingWrite { handle }
    }

    async fn read<T, F>(&self, op: F) -> StoreResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&R) -> StoreResult<T> + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || {
            let repo = inner.repo.lock().map_err(|_| StoreError::Poisoned)?;
            op(&*repo)
        })
        .await
        .map_err(worker_error)?
    }
}

/// A write already running on the worker pool.
///
/// Await it for the result. Dropping it does not cancel the write.
pub struct PendingWrite<T> {
    handle: JoinHandle<StoreResult<T>>,
}

impl<T> Future for PendingWrite<T> {
    type Output = StoreResult<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.handle)
            .poll(cx)
            .map(|joined| joined.map_err(worker_error).and_then(|result| result))
    }
}

fn worker_error(err: JoinError) -> StoreError {
    StoreError::Worker(err.to_string())
}
