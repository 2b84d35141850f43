//! Live note list backed by a `tokio::sync::watch` channel.
//!
//! The store publishes a complete [`Snapshot`] after every accepted write.
//! Each [`NoteFeed`] sees the current snapshot first and then every later
//! one; a subscriber that falls behind skips straight to the newest
//! snapshot instead of queueing stale ones.

use crate::domain::Note;
use std::sync::Arc;
use tokio::sync::watch;

/// A complete, ordered view of the note set at one point in time.
#[derive(Debug, Clone)]
pub struct Snapshot {
    version: u64,
    notes: Arc<[Note]>,
}

impl Snapshot {
    fn new(version: u64, notes: Vec<Note>) -> Self {
        Self {
            version,
            notes: notes.into(),
        }
    }

    /// Monotonic counter, bumped once per published snapshot.
    ///
    /// The snapshot taken when the store opens has version 0.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// All notes in canonical order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

/// Single writer side of the feed. Owned by the store.
pub(crate) struct FeedPublisher {
    tx: watch::Sender<Snapshot>,
}

impl FeedPublisher {
    pub(crate) fn new(initial: Vec<Note>) -> Self {
        let (tx, _) = watch::channel(Snapshot::new(0, initial));
        Self { tx }
    }

    /// Replaces the current snapshot and wakes every subscriber.
    ///
    /// Works with zero subscribers; the value is kept for later ones.
    pub(crate) fn publish(&self, notes: Vec<Note>) -> u64 {
        let mut version = 0;
        self.tx.send_modify(|current| {
            version = current.version + 1;
            *current = Snapshot::new(version, notes);
        });
        version
    }

    pub(crate) fn current(&self) -> Snapshot {
        self.tx.borrow().clone()
    }

    pub(crate) fn subscribe(&self) -> NoteFeed {
        NoteFeed {
            rx: self.tx.subscribe(),
            primed: false,
        }
    }

    pub(crate) fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

/// A subscription to the live note list.
///
/// # Examples
///
/// ```no_run
/// # async fn demo() -> flownotes::store::StoreResult<()> {
/// use flownotes::domain::Note;
/// use flownotes::store::NoteStore;
///
/// let store = NoteStore::open_in_memory().await?;
/// let mut feed = store.observe();
///
/// let initial = feed.next().await.expect("store is open");
/// assert!(initial.is_empty());
///
/// store.upsert(Note::new("Hello", "")).await?;
/// let updated = feed.next().await.expect("store is open");
/// assert_eq!(updated.len(), 1);
/// # Ok(())
/// # }
/// ```
pub struct NoteFeed {
    rx: watch::Receiver<Snapshot>,
    primed: bool,
}

impl NoteFeed {
    /// Waits for the next snapshot.
    ///
    /// The first call returns the current snapshot immediately. Returns
    /// `None` once every handle to the store has been dropped.
    pub async fn next(&mut self) -> Option<Snapshot> {
        if !self.primed {
            self.primed = true;
            return Some(self.rx.borrow_and_update().clone());
        }
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;
    use tokio::time::timeout;

    fn notes(titles: &[&str]) -> Vec<Note> {
        titles.iter().map(|t| Note::new(*t, "")).collect()
    }

    fn titles(snapshot: &Snapshot) -> Vec<&str> {
        snapshot.notes().iter().map(|n| n.title()).collect()
    }

    #[tokio::test]
    async fn first_next_yields_current_snapshot() {
        let publisher = FeedPublisher::new(notes(&["a"]));
        let mut feed = publisher.subscribe();

        let first = feed.next().await.unwrap();
        assert_eq!(first.version(), 0);
        assert_eq!(titles(&first), vec!["a"]);
    }

    #[tokio::test]
    async fn publish_wakes_subscriber_with_full_list() {
        let publisher = FeedPublisher::new(Vec::new());
        let mut feed = publisher.subscribe();
        feed.next().await.unwrap();

        publisher.publish(notes(&["x", "y"]));

        let next = feed.next().await.unwrap();
        assert_eq!(next.version(), 1);
        assert_eq!(titles(&next), vec!["x", "y"]);
    }

    #[tokio::test]
    async fn every_subscriber_sees_each_publish() {
        let publisher = FeedPublisher::new(Vec::new());
        let mut a = publisher.subscribe();
        let mut b = publisher.subscribe();
        a.next().await.unwrap();
        b.next().await.unwrap();

        publisher.publish(notes(&["only"]));

        assert_eq!(a.next().await.unwrap().version(), 1);
        assert_eq!(b.next().await.unwrap().version(), 1);
    }

    #[tokio::test]
    async fn slow_subscriber_skips_to_latest() {
        let publisher = FeedPublisher::new(Vec::new());
        let mut feed = publisher.subscribe();
        feed.next().await.unwrap();

        publisher.publish(notes(&["one"]));
        publisher.publish(notes(&["one", "two"]));

        let latest = feed.next().await.unwrap();
        assert_eq!(latest.version(), 2);
        assert_eq!(titles(&latest), vec!["one", "two"]);
    }

    #[tokio::test]
    async fn next_waits_until_publish() {
        let publisher = FeedPublisher::new(Vec::new());
        let mut feed = publisher.subscribe();
        feed.next().await.unwrap();

        let pending = timeout(Duration::from_millis(20), feed.next()).await;
        assert!(pending.is_err(), "no publish means no snapshot");
    }

    #[tokio::test]
    async fn feed_ends_when_publisher_dropped() {
        let publisher = FeedPublisher::new(Vec::new());
        let mut feed = publisher.subscribe();
        feed.next().await.unwrap();

        drop(publisher);

        assert!(feed.next().await.is_none());
    }

    #[test]
    fn publish_without_subscribers_updates_current() {
        let publisher = FeedPublisher::new(Vec::new());
        assert_eq!(publisher.subscriber_count(), 0);

        let version = publisher.publish(notes(&["kept"]));

        assert_eq!(version, 1);
        assert_eq!(titles(&publisher.current()), vec!["kept"]);
    }

    #[test]
    fn snapshot_len_and_is_empty() {
        let snapshot = Snapshot::new(3, notes(&["a"]));
        assert_eq!(snapshot.version(), 3);
        assert_eq!(snapshot.len(), 1);
        assert!(!snapshot.is_empty());
    }
}
