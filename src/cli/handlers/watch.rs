//! Watch command handler: re-render the note list on every change.

use anyhow::Result;
use std::time::Duration;

use super::list::print_grouped;
use crate::cli::WatchArgs;
use crate::cli::output::{OutputFormat, SnapshotListing};
use crate::store::{NoteStore, Snapshot};

pub async fn handle_watch(args: &WatchArgs, store: &NoteStore) -> Result<()> {
    let watcher = store.watch_external_changes(Duration::from_millis(args.interval_ms));
    let mut feed = store.observe();
    let mut seen = 0usize;

    while args.count.is_none_or(|limit| seen < limit) {
        let snapshot = tokio::select! {
            next = feed.next() => match next {
                Some(snapshot) => snapshot,
                None => break,
            },
            _ = tokio::signal::ctrl_c() => break,
        };
        seen += 1;
        print_snapshot(&snapshot, args.format)?;
    }

    watcher.abort();
    Ok(())
}

fn print_snapshot(snapshot: &Snapshot, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            println!("--- version {} ---", snapshot.version());
            let notes: Vec<_> = snapshot.notes().iter().collect();
            print_grouped(&notes);
        }
        OutputFormat::Json => {
            let listing = SnapshotListing {
                version: snapshot.version(),
                notes: snapshot.notes(),
            };
            println!("{}", serde_json::to_string(&listing)?);
        }
        OutputFormat::Ids => {
            let ids: Vec<String> = snapshot.notes().iter().map(|n| n.id().to_string()).collect();
            println!("{}: {}", snapshot.version(), ids.join(" "));
        }
    }
    Ok(())
}
