//! Router directory watcher
//!
//! notify callbacks run on their own thread; events are forwarded over a
//! tokio channel and collected into batches that end after a quiet period.

use anyhow::{Context, Result};
use notify::event::ModifyKind;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};
use typed_routes::{rescan_directory, RouteEvent, TypedRoutes};

/// What happened to a path within one batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Created,
    Modified,
    Removed,
}

/// Deduplicated changes collected during one debounce window
#[derive(Debug, Default)]
pub struct Batch {
    changes: BTreeMap<PathBuf, ChangeKind>,
}

impl Batch {
    /// Records a notify event; metadata-only and access events are ignored
    pub fn add_event(&mut self, event: &Event) {
        let kind = match event.kind {
            EventKind::Create(_) => ChangeKind::Created,
            EventKind::Remove(_) => ChangeKind::Removed,
            EventKind::Modify(ModifyKind::Metadata(_)) => return,
            EventKind::Modify(_) => ChangeKind::Modified,
            _ => return,
        };

        for path in &event.paths {
            self.add(path.clone(), kind);
        }
    }

    /// Merges a change into the batch:
    /// - Removed then Created/Modified → the later kind (file restored)
    /// - anything then Removed → Removed
    /// - otherwise the first kind wins
    fn add(&mut self, path: PathBuf, kind: ChangeKind) {
        match self.changes.entry(path) {
            Entry::Vacant(entry) => {
                entry.insert(kind);
            }
            Entry::Occupied(mut entry) => {
                let merged = match (*entry.get(), kind) {
                    (ChangeKind::Removed, next) => next,
                    (_, ChangeKind::Removed) => ChangeKind::Removed,
                    (first, _) => first,
                };
                entry.insert(merged);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Applies the batch to the registry
    ///
    /// Directory-level changes (a folder created, moved or deleted) fall
    /// back to a full rescan of `router_dir`. Returns whether the snapshot
    /// changed.
    pub fn apply(self, routes: &mut TypedRoutes, router_dir: &Path) -> typed_routes::Result<bool> {
        let before = routes.snapshot();
        let mut needs_rescan = false;

        for (path, kind) in self.changes {
            if path.is_dir() {
                needs_rescan = true;
                continue;
            }

            let Some(file_path) = path.to_str() else {
                warn!("Skipping non UTF-8 path: {:?}", path);
                continue;
            };

            // A vanished directory: recognized by the files registered below
            // it, or by an extension-less name when nothing was registered
            let exists = path.exists();
            if !exists && (routes.has_sources_under(file_path) || path.extension().is_none()) {
                needs_rescan = true;
                continue;
            }

            let event = route_event(file_path, kind, exists);
            debug!("{:?}", event);
            routes.apply(&event);
        }

        if needs_rescan {
            rescan_directory(routes, router_dir)?;
        }

        Ok(routes.snapshot() != before)
    }
}

/// Maps a batched change to a registry event
///
/// The filesystem has the final say: a path that no longer exists is
/// removed whatever notify reported, which also covers rename sources.
pub fn route_event(file_path: &str, kind: ChangeKind, exists: bool) -> RouteEvent {
    let file_path = file_path.to_string();
    match (kind, exists) {
        (_, false) => RouteEvent::Remove(file_path),
        (ChangeKind::Modified, true) => RouteEvent::Change(file_path),
        (ChangeKind::Created | ChangeKind::Removed, true) => RouteEvent::Add(file_path),
    }
}

/// Recursive watcher over one directory
pub struct RouteWatcher {
    rx: mpsc::Receiver<Event>,
    debounce: Duration,
    _watcher: RecommendedWatcher,
}

impl RouteWatcher {
    pub fn new(dir: &Path, debounce: Duration) -> Result<Self> {
        let (tx, rx) = mpsc::channel(256);

        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
            Ok(event) => {
                // Receiver dropped means the watch loop has ended
                let _ = tx.blocking_send(event);
            }
            Err(e) => error!("Watch error: {:?}", e),
        })
        .context("Failed to create file watcher")?;

        watcher
            .watch(dir, RecursiveMode::Recursive)
            .with_context(|| format!("Failed to watch {}", dir.display()))?;
        info!("Watching {:?}", dir);

        Ok(Self {
            rx,
            debounce,
            _watcher: watcher,
        })
    }

    /// Waits for the next burst of changes
    ///
    /// The batch closes once no event arrived for the debounce window.
    /// Returns `None` when the watcher has shut down.
    pub async fn next_batch(&mut self) -> Option<Batch> {
        let first = self.rx.recv().await?;

        let mut batch = Batch::default();
        batch.add_event(&first);

        while let Ok(Some(event)) = tokio::time::timeout(self.debounce, self.rx.recv()).await {
            batch.add_event(&event);
        }

        Some(batch)
    }
}
