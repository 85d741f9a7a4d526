// ── Ordered snapshot collection ──
//
// Single-writer storage that keeps insertion order and publishes every
// change as an immutable snapshot over a `watch` channel.

use std::sync::Arc;

use tokio::sync::watch;

use crate::stream::{Snapshot, SnapshotStream};

/// An ordered collection of records addressed by string id.
///
/// Mutations replace the whole snapshot; unchanged records are shared
/// between the old and new snapshot through their `Arc`s.
pub(crate) struct SnapshotCollection<T: Send + Sync + 'static> {
    snapshot: watch::Sender<Snapshot<T>>,
    /// Version counter, bumped on every effective mutation.
    version: watch::Sender<u64>,
}

impl<T: Send + Sync + 'static> SnapshotCollection<T> {
    pub(crate) fn new(items: impl IntoIterator<Item = T>) -> Self {
        let items: Vec<Arc<T>> = items.into_iter().map(Arc::new).collect();
        let (snapshot, _) = watch::channel(Arc::new(items));
        let (version, _) = watch::channel(0u64);
        Self { snapshot, version }
    }

    /// Current snapshot (cheap `Arc` clone).
    pub(crate) fn snapshot(&self) -> Snapshot<T> {
        self.snapshot.borrow().clone()
    }

    pub(crate) fn subscribe(&self) -> SnapshotStream<T> {
        SnapshotStream::new(self.snapshot.subscribe())
    }

    pub(crate) fn version(&self) -> u64 {
        *self.version.borrow()
    }

    pub(crate) fn len(&self) -> usize {
        self.snapshot.borrow().len()
    }

    /// Find the first record matching `pred`.
    pub(crate) fn find(&self, pred: impl Fn(&T) -> bool) -> Option<Arc<T>> {
        self.snapshot
            .borrow()
            .iter()
            .find(|item| pred(item))
            .map(Arc::clone)
    }

    /// Publish a new snapshot and bump the version.
    pub(crate) fn replace(&self, items: Vec<Arc<T>>) {
        // `send_replace` updates unconditionally, even with zero receivers.
        self.snapshot.send_replace(Arc::new(items));
        self.version.send_modify(|v| *v += 1);
    }

    /// Replace the first record matching `pred` with `f(record)`, keeping
    /// its position. Returns the new record, or `None` if nothing matched
    /// (in which case nothing is published).
    pub(crate) fn update(
        &self,
        pred: impl Fn(&T) -> bool,
        f: impl FnOnce(&T) -> T,
    ) -> Option<Arc<T>> {
        let current = self.snapshot();
        let index = current.iter().position(|item| pred(item))?;
        let updated = Arc::new(f(&current[index]));

        let mut next: Vec<Arc<T>> = current.iter().map(Arc::clone).collect();
        next[index] = Arc::clone(&updated);
        self.replace(next);
        Some(updated)
    }

    /// Append a record at the end.
    pub(crate) fn push(&self, item: T) -> Arc<T> {
        let item = Arc::new(item);
        let mut next: Vec<Arc<T>> = self.snapshot().iter().map(Arc::clone).collect();
        next.push(Arc::clone(&item));
        self.replace(next);
        item
    }
}
