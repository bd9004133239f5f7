//! Background refresh driver.
//!
//! Each call to [`FeedHandle::refresh`] starts one fetch+parse task and
//! stamps it with a new generation. Only the newest generation may publish:
//! a newer refresh aborts the older task, and [`FeedHandle::cancel`] (or
//! dropping the handle) aborts whatever is in flight. Subscribers see a
//! sequence of immutable [`FeedSnapshot`]s through a `watch` channel.

use std::sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicU64, Ordering},
};

use tokio::{sync::watch, task::JoinHandle};

use crate::{
    core::log::feed_debug,
    news::{News, NewsBuilder},
};

/// The result of one completed refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSnapshot {
    /// Generation of the refresh that produced this snapshot; 0 before any refresh completed.
    pub generation: u64,
    /// Parsed items in feed order. Empty when the fetch or parse failed.
    pub news: Arc<[News]>,
}

impl Default for FeedSnapshot {
    fn default() -> Self {
        Self {
            generation: 0,
            news: Arc::from(Vec::new()),
        }
    }
}

impl FeedSnapshot {
    /// True if the refresh produced no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.news.is_empty()
    }
}

/// Owns the in-flight refresh and the published snapshot.
#[derive(Debug)]
pub struct FeedHandle {
    builder: NewsBuilder,
    latest: Arc<AtomicU64>,
    tx: Arc<watch::Sender<FeedSnapshot>>,
    inflight: Mutex<Option<JoinHandle<()>>>,
}

impl FeedHandle {
    /// Wraps a configured [`NewsBuilder`]. Nothing is fetched until
    /// [`refresh`](Self::refresh) is called.
    #[must_use]
    pub fn new(builder: NewsBuilder) -> Self {
        let (tx, _rx) = watch::channel(FeedSnapshot::default());
        Self {
            builder,
            latest: Arc::new(AtomicU64::new(0)),
            tx: Arc::new(tx),
            inflight: Mutex::new(None),
        }
    }

    /// Subscribe to published snapshots.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<FeedSnapshot> {
        self.tx.subscribe()
    }

    /// The most recently published snapshot.
    #[must_use]
    pub fn snapshot(&self) -> FeedSnapshot {
        self.tx.borrow().clone()
    }

    /// Starts a refresh and returns its generation. Any refresh still in
    /// flight is aborted and will never publish.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn refresh(&self) -> u64 {
        // Generation order and slot order must agree, so both happen under the slot lock.
        let mut slot = self.slot();
        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

        let builder = self.builder.clone();
        let latest = Arc::clone(&self.latest);
        let tx = Arc::clone(&self.tx);

        let join = tokio::spawn(async move {
            let news = builder.fetch_or_empty().await;
            publish(&tx, &latest, generation, news);
        });

        if let Some(prev) = slot.replace(join) {
            prev.abort();
        }
        drop(slot);
        feed_debug!(generation, "refresh started");
        generation
    }

    /// Aborts the in-flight refresh, if any. Its result is discarded even if
    /// the task had already finished fetching.
    pub fn cancel(&self) {
        let mut slot = self.slot();
        self.latest.fetch_add(1, Ordering::SeqCst);
        if let Some(join) = slot.take() {
            join.abort();
        }
    }

    /// True while a refresh task is still running.
    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.slot().as_ref().is_some_and(|j| !j.is_finished())
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<JoinHandle<()>>> {
        self.inflight.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for FeedHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Replaces the published snapshot unless `generation` has been superseded.
/// The check runs under the channel lock so it cannot interleave with another publish.
fn publish(tx: &watch::Sender<FeedSnapshot>, latest: &AtomicU64, generation: u64, news: Vec<News>) {
    let applied = tx.send_if_modified(|current| {
        if latest.load(Ordering::SeqCst) != generation || current.generation >= generation {
            return false;
        }
        *current = FeedSnapshot {
            generation,
            news: Arc::from(news),
        };
        true
    });
    if !applied {
        feed_debug!(generation, "discarding stale refresh result");
    }
}
