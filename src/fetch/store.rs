//! Single-slot result mailbox.
//!
//! Holds the latest [`FetchResult`]. Subscribers get the current value
//! first, then later ones. Intermediate values may be skipped if a
//! subscriber falls behind; the ones it sees are in publish order.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;

use crate::catalog::Entity;

/// Outcome of one fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    /// Fully merged entity with its description.
    Found(Entity),
    /// Some step failed. Never carries a partial entity.
    NoResult,
}

impl FetchResult {
    pub fn entity(&self) -> Option<&Entity> {
        match self {
            FetchResult::Found(entity) => Some(entity),
            FetchResult::NoResult => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, FetchResult::Found(_))
    }
}

/// Publisher side. Cheap to clone; all clones share one slot.
#[derive(Clone)]
pub struct ResultStore {
    sender: Arc<watch::Sender<Option<FetchResult>>>,
    published: Arc<AtomicU64>,
}

impl ResultStore {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self {
            sender: Arc::new(sender),
            published: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Replace the slot and wake subscribers.
    pub fn publish(&self, result: FetchResult) {
        self.published.fetch_add(1, Ordering::SeqCst);
        self.sender.send_replace(Some(result));
    }

    /// Latest published value, if any.
    pub fn current(&self) -> Option<FetchResult> {
        self.sender.borrow().clone()
    }

    /// Total number of publishes since creation.
    pub fn published_count(&self) -> u64 {
        self.published.load(Ordering::SeqCst)
    }

    pub fn subscribe(&self) -> ResultSubscription {
        let mut receiver = self.sender.subscribe();
        if receiver.borrow().is_some() {
            // Deliver the value already in the slot on the first `next()`.
            receiver.mark_changed();
        }
        ResultSubscription { receiver }
    }
}

impl Default for ResultStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Subscriber side.
pub struct ResultSubscription {
    receiver: watch::Receiver<Option<FetchResult>>,
}

impl ResultSubscription {
    /// Value in the slot right now, without waiting.
    pub fn current(&self) -> Option<FetchResult> {
        self.receiver.borrow().clone()
    }

    /// Next unseen value. Returns `None` once every store handle is dropped.
    pub async fn next(&mut self) -> Option<FetchResult> {
        loop {
            self.receiver.changed().await.ok()?;
            if let Some(result) = self.receiver.borrow_and_update().clone() {
                return Some(result);
            }
        }
    }
}
