//! Quit signal shared by the Ctrl-C listener and the walk command loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

#[derive(Clone, Default)]
pub struct ShutdownHandle {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    requested: AtomicBool,
    notify: Notify,
}

impl ShutdownHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_shutting_down(&self) -> bool {
        self.inner.requested.load(Ordering::SeqCst)
    }

    /// Request shutdown. Later calls are no-ops.
    pub fn signal(&self) {
        if !self.inner.requested.swap(true, Ordering::SeqCst) {
            tracing::info!("Shutdown requested");
            self.inner.notify.notify_waiters();
        }
    }

    pub async fn wait(&self) {
        let notified = self.inner.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_shutting_down() {
            return;
        }
        notified.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn clone_signal_wakes_waiter() {
        let handle = ShutdownHandle::new();
        let waiter = tokio::spawn({
            let handle = handle.clone();
            async move { handle.wait().await }
        });

        tokio::task::yield_now().await;
        handle.signal();

        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter should wake")
            .unwrap();
    }

    #[tokio::test]
    async fn wait_after_signal_is_immediate() {
        let handle = ShutdownHandle::new();
        assert!(!handle.is_shutting_down());
        handle.signal();
        handle.signal();
        assert!(handle.is_shutting_down());
        handle.wait().await;
    }
}
