//! Fetch one random creature, merge its description, publish the result.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tracing::Instrument;
use uuid::Uuid;

use crate::catalog::{DescriptionSelector, EntityFetchClient};
use crate::config::ApiConfig;
use crate::fetch::random::RandomSource;
use crate::fetch::store::{FetchResult, ResultStore};

/// Catalog bounds and description language for the use case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSettings {
    /// Ids are drawn from `1..=catalog_size`.
    pub catalog_size: u32,
    pub language: String,
}

impl From<&ApiConfig> for FetchSettings {
    fn from(api: &ApiConfig) -> Self {
        Self {
            catalog_size: api.catalog_size,
            language: api.language.clone(),
        }
    }
}

/// Owns the "random creature" use case.
///
/// Constructed once per session and cloned into whoever triggers fetches.
/// Fetches are never cancelled or serialized against each other: when two
/// overlap, whichever finishes last owns the store.
#[derive(Clone)]
pub struct FetchOrchestrator {
    inner: Arc<OrchestratorInner>,
}

struct OrchestratorInner {
    client: Arc<dyn EntityFetchClient>,
    random: Arc<dyn RandomSource>,
    store: ResultStore,
    settings: FetchSettings,
    in_flight: AtomicUsize,
    idle: Notify,
}

/// Decrements the in-flight counter even if the fetch task unwinds.
struct InFlightGuard<'a>(&'a OrchestratorInner);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if self.0.in_flight.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.0.idle.notify_waiters();
        }
    }
}

impl FetchOrchestrator {
    pub fn new(
        client: Arc<dyn EntityFetchClient>,
        random: Arc<dyn RandomSource>,
        store: ResultStore,
        settings: FetchSettings,
    ) -> Self {
        Self {
            inner: Arc::new(OrchestratorInner {
                client,
                random,
                store,
                settings,
                in_flight: AtomicUsize::new(0),
                idle: Notify::new(),
            }),
        }
    }

    pub fn store(&self) -> &ResultStore {
        &self.inner.store
    }

    /// Number of spawned fetches that have not published yet.
    pub fn in_flight(&self) -> usize {
        self.inner.in_flight.load(Ordering::SeqCst)
    }

    /// Resolves once no fetch is in flight.
    pub async fn wait_idle(&self) {
        let notified = self.inner.idle.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.in_flight() == 0 {
            return;
        }
        notified.await;
    }

    /// Draw a random id and fetch it in the background.
    ///
    /// Publishes exactly once when done. Must be called inside a tokio
    /// runtime. The handle may be dropped; the fetch keeps running.
    pub fn fetch_random(&self) -> JoinHandle<()> {
        let id = self
            .inner
            .random
            .id_in_range(1, self.inner.settings.catalog_size.max(1));
        self.fetch_by_id(id)
    }

    /// Fetch a specific id in the background. Same publish rules as
    /// [`fetch_random`](Self::fetch_random).
    pub fn fetch_by_id(&self, id: u32) -> JoinHandle<()> {
        self.inner.in_flight.fetch_add(1, Ordering::SeqCst);
        let this = self.clone();
        let fetch_id = Uuid::new_v4();
        let span = tracing::info_span!("fetch", %fetch_id, id);

        tokio::spawn(
            async move {
                let _guard = InFlightGuard(&this.inner);
                let result = this.resolve(id).await;
                this.inner.store.publish(result);
            }
            .instrument(span),
        )
    }

    /// Run both lookups for `id` and merge them, without publishing.
    ///
    /// Every catalog error becomes [`FetchResult::NoResult`].
    pub async fn resolve(&self, id: u32) -> FetchResult {
        let client = &self.inner.client;

        let entity = match client.fetch_primary(id).await {
            Ok(entity) => entity,
            Err(err) => {
                tracing::warn!(error = %err, error_type = err.error_type(), "Primary lookup failed");
                return FetchResult::NoResult;
            }
        };

        let entries = match client.fetch_description_set(id).await {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(error = %err, error_type = err.error_type(), "Description lookup failed");
                return FetchResult::NoResult;
            }
        };

        let description = DescriptionSelector::select(&entries, &self.inner.settings.language);
        if description.trim().is_empty() {
            tracing::warn!(language = %self.inner.settings.language, "Selected description is blank");
            return FetchResult::NoResult;
        }

        tracing::info!(name = %entity.name, "Fetched creature");
        FetchResult::Found(entity.with_description(description))
    }
}
