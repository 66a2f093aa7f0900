//! Shared test utilities and fakes.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use parking_lot::Mutex;
use pokewalk::catalog::{CatalogError, Entity, EntityFetchClient, LocalizedDescriptionEntry};
use pokewalk::config::ApiConfig;
use pokewalk::fetch::{FetchOrchestrator, FetchSettings, FixedRandom, ResultStore};
use pokewalk::location::{
    LocationError, LocationProvider, LocationRequest, MovementNotifier, Position, SubscriptionId,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

pub const PIKACHU_JSON: &str = include_str!("../fixtures/pokemon_25.json");
pub const PIKACHU_SPECIES_JSON: &str = include_str!("../fixtures/species_25.json");
pub const PIKACHU_ES: &str = "Cuando varios de estos PokÃ©mon se juntan...";

pub fn entity(id: u32, name: &str) -> Entity {
    Entity {
        id,
        name: name.to_string(),
        image_url: format!("https://img/{}.png", id),
        height: 4,
        weight: 60,
        description: String::new(),
    }
}

pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        ..ApiConfig::default()
    }
}

pub fn settings() -> FetchSettings {
    FetchSettings {
        catalog_size: 898,
        language: "es".to_string(),
    }
}

/// Orchestrator over `client` that always draws `id`.
pub fn orchestrator_with(client: Arc<dyn EntityFetchClient>, id: u32) -> FetchOrchestrator {
    FetchOrchestrator::new(
        client,
        Arc::new(FixedRandom::constant(id)),
        ResultStore::new(),
        settings(),
    )
}

/// How a fake lookup should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    Status(u16),
    NotFound,
    Decode,
}

impl Failure {
    fn into_error(self, id: u32) -> CatalogError {
        match self {
            Failure::Status(status) => CatalogError::Status {
                url: format!("fake://{}", id),
                status,
            },
            Failure::NotFound => CatalogError::NotFound { id },
            Failure::Decode => CatalogError::Decode {
                url: format!("fake://{}", id),
                source: serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Primary(u32),
    Descriptions(u32),
}

/// In-memory client with per-id canned answers and a call log.
#[derive(Default)]
pub struct FakeClient {
    entities: Mutex<HashMap<u32, Result<Entity, Failure>>>,
    descriptions: Mutex<HashMap<u32, Result<Vec<LocalizedDescriptionEntry>, Failure>>>,
    delays: Mutex<HashMap<u32, Duration>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entity(self, entity: Entity, entries: Vec<LocalizedDescriptionEntry>) -> Self {
        let id = entity.id;
        self.entities.lock().insert(id, Ok(entity));
        self.descriptions.lock().insert(id, Ok(entries));
        self
    }

    pub fn failing_primary(self, id: u32, failure: Failure) -> Self {
        self.entities.lock().insert(id, Err(failure));
        self
    }

    pub fn failing_descriptions(self, id: u32, failure: Failure) -> Self {
        self.descriptions.lock().insert(id, Err(failure));
        self
    }

    /// Delay the primary lookup for `id`.
    pub fn with_delay(self, id: u32, delay: Duration) -> Self {
        self.delays.lock().insert(id, delay);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl EntityFetchClient for FakeClient {
    async fn fetch_primary(&self, id: u32) -> Result<Entity, CatalogError> {
        self.calls.lock().push(Call::Primary(id));
        let delay = self.delays.lock().get(&id).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        let outcome = self.entities.lock().get(&id).cloned();
        match outcome {
            Some(Ok(entity)) => Ok(entity),
            Some(Err(failure)) => Err(failure.into_error(id)),
            None => Err(CatalogError::NotFound { id }),
        }
    }

    async fn fetch_description_set(
        &self,
        id: u32,
    ) -> Result<Vec<LocalizedDescriptionEntry>, CatalogError> {
        self.calls.lock().push(Call::Descriptions(id));
        let outcome = self.descriptions.lock().get(&id).cloned();
        match outcome {
            Some(Ok(entries)) => Ok(entries),
            Some(Err(failure)) => Err(failure.into_error(id)),
            None => Err(CatalogError::NotFound { id }),
        }
    }
}

/// Notifier that records every trigger.
#[derive(Default)]
pub struct RecordingNotifier {
    triggers: Mutex<Vec<Position>>,
}

impl RecordingNotifier {
    pub fn triggers(&self) -> Vec<Position> {
        self.triggers.lock().clone()
    }
}

impl MovementNotifier for RecordingNotifier {
    fn on_trigger(&self, position: &Position) {
        self.triggers.lock().push(*position);
    }
}

/// Provider driven by the test through `push`.
#[derive(Default)]
pub struct ManualProvider {
    sinks: Mutex<HashMap<SubscriptionId, mpsc::UnboundedSender<Position>>>,
    requests: Mutex<Vec<LocationRequest>>,
    removals: Mutex<usize>,
    fail_next: Mutex<bool>,
}

impl ManualProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `request_updates` fail.
    pub fn fail_next(&self) {
        *self.fail_next.lock() = true;
    }

    /// Send `position` to every live subscription.
    pub fn push(&self, position: Position) {
        for sink in self.sinks.lock().values() {
            let _ = sink.send(position);
        }
    }

    pub fn active_subscriptions(&self) -> usize {
        self.sinks.lock().len()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn last_request(&self) -> Option<LocationRequest> {
        self.requests.lock().last().copied()
    }

    pub fn removal_count(&self) -> usize {
        *self.removals.lock()
    }
}

impl LocationProvider for ManualProvider {
    fn request_updates(
        &self,
        request: &LocationRequest,
        sink: mpsc::UnboundedSender<Position>,
    ) -> Result<SubscriptionId, LocationError> {
        if std::mem::take(&mut *self.fail_next.lock()) {
            return Err(LocationError::Unavailable("fake outage".to_string()));
        }
        let id = SubscriptionId::new();
        self.requests.lock().push(*request);
        self.sinks.lock().insert(id, sink);
        Ok(id)
    }

    fn remove_updates(&self, id: SubscriptionId) {
        if self.sinks.lock().remove(&id).is_some() {
            *self.removals.lock() += 1;
        }
    }
}

/// Poll `check` until it holds or a second passes.
pub async fn eventually<F: Fn() -> bool>(check: F) -> bool {
    for _ in 0..100 {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    check()
}
