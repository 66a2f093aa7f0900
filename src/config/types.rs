use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub location: LocationConfig,
}

/// Upstream catalog settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the catalog API (e.g., "https://pokeapi.co/api/v2").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path segment of the primary record endpoint.
    #[serde(default = "default_entity_path")]
    pub entity_path: String,
    /// Path segment of the localized description endpoint.
    #[serde(default = "default_description_path")]
    pub description_path: String,
    /// Highest valid id; random draws use `1..=catalog_size`.
    #[serde(default = "default_catalog_size")]
    pub catalog_size: u32,
    /// Language code used to pick a description (default: "es").
    #[serde(default = "default_language")]
    pub language: String,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Total request timeout. Unset means the transport default.
    #[serde(default)]
    pub request_timeout_seconds: Option<u32>,
}

/// Settings handed to the location provider and the movement gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Desired update interval in milliseconds (default: 10000).
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Fastest accepted update interval in milliseconds (default: 5000).
    #[serde(default = "default_fastest_interval_ms")]
    pub fastest_interval_ms: u64,
    #[serde(default)]
    pub priority: LocationPriority,
    /// Displacement needed before a new fetch fires (default: 10.0).
    #[serde(default = "default_min_displacement")]
    pub min_displacement_meters: f64,
}

/// Accuracy/power trade-off requested from the provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationPriority {
    #[default]
    HighAccuracy,
    Balanced,
    LowPower,
    Passive,
}

fn default_base_url() -> String {
    "https://pokeapi.co/api/v2".to_string()
}

fn default_entity_path() -> String {
    "pokemon".to_string()
}

fn default_description_path() -> String {
    "pokemon-species".to_string()
}

fn default_catalog_size() -> u32 {
    898
}

fn default_language() -> String {
    "es".to_string()
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_interval_ms() -> u64 {
    10_000
}

fn default_fastest_interval_ms() -> u64 {
    5_000
}

fn default_min_displacement() -> f64 {
    10.0
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            entity_path: default_entity_path(),
            description_path: default_description_path(),
            catalog_size: default_catalog_size(),
            language: default_language(),
            connect_timeout_seconds: default_connect_timeout(),
            request_timeout_seconds: None,
        }
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            fastest_interval_ms: default_fastest_interval_ms(),
            priority: LocationPriority::default(),
            min_displacement_meters: default_min_displacement(),
        }
    }
}

impl ApiConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_seconds))
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds
            .map(|secs| Duration::from_secs(u64::from(secs)))
    }
}

impl LocationConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn fastest_interval(&self) -> Duration {
        Duration::from_millis(self.fastest_interval_ms)
    }
}
