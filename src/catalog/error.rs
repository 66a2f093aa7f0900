//! Error taxonomy for catalog lookups.

use thiserror::Error;

/// Errors that can occur while talking to the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport failure (DNS, connect, timeout, reset)
    #[error("Network error requesting '{url}': {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream answered with a non-success status
    #[error("Upstream returned {status} for '{url}'")]
    Status { url: String, status: u16 },

    /// Body did not match the expected shape
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Id outside the catalog or unknown upstream
    #[error("Entity {id} not found in catalog")]
    NotFound { id: u32 },
}

impl CatalogError {
    /// Stable tag for structured logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            CatalogError::Network { .. } => "network_error",
            CatalogError::Status { .. } => "network_error",
            CatalogError::Decode { .. } => "decode_error",
            CatalogError::NotFound { .. } => "not_found",
        }
    }

    /// Whether the failure belongs to the network class.
    pub fn is_network(&self) -> bool {
        matches!(self, CatalogError::Network { .. } | CatalogError::Status { .. })
    }
}
