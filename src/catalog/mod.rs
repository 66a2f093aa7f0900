//! Upstream catalog access.
//!
//! Two lookups per creature: the primary record and its localized
//! description set. `EntityFetchClient` is the seam; `HttpCatalogClient`
//! talks to the real API.

mod client;
mod description;
mod error;
mod types;

pub use client::{EntityFetchClient, HttpCatalogClient};
pub use description::{DescriptionError, DescriptionSelector, FALLBACK_DESCRIPTION};
pub use error::CatalogError;
pub use types::{Entity, LocalizedDescriptionEntry};
