use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::catalog::error::CatalogError;
use crate::catalog::types::{Entity, EntityRecord, LocalizedDescriptionEntry, SpeciesRecord};
use crate::config::ApiConfig;

/// The two remote lookups behind one request/response contract.
///
/// Implementations must not retry: failures go straight back to the caller.
#[async_trait]
pub trait EntityFetchClient: Send + Sync {
    /// Primary record by id. The returned entity has an empty description.
    async fn fetch_primary(&self, id: u32) -> Result<Entity, CatalogError>;

    /// All localized description entries for the same id, in upstream order.
    async fn fetch_description_set(
        &self,
        id: u32,
    ) -> Result<Vec<LocalizedDescriptionEntry>, CatalogError>;
}

/// reqwest-backed catalog client.
pub struct HttpCatalogClient {
    client: Client,
    base_url: String,
    entity_path: String,
    description_path: String,
    catalog_size: u32,
}

impl HttpCatalogClient {
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().connect_timeout(config.connect_timeout());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            entity_path: config.entity_path.trim_matches('/').to_string(),
            description_path: config.description_path.trim_matches('/').to_string(),
            catalog_size: config.catalog_size,
        })
    }

    fn check_range(&self, id: u32) -> Result<(), CatalogError> {
        if id == 0 || id > self.catalog_size {
            return Err(CatalogError::NotFound { id });
        }
        Ok(())
    }

    fn endpoint(&self, path: &str, id: u32) -> String {
        format!("{}/{}/{}/", self.base_url, path, id)
    }

    async fn get_json<T: DeserializeOwned>(&self, id: u32, url: String) -> Result<T, CatalogError> {
        tracing::debug!(url = %url, "Catalog request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| CatalogError::Network {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound { id });
        }
        if !status.is_success() {
            return Err(CatalogError::Status {
                url,
                status: status.as_u16(),
            });
        }

        // Read the body first so transport and decode failures stay distinct.
        let body = response
            .bytes()
            .await
            .map_err(|source| CatalogError::Network {
                url: url.clone(),
                source,
            })?;

        serde_json::from_slice(&body).map_err(|source| CatalogError::Decode { url, source })
    }
}

#[async_trait]
impl EntityFetchClient for HttpCatalogClient {
    async fn fetch_primary(&self, id: u32) -> Result<Entity, CatalogError> {
        self.check_range(id)?;
        let url = self.endpoint(&self.entity_path, id);
        let record: EntityRecord = self.get_json(id, url).await?;
        Ok(Entity::from(record))
    }

    async fn fetch_description_set(
        &self,
        id: u32,
    ) -> Result<Vec<LocalizedDescriptionEntry>, CatalogError> {
        self.check_range(id)?;
        let url = self.endpoint(&self.description_path, id);
        let record: SpeciesRecord = self.get_json(id, url).await?;
        Ok(record.into_entries())
    }
}
