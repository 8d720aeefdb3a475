//! REST client for the hierarchy collections.
//!
//! Every collection is fetched whole (`GET /api/<kind>`) and filtered in
//! memory; the API has no server-side filtering to lean on.

use mantis_config::ApiConfig;
use mantis_core::draft::{DraftMode, EntityDraft};
use mantis_core::entities::EntityRecord;
use mantis_core::ids::EntityId;
use mantis_core::kind::EntityKind;
use serde::de::DeserializeOwned;

use crate::error::HierarchyError;
use crate::http::{check_response, decode_json};

/// HTTP client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Build a client from validated API settings.
    ///
    /// # Errors
    ///
    /// Returns [`HierarchyError::Validation`] if the settings are invalid or
    /// the underlying `reqwest::Client` cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self, HierarchyError> {
        config
            .validate()
            .map_err(|e| HierarchyError::Validation(e.to_string()))?;
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .build()
            .map_err(|e| HierarchyError::Validation(format!("cannot build HTTP client: {e}")))?;
        Ok(Self { http, config })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Fetch the full, unfiltered collection for `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`HierarchyError::Network`] if the request fails, the server
    /// answers non-2xx, or any row does not decode as `T`.
    pub async fn fetch_all<T: DeserializeOwned>(
        &self,
        kind: EntityKind,
    ) -> Result<Vec<T>, HierarchyError> {
        let endpoint = kind.endpoint();
        tracing::debug!(%kind, endpoint, "fetching collection");
        let resp = self
            .http
            .get(self.config.url(endpoint))
            .send()
            .await
            .map_err(|e| HierarchyError::transport(endpoint, &e))?;
        let resp = check_response(resp, endpoint).await?;
        decode_json(resp, endpoint).await
    }

    /// `POST` a new row. The server assigns the id.
    ///
    /// # Errors
    ///
    /// Returns [`HierarchyError::Validation`] if the draft is incomplete for
    /// `kind` (no request is sent), or [`HierarchyError::Network`] if the
    /// request fails.
    pub async fn create(
        &self,
        kind: EntityKind,
        draft: &EntityDraft,
    ) -> Result<EntityRecord, HierarchyError> {
        let body = draft.to_body(kind, DraftMode::Create)?;
        let endpoint = kind.endpoint();
        let resp = self
            .http
            .post(self.config.url(endpoint))
            .json(&body)
            .send()
            .await
            .map_err(|e| HierarchyError::transport(endpoint, &e))?;
        let resp = check_response(resp, endpoint).await?;
        let row: serde_json::Value = decode_json(resp, endpoint).await?;
        record_from_row(kind, row, endpoint)
    }

    /// `PUT` the fields present in `draft` onto row `id`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::create`]; a missing row comes back as a 404
    /// [`HierarchyError::Network`].
    pub async fn update(
        &self,
        kind: EntityKind,
        id: EntityId,
        draft: &EntityDraft,
    ) -> Result<EntityRecord, HierarchyError> {
        let body = draft.to_body(kind, DraftMode::Update)?;
        let endpoint = format!("{}/{id}", kind.endpoint());
        let resp = self
            .http
            .put(self.config.url(&endpoint))
            .json(&body)
            .send()
            .await
            .map_err(|e| HierarchyError::transport(&endpoint, &e))?;
        let resp = check_response(resp, &endpoint).await?;
        let row: serde_json::Value = decode_json(resp, &endpoint).await?;
        record_from_row(kind, row, &endpoint)
    }

    /// `DELETE` row `id`. The server cascades the delete to descendants.
    ///
    /// # Errors
    ///
    /// Returns [`HierarchyError::Network`] if the request fails or the row
    /// does not exist.
    pub async fn delete(&self, kind: EntityKind, id: EntityId) -> Result<(), HierarchyError> {
        let endpoint = format!("{}/{id}", kind.endpoint());
        let resp = self
            .http
            .delete(self.config.url(&endpoint))
            .send()
            .await
            .map_err(|e| HierarchyError::transport(&endpoint, &e))?;
        check_response(resp, &endpoint).await?;
        Ok(())
    }
}

/// A malformed row in a 2xx response is the server's fault, not the caller's.
fn record_from_row(
    kind: EntityKind,
    row: serde_json::Value,
    endpoint: &str,
) -> Result<EntityRecord, HierarchyError> {
    EntityRecord::from_json(kind, row).map_err(|e| HierarchyError::Network {
        endpoint: endpoint.to_string(),
        status: None,
        reason: e.to_string(),
    })
}
