use async_trait::async_trait;
use thiserror::Error;

use crate::domain::category::{Category, CategoryDraft, OperationReply};
use crate::domain::types::CategoryId;

pub mod category;
pub mod memory;
#[cfg(test)]
pub mod test;

/// Result alias for resource client calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failures that reject a resource client call outright.
///
/// These cover the transport tier only. A call that resolves with a reply
/// whose message misses the expected sentinel is a logical failure and is
/// reported through [`OperationReply`], not through this type.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a usable response (connect, DNS, TLS,
    /// interrupted body).
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-success status code.
    #[error("backend returned status {status}: {body}")]
    Status { status: u16, body: String },
    /// The response body was not the JSON shape the endpoint documents.
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Read operations of the category endpoint.
#[async_trait]
pub trait CategoryReader {
    /// Fetch the full category collection.
    async fn list_categories(&self) -> ApiResult<Vec<Category>>;
    /// Fetch categories whose name matches the given fragment.
    async fn search_categories(&self, name: &str) -> ApiResult<Vec<Category>>;
}

/// Write operations of the category endpoint.
#[async_trait]
pub trait CategoryWriter {
    /// Register a new category. The backend assigns the identity.
    async fn create_category(&self, draft: &CategoryDraft) -> ApiResult<OperationReply>;
    /// Update an existing category, sending the full entity.
    async fn update_category(&self, category: &Category) -> ApiResult<OperationReply>;
    /// Delete a category by its identifier.
    async fn delete_category(&self, id: CategoryId) -> ApiResult<OperationReply>;
}

/// Resource client backed by the remote REST endpoint.
///
/// The underlying `reqwest::Client` pools connections and is cheap to
/// clone, allowing the client to be passed around freely between screens.
///
/// No request timeout is configured; a call that never settles leaves its
/// screen affordance pending.
#[derive(Clone)]
pub struct RestRepository {
    client: reqwest::Client,
    base_url: String,
}

impl RestRepository {
    /// Create a client for the given endpoint base, for example
    /// `http://localhost:8090/url/categoria`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an already configured `reqwest::Client`.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// The endpoint base this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
