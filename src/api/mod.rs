//! Read-only access to the external season API.
//!
//! `SeasonSource` is the seam between the cache/hub layer and the network;
//! the HTTP implementation lives in `http`, and tests swap in fixture
//! sources.

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{Driver, Race, SeasonOverview};

pub mod http;

#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP 404. Rendered as "not found", distinct from a network failure.
    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("API error {status} for {resource}")]
    Status { resource: String, status: u16 },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("bad request url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("bad response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// The four read operations the dashboard consumes. Never retried here;
/// failures surface to the caller as display states.
#[async_trait]
pub trait SeasonSource: Send + Sync {
    async fn drivers(&self, season: u32) -> ApiResult<Vec<Driver>>;
    async fn races(&self, season: u32) -> ApiResult<Vec<Race>>;
    async fn race(&self, id: &str, season: u32) -> ApiResult<Race>;
    async fn overview(&self, season: u32) -> ApiResult<SeasonOverview>;
}
