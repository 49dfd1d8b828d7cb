//! Remote book-lookup provider abstraction.
//!
//! The provider answers a fetch-by-id with either a volume descriptor or a
//! definitive not-found; everything else (network failures, unexpected
//! provider statuses, undecodable payloads) is a [`LookupError`].

pub mod google;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

pub use google::GoogleVolumes;

/// Volume descriptor returned by the remote provider.
///
/// Transient; exists only to be mapped into a catalog record. A payload may
/// carry an id without any volume info; callers decide what that means.
#[derive(Debug, Clone, Deserialize)]
pub struct Volume {
    pub id: String,
    #[serde(rename = "volumeInfo")]
    pub volume_info: Option<VolumeInfo>,
}

/// Metadata section of a volume descriptor.
#[derive(Debug, Clone, Deserialize)]
pub struct VolumeInfo {
    pub title: String,
    pub authors: Option<Vec<String>>,
    #[serde(rename = "pageCount")]
    pub page_count: Option<u32>,
}

/// Definitive answer from the provider.
#[derive(Debug, Clone)]
pub enum LookupOutcome {
    Found(Volume),
    NotFound,
}

/// Failures on the way to or from the provider.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("lookup transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("lookup provider returned status {0}")]
    Status(u16),
    #[error("failed to decode lookup response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Read-only fetch-by-id against the remote provider.
#[async_trait]
pub trait BookLookup: Send + Sync {
    /// Fetch the volume descriptor for the given external id.
    /// Exactly one request per invocation; no retries.
    async fn volume_by_id(&self, volume_id: &str) -> Result<LookupOutcome, LookupError>;
}
