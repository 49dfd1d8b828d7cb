//! Google Books volumes API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use bookshelf_kernel::settings::LookupSettings;

use crate::{BookLookup, LookupError, LookupOutcome, Volume};

/// HTTP client for `GET {base_url}/volumes/{id}`.
pub struct GoogleVolumes {
    client: Client,
    base_url: String,
}

impl GoogleVolumes {
    pub fn new(settings: &LookupSettings) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(settings.timeout_ms))
            .build()?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn volume_url(&self, volume_id: &str) -> String {
        format!("{}/volumes/{}", self.base_url, volume_id)
    }
}

#[async_trait]
impl BookLookup for GoogleVolumes {
    async fn volume_by_id(&self, volume_id: &str) -> Result<LookupOutcome, LookupError> {
        let url = self.volume_url(volume_id);
        tracing::debug!(target: "bookshelf-lookup", %url, "fetching volume");

        let response = self.client.get(&url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(LookupOutcome::NotFound),
            status if !status.is_success() => Err(LookupError::Status(status.as_u16())),
            _ => {
                let body = response.text().await?;
                parse_volume_body(&body)
            }
        }
    }
}

/// Parse a 2xx response body. Empty and `null` payloads are degenerate
/// not-found answers, not transport errors.
fn parse_volume_body(body: &str) -> Result<LookupOutcome, LookupError> {
    if body.trim().is_empty() {
        return Ok(LookupOutcome::NotFound);
    }

    let volume: Option<Volume> = serde_json::from_str(body)?;
    Ok(match volume {
        Some(volume) => LookupOutcome::Found(volume),
        None => LookupOutcome::NotFound,
    })
}
