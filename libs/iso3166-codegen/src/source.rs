//! HTTP client for the country-codes dataset

use crate::error::{Error, Result};
use reqwest::Client;
use std::time::Duration;

/// Published JSON export of the datahub country-codes dataset.
pub const DATASET_URL: &str = "https://datahub.io/core/country-codes/r/country-codes.json";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Client that downloads the raw country-codes dataset.
pub struct DatasetClient {
    client: Client,
    url: String,
}

impl DatasetClient {
    /// Create a client for the default dataset URL and timeout.
    pub fn new() -> Result<Self> {
        Self::with_url(DATASET_URL.to_string(), DEFAULT_TIMEOUT)
    }

    /// Create a client for a custom URL and timeout.
    pub fn with_url(url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(Error::Client)?;
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Download the dataset and return the response body.
    ///
    /// A single attempt is made. The timeout covers both the connection and
    /// reading the body.
    pub async fn fetch(&self) -> Result<Vec<u8>> {
        tracing::debug!(url = %self.url, "Requesting country dataset");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| Error::Network {
                url: self.url.clone(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(Error::Status {
                url: self.url.clone(),
                status: response.status(),
            });
        }

        let bytes = response.bytes().await.map_err(Error::Read)?;
        Ok(bytes.to_vec())
    }
}
