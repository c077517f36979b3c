use crate::domain::model::AvailabilityResult;
use crate::domain::ports::AvailabilityLookup;
use crate::utils::error::{Result, SiteError};
use async_trait::async_trait;
use reqwest::Client;

/// Lookup backed by a real availability service: GET {endpoint}?address=...
/// returning an AvailabilityResult JSON body. This is the adapter a deployed
/// site wires in instead of the demo mock.
pub struct HttpLookup {
    client: Client,
    endpoint: String,
}

impl HttpLookup {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl AvailabilityLookup for HttpLookup {
    async fn check(&self, address: &str) -> Result<AvailabilityResult> {
        tracing::debug!("Availability request to: {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("address", address)])
            .send()
            .await?;

        tracing::debug!("Availability response status: {}", response.status());
        if !response.status().is_success() {
            return Err(SiteError::LookupError {
                message: format!("availability service returned {}", response.status()),
            });
        }

        let result: AvailabilityResult = response.json().await?;
        Ok(result)
    }
}
