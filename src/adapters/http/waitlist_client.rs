use async_trait::async_trait;
use reqwest::{Client, header};
use serde::Deserialize;
use tracing::warn;
use url::Url;

use crate::{
    app_error::{FetchError, FetchResult},
    domain::entities::waitlist_entry::WaitlistEntry,
    use_cases::waitlist::WaitlistSource,
};

/// Reads signups from the waitlist listing endpoint.
#[derive(Clone)]
pub struct HttpWaitlistSource {
    client: Client,
    endpoint: Url,
}

impl HttpWaitlistSource {
    pub fn new(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[derive(Deserialize)]
struct WaitlistResponse {
    #[serde(default)]
    data: Option<Vec<WaitlistEntry>>,
}

#[async_trait]
impl WaitlistSource for HttpWaitlistSource {
    async fn list_entries(&self) -> FetchResult<Vec<WaitlistEntry>> {
        let resp = self
            .client
            .get(self.endpoint.clone())
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            warn!(
                status = %status,
                endpoint = %self.endpoint,
                "Waitlist endpoint returned an error status"
            );
            return Err(FetchError::Status(status.as_u16()));
        }

        let parsed: WaitlistResponse = resp.json().await.map_err(|e| {
            if e.is_decode() {
                FetchError::Decode(e.to_string())
            } else {
                FetchError::Network(e.to_string())
            }
        })?;

        Ok(parsed.data.unwrap_or_default())
    }
}
