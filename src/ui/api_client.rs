//! Browser-side lead store
//!
//! Posts leads to the server's `/api/leads` endpoint, which forwards them to
//! the hosted store. Construct one in the app root and hand it to the page.

use crate::core::{LeadRecord, LeadStore, StoreError};

/// Default same-origin path of the lead capture endpoint
pub const DEFAULT_LEADS_ENDPOINT: &str = "/api/leads";

/// `LeadStore` backed by the server's lead capture endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiLeadStore {
    endpoint: String,
}

impl ApiLeadStore {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for ApiLeadStore {
    fn default() -> Self {
        Self::new(DEFAULT_LEADS_ENDPOINT)
    }
}

impl LeadStore for ApiLeadStore {
    async fn insert(&self, lead: &LeadRecord) -> Result<(), StoreError> {
        #[cfg(not(feature = "ssr"))]
        {
            use gloo_net::http::Request;

            let response = Request::post(&self.endpoint)
                .json(lead)
                .map_err(|e| StoreError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| StoreError::Transport(e.to_string()))?;

            if response.ok() {
                return Ok(());
            }

            let body = response.text().await.unwrap_or_default();
            Err(StoreError::Rejected {
                status: response.status(),
                body,
            })
        }

        // Submissions only happen from browser events
        #[cfg(feature = "ssr")]
        {
            let _ = lead;
            Err(StoreError::Transport(format!(
                "{} is only reachable from the browser",
                self.endpoint
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        assert_eq!(ApiLeadStore::default().endpoint(), "/api/leads");
    }

    #[test]
    fn test_custom_endpoint() {
        let store = ApiLeadStore::new("https://waitlist.example.com/api/leads");
        assert_eq!(store.endpoint(), "https://waitlist.example.com/api/leads");
    }
}
