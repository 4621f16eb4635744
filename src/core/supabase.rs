//! PostgREST client for the hosted lead table
//!
//! Inserts go to `POST {base}/rest/v1/{table}` with the project key in both
//! the `apikey` header and the bearer token, and `Prefer: return=minimal` so
//! the store answers `201 Created` with an empty body.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};

use super::config::Config;
use super::lead::LeadRecord;
use super::store::{LeadStore, StoreError};

/// Insert-only client for one PostgREST table
#[derive(Clone)]
pub struct SupabaseStore {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl SupabaseStore {
    pub fn new(base_url: &str, api_key: impl Into<String>, table: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), table),
            api_key: api_key.into(),
        }
    }

    /// Build the client from configuration, if URL and key are both present
    pub fn from_config(config: &Config) -> Option<Self> {
        let url = config.supabase_url.as_deref()?;
        let key = config.supabase_anon_key.as_deref()?;
        Some(Self::new(url, key, &config.leads_table))
    }

    /// Full URL inserts are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn headers(&self) -> Result<HeaderMap, StoreError> {
        let key = HeaderValue::from_str(&self.api_key)
            .map_err(|e| StoreError::Encode(format!("invalid api key: {}", e)))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", self.api_key))
            .map_err(|e| StoreError::Encode(format!("invalid api key: {}", e)))?;

        let mut headers = HeaderMap::new();
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert("prefer", HeaderValue::from_static("return=minimal"));
        Ok(headers)
    }

    /// Insert one lead row
    pub async fn insert_lead(&self, lead: &LeadRecord) -> Result<(), StoreError> {
        let response = self
            .client
            .post(&self.endpoint)
            .headers(self.headers()?)
            .json(&[lead])
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(StoreError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

impl LeadStore for SupabaseStore {
    fn insert(&self, lead: &LeadRecord) -> impl Future<Output = Result<(), StoreError>> {
        self.insert_lead(lead)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, http::HeaderMap as AxumHeaders, http::StatusCode, routing::post};
    use std::sync::{Arc, Mutex};

    fn lead() -> LeadRecord {
        LeadRecord {
            full_name: "Jane Doe".to_string(),
            business_email: "jane@agency.com".to_string(),
            company_name: "Acme Realty".to_string(),
            monthly_leads: 25,
        }
    }

    /// Captured request seen by the fake PostgREST server
    #[derive(Default)]
    struct Seen {
        body: Option<serde_json::Value>,
        apikey: Option<String>,
        authorization: Option<String>,
        prefer: Option<String>,
    }

    /// Serve a fake `/rest/v1/leads` on an ephemeral port, answering `status`
    async fn fake_store(status: StatusCode) -> (String, Arc<Mutex<Seen>>) {
        let seen = Arc::new(Mutex::new(Seen::default()));
        let captured = seen.clone();

        let app = Router::new().route(
            "/rest/v1/leads",
            post(move |headers: AxumHeaders, Json(body): Json<serde_json::Value>| {
                let captured = captured.clone();
                async move {
                    let header = |name: &str| {
                        headers
                            .get(name)
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string)
                    };
                    let mut seen = captured.lock().unwrap();
                    seen.body = Some(body);
                    seen.apikey = header("apikey");
                    seen.authorization = header("authorization");
                    seen.prefer = header("prefer");
                    (status, "")
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}", addr), seen)
    }

    #[test]
    fn test_endpoint_from_base_url() {
        let store = SupabaseStore::new("https://demo.supabase.co/", "key", "leads");
        assert_eq!(store.endpoint(), "https://demo.supabase.co/rest/v1/leads");
    }

    #[test]
    fn test_from_config_requires_url_and_key() {
        let config = Config {
            supabase_url: Some("https://demo.supabase.co".to_string()),
            supabase_anon_key: None,
            leads_table: "leads".to_string(),
        };
        assert!(SupabaseStore::from_config(&config).is_none());

        let config = Config {
            supabase_anon_key: Some("key".to_string()),
            leads_table: "prospects".to_string(),
            ..config
        };
        let store = SupabaseStore::from_config(&config).unwrap();
        assert_eq!(store.endpoint(), "https://demo.supabase.co/rest/v1/prospects");
    }

    #[tokio::test]
    async fn test_insert_posts_single_row_array() {
        let (base, seen) = fake_store(StatusCode::CREATED).await;
        let store = SupabaseStore::new(&base, "anon-key", "leads");

        store.insert(&lead()).await.unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(
            seen.body,
            Some(serde_json::json!([{
                "full_name": "Jane Doe",
                "business_email": "jane@agency.com",
                "company_name": "Acme Realty",
                "monthly_leads": 25
            }]))
        );
        assert_eq!(seen.apikey.as_deref(), Some("anon-key"));
        assert_eq!(seen.authorization.as_deref(), Some("Bearer anon-key"));
        assert_eq!(seen.prefer.as_deref(), Some("return=minimal"));
    }

    #[tokio::test]
    async fn test_insert_reports_rejection() {
        let (base, _seen) = fake_store(StatusCode::CONFLICT).await;
        let store = SupabaseStore::new(&base, "anon-key", "leads");

        let err = store.insert(&lead()).await.unwrap_err();

        assert!(matches!(err, StoreError::Rejected { status: 409, .. }));
    }

    #[tokio::test]
    async fn test_insert_reports_transport_error() {
        // Bind then drop to get a port with nothing listening
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let store = SupabaseStore::new(&format!("http://{}", addr), "anon-key", "leads");
        let err = store.insert(&lead()).await.unwrap_err();

        assert!(matches!(err, StoreError::Transport(_)));
    }
}
