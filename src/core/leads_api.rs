//! Lead capture API endpoint
//!
//! Provides the REST endpoint the waitlist form posts to:
//! - POST /api/leads - Insert one lead into the hosted store
//!
//! The store key stays on the server; the browser only ever talks to this
//! endpoint.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::lead::LeadRecord;
use super::store::StoreError;
use super::supabase::SupabaseStore;

/// Path of the lead capture endpoint
pub const LEADS_PATH: &str = "/api/leads";

/// Leads API state; `store` is `None` when the store is not configured
#[derive(Clone, Default)]
pub struct LeadsApiState {
    pub store: Option<Arc<SupabaseStore>>,
}

impl LeadsApiState {
    pub fn new(store: Option<SupabaseStore>) -> Self {
        Self {
            store: store.map(Arc::new),
        }
    }
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}

/// Leads API error types
#[derive(Debug, thiserror::Error)]
pub enum LeadsApiError {
    #[error("Lead store is not configured")]
    NotConfigured,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for LeadsApiError {
    fn into_response(self) -> Response {
        // Upstream details are logged by the handler, never returned
        let (status, message, code) = match &self {
            LeadsApiError::NotConfigured => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Lead store is not configured",
                "STORE_NOT_CONFIGURED",
            ),
            LeadsApiError::Store(StoreError::Transport(_)) => (
                StatusCode::BAD_GATEWAY,
                "Lead store is unavailable",
                "STORE_UNAVAILABLE",
            ),
            LeadsApiError::Store(StoreError::Rejected { .. }) => (
                StatusCode::BAD_GATEWAY,
                "Lead store rejected the lead",
                "STORE_REJECTED",
            ),
            LeadsApiError::Store(StoreError::Encode(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
                "INTERNAL_ERROR",
            ),
        };

        let body = ApiError::new(message, code);

        (status, Json(body)).into_response()
    }
}

/// Create the leads API router
pub fn leads_router(state: LeadsApiState) -> Router {
    Router::new()
        .route(LEADS_PATH, post(create_lead))
        .with_state(state)
}

/// POST /api/leads - Insert one lead
async fn create_lead(
    State(state): State<LeadsApiState>,
    Json(lead): Json<LeadRecord>,
) -> Result<StatusCode, LeadsApiError> {
    let Some(store) = state.store.as_ref() else {
        tracing::warn!("Dropping waitlist lead: store is not configured");
        return Err(LeadsApiError::NotConfigured);
    };

    if let Err(e) = store.insert_lead(&lead).await {
        tracing::error!("Failed to insert waitlist lead: {}", e);
        return Err(e.into());
    }

    tracing::info!(
        company = %lead.company_name,
        monthly_leads = lead.monthly_leads,
        "Waitlist lead stored"
    );

    Ok(StatusCode::CREATED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use tower::ServiceExt;

    fn lead_json() -> serde_json::Value {
        serde_json::json!({
            "full_name": "Jane Doe",
            "business_email": "jane@agency.com",
            "company_name": "Acme Realty",
            "monthly_leads": 25
        })
    }

    fn post_lead(body: &serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(LEADS_PATH)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn error_body(response: Response) -> ApiError {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Fake PostgREST answering every insert with `status` and `body`
    async fn upstream(status: StatusCode, body: &'static str) -> String {
        let app = Router::new().route(
            "/rest/v1/leads",
            post(move || async move { (status, body) }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[test]
    fn test_browser_client_posts_to_this_endpoint() {
        assert_eq!(LEADS_PATH, crate::ui::api_client::DEFAULT_LEADS_ENDPOINT);
    }

    #[tokio::test]
    async fn test_create_lead_success() {
        let base = upstream(StatusCode::CREATED, "").await;
        let state = LeadsApiState::new(Some(SupabaseStore::new(&base, "key", "leads")));

        let response = leads_router(state)
            .oneshot(post_lead(&lead_json()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_create_lead_not_configured() {
        let response = leads_router(LeadsApiState::default())
            .oneshot(post_lead(&lead_json()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(error_body(response).await.code, "STORE_NOT_CONFIGURED");
    }

    #[tokio::test]
    async fn test_create_lead_store_rejects() {
        let base = upstream(
            StatusCode::BAD_REQUEST,
            r#"{"message":"column secret_internal does not exist"}"#,
        )
        .await;
        let state = LeadsApiState::new(Some(SupabaseStore::new(&base, "key", "leads")));

        let response = leads_router(state)
            .oneshot(post_lead(&lead_json()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = error_body(response).await;
        assert_eq!(body.code, "STORE_REJECTED");
        assert_eq!(body.error, "Lead store rejected the lead");
        assert!(!body.error.contains("secret_internal"));
    }

    #[tokio::test]
    async fn test_create_lead_store_unreachable() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let store = SupabaseStore::new(&format!("http://{}", addr), "key", "leads");
        let response = leads_router(LeadsApiState::new(Some(store)))
            .oneshot(post_lead(&lead_json()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = error_body(response).await;
        assert_eq!(body.code, "STORE_UNAVAILABLE");
        assert_eq!(body.error, "Lead store is unavailable");
        assert!(!body.error.contains(&addr.to_string()));
    }

    #[tokio::test]
    async fn test_create_lead_requires_integer_leads() {
        let mut body = lead_json();
        body["monthly_leads"] = serde_json::json!("lots");

        let response = leads_router(LeadsApiState::default())
            .oneshot(post_lead(&body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_create_lead_missing_field() {
        let mut body = lead_json();
        body.as_object_mut().unwrap().remove("business_email");

        let response = leads_router(LeadsApiState::default())
            .oneshot(post_lead(&body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
