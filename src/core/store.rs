//! The lead store seam
//!
//! Anything that can durably insert a `LeadRecord` implements `LeadStore`:
//! the PostgREST client on the server, the `/api/leads` client in the
//! browser, and recording fakes in tests.

use std::future::Future;

use super::lead::LeadRecord;

/// Errors raised while inserting a lead
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Store rejected insert with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Failed to encode lead: {0}")]
    Encode(String),
}

/// Insert-only access to the `leads` collection
pub trait LeadStore {
    /// Insert one lead. Exactly one write attempt per call, no retries.
    fn insert(&self, lead: &LeadRecord) -> impl Future<Output = Result<(), StoreError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StoreError::Rejected {
                status: 409,
                body: "duplicate key".to_string()
            }
            .to_string(),
            "Store rejected insert with status 409: duplicate key"
        );
        assert_eq!(
            StoreError::Transport("connection refused".to_string()).to_string(),
            "Request failed: connection refused"
        );
    }
}
