//! Waitlist submission handler
//!
//! Converts the form snapshot into a lead, drives the status forward and
//! issues exactly one insert. Store failures are logged and absorbed: the
//! caller always ends up in `Submitted` once a lead was sent.

use super::lead::{LeadError, LeadRecord, WaitlistForm};
use super::status::SubmissionStatus;
use super::store::{LeadStore, StoreError};

/// Result of a submission that reached the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Stored,
    /// The insert failed; the error was logged and the status still advanced
    Absorbed(StoreError),
}

/// Check whether a submit event should start a submission.
///
/// Only an idle form submits; once a submission has started every further
/// submit event is `Ok(false)`. An unparseable leads count is reported before
/// the status moves.
pub fn ready_to_submit(status: SubmissionStatus, form: &WaitlistForm) -> Result<bool, LeadError> {
    if status != SubmissionStatus::Idle {
        return Ok(false);
    }

    LeadRecord::try_from(form)?;
    Ok(true)
}

/// Submit the waitlist form.
///
/// The lead is built before anything else happens; an unparseable leads count
/// returns `Err` without touching the status or the store. Otherwise
/// `on_status` sees `Submitting` then `Submitted`, exactly once each.
pub async fn submit<S, F>(
    store: &S,
    form: &WaitlistForm,
    mut on_status: F,
) -> Result<SubmitOutcome, LeadError>
where
    S: LeadStore,
    F: FnMut(SubmissionStatus),
{
    let lead = LeadRecord::try_from(form)?;

    on_status(SubmissionStatus::Submitting);

    let outcome = match store.insert(&lead).await {
        Ok(()) => SubmitOutcome::Stored,
        Err(e) => {
            leptos::logging::error!("Failed to store waitlist lead: {}", e);
            SubmitOutcome::Absorbed(e)
        }
    };

    on_status(SubmissionStatus::Submitted);

    Ok(outcome)
}
