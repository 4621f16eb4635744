//! Core domain models and logic for the waitlist page

#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod leads_api;
mod lead;
mod status;
pub mod store;
#[cfg(feature = "ssr")]
pub mod supabase;
mod visibility;
pub mod waitlist;

pub use lead::*;
pub use status::*;
pub use store::{LeadStore, StoreError};
pub use visibility::*;
pub use waitlist::{SubmitOutcome, ready_to_submit, submit};
