//! Application pages module
//!
//! - Waitlist landing page (home)
//! - Not found page

mod not_found;
mod waitlist;

pub use not_found::NotFoundPage;
pub use waitlist::{WAITLIST_FORM_ID, WaitlistPage};
