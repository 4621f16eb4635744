pub mod api_client;
pub mod common;
pub mod icon;
pub mod pages;
pub mod reveal;

pub use api_client::ApiLeadStore;
pub use icon::{Icon, icons};
pub use pages::{NotFoundPage, WaitlistPage};
