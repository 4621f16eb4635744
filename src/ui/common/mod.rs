//! Common reusable UI components

pub mod spinner;

pub use spinner::SubmitButton;
