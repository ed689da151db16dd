//! Shared UI components for the app shell.

pub mod layout;
pub mod toast_host;
