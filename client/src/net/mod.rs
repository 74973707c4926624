//! Networking glue between the UI and the `forum-api` pipeline.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the shared pipeline handle; `browser` supplies the fetch,
//! `localStorage`, and `window.location` capabilities it runs on.

pub mod api;
#[cfg(feature = "csr")]
pub mod browser;
