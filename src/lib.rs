//! fuda — a minimal todo service that answers with HTML fragments.
//!
//! State lives in an in-memory task store; every mutation returns exactly
//! the DOM subtree an htmx client needs to patch into the page.

pub mod domain;
pub mod repo;
pub mod server;
pub mod view;
