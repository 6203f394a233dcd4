//! Wire types and HTTP plumbing for the widget chat endpoint.

pub mod api;
pub mod types;
