//! HTTP layer: wire models and the API client for the text collection.

pub mod api;
pub mod types;
