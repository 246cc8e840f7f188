//! Networking modules for the server's JSON API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls from the browser and `types` defines the shared
//! wire schema that the server reuses for its request and response bodies.

pub mod api;
pub mod types;
