//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `dashboard`, `form`, ...) so components
//! depend on small focused models. Every module here is plain data; the
//! reactive wrapping happens in pages and components.

pub mod auth;
pub mod dashboard;
pub mod form;
pub mod stats;
pub mod toast;
