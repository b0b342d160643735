//! Networking modules for the HTTP auth boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles token and redirect lookups, `session` wraps the external
//! session provider, and `types` defines the shared wire schema.

pub mod api;
pub mod session;
pub mod types;
