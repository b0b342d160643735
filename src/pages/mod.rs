//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages own route-scoped orchestration only; the auth engine lives in
//! `crate::auth` and is consumed through context.

pub mod home;
