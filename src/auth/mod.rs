//! Authentication state-synchronization engine.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reconciles three asynchronously arriving identity sources (a URL-carried
//! one-time wallet token, a persisted access token, and the external session
//! provider) into one observable auth state. `provider` owns composition;
//! the sibling modules stay small and individually testable.

pub mod exchange;
pub mod guard;
pub mod provider;
pub mod resolve;
pub mod store;
