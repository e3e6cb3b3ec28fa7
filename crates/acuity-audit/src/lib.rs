//! acuity-audit
//!
//! Structured audit events for triage decisions. Events go out through
//! `tracing`; whichever subscriber the host installs decides where they land.

pub mod events;

pub use events::AuditEvent;
