//! acuity-core
//!
//! Pure domain types for emergency triage: the clinical assessment axes,
//! acuity levels and categories, and the finalized triage record.
//! Classification logic lives in `acuity-engine`.

pub mod error;
pub mod models;
