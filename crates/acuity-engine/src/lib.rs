//! acuity-engine
//!
//! Emergency triage acuity classification. Pure and synchronous: every
//! entry point is a free function over immutable data, safe to call from
//! any number of threads.
//!
//! The flow is: intake form state ([`intake::AssessmentDraft`]) is checked
//! for completeness, [`classify`] reduces the assessment to a [`Level`],
//! and the level registry supplies the display and wait-time policy.

pub mod error;
pub mod intake;
pub mod record;
pub mod registry;
pub mod routing;
pub mod rules;

use acuity_core::models::{Category, Level, LevelConfig};

pub use rules::{Classification, Finding, classify, explain, findings};

/// Look up the display and wait-time policy for a level.
pub fn config_for(level: Level) -> &'static LevelConfig {
    registry::config_for(level)
}

/// The coarse category for a level.
pub fn category_of(level: Level) -> Category {
    registry::config_for(level).category
}
