//! Classification rules.
//!
//! Each [`Signal`] maps an assessment to the tier it triggers, if any.
//! Tiers are evaluated from Level 1 down; the first tier any signal hits
//! is the result, and Level 5 is the default. Per-axis mappings are
//! exhaustive matches so a new enum variant has to be placed in a tier
//! before the crate builds.

use acuity_core::models::{
    AirwayStatus, BreathingStatus, Category, CirculationStatus, ConsciousnessLevel, Level,
    PainScore, Signal, TriageAssessment,
};
use serde::Serialize;
use tracing::debug;
use ts_rs::TS;

use crate::registry;

/// Signals in evaluation order. Order only affects how triggers are
/// listed, never the resulting level.
pub const RULES: [Signal; 6] = [
    Signal::Airway,
    Signal::Breathing,
    Signal::Circulation,
    Signal::Consciousness,
    Signal::Pain,
    Signal::RedFlags,
];

/// Tiers that need a signal to match. Level 5 is the fallthrough.
const TIERS: [Level; 4] = [Level::One, Level::Two, Level::Three, Level::Four];

/// A signal that fired, and the tier it fired at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Finding {
    pub signal: Signal,
    #[ts(type = "number")]
    pub level: Level,
}

/// The classifier's answer plus the signals that decided it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Classification {
    #[ts(type = "number")]
    pub level: Level,
    pub category: Category,
    /// Signals that fired at the winning tier. Empty only for Level 5.
    pub triggers: Vec<Signal>,
}

/// Reduce an assessment to its acuity level.
pub fn classify(assessment: &TriageAssessment) -> Level {
    TIERS
        .into_iter()
        .find(|&tier| {
            RULES
                .iter()
                .any(|&signal| signal_level(signal, assessment) == Some(tier))
        })
        .unwrap_or(Level::Five)
}

/// Classify and report which signals drove the result.
pub fn explain(assessment: &TriageAssessment) -> Classification {
    let level = classify(assessment);
    let triggers: Vec<Signal> = RULES
        .into_iter()
        .filter(|&signal| signal_level(signal, assessment) == Some(level))
        .collect();

    debug!(level = level.as_u8(), ?triggers, "classified assessment");

    Classification {
        level,
        category: registry::config_for(level).category,
        triggers,
    }
}

/// Every signal that fired at any tier, in rule order.
pub fn findings(assessment: &TriageAssessment) -> Vec<Finding> {
    RULES
        .into_iter()
        .filter_map(|signal| {
            signal_level(signal, assessment).map(|level| Finding { signal, level })
        })
        .collect()
}

/// The tier a single signal triggers for this assessment.
pub fn signal_level(signal: Signal, assessment: &TriageAssessment) -> Option<Level> {
    match signal {
        Signal::Airway => airway_level(assessment.airway),
        Signal::Breathing => breathing_level(assessment.breathing),
        Signal::Circulation => circulation_level(assessment.circulation),
        Signal::Consciousness => consciousness_level(assessment.consciousness),
        Signal::Pain => pain_level(assessment.pain_level),
        Signal::RedFlags => assessment.has_red_flags().then_some(Level::Two),
    }
}

fn airway_level(airway: AirwayStatus) -> Option<Level> {
    match airway {
        AirwayStatus::Obstructed => Some(Level::One),
        AirwayStatus::Compromised => Some(Level::Two),
        AirwayStatus::AtRisk => Some(Level::Three),
        AirwayStatus::Patent => None,
    }
}

fn breathing_level(breathing: BreathingStatus) -> Option<Level> {
    match breathing {
        BreathingStatus::Apneic => Some(Level::One),
        BreathingStatus::Distressed | BreathingStatus::Assisted => Some(Level::Two),
        BreathingStatus::Labored => Some(Level::Three),
        BreathingStatus::Normal => None,
    }
}

fn circulation_level(circulation: CirculationStatus) -> Option<Level> {
    match circulation {
        CirculationStatus::Arrest => Some(Level::One),
        CirculationStatus::Decompensated => Some(Level::Two),
        CirculationStatus::Compensated => Some(Level::Three),
        CirculationStatus::Normal => None,
    }
}

fn consciousness_level(consciousness: ConsciousnessLevel) -> Option<Level> {
    match consciousness {
        ConsciousnessLevel::Unresponsive => Some(Level::One),
        ConsciousnessLevel::Verbal | ConsciousnessLevel::Pain => Some(Level::Two),
        ConsciousnessLevel::Alert => None,
    }
}

// 9-10, 7-8, 4-6 and 0-3 partition the scale.
fn pain_level(pain: PainScore) -> Option<Level> {
    match pain.value() {
        0..=3 => None,
        4..=6 => Some(Level::Four),
        7..=8 => Some(Level::Three),
        _ => Some(Level::Two),
    }
}
