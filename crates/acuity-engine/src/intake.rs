//! Intake boundary between form state and the classifier.
//!
//! Axes the operator has not assessed yet are `Observation::Unassessed`.
//! They are never defaulted: a draft only becomes a `TriageAssessment`
//! once every required axis has been observed.

use std::collections::BTreeSet;

use acuity_core::models::{
    AirwayStatus, BreathingStatus, CirculationStatus, ConsciousnessLevel, Level, MobilityStatus,
    PainScore, RedFlag, Signal, TriageAssessment,
};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::IntakeError;
use crate::rules;

/// A single form field that may not have been filled in yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Observation<T> {
    Unassessed,
    Observed(T),
}

impl<T> Default for Observation<T> {
    fn default() -> Self {
        Observation::Unassessed
    }
}

impl<T: Copy> Observation<T> {
    pub fn observed(self) -> Option<T> {
        match self {
            Observation::Observed(value) => Some(value),
            Observation::Unassessed => None,
        }
    }

    pub fn is_assessed(self) -> bool {
        matches!(self, Observation::Observed(_))
    }
}

impl<T> From<T> for Observation<T> {
    fn from(value: T) -> Self {
        Observation::Observed(value)
    }
}

/// Triage intake form state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentDraft {
    #[serde(default)]
    pub consciousness: Observation<ConsciousnessLevel>,
    #[serde(default)]
    pub airway: Observation<AirwayStatus>,
    #[serde(default)]
    pub breathing: Observation<BreathingStatus>,
    #[serde(default)]
    pub circulation: Observation<CirculationStatus>,
    /// Raw operator entry; range-checked by [`AssessmentDraft::complete`].
    #[serde(default)]
    pub pain_level: Observation<u8>,
    /// Optional; only used for care-area hints.
    #[serde(default)]
    pub mobility: Observation<MobilityStatus>,
    #[serde(default)]
    pub red_flags: BTreeSet<RedFlag>,
}

impl AssessmentDraft {
    /// Required axes that still need an observation, in form order.
    pub fn missing_axes(&self) -> Vec<Signal> {
        [
            (Signal::Consciousness, self.consciousness.is_assessed()),
            (Signal::Airway, self.airway.is_assessed()),
            (Signal::Breathing, self.breathing.is_assessed()),
            (Signal::Circulation, self.circulation.is_assessed()),
            (Signal::Pain, self.pain_level.is_assessed()),
        ]
        .into_iter()
        .filter_map(|(signal, assessed)| (!assessed).then_some(signal))
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_axes().is_empty()
    }

    /// Turn the draft into a classifier input, or report what is missing.
    pub fn complete(&self) -> Result<TriageAssessment, IntakeError> {
        let (
            Observation::Observed(consciousness),
            Observation::Observed(airway),
            Observation::Observed(breathing),
            Observation::Observed(circulation),
            Observation::Observed(pain),
        ) = (
            self.consciousness,
            self.airway,
            self.breathing,
            self.circulation,
            self.pain_level,
        )
        else {
            return Err(IntakeError::Incomplete {
                missing: self.missing_axes(),
            });
        };

        let pain_level = PainScore::new(pain).map_err(|_| IntakeError::PainOutOfRange(pain))?;

        Ok(TriageAssessment {
            consciousness,
            airway,
            breathing,
            circulation,
            pain_level,
            red_flags: self.red_flags.clone(),
        })
    }

    /// The level the intake screen shows while the form is being filled
    /// in. `None` until the draft is complete and valid.
    pub fn suggested_level(&self) -> Option<Level> {
        self.complete().ok().map(|assessment| rules::classify(&assessment))
    }
}
