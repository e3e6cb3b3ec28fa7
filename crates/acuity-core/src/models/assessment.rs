use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// AVPU consciousness scale, least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ConsciousnessLevel {
    Alert,
    /// Responds to voice.
    Verbal,
    /// Responds only to painful stimulus.
    Pain,
    Unresponsive,
}

impl ConsciousnessLevel {
    pub const ALL: [ConsciousnessLevel; 4] = [
        ConsciousnessLevel::Alert,
        ConsciousnessLevel::Verbal,
        ConsciousnessLevel::Pain,
        ConsciousnessLevel::Unresponsive,
    ];

    pub fn severity(self) -> u8 {
        match self {
            ConsciousnessLevel::Alert => 0,
            ConsciousnessLevel::Verbal => 1,
            ConsciousnessLevel::Pain => 2,
            ConsciousnessLevel::Unresponsive => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConsciousnessLevel::Alert => "Alert",
            ConsciousnessLevel::Verbal => "Responds to voice",
            ConsciousnessLevel::Pain => "Responds to pain",
            ConsciousnessLevel::Unresponsive => "Unresponsive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AirwayStatus {
    Patent,
    AtRisk,
    Compromised,
    Obstructed,
}

impl AirwayStatus {
    pub const ALL: [AirwayStatus; 4] = [
        AirwayStatus::Patent,
        AirwayStatus::AtRisk,
        AirwayStatus::Compromised,
        AirwayStatus::Obstructed,
    ];

    pub fn severity(self) -> u8 {
        match self {
            AirwayStatus::Patent => 0,
            AirwayStatus::AtRisk => 1,
            AirwayStatus::Compromised => 2,
            AirwayStatus::Obstructed => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AirwayStatus::Patent => "Patent",
            AirwayStatus::AtRisk => "At risk",
            AirwayStatus::Compromised => "Compromised",
            AirwayStatus::Obstructed => "Obstructed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BreathingStatus {
    Normal,
    Labored,
    Distressed,
    Apneic,
    /// Mechanically supported. The unsupported state is unknown, so this
    /// ranks with `Distressed`.
    Assisted,
}

impl BreathingStatus {
    pub const ALL: [BreathingStatus; 5] = [
        BreathingStatus::Normal,
        BreathingStatus::Labored,
        BreathingStatus::Distressed,
        BreathingStatus::Apneic,
        BreathingStatus::Assisted,
    ];

    pub fn severity(self) -> u8 {
        match self {
            BreathingStatus::Normal => 0,
            BreathingStatus::Labored => 1,
            BreathingStatus::Distressed | BreathingStatus::Assisted => 2,
            BreathingStatus::Apneic => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BreathingStatus::Normal => "Normal",
            BreathingStatus::Labored => "Labored",
            BreathingStatus::Distressed => "Distressed",
            BreathingStatus::Apneic => "Apneic",
            BreathingStatus::Assisted => "Assisted ventilation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CirculationStatus {
    Normal,
    Compensated,
    Decompensated,
    Arrest,
}

impl CirculationStatus {
    pub const ALL: [CirculationStatus; 4] = [
        CirculationStatus::Normal,
        CirculationStatus::Compensated,
        CirculationStatus::Decompensated,
        CirculationStatus::Arrest,
    ];

    pub fn severity(self) -> u8 {
        match self {
            CirculationStatus::Normal => 0,
            CirculationStatus::Compensated => 1,
            CirculationStatus::Decompensated => 2,
            CirculationStatus::Arrest => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CirculationStatus::Normal => "Normal",
            CirculationStatus::Compensated => "Compensated",
            CirculationStatus::Decompensated => "Decompensated",
            CirculationStatus::Arrest => "Arrest",
        }
    }
}

/// How the patient moves. Used for care-area hints only; it never feeds
/// the acuity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MobilityStatus {
    Ambulatory,
    Assisted,
    Wheelchair,
    Stretcher,
    Immobile,
}

impl MobilityStatus {
    pub const ALL: [MobilityStatus; 5] = [
        MobilityStatus::Ambulatory,
        MobilityStatus::Assisted,
        MobilityStatus::Wheelchair,
        MobilityStatus::Stretcher,
        MobilityStatus::Immobile,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MobilityStatus::Ambulatory => "Ambulatory",
            MobilityStatus::Assisted => "Walks with assistance",
            MobilityStatus::Wheelchair => "Wheelchair",
            MobilityStatus::Stretcher => "Stretcher",
            MobilityStatus::Immobile => "Immobile",
        }
    }
}

/// Named high-risk presentations that mandate escalation regardless of
/// measured vitals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RedFlag {
    ChestPain,
    StrokeSymptoms,
    SevereBleeding,
    DifficultyBreathing,
    AlteredConsciousness,
    SevereTrauma,
    PediatricHighFever,
    Seizure,
    SevereAllergicReaction,
    SuicidalIdeation,
    ObstetricEmergency,
    /// Self-reported pain of 9 or 10.
    SeverePain,
    AbnormalVitals,
    ToxicExposure,
}

impl RedFlag {
    pub const ALL: [RedFlag; 14] = [
        RedFlag::ChestPain,
        RedFlag::StrokeSymptoms,
        RedFlag::SevereBleeding,
        RedFlag::DifficultyBreathing,
        RedFlag::AlteredConsciousness,
        RedFlag::SevereTrauma,
        RedFlag::PediatricHighFever,
        RedFlag::Seizure,
        RedFlag::SevereAllergicReaction,
        RedFlag::SuicidalIdeation,
        RedFlag::ObstetricEmergency,
        RedFlag::SeverePain,
        RedFlag::AbnormalVitals,
        RedFlag::ToxicExposure,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RedFlag::ChestPain => "Chest pain",
            RedFlag::StrokeSymptoms => "Stroke symptoms",
            RedFlag::SevereBleeding => "Severe bleeding",
            RedFlag::DifficultyBreathing => "Difficulty breathing",
            RedFlag::AlteredConsciousness => "Altered consciousness",
            RedFlag::SevereTrauma => "Severe trauma",
            RedFlag::PediatricHighFever => "High fever (pediatric)",
            RedFlag::Seizure => "Seizure",
            RedFlag::SevereAllergicReaction => "Severe allergic reaction",
            RedFlag::SuicidalIdeation => "Suicidal ideation",
            RedFlag::ObstetricEmergency => "Obstetric emergency",
            RedFlag::SeverePain => "Severe pain (9-10)",
            RedFlag::AbnormalVitals => "Abnormal vital signs",
            RedFlag::ToxicExposure => "Toxic exposure",
        }
    }
}

/// Self-reported pain on the 0–10 numeric scale.
///
/// Only constructible for in-range values, so anything holding a
/// `PainScore` has already passed the intake boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PainScore(u8);

impl PainScore {
    pub const MAX: u8 = 10;

    pub fn new(value: u8) -> Result<Self, CoreError> {
        if value > Self::MAX {
            return Err(CoreError::PainOutOfRange(value));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for PainScore {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PainScore> for u8 {
    fn from(score: PainScore) -> Self {
        score.0
    }
}

impl fmt::Display for PainScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/10", self.0)
    }
}

/// A fully assessed clinical snapshot: the classifier's only input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TriageAssessment {
    pub consciousness: ConsciousnessLevel,
    pub airway: AirwayStatus,
    pub breathing: BreathingStatus,
    pub circulation: CirculationStatus,
    #[ts(type = "number")]
    pub pain_level: PainScore,
    #[serde(default)]
    pub red_flags: BTreeSet<RedFlag>,
}

impl TriageAssessment {
    pub fn has_red_flags(&self) -> bool {
        !self.red_flags.is_empty()
    }
}
