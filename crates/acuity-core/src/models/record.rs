use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::{Category, Level, MobilityStatus, Signal, TriageAssessment};

/// Where in the department the patient should be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CareArea {
    Resuscitation,
    /// Acute beds for stretcher-bound or emergent patients.
    Majors,
    Minors,
    FastTrack,
}

impl CareArea {
    pub fn label(self) -> &'static str {
        match self {
            CareArea::Resuscitation => "Resuscitation bay",
            CareArea::Majors => "Majors",
            CareArea::Minors => "Minors",
            CareArea::FastTrack => "Fast track",
        }
    }
}

/// A finalized triage decision, ready for the record store.
///
/// Level, category and wait policy are captured at finalization time so
/// the stored record stays stable if the level table is revised later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TriageRecord {
    pub id: Uuid,
    pub operator_id: String,
    pub triaged_at: jiff::Timestamp,
    pub assessment: TriageAssessment,
    pub mobility: Option<MobilityStatus>,
    #[ts(type = "number")]
    pub level: Level,
    pub category: Category,
    pub max_wait_minutes: u32,
    pub care_area: CareArea,
    pub triggers: Vec<Signal>,
    pub registry_version: u32,
}
