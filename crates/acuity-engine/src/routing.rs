//! Care-area hints.
//!
//! Mobility decides where a patient can physically be placed; it never
//! changes the acuity level. Unknown mobility is routed as if the patient
//! cannot walk.

use acuity_core::models::{CareArea, Level, MobilityStatus};

pub fn suggest_area(level: Level, mobility: Option<MobilityStatus>) -> CareArea {
    match level {
        Level::One => CareArea::Resuscitation,
        Level::Two => CareArea::Majors,
        Level::Three => match mobility {
            Some(MobilityStatus::Ambulatory) => CareArea::Minors,
            _ => CareArea::Majors,
        },
        Level::Four | Level::Five => match mobility {
            Some(MobilityStatus::Ambulatory) => CareArea::FastTrack,
            Some(MobilityStatus::Assisted | MobilityStatus::Wheelchair) => CareArea::Minors,
            Some(MobilityStatus::Stretcher | MobilityStatus::Immobile) | None => CareArea::Majors,
        },
    }
}
