pub mod assessment;
pub mod level;
pub mod record;
pub mod signal;

pub use assessment::{
    AirwayStatus, BreathingStatus, CirculationStatus, ConsciousnessLevel, MobilityStatus,
    PainScore, RedFlag, TriageAssessment,
};
pub use level::{Category, Level, LevelConfig};
pub use record::{CareArea, TriageRecord};
pub use signal::Signal;
