use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One clinical signal the classifier evaluates. Recorded alongside a
/// level so reviewers can see what drove it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Signal {
    Airway,
    Breathing,
    Circulation,
    Consciousness,
    Pain,
    RedFlags,
}

impl Signal {
    pub fn label(self) -> &'static str {
        match self {
            Signal::Airway => "airway",
            Signal::Breathing => "breathing",
            Signal::Circulation => "circulation",
            Signal::Consciousness => "consciousness",
            Signal::Pain => "pain score",
            Signal::RedFlags => "red flags",
        }
    }
}
