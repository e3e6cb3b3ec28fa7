use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Acuity level, 1 (immediate) through 5 (non-urgent).
///
/// Ordering follows urgency: `Level::One < Level::Five`, so the most
/// urgent of several levels is their minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Level {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Level {
    pub const ALL: [Level; 5] = [Level::One, Level::Two, Level::Three, Level::Four, Level::Five];

    pub fn as_u8(self) -> u8 {
        match self {
            Level::One => 1,
            Level::Two => 2,
            Level::Three => 3,
            Level::Four => 4,
            Level::Five => 5,
        }
    }

    /// Zero-based position, for fixed-size tables indexed by level.
    pub fn index(self) -> usize {
        usize::from(self.as_u8() - 1)
    }
}

impl TryFrom<u8> for Level {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Level::One),
            2 => Ok(Level::Two),
            3 => Ok(Level::Three),
            4 => Ok(Level::Four),
            5 => Ok(Level::Five),
            other => Err(CoreError::InvalidLevel(other)),
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.as_u8()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level {}", self.as_u8())
    }
}

/// Coarse grouping of acuity levels used for routing and UI grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Category {
    Resuscitation,
    Emergent,
    Urgent,
    LessUrgent,
    NonUrgent,
}

/// Display and wait-time policy for one acuity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct LevelConfig {
    #[ts(type = "number")]
    pub level: Level,
    pub category: Category,
    pub name: &'static str,
    pub description: &'static str,
    /// Target maximum wait. 0 means immediate.
    pub max_wait_minutes: u32,
    pub color: &'static str,
}
