//! Level configuration registry.
//!
//! A versioned constant table: one entry per level, selected by an
//! exhaustive match so a missing entry cannot compile.

use acuity_core::models::{Category, Level, LevelConfig};

/// Bump when any wait time, name or color below changes. Stored on each
/// finalized record.
pub const REGISTRY_VERSION: u32 = 1;

static LEVELS: [LevelConfig; 5] = [
    LevelConfig {
        level: Level::One,
        category: Category::Resuscitation,
        name: "Resuscitation",
        description: "Immediate life-saving intervention required",
        max_wait_minutes: 0,
        color: "red",
    },
    LevelConfig {
        level: Level::Two,
        category: Category::Emergent,
        name: "Emergent",
        description: "High-risk presentation or threatened airway, breathing or circulation",
        max_wait_minutes: 15,
        color: "orange",
    },
    LevelConfig {
        level: Level::Three,
        category: Category::Urgent,
        name: "Urgent",
        description: "Abnormal but compensated physiology or severe pain",
        max_wait_minutes: 30,
        color: "yellow",
    },
    LevelConfig {
        level: Level::Four,
        category: Category::LessUrgent,
        name: "Less Urgent",
        description: "Stable with moderate pain",
        max_wait_minutes: 60,
        color: "green",
    },
    LevelConfig {
        level: Level::Five,
        category: Category::NonUrgent,
        name: "Non-Urgent",
        description: "Stable with mild or no pain",
        max_wait_minutes: 120,
        color: "blue",
    },
];

pub fn config_for(level: Level) -> &'static LevelConfig {
    match level {
        Level::One => &LEVELS[0],
        Level::Two => &LEVELS[1],
        Level::Three => &LEVELS[2],
        Level::Four => &LEVELS[3],
        Level::Five => &LEVELS[4],
    }
}

/// Every entry, most urgent first.
pub fn all_levels() -> &'static [LevelConfig; 5] {
    &LEVELS
}
