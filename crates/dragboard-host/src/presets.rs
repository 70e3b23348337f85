#![forbid(unsafe_code)]

//! Built-in demo boards.
//!
//! Each preset is a JSON fixture compiled into the binary and parsed on
//! demand, so every call returns a fresh, independently owned board.
//!
//! | Preset     | Columns                                              | Item fields                 |
//! |------------|------------------------------------------------------|-----------------------------|
//! | `task`     | backlog, progress, done                              | `tags`, `owner`             |
//! | `campaign` | planning, production, launch, review                 | `channel`, `tags`           |
//! | `software` | triage, build, ship, validate                        | `priority`, `owner`, `area` |
//! | `project`  | intake, analysis, prioritized, approved, baselined   | `labels`, `owners`          |

use std::fmt;
use std::str::FromStr;

use dragboard_core::Board;
use serde::{Deserialize, Serialize};

const TASK_BOARD: &str = include_str!("../fixtures/task_board.json");
const CAMPAIGN_BOARD: &str = include_str!("../fixtures/campaign_board.json");
const SOFTWARE_BOARD: &str = include_str!("../fixtures/software_board.json");
const PROJECT_BOARD: &str = include_str!("../fixtures/project_board.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardPreset {
    Task,
    Campaign,
    Software,
    Project,
}

impl BoardPreset {
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Task, Self::Campaign, Self::Software, Self::Project]
    }

    /// Stable lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::Campaign => "campaign",
            Self::Software => "software",
            Self::Project => "project",
        }
    }

    /// Human-readable title.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Task => "Task board",
            Self::Campaign => "Campaign board",
            Self::Software => "Software board",
            Self::Project => "Project board",
        }
    }

    const fn fixture(self) -> &'static str {
        match self {
            Self::Task => TASK_BOARD,
            Self::Campaign => CAMPAIGN_BOARD,
            Self::Software => SOFTWARE_BOARD,
            Self::Project => PROJECT_BOARD,
        }
    }

    /// Parse a fresh copy of the preset board.
    pub fn board(self) -> Result<Board, serde_json::Error> {
        serde_json::from_str(self.fixture())
    }
}

impl fmt::Display for BoardPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognized preset name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPreset(pub String);

impl fmt::Display for UnknownPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown board preset '{}' (expected task, campaign, software, or project)",
            self.0
        )
    }
}

impl std::error::Error for UnknownPreset {}

impl FromStr for BoardPreset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPreset(s.to_owned()))
    }
}
