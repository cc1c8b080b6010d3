//! Display labels for the pipeline stages.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Pipeline stages in order. `S5` is the market-wide stage the badge reports on.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    AsRefStr,
)]
pub enum Stage {
    S1,
    S2,
    S3,
    S4,
    S5,
}

impl Stage {
    /// Next stage, saturating at `S5`.
    pub const fn promoted(self) -> Self {
        match self {
            Self::S1 => Self::S2,
            Self::S2 => Self::S3,
            Self::S3 => Self::S4,
            Self::S4 | Self::S5 => Self::S5,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LabelConfig {
    pub stages: [&'static str; 5],
}

pub const LABELS: LabelConfig = LabelConfig {
    stages: ["S1", "S2", "S3", "S4", "S5"],
};
