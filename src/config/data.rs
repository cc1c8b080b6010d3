//! Data feed locations read by the dashboard.

use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Logical dataset names. The string form matches the key used in the
/// browser-side config object.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Dataset {
    Board,
    Stages,
    Sensors,
    Feedback,
    Resonance,
    XObjective,
    XPolicy,
}

/// One relative URL per dataset. Every field must start with `/output/`.
#[derive(Debug, Serialize)]
pub struct DataFeedConfig {
    pub board: &'static str,
    pub stages: &'static str,
    pub sensors: &'static str,
    pub feedback: &'static str,
    pub resonance: &'static str,
    pub x_objective: &'static str,
    pub x_policy: &'static str,
}

impl DataFeedConfig {
    pub const fn resolve(&self, dataset: Dataset) -> &'static str {
        match dataset {
            Dataset::Board => self.board,
            Dataset::Stages => self.stages,
            Dataset::Sensors => self.sensors,
            Dataset::Feedback => self.feedback,
            Dataset::Resonance => self.resonance,
            Dataset::XObjective => self.x_objective,
            Dataset::XPolicy => self.x_policy,
        }
    }

    /// Lookup by raw key (e.g. `"x_policy"`). Unknown keys are an error for the caller to handle.
    pub fn resolve_key(&self, key: &str) -> Result<&'static str, strum::ParseError> {
        key.parse::<Dataset>().map(|dataset| self.resolve(dataset))
    }
}

pub const DATA: DataFeedConfig = DataFeedConfig {
    board: "/output/board.json",
    stages: "/output/stages.json",
    sensors: "/output/sensors.json",
    feedback: "/output/feedback.json",
    resonance: "/output/resonance.json",
    x_objective: "/output/x_objective.json",
    x_policy: "/output/x_policy.json",
};
