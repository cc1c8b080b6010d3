//! The root dashboard configuration handed to renderers.

use serde::Serialize;
use serde_json::Value;

use super::{DATA, DataFeedConfig, LABELS, LabelConfig, PALETTE, PaletteConfig};
use crate::models::regime;

/// Everything the dashboard needs to lay itself out. Built from literals,
/// never mutated; share it by reference.
#[derive(Debug, Serialize)]
pub struct DashboardConfig {
    pub data: DataFeedConfig,
    pub palette: PaletteConfig,
    pub labels: LabelConfig,
}

impl DashboardConfig {
    /// `"S5: <regime>"`, or `"S5: —"` when there is no regime to show.
    pub fn s5_badge_text(&self, regime: Option<&Value>) -> String {
        regime::s5_badge_text(regime)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

pub const DASHBOARD: DashboardConfig = DashboardConfig {
    data: DATA,
    palette: PALETTE,
    labels: LABELS,
};
