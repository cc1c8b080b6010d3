//! Offline generator for the feeds the dashboard reads.
//!
//! Output is a pure function of (cadence, seed config, timestamp): values are
//! drawn from `stable_rand_0_1`, so two runs with the same inputs write the
//! same bytes. Files go wherever `DataFeedConfig` says the dashboard will look.

mod board;
mod sensors;
mod stages;

pub use board::{Agents, BoardDocument, BoardItem, MarketRegime, Metrics};
pub use sensors::{LayerReading, Probe, ProbeValue, SensorsDocument};
pub use stages::{StagePool, StagesDocument};

use {
    crate::{
        config::{DataFeedConfig, Dataset, GeneratorConfig},
        domain::Cadence,
    },
    anyhow::{Context, Result},
    serde::Serialize,
    std::{
        fs,
        path::{Path, PathBuf},
    },
};

/// Datasets this generator produces. The rest are filled by other producers.
pub const GENERATED: [Dataset; 3] = [Dataset::Board, Dataset::Stages, Dataset::Sensors];

pub struct FeedGenerator<'a> {
    config: &'a GeneratorConfig,
    cadence: Cadence,
    updated_at: String,
}

impl<'a> FeedGenerator<'a> {
    pub fn new(config: &'a GeneratorConfig, cadence: Cadence, updated_at: impl Into<String>) -> Self {
        Self {
            config,
            cadence,
            updated_at: updated_at.into(),
        }
    }

    pub fn cadence(&self) -> Cadence {
        self.cadence
    }

    pub fn updated_at(&self) -> &str {
        &self.updated_at
    }

    pub fn board(&self) -> BoardDocument {
        board::build_board(self.config, self.cadence, &self.updated_at)
    }

    pub fn stages(&self) -> StagesDocument {
        stages::build_stages(self.config, self.cadence)
    }

    pub fn sensors(&self) -> SensorsDocument {
        sensors::build_sensors(self.config, self.cadence)
    }

    /// Pretty JSON for one generated dataset, or None for datasets this
    /// generator does not produce.
    pub fn render(&self, dataset: Dataset) -> Result<Option<String>> {
        let json = match dataset {
            Dataset::Board => to_json(&self.board())?,
            Dataset::Stages => to_json(&self.stages())?,
            Dataset::Sensors => to_json(&self.sensors())?,
            _ => return Ok(None),
        };
        Ok(Some(json))
    }

    /// Write every generated feed under `root`, at the path the dashboard
    /// resolves it from. Paths come back in `GENERATED` order, together with
    /// the market regime that went into board.json.
    pub fn write_all(&self, root: &Path, data: &DataFeedConfig) -> Result<WrittenFeeds> {
        let board = self.board();
        let documents = [
            (Dataset::Board, to_json(&board)?),
            (Dataset::Stages, to_json(&self.stages())?),
            (Dataset::Sensors, to_json(&self.sensors())?),
        ];

        let mut paths = Vec::with_capacity(documents.len());
        for (dataset, json) in documents {
            let path = feed_path(root, data, dataset);

            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;

            log::info!("Wrote {} -> {}", dataset, path.display());
            paths.push(path);
        }

        Ok(WrittenFeeds {
            paths,
            market_regime: board.market_regime,
        })
    }
}

/// Result of a `write_all` run.
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenFeeds {
    pub paths: Vec<PathBuf>,
    pub market_regime: MarketRegime,
}

/// Filesystem location for a dataset's URL, relative to `root`.
pub fn feed_path(root: &Path, data: &DataFeedConfig, dataset: Dataset) -> PathBuf {
    root.join(data.resolve(dataset).trim_start_matches('/'))
}

fn to_json<T: Serialize>(doc: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(doc).context("Failed to serialize feed")?;
    json.push('\n');
    Ok(json)
}
