//! stages.json: which pool each project sits in this run, plus a watchlist.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::config::{GeneratorConfig, Stage};
use crate::domain::Cadence;
use crate::utils::stable_rand_0_1;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagePool {
    pub pool: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagesDocument {
    pub cadence: String,
    /// Keyed by stage label; all five stages are always present.
    pub stages: BTreeMap<Stage, StagePool>,
    pub fake_start: usize,
    pub watchlist: Vec<String>,
}

pub(crate) fn build_stages(config: &GeneratorConfig, cadence: Cadence) -> StagesDocument {
    let mut stages: BTreeMap<Stage, StagePool> =
        Stage::iter().map(|s| (s, StagePool::default())).collect();
    let mut watchlist = Vec::new();

    for project in config.projects {
        let r = stable_rand_0_1(&format!("stage|{}|{}", project.name, cadence.key()));

        let stage = match cadence.promotion_above() {
            Some(threshold) if r > threshold => project.stage.promoted(),
            _ => project.stage,
        };
        if stage != project.stage {
            log::debug!("{} promoted {} -> {}", project.name, project.stage, stage);
        }
        stages.entry(stage).or_default().pool.push(project.name.to_string());

        if r < config.watchlist_below {
            watchlist.push(project.name.to_string());
        }
    }

    let fake_start = watchlist
        .iter()
        .filter(|name| stable_rand_0_1(&format!("fake|{name}")) > config.fake_start_above)
        .count();

    StagesDocument {
        cadence: cadence.tag().to_string(),
        stages,
        fake_start,
        watchlist,
    }
}
