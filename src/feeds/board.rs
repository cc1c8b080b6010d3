//! board.json: per-project scores plus the market-wide S5 regime.

use serde::{Deserialize, Serialize};

use crate::config::{GeneratorConfig, SeedProject, Stage, bucket_actions};
use crate::domain::Cadence;
use crate::utils::{pct01, round_even, round1, stable_rand_0_1};

/// (salt, floor, span) for each agent, in field order A1..B4.
/// Base strength is `floor + span * rand(key + ":" + salt)`.
const AGENT_DRAWS: [(&str, f64, f64); 8] = [
    ("a", 0.50, 0.45),
    ("b", 0.45, 0.50),
    ("c", 0.40, 0.55),
    ("d", 0.40, 0.50),
    ("e", 0.40, 0.55),
    ("f", 0.35, 0.60),
    ("g", 0.45, 0.50),
    ("h", 0.40, 0.50),
];

const AGENT_TAGS: [&str; 8] = ["A1", "A2", "A3", "A4", "B1", "B2", "B3", "B4"];

/// Score weights, same order as the agents. Sums to 1.
const AGENT_WEIGHTS: [f64; 8] = [0.18, 0.15, 0.12, 0.10, 0.15, 0.10, 0.10, 0.10];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agents {
    #[serde(rename = "A1_vol_mcap")]
    pub a1_vol_mcap: i64,
    #[serde(rename = "A2_tvl")]
    pub a2_tvl: i64,
    #[serde(rename = "A3_sns")]
    pub a3_sns: i64,
    #[serde(rename = "A4_depth")]
    pub a4_depth: i64,
    #[serde(rename = "B1_leverage")]
    pub b1_leverage: i64,
    #[serde(rename = "B2_whale")]
    pub b2_whale: i64,
    #[serde(rename = "B3_dev")]
    pub b3_dev: i64,
    #[serde(rename = "B4_ecosys")]
    pub b4_ecosys: i64,
}

impl Agents {
    fn from_array(v: [i64; 8]) -> Self {
        Self {
            a1_vol_mcap: v[0],
            a2_tvl: v[1],
            a3_sns: v[2],
            a4_depth: v[3],
            b1_leverage: v[4],
            b2_whale: v[5],
            b3_dev: v[6],
            b4_ecosys: v[7],
        }
    }

    pub fn as_array(&self) -> [i64; 8] {
        [
            self.a1_vol_mcap,
            self.a2_tvl,
            self.a3_sns,
            self.a4_depth,
            self.b1_leverage,
            self.b2_whale,
            self.b3_dev,
            self.b4_ecosys,
        ]
    }

    /// Weighted total on a 0..100 scale, one decimal.
    pub fn score_total(&self) -> f64 {
        let weighted: f64 = self
            .as_array()
            .iter()
            .zip(AGENT_WEIGHTS)
            .map(|(&v, w)| w * v as f64)
            .sum();
        let score = weighted / 100.0;
        round1(score * 100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    #[serde(rename = "TVL_3d")]
    pub tvl_3d: f64,
    #[serde(rename = "VolMcap_1d")]
    pub vol_mcap_1d: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardItem {
    pub project: String,
    pub bucket: String,
    pub structure: String,
    pub stage: Stage,
    pub score_total: f64,
    pub confidence: f64,
    /// Filled in by a price source downstream; always null here.
    pub current_price: Option<f64>,
    pub agents: Agents,
    pub metrics: Metrics,
    pub actions: String,
}

/// Same field name the badge looks for first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketRegime {
    pub s5_regime: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardDocument {
    pub schema_version: String,
    pub cadence: String,
    pub updated_at: String,
    pub items: Vec<BoardItem>,
    pub market_regime: MarketRegime,
}

pub(crate) fn build_board(
    config: &GeneratorConfig,
    cadence: Cadence,
    updated_at: &str,
) -> BoardDocument {
    let items = config
        .projects
        .iter()
        .map(|project| build_item(project, cadence))
        .collect();

    BoardDocument {
        schema_version: config.schema_version.to_string(),
        cadence: cadence.tag().to_string(),
        updated_at: updated_at.to_string(),
        items,
        market_regime: market_regime(config, cadence),
    }
}

fn build_item(project: &SeedProject, cadence: Cadence) -> BoardItem {
    let key = format!("{}|{}|{}", project.name, project.bucket, cadence.key());

    let mut raw = [0i64; 8];
    for (slot, ((salt, floor, span), tag)) in raw.iter_mut().zip(AGENT_DRAWS.iter().zip(AGENT_TAGS)) {
        let base = floor + span * stable_rand_0_1(&format!("{key}:{salt}"));
        let boosted = cadence.boost(&format!("{key}:{tag}"), base);
        *slot = round_even(pct01(boosted) * 100.0);
    }
    let agents = Agents::from_array(raw);

    BoardItem {
        project: project.name.to_string(),
        bucket: project.bucket.to_string(),
        structure: project.structure.to_string(),
        stage: project.stage,
        score_total: agents.score_total(),
        confidence: round1(0.55 + 0.35 * stable_rand_0_1(&format!("{key}:conf"))),
        current_price: None,
        agents,
        metrics: Metrics {
            tvl_3d: round1(-2.0 + 8.0 * stable_rand_0_1(&format!("{key}:tvl3"))),
            vol_mcap_1d: round1(2.0 + 8.0 * stable_rand_0_1(&format!("{key}:vol1"))),
        },
        actions: bucket_actions(project.bucket).to_string(),
    }
}

fn market_regime(config: &GeneratorConfig, cadence: Cadence) -> MarketRegime {
    let score = round1(0.30 + 0.40 * stable_rand_0_1(&format!("market|{}", cadence.key())));
    let regime = if score >= config.bull_at_or_above {
        "bull"
    } else if score <= config.bear_at_or_below {
        "bear"
    } else {
        "neutral"
    };
    log::debug!("S5 regime for {}: {} ({})", cadence, regime, score);

    MarketRegime {
        s5_regime: regime.to_string(),
        score,
    }
}
