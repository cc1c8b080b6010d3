//! Seed data for the offline feed generator.

use super::labels::Stage;

pub struct SeedProject {
    pub bucket: &'static str,
    pub structure: &'static str,
    pub stage: Stage,
    pub name: &'static str,
}

pub struct SensorLayer {
    pub layer: &'static str,
    pub probes: &'static [&'static str],
}

pub struct GeneratorConfig {
    /// Written into board.json so the dashboard can detect format changes
    pub schema_version: &'static str,
    pub projects: &'static [SeedProject],
    pub sensor_layers: &'static [SensorLayer],
    /// Regime thresholds on the S5 score (inclusive)
    pub bull_at_or_above: f64,
    pub bear_at_or_below: f64,
    /// Stage draws below this land on the watchlist
    pub watchlist_below: f64,
    pub fake_start_above: f64,
}

pub const GENERATOR: GeneratorConfig = GeneratorConfig {
    schema_version: "1.3.x",
    projects: &[
        SeedProject {
            bucket: "1000x",
            structure: "Restaking protocol",
            stage: Stage::S1,
            name: "Karak",
        },
        SeedProject {
            bucket: "1000x",
            structure: "Social infra",
            stage: Stage::S1,
            name: "OLAS",
        },
        SeedProject {
            bucket: "1000x",
            structure: "Data availability (DA)",
            stage: Stage::S2,
            name: "Seed1",
        },
        SeedProject {
            bucket: "10000x",
            structure: "ZK infra",
            stage: Stage::S2,
            name: "ZKM",
        },
        SeedProject {
            bucket: "10000x",
            structure: "RWA rails",
            stage: Stage::S2,
            name: "Ondo",
        },
    ],
    sensor_layers: &[
        SensorLayer { layer: "L1_supply", probes: &["lp_lock_ratio", "holder_gini"] },
        SensorLayer { layer: "L2_demand", probes: &["tg_growth_7d", "x_engagement"] },
        SensorLayer { layer: "L3_liquidity", probes: &["depth_usd"] },
        SensorLayer { layer: "L4_devops", probes: &["commit_7d"] },
        SensorLayer { layer: "L5_narrative", probes: &["news_pulse"] },
        SensorLayer { layer: "L6_risk", probes: &["contract_risk"] },
    ],
    bull_at_or_above: 0.66,
    bear_at_or_below: 0.34,
    watchlist_below: 0.25,
    fake_start_above: 0.6,
};

/// Suggested action text per bucket. The 10000x bucket is event-driven only.
pub fn bucket_actions(bucket: &str) -> &'static str {
    if bucket == "10000x" {
        "Event/short-term only; strict risk control"
    } else {
        "Scale in up to 50%; trim when key metrics weaken"
    }
}
