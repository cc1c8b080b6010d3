//! sensors.json: per-layer data quality and probe readings.

use serde::{Deserialize, Serialize};

use crate::config::{GeneratorConfig, SensorLayer};
use crate::domain::Cadence;
use crate::utils::{pct01, round1, stable_rand_0_1};

const RISK_LEVELS: [&str; 3] = ["low", "medium", "high"];

/// Probe readings come in three shapes; serialized without a tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProbeValue {
    Count(i64),
    Measure(f64),
    Level(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Probe {
    pub k: String,
    pub v: ProbeValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerReading {
    pub layer: String,
    /// 0..1, one decimal on the percentage scale
    pub quality: f64,
    pub probes: Vec<Probe>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorsDocument {
    pub cadence: String,
    pub layers: Vec<LayerReading>,
}

pub(crate) fn build_sensors(config: &GeneratorConfig, cadence: Cadence) -> SensorsDocument {
    let layers = config
        .sensor_layers
        .iter()
        .map(|layer| read_layer(layer, cadence))
        .collect();

    SensorsDocument {
        cadence: cadence.tag().to_string(),
        layers,
    }
}

fn read_layer(layer: &SensorLayer, cadence: Cadence) -> LayerReading {
    let q_base = 0.55 + 0.35 * stable_rand_0_1(&format!("quality|{}|{}", layer.layer, cadence.key()));
    let quality_pct = round1(pct01(cadence.boost(layer.layer, q_base)) * 100.0);

    let probes = layer
        .probes
        .iter()
        .map(|&probe| {
            let key = format!("{}|{}|{}", layer.layer, probe, cadence.key());
            Probe {
                k: probe.to_string(),
                v: probe_value(probe, stable_rand_0_1(&key)),
            }
        })
        .collect();

    LayerReading {
        layer: layer.layer.to_string(),
        quality: quality_pct / 100.0,
        probes,
    }
}

/// Map a [0,1) draw onto the probe's natural range.
fn probe_value(probe: &str, r: f64) -> ProbeValue {
    match probe {
        "lp_lock_ratio" | "holder_gini" => ProbeValue::Measure(round1(50.0 + 50.0 * r)),
        "tg_growth_7d" | "x_engagement" | "news_pulse" => {
            ProbeValue::Measure(round1(-2.0 + 8.0 * r))
        }
        "depth_usd" => ProbeValue::Count((50_000.0 + 200_000.0 * r) as i64),
        "commit_7d" => ProbeValue::Count((5.0 + 40.0 * r) as i64),
        "contract_risk" => {
            let idx = (3.0 * r) as usize % RISK_LEVELS.len();
            ProbeValue::Level(RISK_LEVELS[idx].to_string())
        }
        _ => ProbeValue::Measure(round1(100.0 * r)),
    }
}
