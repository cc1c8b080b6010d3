//! End-to-end tests for the feed generator writing to disk.

#![allow(clippy::unwrap_used, clippy::panic)]

use eos_board::config::{DASHBOARD, Dataset, GENERATOR, LABELS, PALETTE, Stage};
use eos_board::feeds::{
    BoardDocument, GENERATED, ProbeValue, SensorsDocument, StagesDocument, feed_path,
};
use eos_board::{Cadence, Cli, FeedGenerator, run};
use std::fs;
use tempfile::TempDir;

const FIXED_TIME: &str = "2025-06-01 12:00 UTC";

fn generator(cadence: Cadence) -> FeedGenerator<'static> {
    FeedGenerator::new(&GENERATOR, cadence, FIXED_TIME)
}

// =============================================================================
// WRITING
// =============================================================================

#[test]
fn test_write_all_creates_output_tree() {
    let dir = TempDir::new().unwrap();
    let written = generator(Cadence::Daily)
        .write_all(dir.path(), &DASHBOARD.data)
        .unwrap();

    assert_eq!(written.paths.len(), GENERATED.len());
    for dataset in GENERATED {
        let path = feed_path(dir.path(), &DASHBOARD.data, dataset);
        assert!(path.exists(), "{} missing", path.display());
        assert!(path.starts_with(dir.path().join("output")));
    }
    assert!(!feed_path(dir.path(), &DASHBOARD.data, Dataset::Feedback).exists());
}

#[test]
fn test_rewrite_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let weekly = generator(Cadence::Weekly);

    weekly.write_all(dir.path(), &DASHBOARD.data).unwrap();
    let first: Vec<Vec<u8>> = GENERATED
        .iter()
        .map(|&d| fs::read(feed_path(dir.path(), &DASHBOARD.data, d)).unwrap())
        .collect();

    weekly.write_all(dir.path(), &DASHBOARD.data).unwrap();
    let second: Vec<Vec<u8>> = GENERATED
        .iter()
        .map(|&d| fs::read(feed_path(dir.path(), &DASHBOARD.data, d)).unwrap())
        .collect();

    assert_eq!(first, second);
}

#[test]
fn test_written_documents_parse_back() {
    let dir = TempDir::new().unwrap();
    generator(Cadence::TPlus3)
        .write_all(dir.path(), &DASHBOARD.data)
        .unwrap();

    let read = |d: Dataset| fs::read_to_string(feed_path(dir.path(), &DASHBOARD.data, d)).unwrap();

    let board: BoardDocument = serde_json::from_str(&read(Dataset::Board)).unwrap();
    let stages: StagesDocument = serde_json::from_str(&read(Dataset::Stages)).unwrap();
    let sensors: SensorsDocument = serde_json::from_str(&read(Dataset::Sensors)).unwrap();

    assert_eq!(board, generator(Cadence::TPlus3).board());
    assert_eq!(stages, generator(Cadence::TPlus3).stages());
    assert_eq!(sensors, generator(Cadence::TPlus3).sensors());
    assert_eq!(board.cadence, "t+3");
    assert_eq!(board.updated_at, FIXED_TIME);
}

// =============================================================================
// KNOWN VALUES (must stay in step with the feeds already published)
// =============================================================================

#[test]
fn test_daily_board_values() {
    let board = generator(Cadence::Daily).board();

    assert_eq!(board.market_regime.s5_regime, "neutral");
    assert_eq!(board.market_regime.score, 0.4);

    let karak = &board.items[0];
    assert_eq!(karak.project, "Karak");
    assert_eq!(karak.agents.as_array(), [67, 61, 79, 72, 87, 54, 49, 68]);
    assert_eq!(karak.score_total, 68.0);
    assert_eq!(karak.confidence, 0.7);
    assert_eq!(karak.metrics.tvl_3d, 2.3);
    assert_eq!(karak.metrics.vol_mcap_1d, 7.9);
}

#[test]
fn test_weekly_board_values() {
    let board = generator(Cadence::Weekly).board();

    assert_eq!(board.market_regime.s5_regime, "bull");
    assert_eq!(board.market_regime.score, 0.7);

    let karak = &board.items[0];
    assert_eq!(karak.agents.as_array(), [70, 93, 62, 49, 46, 89, 78, 69]);
    assert_eq!(karak.score_total, 69.4);
}

#[test]
fn test_tplus3_board_values() {
    let board = generator(Cadence::TPlus3).board();

    assert_eq!(board.market_regime.s5_regime, "bull");
    assert_eq!(board.items[0].agents.as_array(), [69, 58, 78, 86, 98, 71, 83, 75]);
    assert_eq!(board.items[0].score_total, 76.7);
}

#[test]
fn test_weekly_stage_pools() {
    let stages = generator(Cadence::Weekly).stages();
    let pool = |stage: Stage| stages.stages[&stage].pool.clone();

    assert_eq!(pool(Stage::S1), ["Karak"]);
    assert_eq!(pool(Stage::S2), ["OLAS", "ZKM", "Ondo"]);
    // Seed1 is promoted from S2 this week
    assert_eq!(pool(Stage::S3), ["Seed1"]);
    assert!(pool(Stage::S4).is_empty());
    assert_eq!(stages.watchlist, ["Ondo"]);
    assert_eq!(stages.fake_start, 1);
}

#[test]
fn test_tplus3_promotes_zkm() {
    let stages = generator(Cadence::TPlus3).stages();
    assert_eq!(stages.stages[&Stage::S1].pool, ["OLAS"]);
    assert_eq!(stages.stages[&Stage::S2].pool, ["Karak", "Seed1", "Ondo"]);
    assert_eq!(stages.stages[&Stage::S3].pool, ["ZKM"]);
}

#[test]
fn test_daily_sensor_values() {
    let sensors = generator(Cadence::Daily).sensors();
    let quality: Vec<f64> = sensors.layers.iter().map(|l| l.quality).collect();

    assert_eq!(quality, [0.813, 0.736, 0.873, 0.684, 0.63, 0.772]);
    assert_eq!(sensors.layers[0].probes[0].v, ProbeValue::Measure(70.7));
    assert_eq!(sensors.layers[2].probes[0].v, ProbeValue::Count(245_866));
    assert_eq!(sensors.layers[3].probes[0].v, ProbeValue::Count(31));
    assert_eq!(sensors.layers[5].probes[0].v, ProbeValue::Level("medium".into()));
}

#[test]
fn test_weekly_sensor_values() {
    let sensors = generator(Cadence::Weekly).sensors();
    assert_eq!(sensors.layers[2].probes[0].v, ProbeValue::Count(98_905));
    assert_eq!(sensors.layers[4].probes[0].v, ProbeValue::Measure(-1.3));
    assert_eq!(sensors.layers[5].probes[0].v, ProbeValue::Level("high".into()));
}

// =============================================================================
// CROSS-CHECKS AGAINST THE DASHBOARD CONFIG
// =============================================================================

#[test]
fn test_every_bucket_has_a_color() {
    let board = generator(Cadence::Daily).board();
    for item in &board.items {
        assert!(PALETTE.bucket.get(&item.bucket).is_some(), "{}", item.bucket);
    }
}

#[test]
fn test_stage_pools_use_configured_labels() {
    let json = serde_json::to_value(generator(Cadence::Weekly).stages()).unwrap();
    for label in LABELS.stages {
        assert!(json["stages"][label]["pool"].is_array(), "{label}");
    }
}

#[test]
fn test_market_regime_renders_as_badge() {
    for cadence in [Cadence::Daily, Cadence::TPlus3, Cadence::Weekly] {
        let board = generator(cadence).board();
        let regime = serde_json::to_value(&board.market_regime).unwrap();
        let text = DASHBOARD.s5_badge_text(Some(&regime));
        assert_eq!(text, format!("S5: {}", board.market_regime.s5_regime));
        assert!(["S5: bull", "S5: bear", "S5: neutral"].contains(&text.as_str()));
    }
}

#[test]
fn test_cadences_produce_different_boards() {
    let daily = generator(Cadence::Daily).board();
    let weekly = generator(Cadence::Weekly).board();
    assert_ne!(daily.items, weekly.items);
}

// =============================================================================
// CLI
// =============================================================================

#[test]
fn test_run_writes_feeds_and_reports() {
    let dir = TempDir::new().unwrap();
    let args = Cli {
        cadence: "weekly".to_string(),
        root: dir.path().to_path_buf(),
        print_config: false,
    };

    let summary = run(&args).unwrap();
    assert!(summary.starts_with("[ok] wrote output/*.json | cadence=weekly | updated_at="));
    assert!(dir.path().join("output/board.json").exists());
}

#[test]
fn test_run_print_config_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let args = Cli {
        cadence: "daily".to_string(),
        root: dir.path().to_path_buf(),
        print_config: true,
    };

    let out = run(&args).unwrap();
    assert!(out.contains("\"x_objective\""));
    assert!(!dir.path().join("output").exists());
}
