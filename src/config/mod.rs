//! Configuration module for the EOS dashboard.

// Can all be private now because we have a public re-export.
mod dashboard;
mod data;
mod generator;
mod labels;
mod palette;

// Re-export commonly used items
pub use dashboard::{DASHBOARD, DashboardConfig};
pub use data::{DATA, DataFeedConfig, Dataset};
pub use generator::{GENERATOR, GeneratorConfig, SeedProject, SensorLayer, bucket_actions};
pub use labels::{LABELS, LabelConfig, Stage};
pub use palette::{BucketColors, PALETTE, PaletteConfig};
