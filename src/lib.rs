//! Speedup, efficiency and scaling views derived from raw benchmark samples.
//! Run Criterion benchmarks with `cargo bench` to inspect reports under `target/criterion`.

pub mod analysis;
pub mod baseline;
pub mod bench_utils;
pub mod client;
pub mod cohort;
pub mod config;
pub mod errors;
pub mod grouping;
pub mod ingest;
pub mod metrics;
pub mod render;
pub mod sample;
pub mod sanitize;
pub mod views;

pub use crate::analysis::{AnalysisReport, run_analysis};
pub use crate::config::AnalysisConfig;
pub use crate::errors::BenchScaleError;
pub use crate::grouping::{Aggregate, ConfigKey, KeyField, KeyProjection, RepresentativeTable};
pub use crate::metrics::DerivedMetric;
pub use crate::render::{RenderAdapter, SeriesPoint, SeriesTable};
pub use crate::sample::{Sample, SampleStore};
pub use crate::sanitize::{SanitizedSamples, sanitize};
