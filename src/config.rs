//! Runtime configuration from environment variables

use crate::data::RegionDatabase;
use crate::metrics::{DEFAULT_STREAM_RATE, DEFAULT_WAGE_PER_JOB};
use crate::service::DEFAULT_LATENCY_MS;
use anyhow::Result;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub port: u16,
    /// JSON region file; the built-in dataset when unset
    pub region_data_path: Option<PathBuf>,
    pub fetch_latency_ms: RangeInclusive<u64>,
    pub wage_per_job: f64,
    pub stream_rate: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            region_data_path: None,
            fetch_latency_ms: DEFAULT_LATENCY_MS,
            wage_per_job: DEFAULT_WAGE_PER_JOB,
            stream_rate: DEFAULT_STREAM_RATE,
        }
    }
}

impl DashboardConfig {
    /// Read `PORT`, `REGION_DATA_PATH`, `FETCH_LATENCY_MIN_MS`,
    /// `FETCH_LATENCY_MAX_MS`, `WAGE_PER_JOB` and `STREAM_RATE`.
    /// Unset or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let latency_min = parse_or(lookup("FETCH_LATENCY_MIN_MS"), *defaults.fetch_latency_ms.start());
        let latency_max = parse_or(lookup("FETCH_LATENCY_MAX_MS"), *defaults.fetch_latency_ms.end());

        Self {
            port: parse_or(lookup("PORT"), defaults.port),
            region_data_path: lookup("REGION_DATA_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            fetch_latency_ms: latency_min..=latency_max,
            wage_per_job: parse_positive_or(lookup("WAGE_PER_JOB"), defaults.wage_per_job),
            stream_rate: parse_positive_or(lookup("STREAM_RATE"), defaults.stream_rate),
        }
    }

    /// Region database for this configuration
    pub fn load_database(&self) -> Result<RegionDatabase> {
        match &self.region_data_path {
            Some(path) => RegionDatabase::from_json_file(path),
            None => {
                tracing::info!("REGION_DATA_PATH not set - using built-in regions");
                Ok(RegionDatabase::builtin())
            }
        }
    }

    pub fn log_summary(&self) {
        tracing::info!("Configuration:");
        tracing::info!("  PORT: {}", self.port);
        match &self.region_data_path {
            Some(path) => tracing::info!("  REGION_DATA_PATH: {:?}", path),
            None => tracing::info!("  REGION_DATA_PATH: <built-in>"),
        }
        tracing::info!(
            "  FETCH_LATENCY_MS: {}..={}",
            self.fetch_latency_ms.start(),
            self.fetch_latency_ms.end()
        );
        tracing::info!("  WAGE_PER_JOB: {}", self.wage_per_job);
        tracing::info!("  STREAM_RATE: {}", self.stream_rate);
    }
}

fn parse_or<T: FromStr>(value: Option<String>, fallback: T) -> T {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(fallback)
}

fn parse_positive_or(value: Option<String>, fallback: f64) -> f64 {
    let parsed: f64 = parse_or(value, fallback);
    if parsed.is_finite() && parsed > 0.0 {
        parsed
    } else {
        fallback
    }
}
