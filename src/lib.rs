//! Regional Equity Dashboard Engine
//!
//! Computation core of a regional economic-equity dashboard: a sector
//! multiplier impact model, cost-of-capital and recoupment calculators,
//! disparity metrics, and an async region data service.
//!
//! - `data/`: region data model, built-in regions, policy catalog
//! - `metrics/`: calculators (impact, cost of capital, recoupment, disparity)
//! - `analysis`: all derived metrics for one region
//! - `service`: async region fetch with simulated latency
//! - `view_state`: dashboard selection and load state
//! - `api_server`: REST API (`api` feature)

pub mod analysis;
pub mod config;
pub mod data;
pub mod error;
pub mod metrics;
pub mod service;
pub mod utils;
pub mod view_state;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use analysis::RegionAnalysis;
pub use config::DashboardConfig;
pub use data::{
    find_policy, policy_scenarios, PolicyScenario, RegionDataBundle, RegionDatabase, RegionSummary, SectorData,
};
pub use error::{CalcError, DataError, CONNECTIVITY_ERROR_MESSAGE};
pub use metrics::*;
pub use service::EconomicDataService;
pub use view_state::{simulate, DashboardSelection, DashboardSession, DashboardTab, FetchTicket, LoadState};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
