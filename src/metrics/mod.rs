//! Calculators behind the dashboard panels
//!
//! Each calculator lives in its own module. All are pure functions of their
//! inputs; guarded divisions return `CalcError` or `None` instead of
//! propagating `NaN`/`Infinity`.

pub mod cost_of_capital;
pub mod disparity;
pub mod impact;
pub mod recoupment;

pub use cost_of_capital::{calculate_loan, compare_loan_costs, LoanCost, LoanDisparity, DEFAULT_PRINCIPAL, DEFAULT_TERM_YEARS};
pub use disparity::{
    capital_barriers, gap_summary, hotspot_status, labor_gaps, national_comparison, sector_leakage, trend_gap,
    CapitalBarriers, GapSummary, HotspotStatus, LaborGaps, NationalComparison, SectorLeakage, TrendGap,
};
pub use impact::{
    compute_impact, compute_impact_for_input, impact_breakdown, BreakdownRow, ImpactResult, ScenarioOutcome,
    SimulationInput, DEFAULT_DIRECT_JOBS, DEFAULT_WAGE_PER_JOB, DIRECT_JOBS_RANGE,
};
pub use recoupment::{calculate_recoupment, Recoupment, DEFAULT_STREAM_RATE};
