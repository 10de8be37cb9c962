//! DISPARITY METRICS
//!
//! Ratios and gaps derived from a region's raw figures. Every ratio whose
//! denominator is zero is `None` rather than `Infinity`/`NaN`.

use crate::data::{CapitalMetrics, GapMetric, GeographicHotspot, HistoricalTrend, LaborStats, RfpStatus, SectorData};
use crate::utils::{percent_change, safe_ratio};
use serde::{Deserialize, Serialize};

/// A hotspot is in crisis above this multiple of the metro U-3 rate
pub const CRISIS_THRESHOLD: f64 = 1.5;

// ============================================================================
// Capital barriers
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapitalBarriers {
    /// Black denial rate / White denial rate
    pub denial_disparity: Option<f64>,
    /// White avg loan / Black avg loan
    pub loan_size_disparity: Option<f64>,
    /// Black rate - White rate (percentage points)
    pub interest_premium: f64,
    /// Black avg loan / White avg loan
    pub cents_on_the_dollar: Option<f64>,
}

pub fn capital_barriers(capital: &CapitalMetrics) -> CapitalBarriers {
    CapitalBarriers {
        denial_disparity: safe_ratio(capital.denial_rate.black, capital.denial_rate.white),
        loan_size_disparity: safe_ratio(capital.avg_loan_size.white, capital.avg_loan_size.black),
        interest_premium: capital.interest_rate.black - capital.interest_rate.white,
        cents_on_the_dollar: safe_ratio(capital.avg_loan_size.black, capital.avg_loan_size.white),
    }
}

// ============================================================================
// Labor market
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaborGaps {
    /// U-6 minus U-3
    pub hidden_unemployed_rate: f64,
    /// White LFPR - Black LFPR
    pub participation_gap: f64,
    /// Black U-6 / White U-6
    pub u6_gap_multiplier: Option<f64>,
    /// Local Black U-3 - national Black U-3
    pub gap_to_national: f64,
}

pub fn labor_gaps(labor: &LaborStats) -> LaborGaps {
    LaborGaps {
        hidden_unemployed_rate: labor.underemployment_rate - labor.official_unemployment_rate,
        participation_gap: labor.white_labor_force_participation_rate - labor.labor_force_participation_rate,
        u6_gap_multiplier: safe_ratio(labor.underemployment_rate, labor.white_underemployment_rate),
        gap_to_national: labor.official_unemployment_rate - labor.national_black_unemployment_rate,
    }
}

// ============================================================================
// Wealth / outcome gaps
// ============================================================================

/// Local Black value against the national Black average
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NationalComparison {
    pub diff: f64,
    pub pct_diff: Option<f64>,
    pub is_better: bool,
}

pub fn national_comparison(local: f64, national: f64) -> NationalComparison {
    let diff = local - national;
    NationalComparison {
        diff,
        pct_diff: percent_change(local, national),
        is_better: diff > 0.0,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapSummary {
    pub category: String,
    pub unit: String,
    /// White value / Black value
    pub gap_multiplier: Option<f64>,
    pub national: NationalComparison,
}

pub fn gap_summary(gap: &GapMetric) -> GapSummary {
    GapSummary {
        category: gap.category.clone(),
        unit: gap.unit.clone(),
        gap_multiplier: safe_ratio(gap.white_value, gap.black_value),
        national: national_comparison(gap.black_value, gap.national_black_avg),
    }
}

// ============================================================================
// Historical trends
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendGap {
    pub id: String,
    pub start_year: u16,
    pub end_year: u16,
    pub start_gap: f64,
    pub end_gap: f64,
    pub gap_change: f64,
    pub is_widening: bool,
}

/// Absolute Black/White gap at the first and last points; `None` for an empty series
pub fn trend_gap(trend: &HistoricalTrend) -> Option<TrendGap> {
    let first = trend.series.first()?;
    let last = trend.series.last()?;

    let start_gap = (first.white_value - first.black_value).abs();
    let end_gap = (last.white_value - last.black_value).abs();
    let gap_change = end_gap - start_gap;

    Some(TrendGap {
        id: trend.id.clone(),
        start_year: first.year,
        end_year: last.year,
        start_gap,
        end_gap,
        gap_change,
        is_widening: gap_change > 0.0,
    })
}

// ============================================================================
// Hotspots
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotspotStatus {
    pub id: String,
    pub name: String,
    /// Hotspot rate - metro Black U-3
    pub unemployment_gap: f64,
    pub is_crisis: bool,
}

pub fn hotspot_status(hotspot: &GeographicHotspot, metro_unemployment_rate: f64) -> HotspotStatus {
    HotspotStatus {
        id: hotspot.id.clone(),
        name: hotspot.name.clone(),
        unemployment_gap: hotspot.unemployment_rate - metro_unemployment_rate,
        is_crisis: hotspot.unemployment_rate > metro_unemployment_rate * CRISIS_THRESHOLD,
    }
}

// ============================================================================
// Sector leakage
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorLeakage {
    pub sector_id: String,
    /// Demand met by imports (USD)
    pub leakage_amount: f64,
    pub retention_pct: f64,
    pub open_rfp_count: usize,
}

pub fn sector_leakage(sector: &SectorData) -> SectorLeakage {
    SectorLeakage {
        sector_id: sector.id.clone(),
        leakage_amount: sector.regional_demand * sector.net_leakage_pct / 100.0,
        retention_pct: 100.0 - sector.net_leakage_pct,
        open_rfp_count: sector
            .active_rfps
            .iter()
            .filter(|r| r.status == RfpStatus::Open)
            .count(),
    }
}
