//! Region Analysis - every derived metric for one region in a single record
//!
//! Combines the disparity calculators with the default loan comparison so the
//! equity and capital panels can render from one payload.

use crate::data::RegionDataBundle;
use crate::metrics::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionAnalysis {
    pub region_id: String,
    pub region_name: String,
    pub capital: CapitalBarriers,
    /// `None` when the region's interest rates are not valid loan rates
    pub loan_disparity: Option<LoanDisparity>,
    pub labor: LaborGaps,
    pub gaps: Vec<GapSummary>,
    pub trends: Vec<TrendGap>,
    pub hotspots: Vec<HotspotStatus>,
    pub sectors: Vec<SectorLeakage>,
    pub crisis_hotspot_count: usize,
    /// Sum of leakage across sectors (USD)
    pub total_leakage: f64,
}

impl RegionAnalysis {
    pub fn build(bundle: &RegionDataBundle) -> Self {
        let metro_rate = bundle.labor_stats.official_unemployment_rate;

        let loan_disparity = match compare_loan_costs(
            DEFAULT_PRINCIPAL,
            &bundle.capital_metrics.interest_rate,
            DEFAULT_TERM_YEARS,
        ) {
            Ok(disparity) => Some(disparity),
            Err(e) => {
                tracing::warn!(region = %bundle.context.id, "Skipping loan comparison: {}", e);
                None
            }
        };

        let hotspots: Vec<HotspotStatus> = bundle
            .hotspots
            .iter()
            .map(|h| hotspot_status(h, metro_rate))
            .collect();

        let sectors: Vec<SectorLeakage> = bundle.sectors.iter().map(sector_leakage).collect();

        Self {
            region_id: bundle.context.id.clone(),
            region_name: bundle.context.name.clone(),
            capital: capital_barriers(&bundle.capital_metrics),
            loan_disparity,
            labor: labor_gaps(&bundle.labor_stats),
            gaps: bundle.gaps.iter().map(gap_summary).collect(),
            trends: bundle.historical_trends.iter().filter_map(trend_gap).collect(),
            crisis_hotspot_count: hotspots.iter().filter(|h| h.is_crisis).count(),
            total_leakage: sectors.iter().map(|s| s.leakage_amount).sum(),
            hotspots,
            sectors,
        }
    }
}
