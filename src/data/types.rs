//! Region data model
//!
//! Every record is immutable once built and serializes to snake_case JSON.

use serde::{Deserialize, Serialize};

/// Region identity and demographics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionContext {
    pub id: String,
    pub name: String,
    pub state: String,
    pub population: u64,
    pub black_population_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

/// Headline card on the overview tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomicIndicator {
    pub id: String,
    pub label: String,
    pub value: String,
    pub trend: Trend,
    pub trend_label: String,
    pub context: String,
}

/// Labor market figures for Black workers, with White and national benchmarks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborStats {
    pub labor_force_participation_rate: f64,
    /// U-3
    pub official_unemployment_rate: f64,
    /// U-6
    pub underemployment_rate: f64,
    pub discouraged_workers_estimate: u64,

    pub white_labor_force_participation_rate: f64,
    pub white_official_unemployment_rate: f64,
    pub white_underemployment_rate: f64,

    pub national_black_unemployment_rate: f64,
}

/// Paired Black / White value for one capital-access measure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatePair {
    pub black: f64,
    pub white: f64,
}

impl RatePair {
    pub const fn new(black: f64, white: f64) -> Self {
        Self { black, white }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapitalMetrics {
    /// % of applicants denied
    pub denial_rate: RatePair,
    /// Average approved amount (USD)
    pub avg_loan_size: RatePair,
    /// Average interest rate (%)
    pub interest_rate: RatePair,
    /// % who did not apply fearing denial
    pub fear_of_rejection_rate: RatePair,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RfpStatus {
    Open,
    ClosingSoon,
}

/// Live contract opportunity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rfp {
    pub id: String,
    pub title: String,
    pub issuer: String,
    pub value: String,
    pub deadline: String,
    pub status: RfpStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartnerType {
    CapitalCdfi,
    TechnicalAssistance,
    Policy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategicPartner {
    pub name: String,
    #[serde(rename = "type")]
    pub partner_type: PartnerType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeakageScore {
    High,
    Medium,
    Low,
}

/// Regional industry sector with general-market and owner-adjusted multipliers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorData {
    pub id: String,
    pub name: String,

    /// General-market output multiplier
    pub base_output_multiplier: f64,
    /// General-market indirect jobs per direct job
    pub base_jobs_multiplier: f64,

    /// Output multiplier adjusted for Black-owned firms
    pub owner_adjusted_output_multiplier: f64,
    /// Jobs multiplier adjusted for Black-owned firms (local hiring)
    pub owner_adjusted_jobs_multiplier: f64,
    pub equity_adjustment_reason: String,

    pub leakage_score: LeakageScore,
    pub description: String,
    pub opportunity: String,

    /// Total annual market demand in the region (USD)
    pub regional_demand: f64,
    /// % of final demand met by imports (0-100)
    pub net_leakage_pct: f64,
    /// % of intermediate inputs that are imported (0-100)
    pub import_dependency: f64,

    pub top_anchors: Vec<String>,
    pub active_rfps: Vec<Rfp>,
    pub mobilization_partners: Vec<StrategicPartner>,
}

impl SectorData {
    /// (output, jobs) multiplier pair for the chosen ownership model
    pub fn multipliers(&self, use_owner_adjusted_model: bool) -> (f64, f64) {
        if use_owner_adjusted_model {
            (self.owner_adjusted_output_multiplier, self.owner_adjusted_jobs_multiplier)
        } else {
            (self.base_output_multiplier, self.base_jobs_multiplier)
        }
    }
}

/// Black / White outcome gap with a national benchmark
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapMetric {
    pub category: String,
    pub black_value: f64,
    pub white_value: f64,
    pub national_black_avg: f64,
    /// "$" or "%"
    pub unit: String,
    pub source: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotspotType {
    CensusTract,
    Neighborhood,
    County,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeographicHotspot {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub hotspot_type: HotspotType,
    pub population: u64,
    pub unemployment_rate: f64,
    pub median_income: f64,
    pub home_ownership_rate: f64,
    pub intervention_target: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    pub year: u16,
    pub black_value: f64,
    pub white_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalTrend {
    pub id: String,
    pub label: String,
    pub unit: String,
    pub series: Vec<HistoricalPoint>,
}

/// Data freshness labels per upstream source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceMetadata {
    pub bls_date: String,
    pub census_date: String,
    pub fred_date: String,
}

/// Everything the dashboard shows for one region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionDataBundle {
    pub context: RegionContext,
    pub indicators: Vec<EconomicIndicator>,
    pub labor_stats: LaborStats,
    pub capital_metrics: CapitalMetrics,
    pub sectors: Vec<SectorData>,
    pub gaps: Vec<GapMetric>,
    pub hotspots: Vec<GeographicHotspot>,
    pub historical_trends: Vec<HistoricalTrend>,
    pub source_metadata: SourceMetadata,
    /// RFC 3339 timestamp, stamped on every fetch
    #[serde(default)]
    pub last_updated: String,
}

impl RegionDataBundle {
    pub fn sector(&self, sector_id: &str) -> Option<&SectorData> {
        self.sectors.iter().find(|s| s.id == sector_id)
    }

    pub fn gap(&self, category: &str) -> Option<&GapMetric> {
        self.gaps.iter().find(|g| g.category == category)
    }

    pub fn trend(&self, trend_id: &str) -> Option<&HistoricalTrend> {
        self.historical_trends.iter().find(|t| t.id == trend_id)
    }
}

/// Entry in the region selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSummary {
    pub id: String,
    pub name: String,
}

/// Hypothetical intervention applied additively on top of a sector's multipliers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyScenario {
    pub id: String,
    pub name: String,
    pub description: String,
    pub impact_description: String,
    /// Added to the selected output multiplier; may be negative
    pub output_modifier: f64,
    /// Added to the selected jobs multiplier; may be negative
    pub jobs_modifier: f64,
}

impl PolicyScenario {
    /// Ad-hoc scenario with the given modifiers
    pub fn custom(output_modifier: f64, jobs_modifier: f64) -> Self {
        Self {
            id: "custom".to_string(),
            name: "Custom Scenario".to_string(),
            description: String::new(),
            impact_description: String::new(),
            output_modifier,
            jobs_modifier,
        }
    }

    pub fn is_baseline(&self) -> bool {
        self.output_modifier == 0.0 && self.jobs_modifier == 0.0
    }
}
