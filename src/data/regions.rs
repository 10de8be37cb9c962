//! Built-in regional dataset
//!
//! Mock figures modelled on BLS, Census ACS and FRED releases for the three
//! prototype metros. Each region is a hardcoded constructor so the dataset
//! stays readable next to its sources.

use super::types::*;

// ============================================================================
// Small constructors
// ============================================================================

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn indicator(id: &str, label: &str, value: &str, trend: Trend, trend_label: &str, context: &str) -> EconomicIndicator {
    EconomicIndicator {
        id: id.to_string(),
        label: label.to_string(),
        value: value.to_string(),
        trend,
        trend_label: trend_label.to_string(),
        context: context.to_string(),
    }
}

fn rfp(id: &str, title: &str, issuer: &str, value: &str, deadline: &str, status: RfpStatus) -> Rfp {
    Rfp {
        id: id.to_string(),
        title: title.to_string(),
        issuer: issuer.to_string(),
        value: value.to_string(),
        deadline: deadline.to_string(),
        status,
    }
}

fn partner(name: &str, partner_type: PartnerType) -> StrategicPartner {
    StrategicPartner { name: name.to_string(), partner_type }
}

fn gap(category: &str, black_value: f64, white_value: f64, national_black_avg: f64, unit: &str, source: &str) -> GapMetric {
    GapMetric {
        category: category.to_string(),
        black_value,
        white_value,
        national_black_avg,
        unit: unit.to_string(),
        source: source.to_string(),
    }
}

fn hotspot(
    id: &str,
    name: &str,
    hotspot_type: HotspotType,
    population: u64,
    unemployment_rate: f64,
    median_income: f64,
    home_ownership_rate: f64,
    intervention_target: &str,
) -> GeographicHotspot {
    GeographicHotspot {
        id: id.to_string(),
        name: name.to_string(),
        hotspot_type,
        population,
        unemployment_rate,
        median_income,
        home_ownership_rate,
        intervention_target: intervention_target.to_string(),
    }
}

fn trend(id: &str, label: &str, unit: &str, points: &[(u16, f64, f64)]) -> HistoricalTrend {
    HistoricalTrend {
        id: id.to_string(),
        label: label.to_string(),
        unit: unit.to_string(),
        series: points
            .iter()
            .map(|&(year, black_value, white_value)| HistoricalPoint { year, black_value, white_value })
            .collect(),
    }
}

fn source_metadata() -> SourceMetadata {
    SourceMetadata {
        bls_date: "Nov 2024 (Prelim)".to_string(),
        census_date: "2023 ACS 1-Year".to_string(),
        fred_date: "Q3 2024".to_string(),
    }
}

/// The five gap categories share labels, national averages and sources across regions
fn standard_gaps(income: (f64, f64), net_worth: (f64, f64), home: (f64, f64), equity: (f64, f64), denial: (f64, f64)) -> Vec<GapMetric> {
    vec![
        gap("Median HH Income", income.0, income.1, 52860.0, "$", "Census ACS"),
        gap("Median Net Worth", net_worth.0, net_worth.1, 44900.0, "$", "Fed Reserve SCF"),
        gap("Home Ownership", home.0, home.1, 45.7, "%", "Census Bureau"),
        gap("Business Equity", equity.0, equity.1, 68000.0, "$", "Annual Biz Survey"),
        gap("Loan Denial Rate", denial.0, denial.1, 35.0, "%", "Small Biz Credit Survey"),
    ]
}

// ============================================================================
// Memphis
// ============================================================================

pub fn memphis() -> RegionDataBundle {
    RegionDataBundle {
        context: RegionContext {
            id: "memphis".to_string(),
            name: "Memphis Metro".to_string(),
            state: "TN/MS/AR".to_string(),
            population: 1_340_000,
            black_population_pct: 48.2,
        },
        indicators: vec![
            indicator("unemp", "Black Unemployment (U-3)", "9.8%", Trend::Up, "+0.4% vs Q3", "Source: BLS Local Area Unemployment"),
            indicator("biz-own", "Black Biz Ownership", "2.1%", Trend::Flat, "No change", "Source: Annual Business Survey"),
            indicator("wage", "Median HH Income (Black)", "$41,200", Trend::Down, "-1.2% (Adj)", "Source: Census ACS 5-Year"),
        ],
        labor_stats: LaborStats {
            labor_force_participation_rate: 59.8,
            official_unemployment_rate: 9.8,
            underemployment_rate: 16.4,
            discouraged_workers_estimate: 14_500,
            white_labor_force_participation_rate: 64.2,
            white_official_unemployment_rate: 3.9,
            white_underemployment_rate: 7.2,
            national_black_unemployment_rate: 6.1,
        },
        capital_metrics: CapitalMetrics {
            denial_rate: RatePair::new(38.0, 14.0),
            avg_loan_size: RatePair::new(38_500.0, 112_000.0),
            interest_rate: RatePair::new(8.2, 5.9),
            fear_of_rejection_rate: RatePair::new(42.0, 18.0),
        },
        sectors: vec![
            SectorData {
                id: "care".to_string(),
                name: "Care Economy".to_string(),
                base_output_multiplier: 1.65,
                base_jobs_multiplier: 0.4,
                owner_adjusted_output_multiplier: 1.95,
                owner_adjusted_jobs_multiplier: 0.8,
                equity_adjustment_reason: "Higher local hiring retention (+Local Wages)".to_string(),
                leakage_score: LeakageScore::Low,
                description: "High labor intensity, wages stay local.".to_string(),
                opportunity: "Community-owned birthing centers.".to_string(),
                regional_demand: 4_200_000_000.0,
                net_leakage_pct: 15.0,
                import_dependency: 12.0,
                top_anchors: strings(&["Methodist Le Bonheur", "St. Jude Research", "Regional One Health"]),
                active_rfps: vec![
                    rfp("rfp-01", "Non-Emergency Medical Transport", "Methodist Healthcare", "$1.2M", "2025-06-15", RfpStatus::Open),
                    rfp("rfp-02", "Commercial Laundry Services", "Regional One", "$450k", "2025-05-30", RfpStatus::ClosingSoon),
                ],
                mobilization_partners: vec![
                    partner("River City Capital", PartnerType::CapitalCdfi),
                    partner("Black Business Association", PartnerType::TechnicalAssistance),
                ],
            },
            SectorData {
                id: "green_const".to_string(),
                name: "Green Construction".to_string(),
                base_output_multiplier: 1.85,
                base_jobs_multiplier: 0.7,
                owner_adjusted_output_multiplier: 1.70,
                owner_adjusted_jobs_multiplier: 0.95,
                equity_adjustment_reason: "Supply chain exclusion (-Output) but high local hiring (+Jobs)".to_string(),
                leakage_score: LeakageScore::Medium,
                description: "High input demands, high-wage trades.".to_string(),
                opportunity: "Weatherization contracts for aging housing.".to_string(),
                regional_demand: 1_800_000_000.0,
                net_leakage_pct: 35.0,
                import_dependency: 42.0,
                top_anchors: strings(&["City of Memphis (Housing)", "MLGW", "University of Memphis"]),
                active_rfps: vec![
                    rfp("rfp-03", "Residential Weatherization Pilot", "MLGW", "$3.5M", "2025-07-01", RfpStatus::Open),
                    rfp("rfp-04", "Campus Solar Retrofit", "Univ. of Memphis", "$850k", "2025-06-20", RfpStatus::Open),
                ],
                mobilization_partners: vec![
                    partner("Communities Unlimited", PartnerType::CapitalCdfi),
                    partner("Memphis Urban League", PartnerType::TechnicalAssistance),
                ],
            },
            SectorData {
                id: "tech_serv".to_string(),
                name: "Digital Services".to_string(),
                base_output_multiplier: 1.45,
                base_jobs_multiplier: 0.9,
                owner_adjusted_output_multiplier: 1.60,
                owner_adjusted_jobs_multiplier: 1.2,
                equity_adjustment_reason: "Remote workforce retention in-community (+Jobs)".to_string(),
                leakage_score: LeakageScore::High,
                description: "High wages, but spending leaks to software vendors.".to_string(),
                opportunity: "Data analytics for local gov anchors.".to_string(),
                regional_demand: 950_000_000.0,
                net_leakage_pct: 55.0,
                import_dependency: 28.0,
                top_anchors: strings(&["FedEx Logistics", "AutoZone HQ", "Shelby County Gov"]),
                active_rfps: vec![
                    rfp("rfp-05", "Cybersecurity Audit Services", "Shelby County", "$250k", "2025-05-15", RfpStatus::ClosingSoon),
                    rfp("rfp-06", "Supply Chain Data Analytics", "FedEx", "$2.0M", "2025-08-01", RfpStatus::Open),
                ],
                mobilization_partners: vec![
                    partner("Epicenter Memphis", PartnerType::TechnicalAssistance),
                    partner("Start Co.", PartnerType::TechnicalAssistance),
                ],
            },
            SectorData {
                id: "retail".to_string(),
                name: "General Retail".to_string(),
                base_output_multiplier: 1.25,
                base_jobs_multiplier: 0.2,
                owner_adjusted_output_multiplier: 1.45,
                owner_adjusted_jobs_multiplier: 0.35,
                equity_adjustment_reason: "Higher neighborhood spending circulation (+Output)".to_string(),
                leakage_score: LeakageScore::High,
                description: "Inventory is imported. Low wages.".to_string(),
                opportunity: "Supply chain localization.".to_string(),
                regional_demand: 6_200_000_000.0,
                net_leakage_pct: 78.0,
                import_dependency: 85.0,
                top_anchors: strings(&["Memphis Intl Airport", "Beale Street Mgmt", "Kroger Delta Div"]),
                active_rfps: vec![
                    rfp("rfp-07", "Concession Vendor - Terminal B", "Memphis Airport", "$500k", "2025-09-01", RfpStatus::Open),
                ],
                mobilization_partners: vec![partner("Hope Credit Union", PartnerType::CapitalCdfi)],
            },
        ],
        gaps: standard_gaps(
            (41_200.0, 78_500.0),
            (24_000.0, 188_000.0),
            (44.0, 72.0),
            (58_000.0, 450_000.0),
            (38.0, 14.0),
        ),
        hotspots: vec![
            hotspot("orange-mound", "Orange Mound", HotspotType::Neighborhood, 8_500, 24.5, 22_400.0, 38.0, "Stabilization Grants"),
            hotspot("whitehaven", "Whitehaven", HotspotType::Neighborhood, 45_000, 11.2, 42_000.0, 58.0, "Growth Capital"),
            hotspot("germantown", "Germantown", HotspotType::County, 39_000, 3.2, 118_000.0, 82.0, "Asset Retention"),
        ],
        historical_trends: vec![
            trend("unemployment", "Unemployment Rate (U-3)", "%", &[
                (2015, 12.5, 4.8), (2016, 11.2, 4.5), (2017, 10.5, 4.2), (2018, 9.8, 4.0), (2019, 8.9, 3.8),
                (2020, 14.2, 5.5), (2021, 11.5, 4.5), (2022, 10.1, 4.1), (2023, 9.9, 4.0), (2024, 9.8, 3.9),
            ]),
            trend("income", "Median Household Income", "$", &[
                (2015, 32_000.0, 62_000.0), (2016, 33_500.0, 64_500.0), (2017, 34_200.0, 66_800.0),
                (2018, 35_800.0, 69_000.0), (2019, 37_500.0, 71_500.0), (2020, 36_800.0, 72_000.0),
                (2021, 38_200.0, 74_500.0), (2022, 39_500.0, 76_000.0), (2023, 40_800.0, 77_800.0),
                (2024, 41_200.0, 78_500.0),
            ]),
            trend("wealth", "Median Net Worth", "$", &[
                (2015, 18_000.0, 140_000.0), (2017, 19_500.0, 152_000.0), (2019, 21_000.0, 165_000.0),
                (2021, 22_500.0, 178_000.0), (2023, 24_000.0, 188_000.0),
            ]),
        ],
        source_metadata: source_metadata(),
        last_updated: String::new(),
    }
}

// ============================================================================
// Birmingham
// ============================================================================

pub fn birmingham() -> RegionDataBundle {
    RegionDataBundle {
        context: RegionContext {
            id: "birmingham".to_string(),
            name: "Birmingham Metro".to_string(),
            state: "AL".to_string(),
            population: 1_100_000,
            black_population_pct: 28.5,
        },
        indicators: vec![
            indicator("unemp", "Black Unemployment (U-3)", "7.2%", Trend::Down, "-0.2% vs Q3", "Source: BLS Local Area Unemployment"),
            indicator("biz-own", "Black Biz Ownership", "1.8%", Trend::Up, "+0.1% growth", "Source: Annual Business Survey"),
            indicator("wage", "Median HH Income (Black)", "$39,500", Trend::Flat, "0.0%", "Source: Census ACS 5-Year"),
        ],
        labor_stats: LaborStats {
            labor_force_participation_rate: 57.2,
            official_unemployment_rate: 7.2,
            underemployment_rate: 13.8,
            discouraged_workers_estimate: 9_200,
            white_labor_force_participation_rate: 62.1,
            white_official_unemployment_rate: 3.1,
            white_underemployment_rate: 6.8,
            national_black_unemployment_rate: 6.1,
        },
        capital_metrics: CapitalMetrics {
            denial_rate: RatePair::new(41.0, 12.0),
            avg_loan_size: RatePair::new(32_000.0, 98_000.0),
            interest_rate: RatePair::new(8.5, 6.1),
            fear_of_rejection_rate: RatePair::new(45.0, 15.0),
        },
        sectors: vec![
            SectorData {
                id: "metal".to_string(),
                name: "Advanced Manufacturing".to_string(),
                base_output_multiplier: 2.1,
                base_jobs_multiplier: 1.2,
                owner_adjusted_output_multiplier: 2.05,
                owner_adjusted_jobs_multiplier: 1.5,
                equity_adjustment_reason: "Hiring in high-unemployment zones (+Jobs)".to_string(),
                leakage_score: LeakageScore::Low,
                description: "Legacy infrastructure allows for high value capture.".to_string(),
                opportunity: "Component fabrication for EV supply chains.".to_string(),
                regional_demand: 5_100_000_000.0,
                net_leakage_pct: 22.0,
                import_dependency: 35.0,
                top_anchors: strings(&["Mercedes-Benz US", "Honda Manufacturing AL", "U.S. Steel"]),
                active_rfps: vec![
                    rfp("rfp-b1", "HVAC Component Fabrication", "Mercedes-Benz", "$3.5M", "2025-08-01", RfpStatus::Open),
                    rfp("rfp-b2", "Industrial Facility Cleaning", "Honda", "$800k", "2025-06-15", RfpStatus::Open),
                ],
                mobilization_partners: vec![
                    partner("Birmingham Business Alliance", PartnerType::TechnicalAssistance),
                    partner("Hope Credit Union (AL)", PartnerType::CapitalCdfi),
                ],
            },
            SectorData {
                id: "tech_serv".to_string(),
                name: "Health Tech Services".to_string(),
                base_output_multiplier: 1.6,
                base_jobs_multiplier: 0.8,
                owner_adjusted_output_multiplier: 1.75,
                owner_adjusted_jobs_multiplier: 1.1,
                equity_adjustment_reason: "Targeted training pipelines (+Jobs)".to_string(),
                leakage_score: LeakageScore::Medium,
                description: "Strong anchor institutions (UAB) drive demand.".to_string(),
                opportunity: "HIPAA-compliant data processing firms.".to_string(),
                regional_demand: 2_800_000_000.0,
                net_leakage_pct: 45.0,
                import_dependency: 30.0,
                top_anchors: strings(&["UAB Health System", "Regions Bank", "Blue Cross AL"]),
                active_rfps: vec![
                    rfp("rfp-b3", "Medical Billing Data Audit", "UAB Health", "$750k", "2025-07-20", RfpStatus::Open),
                ],
                mobilization_partners: vec![partner("Innovation Depot", PartnerType::TechnicalAssistance)],
            },
            SectorData {
                id: "food".to_string(),
                name: "Food Systems".to_string(),
                base_output_multiplier: 1.3,
                base_jobs_multiplier: 0.3,
                owner_adjusted_output_multiplier: 1.55,
                owner_adjusted_jobs_multiplier: 0.6,
                equity_adjustment_reason: "Local sourcing co-ops (+Output)".to_string(),
                leakage_score: LeakageScore::High,
                description: "Most food is imported from outside the state.".to_string(),
                opportunity: "Urban ag-tech and distribution co-ops.".to_string(),
                regional_demand: 3_400_000_000.0,
                net_leakage_pct: 85.0,
                import_dependency: 90.0,
                top_anchors: strings(&["Birmingham City Schools", "Piggly Wiggly Dist."]),
                active_rfps: vec![
                    rfp("rfp-b4", "Fresh Produce Supply", "City Schools", "$1.5M", "2025-05-30", RfpStatus::ClosingSoon),
                ],
                mobilization_partners: vec![partner("REV Birmingham", PartnerType::TechnicalAssistance)],
            },
        ],
        gaps: standard_gaps(
            (39_500.0, 72_000.0),
            (19_000.0, 165_000.0),
            (51.0, 76.0),
            (42_000.0, 410_000.0),
            (41.0, 12.0),
        ),
        hotspots: vec![
            hotspot("ensley", "Ensley", HotspotType::Neighborhood, 3_200, 18.2, 24_500.0, 41.0, "Industrial Revitalization"),
            hotspot("mountain-brook", "Mountain Brook", HotspotType::Neighborhood, 20_000, 2.1, 130_000.0, 88.0, "None"),
        ],
        historical_trends: vec![
            trend("unemployment", "Unemployment Rate (U-3)", "%", &[
                (2015, 9.5, 3.8), (2016, 8.8, 3.6), (2017, 8.2, 3.4), (2018, 7.5, 3.2), (2019, 6.8, 3.0),
                (2020, 11.2, 4.8), (2021, 8.5, 3.5), (2022, 7.8, 3.3), (2023, 7.4, 3.2), (2024, 7.2, 3.1),
            ]),
            trend("income", "Median Household Income", "$", &[
                (2015, 30_000.0, 58_000.0), (2016, 31_000.0, 60_000.0), (2017, 32_500.0, 62_500.0),
                (2018, 34_000.0, 64_000.0), (2019, 35_500.0, 66_000.0), (2020, 34_500.0, 66_500.0),
                (2021, 36_000.0, 68_000.0), (2022, 37_500.0, 69_500.0), (2023, 38_800.0, 71_000.0),
                (2024, 39_500.0, 72_000.0),
            ]),
            trend("wealth", "Median Net Worth", "$", &[
                (2015, 15_000.0, 125_000.0), (2017, 16_000.0, 135_000.0), (2019, 17_500.0, 145_000.0),
                (2021, 18_200.0, 155_000.0), (2023, 19_000.0, 165_000.0),
            ]),
        ],
        source_metadata: source_metadata(),
        last_updated: String::new(),
    }
}

// ============================================================================
// Atlanta
// ============================================================================

pub fn atlanta() -> RegionDataBundle {
    RegionDataBundle {
        context: RegionContext {
            id: "atlanta".to_string(),
            name: "Atlanta Metro".to_string(),
            state: "GA".to_string(),
            population: 6_100_000,
            black_population_pct: 33.6,
        },
        indicators: vec![
            indicator("unemp", "Black Unemployment (U-3)", "5.8%", Trend::Down, "-0.5% vs Q3", "Source: BLS Local Area Unemployment"),
            indicator("biz-own", "Black Biz Ownership", "7.4%", Trend::Up, "Rapid growth", "Source: Annual Business Survey"),
            indicator("wage", "Median HH Income (Black)", "$56,000", Trend::Up, "+2.1%", "Source: Census ACS 5-Year"),
        ],
        labor_stats: LaborStats {
            labor_force_participation_rate: 66.5,
            official_unemployment_rate: 5.8,
            underemployment_rate: 10.1,
            discouraged_workers_estimate: 18_500,
            white_labor_force_participation_rate: 70.2,
            white_official_unemployment_rate: 2.8,
            white_underemployment_rate: 5.5,
            national_black_unemployment_rate: 6.1,
        },
        capital_metrics: CapitalMetrics {
            denial_rate: RatePair::new(32.0, 11.0),
            avg_loan_size: RatePair::new(52_000.0, 145_000.0),
            interest_rate: RatePair::new(7.8, 5.5),
            fear_of_rejection_rate: RatePair::new(35.0, 12.0),
        },
        sectors: vec![
            SectorData {
                id: "fintech".to_string(),
                name: "FinTech & Payments".to_string(),
                base_output_multiplier: 2.4,
                base_jobs_multiplier: 1.5,
                owner_adjusted_output_multiplier: 2.6,
                owner_adjusted_jobs_multiplier: 1.9,
                equity_adjustment_reason: "High wage retention within community (+Induced)".to_string(),
                leakage_score: LeakageScore::Low,
                description: "Region is a global hub for transaction processing.".to_string(),
                opportunity: "Black-owned payment gateways and compliance firms.".to_string(),
                regional_demand: 12_500_000_000.0,
                net_leakage_pct: 18.0,
                import_dependency: 15.0,
                top_anchors: strings(&["NCR Corporation", "Global Payments", "Equifax"]),
                active_rfps: vec![
                    rfp("rfp-a1", "Vendor Payment System Audit", "Global Payments", "$600k", "2025-07-01", RfpStatus::Open),
                ],
                mobilization_partners: vec![
                    partner("Russell Innovation Center", PartnerType::TechnicalAssistance),
                    partner("Access to Capital for Entrepreneurs", PartnerType::CapitalCdfi),
                ],
            },
            SectorData {
                id: "film".to_string(),
                name: "Media & Entertainment".to_string(),
                base_output_multiplier: 1.9,
                base_jobs_multiplier: 1.1,
                owner_adjusted_output_multiplier: 2.1,
                owner_adjusted_jobs_multiplier: 1.4,
                equity_adjustment_reason: "Local diverse casting and crew (+Jobs)".to_string(),
                leakage_score: LeakageScore::Medium,
                description: "High spend, but production often uses imported talent.".to_string(),
                opportunity: "Post-production and VFX studios.".to_string(),
                regional_demand: 8_200_000_000.0,
                net_leakage_pct: 42.0,
                import_dependency: 55.0,
                top_anchors: strings(&["Tyler Perry Studios", "Netflix (Atlanta Hub)", "Turner Broadcasting"]),
                active_rfps: vec![
                    rfp("rfp-a2", "Set Catering - Q3 Production", "Netflix", "$250k", "2025-05-20", RfpStatus::ClosingSoon),
                ],
                mobilization_partners: vec![partner("Invest Atlanta", PartnerType::Policy)],
            },
            SectorData {
                id: "logistics".to_string(),
                name: "Logistics & Warehousing".to_string(),
                base_output_multiplier: 1.4,
                base_jobs_multiplier: 0.5,
                owner_adjusted_output_multiplier: 1.55,
                owner_adjusted_jobs_multiplier: 0.7,
                equity_adjustment_reason: "Owner-operator wealth accumulation (+Output)".to_string(),
                leakage_score: LeakageScore::Low,
                description: "Hub for Southeast distribution.".to_string(),
                opportunity: "Last-mile delivery fleets (owner-operator models).".to_string(),
                regional_demand: 7_100_000_000.0,
                net_leakage_pct: 30.0,
                import_dependency: 25.0,
                top_anchors: strings(&["Delta Air Lines", "Home Depot", "UPS"]),
                active_rfps: vec![
                    rfp("rfp-a3", "Last Mile Courier Svc", "UPS Supply Chain", "$1.8M", "2025-08-15", RfpStatus::Open),
                ],
                mobilization_partners: vec![partner("Atlanta Wealth Building Initiative", PartnerType::TechnicalAssistance)],
            },
        ],
        gaps: standard_gaps(
            (56_000.0, 92_000.0),
            (32_000.0, 210_000.0),
            (48.0, 74.0),
            (95_000.0, 580_000.0),
            (32.0, 11.0),
        ),
        hotspots: vec![
            hotspot("bankhead", "Bankhead", HotspotType::Neighborhood, 12_000, 14.5, 31_000.0, 35.0, "Affordable Housing"),
            hotspot("buckhead", "Buckhead", HotspotType::Neighborhood, 80_000, 2.8, 105_000.0, 65.0, "None"),
        ],
        historical_trends: vec![
            trend("unemployment", "Unemployment Rate (U-3)", "%", &[
                (2015, 8.2, 3.5), (2016, 7.5, 3.4), (2017, 7.0, 3.2), (2018, 6.5, 3.0), (2019, 5.9, 2.8),
                (2020, 9.8, 4.2), (2021, 7.2, 3.1), (2022, 6.4, 2.9), (2023, 6.0, 2.8), (2024, 5.8, 2.8),
            ]),
            trend("income", "Median Household Income", "$", &[
                (2015, 42_000.0, 72_000.0), (2016, 44_000.0, 75_000.0), (2017, 46_000.0, 78_000.0),
                (2018, 48_500.0, 81_000.0), (2019, 51_000.0, 84_000.0), (2020, 50_000.0, 85_000.0),
                (2021, 52_000.0, 87_500.0), (2022, 54_000.0, 89_000.0), (2023, 55_000.0, 91_000.0),
                (2024, 56_000.0, 92_000.0),
            ]),
            trend("wealth", "Median Net Worth", "$", &[
                (2015, 22_000.0, 160_000.0), (2017, 24_500.0, 172_000.0), (2019, 27_000.0, 185_000.0),
                (2021, 29_500.0, 198_000.0), (2023, 32_000.0, 210_000.0),
            ]),
        ],
        source_metadata: source_metadata(),
        last_updated: String::new(),
    }
}

/// Built-in regions with their selector labels, in display order
pub fn builtin_regions() -> Vec<(RegionSummary, RegionDataBundle)> {
    vec![
        (RegionSummary { id: "memphis".to_string(), name: "Memphis, TN".to_string() }, memphis()),
        (RegionSummary { id: "birmingham".to_string(), name: "Birmingham, AL".to_string() }, birmingham()),
        (RegionSummary { id: "atlanta".to_string(), name: "Atlanta, GA".to_string() }, atlanta()),
    ]
}
