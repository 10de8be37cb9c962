//! MULTIPLIER IMPACT MODEL
//!
//! Baseline vs. policy-adjusted job and output figures for one sector.
//!
//! A sector carries two multiplier pairs (general market and owner adjusted).
//! A policy scenario adds its modifiers on top of whichever pair is selected:
//!
//! ```text
//! indirect = round(direct × jobs_multiplier)
//! total    = direct + indirect
//! output   = direct × wage_per_job × output_multiplier
//! ```
//!
//! Effective multipliers are never clamped. A policy with negative modifiers
//! can push them below zero; the result carries `negative_multiplier` so
//! callers can surface it.

use crate::data::{PolicyScenario, SectorData};
use crate::utils::round_half_up;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Annual wage used to convert jobs into output (USD)
pub const DEFAULT_WAGE_PER_JOB: f64 = 65_000.0;

/// Direct-jobs range offered by the simulator controls
pub const DIRECT_JOBS_RANGE: RangeInclusive<u32> = 10..=500;

/// Default direct-jobs selection
pub const DEFAULT_DIRECT_JOBS: u32 = 50;

/// Everything the simulator needs besides the sector itself
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationInput {
    pub direct_jobs: u32,
    pub use_owner_adjusted_model: bool,
    pub wage_per_job: f64,
    pub policy: PolicyScenario,
}

/// Jobs and output under one multiplier regime
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub output_multiplier: f64,
    pub jobs_multiplier: f64,
    /// Indirect + induced jobs; negative only under a negative multiplier
    pub indirect_jobs: i64,
    pub total_jobs: i64,
    pub output: f64,
}

impl ScenarioOutcome {
    fn compute(direct_jobs: u32, wage_per_job: f64, output_multiplier: f64, jobs_multiplier: f64) -> Self {
        let direct = f64::from(direct_jobs);
        let indirect_jobs = round_half_up(direct * jobs_multiplier);

        Self {
            output_multiplier,
            jobs_multiplier,
            indirect_jobs,
            total_jobs: i64::from(direct_jobs) + indirect_jobs,
            output: direct * wage_per_job * output_multiplier,
        }
    }
}

/// Result of `compute_impact`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactResult {
    pub direct_jobs: u32,
    pub wage_per_job: f64,
    pub use_owner_adjusted_model: bool,
    pub baseline: ScenarioOutcome,
    pub policy: ScenarioOutcome,
    /// policy total jobs - baseline total jobs
    pub job_gain: i64,
    /// policy output - baseline output (the "policy dividend")
    pub output_gain: f64,
    /// An effective multiplier (baseline or policy) is below zero
    pub negative_multiplier: bool,
}

/// Compute baseline and policy-adjusted impact for one sector
pub fn compute_impact(
    sector: &SectorData,
    policy: &PolicyScenario,
    direct_jobs: u32,
    use_owner_adjusted_model: bool,
    wage_per_job: f64,
) -> ImpactResult {
    // STEP 1: Select the multiplier pair for the ownership model
    let (base_output, base_jobs) = sector.multipliers(use_owner_adjusted_model);

    // STEP 2: Baseline
    let baseline = ScenarioOutcome::compute(direct_jobs, wage_per_job, base_output, base_jobs);

    // STEP 3-4: Policy modifiers are additive, unclamped
    let policy_outcome = ScenarioOutcome::compute(
        direct_jobs,
        wage_per_job,
        base_output + policy.output_modifier,
        base_jobs + policy.jobs_modifier,
    );

    // STEP 5: Deltas
    let negative_multiplier = [baseline, policy_outcome]
        .iter()
        .any(|o| o.output_multiplier < 0.0 || o.jobs_multiplier < 0.0);

    ImpactResult {
        direct_jobs,
        wage_per_job,
        use_owner_adjusted_model,
        baseline,
        policy: policy_outcome,
        job_gain: policy_outcome.total_jobs - baseline.total_jobs,
        output_gain: policy_outcome.output - baseline.output,
        negative_multiplier,
    }
}

/// `compute_impact` driven by a `SimulationInput`
pub fn compute_impact_for_input(sector: &SectorData, input: &SimulationInput) -> ImpactResult {
    compute_impact(
        sector,
        &input.policy,
        input.direct_jobs,
        input.use_owner_adjusted_model,
        input.wage_per_job,
    )
}

/// One stacked bar of the simulator chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownRow {
    pub name: String,
    pub direct: i64,
    pub indirect_induced: i64,
    pub policy_boost: i64,
}

/// Chart rows: "Baseline" and "With Policy".
///
/// The policy bar stacks the baseline indirect jobs plus the extra indirect
/// jobs the policy adds, so the boost segment shows only the difference.
pub fn impact_breakdown(result: &ImpactResult) -> Vec<BreakdownRow> {
    let direct = i64::from(result.direct_jobs);
    vec![
        BreakdownRow {
            name: "Baseline".to_string(),
            direct,
            indirect_induced: result.baseline.indirect_jobs,
            policy_boost: 0,
        },
        BreakdownRow {
            name: "With Policy".to_string(),
            direct,
            indirect_induced: result.baseline.indirect_jobs,
            policy_boost: result.policy.indirect_jobs - result.baseline.indirect_jobs,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{baseline_policy, find_policy, regions};
    use approx::assert_relative_eq;

    fn care_sector() -> SectorData {
        regions::memphis().sector("care").cloned().unwrap()
    }

    #[test]
    fn test_procurement_scenario_jobs() {
        // care: jobs 0.4, procurement +0.15 → round(50 × 0.55) = 28
        let policy = find_policy("procurement").unwrap();
        let result = compute_impact(&care_sector(), &policy, 50, false, DEFAULT_WAGE_PER_JOB);

        assert_eq!(result.baseline.indirect_jobs, 20);
        assert_eq!(result.baseline.total_jobs, 70);
        assert_eq!(result.policy.indirect_jobs, 28);
        assert_eq!(result.policy.total_jobs, 78);
        assert_eq!(result.job_gain, 8);
    }

    #[test]
    fn test_baseline_output() {
        let result = compute_impact(&care_sector(), &baseline_policy(), 50, false, DEFAULT_WAGE_PER_JOB);
        assert_relative_eq!(result.baseline.output, 5_362_500.0, epsilon = 1e-6);
    }

    #[test]
    fn test_no_intervention_is_noop() {
        let result = compute_impact(&care_sector(), &baseline_policy(), 120, true, DEFAULT_WAGE_PER_JOB);
        assert_eq!(result.policy.total_jobs, result.baseline.total_jobs);
        assert_eq!(result.job_gain, 0);
        assert_eq!(result.output_gain, 0.0);
        assert!(!result.negative_multiplier);
    }

    #[test]
    fn test_owner_adjusted_selects_second_pair() {
        let result = compute_impact(&care_sector(), &baseline_policy(), 50, true, DEFAULT_WAGE_PER_JOB);
        assert_eq!(result.baseline.jobs_multiplier, 0.8);
        assert_eq!(result.baseline.indirect_jobs, 40);
        assert_relative_eq!(result.baseline.output, 50.0 * 65_000.0 * 1.95, epsilon = 1e-6);
    }

    #[test]
    fn test_output_dividend() {
        // capital fund: +0.55 output → 50 × 65000 × 0.55
        let policy = find_policy("capital").unwrap();
        let result = compute_impact(&care_sector(), &policy, 50, false, DEFAULT_WAGE_PER_JOB);
        assert_relative_eq!(result.output_gain, 1_787_500.0, epsilon = 1e-3);
    }

    #[test]
    fn test_negative_multiplier_is_flagged_not_clamped() {
        let policy = PolicyScenario::custom(-2.0, -1.0);
        let result = compute_impact(&care_sector(), &policy, 100, false, DEFAULT_WAGE_PER_JOB);

        assert!(result.negative_multiplier);
        assert_relative_eq!(result.policy.jobs_multiplier, -0.6, epsilon = 1e-12);
        assert_eq!(result.policy.indirect_jobs, -60);
        assert_eq!(result.policy.total_jobs, 40);
        assert!(result.policy.output < 0.0);
    }

    #[test]
    fn test_breakdown_rows() {
        let policy = find_policy("hiring").unwrap();
        let result = compute_impact(&care_sector(), &policy, 50, false, DEFAULT_WAGE_PER_JOB);
        let rows = impact_breakdown(&result);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].policy_boost, 0);
        assert_eq!(rows[1].indirect_induced, 20);
        // round(50 × 0.85) = 43 → boost 23
        assert_eq!(rows[1].policy_boost, 23);
    }

    #[test]
    fn test_input_wrapper_matches_direct_call() {
        let input = SimulationInput {
            direct_jobs: 200,
            use_owner_adjusted_model: true,
            wage_per_job: DEFAULT_WAGE_PER_JOB,
            policy: find_policy("hiring").unwrap(),
        };
        let sector = care_sector();
        assert_eq!(
            compute_impact_for_input(&sector, &input),
            compute_impact(&sector, &input.policy, 200, true, DEFAULT_WAGE_PER_JOB)
        );
    }
}
