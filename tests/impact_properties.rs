// Property tests for the impact model and calculators
//
// Run with: cargo test --test impact_properties

use equity_dashboard_rust::data::regions;
use equity_dashboard_rust::{calculate_loan, calculate_recoupment, compute_impact, PolicyScenario, SectorData};
use proptest::prelude::*;

fn sectors() -> Vec<SectorData> {
    regions::builtin_regions()
        .into_iter()
        .flat_map(|(_, bundle)| bundle.sectors)
        .collect()
}

proptest! {
    #[test]
    fn zero_modifiers_leave_baseline_unchanged(
        sector_idx in 0usize..64,
        direct_jobs in 1u32..10_000,
        owner_adjusted in any::<bool>(),
        wage in 1.0f64..250_000.0,
    ) {
        let all = sectors();
        let sector = &all[sector_idx % all.len()];
        let result = compute_impact(sector, &PolicyScenario::custom(0.0, 0.0), direct_jobs, owner_adjusted, wage);

        prop_assert_eq!(result.policy.total_jobs, result.baseline.total_jobs);
        prop_assert_eq!(result.job_gain, 0);
        prop_assert_eq!(result.output_gain, 0.0);
    }

    #[test]
    fn non_negative_multipliers_never_lose_direct_jobs(
        sector_idx in 0usize..64,
        direct_jobs in 1u32..10_000,
        output_modifier in 0.0f64..2.0,
        jobs_modifier in 0.0f64..2.0,
        owner_adjusted in any::<bool>(),
    ) {
        let all = sectors();
        let sector = &all[sector_idx % all.len()];
        let policy = PolicyScenario::custom(output_modifier, jobs_modifier);
        let result = compute_impact(sector, &policy, direct_jobs, owner_adjusted, 65_000.0);

        prop_assert!(result.baseline.total_jobs >= i64::from(direct_jobs));
        prop_assert!(result.policy.total_jobs >= i64::from(direct_jobs));
        prop_assert!(result.job_gain >= 0);
        prop_assert!(!result.negative_multiplier);
    }

    #[test]
    fn impact_is_deterministic(
        sector_idx in 0usize..64,
        direct_jobs in 1u32..10_000,
        output_modifier in -3.0f64..3.0,
        jobs_modifier in -3.0f64..3.0,
    ) {
        let all = sectors();
        let sector = &all[sector_idx % all.len()];
        let policy = PolicyScenario::custom(output_modifier, jobs_modifier);

        let first = compute_impact(sector, &policy, direct_jobs, true, 65_000.0);
        let second = compute_impact(sector, &policy, direct_jobs, true, 65_000.0);
        prop_assert_eq!(first.policy.output.to_bits(), second.policy.output.to_bits());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn loan_total_cost_covers_principal(
        principal in 1.0f64..5_000_000.0,
        rate in 0.0f64..30.0,
        years in 1u32..40,
    ) {
        let loan = calculate_loan(principal, rate, years).unwrap();
        prop_assert!(loan.monthly_payment.is_finite());
        prop_assert!(loan.total_interest >= -1e-6 * principal);
    }

    #[test]
    fn recoupment_revenue_splits_into_advance_and_label_share(
        advance in 0.0f64..10_000_000.0,
        royalty in 0.1f64..100.0,
        stream_rate in 0.0001f64..0.02,
    ) {
        let r = calculate_recoupment(advance, royalty, stream_rate).unwrap();
        prop_assert!(r.streams_needed.is_finite());
        let recombined = r.advance + r.label_share;
        prop_assert!((recombined - r.gross_revenue_required).abs() <= 1e-6 * r.gross_revenue_required.max(1.0));
    }
}
