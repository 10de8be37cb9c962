//! Policy scenario catalog
//!
//! Modifiers are additive factors on top of the general-market or
//! owner-adjusted multipliers.

use super::types::PolicyScenario;

/// Id of the no-intervention baseline
pub const BASELINE_POLICY_ID: &str = "none";

fn scenario(id: &str, name: &str, description: &str, impact_description: &str, output_modifier: f64, jobs_modifier: f64) -> PolicyScenario {
    PolicyScenario {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        impact_description: impact_description.to_string(),
        output_modifier,
        jobs_modifier,
    }
}

/// All scenarios, baseline first
pub fn policy_scenarios() -> Vec<PolicyScenario> {
    vec![
        scenario(
            BASELINE_POLICY_ID,
            "No Intervention (Baseline)",
            "Standard market conditions with existing structural barriers.",
            "Growth limited by current leakage rates.",
            0.0,
            0.0,
        ),
        scenario(
            "procurement",
            "Anchor Procurement Set-Aside (30%)",
            "Mandates anchors to direct 30% of spend to local minority firms.",
            "Reduces supply chain leakage, boosting the Indirect Multiplier.",
            0.35,
            0.15,
        ),
        scenario(
            "hiring",
            "Local Hiring Ordinance",
            "Requires 50% of new hires to reside in priority zip codes.",
            "Retains wages locally, boosting the Induced Multiplier.",
            0.10,
            0.45,
        ),
        scenario(
            "capital",
            "Supply Chain Capital Fund",
            "Provides 0% interest loans for equipment to meet anchor demand.",
            "Increases capacity and productivity per job.",
            0.55,
            0.25,
        ),
    ]
}

pub fn find_policy(policy_id: &str) -> Option<PolicyScenario> {
    policy_scenarios().into_iter().find(|p| p.id == policy_id)
}

/// Unknown ids fall back to the baseline, as the simulator's selector does
pub fn policy_or_baseline(policy_id: &str) -> PolicyScenario {
    find_policy(policy_id).unwrap_or_else(baseline_policy)
}

pub fn baseline_policy() -> PolicyScenario {
    policy_scenarios().swap_remove(0)
}
