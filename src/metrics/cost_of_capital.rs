//! COST OF CAPITAL
//!
//! Standard amortization for a fixed-rate loan, and the interest penalty a
//! borrower pays when quoted a higher rate than a reference borrower.
//!
//! ```text
//! r = annual_rate_pct / 100 / 12
//! n = term_years × 12
//! M = P·r·(1+r)^n / ((1+r)^n − 1)      (M = P/n when r = 0)
//! ```

use crate::data::RatePair;
use crate::error::{CalcError, CalcResult};
use crate::utils::percent_change;
use serde::{Deserialize, Serialize};

/// Default principal for the capital panel comparison (USD)
pub const DEFAULT_PRINCIPAL: f64 = 50_000.0;

/// Default term for the capital panel comparison (years)
pub const DEFAULT_TERM_YEARS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanCost {
    pub principal: f64,
    pub annual_rate_pct: f64,
    pub term_years: u32,
    pub monthly_payment: f64,
    pub total_cost: f64,
    pub total_interest: f64,
}

/// Amortized cost of a fixed-rate loan
pub fn calculate_loan(principal: f64, annual_rate_pct: f64, term_years: u32) -> CalcResult<LoanCost> {
    if !principal.is_finite() || principal <= 0.0 {
        return Err(CalcError::InvalidInput(format!("principal must be positive, got {}", principal)));
    }
    if !annual_rate_pct.is_finite() || annual_rate_pct < 0.0 {
        return Err(CalcError::InvalidInput(format!(
            "annual rate must be a non-negative percentage, got {}",
            annual_rate_pct
        )));
    }
    if term_years == 0 {
        return Err(CalcError::InvalidInput("term must be at least one year".to_string()));
    }

    let monthly_rate = annual_rate_pct / 100.0 / 12.0;
    let payments = f64::from(term_years) * 12.0;

    let monthly_payment = if monthly_rate == 0.0 {
        principal / payments
    } else {
        // (1+r)^n - 1 via exp_m1 so tiny rates don't cancel to zero
        let growth_minus_one = (payments * monthly_rate.ln_1p()).exp_m1();
        principal * monthly_rate * (growth_minus_one + 1.0) / growth_minus_one
    };

    let total_cost = monthly_payment * payments;

    Ok(LoanCost {
        principal,
        annual_rate_pct,
        term_years,
        monthly_payment,
        total_cost,
        total_interest: total_cost - principal,
    })
}

/// Same principal and term at the disparate (Black) and reference (White) rates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanDisparity {
    pub reference: LoanCost,
    pub disparate: LoanCost,
    /// Extra interest paid over the life of the loan
    pub excess_interest: f64,
    /// Extra interest as % of the reference interest; `None` when that is zero
    pub percent_increase: Option<f64>,
}

pub fn compare_loan_costs(principal: f64, rates: &RatePair, term_years: u32) -> CalcResult<LoanDisparity> {
    let reference = calculate_loan(principal, rates.white, term_years)?;
    let disparate = calculate_loan(principal, rates.black, term_years)?;

    Ok(LoanDisparity {
        reference,
        disparate,
        excess_interest: disparate.total_interest - reference.total_interest,
        percent_increase: percent_change(disparate.total_interest, reference.total_interest),
    })
}
