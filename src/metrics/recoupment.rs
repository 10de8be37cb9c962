//! RECOUPMENT
//!
//! How many streams an artist needs before a label advance is paid back,
//! given the artist's royalty share of each stream.

use crate::error::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};

/// Typical per-stream payout to the rights holder (USD)
pub const DEFAULT_STREAM_RATE: f64 = 0.004;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Recoupment {
    pub advance: f64,
    pub royalty_rate_pct: f64,
    pub stream_rate: f64,
    pub artist_share_per_stream: f64,
    pub streams_needed: f64,
    /// Total stream revenue generated before the advance is recouped
    pub gross_revenue_required: f64,
    /// Portion of that revenue the label keeps beyond the advance
    pub label_share: f64,
}

pub fn calculate_recoupment(advance: f64, royalty_rate_pct: f64, stream_rate: f64) -> CalcResult<Recoupment> {
    if !advance.is_finite() || advance < 0.0 {
        return Err(CalcError::InvalidInput(format!("advance must be non-negative, got {}", advance)));
    }
    for (name, value) in [("royalty rate", royalty_rate_pct), ("stream rate", stream_rate)] {
        if !value.is_finite() || value < 0.0 {
            return Err(CalcError::InvalidInput(format!("{} must be non-negative, got {}", name, value)));
        }
    }

    let artist_share_per_stream = stream_rate * royalty_rate_pct / 100.0;
    if artist_share_per_stream == 0.0 {
        return Err(CalcError::DivisionByZero("artist share per stream"));
    }

    let streams_needed = advance / artist_share_per_stream;
    let gross_revenue_required = streams_needed * stream_rate;

    Ok(Recoupment {
        advance,
        royalty_rate_pct,
        stream_rate,
        artist_share_per_stream,
        streams_needed,
        gross_revenue_required,
        label_share: gross_revenue_required - advance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_standard_deal() {
        let r = calculate_recoupment(200_000.0, 15.0, DEFAULT_STREAM_RATE).unwrap();
        assert_relative_eq!(r.artist_share_per_stream, 0.0006, epsilon = 1e-12);
        assert_relative_eq!(r.streams_needed, 333_333_333.33, epsilon = 0.01);
        assert_relative_eq!(r.gross_revenue_required, 1_333_333.33, epsilon = 0.01);
        assert_relative_eq!(r.label_share, 1_133_333.33, epsilon = 0.01);
    }

    #[test]
    fn test_zero_rates_are_errors() {
        assert_eq!(
            calculate_recoupment(200_000.0, 0.0, DEFAULT_STREAM_RATE),
            Err(CalcError::DivisionByZero("artist share per stream"))
        );
        assert!(matches!(
            calculate_recoupment(200_000.0, 15.0, 0.0),
            Err(CalcError::DivisionByZero(_))
        ));
    }

    #[test]
    fn test_negative_inputs_rejected() {
        assert!(matches!(calculate_recoupment(-1.0, 15.0, 0.004), Err(CalcError::InvalidInput(_))));
        assert!(matches!(calculate_recoupment(1.0, -15.0, 0.004), Err(CalcError::InvalidInput(_))));
    }

    #[test]
    fn test_zero_advance_needs_no_streams() {
        let r = calculate_recoupment(0.0, 20.0, DEFAULT_STREAM_RATE).unwrap();
        assert_eq!(r.streams_needed, 0.0);
        assert_eq!(r.label_share, 0.0);
    }
}
