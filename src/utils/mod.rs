//! Shared numeric helpers

pub mod numeric;

pub use numeric::{percent_change, round_half_up, safe_ratio};
