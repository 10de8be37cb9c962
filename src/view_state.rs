//! Dashboard view state
//!
//! `DashboardSelection` is the user's current choices as an immutable value;
//! every change produces a new selection. `DashboardSession` pairs a
//! selection with the region load state, and uses a fetch generation so a
//! slow response for a region the user has already left is dropped.

use crate::data::{policy_or_baseline, RegionDataBundle, BASELINE_POLICY_ID};
use crate::error::{DataResult, CONNECTIVITY_ERROR_MESSAGE};
use crate::metrics::{compute_impact, ImpactResult, DEFAULT_DIRECT_JOBS, DEFAULT_PRINCIPAL, DEFAULT_TERM_YEARS};
use serde::{Deserialize, Serialize};

pub const DEFAULT_REGION_ID: &str = "memphis";
pub const DEFAULT_ADVANCE: f64 = 200_000.0;
pub const DEFAULT_ROYALTY_RATE_PCT: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardTab {
    Overview,
    Equity,
    Simulator,
    #[default]
    Music,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSelection {
    pub region_id: String,
    pub tab: DashboardTab,
    /// `None` means the region's first sector
    pub sector_id: Option<String>,
    pub policy_id: String,
    pub direct_jobs: u32,
    pub use_owner_adjusted_model: bool,
    pub loan_amount: f64,
    pub loan_term_years: u32,
    pub advance: f64,
    pub royalty_rate_pct: f64,
}

impl Default for DashboardSelection {
    fn default() -> Self {
        Self {
            region_id: DEFAULT_REGION_ID.to_string(),
            tab: DashboardTab::default(),
            sector_id: None,
            policy_id: BASELINE_POLICY_ID.to_string(),
            direct_jobs: DEFAULT_DIRECT_JOBS,
            use_owner_adjusted_model: false,
            loan_amount: DEFAULT_PRINCIPAL,
            loan_term_years: DEFAULT_TERM_YEARS,
            advance: DEFAULT_ADVANCE,
            royalty_rate_pct: DEFAULT_ROYALTY_RATE_PCT,
        }
    }
}

impl DashboardSelection {
    /// Switching region clears the sector, which belongs to the old region
    pub fn with_region(&self, region_id: impl Into<String>) -> Self {
        Self {
            region_id: region_id.into(),
            sector_id: None,
            ..self.clone()
        }
    }

    pub fn with_tab(&self, tab: DashboardTab) -> Self {
        Self { tab, ..self.clone() }
    }

    pub fn with_sector(&self, sector_id: impl Into<String>) -> Self {
        Self {
            sector_id: Some(sector_id.into()),
            ..self.clone()
        }
    }

    pub fn with_policy(&self, policy_id: impl Into<String>) -> Self {
        Self {
            policy_id: policy_id.into(),
            ..self.clone()
        }
    }

    pub fn with_direct_jobs(&self, direct_jobs: u32) -> Self {
        Self { direct_jobs, ..self.clone() }
    }

    pub fn with_owner_adjusted_model(&self, use_owner_adjusted_model: bool) -> Self {
        Self {
            use_owner_adjusted_model,
            ..self.clone()
        }
    }

    pub fn with_loan(&self, loan_amount: f64, loan_term_years: u32) -> Self {
        Self {
            loan_amount,
            loan_term_years,
            ..self.clone()
        }
    }

    pub fn with_deal(&self, advance: f64, royalty_rate_pct: f64) -> Self {
        Self {
            advance,
            royalty_rate_pct,
            ..self.clone()
        }
    }
}

/// Run the impact model for the current selection.
///
/// Falls back to the region's first sector and to the baseline policy.
/// `None` only when the region has no sectors.
pub fn simulate(selection: &DashboardSelection, bundle: &RegionDataBundle, wage_per_job: f64) -> Option<ImpactResult> {
    let sector = selection
        .sector_id
        .as_deref()
        .and_then(|id| bundle.sector(id))
        .or_else(|| bundle.sectors.first())?;

    let policy = policy_or_baseline(&selection.policy_id);

    Some(compute_impact(
        sector,
        &policy,
        selection.direct_jobs,
        selection.use_owner_adjusted_model,
        wage_per_job,
    ))
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready(Box<RegionDataBundle>),
    /// User-facing message
    Failed(String),
}

/// Handle for one in-flight fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    region_id: String,
}

impl FetchTicket {
    pub fn region_id(&self) -> &str {
        &self.region_id
    }
}

#[derive(Debug, Clone)]
pub struct DashboardSession {
    selection: DashboardSelection,
    state: LoadState,
    generation: u64,
}

impl Default for DashboardSession {
    fn default() -> Self {
        Self::new(DashboardSelection::default())
    }
}

impl DashboardSession {
    pub fn new(selection: DashboardSelection) -> Self {
        Self {
            selection,
            state: LoadState::Loading,
            generation: 0,
        }
    }

    pub fn selection(&self) -> &DashboardSelection {
        &self.selection
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn bundle(&self) -> Option<&RegionDataBundle> {
        match &self.state {
            LoadState::Ready(bundle) => Some(bundle.as_ref()),
            _ => None,
        }
    }

    /// Replace the selection. A region change requires a new fetch; call
    /// `begin_fetch` afterwards.
    pub fn select(&mut self, selection: DashboardSelection) {
        self.selection = selection;
    }

    /// Start loading the selected region; supersedes any earlier ticket
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.state = LoadState::Loading;
        FetchTicket {
            generation: self.generation,
            region_id: self.selection.region_id.clone(),
        }
    }

    /// Apply a fetch result. Returns `false` (and changes nothing) for a stale ticket.
    pub fn complete_fetch(&mut self, ticket: &FetchTicket, result: DataResult<RegionDataBundle>) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(region = %ticket.region_id, "Discarding stale region fetch");
            return false;
        }

        self.state = match result {
            Ok(bundle) => LoadState::Ready(Box::new(bundle)),
            Err(e) => {
                tracing::warn!(region = %ticket.region_id, "Region fetch failed: {}", e);
                LoadState::Failed(CONNECTIVITY_ERROR_MESSAGE.to_string())
            }
        };
        true
    }

    /// Impact for the current selection, once data is loaded
    pub fn simulate(&self, wage_per_job: f64) -> Option<ImpactResult> {
        self.bundle().and_then(|b| simulate(&self.selection, b, wage_per_job))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::regions;
    use crate::error::DataError;
    use crate::metrics::DEFAULT_WAGE_PER_JOB;

    #[test]
    fn test_defaults() {
        let selection = DashboardSelection::default();
        assert_eq!(selection.tab, DashboardTab::Music);
        assert_eq!(selection.region_id, "memphis");
        assert_eq!(selection.policy_id, "none");
        assert_eq!(selection.direct_jobs, 50);
    }

    #[test]
    fn test_with_region_resets_sector() {
        let selection = DashboardSelection::default().with_sector("care").with_policy("hiring");
        let moved = selection.with_region("atlanta");
        assert_eq!(moved.sector_id, None);
        assert_eq!(moved.policy_id, "hiring");
        // source selection untouched
        assert_eq!(selection.sector_id.as_deref(), Some("care"));
    }

    #[test]
    fn test_simulate_falls_back_to_first_sector_and_baseline() {
        let bundle = regions::memphis();
        let selection = DashboardSelection::default()
            .with_sector("no-such-sector")
            .with_policy("no-such-policy");

        let result = simulate(&selection, &bundle, DEFAULT_WAGE_PER_JOB).unwrap();
        let (_, first_jobs) = bundle.sectors[0].multipliers(false);
        assert_eq!(result.baseline.jobs_multiplier, first_jobs);
        assert_eq!(result.job_gain, 0);
    }

    #[test]
    fn test_simulate_without_sectors() {
        let mut bundle = regions::memphis();
        bundle.sectors.clear();
        assert!(simulate(&DashboardSelection::default(), &bundle, DEFAULT_WAGE_PER_JOB).is_none());
    }

    #[test]
    fn test_stale_fetch_is_discarded() {
        let mut session = DashboardSession::default();
        let first = session.begin_fetch();

        session.select(session.selection().with_region("atlanta"));
        let second = session.begin_fetch();
        assert_eq!(second.region_id(), "atlanta");

        assert!(!session.complete_fetch(&first, Ok(regions::memphis())));
        assert_eq!(session.state(), &LoadState::Loading);

        assert!(session.complete_fetch(&second, Ok(regions::atlanta())));
        assert_eq!(session.bundle().map(|b| b.context.id.as_str()), Some("atlanta"));
    }

    #[test]
    fn test_failed_fetch_uses_connectivity_message() {
        let mut session = DashboardSession::default();
        let ticket = session.begin_fetch();
        session.complete_fetch(&ticket, Err(DataError::RegionUnavailable("memphis".to_string())));
        assert_eq!(session.state(), &LoadState::Failed(CONNECTIVITY_ERROR_MESSAGE.to_string()));
        assert!(session.simulate(DEFAULT_WAGE_PER_JOB).is_none());
    }

    #[test]
    fn test_session_simulate_when_ready() {
        let mut session = DashboardSession::new(DashboardSelection::default().with_sector("care").with_policy("procurement"));
        let ticket = session.begin_fetch();
        session.complete_fetch(&ticket, Ok(regions::memphis()));
        let result = session.simulate(DEFAULT_WAGE_PER_JOB).unwrap();
        assert_eq!(result.job_gain, 8);
    }
}
