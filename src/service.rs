//! Economic Data Service
//!
//! Async front to the region database. Every fetch waits a random latency
//! (to mimic a remote data feed) and returns a copy of the bundle stamped
//! with the fetch time.

use crate::data::{RegionDataBundle, RegionDatabase, RegionSummary};
use crate::error::{DataError, DataResult};
use rand::Rng;
use std::ops::RangeInclusive;
use std::sync::Arc;
use std::time::Duration;

/// Default simulated latency window (milliseconds)
pub const DEFAULT_LATENCY_MS: RangeInclusive<u64> = 600..=1200;

#[derive(Debug, Clone)]
pub struct EconomicDataService {
    db: Arc<RegionDatabase>,
    latency_ms: RangeInclusive<u64>,
}

impl EconomicDataService {
    pub fn new(db: Arc<RegionDatabase>) -> Self {
        Self::with_latency(db, DEFAULT_LATENCY_MS)
    }

    /// Reversed bounds are swapped so the range is never empty
    pub fn with_latency(db: Arc<RegionDatabase>, latency_ms: RangeInclusive<u64>) -> Self {
        let (start, end) = latency_ms.into_inner();
        let latency_ms = if start <= end { start..=end } else { end..=start };
        Self { db, latency_ms }
    }

    /// No artificial delay
    pub fn instant(db: Arc<RegionDatabase>) -> Self {
        Self::with_latency(db, 0..=0)
    }

    pub fn database(&self) -> &Arc<RegionDatabase> {
        &self.db
    }

    pub fn latency_ms(&self) -> &RangeInclusive<u64> {
        &self.latency_ms
    }

    pub fn available_regions(&self) -> &[RegionSummary] {
        self.db.regions()
    }

    /// Fetch one region's bundle with `last_updated` set to now (RFC 3339)
    pub async fn fetch_region_data(&self, region_id: &str) -> DataResult<RegionDataBundle> {
        let delay = self.sample_latency();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        match self.db.get(region_id) {
            Some(bundle) => {
                let mut bundle = bundle.clone();
                bundle.last_updated = chrono::Utc::now().to_rfc3339();
                tracing::debug!(region = region_id, latency_ms = delay.as_millis() as u64, "Fetched region data");
                Ok(bundle)
            }
            None => {
                tracing::warn!(region = region_id, "Region data unavailable");
                Err(DataError::RegionUnavailable(region_id.to_string()))
            }
        }
    }

    fn sample_latency(&self) -> Duration {
        let (start, end) = (*self.latency_ms.start(), *self.latency_ms.end());
        let ms = if start == end {
            start
        } else {
            rand::thread_rng().gen_range(start..=end)
        };
        Duration::from_millis(ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CONNECTIVITY_ERROR_MESSAGE;

    fn service() -> EconomicDataService {
        EconomicDataService::instant(Arc::new(RegionDatabase::builtin()))
    }

    #[tokio::test]
    async fn test_fetch_stamps_last_updated() {
        let bundle = service().fetch_region_data("memphis").await.unwrap();
        assert_eq!(bundle.context.id, "memphis");
        assert!(chrono::DateTime::parse_from_rfc3339(&bundle.last_updated).is_ok());
    }

    #[tokio::test]
    async fn test_unknown_region_is_unavailable() {
        let err = service().fetch_region_data("detroit").await.unwrap_err();
        assert!(matches!(err, DataError::RegionUnavailable(ref id) if id == "detroit"));
        assert_eq!(err.user_message(), CONNECTIVITY_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_fetch_does_not_mutate_database() {
        let svc = service();
        svc.fetch_region_data("atlanta").await.unwrap();
        assert_eq!(svc.database().get("atlanta").unwrap().last_updated, "");
    }

    #[tokio::test]
    async fn test_latency_is_applied() {
        let svc = EconomicDataService::with_latency(Arc::new(RegionDatabase::builtin()), 50..=50);
        let started = std::time::Instant::now();
        svc.fetch_region_data("birmingham").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(50));
    }

    #[test]
    fn test_reversed_latency_bounds_are_swapped() {
        let svc = EconomicDataService::with_latency(Arc::new(RegionDatabase::builtin()), 900..=300);
        assert_eq!(svc.latency_ms(), &(300..=900));
        let sampled = svc.sample_latency();
        assert!(sampled >= Duration::from_millis(300) && sampled <= Duration::from_millis(900));
    }

    #[test]
    fn test_available_regions_in_selector_order() {
        let names: Vec<String> = service().available_regions().iter().map(|r| r.name.clone()).collect();
        assert_eq!(names, vec!["Memphis, TN", "Birmingham, AL", "Atlanta, GA"]);
    }
}
