// Axum API Server Module
//
// Purpose: REST API over the region data service and the dashboard calculators
// Region fetches go through EconomicDataService (simulated latency); derived
// analysis is cached per region in moka.

#[cfg(feature = "api")]
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};

#[cfg(feature = "api")]
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::TraceLayer,
};

#[cfg(feature = "api")]
use moka::future::Cache;

#[cfg(feature = "api")]
use std::sync::Arc;

#[cfg(feature = "api")]
use std::time::Duration;

#[cfg(feature = "api")]
use crate::analysis::RegionAnalysis;

#[cfg(feature = "api")]
use crate::config::DashboardConfig;

#[cfg(feature = "api")]
use crate::data::{policy_scenarios, RegionDataBundle, RegionDatabase, BASELINE_POLICY_ID};

#[cfg(feature = "api")]
use crate::error::{CalcError, CONNECTIVITY_ERROR_MESSAGE};

#[cfg(feature = "api")]
use crate::metrics::{
    calculate_recoupment, compare_loan_costs, impact_breakdown, DEFAULT_TERM_YEARS, DIRECT_JOBS_RANGE,
};

#[cfg(feature = "api")]
use crate::service::EconomicDataService;

#[cfg(feature = "api")]
use crate::view_state::{simulate, DashboardSelection};

// ============================================================================
// Application State
// ============================================================================

#[cfg(feature = "api")]
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<DashboardConfig>,
    pub service: EconomicDataService,
    pub cache: Cache<String, serde_json::Value>,
}

#[cfg(feature = "api")]
impl AppState {
    pub async fn new(config: DashboardConfig) -> anyhow::Result<Self> {
        tracing::info!("Loading region database...");
        let db = config.load_database()?;
        tracing::info!("Region database ready ({} regions)", db.len());

        Ok(Self::with_database(config, db))
    }

    /// State over an already-built database
    pub fn with_database(config: DashboardConfig, db: RegionDatabase) -> Self {
        let service = EconomicDataService::with_latency(Arc::new(db), config.fetch_latency_ms.clone());

        tracing::info!("Initializing Moka cache...");
        let cache = Cache::builder()
            .max_capacity(1_000)
            .time_to_live(Duration::from_secs(300)) // 5 min TTL
            .build();

        Self {
            config: Arc::new(config),
            service,
            cache,
        }
    }

    fn region(&self, region_id: &str) -> Result<&RegionDataBundle, AppError> {
        self.service.database().get(region_id).ok_or_else(|| {
            tracing::warn!(region = region_id, "Unknown region requested");
            AppError::Unavailable(CONNECTIVITY_ERROR_MESSAGE.to_string())
        })
    }
}

// ============================================================================
// Router
// ============================================================================

#[cfg(feature = "api")]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Region data
        .route("/api/regions", get(list_regions))
        .route("/api/regions/:id", get(get_region))
        .route("/api/regions/:id/analysis", get(get_region_analysis))

        // Simulator
        .route("/api/policies", get(list_policies))
        .route("/api/simulator/impact", post(simulate_impact))

        // Calculators
        .route("/api/capital/loan", post(loan_disparity))
        .route("/api/recoupment", get(recoupment))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

#[cfg(feature = "api")]
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[cfg(feature = "api")]
async fn list_regions(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.service.available_regions().to_vec())
}

#[cfg(feature = "api")]
async fn get_region(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RegionDataBundle>, AppError> {
    tracing::debug!("Fetching region {}", id);
    let bundle = state
        .service
        .fetch_region_data(&id)
        .await
        .map_err(|e| AppError::Unavailable(e.user_message().to_string()))?;

    Ok(Json(bundle))
}

#[cfg(feature = "api")]
async fn get_region_analysis(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let cache_key = format!("analysis:{}", id);

    // Check cache
    if let Some(cached) = state.cache.get(&cache_key).await {
        tracing::debug!("Cache hit for analysis {}", id);
        return Ok(Json(cached));
    }

    let analysis = RegionAnalysis::build(state.region(&id)?);
    let result = serde_json::to_value(&analysis)
        .map_err(|e| AppError::Internal(format!("JSON encode error: {}", e)))?;

    // Cache result
    state.cache.insert(cache_key, result.clone()).await;

    Ok(Json(result))
}

#[cfg(feature = "api")]
async fn list_policies() -> impl IntoResponse {
    Json(policy_scenarios())
}

#[cfg(feature = "api")]
async fn simulate_impact(
    State(state): State<AppState>,
    Json(payload): Json<ImpactRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    if !DIRECT_JOBS_RANGE.contains(&payload.direct_jobs) {
        return Err(AppError::BadRequest(format!(
            "direct_jobs must be between {} and {}, got {}",
            DIRECT_JOBS_RANGE.start(),
            DIRECT_JOBS_RANGE.end(),
            payload.direct_jobs
        )));
    }

    let wage_per_job = payload.wage_per_job.unwrap_or(state.config.wage_per_job);
    if !wage_per_job.is_finite() || wage_per_job <= 0.0 {
        return Err(AppError::BadRequest(format!("wage_per_job must be positive, got {}", wage_per_job)));
    }

    let bundle = state.region(&payload.region_id)?;

    let mut selection = DashboardSelection::default()
        .with_region(payload.region_id.as_str())
        .with_direct_jobs(payload.direct_jobs)
        .with_owner_adjusted_model(payload.use_owner_adjusted_model)
        .with_policy(payload.policy_id.as_deref().unwrap_or(BASELINE_POLICY_ID));
    if let Some(sector_id) = &payload.sector_id {
        selection = selection.with_sector(sector_id.as_str());
    }

    let result = simulate(&selection, bundle, wage_per_job)
        .ok_or_else(|| AppError::BadRequest(format!("Region {} has no sectors", payload.region_id)))?;

    tracing::info!(
        region = %payload.region_id,
        policy = %selection.policy_id,
        direct_jobs = payload.direct_jobs,
        "Simulated impact: job gain {}",
        result.job_gain
    );

    Ok(Json(serde_json::json!({
        "region_id": payload.region_id,
        "policy_id": selection.policy_id,
        "result": result,
        "breakdown": impact_breakdown(&result),
    })))
}

#[cfg(feature = "api")]
async fn loan_disparity(
    State(state): State<AppState>,
    Json(payload): Json<LoanRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let bundle = state.region(&payload.region_id)?;
    let disparity = compare_loan_costs(
        payload.principal,
        &bundle.capital_metrics.interest_rate,
        payload.term_years.unwrap_or(DEFAULT_TERM_YEARS),
    )?;

    Ok(Json(serde_json::json!({
        "region_id": payload.region_id,
        "disparity": disparity,
    })))
}

#[cfg(feature = "api")]
async fn recoupment(
    State(state): State<AppState>,
    Query(params): Query<RecoupmentQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let result = calculate_recoupment(params.advance, params.royalty_rate_pct, state.config.stream_rate)?;
    Ok(Json(serde_json::to_value(result).map_err(|e| AppError::Internal(e.to_string()))?))
}

// ============================================================================
// Request Types
// ============================================================================

#[cfg(feature = "api")]
#[derive(serde::Deserialize, Debug)]
struct ImpactRequest {
    region_id: String,
    sector_id: Option<String>,
    policy_id: Option<String>,
    direct_jobs: u32,
    #[serde(default)]
    use_owner_adjusted_model: bool,
    wage_per_job: Option<f64>,
}

#[cfg(feature = "api")]
#[derive(serde::Deserialize, Debug)]
struct LoanRequest {
    region_id: String,
    principal: f64,
    term_years: Option<u32>,
}

#[cfg(feature = "api")]
#[derive(serde::Deserialize, Debug)]
struct RecoupmentQuery {
    advance: f64,
    royalty_rate_pct: f64,
}

// ============================================================================
// Error Handling
// ============================================================================

#[cfg(feature = "api")]
#[derive(Debug)]
enum AppError {
    BadRequest(String),
    Unavailable(String),
    Internal(String),
}

#[cfg(feature = "api")]
impl From<CalcError> for AppError {
    fn from(err: CalcError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

#[cfg(feature = "api")]
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
