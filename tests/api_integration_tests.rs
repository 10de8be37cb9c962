// API Integration Tests
//
// Purpose: Exercise every endpoint against the built-in regions
// Run with: cargo test --features api --test api_integration_tests

#[cfg(feature = "api")]
mod api_tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use equity_dashboard_rust::{create_router, AppState, DashboardConfig, RegionDatabase, CONNECTIVITY_ERROR_MESSAGE};
    use serde_json::Value;
    use tower::ServiceExt; // for oneshot

    // Helper: app over the built-in regions with no fetch latency
    fn create_test_app() -> axum::Router {
        let config = DashboardConfig {
            fetch_latency_ms: 0..=0,
            ..DashboardConfig::default()
        };
        create_router(AppState::with_database(config, RegionDatabase::builtin()))
    }

    // Helper: Parse JSON response
    async fn json_response(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        serde_json::from_slice(&body).expect("Failed to parse JSON")
    }

    async fn get(uri: &str) -> axum::response::Response {
        create_test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_json(uri: &str, body: Value) -> axum::response::Response {
        create_test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    // =========================================================================
    // Section 1: Health Check
    // =========================================================================

    #[tokio::test]
    async fn test_health_check() {
        let response = get("/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }

    // =========================================================================
    // Section 2: Regions
    // =========================================================================

    #[tokio::test]
    async fn test_list_regions() {
        let response = get("/api/regions").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        let regions = body.as_array().expect("Expected array");
        assert_eq!(regions.len(), 3);
        assert_eq!(regions[0]["id"], "memphis");
        assert_eq!(regions[2]["name"], "Atlanta, GA");
    }

    #[tokio::test]
    async fn test_get_region_bundle() {
        let response = get("/api/regions/birmingham").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["context"]["id"], "birmingham");
        assert!(!body["last_updated"].as_str().unwrap().is_empty());
        assert!(body["sectors"].as_array().unwrap().len() > 0);
    }

    #[tokio::test]
    async fn test_unknown_region_returns_connectivity_error() {
        let response = get("/api/regions/detroit").await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = json_response(response).await;
        assert_eq!(body["error"], CONNECTIVITY_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_region_analysis() {
        let response = get("/api/regions/memphis/analysis").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["region_id"], "memphis");
        assert_eq!(body["crisis_hotspot_count"], 1);
        let excess = body["loan_disparity"]["excess_interest"].as_f64().unwrap();
        assert!((excess - 3_257.73).abs() < 0.01);
    }

    #[tokio::test]
    async fn test_region_analysis_is_cached() {
        let app = create_test_app();
        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(Request::builder().uri("/api/regions/atlanta/analysis").body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let body = json_response(response).await;
            assert_eq!(body["region_id"], "atlanta");
        }
    }

    // =========================================================================
    // Section 3: Simulator
    // =========================================================================

    #[tokio::test]
    async fn test_list_policies() {
        let body = json_response(get("/api/policies").await).await;
        let ids: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["none", "procurement", "hiring", "capital"]);
    }

    #[tokio::test]
    async fn test_simulate_procurement() {
        let response = post_json(
            "/api/simulator/impact",
            serde_json::json!({
                "region_id": "memphis",
                "sector_id": "care",
                "policy_id": "procurement",
                "direct_jobs": 50
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["result"]["baseline"]["indirect_jobs"], 20);
        assert_eq!(body["result"]["policy"]["indirect_jobs"], 28);
        assert_eq!(body["result"]["job_gain"], 8);
        assert_eq!(body["breakdown"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_simulate_defaults_to_baseline_policy() {
        let body = json_response(
            post_json(
                "/api/simulator/impact",
                serde_json::json!({ "region_id": "atlanta", "direct_jobs": 100 }),
            )
            .await,
        )
        .await;
        assert_eq!(body["policy_id"], "none");
        assert_eq!(body["result"]["job_gain"], 0);
    }

    #[tokio::test]
    async fn test_simulate_rejects_out_of_range_jobs() {
        for jobs in [5, 501] {
            let response = post_json(
                "/api/simulator/impact",
                serde_json::json!({ "region_id": "memphis", "direct_jobs": jobs }),
            )
            .await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    // =========================================================================
    // Section 4: Calculators
    // =========================================================================

    #[tokio::test]
    async fn test_loan_disparity() {
        let response = post_json(
            "/api/capital/loan",
            serde_json::json!({ "region_id": "memphis", "principal": 50000.0, "term_years": 5 }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        let payment = body["disparity"]["reference"]["monthly_payment"].as_f64().unwrap();
        assert!((payment - 964.32).abs() < 0.01);
    }

    #[tokio::test]
    async fn test_loan_rejects_zero_principal() {
        let response = post_json(
            "/api/capital/loan",
            serde_json::json!({ "region_id": "memphis", "principal": 0.0 }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_recoupment() {
        let response = get("/api/recoupment?advance=200000&royalty_rate_pct=15").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        let streams = body["streams_needed"].as_f64().unwrap();
        assert!((streams - 333_333_333.33).abs() < 0.01);
    }

    #[tokio::test]
    async fn test_recoupment_zero_royalty_is_bad_request() {
        let response = get("/api/recoupment?advance=200000&royalty_rate_pct=0").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_response(response).await;
        assert!(body["error"].as_str().unwrap().contains("Division by zero"));
    }
}
