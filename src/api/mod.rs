pub mod recommendations;

use crate::geo::GeoIndex;
use crate::logic::RuleBasedAdvisor;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Shared immutable state: the geographic reference table and the advisor.
/// Both are built once at startup; requests only read them.
#[derive(Clone)]
pub struct AppState {
    pub geo: Arc<GeoIndex>,
    pub advisor: Arc<RuleBasedAdvisor>,
}

impl AppState {
    pub fn new(geo: GeoIndex) -> Self {
        Self {
            geo: Arc::new(geo),
            advisor: Arc::new(RuleBasedAdvisor::new()),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/recommendations", post(recommendations::generate))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(256 * 1024))
        .layer(CatchPanicLayer::custom(recommendations::panic_response))
}

async fn healthz() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use std::path::PathBuf;
    use tower::ServiceExt;

    fn test_router() -> Router {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/indian_geo.json");
        let geo = GeoIndex::load(&path).expect("bundled geo data should load");
        router(AppState::new(geo))
    }

    fn valid_body() -> Value {
        serde_json::json!({
            "user_id": "farmer-42",
            "state": "Punjab",
            "district": "Ludhiana",
            "farm_size": 4.5,
            "primary_crop_type": "Wheat",
            "irrigation_method": "Drip Irrigation",
            "nitrogen_level": 55.0,
            "phosphorus_level": 30.0,
            "potassium_level": 25.0,
            "calcium_content": 12.0,
            "ph_level": 6.8,
            "soil_type": "Alluvial",
            "temperature": 24.0,
            "humidity": 60.0,
            "water_content": 40.0
        })
    }

    async fn post_recommendations(body: String) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/recommendations")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        (status, value)
    }

    #[tokio::test]
    async fn health_endpoint_responds() {
        let request = Request::builder()
            .uri("/healthz")
            .body(Body::empty())
            .unwrap();
        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn valid_request_returns_success_envelope() {
        let (status, body) = post_recommendations(valid_body().to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
        assert_eq!(body["message"], "Recommendations generated successfully");

        let records = body["recommendations"].as_array().unwrap();
        assert!(!records.is_empty());
        assert_eq!(records[0]["type"], "crop_recommendation");
        assert_eq!(records[0]["crop"], "Wheat");
        assert_eq!(
            records.last().unwrap()["type"],
            "farm_assessment"
        );
    }

    #[tokio::test]
    async fn missing_field_is_named_in_the_error() {
        let mut body = valid_body();
        body.as_object_mut().unwrap().remove("ph_level");
        let (status, body) = post_recommendations(body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Missing required field: ph_level");
        assert_eq!(body["recommendations"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn zero_valued_field_counts_as_missing() {
        let mut body = valid_body();
        body["farm_size"] = serde_json::json!(0);
        let (status, body) = post_recommendations(body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Missing required field: farm_size");
    }

    #[tokio::test]
    async fn unknown_state_is_rejected() {
        let mut body = valid_body();
        body["state"] = serde_json::json!("Atlantis");
        let (status, body) = post_recommendations(body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid state: Atlantis");
    }

    #[tokio::test]
    async fn district_must_belong_to_state() {
        let mut body = valid_body();
        body["district"] = serde_json::json!("Jaipur");
        let (status, body) = post_recommendations(body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["message"],
            "Invalid district: Jaipur for state: Punjab"
        );
    }

    #[tokio::test]
    async fn malformed_json_collapses_to_generic_500() {
        let (status, body) = post_recommendations("{not json".to_string()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Failed to process recommendation request");
        assert_eq!(body["recommendations"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn low_nitrogen_profile_includes_urea_record() {
        let mut body = valid_body();
        body["nitrogen_level"] = serde_json::json!(10.0);
        let (status, body) = post_recommendations(body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        let records = body["recommendations"].as_array().unwrap();
        let urea = records
            .iter()
            .find(|r| r["type"] == "fertilizer_recommendation" && r["fertilizer"] == "Urea")
            .expect("urea record missing");
        assert_eq!(urea["quantity"], "88 kg per hectare");
    }
}
