use super::AppState;
use crate::error::AgriMitraError;
use crate::models::{AdvisoryRecord, RecommendationRequest};
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use std::any::Any;

/// Required wire fields, in validation order. The error message names the
/// first missing field only.
const REQUIRED_FIELDS: [&str; 15] = [
    "user_id",
    "state",
    "district",
    "farm_size",
    "primary_crop_type",
    "irrigation_method",
    "nitrogen_level",
    "phosphorus_level",
    "potassium_level",
    "calcium_content",
    "ph_level",
    "soil_type",
    "temperature",
    "humidity",
    "water_content",
];

const INTERNAL_ERROR_MESSAGE: &str = "Failed to process recommendation request";

/// Response envelope shared by every outcome of the recommendations route.
#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub status: &'static str,
    pub recommendations: Vec<AdvisoryRecord>,
    pub message: String,
}

impl RecommendationResponse {
    fn success(recommendations: Vec<AdvisoryRecord>) -> Self {
        Self {
            status: "success",
            recommendations,
            message: "Recommendations generated successfully".to_string(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            recommendations: Vec::new(),
            message: message.into(),
        }
    }
}

enum Rejection {
    BadRequest(String),
    Internal(AgriMitraError),
}

/// POST /api/recommendations
pub async fn generate(State(state): State<AppState>, body: Bytes) -> Response {
    match process(&state, &body) {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(Rejection::BadRequest(message)) => {
            tracing::debug!(%message, "rejected recommendation request");
            (
                StatusCode::BAD_REQUEST,
                Json(RecommendationResponse::error(message)),
            )
                .into_response()
        }
        Err(Rejection::Internal(e)) => {
            tracing::error!(error = %e, "failed to process recommendation request");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(RecommendationResponse::error(INTERNAL_ERROR_MESSAGE)),
            )
                .into_response()
        }
    }
}

fn process(state: &AppState, body: &[u8]) -> Result<RecommendationResponse, Rejection> {
    // Malformed JSON maps to the generic 500, matching the dashboard's
    // catch-all handler boundary. Validation failures are explicit 400s.
    let raw: Value =
        serde_json::from_slice(body).map_err(|e| Rejection::Internal(e.into()))?;

    for field in REQUIRED_FIELDS {
        if is_missing(raw.get(field)) {
            return Err(Rejection::BadRequest(format!(
                "Missing required field: {}",
                field
            )));
        }
    }

    let request: RecommendationRequest =
        serde_json::from_value(raw).map_err(|e| Rejection::Internal(e.into()))?;
    let profile = &request.profile;

    let Some(entry) = state.geo.state(&profile.state) else {
        return Err(Rejection::BadRequest(format!(
            "Invalid state: {}",
            profile.state
        )));
    };
    if !entry.has_district(&profile.district) {
        return Err(Rejection::BadRequest(format!(
            "Invalid district: {} for state: {}",
            profile.district, profile.state
        )));
    }

    tracing::info!(
        user_id = %request.user_id,
        state = %profile.state,
        district = %profile.district,
        "generating recommendations"
    );

    let records = state.advisor.generate(profile);
    tracing::debug!(
        kinds = ?records.iter().map(|r| r.kind()).collect::<Vec<_>>(),
        "advisor output"
    );

    Ok(RecommendationResponse::success(records))
}

/// Presence check with the dashboard's falsy semantics: absent, null, empty
/// string, zero and false all count as missing.
fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().map_or(true, |f| f == 0.0),
        Some(Value::Bool(b)) => !b,
        Some(Value::Array(_)) | Some(Value::Object(_)) => false,
    }
}

/// Panic handler for the catch-panic layer: collapse to the generic 500
/// envelope with no detail leakage.
pub fn panic_response(_err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let body = serde_json::json!({
        "status": "error",
        "recommendations": [],
        "message": INTERNAL_ERROR_MESSAGE,
    });
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "application/json")],
        body.to_string(),
    )
        .into_response()
}
