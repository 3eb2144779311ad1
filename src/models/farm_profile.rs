use serde::{Deserialize, Serialize};

/// Soil and climate readings for a single farm, as submitted by the farmer.
///
/// All fields are required on the wire and the struct is treated as read-only
/// input by the advisor. Nutrient levels are in kg/ha, temperature in degrees
/// Celsius, humidity and water content in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmProfile {
    pub state: String,
    pub district: String,
    pub farm_size: f64,
    pub primary_crop_type: String,
    pub irrigation_method: String,
    pub nitrogen_level: f64,
    pub phosphorus_level: f64,
    pub potassium_level: f64,
    pub calcium_content: f64,
    pub ph_level: f64,
    pub soil_type: String,
    pub temperature: f64,
    pub humidity: f64,
    pub water_content: f64,
}

/// Wire-level request body for the recommendations endpoint.
///
/// `user_id` is only used for request logging; the advisor itself never sees
/// it.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationRequest {
    pub user_id: String,
    #[serde(flatten)]
    pub profile: FarmProfile,
}
