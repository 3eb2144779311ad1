use serde::{Deserialize, Serialize};

/// One advisory produced by the rule-based advisor.
///
/// Serializes with a `type` tag so the wire format matches the dashboard
/// contract, e.g. `{"type":"fertilizer_recommendation","fertilizer":"Urea",...}`.
/// Records carry no identity and are built fresh for every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AdvisoryRecord {
    CropRecommendation {
        crop: String,
        suitability_score: f64,
        reason: String,
        expected_yield: String,
        season: String,
        location_advantages: String,
    },
    AlternativeCrops {
        crops: Vec<String>,
        reason: String,
        benefits: String,
    },
    FertilizerRecommendation {
        fertilizer: String,
        quantity: String,
        reason: String,
        application_time: String,
    },
    SoilTreatment {
        treatment: String,
        quantity: String,
        reason: String,
        timing: String,
    },
    IrrigationRecommendation {
        method: String,
        reason: String,
        water_saving: String,
        benefits: Vec<String>,
    },
    CropManagement {
        practice: String,
        reason: String,
        suggestions: Vec<String>,
    },
    DiseasePrevention {
        concern: String,
        reason: String,
        preventive_measures: Vec<String>,
    },
    FarmAssessment {
        overall_score: f64,
        soil_health_score: f64,
        climate_suitability: f64,
        summary: String,
        key_strengths: Vec<String>,
        areas_for_improvement: Vec<String>,
    },
}

impl AdvisoryRecord {
    /// The wire-level `type` tag for this record.
    pub fn kind(&self) -> &'static str {
        match self {
            AdvisoryRecord::CropRecommendation { .. } => "crop_recommendation",
            AdvisoryRecord::AlternativeCrops { .. } => "alternative_crops",
            AdvisoryRecord::FertilizerRecommendation { .. } => "fertilizer_recommendation",
            AdvisoryRecord::SoilTreatment { .. } => "soil_treatment",
            AdvisoryRecord::IrrigationRecommendation { .. } => "irrigation_recommendation",
            AdvisoryRecord::CropManagement { .. } => "crop_management",
            AdvisoryRecord::DiseasePrevention { .. } => "disease_prevention",
            AdvisoryRecord::FarmAssessment { .. } => "farm_assessment",
        }
    }
}
