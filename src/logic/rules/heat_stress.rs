use super::Rule;
use crate::models::{AdvisoryRecord, FarmProfile};

/// Heat stress rule
///
/// Above 35°C most field crops suffer heat stress. Recommends shade
/// management with a fixed set of mitigation practices.
pub struct HeatStressRule;

impl Rule for HeatStressRule {
    fn id(&self) -> &'static str {
        "heat_stress"
    }

    fn name(&self) -> &'static str {
        "Heat Stress Management"
    }

    fn evaluate(&self, profile: &FarmProfile) -> Option<AdvisoryRecord> {
        if profile.temperature <= 35.0 {
            return None;
        }

        Some(AdvisoryRecord::CropManagement {
            practice: "Shade Management".to_string(),
            reason: "High temperature stress detected".to_string(),
            suggestions: vec![
                "Provide shade nets during peak summer".to_string(),
                "Increase irrigation frequency".to_string(),
                "Apply mulching to reduce soil temperature".to_string(),
            ],
        })
    }
}
