use super::Rule;
use crate::models::{AdvisoryRecord, FarmProfile};

/// Soil pH correction rule
///
/// Acidic soil (pH < 6.0) gets a lime dose sized against a 6.5 target;
/// alkaline soil (pH > 8.0) gets gypsum sized against a 7.5 target. The two
/// branches are mutually exclusive: a single profile never receives both
/// treatments.
pub struct SoilTreatmentRule;

impl Rule for SoilTreatmentRule {
    fn id(&self) -> &'static str {
        "soil_treatment"
    }

    fn name(&self) -> &'static str {
        "Soil pH Correction"
    }

    fn evaluate(&self, profile: &FarmProfile) -> Option<AdvisoryRecord> {
        if profile.ph_level < 6.0 {
            let quantity = ((6.5 - profile.ph_level) * 500.0).round() as i64;
            Some(AdvisoryRecord::SoilTreatment {
                treatment: "Lime Application".to_string(),
                quantity: format!("{} kg per hectare", quantity),
                reason: "Soil is acidic, lime application will help neutralize pH".to_string(),
                timing: "2-3 weeks before sowing".to_string(),
            })
        } else if profile.ph_level > 8.0 {
            let quantity = ((profile.ph_level - 7.5) * 400.0).round() as i64;
            Some(AdvisoryRecord::SoilTreatment {
                treatment: "Gypsum Application".to_string(),
                quantity: format!("{} kg per hectare", quantity),
                reason: "Soil is alkaline, gypsum will help reduce pH".to_string(),
                timing: "Before land preparation".to_string(),
            })
        } else {
            None
        }
    }
}
