use super::Rule;
use crate::models::{AdvisoryRecord, FarmProfile};

/// Irrigation efficiency rule
///
/// Flood irrigation only pays off for paddy. For any other crop, suggest a
/// switch to drip irrigation. Both strings are matched exactly; rice stays
/// exempt only when spelled "Rice".
pub struct IrrigationRule;

impl Rule for IrrigationRule {
    fn id(&self) -> &'static str {
        "irrigation_efficiency"
    }

    fn name(&self) -> &'static str {
        "Irrigation Efficiency"
    }

    fn evaluate(&self, profile: &FarmProfile) -> Option<AdvisoryRecord> {
        if profile.irrigation_method != "Flood Irrigation" || profile.primary_crop_type == "Rice" {
            return None;
        }

        Some(AdvisoryRecord::IrrigationRecommendation {
            method: "Drip Irrigation".to_string(),
            reason: "Drip irrigation is more efficient for your crop type and soil conditions"
                .to_string(),
            water_saving: "30-50% reduction in water usage".to_string(),
            benefits: vec![
                "Better nutrient uptake".to_string(),
                "Reduced water stress".to_string(),
                "Higher yield potential".to_string(),
            ],
        })
    }
}
