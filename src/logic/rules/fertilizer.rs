use super::Rule;
use crate::models::{AdvisoryRecord, FarmProfile};

/// Nitrogen deficiency rule
///
/// Below 40 kg/ha, top up with Urea. The dose scales the gap to a 50 kg/ha
/// target by 2.2, rounded to whole kilograms.
pub struct NitrogenRule;

impl Rule for NitrogenRule {
    fn id(&self) -> &'static str {
        "fertilizer_nitrogen"
    }

    fn name(&self) -> &'static str {
        "Nitrogen Deficiency"
    }

    fn evaluate(&self, profile: &FarmProfile) -> Option<AdvisoryRecord> {
        if profile.nitrogen_level >= 40.0 {
            return None;
        }

        let quantity = ((50.0 - profile.nitrogen_level) * 2.2).round() as i64;
        Some(AdvisoryRecord::FertilizerRecommendation {
            fertilizer: "Urea".to_string(),
            quantity: format!("{} kg per hectare", quantity),
            reason: "Low nitrogen levels detected, additional nitrogen fertilizer recommended"
                .to_string(),
            application_time: "Before sowing and at tillering stage".to_string(),
        })
    }
}

/// Phosphorus deficiency rule
///
/// Below 25 kg/ha, apply DAP. Dose scales the gap to a 30 kg/ha target by 1.8.
pub struct PhosphorusRule;

impl Rule for PhosphorusRule {
    fn id(&self) -> &'static str {
        "fertilizer_phosphorus"
    }

    fn name(&self) -> &'static str {
        "Phosphorus Deficiency"
    }

    fn evaluate(&self, profile: &FarmProfile) -> Option<AdvisoryRecord> {
        if profile.phosphorus_level >= 25.0 {
            return None;
        }

        let quantity = ((30.0 - profile.phosphorus_level) * 1.8).round() as i64;
        Some(AdvisoryRecord::FertilizerRecommendation {
            fertilizer: "DAP (Diammonium Phosphate)".to_string(),
            quantity: format!("{} kg per hectare", quantity),
            reason: "Phosphorus deficiency detected, DAP application recommended".to_string(),
            application_time: "At the time of sowing".to_string(),
        })
    }
}

/// Potassium deficiency rule
///
/// Below 20 kg/ha, apply Muriate of Potash. Dose scales the gap to a 25 kg/ha
/// target by 2.0.
pub struct PotassiumRule;

impl Rule for PotassiumRule {
    fn id(&self) -> &'static str {
        "fertilizer_potassium"
    }

    fn name(&self) -> &'static str {
        "Potassium Deficiency"
    }

    fn evaluate(&self, profile: &FarmProfile) -> Option<AdvisoryRecord> {
        if profile.potassium_level >= 20.0 {
            return None;
        }

        let quantity = ((25.0 - profile.potassium_level) * 2.0).round() as i64;
        Some(AdvisoryRecord::FertilizerRecommendation {
            fertilizer: "Muriate of Potash".to_string(),
            quantity: format!("{} kg per hectare", quantity),
            reason: "Low potassium levels, additional potash fertilizer needed".to_string(),
            application_time: "Before sowing".to_string(),
        })
    }
}
