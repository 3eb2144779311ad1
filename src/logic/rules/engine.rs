use super::{
    alternative_crops::AlternativeCropsRule, assessment::FarmAssessmentRule,
    crop_suitability::CropSuitabilityRule, disease_pressure::DiseasePressureRule,
    fertilizer::{NitrogenRule, PhosphorusRule, PotassiumRule}, heat_stress::HeatStressRule,
    irrigation::IrrigationRule, soil_treatment::SoilTreatmentRule, Rule,
};
use crate::models::{AdvisoryRecord, FarmProfile};

/// Rule-based advisor: transforms one farm profile into an ordered sequence
/// of advisory records.
///
/// Rules run in registration order and do not observe each other's output.
/// The assessment rule is registered last and always fires, so every result
/// ends with exactly one farm_assessment record. Evaluation is a total
/// function: there are no error paths for well-formed input.
pub struct RuleBasedAdvisor {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleBasedAdvisor {
    pub fn new() -> Self {
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(CropSuitabilityRule),
            Box::new(AlternativeCropsRule),
            Box::new(NitrogenRule),
            Box::new(PhosphorusRule),
            Box::new(PotassiumRule),
            Box::new(SoilTreatmentRule),
            Box::new(IrrigationRule),
            Box::new(HeatStressRule),
            Box::new(DiseasePressureRule),
            Box::new(FarmAssessmentRule),
        ];

        Self { rules }
    }

    pub fn generate(&self, profile: &FarmProfile) -> Vec<AdvisoryRecord> {
        self.rules
            .iter()
            .filter_map(|rule| rule.evaluate(profile))
            .collect()
    }

    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules.iter().map(|r| (r.id(), r.name())).collect()
    }
}

impl Default for RuleBasedAdvisor {
    fn default() -> Self {
        Self::new()
    }
}
