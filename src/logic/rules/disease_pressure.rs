use super::Rule;
use crate::models::{AdvisoryRecord, FarmProfile};

/// Fungal disease pressure rule
///
/// Sustained humidity above 80% favors fungal pathogens. Independent of the
/// heat stress rule; hot and humid profiles trigger both.
pub struct DiseasePressureRule;

impl Rule for DiseasePressureRule {
    fn id(&self) -> &'static str {
        "disease_pressure"
    }

    fn name(&self) -> &'static str {
        "Fungal Disease Pressure"
    }

    fn evaluate(&self, profile: &FarmProfile) -> Option<AdvisoryRecord> {
        if profile.humidity <= 80.0 {
            return None;
        }

        Some(AdvisoryRecord::DiseasePrevention {
            concern: "Fungal Disease Risk".to_string(),
            reason: "High humidity increases fungal disease susceptibility".to_string(),
            preventive_measures: vec![
                "Ensure proper ventilation".to_string(),
                "Apply preventive fungicide spray".to_string(),
                "Avoid overhead irrigation".to_string(),
                "Remove infected plant debris".to_string(),
            ],
        })
    }
}
