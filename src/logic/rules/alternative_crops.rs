use super::Rule;
use crate::logic::tables;
use crate::models::{AdvisoryRecord, FarmProfile};

/// Alternative crops rule
///
/// Lists the state's secondary crops as diversification candidates. Fires
/// whenever the secondary list is non-empty, which holds for every entry in
/// the reference table including the unknown-state fallback.
pub struct AlternativeCropsRule;

impl Rule for AlternativeCropsRule {
    fn id(&self) -> &'static str {
        "alternative_crops"
    }

    fn name(&self) -> &'static str {
        "Alternative Crops"
    }

    fn evaluate(&self, profile: &FarmProfile) -> Option<AdvisoryRecord> {
        let crops = tables::location_crops(&profile.state);
        if crops.secondary.is_empty() {
            return None;
        }

        Some(AdvisoryRecord::AlternativeCrops {
            crops: crops.secondary.iter().map(|c| c.to_string()).collect(),
            reason: format!(
                "These crops are also commonly grown in {} district and may be suitable for your farm conditions",
                profile.district
            ),
            benefits: "Crop diversification can reduce risk and improve soil health".to_string(),
        })
    }
}
