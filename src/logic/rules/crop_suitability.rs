use super::Rule;
use crate::logic::tables;
use crate::models::{AdvisoryRecord, FarmProfile};

/// Location-based crop suitability rule
///
/// Alluvial soil with a pH between 6.0 and 7.5 supports the state's staple
/// crop. The recommended crop is the first primary crop for the state, with
/// Rice as the fallback for states outside the reference table.
///
/// Conditions:
/// - soil_type is exactly "Alluvial"
/// - 6.0 <= pH <= 7.5
pub struct CropSuitabilityRule;

impl Rule for CropSuitabilityRule {
    fn id(&self) -> &'static str {
        "crop_suitability"
    }

    fn name(&self) -> &'static str {
        "Location Crop Suitability"
    }

    fn evaluate(&self, profile: &FarmProfile) -> Option<AdvisoryRecord> {
        if profile.soil_type != "Alluvial" {
            return None;
        }
        if profile.ph_level < 6.0 || profile.ph_level > 7.5 {
            return None;
        }

        let crops = tables::location_crops(&profile.state);
        let crop = crops.primary.first().copied().unwrap_or("Rice");

        Some(AdvisoryRecord::CropRecommendation {
            crop: crop.to_string(),
            suitability_score: 0.9,
            reason: format!(
                "Alluvial soil with optimal pH is excellent for {} cultivation in {}, {}",
                crop, profile.district, profile.state
            ),
            expected_yield: tables::expected_yield(crop, &profile.state).to_string(),
            season: tables::crop_season(crop).to_string(),
            location_advantages: format!(
                "{} district is known for successful {} cultivation",
                profile.district, crop
            ),
        })
    }
}
