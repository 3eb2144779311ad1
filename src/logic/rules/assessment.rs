use super::Rule;
use crate::logic::calculations::{
    areas_for_improvement, climate_score, key_strengths, round2, soil_score,
};
use crate::models::{AdvisoryRecord, FarmProfile};

/// Overall farm assessment rule
///
/// Always fires, and is registered last so the assessment closes the record
/// sequence. The overall score averages the soil and climate scores; the
/// summary buckets it as excellent (>0.7), good (>0.5) or moderate.
pub struct FarmAssessmentRule;

impl Rule for FarmAssessmentRule {
    fn id(&self) -> &'static str {
        "farm_assessment"
    }

    fn name(&self) -> &'static str {
        "Overall Farm Assessment"
    }

    fn evaluate(&self, profile: &FarmProfile) -> Option<AdvisoryRecord> {
        let soil = soil_score(profile);
        let climate = climate_score(profile);
        let overall = (soil + climate) / 2.0;

        let bucket = if overall > 0.7 {
            "excellent"
        } else if overall > 0.5 {
            "good"
        } else {
            "moderate"
        };

        Some(AdvisoryRecord::FarmAssessment {
            overall_score: round2(overall),
            soil_health_score: round2(soil),
            climate_suitability: round2(climate),
            summary: format!(
                "Your farm shows {} potential for the selected crop.",
                bucket
            ),
            key_strengths: key_strengths(profile),
            areas_for_improvement: areas_for_improvement(profile),
        })
    }
}
