//! Score functions for the farm assessment.
//!
//! All functions here are pure. Scores start from a 0.5 base, gain banded
//! bonuses for favorable readings and are clamped at 1.0. Out-of-range input
//! is not rejected; callers are expected to validate upstream.

use crate::models::FarmProfile;

/// Soil health score in [0, 1] given well-formed input.
pub fn soil_score(profile: &FarmProfile) -> f64 {
    let mut score: f64 = 0.5;

    if profile.ph_level >= 6.0 && profile.ph_level <= 7.5 {
        score += 0.2;
    } else if profile.ph_level >= 5.5 && profile.ph_level <= 8.0 {
        score += 0.1;
    }

    if profile.nitrogen_level >= 40.0 {
        score += 0.1;
    }
    if profile.phosphorus_level >= 25.0 {
        score += 0.1;
    }
    if profile.potassium_level >= 20.0 {
        score += 0.1;
    }

    score.min(1.0)
}

/// Climate suitability score in [0, 1] given well-formed input.
pub fn climate_score(profile: &FarmProfile) -> f64 {
    let mut score: f64 = 0.5;

    if profile.temperature >= 20.0 && profile.temperature <= 30.0 {
        score += 0.2;
    } else if profile.temperature >= 15.0 && profile.temperature <= 35.0 {
        score += 0.1;
    }

    if profile.humidity >= 50.0 && profile.humidity <= 70.0 {
        score += 0.2;
    } else if profile.humidity >= 40.0 && profile.humidity <= 80.0 {
        score += 0.1;
    }

    if profile.water_content >= 30.0 && profile.water_content <= 60.0 {
        score += 0.1;
    }

    score.min(1.0)
}

/// Round to two decimal places, matching the wire format of the scores.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Favorable conditions found on the farm. Thresholds mirror the advisory
/// rules, inverted. Falls back to a single generic entry when nothing
/// qualifies.
pub fn key_strengths(profile: &FarmProfile) -> Vec<String> {
    let mut strengths = Vec::new();

    if profile.ph_level >= 6.0 && profile.ph_level <= 7.5 {
        strengths.push("Optimal soil pH for most crops".to_string());
    }
    if profile.nitrogen_level >= 40.0 {
        strengths.push("Good nitrogen availability".to_string());
    }
    if profile.irrigation_method == "Drip Irrigation" {
        strengths.push("Efficient irrigation system in use".to_string());
    }
    if profile.temperature >= 20.0 && profile.temperature <= 30.0 {
        strengths.push("Favorable temperature conditions".to_string());
    }

    if strengths.is_empty() {
        strengths.push("Farm shows potential for improvement".to_string());
    }

    strengths
}

/// Conditions that would benefit from intervention, mirroring the thresholds
/// of the fertilizer, soil treatment and irrigation rules.
pub fn areas_for_improvement(profile: &FarmProfile) -> Vec<String> {
    let mut improvements = Vec::new();

    if profile.ph_level < 6.0 || profile.ph_level > 8.0 {
        improvements.push("Soil pH adjustment needed".to_string());
    }
    if profile.nitrogen_level < 40.0 {
        improvements.push("Nitrogen supplementation required".to_string());
    }
    if profile.phosphorus_level < 25.0 {
        improvements.push("Phosphorus levels should be increased".to_string());
    }
    if profile.potassium_level < 20.0 {
        improvements.push("Potassium enhancement needed".to_string());
    }
    if profile.irrigation_method == "Flood Irrigation" {
        improvements.push("Consider upgrading to efficient irrigation methods".to_string());
    }

    if improvements.is_empty() {
        improvements.push("Continue current best practices".to_string());
    }

    improvements
}
