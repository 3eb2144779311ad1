//! Static agronomic reference tables.
//!
//! These are literal data, fixed at compile time and never reloaded. Lookups
//! are case-sensitive and every table has an explicit fallback entry for
//! unknown states or crops.

/// Primary and secondary crops commonly grown in a state.
#[derive(Debug, Clone, Copy)]
pub struct CropOptions {
    pub primary: &'static [&'static str],
    pub secondary: &'static [&'static str],
}

/// Crops commonly grown in the given state. Unknown states fall back to a
/// generic Rice/Wheat entry.
pub fn location_crops(state: &str) -> CropOptions {
    match state {
        "Punjab" => CropOptions {
            primary: &["Wheat", "Rice", "Maize"],
            secondary: &["Cotton", "Sugarcane", "Pulses"],
        },
        "Haryana" => CropOptions {
            primary: &["Wheat", "Rice", "Bajra"],
            secondary: &["Cotton", "Sugarcane", "Mustard"],
        },
        "Uttar Pradesh" => CropOptions {
            primary: &["Wheat", "Rice", "Sugarcane"],
            secondary: &["Maize", "Pulses", "Potato"],
        },
        "Maharashtra" => CropOptions {
            primary: &["Cotton", "Sugarcane", "Rice"],
            secondary: &["Wheat", "Soybean", "Maize"],
        },
        "Karnataka" => CropOptions {
            primary: &["Rice", "Maize", "Cotton"],
            secondary: &["Sugarcane", "Pulses", "Oilseeds"],
        },
        "Tamil Nadu" => CropOptions {
            primary: &["Rice", "Sugarcane", "Cotton"],
            secondary: &["Maize", "Pulses", "Groundnut"],
        },
        "Gujarat" => CropOptions {
            primary: &["Cotton", "Wheat", "Rice"],
            secondary: &["Sugarcane", "Groundnut", "Pulses"],
        },
        "Rajasthan" => CropOptions {
            primary: &["Wheat", "Bajra", "Mustard"],
            secondary: &["Cotton", "Maize", "Pulses"],
        },
        "Madhya Pradesh" => CropOptions {
            primary: &["Wheat", "Rice", "Soybean"],
            secondary: &["Cotton", "Maize", "Pulses"],
        },
        "West Bengal" => CropOptions {
            primary: &["Rice", "Wheat", "Jute"],
            secondary: &["Maize", "Pulses", "Potato"],
        },
        _ => CropOptions {
            primary: &["Rice", "Wheat"],
            secondary: &["Maize", "Pulses"],
        },
    }
}

/// Expected yield range for a crop in a state. States without a dedicated
/// entry use the crop's default range; crops outside the table report no
/// data.
pub fn expected_yield(crop: &str, state: &str) -> &'static str {
    match crop {
        "Rice" => match state {
            "Punjab" => "6-7 tons per hectare",
            "Haryana" => "5-6 tons per hectare",
            "Uttar Pradesh" => "4-5 tons per hectare",
            _ => "3-4 tons per hectare",
        },
        "Wheat" => match state {
            "Punjab" => "5-6 tons per hectare",
            "Haryana" => "4-5 tons per hectare",
            "Uttar Pradesh" => "3-4 tons per hectare",
            _ => "2-3 tons per hectare",
        },
        "Cotton" => match state {
            "Gujarat" => "600-700 kg per hectare",
            "Maharashtra" => "500-600 kg per hectare",
            "Karnataka" => "400-500 kg per hectare",
            _ => "300-400 kg per hectare",
        },
        "Sugarcane" => match state {
            "Uttar Pradesh" => "70-80 tons per hectare",
            "Maharashtra" => "80-90 tons per hectare",
            "Karnataka" => "100-120 tons per hectare",
            _ => "60-70 tons per hectare",
        },
        _ => "Yield data not available",
    }
}

/// Growing season for a crop.
pub fn crop_season(crop: &str) -> &'static str {
    match crop {
        "Rice" => "Kharif (June-November)",
        "Wheat" => "Rabi (November-April)",
        "Cotton" => "Kharif (April-December)",
        "Sugarcane" => "Year-round (12-18 months cycle)",
        "Maize" => "Kharif & Rabi",
        "Pulses" => "Rabi (October-March)",
        "Bajra" => "Kharif (June-September)",
        "Mustard" => "Rabi (October-March)",
        "Soybean" => "Kharif (June-October)",
        "Groundnut" => "Kharif (June-October)",
        _ => "Season information not available",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punjab_primary_crop_is_wheat() {
        let crops = location_crops("Punjab");
        assert_eq!(crops.primary.first(), Some(&"Wheat"));
        assert_eq!(crops.secondary, &["Cotton", "Sugarcane", "Pulses"]);
    }

    #[test]
    fn unknown_state_falls_back_to_rice_and_wheat() {
        let crops = location_crops("Kerala");
        assert_eq!(crops.primary, &["Rice", "Wheat"]);
        assert_eq!(crops.secondary, &["Maize", "Pulses"]);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let crops = location_crops("punjab");
        assert_eq!(crops.primary, &["Rice", "Wheat"]);
    }

    #[test]
    fn yield_falls_back_per_crop_then_reports_missing() {
        assert_eq!(expected_yield("Wheat", "Punjab"), "5-6 tons per hectare");
        assert_eq!(expected_yield("Wheat", "Kerala"), "2-3 tons per hectare");
        assert_eq!(expected_yield("Jute", "West Bengal"), "Yield data not available");
    }

    #[test]
    fn season_has_fallback_entry() {
        assert_eq!(crop_season("Wheat"), "Rabi (November-April)");
        assert_eq!(crop_season("Jute"), "Season information not available");
    }
}
