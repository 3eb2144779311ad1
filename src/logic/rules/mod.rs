pub mod alternative_crops;
pub mod assessment;
pub mod crop_suitability;
pub mod disease_pressure;
pub mod engine;
pub mod fertilizer;
pub mod heat_stress;
pub mod irrigation;
pub mod soil_treatment;

pub use engine::RuleBasedAdvisor;

use crate::models::{AdvisoryRecord, FarmProfile};

/// Trait for advisory rules.
///
/// Rules are stateless and side-effect free: each one inspects the profile
/// and either produces a single record or nothing. String fields such as
/// `soil_type` and `irrigation_method` are compared case-sensitively against
/// their literal English values; variations silently fail to match.
pub trait Rule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate the rule and return an advisory if conditions are met
    fn evaluate(&self, profile: &FarmProfile) -> Option<AdvisoryRecord>;
}
