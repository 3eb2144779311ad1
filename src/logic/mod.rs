pub mod calculations;
pub mod rules;
pub mod tables;

pub use rules::RuleBasedAdvisor;
