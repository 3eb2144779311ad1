pub mod advisory;
pub mod farm_profile;

pub use advisory::*;
pub use farm_profile::*;
