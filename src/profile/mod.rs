//! Company profile schema and file loading.
//!
//! The profile record is what the rest of the job board stores for a company
//! account; here it is the input to the completeness evaluator.
//!
//! - [`schema`] - The [`CompanyProfile`] record definition
//! - [`loader`] - Loading profiles from YAML/JSON files

pub mod loader;
pub mod schema;

pub use loader::load_profile;
pub use schema::CompanyProfile;
