pub mod app_error;
pub mod stats;
pub mod use_cases;
