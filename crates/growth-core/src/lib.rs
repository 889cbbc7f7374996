pub mod classify;
pub mod engine;
pub mod error;
pub mod zscore;

pub use classify::classify;
pub use engine::{GrowthEngine, query_from_assessment};
pub use error::EvaluateError;
pub use zscore::lms_zscore;
