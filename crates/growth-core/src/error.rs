use growth_model::{AxisValue, Indicator, Sex};
use thiserror::Error;

/// Everything that can go wrong evaluating a growth query.
///
/// None of these are retryable: each is a deterministic function of the
/// input and the loaded reference data.
#[derive(Debug, Error)]
pub enum EvaluateError {
    #[error("unknown indicator: {value}")]
    UnknownIndicator { value: String },

    #[error("missing required parameter: {field}")]
    MissingParameter { field: &'static str },

    #[error("invalid parameter {field}: {message}")]
    InvalidParameter {
        field: &'static str,
        message: String,
    },

    #[error("no reference data for {sex} {indicator} at {axis}")]
    NoReferenceData {
        sex: Sex,
        indicator: Indicator,
        axis: AxisValue,
    },

    #[error("invalid measurement: {message}")]
    InvalidMeasurement { message: String },
}
