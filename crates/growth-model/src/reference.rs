//! Reference-table value types shared between the data loader and the engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Box-Cox LMS coefficients for one tabulated point of a growth reference.
///
/// `l` is the Box-Cox power, `m` the median, `s` the coefficient of
/// variation. Immutable once loaded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lms {
    pub l: f64,
    pub m: f64,
    pub s: f64,
}

/// One row of a WHO reference table: an axis point plus its coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRow {
    /// Age in completed months or length in centimeters, per table kind.
    pub axis: f64,
    pub lms: Lms,
}

/// The independent variable a reference lookup is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AxisValue {
    /// Completed age in months (years * 12 + months).
    AgeMonths(u32),
    /// Recumbent length in centimeters.
    LengthCm(f64),
}

impl fmt::Display for AxisValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisValue::AgeMonths(months) => write!(f, "age {months} months"),
            AxisValue::LengthCm(cm) => write!(f, "length {cm:.1} cm"),
        }
    }
}
