//! Evaluation request and result shapes.
//!
//! `GrowthQuery` is the typed form: a tagged union keyed by indicator, so
//! each variant carries exactly the fields that indicator requires and the
//! missing-parameter class of errors cannot occur once a query exists.
//! `GrowthAssessment` is the untyped boundary form, with every field
//! optional the way an external request carries them; the evaluation facade
//! validates one into the other.

use serde::{Deserialize, Serialize};

use crate::enums::{Classification, Indicator, Sex};
use crate::reference::AxisValue;

/// Completed age expressed in total months.
///
/// Constructed from completed years plus additional months, with the
/// additional months constrained to 0..=11 (the reference tables are keyed
/// by total completed months, so 1 year 14 months is a caller mistake, not
/// 26 months).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AgeInMonths(u32);

impl AgeInMonths {
    /// Build from completed years and additional months.
    pub fn new(years: u32, months: u32) -> Result<Self, String> {
        if months > 11 {
            return Err(format!("months must be 0-11, got {months}"));
        }
        Ok(Self(years * 12 + months))
    }

    /// Build directly from a total month count.
    pub fn from_total(total: u32) -> Self {
        Self(total)
    }

    /// Total completed months.
    pub fn total(&self) -> u32 {
        self.0
    }
}

/// A validated growth evaluation query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GrowthQuery {
    /// Length-for-age: how long is this child for their age?
    LengthForAge {
        sex: Sex,
        age: AgeInMonths,
        length_cm: f64,
    },
    /// Weight-for-age: how heavy is this child for their age?
    WeightForAge {
        sex: Sex,
        age: AgeInMonths,
        weight_kg: f64,
    },
    /// Weight-for-length: how heavy is this child for their length?
    WeightForLength {
        sex: Sex,
        length_cm: f64,
        weight_kg: f64,
    },
}

impl GrowthQuery {
    pub fn indicator(&self) -> Indicator {
        match self {
            GrowthQuery::LengthForAge { .. } => Indicator::LengthForAge,
            GrowthQuery::WeightForAge { .. } => Indicator::WeightForAge,
            GrowthQuery::WeightForLength { .. } => Indicator::WeightForLength,
        }
    }

    pub fn sex(&self) -> Sex {
        match self {
            GrowthQuery::LengthForAge { sex, .. }
            | GrowthQuery::WeightForAge { sex, .. }
            | GrowthQuery::WeightForLength { sex, .. } => *sex,
        }
    }

    /// The axis value used to look up reference coefficients.
    pub fn axis(&self) -> AxisValue {
        match self {
            GrowthQuery::LengthForAge { age, .. } | GrowthQuery::WeightForAge { age, .. } => {
                AxisValue::AgeMonths(age.total())
            }
            GrowthQuery::WeightForLength { length_cm, .. } => AxisValue::LengthCm(*length_cm),
        }
    }

    /// The observed measurement compared against the reference.
    pub fn measurement(&self) -> f64 {
        match self {
            GrowthQuery::LengthForAge { length_cm, .. } => *length_cm,
            GrowthQuery::WeightForAge { weight_kg, .. }
            | GrowthQuery::WeightForLength { weight_kg, .. } => *weight_kg,
        }
    }
}

/// The raw boundary shape of an evaluation request.
///
/// All fields are carried as the external collaborator received them; which
/// ones are required depends on the indicator and is enforced when the
/// facade validates this into a [`GrowthQuery`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrowthAssessment {
    /// "M" or "F".
    pub sex: String,
    /// "length", "weight", or "wfl".
    pub indicator: String,
    /// Completed years (age-keyed indicators).
    pub years: Option<u32>,
    /// Additional months, 0-11 (age-keyed indicators).
    pub months: Option<u32>,
    /// Length in cm (length-for-age measurement, or weight-for-length key).
    pub length: Option<f64>,
    /// Weight in kg.
    pub weight: Option<f64>,
}

/// The outcome of a growth evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthResult {
    pub z_score: f64,
    pub classification: Classification,
}

impl GrowthResult {
    /// The z-score rounded to one decimal, as the service reports it.
    pub fn z_score_rounded(&self) -> f64 {
        (self.z_score * 10.0).round() / 10.0
    }
}
