//! The growth evaluation facade.
//!
//! Orchestrates the end-to-end evaluation: validate the request, derive the
//! axis lookup key, resolve the LMS coefficients, compute the z-score, and
//! classify it. Stateless per call over an immutable reference store, so a
//! single engine serves concurrent callers.

use std::str::FromStr;

use growth_model::{AgeInMonths, GrowthAssessment, GrowthQuery, GrowthResult, Indicator, Sex};
use growth_standards::ReferenceStore;
use tracing::debug;

use crate::classify::classify;
use crate::error::EvaluateError;
use crate::zscore::lms_zscore;

/// Evaluates growth queries against an injected reference store.
#[derive(Debug, Clone)]
pub struct GrowthEngine {
    store: ReferenceStore,
}

impl GrowthEngine {
    pub fn new(store: ReferenceStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ReferenceStore {
        &self.store
    }

    /// Evaluate a validated query.
    ///
    /// # Errors
    ///
    /// [`EvaluateError::NoReferenceData`] when the axis value falls outside
    /// the table's coverage, [`EvaluateError::InvalidMeasurement`] when the
    /// measurement cannot produce a finite z-score. Neither is retryable.
    pub fn evaluate(&self, query: &GrowthQuery) -> Result<GrowthResult, EvaluateError> {
        let sex = query.sex();
        let indicator = query.indicator();
        let axis = query.axis();

        let lms = self.store.lookup(sex, indicator, axis).ok_or(
            EvaluateError::NoReferenceData {
                sex,
                indicator,
                axis,
            },
        )?;

        let z_score = lms_zscore(query.measurement(), lms)?;
        let classification = classify(z_score, indicator);
        debug!(
            sex = sex.as_str(),
            indicator = indicator.as_str(),
            %axis,
            z_score,
            classification = classification.as_str(),
            "evaluated growth query"
        );

        Ok(GrowthResult {
            z_score,
            classification,
        })
    }

    /// Validate a raw boundary request into a typed query and evaluate it.
    ///
    /// # Errors
    ///
    /// Everything [`Self::evaluate`] returns, plus the validation failures:
    /// [`EvaluateError::UnknownIndicator`], [`EvaluateError::MissingParameter`]
    /// (the message names the offending field), and
    /// [`EvaluateError::InvalidParameter`].
    pub fn evaluate_assessment(
        &self,
        assessment: &GrowthAssessment,
    ) -> Result<GrowthResult, EvaluateError> {
        let query = query_from_assessment(assessment)?;
        self.evaluate(&query)
    }
}

/// Enforce the per-indicator parameter contract over the raw request shape.
pub fn query_from_assessment(
    assessment: &GrowthAssessment,
) -> Result<GrowthQuery, EvaluateError> {
    let indicator = Indicator::from_str(&assessment.indicator).map_err(|_| {
        EvaluateError::UnknownIndicator {
            value: assessment.indicator.clone(),
        }
    })?;
    let sex =
        Sex::from_str(&assessment.sex).map_err(|message| EvaluateError::InvalidParameter {
            field: "sex",
            message,
        })?;

    match indicator {
        Indicator::LengthForAge => Ok(GrowthQuery::LengthForAge {
            sex,
            age: required_age(assessment)?,
            length_cm: required_positive(assessment.length, "length")?,
        }),
        Indicator::WeightForAge => Ok(GrowthQuery::WeightForAge {
            sex,
            age: required_age(assessment)?,
            weight_kg: required_positive(assessment.weight, "weight")?,
        }),
        Indicator::WeightForLength => Ok(GrowthQuery::WeightForLength {
            sex,
            length_cm: required_positive(assessment.length, "length")?,
            weight_kg: required_positive(assessment.weight, "weight")?,
        }),
    }
}

fn required_age(assessment: &GrowthAssessment) -> Result<AgeInMonths, EvaluateError> {
    let years = assessment
        .years
        .ok_or(EvaluateError::MissingParameter { field: "years" })?;
    let months = assessment
        .months
        .ok_or(EvaluateError::MissingParameter { field: "months" })?;
    AgeInMonths::new(years, months).map_err(|message| EvaluateError::InvalidParameter {
        field: "months",
        message,
    })
}

fn required_positive(
    value: Option<f64>,
    field: &'static str,
) -> Result<f64, EvaluateError> {
    let value = value.ok_or(EvaluateError::MissingParameter { field })?;
    if !value.is_finite() || value <= 0.0 {
        return Err(EvaluateError::InvalidParameter {
            field,
            message: format!("must be a positive number, got {value}"),
        });
    }
    Ok(value)
}
