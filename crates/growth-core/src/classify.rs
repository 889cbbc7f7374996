//! Threshold bands mapping a z-score to a clinical category.

use growth_model::{Classification, Indicator};

/// Classify a finite z-score for the given indicator.
///
/// The bands are identical across indicators; only the label text differs
/// per family. Band boundaries: the severe tier is strictly below -3, the
/// moderate tier is [-3, -2), Normal is the closed band [-2, 2], and
/// anything above 2 is the high tier.
pub fn classify(z: f64, indicator: Indicator) -> Classification {
    match indicator {
        Indicator::LengthForAge => {
            if z < -3.0 {
                Classification::SeverelyStunted
            } else if z < -2.0 {
                Classification::ModeratelyStunted
            } else if z <= 2.0 {
                Classification::Normal
            } else {
                Classification::Tall
            }
        }
        Indicator::WeightForAge => {
            if z < -3.0 {
                Classification::SevereUnderweight
            } else if z < -2.0 {
                Classification::Underweight
            } else if z <= 2.0 {
                Classification::Normal
            } else {
                Classification::Overweight
            }
        }
        Indicator::WeightForLength => {
            if z < -3.0 {
                Classification::SevereWasting
            } else if z < -2.0 {
                Classification::Wasting
            } else if z <= 2.0 {
                Classification::Normal
            } else {
                Classification::Overweight
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_per_family() {
        assert_eq!(
            classify(-3.5, Indicator::LengthForAge),
            Classification::SeverelyStunted
        );
        assert_eq!(
            classify(-2.5, Indicator::LengthForAge),
            Classification::ModeratelyStunted
        );
        assert_eq!(classify(0.0, Indicator::LengthForAge), Classification::Normal);
        assert_eq!(classify(2.5, Indicator::LengthForAge), Classification::Tall);

        assert_eq!(
            classify(-3.5, Indicator::WeightForAge),
            Classification::SevereUnderweight
        );
        assert_eq!(
            classify(-2.5, Indicator::WeightForAge),
            Classification::Underweight
        );
        assert_eq!(
            classify(2.5, Indicator::WeightForAge),
            Classification::Overweight
        );

        assert_eq!(
            classify(-3.5, Indicator::WeightForLength),
            Classification::SevereWasting
        );
        assert_eq!(
            classify(-2.5, Indicator::WeightForLength),
            Classification::Wasting
        );
        assert_eq!(
            classify(2.5, Indicator::WeightForLength),
            Classification::Overweight
        );
    }

    #[test]
    fn boundaries_are_exact() {
        // -3 falls in the moderate tier, not the severe one.
        assert_eq!(
            classify(-3.0, Indicator::LengthForAge),
            Classification::ModeratelyStunted
        );
        assert_eq!(
            classify(-3.0, Indicator::WeightForAge),
            Classification::Underweight
        );
        // -2 and 2 are both Normal: the Normal band is closed on both ends.
        assert_eq!(classify(-2.0, Indicator::WeightForAge), Classification::Normal);
        assert_eq!(classify(2.0, Indicator::WeightForAge), Classification::Normal);
        assert_eq!(
            classify(2.0 + f64::EPSILON * 4.0, Indicator::WeightForAge),
            Classification::Overweight
        );
    }
}
