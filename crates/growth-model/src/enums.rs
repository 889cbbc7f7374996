//! Type-safe enumerations for WHO child growth concepts.
//!
//! These enums provide compile-time type safety for concepts that arrive
//! as plain strings at the service boundary ("M"/"F", "length"/"weight"/
//! "wfl", category labels).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological sex, as keyed in the WHO reference tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Returns the single-letter code used in the reference data and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
        }
    }

    /// Returns the spelled-out form used in messages.
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Sex {
    type Err = String;

    /// Parse a sex token. Accepts the wire codes and spelled-out forms,
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "M" | "MALE" | "BOY" => Ok(Sex::Male),
            "F" | "FEMALE" | "GIRL" => Ok(Sex::Female),
            _ => Err(format!("Unknown sex: {s}")),
        }
    }
}

/// Growth indicator being evaluated.
///
/// The first two are keyed by age in completed months; weight-for-length is
/// keyed by recumbent length in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Indicator {
    LengthForAge,
    WeightForAge,
    WeightForLength,
}

impl Indicator {
    /// Returns the wire token as the external collaborator sends it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Indicator::LengthForAge => "length",
            Indicator::WeightForAge => "weight",
            Indicator::WeightForLength => "wfl",
        }
    }

    /// Returns the spelled-out indicator name used in messages.
    pub fn label(&self) -> &'static str {
        match self {
            Indicator::LengthForAge => "length-for-age",
            Indicator::WeightForAge => "weight-for-age",
            Indicator::WeightForLength => "weight-for-length",
        }
    }

    /// Returns true if the reference lookup for this indicator is keyed by age.
    pub fn is_age_keyed(&self) -> bool {
        matches!(self, Indicator::LengthForAge | Indicator::WeightForAge)
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Indicator {
    type Err = String;

    /// Parse an indicator token. Accepts wire tokens and spelled-out names,
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "length" | "length-for-age" | "lfa" => Ok(Indicator::LengthForAge),
            "weight" | "weight-for-age" | "wfa" => Ok(Indicator::WeightForAge),
            "wfl" | "weight-for-length" => Ok(Indicator::WeightForLength),
            _ => Err(format!("Unknown indicator: {s}")),
        }
    }
}

/// Clinical category assigned to a z-score.
///
/// Each indicator family uses its own label text over the same threshold
/// bands; the serialized form is the exact label the service emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    #[serde(rename = "Severely stunted")]
    SeverelyStunted,
    #[serde(rename = "Moderately stunted")]
    ModeratelyStunted,
    #[serde(rename = "Severe underweight")]
    SevereUnderweight,
    #[serde(rename = "Underweight")]
    Underweight,
    #[serde(rename = "Severe wasting")]
    SevereWasting,
    #[serde(rename = "Wasting")]
    Wasting,
    #[serde(rename = "Normal")]
    Normal,
    #[serde(rename = "Tall")]
    Tall,
    #[serde(rename = "Overweight")]
    Overweight,
}

impl Classification {
    /// Returns the label text as the service emits it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::SeverelyStunted => "Severely stunted",
            Classification::ModeratelyStunted => "Moderately stunted",
            Classification::SevereUnderweight => "Severe underweight",
            Classification::Underweight => "Underweight",
            Classification::SevereWasting => "Severe wasting",
            Classification::Wasting => "Wasting",
            Classification::Normal => "Normal",
            Classification::Tall => "Tall",
            Classification::Overweight => "Overweight",
        }
    }

    /// Returns true for the two tiers below -2 SD.
    pub fn is_below_normal(&self) -> bool {
        matches!(
            self,
            Classification::SeverelyStunted
                | Classification::ModeratelyStunted
                | Classification::SevereUnderweight
                | Classification::Underweight
                | Classification::SevereWasting
                | Classification::Wasting
        )
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
