pub mod enums;
pub mod query;
pub mod reference;

pub use enums::{Classification, Indicator, Sex};
pub use query::{AgeInMonths, GrowthAssessment, GrowthQuery, GrowthResult};
pub use reference::{AxisValue, Lms, ReferenceRow};
