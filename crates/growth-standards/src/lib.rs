pub mod doctor;
pub mod error;
pub mod hash;
pub mod manifest;
pub mod paths;
pub mod registry;
pub mod store;
pub mod table;

pub use doctor::{DoctorCounts, DoctorReport, doctor};
pub use error::StandardsError;
pub use manifest::{Manifest, ManifestFile, Pins};
pub use paths::{DEFAULT_WHO_VERSION, STANDARDS_ENV_VAR, default_who_path, standards_root};
pub use registry::{TableSummary, VerifySummary, load_default_reference_store, verify_and_load};
pub use store::ReferenceStore;
pub use table::{AxisKind, LmsTable, parse_lms_csv};
