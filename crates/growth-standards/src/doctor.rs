#![deny(unsafe_code)]

use std::path::Path;

use crate::error::StandardsError;
use crate::manifest::{ManifestFile, Pins};
use crate::registry::{TableSummary, VerifySummary, verify_and_load};

/// Machine-readable health report over a standards directory.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DoctorReport {
    pub schema: String,
    pub schema_version: u32,
    pub pins: Pins,
    pub files: Vec<ManifestFile>,
    pub counts: DoctorCounts,
    pub tables: Vec<TableSummary>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct DoctorCounts {
    pub files: usize,
    pub tables: usize,
    pub reference_rows: usize,
}

impl DoctorReport {
    pub fn from_verify_summary(summary: &VerifySummary, files: Vec<ManifestFile>) -> Self {
        Self {
            schema: "growth-zscore.standards-doctor".to_string(),
            schema_version: 1,
            pins: summary.pins.clone(),
            files,
            counts: DoctorCounts {
                files: summary.file_count,
                tables: summary.tables.len(),
                reference_rows: summary.tables.iter().map(|t| t.rows).sum(),
            },
            tables: summary.tables.clone(),
        }
    }
}

/// Verify a standards directory end to end and produce the report.
pub fn doctor(standards_dir: &Path) -> Result<DoctorReport, StandardsError> {
    let (_, summary) = verify_and_load(standards_dir)?;
    let files = crate::registry::manifest_files(standards_dir)?;
    Ok(DoctorReport::from_verify_summary(&summary, files))
}
