#![deny(unsafe_code)]

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use growth_model::{Indicator, Sex};
use serde::Serialize;

use crate::error::StandardsError;
use crate::hash::sha256_hex;
use crate::manifest::{Manifest, ManifestFile};
use crate::paths::default_who_path;
use crate::store::ReferenceStore;
use crate::table::{AxisKind, parse_lms_csv};

const MANIFEST_SCHEMA: &str = "growth-zscore.standards-manifest";

/// Every reference table the manifest must provide, by role name.
const REQUIRED_TABLES: &[(&str, Sex, Indicator)] = &[
    ("boys_length_for_age", Sex::Male, Indicator::LengthForAge),
    ("girls_length_for_age", Sex::Female, Indicator::LengthForAge),
    ("boys_weight_for_age", Sex::Male, Indicator::WeightForAge),
    ("girls_weight_for_age", Sex::Female, Indicator::WeightForAge),
    (
        "boys_weight_for_length",
        Sex::Male,
        Indicator::WeightForLength,
    ),
    (
        "girls_weight_for_length",
        Sex::Female,
        Indicator::WeightForLength,
    ),
];

const ALLOWED_KINDS: &[&str] = &["csv"];

/// Per-table coverage facts gathered while loading.
#[derive(Debug, Clone, Serialize)]
pub struct TableSummary {
    pub sex: Sex,
    pub indicator: Indicator,
    pub rows: usize,
    pub axis_min: f64,
    pub axis_max: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifySummary {
    pub standards_dir: PathBuf,
    pub pins: crate::manifest::Pins,
    pub file_count: usize,
    pub tables: Vec<TableSummary>,
}

/// Verify a standards directory against its manifest and load every
/// reference table into an immutable store.
///
/// Any failure here is fatal at startup: the process must not serve
/// evaluations from unverified or partially loaded reference data.
pub fn verify_and_load(
    standards_dir: &Path,
) -> Result<(ReferenceStore, VerifySummary), StandardsError> {
    let manifest = load_manifest(&standards_dir.join("manifest.toml"))?;

    validate_manifest(&manifest, standards_dir)?;

    let mut files = manifest.files.clone();
    files.sort_by(|a, b| a.path.cmp(&b.path));

    for file in &files {
        verify_file(standards_dir, file)?;
    }

    let mut tables = Vec::new();
    let mut summaries = Vec::new();
    for &(role, sex, indicator) in REQUIRED_TABLES {
        let path = resolve_role_path(standards_dir, &files, role)?;
        let axis = if indicator.is_age_keyed() {
            AxisKind::Months
        } else {
            AxisKind::Centimeters
        };
        let table = parse_lms_csv(&path, axis)?;
        summaries.push(TableSummary {
            sex,
            indicator,
            rows: table.len(),
            axis_min: table.axis_min(),
            axis_max: table.axis_max(),
        });
        tables.push(((sex, indicator), table));
    }

    let summary = VerifySummary {
        standards_dir: standards_dir.to_path_buf(),
        pins: manifest.pins.clone(),
        file_count: files.len(),
        tables: summaries,
    };

    Ok((ReferenceStore::from_tables(tables), summary))
}

/// Load the reference store from the default WHO release directory.
pub fn load_default_reference_store() -> Result<ReferenceStore, StandardsError> {
    let (store, _) = verify_and_load(&default_who_path())?;
    Ok(store)
}

/// The manifest's file entries for a standards directory, sorted by path.
pub fn manifest_files(standards_dir: &Path) -> Result<Vec<ManifestFile>, StandardsError> {
    let manifest = load_manifest(&standards_dir.join("manifest.toml"))?;
    let mut files = manifest.files;
    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

fn load_manifest(path: &Path) -> Result<Manifest, StandardsError> {
    let contents = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
    toml::from_str(&contents).map_err(|e| StandardsError::Toml {
        path: path.to_path_buf(),
        source: e,
    })
}

fn validate_manifest(manifest: &Manifest, standards_dir: &Path) -> Result<(), StandardsError> {
    if manifest.manifest.schema != MANIFEST_SCHEMA {
        return Err(StandardsError::InvalidManifest {
            message: format!("unsupported schema: {}", manifest.manifest.schema),
        });
    }
    if manifest.manifest.schema_version != 1 {
        return Err(StandardsError::InvalidManifest {
            message: format!(
                "unsupported schema_version: {}",
                manifest.manifest.schema_version
            ),
        });
    }

    let mut roles: BTreeSet<&str> = BTreeSet::new();
    let mut manifest_paths: BTreeSet<PathBuf> = BTreeSet::new();

    for file in &manifest.files {
        if roles.contains(file.role.as_str()) {
            return Err(StandardsError::DuplicateRole {
                role: file.role.clone(),
            });
        }
        roles.insert(file.role.as_str());

        if !ALLOWED_KINDS.contains(&file.kind.as_str()) {
            return Err(StandardsError::InvalidManifest {
                message: format!("unsupported kind '{}' for {}", file.kind, file.path),
            });
        }

        validate_sha(&file.sha256, &file.path)?;

        let path = validate_path(&file.path)?;
        manifest_paths.insert(path);
    }

    for &(role, _, _) in REQUIRED_TABLES {
        if !roles.contains(role) {
            return Err(StandardsError::MissingRole {
                role: role.to_string(),
            });
        }
    }

    let actual_files = list_files_under(standards_dir)?;
    for path in actual_files {
        if path == PathBuf::from("manifest.toml") {
            continue;
        }
        if !manifest_paths.contains(&path) {
            return Err(StandardsError::UnexpectedFile {
                path: standards_dir.join(path),
            });
        }
    }

    Ok(())
}

fn verify_file(standards_dir: &Path, file: &ManifestFile) -> Result<(), StandardsError> {
    let full_path = standards_dir.join(&file.path);
    let bytes = std::fs::read(&full_path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StandardsError::MissingFile {
                path: full_path.clone(),
            }
        } else {
            StandardsError::io(full_path.clone(), e)
        }
    })?;

    let actual = sha256_hex(&bytes);
    let expected = file.sha256.to_ascii_lowercase();
    if actual != expected {
        return Err(StandardsError::Sha256Mismatch {
            path: full_path,
            expected,
            actual,
        });
    }
    Ok(())
}

fn resolve_role_path(
    standards_dir: &Path,
    files: &[ManifestFile],
    role: &str,
) -> Result<PathBuf, StandardsError> {
    let f = files
        .iter()
        .find(|f| f.role == role)
        .ok_or_else(|| StandardsError::MissingRole {
            role: role.to_string(),
        })?;
    Ok(standards_dir.join(&f.path))
}

fn validate_sha(sha: &str, path: &str) -> Result<(), StandardsError> {
    if sha.len() != 64 || !sha.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(StandardsError::InvalidSha256 {
            path: PathBuf::from(path),
            message: "sha256 must be 64 hex characters".to_string(),
        });
    }
    Ok(())
}

fn validate_path(path: &str) -> Result<PathBuf, StandardsError> {
    if path.contains('\\') {
        return Err(StandardsError::InvalidPath {
            path: PathBuf::from(path),
            message: "manifest path must use '/' separators".to_string(),
        });
    }

    let p = PathBuf::from(path);
    if p.is_absolute() {
        return Err(StandardsError::InvalidPath {
            path: p,
            message: "manifest path must be relative".to_string(),
        });
    }

    for c in p.components() {
        if matches!(c, Component::ParentDir) {
            return Err(StandardsError::InvalidPath {
                path: PathBuf::from(path),
                message: "manifest path must not traverse out of the standards directory"
                    .to_string(),
            });
        }
    }

    Ok(normalize_path(&p))
}

fn list_files_under(root: &Path) -> Result<BTreeSet<PathBuf>, StandardsError> {
    let mut stack = vec![root.to_path_buf()];
    let mut files = BTreeSet::new();

    while let Some(dir) = stack.pop() {
        for entry in std::fs::read_dir(&dir).map_err(|e| StandardsError::io(&dir, e))? {
            let entry = entry.map_err(|e| StandardsError::io(&dir, e))?;
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
            } else if path.is_file() {
                let rel = path
                    .strip_prefix(root)
                    .map_err(|e| StandardsError::InvalidPath {
                        path: path.clone(),
                        message: format!("failed to relativize path: {e}"),
                    })?
                    .to_path_buf();
                files.insert(normalize_path(&rel));
            }
        }
    }

    Ok(files)
}

fn normalize_path(p: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for c in p.components() {
        match c {
            Component::CurDir => {}
            _ => out.push(c.as_os_str()),
        }
    }
    out
}
