use std::fs;
use std::path::{Path, PathBuf};

use growth_standards::hash::sha256_hex;
use growth_standards::{StandardsError, verify_and_load};

const TABLE_FILES: &[(&str, &str, &str)] = &[
    ("boys-lfa.csv", "boys_length_for_age", MONTH_TABLE),
    ("girls-lfa.csv", "girls_length_for_age", MONTH_TABLE),
    ("boys-wfa.csv", "boys_weight_for_age", MONTH_TABLE),
    ("girls-wfa.csv", "girls_weight_for_age", MONTH_TABLE),
    ("boys-wfl.csv", "boys_weight_for_length", LENGTH_TABLE),
    ("girls-wfl.csv", "girls_weight_for_length", LENGTH_TABLE),
];

const MONTH_TABLE: &str = "Month,L,M,S\n0,1,49.9,0.038\n1,1,54.7,0.036\n";
const LENGTH_TABLE: &str = "Length,L,M,S\n45.0,-0.35,2.44,0.092\n45.5,-0.35,2.52,0.091\n";

fn fixture_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join("growth-standards-tests")
        .join(format!("{name}-{}", std::process::id()));
    if dir.exists() {
        fs::remove_dir_all(&dir).expect("clear fixture dir");
    }
    fs::create_dir_all(&dir).expect("create fixture dir");
    dir
}

fn write_manifest(dir: &Path, files: &[(&str, &str, &str)]) {
    let mut manifest = String::from(
        "[manifest]\nschema = \"growth-zscore.standards-manifest\"\nschema_version = 1\n\n[pins]\nwho = \"test\"\n\n",
    );
    for (path, role, contents) in files {
        let sha = sha256_hex(contents.as_bytes());
        manifest.push_str(&format!(
            "[[files]]\npath = \"{path}\"\nsha256 = \"{sha}\"\nkind = \"csv\"\nrole = \"{role}\"\n\n"
        ));
    }
    fs::write(dir.join("manifest.toml"), manifest).expect("write manifest");
}

fn write_standards_dir(dir: &Path) {
    for (path, _, contents) in TABLE_FILES {
        fs::write(dir.join(path), contents).expect("write table");
    }
    write_manifest(dir, TABLE_FILES);
}

#[test]
fn loads_well_formed_fixture_dir() {
    let dir = fixture_dir("well-formed");
    write_standards_dir(&dir);
    let (store, summary) = verify_and_load(&dir).expect("load fixture standards");
    assert_eq!(store.len(), 6);
    assert_eq!(summary.pins.who, "test");
}

#[test]
fn missing_manifest_is_io_error() {
    let dir = fixture_dir("missing-manifest");
    let result = verify_and_load(&dir);
    assert!(matches!(result, Err(StandardsError::Io { .. })));
}

#[test]
fn tampered_table_is_sha256_mismatch() {
    let dir = fixture_dir("tampered");
    write_standards_dir(&dir);
    fs::write(dir.join("boys-lfa.csv"), "Month,L,M,S\n0,1,50.0,0.038\n").expect("tamper table");
    let result = verify_and_load(&dir);
    assert!(matches!(result, Err(StandardsError::Sha256Mismatch { .. })));
}

#[test]
fn unlisted_file_is_rejected() {
    let dir = fixture_dir("unlisted");
    write_standards_dir(&dir);
    fs::write(dir.join("extra.csv"), "Month,L,M,S\n").expect("write extra file");
    let result = verify_and_load(&dir);
    assert!(matches!(result, Err(StandardsError::UnexpectedFile { .. })));
}

#[test]
fn missing_role_is_rejected() {
    let dir = fixture_dir("missing-role");
    let mut files = TABLE_FILES.to_vec();
    files.pop();
    for (path, _, contents) in &files {
        fs::write(dir.join(path), contents).expect("write table");
    }
    write_manifest(&dir, &files);
    let result = verify_and_load(&dir);
    match result {
        Err(StandardsError::MissingRole { role }) => {
            assert_eq!(role, "girls_weight_for_length");
        }
        other => panic!("expected MissingRole, got {other:?}"),
    }
}

#[test]
fn non_monotonic_axis_fails_load() {
    let dir = fixture_dir("non-monotonic");
    let bad = "Month,L,M,S\n1,1,54.7,0.036\n0,1,49.9,0.038\n";
    let mut files = TABLE_FILES.to_vec();
    files[0] = ("boys-lfa.csv", "boys_length_for_age", bad);
    for (path, _, contents) in &files {
        fs::write(dir.join(path), contents).expect("write table");
    }
    write_manifest(&dir, &files);
    let result = verify_and_load(&dir);
    assert!(matches!(result, Err(StandardsError::InvalidTable { .. })));
}

#[test]
fn missing_column_fails_load() {
    let dir = fixture_dir("missing-column");
    let bad = "Month,L,M\n0,1,49.9\n";
    let mut files = TABLE_FILES.to_vec();
    files[2] = ("boys-wfa.csv", "boys_weight_for_age", bad);
    for (path, _, contents) in &files {
        fs::write(dir.join(path), contents).expect("write table");
    }
    write_manifest(&dir, &files);
    let result = verify_and_load(&dir);
    match result {
        Err(StandardsError::MissingColumn { column, .. }) => assert_eq!(column, "S"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn unparseable_number_fails_load() {
    let dir = fixture_dir("bad-number");
    let bad = "Month,L,M,S\n0,1,not-a-number,0.038\n";
    let mut files = TABLE_FILES.to_vec();
    files[3] = ("girls-wfa.csv", "girls_weight_for_age", bad);
    for (path, _, contents) in &files {
        fs::write(dir.join(path), contents).expect("write table");
    }
    write_manifest(&dir, &files);
    let result = verify_and_load(&dir);
    match result {
        Err(StandardsError::InvalidNumber { column, line, .. }) => {
            assert_eq!(column, "M");
            assert_eq!(line, 2);
        }
        other => panic!("expected InvalidNumber, got {other:?}"),
    }
}
