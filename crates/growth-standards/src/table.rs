#![deny(unsafe_code)]

use std::collections::BTreeMap;
use std::path::Path;

use growth_model::{AxisValue, Lms, ReferenceRow};

use crate::error::StandardsError;

/// The kind of independent variable a reference table is keyed on, which
/// fixes the resolution of the published grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisKind {
    /// Whole completed months.
    Months,
    /// Centimeters on a 0.5 cm grid.
    Centimeters,
}

impl AxisKind {
    /// CSV column carrying the axis value for this kind of table.
    pub fn column(&self) -> &'static str {
        match self {
            AxisKind::Months => "Month",
            AxisKind::Centimeters => "Length",
        }
    }

    /// Grid step expressed in tenths of the axis unit.
    fn grid_step_tenths(&self) -> i64 {
        match self {
            AxisKind::Months => 10,
            AxisKind::Centimeters => 5,
        }
    }

    /// Round a caller-supplied axis value to the published grid and return
    /// the integer key, or `None` for values a grid point cannot represent.
    fn grid_key(&self, value: f64) -> Option<i64> {
        if !value.is_finite() || value.abs() > 1e6 {
            return None;
        }
        let step = self.grid_step_tenths();
        let steps = (value * 10.0 / step as f64).round();
        Some(steps as i64 * step)
    }

    /// Exact key for a tabulated axis value, or `None` if it is off-grid.
    fn exact_key(&self, value: f64) -> Option<i64> {
        let key = self.grid_key(value)?;
        if (value * 10.0 - key as f64).abs() > 1e-6 {
            return None;
        }
        Some(key)
    }
}

/// One immutable (sex, indicator) reference table.
///
/// Rows are keyed internally by integer tenths of the axis unit, so a lookup
/// is an exact map hit after rounding to the grid; no float comparison and
/// no interpolation between rows.
#[derive(Debug, Clone)]
pub struct LmsTable {
    axis: AxisKind,
    rows: Vec<ReferenceRow>,
    index: BTreeMap<i64, Lms>,
}

impl LmsTable {
    /// Build a table from tabulated rows, enforcing the load-time
    /// invariants: at least one row, every axis value on the published
    /// grid, values strictly increasing.
    pub fn from_rows(axis: AxisKind, rows: Vec<ReferenceRow>) -> Result<Self, String> {
        if rows.is_empty() {
            return Err("table has no rows".to_string());
        }
        let mut index = BTreeMap::new();
        let mut prev_key: Option<i64> = None;
        for row in &rows {
            let key = axis
                .exact_key(row.axis)
                .ok_or_else(|| format!("axis value {} is off the published grid", row.axis))?;
            if let Some(prev) = prev_key {
                if key <= prev {
                    return Err(format!("axis value {} is not strictly increasing", row.axis));
                }
            }
            prev_key = Some(key);
            index.insert(key, row.lms);
        }
        Ok(Self { axis, rows, index })
    }

    /// Coefficients for the row matching `value` after rounding to the
    /// grid, or `None` when the value falls outside the table's coverage
    /// or is not the kind of axis this table is keyed on.
    pub fn lookup(&self, value: AxisValue) -> Option<&Lms> {
        let key = match (value, self.axis) {
            (AxisValue::AgeMonths(months), AxisKind::Months) => i64::from(months) * 10,
            (AxisValue::LengthCm(cm), AxisKind::Centimeters) => self.axis.grid_key(cm)?,
            _ => return None,
        };
        self.index.get(&key)
    }

    pub fn axis_kind(&self) -> AxisKind {
        self.axis
    }

    pub fn rows(&self) -> &[ReferenceRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Smallest tabulated axis value.
    pub fn axis_min(&self) -> f64 {
        self.rows[0].axis
    }

    /// Largest tabulated axis value.
    pub fn axis_max(&self) -> f64 {
        self.rows[self.rows.len() - 1].axis
    }
}

fn header_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim_matches('\u{feff}').trim() == name)
}

fn parse_number(
    row: &csv::StringRecord,
    idx: usize,
    path: &Path,
    line: usize,
    column: &str,
) -> Result<f64, StandardsError> {
    let raw = row.get(idx).unwrap_or("").trim();
    let value: f64 = raw.parse().map_err(|_| StandardsError::InvalidNumber {
        path: path.to_path_buf(),
        line,
        column: column.to_string(),
        value: raw.to_string(),
    })?;
    if !value.is_finite() {
        return Err(StandardsError::InvalidNumber {
            path: path.to_path_buf(),
            line,
            column: column.to_string(),
            value: raw.to_string(),
        });
    }
    Ok(value)
}

/// Parses one `{axis},L,M,S` reference CSV as published in the WHO table
/// exports (`Month,L,M,S` or `Length,L,M,S`).
pub fn parse_lms_csv(path: &Path, axis: AxisKind) -> Result<LmsTable, StandardsError> {
    let bytes = std::fs::read(path).map_err(|e| StandardsError::io(path, e))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes.as_slice());
    let headers = reader
        .headers()
        .map_err(|e| StandardsError::Csv {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .clone();

    let axis_column = axis.column();
    let column_index = |name: &str| -> Result<usize, StandardsError> {
        header_index(&headers, name).ok_or_else(|| StandardsError::MissingColumn {
            path: path.to_path_buf(),
            column: name.to_string(),
        })
    };
    let idx_axis = column_index(axis_column)?;
    let idx_l = column_index("L")?;
    let idx_m = column_index("M")?;
    let idx_s = column_index("S")?;

    let mut rows = Vec::new();
    for (record_idx, record) in reader.records().enumerate() {
        let line = record_idx + 2;
        let record = record.map_err(|e| StandardsError::Csv {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let axis_value = parse_number(&record, idx_axis, path, line, axis_column)?;
        let l = parse_number(&record, idx_l, path, line, "L")?;
        let m = parse_number(&record, idx_m, path, line, "M")?;
        let s = parse_number(&record, idx_s, path, line, "S")?;
        rows.push(ReferenceRow {
            axis: axis_value,
            lms: Lms { l, m, s },
        });
    }

    LmsTable::from_rows(axis, rows).map_err(|message| StandardsError::InvalidTable {
        path: path.to_path_buf(),
        message,
    })
}
