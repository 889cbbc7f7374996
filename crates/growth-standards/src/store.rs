#![deny(unsafe_code)]

use std::collections::BTreeMap;

use growth_model::{AxisValue, Indicator, Lms, Sex};

use crate::table::LmsTable;

/// The process-wide set of reference tables, one per (sex, indicator).
///
/// Loaded once at startup and read-only thereafter; construct it explicitly
/// and hand it to whoever needs lookups so tests can substitute fixture
/// tables.
#[derive(Debug, Clone)]
pub struct ReferenceStore {
    tables: BTreeMap<(Sex, Indicator), LmsTable>,
}

impl ReferenceStore {
    pub fn from_tables<I>(tables: I) -> Self
    where
        I: IntoIterator<Item = ((Sex, Indicator), LmsTable)>,
    {
        Self {
            tables: tables.into_iter().collect(),
        }
    }

    /// The table for a (sex, indicator) pair, if loaded.
    pub fn table(&self, sex: Sex, indicator: Indicator) -> Option<&LmsTable> {
        self.tables.get(&(sex, indicator))
    }

    /// Coefficients for the reference row matching `axis`, or `None` when
    /// the axis value falls outside the table's coverage.
    pub fn lookup(&self, sex: Sex, indicator: Indicator, axis: AxisValue) -> Option<&Lms> {
        self.table(sex, indicator)?.lookup(axis)
    }

    pub fn tables(&self) -> impl Iterator<Item = (Sex, Indicator, &LmsTable)> {
        self.tables
            .iter()
            .map(|(&(sex, indicator), table)| (sex, indicator, table))
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
