use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use tracing::info;

use growth_core::GrowthEngine;
use growth_model::GrowthAssessment;
use growth_standards::{default_who_path, doctor, verify_and_load};

use crate::cli::{Cli, DoctorArgs, ZscoreArgs};

/// The reference data directory the command should load from.
pub fn standards_dir(cli: &Cli) -> PathBuf {
    cli.standards_dir
        .clone()
        .unwrap_or_else(default_who_path)
}

pub fn run_zscore(dir: &Path, args: &ZscoreArgs) -> Result<()> {
    let (store, summary) = verify_and_load(dir)
        .with_context(|| format!("load reference data from {}", dir.display()))?;
    info!(
        who = %summary.pins.who,
        tables = summary.tables.len(),
        "reference data loaded"
    );

    let engine = GrowthEngine::new(store);
    let result = engine.evaluate_assessment(&assessment_from_args(args))?;

    if args.json {
        let payload = serde_json::json!({
            "z_score": result.z_score_rounded(),
            "classification": result.classification.as_str(),
        });
        println!("{payload}");
    } else {
        println!(
            "z-score {:.2}  ({})",
            result.z_score,
            result.classification.as_str()
        );
    }
    Ok(())
}

pub fn run_tables(dir: &Path) -> Result<()> {
    let (store, _) = verify_and_load(dir)
        .with_context(|| format!("load reference data from {}", dir.display()))?;

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sex"),
        header_cell("Indicator"),
        header_cell("Rows"),
        header_cell("Coverage"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for (sex, indicator, lms_table) in store.tables() {
        let coverage = if indicator.is_age_keyed() {
            format!(
                "{:.0}-{:.0} months",
                lms_table.axis_min(),
                lms_table.axis_max()
            )
        } else {
            format!(
                "{:.1}-{:.1} cm",
                lms_table.axis_min(),
                lms_table.axis_max()
            )
        };
        table.add_row(vec![
            Cell::new(sex.as_str()),
            Cell::new(indicator.label()),
            Cell::new(lms_table.len()),
            Cell::new(coverage),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_doctor(dir: &Path, args: &DoctorArgs) -> Result<()> {
    let report =
        doctor(dir).with_context(|| format!("verify reference data in {}", dir.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Standards: {}", dir.display());
    println!("WHO release: {}", report.pins.who);
    println!(
        "Files: {}  Tables: {}  Reference rows: {}",
        report.counts.files, report.counts.tables, report.counts.reference_rows
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sex"),
        header_cell("Indicator"),
        header_cell("Rows"),
        header_cell("Axis min"),
        header_cell("Axis max"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for summary in &report.tables {
        table.add_row(vec![
            Cell::new(summary.sex.as_str()),
            Cell::new(summary.indicator.label()),
            Cell::new(summary.rows),
            Cell::new(summary.axis_min),
            Cell::new(summary.axis_max),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn assessment_from_args(args: &ZscoreArgs) -> GrowthAssessment {
    GrowthAssessment {
        sex: args.sex.clone(),
        indicator: args.indicator.clone(),
        years: args.years,
        months: args.months,
        length: args.length,
        weight: args.weight,
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn zscore_args_map_to_assessment() {
        let args = ZscoreArgs::parse_from([
            "zscore", "--sex", "F", "--indicator", "weight", "--years", "1", "--months", "2",
            "--weight", "9.1",
        ]);
        let assessment = assessment_from_args(&args);
        assert_eq!(assessment.sex, "F");
        assert_eq!(assessment.indicator, "weight");
        assert_eq!(assessment.years, Some(1));
        assert_eq!(assessment.months, Some(2));
        assert_eq!(assessment.length, None);
        assert_eq!(assessment.weight, Some(9.1));
    }
}
