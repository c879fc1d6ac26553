//! Command entry points: load, refine, write, verify, and report.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{error, info, info_span};

use census_ingest::{load_dictionary, read_csv_table, read_record_count, write_csv_table};
use census_refine::{RefineReport, refine};
use census_report::{
    ChartKind, counts_table, cross_tabulate, crosstab_table, filtered_counts, labelled_counts,
    render_chart,
};

use crate::cli::{ChartKindArg, RefineArgs, ReportArgs};

/// Everything the summary printer needs after a refine run.
#[derive(Debug)]
pub struct RefineSummary {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub removed_output: Option<PathBuf>,
    pub report: RefineReport,
    /// Post-write record-count verification: `Some(true)` on match,
    /// `Some(false)` on mismatch, `None` when the re-read itself failed.
    pub verified: Option<bool>,
}

pub fn run_refine(args: &RefineArgs) -> Result<RefineSummary> {
    let span = info_span!("refine", input = %args.input_file.display());
    let _guard = span.enter();

    info!(path = %args.input_file.display(), "loading raw records");
    let table = read_csv_table(&args.input_file)?;
    info!(records = table.len(), "loaded raw records");
    let dictionary = load_dictionary(&args.dictionary_file)?;

    let outcome = refine(&table, &dictionary, &args.id_column)
        .with_context(|| format!("refine {}", args.input_file.display()))?;
    if outcome.report.duplicates_removed > 0 {
        info!(
            removed = outcome.report.duplicates_removed,
            "removed duplicate records"
        );
    } else {
        info!("no duplicate records found");
    }
    info!(
        kept = outcome.report.kept_rows,
        rejected = outcome.report.rejected_rows,
        "refinement complete"
    );

    write_csv_table(&args.output_file, &outcome.refined)?;
    info!(path = %args.output_file.display(), "refined data saved");
    let verified = verify_written_count(&args.output_file, outcome.refined.len());

    let mut removed_output = None;
    if let Some(path) = &args.removed_output {
        if outcome.rejected.is_empty() {
            info!("no rejected records; skipping removed-output file");
        } else {
            write_csv_table(path, &outcome.rejected)?;
            info!(
                path = %path.display(),
                records = outcome.rejected.len(),
                "rejected records saved"
            );
            removed_output = Some(path.clone());
        }
    }

    Ok(RefineSummary {
        input_file: args.input_file.clone(),
        output_file: args.output_file.clone(),
        removed_output,
        report: outcome.report,
        verified,
    })
}

/// Re-read what was written and compare record counts. Observational only: a
/// mismatch is logged as an error but nothing is rolled back or retried.
fn verify_written_count(path: &Path, expected: usize) -> Option<bool> {
    match read_record_count(path) {
        Ok(found) if found == expected => {
            info!(records = found, "verification successful: file count matches");
            Some(true)
        }
        Ok(found) => {
            error!(expected, found, "verification failed: saved file count mismatch");
            Some(false)
        }
        Err(err) => {
            error!(error = %err, path = %path.display(), "verification re-read failed");
            None
        }
    }
}

pub fn run_report(args: &ReportArgs) -> Result<()> {
    let span = info_span!("report", input = %args.input_file.display());
    let _guard = span.enter();

    let table = read_csv_table(&args.input_file)?;
    let dictionary = load_dictionary(&args.dictionary_file)?;

    let counts = match &args.filter_column {
        Some(filter_column) => filtered_counts(
            &table,
            filter_column,
            &args.filter_codes,
            &args.column,
            &dictionary,
        )?,
        None => labelled_counts(&table, &args.column, &dictionary)?,
    };
    println!("{}", counts_table(&counts));

    if let Some(by) = &args.by {
        let crosstab = cross_tabulate(&table, &args.column, by, &dictionary)?;
        println!();
        println!("{}", crosstab_table(&crosstab));
    }

    if let Some(path) = &args.chart {
        let kind = match args.chart_kind {
            ChartKindArg::Bar => ChartKind::Bar,
            ChartKindArg::Pie => ChartKind::Pie,
        };
        let title = format!("{} distribution", args.column);
        render_chart(&counts, kind, &title, path)?;
        info!(path = %path.display(), "chart saved");
    }
    Ok(())
}
