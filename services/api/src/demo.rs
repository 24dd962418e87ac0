use clap::Args;
use std::path::PathBuf;
use workforce_insights::error::AppError;
use workforce_insights::workflows::utilization::{
    report_columns, UtilizationRow, WorkforceDataError, WorkforceDataset,
};

/// Sample workforce export used by the demo command and as the server
/// fallback when no dataset file is configured.
const BUNDLED_DATASET_JSON: &str = include_str!("../data/workforce.json");

pub(crate) fn bundled_dataset() -> Result<WorkforceDataset, AppError> {
    WorkforceDataset::from_json_str(BUNDLED_DATASET_JSON).map_err(AppError::from)
}

#[derive(Args, Debug)]
pub(crate) struct UtilizationReportArgs {
    /// Workforce dataset JSON file (defaults to the bundled sample)
    #[arg(long)]
    pub(crate) dataset: Option<PathBuf>,
    /// Emit the rows and column spec as JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Emit the rows and column spec as JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_utilization_report(args: UtilizationReportArgs) -> Result<(), AppError> {
    let UtilizationReportArgs { dataset, json } = args;

    let dataset = match dataset {
        Some(path) => WorkforceDataset::from_path(path)?,
        None => bundled_dataset()?,
    };

    render_report(&dataset, json)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Workforce utilization demo (bundled sample dataset)");
    render_report(&bundled_dataset()?, args.json)
}

fn render_report(dataset: &WorkforceDataset, json: bool) -> Result<(), AppError> {
    let rows = dataset.utilization_rows();

    if json {
        let payload = serde_json::json!({
            "columns": report_columns(),
            "rows": rows,
        });
        let pretty = serde_json::to_string_pretty(&payload).map_err(WorkforceDataError::Json)?;
        println!("{pretty}");
        return Ok(());
    }

    render_table(&rows);
    println!(
        "\n{} of {} source records are active",
        rows.len(),
        dataset.records().len()
    );
    Ok(())
}

fn row_cells(row: &UtilizationRow) -> [&str; 7] {
    [
        row.person.as_str(),
        row.past12_months.as_str(),
        row.y2d.as_str(),
        row.june.as_str(),
        row.july.as_str(),
        row.august.as_str(),
        row.net_earnings_prev_month.as_str(),
    ]
}

fn render_table(rows: &[UtilizationRow]) {
    let columns = report_columns();
    let mut widths: Vec<usize> = columns.iter().map(|column| column.label.len()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row_cells(row)) {
            *width = (*width).max(cell.len());
        }
    }

    let header: Vec<String> = columns
        .iter()
        .zip(widths.iter().copied())
        .map(|(column, width)| format!("{:<width$}", column.label))
        .collect();
    println!("{}", header.join(" | "));
    println!("{}", widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("-|-"));

    for row in rows {
        let cells: Vec<String> = row_cells(row)
            .iter()
            .zip(widths.iter().copied())
            .map(|(cell, width)| format!("{:<width$}", cell))
            .collect();
        println!("{}", cells.join(" | "));
    }
}
