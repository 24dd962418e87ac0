mod domain;
pub mod metrics;
pub mod report;

pub use domain::{
    ActiveWorker, MonthlyFigure, StaffRecord, StatusAggregation, UtilisationSample, WorkerKind,
    WorkerProfile, ACTIVE_STATUS,
};
pub use report::{report_columns, ReportColumn, UtilizationRow};

use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug)]
pub enum WorkforceDataError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for WorkforceDataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkforceDataError::Io(err) => write!(f, "failed to read workforce dataset: {}", err),
            WorkforceDataError::Json(err) => {
                write!(f, "invalid workforce dataset JSON: {}", err)
            }
        }
    }
}

impl std::error::Error for WorkforceDataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WorkforceDataError::Io(err) => Some(err),
            WorkforceDataError::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for WorkforceDataError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for WorkforceDataError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// An in-memory workforce dataset: the ordered staff records of one JSON
/// export. Loading happens once; the transformation itself never touches
/// I/O and can be re-run on the same dataset at will.
#[derive(Debug, Clone)]
pub struct WorkforceDataset {
    records: Vec<StaffRecord>,
}

impl WorkforceDataset {
    pub fn new(records: Vec<StaffRecord>) -> Self {
        Self { records }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, WorkforceDataError> {
        let file = std::fs::File::open(path.as_ref())?;
        let dataset = Self::from_reader(file)?;
        debug!(
            path = %path.as_ref().display(),
            records = dataset.records.len(),
            "loaded workforce dataset"
        );
        Ok(dataset)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, WorkforceDataError> {
        let records = serde_json::from_reader(reader)?;
        Ok(Self::new(records))
    }

    pub fn from_json_str(raw: &str) -> Result<Self, WorkforceDataError> {
        let records = serde_json::from_str(raw)?;
        Ok(Self::new(records))
    }

    pub fn records(&self) -> &[StaffRecord] {
        &self.records
    }

    /// Builds the display rows for every active worker, in source order.
    pub fn utilization_rows(&self) -> Vec<UtilizationRow> {
        report::build_rows(&self.records)
    }

    pub fn active_workers(&self) -> usize {
        self.records
            .iter()
            .filter(|record| record.active_worker().is_some())
            .count()
    }
}
