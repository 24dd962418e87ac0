use crate::demo::bundled_dataset;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use workforce_insights::config::ReportConfig;
use workforce_insights::error::AppError;
use workforce_insights::workflows::utilization::WorkforceDataset;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) dataset: Arc<WorkforceDataset>,
    pub(crate) dataset_source: DatasetSource,
}

/// Where the rows of a report response came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum DatasetSource {
    /// Dataset posted inline with the request.
    Inline,
    /// Dataset file named by `APP_DATASET`.
    Configured,
    /// The sample dataset compiled into the binary.
    Bundled,
}

/// Loads the dataset the server answers with when a request carries none.
pub(crate) fn load_server_dataset(
    config: &ReportConfig,
) -> Result<(WorkforceDataset, DatasetSource), AppError> {
    match &config.dataset_path {
        Some(path) => {
            let dataset = WorkforceDataset::from_path(path)?;
            Ok((dataset, DatasetSource::Configured))
        }
        None => Ok((bundled_dataset()?, DatasetSource::Bundled)),
    }
}
