use crate::infra::{AppState, DatasetSource};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use workforce_insights::error::AppError;
use workforce_insights::workflows::utilization::{
    report_columns, ReportColumn, UtilizationRow, WorkforceDataset,
};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct UtilizationReportRequest {
    /// Inline JSON workforce dataset; the server's dataset is used when absent.
    #[serde(default)]
    pub(crate) dataset: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct UtilizationReportResponse {
    pub(crate) data_source: DatasetSource,
    pub(crate) source_records: usize,
    pub(crate) active_workers: usize,
    pub(crate) columns: Vec<ReportColumn>,
    pub(crate) rows: Vec<UtilizationRow>,
}

pub(crate) fn app_router() -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/utilization/report",
            axum::routing::post(utilization_report_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn utilization_report_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<UtilizationReportRequest>,
) -> Result<Json<UtilizationReportResponse>, AppError> {
    let inline = payload
        .dataset
        .map(|raw| WorkforceDataset::from_json_str(&raw))
        .transpose()?;

    let (dataset, data_source) = match inline.as_ref() {
        Some(dataset) => (dataset, DatasetSource::Inline),
        None => (state.dataset.as_ref(), state.dataset_source),
    };

    Ok(Json(UtilizationReportResponse {
        data_source,
        source_records: dataset.records().len(),
        active_workers: dataset.active_workers(),
        columns: report_columns().to_vec(),
        rows: dataset.utilization_rows(),
    }))
}
