mod views;

pub use views::{report_columns, ReportColumn, UtilizationRow};

use super::domain::{ActiveWorker, StaffRecord, UtilisationSample};
use super::metrics::{format_percentage, net_earnings_prev_month};

// `lastThreeMonthsIndividually` is ordered most-recent-first, so the newest
// sample lands in the latest-named column. The slot indices and the column
// labels in `views` must change together.
const JUNE_SLOT: usize = 2;
const JULY_SLOT: usize = 1;
const AUGUST_SLOT: usize = 0;

/// Runs the full transformation: selection, field extraction, and the
/// derived net-earnings figure, one row per active worker. Row order
/// follows source order.
pub fn build_rows(records: &[StaffRecord]) -> Vec<UtilizationRow> {
    records
        .iter()
        .filter_map(StaffRecord::active_worker)
        .map(row_for)
        .collect()
}

fn row_for(worker: ActiveWorker<'_>) -> UtilizationRow {
    let profile = worker.profile();
    let utilisation = profile.workforce_utilisation.as_ref();
    let last_three = utilisation
        .and_then(|u| u.last_three_months_individually.as_deref())
        .unwrap_or_default();

    UtilizationRow {
        person: profile.name.clone().unwrap_or_default(),
        past12_months: format_percentage(
            utilisation.and_then(|u| u.utilisation_rate_last_twelve_months.as_deref()),
        ),
        y2d: format_percentage(
            utilisation.and_then(|u| u.utilisation_rate_year_to_date.as_deref()),
        ),
        june: format_percentage(slot_rate(last_three, JUNE_SLOT)),
        july: format_percentage(slot_rate(last_three, JULY_SLOT)),
        august: format_percentage(slot_rate(last_three, AUGUST_SLOT)),
        net_earnings_prev_month: net_earnings_prev_month(
            profile.earnings_series(),
            profile.monthly_salary(),
        ),
    }
}

fn slot_rate(samples: &[UtilisationSample], slot: usize) -> Option<&str> {
    samples
        .get(slot)
        .and_then(|sample| sample.utilisation_rate.as_deref())
}
