use serde::Deserialize;

/// Status value that keeps a worker in the report.
pub const ACTIVE_STATUS: &str = "active";

/// One entry of the raw workforce dataset. At most one of `employees` and
/// `externals` carries a profile; records with neither are skipped.
#[derive(Debug, Clone, Deserialize)]
pub struct StaffRecord {
    #[serde(default)]
    pub employees: Option<WorkerProfile>,
    #[serde(default)]
    pub externals: Option<WorkerProfile>,
}

/// Person payload shared by employees and externals. Every field is optional
/// because upstream exports routinely omit whole substructures.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub status_aggregation: Option<StatusAggregation>,
    #[serde(default)]
    pub workforce_utilisation: Option<WorkforceUtilisation>,
    #[serde(default)]
    pub potential_earnings_by_month: Option<Vec<MonthlyFigure>>,
    #[serde(default)]
    pub costs_by_month: Option<Vec<MonthlyFigure>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusAggregation {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub monthly_salary: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkforceUtilisation {
    #[serde(default)]
    pub utilisation_rate_last_twelve_months: Option<String>,
    #[serde(default)]
    pub utilisation_rate_year_to_date: Option<String>,
    /// At most three samples, ordered most-recent-first.
    #[serde(default)]
    pub last_three_months_individually: Option<Vec<UtilisationSample>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtilisationSample {
    #[serde(default)]
    pub utilisation_rate: Option<String>,
}

/// One entry of a monthly financial series, chronologically ascending in the
/// source data (last entry = latest month).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyFigure {
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default)]
    pub costs: Option<String>,
}

impl WorkerProfile {
    /// Resolves the effective status: the aggregation wins, the top-level
    /// field is the fallback.
    pub fn resolved_status(&self) -> Option<&str> {
        self.status_aggregation
            .as_ref()
            .and_then(|aggregation| aggregation.status.as_deref())
            .or(self.status.as_deref())
    }

    pub fn is_active(&self) -> bool {
        self.resolved_status() == Some(ACTIVE_STATUS)
    }

    pub fn monthly_salary(&self) -> Option<&str> {
        self.status_aggregation
            .as_ref()
            .and_then(|aggregation| aggregation.monthly_salary.as_deref())
    }

    /// The financial series driving the previous-month earnings figure:
    /// employees carry `potentialEarningsByMonth`, externals `costsByMonth`.
    pub fn earnings_series(&self) -> &[MonthlyFigure] {
        self.potential_earnings_by_month
            .as_deref()
            .or(self.costs_by_month.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerKind {
    Employee,
    External,
}

impl WorkerKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Employee => "Employee",
            Self::External => "External",
        }
    }
}

/// A record that survived selection: a populated profile with active status.
#[derive(Debug, Clone, Copy)]
pub enum ActiveWorker<'a> {
    Employee(&'a WorkerProfile),
    External(&'a WorkerProfile),
}

impl<'a> ActiveWorker<'a> {
    pub fn profile(&self) -> &'a WorkerProfile {
        match self {
            Self::Employee(profile) | Self::External(profile) => profile,
        }
    }

    pub fn kind(&self) -> WorkerKind {
        match self {
            Self::Employee(_) => WorkerKind::Employee,
            Self::External(_) => WorkerKind::External,
        }
    }
}

impl StaffRecord {
    /// The selector: yields the profile when one is populated and its
    /// resolved status is active, `None` otherwise. Dropping a record here
    /// is normal, not an error.
    pub fn active_worker(&self) -> Option<ActiveWorker<'_>> {
        let worker = match (&self.employees, &self.externals) {
            (Some(profile), _) => ActiveWorker::Employee(profile),
            (None, Some(profile)) => ActiveWorker::External(profile),
            (None, None) => return None,
        };

        worker.profile().is_active().then_some(worker)
    }
}
