use serde::Serialize;

/// One display-ready table row for an active worker. Field names serialize
/// to the keys the rendering collaborator binds its columns to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UtilizationRow {
    pub person: String,
    pub past12_months: String,
    pub y2d: String,
    pub june: String,
    pub july: String,
    pub august: String,
    pub net_earnings_prev_month: String,
}

/// A (field key, display label) pair for the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportColumn {
    pub key: &'static str,
    pub label: &'static str,
}

/// The static column layout of the utilization table, in render order.
pub const fn report_columns() -> [ReportColumn; 7] {
    [
        ReportColumn {
            key: "person",
            label: "Person",
        },
        ReportColumn {
            key: "past12Months",
            label: "Past 12 Months",
        },
        ReportColumn {
            key: "y2d",
            label: "Y2D",
        },
        ReportColumn {
            key: "june",
            label: "June",
        },
        ReportColumn {
            key: "july",
            label: "July",
        },
        ReportColumn {
            key: "august",
            label: "August",
        },
        ReportColumn {
            key: "netEarningsPrevMonth",
            label: "Net Earnings Prev Month",
        },
    ]
}
