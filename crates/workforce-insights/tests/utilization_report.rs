use workforce_insights::workflows::utilization::{report_columns, WorkforceDataset};

const DATASET: &str = r#"[
    {
        "employees": {
            "name": "Anna Architect",
            "statusAggregation": {
                "status": "active",
                "monthlySalary": "4500"
            },
            "workforceUtilisation": {
                "utilisationRateLastTwelveMonths": "0.8534",
                "utilisationRateYearToDate": "0.9",
                "lastThreeMonthsIndividually": [
                    { "utilisationRate": "0.9" },
                    { "utilisationRate": "0.8" },
                    { "utilisationRate": "0.7" }
                ]
            },
            "potentialEarningsByMonth": [
                { "month": "2025-06", "costs": "5200.50" },
                { "month": "2025-07", "costs": "6100" },
                { "month": "2025-08", "costs": "5800" }
            ]
        }
    },
    {
        "externals": {
            "name": "Carl Contractor",
            "status": "active",
            "statusAggregation": { "monthlySalary": "3000" },
            "workforceUtilisation": {
                "utilisationRateLastTwelveMonths": "oops",
                "lastThreeMonthsIndividually": [
                    { "utilisationRate": "0.5" }
                ]
            },
            "costsByMonth": [
                { "month": "2025-07", "costs": "2000" },
                { "month": "2025-08", "costs": "2500" }
            ]
        }
    },
    {
        "employees": {
            "name": "Paula Paused",
            "statusAggregation": { "status": "parental_leave" }
        }
    },
    {
        "externals": {
            "name": "Gap External",
            "status": "active",
            "statusAggregation": { "monthlySalary": "800" },
            "costsByMonth": [
                { "month": "2025-06", "costs": "1500" },
                { "month": "2025-08", "costs": "1700" }
            ]
        }
    },
    {}
]"#;

#[test]
fn report_covers_selection_extraction_and_derived_metrics() {
    let dataset = WorkforceDataset::from_json_str(DATASET).expect("dataset parses");
    let rows = dataset.utilization_rows();

    assert_eq!(dataset.records().len(), 5);
    assert_eq!(rows.len(), 3, "only active, populated records become rows");
    assert_eq!(rows.len(), dataset.active_workers());

    let anna = &rows[0];
    assert_eq!(anna.person, "Anna Architect");
    assert_eq!(anna.past12_months, "85%");
    assert_eq!(anna.y2d, "90%");
    assert_eq!(anna.august, "90%");
    assert_eq!(anna.july, "80%");
    assert_eq!(anna.june, "70%");
    // Reference month 2025-08, previous 2025-07 earned 6100, salary 4500.
    assert_eq!(anna.net_earnings_prev_month, "1600.00 EUR");

    let carl = &rows[1];
    assert_eq!(carl.person, "Carl Contractor");
    assert_eq!(carl.past12_months, "-", "unparseable rate renders as dash");
    assert_eq!(carl.y2d, "N/A", "absent rate renders as N/A");
    assert_eq!(carl.august, "50%");
    assert_eq!(carl.july, "N/A", "short sample list leaves older slots empty");
    assert_eq!(carl.june, "N/A");
    assert_eq!(carl.net_earnings_prev_month, "-1000.00 EUR");

    let gap = &rows[2];
    assert_eq!(gap.person, "Gap External");
    // 2025-07 is missing from the series, so previous-month earnings are 0.
    assert_eq!(gap.net_earnings_prev_month, "-800.00 EUR");
}

#[test]
fn column_spec_exposes_the_fixed_table_layout() {
    let labels: Vec<&str> = report_columns().iter().map(|column| column.label).collect();
    assert_eq!(
        labels,
        vec![
            "Person",
            "Past 12 Months",
            "Y2D",
            "June",
            "July",
            "August",
            "Net Earnings Prev Month",
        ]
    );
}

#[test]
fn rerunning_the_transformation_is_idempotent() {
    let dataset = WorkforceDataset::from_json_str(DATASET).expect("dataset parses");
    assert_eq!(dataset.utilization_rows(), dataset.utilization_rows());
}
