use super::domain::MonthlyFigure;
use chrono::{Months, NaiveDate};

/// Placeholder for an absent utilization rate.
pub const MISSING_RATE: &str = "N/A";
/// Placeholder for a present but unparseable utilization rate.
pub const INVALID_RATE: &str = "-";
/// Sentinel for a row whose financial series gives no reference month.
pub const NO_EARNINGS_DATA: &str = "- EUR";

/// Renders a fractional rate ("0.85") as a whole percentage ("85%").
///
/// Absent input maps to `"N/A"`, unparseable input to `"-"`. Rounding is
/// half-up on the decimal reading of the input: `0.855 * 100` sits just
/// below `85.5` in binary, so the scaled value is nudged before flooring.
pub fn format_percentage(value: Option<&str>) -> String {
    let Some(raw) = value else {
        return MISSING_RATE.to_string();
    };

    match raw.trim().parse::<f64>() {
        Ok(rate) => {
            let percent = (rate * 100.0 + 0.5 + 1e-9).floor();
            format!("{}%", percent as i64)
        }
        Err(_) => INVALID_RATE.to_string(),
    }
}

/// Parses a numeric-as-string field, mapping every absent or invalid shape
/// (`None`, empty, whitespace, the literal `"null"`, garbage) to `0.0`.
pub fn safe_parse_float(value: Option<&str>) -> f64 {
    let Some(raw) = value else { return 0.0 };
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(0.0)
}

/// Subtracts one calendar month from a `"YYYY-MM"` label, rolling the year
/// over at January.
pub fn previous_month(reference: &str) -> Option<String> {
    let anchored = format!("{}-01", reference.trim());
    let date = NaiveDate::parse_from_str(&anchored, "%Y-%m-%d").ok()?;
    let previous = date.checked_sub_months(Months::new(1))?;
    Some(previous.format("%Y-%m").to_string())
}

/// Computes the "net earnings previous month" display value: the series
/// entry labelled with the month before the series' last month, minus the
/// monthly salary, as `"<x.xx> EUR"`.
///
/// The lookup is by exact month label, not positional offset, so a gap in
/// the series yields earnings of 0 rather than a neighbouring month's value.
/// Without a usable reference month the row gets the `"- EUR"` sentinel.
pub fn net_earnings_prev_month(series: &[MonthlyFigure], monthly_salary: Option<&str>) -> String {
    let reference = series.last().and_then(|figure| figure.month.as_deref());
    let Some(previous) = reference.and_then(previous_month) else {
        return NO_EARNINGS_DATA.to_string();
    };

    let earnings = series
        .iter()
        .find(|figure| figure.month.as_deref() == Some(previous.as_str()))
        .and_then(|figure| figure.costs.as_deref());
    let earnings_prev_month = safe_parse_float(earnings);
    let salary = safe_parse_float(monthly_salary);

    format!("{:.2} EUR", earnings_prev_month - salary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn figure(month: &str, costs: &str) -> MonthlyFigure {
        MonthlyFigure {
            month: Some(month.to_string()),
            costs: Some(costs.to_string()),
        }
    }

    #[test]
    fn format_percentage_handles_missing_and_invalid_input() {
        assert_eq!(format_percentage(None), "N/A");
        assert_eq!(format_percentage(Some("abc")), "-");
        assert_eq!(format_percentage(Some("")), "-");
    }

    #[test]
    fn format_percentage_rounds_to_whole_percent() {
        assert_eq!(format_percentage(Some("0.8534")), "85%");
        assert_eq!(format_percentage(Some("0.9")), "90%");
        assert_eq!(format_percentage(Some("1")), "100%");
        assert_eq!(format_percentage(Some("0")), "0%");
    }

    #[test]
    fn format_percentage_rounds_half_up() {
        assert_eq!(format_percentage(Some("0.855")), "86%");
        assert_eq!(format_percentage(Some("0.845")), "85%");
    }

    #[test]
    fn safe_parse_float_maps_absent_shapes_to_zero() {
        assert_eq!(safe_parse_float(None), 0.0);
        assert_eq!(safe_parse_float(Some("")), 0.0);
        assert_eq!(safe_parse_float(Some("   ")), 0.0);
        assert_eq!(safe_parse_float(Some("null")), 0.0);
        assert_eq!(safe_parse_float(Some("12abc")), 0.0);
    }

    #[test]
    fn safe_parse_float_parses_numbers() {
        assert_eq!(safe_parse_float(Some("3.5")), 3.5);
        assert_eq!(safe_parse_float(Some(" 1200 ")), 1200.0);
        assert_eq!(safe_parse_float(Some("-800")), -800.0);
    }

    #[test]
    fn previous_month_steps_back_within_a_year() {
        assert_eq!(previous_month("2024-07").as_deref(), Some("2024-06"));
    }

    #[test]
    fn previous_month_rolls_the_year_over() {
        assert_eq!(previous_month("2024-01").as_deref(), Some("2023-12"));
    }

    #[test]
    fn previous_month_rejects_unparseable_labels() {
        assert!(previous_month("garbage").is_none());
        assert!(previous_month("2024-13").is_none());
    }

    #[test]
    fn net_earnings_subtracts_salary_from_previous_month_figure() {
        let series = vec![figure("2024-05", "1000"), figure("2024-06", "1200")];
        assert_eq!(net_earnings_prev_month(&series, Some("800")), "200.00 EUR");
    }

    #[test]
    fn net_earnings_treats_series_gap_as_zero_earnings() {
        let series = vec![figure("2024-04", "1000"), figure("2024-06", "1200")];
        assert_eq!(net_earnings_prev_month(&series, Some("800")), "-800.00 EUR");
    }

    #[test]
    fn net_earnings_without_series_is_the_sentinel() {
        assert_eq!(net_earnings_prev_month(&[], Some("800")), "- EUR");
    }

    #[test]
    fn net_earnings_without_last_month_label_is_the_sentinel() {
        let series = vec![MonthlyFigure {
            month: None,
            costs: Some("1200".to_string()),
        }];
        assert_eq!(net_earnings_prev_month(&series, Some("800")), "- EUR");
    }

    #[test]
    fn net_earnings_defaults_missing_salary_to_zero() {
        let series = vec![figure("2024-05", "1000"), figure("2024-06", "1200")];
        assert_eq!(net_earnings_prev_month(&series, None), "1000.00 EUR");
    }
}
