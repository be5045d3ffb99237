//! Descriptive extremes for daily views and revenue.

use serde::Serialize;

use crate::aggregate::DayAggregate;
use crate::dates::DateKey;
use crate::stats::mean;

/// Average, minimum and maximum of one daily metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricExtremes {
    pub avg: f64,
    pub min: f64,
    pub max: f64,
    /// First day (ascending) on which the minimum occurs
    pub min_date: DateKey,
    /// First day (ascending) on which the maximum occurs
    pub max_date: DateKey,
}

/// Extremes of views and revenue across the aggregate table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extremes {
    pub views: MetricExtremes,
    pub revenue: MetricExtremes,
}

/// Views and revenue extremes. `None` for an empty table.
///
/// Ties go to the earliest date since rows are scanned in ascending order
/// and only a strictly better value replaces the current one.
pub fn extremes(daily: &[DayAggregate]) -> Option<Extremes> {
    Some(Extremes {
        views: metric_extremes(daily, |d| d.views as f64)?,
        revenue: metric_extremes(daily, |d| d.revenue)?,
    })
}

fn metric_extremes(
    daily: &[DayAggregate],
    pick: impl Fn(&DayAggregate) -> f64,
) -> Option<MetricExtremes> {
    let first = daily.first()?;
    let values: Vec<f64> = daily.iter().map(&pick).collect();

    let mut out = MetricExtremes {
        avg: mean(&values),
        min: values[0],
        max: values[0],
        min_date: first.date,
        max_date: first.date,
    };

    for (day, &value) in daily.iter().zip(&values).skip(1) {
        if value > out.max {
            out.max = value;
            out.max_date = day.date;
        }
        if value < out.min {
            out.min = value;
            out.min_date = day.date;
        }
    }

    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::day;

    #[test]
    fn test_empty_table_has_no_extremes() {
        assert!(extremes(&[]).is_none());
    }

    #[test]
    fn test_extremes_with_first_occurrence_ties() {
        let mut daily = vec![
            day("2025-12-01", 100.0, None),
            day("2025-12-02", 300.0, None),
            day("2025-12-03", 100.0, None),
            day("2025-12-04", 300.0, None),
        ];
        daily[0].views = 5;
        daily[1].views = 50;
        daily[2].views = 50;
        daily[3].views = 5;

        let ex = extremes(&daily).unwrap();
        assert_eq!(ex.revenue.avg, 200.0);
        assert_eq!(ex.revenue.max, 300.0);
        assert_eq!(ex.revenue.max_date.to_string(), "2025-12-02");
        assert_eq!(ex.revenue.min, 100.0);
        assert_eq!(ex.revenue.min_date.to_string(), "2025-12-01");

        assert_eq!(ex.views.max, 50.0);
        assert_eq!(ex.views.max_date.to_string(), "2025-12-02");
        assert_eq!(ex.views.min_date.to_string(), "2025-12-01");
        assert_eq!(ex.views.avg, 27.5);
    }

    #[test]
    fn test_single_day_is_both_min_and_max() {
        let ex = extremes(&[day("2025-12-09", 42.0, None)]).unwrap();
        assert_eq!(ex.revenue.min, 42.0);
        assert_eq!(ex.revenue.max, 42.0);
        assert_eq!(ex.revenue.min_date, ex.revenue.max_date);
    }
}
