use crate::core::period::TargetPeriod;
use crate::models::{DayRecord, MonthSheet};
use crate::utils::date::{all_days_of_month, is_weekend};
use chrono::Datelike;

/// Build the empty monthly calendar of one employee.
///
/// One record per day, keyed by day-of-month. Weekdays get `default_title`,
/// weekend days are flagged and left untitled.
pub fn synthesize(employee: &str, period: &TargetPeriod, default_title: &str) -> MonthSheet {
    let days = all_days_of_month(period.year, period.month)
        .into_iter()
        .map(|date| {
            let weekend = is_weekend(&date);
            let record = DayRecord {
                date,
                title: if weekend {
                    String::new()
                } else {
                    default_title.to_string()
                },
                description: String::new(),
                hours: String::new(),
                is_weekend: weekend,
            };
            (date.day(), record)
        })
        .collect();

    MonthSheet {
        employee: employee.to_string(),
        year: period.year,
        month: period.month,
        days,
    }
}
