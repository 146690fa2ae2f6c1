use std::collections::HashSet;

use time::{Date, PrimitiveDateTime, Time, Weekday};

use super::DateInterval;

/// A public holiday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holiday {
    pub date: PrimitiveDateTime,
    pub description: String,
}

impl Holiday {
    pub fn new(date: Date, description: impl Into<String>) -> Self {
        Self {
            date: PrimitiveDateTime::new(date, Time::MIDNIGHT),
            description: description.into(),
        }
    }

    /// The calendar day of the holiday, ignoring the time of day.
    pub fn day(&self) -> Date {
        self.date.date()
    }
}

/// Immutable view of the days in an interval and which of them can be worked.
///
/// A day is workable when it is neither a Saturday, a Sunday nor a holiday.
#[derive(Debug, Clone)]
pub struct Calendar {
    interval: DateInterval,
    holidays: Vec<Holiday>,
    all_days: Vec<Date>,
    workable_days: Vec<Date>,
}

impl Calendar {
    pub fn new(interval: DateInterval, holidays: Vec<Holiday>) -> Self {
        let holiday_days: HashSet<Date> = holidays.iter().map(Holiday::day).collect();
        let all_days: Vec<Date> = interval.days().collect();
        let workable_days = all_days
            .iter()
            .copied()
            .filter(|day| !is_weekend(*day) && !holiday_days.contains(day))
            .collect();

        Self {
            interval,
            holidays,
            all_days,
            workable_days,
        }
    }

    pub fn interval(&self) -> DateInterval {
        self.interval
    }

    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    pub fn all_days(&self) -> &[Date] {
        &self.all_days
    }

    pub fn workable_days(&self) -> &[Date] {
        &self.workable_days
    }

    /// Workable days that fall inside `interval`, bounds included.
    pub fn workable_days_in(&self, interval: &DateInterval) -> Vec<Date> {
        self.workable_days
            .iter()
            .copied()
            .filter(|day| interval.includes(*day))
            .collect()
    }
}

fn is_weekend(day: Date) -> bool {
    matches!(day.weekday(), Weekday::Saturday | Weekday::Sunday)
}
