use time::{macros::time, Date, Duration, Month, PrimitiveDateTime, Time};

use crate::domain::WorkTimeError;

/// An inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateInterval {
    start: Date,
    end: Date,
}

impl DateInterval {
    pub fn new(start: Date, end: Date) -> Result<Self, WorkTimeError> {
        if start > end {
            return Err(WorkTimeError::InvalidDateInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// January 1st through December 31st of `year`.
    pub fn of_year(year: i32) -> Result<Self, WorkTimeError> {
        Ok(Self {
            start: Date::from_calendar_date(year, Month::January, 1)?,
            end: Date::from_calendar_date(year, Month::December, 31)?,
        })
    }

    /// First through last day of `month` in `year`.
    pub fn of_month(year: i32, month: Month) -> Result<Self, WorkTimeError> {
        Ok(Self {
            start: Date::from_calendar_date(year, month, 1)?,
            end: Date::from_calendar_date(year, month, month.length(year))?,
        })
    }

    pub fn start(&self) -> Date {
        self.start
    }

    pub fn end(&self) -> Date {
        self.end
    }

    pub fn includes(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn number_of_days(&self) -> usize {
        (self.end - self.start).whole_days() as usize + 1
    }

    /// Every date of the interval, in order.
    pub fn days(&self) -> impl Iterator<Item = Date> {
        let end = self.end;
        std::iter::successors(Some(self.start), move |day| {
            day.next_day().filter(|next| *next <= end)
        })
    }
}

/// An inclusive range of date-times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeInterval {
    start: PrimitiveDateTime,
    end: PrimitiveDateTime,
}

impl TimeInterval {
    pub fn new(start: PrimitiveDateTime, end: PrimitiveDateTime) -> Result<Self, WorkTimeError> {
        if start > end {
            return Err(WorkTimeError::InvalidTimeInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Spans from the first instant of `interval.start` to the last second of `interval.end`.
    pub fn of_date_interval(interval: DateInterval) -> Self {
        Self {
            start: PrimitiveDateTime::new(interval.start, Time::MIDNIGHT),
            end: PrimitiveDateTime::new(interval.end, time!(23:59:59)),
        }
    }

    pub fn start(&self) -> PrimitiveDateTime {
        self.start
    }

    pub fn end(&self) -> PrimitiveDateTime {
        self.end
    }

    pub fn date_interval(&self) -> DateInterval {
        DateInterval {
            start: self.start.date(),
            end: self.end.date(),
        }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn is_one_day(&self) -> bool {
        self.start.date() == self.end.date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    #[test]
    fn date_interval_rejects_reversed_bounds() {
        let result = DateInterval::new(date!(2022 - 03 - 02), date!(2022 - 03 - 01));
        assert!(matches!(
            result,
            Err(WorkTimeError::InvalidDateInterval { .. })
        ));
    }

    #[test]
    fn date_interval_includes_both_bounds() {
        let interval = DateInterval::new(date!(2022 - 03 - 01), date!(2022 - 03 - 10)).unwrap();
        assert!(interval.includes(date!(2022 - 03 - 01)));
        assert!(interval.includes(date!(2022 - 03 - 10)));
        assert!(!interval.includes(date!(2022 - 02 - 28)));
        assert!(!interval.includes(date!(2022 - 03 - 11)));
    }

    #[test]
    fn of_year_handles_leap_years() {
        assert_eq!(DateInterval::of_year(2020).unwrap().number_of_days(), 366);
        assert_eq!(DateInterval::of_year(2022).unwrap().number_of_days(), 365);
    }

    #[test]
    fn of_month_ends_on_last_day() {
        let february = DateInterval::of_month(2024, Month::February).unwrap();
        assert_eq!(february.end(), date!(2024 - 02 - 29));
        assert_eq!(february.days().count(), 29);
    }

    #[test]
    fn single_day_interval_yields_one_day() {
        let day = date!(2022 - 12 - 31);
        let interval = DateInterval::new(day, day).unwrap();
        assert_eq!(interval.days().collect::<Vec<_>>(), vec![day]);
    }

    #[test]
    fn time_interval_rejects_reversed_bounds() {
        let result = TimeInterval::new(
            datetime!(2022 - 03 - 01 10:00),
            datetime!(2022 - 03 - 01 09:59),
        );
        assert!(matches!(
            result,
            Err(WorkTimeError::InvalidTimeInterval { .. })
        ));
    }

    #[test]
    fn time_interval_derives_dates_and_duration() {
        let interval = TimeInterval::new(
            datetime!(2022 - 03 - 01 08:00),
            datetime!(2022 - 03 - 02 10:30),
        )
        .unwrap();

        assert_eq!(interval.duration(), Duration::hours(26) + Duration::minutes(30));
        assert!(!interval.is_one_day());
        assert_eq!(interval.date_interval().number_of_days(), 2);
    }

    #[test]
    fn time_interval_covers_whole_days() {
        let interval =
            TimeInterval::of_date_interval(DateInterval::of_month(2022, Month::May).unwrap());
        assert_eq!(interval.start(), datetime!(2022 - 05 - 01 00:00));
        assert_eq!(interval.end(), datetime!(2022 - 05 - 31 23:59:59));
    }
}
