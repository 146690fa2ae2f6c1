use std::sync::Arc;

use crate::domain::{
    models::{Calendar, DateInterval, TimeInterval},
    ports::outbound::HolidayRepository,
    WorkTimeError,
};

/// Builds calendars with the holidays of the requested interval.
pub struct CalendarFactory<H> {
    holidays: Arc<H>,
}

impl<H: HolidayRepository> CalendarFactory<H> {
    pub fn new(holidays: Arc<H>) -> Self {
        Self { holidays }
    }

    /// Loads the holidays between the start of the first day and the end of
    /// the last day of `interval`.
    pub fn create(&self, interval: DateInterval) -> Result<Calendar, WorkTimeError> {
        let span = TimeInterval::of_date_interval(interval);
        let holidays = self
            .holidays
            .find_holidays_between(span.start(), span.end())?;

        tracing::debug!(
            start = %interval.start(),
            end = %interval.end(),
            holidays = holidays.len(),
            "created calendar"
        );
        Ok(Calendar::new(interval, holidays))
    }
}
