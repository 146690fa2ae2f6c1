use time::PrimitiveDateTime;

use crate::domain::{models::Holiday, ports::outbound::HolidayRepository, WorkTimeError};

/// Holiday repository backed by a list held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHolidayRepository {
    holidays: Vec<Holiday>,
}

impl InMemoryHolidayRepository {
    pub fn new(holidays: Vec<Holiday>) -> Self {
        Self { holidays }
    }
}

impl HolidayRepository for InMemoryHolidayRepository {
    fn find_holidays_between(
        &self,
        start: PrimitiveDateTime,
        end: PrimitiveDateTime,
    ) -> Result<Vec<Holiday>, WorkTimeError> {
        Ok(self
            .holidays
            .iter()
            .filter(|holiday| start <= holiday.date && holiday.date <= end)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    #[test]
    fn returns_holidays_within_bounds() {
        let repository = InMemoryHolidayRepository::new(vec![
            Holiday::new(date!(2022 - 01 - 01), "New Year"),
            Holiday::new(date!(2022 - 05 - 01), "Labour Day"),
            Holiday::new(date!(2023 - 01 - 01), "New Year"),
        ]);

        let holidays = repository
            .find_holidays_between(
                datetime!(2022 - 01 - 01 00:00),
                datetime!(2022 - 12 - 31 23:59:59),
            )
            .unwrap();

        let days: Vec<_> = holidays.iter().map(Holiday::day).collect();
        assert_eq!(days, vec![date!(2022 - 01 - 01), date!(2022 - 05 - 01)]);
    }
}
