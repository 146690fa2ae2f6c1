use std::cmp::Ordering;

use time::{Date, Duration, Month};

use crate::domain::{
    models::{MonthMap, YearMonth, MONTHS},
    ports::inbound::WorkRecommendationService,
};

/// Spreads the annual target by each month's share of workable time and
/// corrects elapsed months by the drift accumulated so far.
///
/// For every month up to and including the current one the recommendation is
/// its prorated share minus how far the user is ahead of the cumulative
/// prorated pace. Future months keep their plain prorated share.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentMonthAccumulationRecommendation;

impl CurrentMonthAccumulationRecommendation {
    pub fn new() -> Self {
        Self
    }
}

impl WorkRecommendationService for CurrentMonthAccumulationRecommendation {
    fn suggest_working_time_by_month(
        &self,
        current: YearMonth,
        hiring_date: Date,
        target_time: Duration,
        worked_time_by_month: &MonthMap<Duration>,
        workable_time_by_month: &MonthMap<Duration>,
    ) -> MonthMap<Duration> {
        let suggest_from = match hiring_date.year().cmp(&current.year) {
            Ordering::Less => Month::January,
            Ordering::Equal => hiring_date.month(),
            Ordering::Greater => return MonthMap::new(),
        };

        let annual_workable_time = workable_time_by_month
            .values()
            .fold(Duration::ZERO, |total, time| total + *time);

        let mut cumulative_prorate = Duration::ZERO;
        let mut cumulative_worked = Duration::ZERO;
        let mut suggested = MonthMap::new();

        for month in MONTHS.into_iter().skip_while(|month| *month != suggest_from) {
            let prorate = prorate(
                target_time,
                workable_time_by_month.get_or_default(month),
                annual_workable_time,
            );

            let recommended = if YearMonth::new(current.year, month) <= current {
                let drift = cumulative_worked - cumulative_prorate;
                cumulative_prorate += prorate;
                cumulative_worked += worked_time_by_month.get_or_default(month);
                prorate - drift
            } else {
                prorate
            };

            suggested.insert(month, recommended);
        }

        tracing::debug!(%current, months = suggested.len(), "suggested monthly working time");
        suggested
    }
}

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// Share of `target` proportional to `workable` over `total`, at nanosecond
/// precision.
fn prorate(target: Duration, workable: Duration, total: Duration) -> Duration {
    let total = total.whole_nanoseconds();
    if total == 0 {
        return Duration::ZERO;
    }

    let nanos = target.whole_nanoseconds() * workable.whole_nanoseconds() / total;
    Duration::new(
        (nanos / NANOS_PER_SECOND) as i64,
        (nanos % NANOS_PER_SECOND) as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn even_workable_time() -> MonthMap<Duration> {
        MonthMap::full(|_| Duration::hours(160))
    }

    fn workable_days_2022() -> MonthMap<Duration> {
        let days = [21, 20, 23, 21, 22, 22, 21, 23, 22, 21, 22, 22];
        MonthMap::full(|month| Duration::hours(8) * days[usize::from(u8::from(month)) - 1])
    }

    fn total(map: &MonthMap<Duration>) -> Duration {
        map.values().fold(Duration::ZERO, |sum, time| sum + *time)
    }

    #[test]
    fn empty_when_hired_after_the_year() {
        let suggested = CurrentMonthAccumulationRecommendation.suggest_working_time_by_month(
            YearMonth::new(2022, Month::March),
            date!(2023 - 01 - 10),
            Duration::hours(1765),
            &MonthMap::new(),
            &even_workable_time(),
        );
        assert!(suggested.is_empty());
    }

    #[test]
    fn starts_at_the_hiring_month() {
        let suggested = CurrentMonthAccumulationRecommendation.suggest_working_time_by_month(
            YearMonth::new(2022, Month::March),
            date!(2022 - 07 - 01),
            Duration::hours(960),
            &MonthMap::new(),
            &even_workable_time(),
        );

        assert_eq!(suggested.len(), 6);
        assert_eq!(suggested.months().next(), Some(Month::July));
        assert!(!suggested.contains(Month::June));
    }

    #[test]
    fn even_months_split_the_target_evenly() {
        let suggested = CurrentMonthAccumulationRecommendation.suggest_working_time_by_month(
            YearMonth::new(2022, Month::January),
            date!(2020 - 03 - 03),
            Duration::hours(1920),
            &MonthMap::new(),
            &even_workable_time(),
        );

        assert_eq!(suggested.len(), 12);
        assert!(suggested.values().all(|time| *time == Duration::hours(160)));
    }

    #[test]
    fn elapsed_months_absorb_the_accumulated_drift() {
        let worked: MonthMap<Duration> = [
            (Month::January, Duration::hours(150)),
            (Month::February, Duration::hours(170)),
            (Month::March, Duration::hours(100)),
        ]
        .into_iter()
        .collect();

        let suggested = CurrentMonthAccumulationRecommendation.suggest_working_time_by_month(
            YearMonth::new(2022, Month::March),
            date!(2020 - 03 - 03),
            Duration::hours(1920),
            &worked,
            &even_workable_time(),
        );

        assert_eq!(suggested.get(Month::January), Some(&Duration::hours(160)));
        // 10h behind after January.
        assert_eq!(suggested.get(Month::February), Some(&Duration::hours(170)));
        // Back on pace after February.
        assert_eq!(suggested.get(Month::March), Some(&Duration::hours(160)));
        // March's shortfall is not carried into future months.
        assert_eq!(suggested.get(Month::April), Some(&Duration::hours(160)));
    }

    #[test]
    fn ahead_of_pace_lowers_the_recommendation() {
        let worked: MonthMap<Duration> = [(Month::January, Duration::hours(200))]
            .into_iter()
            .collect();

        let suggested = CurrentMonthAccumulationRecommendation.suggest_working_time_by_month(
            YearMonth::new(2022, Month::February),
            date!(2020 - 03 - 03),
            Duration::hours(1920),
            &worked,
            &even_workable_time(),
        );

        assert_eq!(suggested.get(Month::February), Some(&Duration::hours(120)));
    }

    #[test]
    fn prorated_months_add_up_to_the_target() {
        let target = Duration::hours(1765);
        let suggested = CurrentMonthAccumulationRecommendation.suggest_working_time_by_month(
            YearMonth::new(2022, Month::January),
            date!(2020 - 03 - 03),
            target,
            &MonthMap::new(),
            &workable_days_2022(),
        );

        let difference = (total(&suggested) - target).abs();
        assert!(difference <= Duration::minutes(2), "off by {difference}");
    }

    #[test]
    fn prorated_months_from_the_hiring_month_add_up_to_the_target() {
        let target = Duration::hours(960);
        let workable = workable_days_2022();
        let workable: MonthMap<Duration> = MonthMap::full(|month| {
            if u8::from(month) >= u8::from(Month::July) {
                workable.get_or_default(month)
            } else {
                Duration::ZERO
            }
        });

        let suggested = CurrentMonthAccumulationRecommendation.suggest_working_time_by_month(
            YearMonth::new(2022, Month::July),
            date!(2022 - 07 - 01),
            target,
            &MonthMap::new(),
            &workable,
        );

        assert_eq!(suggested.len(), 6);
        let difference = (total(&suggested) - target).abs();
        assert!(difference <= Duration::minutes(2), "off by {difference}");
    }

    #[test]
    fn working_on_pace_keeps_the_prorated_share() {
        let target = Duration::hours(1765);
        let workable = workable_days_2022();
        let annual_workable = total(&workable);
        let on_pace =
            |month: Month| prorate(target, workable.get_or_default(month), annual_workable);

        let worked: MonthMap<Duration> = [Month::January, Month::February, Month::March]
            .into_iter()
            .map(|month| (month, on_pace(month)))
            .collect();

        let suggested = CurrentMonthAccumulationRecommendation.suggest_working_time_by_month(
            YearMonth::new(2022, Month::April),
            date!(2020 - 03 - 03),
            target,
            &worked,
            &workable,
        );

        for month in [Month::February, Month::March, Month::April] {
            assert_eq!(suggested.get(month), Some(&on_pace(month)));
        }
        let difference = (total(&suggested) - target).abs();
        assert!(difference <= Duration::minutes(2), "off by {difference}");
    }

    #[test]
    fn zero_workable_time_recommends_nothing() {
        let suggested = CurrentMonthAccumulationRecommendation.suggest_working_time_by_month(
            YearMonth::new(2022, Month::June),
            date!(2020 - 03 - 03),
            Duration::hours(1765),
            &MonthMap::new(),
            &MonthMap::full(|_| Duration::ZERO),
        );

        assert_eq!(suggested.len(), 12);
        assert_eq!(total(&suggested), Duration::ZERO);
    }
}
