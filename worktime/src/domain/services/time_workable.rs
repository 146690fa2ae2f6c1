use std::collections::HashSet;

use itertools::Itertools;
use time::{Date, Duration};

use crate::domain::{
    models::{Calendar, DateInterval, Holiday, MonthMap, User, WORKING_DAY},
    WorkTimeError,
};

/// Days in the commercial year used to prorate vacations.
const COMMERCIAL_YEAR_DAYS: i64 = 360;

/// Computes how much time a user can be expected to work.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeWorkableService;

impl TimeWorkableService {
    pub fn new() -> Self {
        Self
    }

    /// Workable time of `year` counted from the hiring date, minus the
    /// vacation days earned in that year.
    pub fn annual_prevision_working_time(
        &self,
        year: i32,
        user: &User,
        holidays: &[Holiday],
    ) -> Result<Duration, WorkTimeError> {
        let Some(interval) = employed_interval(year, user.hiring_date)? else {
            return Ok(Duration::ZERO);
        };

        let calendar = Calendar::new(interval, holidays.to_vec());
        let workable_days = calendar.workable_days().len() as i32;
        let earned_vacations = self.earned_vacations_since_hiring_date(user, year);

        Ok(WORKING_DAY * workable_days - WORKING_DAY * earned_vacations)
    }

    /// Vacation days the user is entitled to in `year`.
    ///
    /// The hiring year is prorated on a 360-day year and rounded half up.
    pub fn earned_vacations_since_hiring_date(&self, user: &User, year: i32) -> i32 {
        let hiring_date = user.hiring_date;
        let agreement_vacation_days = user.agreement_terms_for_year(year).vacation_days;

        match year.cmp(&hiring_date.year()) {
            std::cmp::Ordering::Less => 0,
            std::cmp::Ordering::Equal => {
                let worked_days = COMMERCIAL_YEAR_DAYS - i64::from(hiring_date.ordinal());
                round_half_up(
                    worked_days * i64::from(agreement_vacation_days),
                    COMMERCIAL_YEAR_DAYS,
                ) as i32
            }
            std::cmp::Ordering::Greater => agreement_vacation_days,
        }
    }

    /// Workable time per month, excluding holidays and requested vacation days.
    ///
    /// Always holds all twelve months; months before the hiring date are zero.
    pub fn monthly_working_time(
        &self,
        year: i32,
        hiring_date: Date,
        holidays: &[Holiday],
        vacations_requested: &[Date],
    ) -> Result<MonthMap<Duration>, WorkTimeError> {
        let Some(interval) = employed_interval(year, hiring_date)? else {
            return Ok(MonthMap::full(|_| Duration::ZERO));
        };

        let vacation_days: HashSet<Date> = vacations_requested.iter().copied().collect();
        let calendar = Calendar::new(interval, holidays.to_vec());
        let days_by_month = calendar
            .workable_days()
            .iter()
            .filter(|day| !vacation_days.contains(day))
            .counts_by(|day| day.month());

        let mut monthly: MonthMap<Duration> = days_by_month
            .into_iter()
            .map(|(month, days)| (month, WORKING_DAY * days as i32))
            .collect();
        monthly.fill_missing(|_| Duration::ZERO);

        Ok(monthly)
    }
}

/// Part of `year` during which the user was employed, if any.
fn employed_interval(year: i32, hiring_date: Date) -> Result<Option<DateInterval>, WorkTimeError> {
    let whole_year = DateInterval::of_year(year)?;
    if hiring_date > whole_year.end() {
        return Ok(None);
    }

    let start = whole_year.start().max(hiring_date);
    DateInterval::new(start, whole_year.end()).map(Some)
}

/// `numerator / denominator` rounded to the nearest integer, halves up.
fn round_half_up(numerator: i64, denominator: i64) -> i64 {
    (2 * numerator + denominator).div_euclid(2 * denominator)
}
