use std::collections::BTreeMap;
use std::sync::Arc;

use time::{Date, Duration};

use crate::domain::{
    models::{
        Activity, AnnualBalance, AnnualWorkSummary, Holiday, MonthMap, MonthlyBalance,
        MonthlyRoles, PreviousAnnualBalance, ProjectRoleId, TimeSummary, User, Vacation,
        YearAnnualBalance, YearMonth, WORKING_DAY,
    },
    ports::{inbound::WorkRecommendationService, outbound::ProjectRoleChecker},
    WorkTimeError,
};

use super::{
    CurrentMonthAccumulationRecommendation, TargetWorkService, TimeWorkableService,
    WorkedTimeService,
};

/// Computes the annual and monthly work-time balance of a user.
///
/// Combines workable time, worked time, targets, monthly recommendations and
/// vacation consumption into a single [`TimeSummary`].
pub struct TimeSummaryService<R, W = CurrentMonthAccumulationRecommendation> {
    time_workable: TimeWorkableService,
    worked_time: WorkedTimeService<R>,
    target_work: TargetWorkService,
    recommendation: W,
}

impl<R: ProjectRoleChecker> TimeSummaryService<R> {
    pub fn new(roles: Arc<R>) -> Self {
        Self::with_recommendation(roles, CurrentMonthAccumulationRecommendation::new())
    }
}

impl<R: ProjectRoleChecker, W: WorkRecommendationService> TimeSummaryService<R, W> {
    pub fn with_recommendation(roles: Arc<R>, recommendation: W) -> Self {
        Self {
            time_workable: TimeWorkableService::new(),
            worked_time: WorkedTimeService::new(roles),
            target_work: TargetWorkService::new(),
            recommendation,
        }
    }

    /// Balance of `user` for the year of `date`, with `date`'s month as the
    /// current month.
    ///
    /// `prior_summary` is the closing summary of the previous year.
    /// `vacations_charged_this_year` are the vacations debited from this year's
    /// allowance, wherever their days fall.
    #[tracing::instrument(name = "time_summary", skip_all, fields(user_id = %user.id, %date))]
    pub fn get_time_summary_balance(
        &self,
        date: Date,
        user: &User,
        prior_summary: &AnnualWorkSummary,
        public_holidays: &[Holiday],
        vacation_dates_requested_this_year: &[Date],
        vacations_charged_this_year: &[Vacation],
        corresponding_vacation_entitlement: i32,
        activities: &[Activity],
        previous_year_activities: &[Activity],
    ) -> Result<TimeSummary, WorkTimeError> {
        let year = date.year();
        let previous_year = year - 1;
        let hiring_date = user.hiring_date;

        let annual_prevision =
            self.time_workable
                .annual_prevision_working_time(year, user, public_holidays)?;
        let previous_annual_prevision =
            self.time_workable
                .annual_prevision_working_time(previous_year, user, public_holidays)?;

        let annual_target = self.target_work.annual_target_work(
            year,
            hiring_date,
            annual_prevision,
            user.agreement_terms_for_year(year).annual_working_time,
            prior_summary,
        );
        let previous_annual_target = self.target_work.annual_target_work(
            previous_year,
            hiring_date,
            previous_annual_prevision,
            user.agreement_terms_for_year(previous_year).annual_working_time,
            prior_summary,
        );

        let worked_by_month = self.worked_time.worked_time(activities);
        let previous_worked_by_month = self.worked_time.worked_time(previous_year_activities);

        let workable_by_month = self.time_workable.monthly_working_time(
            year,
            hiring_date,
            public_holidays,
            vacation_dates_requested_this_year,
        )?;

        let recommended_by_month = self.recommendation.suggest_working_time_by_month(
            YearMonth::of(date),
            hiring_date,
            annual_target,
            &worked_by_month,
            &workable_by_month,
        );

        let requested_vacations: Vec<&Vacation> = vacations_charged_this_year
            .iter()
            .filter(|vacation| vacation.is_requested())
            .collect();
        let consumed_vacation_days: usize = requested_vacations
            .iter()
            .map(|vacation| vacation.days_in_year(year).count())
            .sum();
        let not_consumed_vacations =
            WORKING_DAY * (corresponding_vacation_entitlement - consumed_vacation_days as i32);

        let current = AnnualBalance::new(
            total(&worked_by_month),
            annual_target,
            not_consumed_vacations,
        );
        let previous =
            PreviousAnnualBalance::new(total(&previous_worked_by_month), previous_annual_target);

        let charged_days = days_by_month(
            requested_vacations
                .iter()
                .flat_map(|vacation| vacation.days_in_year(year)),
        );
        let enjoyed_days = days_by_month(
            vacation_dates_requested_this_year
                .iter()
                .copied()
                .filter(|day| day.year() == year),
        );
        let mut roles = roles_by_month(activities);

        let months = MonthMap::full(|month| {
            let worked = worked_by_month.get_or_default(month);
            let recommended = recommended_by_month.get_or_default(month);
            MonthlyBalance {
                workable: workable_by_month.get_or_default(month),
                worked,
                recommended,
                balance: worked - recommended,
                roles: roles.remove(month).unwrap_or_default(),
                charged_vacations: WORKING_DAY * charged_days.get_or_default(month),
                enjoyed_vacations: WORKING_DAY * enjoyed_days.get_or_default(month),
            }
        });

        tracing::debug!(
            annual_target = %current.target,
            worked = %current.worked,
            balance = %current.balance,
            consumed_vacation_days,
            "computed time summary"
        );

        Ok(TimeSummary {
            year: YearAnnualBalance { previous, current },
            months,
        })
    }
}

fn total(by_month: &MonthMap<Duration>) -> Duration {
    by_month
        .values()
        .fold(Duration::ZERO, |total, time| total + *time)
}

fn days_by_month(days: impl Iterator<Item = Date>) -> MonthMap<i32> {
    days.fold(MonthMap::new(), |mut by_month, day| {
        *by_month.get_or_insert_with(day.month(), || 0) += 1;
        by_month
    })
}

/// Time per project role for each month with activity, ordered by role id.
fn roles_by_month(activities: &[Activity]) -> MonthMap<Vec<MonthlyRoles>> {
    let mut by_month: MonthMap<BTreeMap<ProjectRoleId, Duration>> = MonthMap::new();
    for activity in activities {
        *by_month
            .get_or_insert_with(activity.date.month(), BTreeMap::new)
            .entry(activity.project_role_id)
            .or_insert(Duration::ZERO) += activity.duration;
    }

    by_month
        .into_iter()
        .map(|(month, roles)| {
            let roles = roles
                .into_iter()
                .map(|(role_id, hours)| MonthlyRoles { role_id, hours })
                .collect();
            (month, roles)
        })
        .collect()
}
