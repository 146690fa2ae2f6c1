use std::sync::Arc;

use time::Duration;

use crate::domain::{
    models::{Activity, MonthMap},
    ports::outbound::ProjectRoleChecker,
};

/// Sums the time users actually worked.
pub struct WorkedTimeService<R> {
    roles: Arc<R>,
}

impl<R: ProjectRoleChecker> WorkedTimeService<R> {
    pub fn new(roles: Arc<R>) -> Self {
        Self { roles }
    }

    /// Worked time per month of activities on workable roles.
    ///
    /// Months without such activities are absent from the result.
    pub fn worked_time(&self, activities: &[Activity]) -> MonthMap<Duration> {
        activities
            .iter()
            .filter(|activity| self.roles.is_workable(activity.project_role_id))
            .fold(MonthMap::new(), |mut by_month, activity| {
                *by_month.get_or_insert_with(activity.date.month(), || Duration::ZERO) +=
                    activity.duration;
                by_month
            })
    }
}
