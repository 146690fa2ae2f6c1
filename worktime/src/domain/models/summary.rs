use time::Duration;

use super::{MonthMap, ProjectRoleId};

/// Closing snapshot of a finished year, used to carry its balance forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnualWorkSummary {
    pub year: i32,
    pub worked_time: Duration,
    pub target_working_time: Duration,
}

impl AnnualWorkSummary {
    pub fn new(year: i32, worked_time: Duration, target_working_time: Duration) -> Self {
        Self {
            year,
            worked_time,
            target_working_time,
        }
    }

    /// An empty summary for a year without records.
    pub fn empty(year: i32) -> Self {
        Self::new(year, Duration::ZERO, Duration::ZERO)
    }

    /// Positive when more was worked than targeted.
    pub fn balance(&self) -> Duration {
        self.worked_time - self.target_working_time
    }
}

/// Annual and monthly balance of a user for one year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSummary {
    pub year: YearAnnualBalance,
    pub months: MonthMap<MonthlyBalance>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearAnnualBalance {
    pub previous: PreviousAnnualBalance,
    pub current: AnnualBalance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnualBalance {
    pub worked: Duration,
    pub target: Duration,
    pub not_requested_vacations: Duration,
    pub balance: Duration,
}

impl AnnualBalance {
    pub fn new(worked: Duration, target: Duration, not_requested_vacations: Duration) -> Self {
        Self {
            worked,
            target,
            not_requested_vacations,
            balance: worked - (target + not_requested_vacations),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviousAnnualBalance {
    pub worked: Duration,
    pub target: Duration,
    pub balance: Duration,
}

impl PreviousAnnualBalance {
    pub fn new(worked: Duration, target: Duration) -> Self {
        Self {
            worked,
            target,
            balance: worked - target,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyBalance {
    pub workable: Duration,
    pub worked: Duration,
    pub recommended: Duration,
    pub balance: Duration,
    pub roles: Vec<MonthlyRoles>,
    pub charged_vacations: Duration,
    pub enjoyed_vacations: Duration,
}

/// Hours spent on one project role during a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyRoles {
    pub role_id: ProjectRoleId,
    pub hours: Duration,
}
