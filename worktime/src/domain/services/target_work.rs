use std::cmp::Ordering;

use time::{Date, Duration};

use crate::domain::models::AnnualWorkSummary;

/// Decides how much a user is expected to work in a year.
#[derive(Debug, Clone, Copy, Default)]
pub struct TargetWorkService;

impl TargetWorkService {
    pub fn new() -> Self {
        Self
    }

    /// Target working time of `year`.
    ///
    /// In the hiring year the target is capped by the workable prevision. Later
    /// years start from the agreement and absorb the previous year's balance.
    pub fn annual_target_work(
        &self,
        year: i32,
        hiring_date: Date,
        annual_working_time_prevision: Duration,
        agreement_year_duration: Duration,
        prior_summary: &AnnualWorkSummary,
    ) -> Duration {
        match hiring_date.year().cmp(&year) {
            Ordering::Equal => annual_working_time_prevision.min(agreement_year_duration),
            Ordering::Less => agreement_year_duration - prior_summary.balance(),
            Ordering::Greater => Duration::ZERO,
        }
    }
}
