use time::{Date, Duration};

use crate::domain::models::{MonthMap, YearMonth};

/// Strategy for spreading an annual target over the months of a year.
pub trait WorkRecommendationService: Send + Sync + 'static {
    /// Recommended working time per month of `current.year`.
    ///
    /// Months before the user's hiring month are absent; users hired after
    /// `current.year` get an empty map.
    fn suggest_working_time_by_month(
        &self,
        current: YearMonth,
        hiring_date: Date,
        target_time: Duration,
        worked_time_by_month: &MonthMap<Duration>,
        workable_time_by_month: &MonthMap<Duration>,
    ) -> MonthMap<Duration>;
}
