mod calendar_factory;
mod target_work;
mod time_summary;
mod time_workable;
mod work_recommendation;
mod worked_time;

pub use calendar_factory::CalendarFactory;
pub use target_work::TargetWorkService;
pub use time_summary::TimeSummaryService;
pub use time_workable::TimeWorkableService;
pub use work_recommendation::CurrentMonthAccumulationRecommendation;
pub use worked_time::WorkedTimeService;
