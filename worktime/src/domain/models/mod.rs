mod activity;
mod calendar;
mod ids;
mod interval;
mod month_map;
mod summary;
mod user;
mod vacation;
mod year_month;

pub use activity::*;
pub use calendar::*;
pub use ids::*;
pub use interval::*;
pub use month_map::*;
pub use summary::*;
pub use user::*;
pub use vacation::*;
pub use year_month::*;

use time::Duration;

/// Length of a standard working day.
pub const WORKING_DAY: Duration = Duration::hours(8);
