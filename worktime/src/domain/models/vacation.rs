use strum::{Display, EnumString};
use time::Date;

/// Lifecycle state of a vacation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum VacationState {
    Pending,
    Accept,
    Reject,
    Cancelled,
}

/// A vacation period.
///
/// `days` are the workable days the period consumes. They may fall in a
/// different year than `charge_year`, the year whose allowance is debited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vacation {
    pub state: VacationState,
    pub start_date: Date,
    pub end_date: Date,
    pub days: Vec<Date>,
    pub charge_year: Date,
}

impl Vacation {
    /// Pending and accepted vacations count against the allowance.
    pub fn is_requested(&self) -> bool {
        matches!(self.state, VacationState::Pending | VacationState::Accept)
    }

    pub fn days_in_year(&self, year: i32) -> impl Iterator<Item = Date> + '_ {
        self.days.iter().copied().filter(move |day| day.year() == year)
    }
}
