use thiserror::Error;
use time::{Date, PrimitiveDateTime};

/// Errors that can occur while computing work-time balances.
#[derive(Debug, Error)]
pub enum WorkTimeError {
    #[error("time interval invalid: {start} is after {end}")]
    InvalidTimeInterval {
        start: PrimitiveDateTime,
        end: PrimitiveDateTime,
    },
    #[error("date interval invalid: {start} is after {end}")]
    InvalidDateInterval { start: Date, end: Date },
    #[error("invalid date: {0}")]
    InvalidDate(#[from] time::error::ComponentRange),
    #[error("holiday lookup failed: {0}")]
    HolidayLookup(String),
}

impl WorkTimeError {
    pub fn holiday_lookup(msg: impl Into<String>) -> Self {
        Self::HolidayLookup(msg.into())
    }
}
