//! Holiday lookup port (outbound).

use time::PrimitiveDateTime;

use crate::domain::{models::Holiday, WorkTimeError};

/// Source of public holidays.
///
/// Implementations are read-only; errors are surfaced to the caller as-is.
pub trait HolidayRepository: Send + Sync + 'static {
    /// Holidays whose date lies within `[start, end]`.
    fn find_holidays_between(
        &self,
        start: PrimitiveDateTime,
        end: PrimitiveDateTime,
    ) -> Result<Vec<Holiday>, WorkTimeError>;
}
