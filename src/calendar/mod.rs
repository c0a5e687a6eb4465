//! Calendar facts used by the assessment: month lengths, the statutory
//! monthly baseline, and weekday accounting relative to a reference date

mod month;
mod weekdays;
mod clock;

pub use month::{days_in_month, legal_work_hours, MonthCalendar, STATUTORY_WEEKLY_HOURS};
pub use weekdays::{
    count_weekdays, elapsed_weekdays_in_month, is_weekday, remaining_weekdays_in_month,
    total_weekdays_in_month,
};
pub use clock::{Clock, FixedClock, SystemClock};
