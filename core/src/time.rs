use chrono::{Duration, Local, Months, NaiveDate};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Shift applied to a date by a recurrence rule.
///
/// Days are exact. Months are calendar months: when the target month is
/// shorter, the day is clamped to its last day (Jan 31 + 1 month = Feb 28/29).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarOffset {
    Days(i64),
    Months(i32),
}

/// The reference day for one run: local midnight of the current date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Strict `YYYY-MM-DD`. Anything else, including impossible dates like
/// `2016-02-30`, is `None`.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input, DATE_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Seconds from midnight of `reference` to midnight of `date`.
pub fn seconds_between(reference: NaiveDate, date: NaiveDate) -> i64 {
    (date - reference).num_seconds()
}

pub fn overdue_offset(reference: NaiveDate, due: NaiveDate) -> i64 {
    seconds_between(reference, due) - SECONDS_PER_DAY
}

/// Apply `offset` to `date`. `None` when the result leaves chrono's date range.
pub fn shift_date(date: NaiveDate, offset: CalendarOffset) -> Option<NaiveDate> {
    match offset {
        CalendarOffset::Days(days) => date.checked_add_signed(Duration::try_days(days)?),
        CalendarOffset::Months(months) if months >= 0 => {
            date.checked_add_months(Months::new(months.unsigned_abs()))
        }
        CalendarOffset::Months(months) => date.checked_sub_months(Months::new(months.unsigned_abs())),
    }
}
