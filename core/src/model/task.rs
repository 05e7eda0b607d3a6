use std::ops::Range;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TodoError};
use crate::time::CalendarOffset;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pending,
    Done,
}

impl Default for Status {
    fn default() -> Self {
        Status::Pending
    }
}

impl Status {
    /// Single-letter form used when rendering and comparing.
    pub fn letter(self) -> char {
        match self {
            Status::Pending => 'a',
            Status::Done => 'x',
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecurrenceUnit {
    Day,
    Week,
    Month,
    Year,
    Quarter,
}

impl RecurrenceUnit {
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'd' => Some(RecurrenceUnit::Day),
            'w' => Some(RecurrenceUnit::Week),
            'm' => Some(RecurrenceUnit::Month),
            'y' => Some(RecurrenceUnit::Year),
            'q' => Some(RecurrenceUnit::Quarter),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            RecurrenceUnit::Day => 'd',
            RecurrenceUnit::Week => 'w',
            RecurrenceUnit::Month => 'm',
            RecurrenceUnit::Year => 'y',
            RecurrenceUnit::Quarter => 'q',
        }
    }
}

/// A `rec:` rule. The magnitude is kept as written (`+1`, `4`, `-2`) and only
/// turned into a number when a successor is generated.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Recurrence {
    pub magnitude: String,
    pub unit: RecurrenceUnit,
}

impl Recurrence {
    pub fn new(magnitude: impl Into<String>, unit: RecurrenceUnit) -> Self {
        Self {
            magnitude: magnitude.into(),
            unit,
        }
    }

    pub fn rule(&self) -> String {
        format!("{}{}", self.magnitude, self.unit.letter())
    }

    /// Calendar offset described by this rule.
    pub fn offset(&self) -> Result<CalendarOffset> {
        let amount: i32 = self
            .magnitude
            .parse()
            .map_err(|e: std::num::ParseIntError| self.error(e.to_string()))?;

        let overflow = || self.error("magnitude out of range".to_string());
        let offset = match self.unit {
            RecurrenceUnit::Day => CalendarOffset::Days(i64::from(amount)),
            RecurrenceUnit::Week => CalendarOffset::Days(i64::from(amount) * 7),
            RecurrenceUnit::Month => CalendarOffset::Months(amount),
            RecurrenceUnit::Year => CalendarOffset::Months(amount.checked_mul(12).ok_or_else(overflow)?),
            RecurrenceUnit::Quarter => CalendarOffset::Months(amount.checked_mul(3).ok_or_else(overflow)?),
        };
        Ok(offset)
    }

    fn error(&self, reason: String) -> TodoError {
        TodoError::RecurrenceParse {
            rule: self.rule(),
            reason,
        }
    }
}

/// One todo.txt line and the fields derived from it.
///
/// `content` is the source of truth; everything else is a view into it,
/// computed once by [`crate::input::parse_task`].
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub content: String,
    pub status: Status,
    pub status_date: Option<NaiveDate>,
    pub priority: Option<char>,
    pub project: Option<String>,
    pub context: Option<String>,
    pub due: Option<NaiveDate>,
    pub tdue: Option<NaiveDate>,
    pub recurrence: Option<Recurrence>,

    // Seconds relative to the reference day. Overdue counts from the day after `due`.
    pub overdue_offset: i64,
    pub over_threshold_offset: i64,

    // Byte spans into `content`: the `x [date] ` prefix and the date values
    // of `due:` and `t:`. Only set when the corresponding field parsed.
    pub status_span: Option<Range<usize>>,
    pub due_span: Option<Range<usize>>,
    pub tdue_span: Option<Range<usize>>,
}

impl Task {
    pub fn is_done(&self) -> bool {
        self.status == Status::Done
    }

    /// Content without the leading status marker and completion date.
    pub fn text(&self) -> &str {
        match &self.status_span {
            Some(span) => &self.content[span.end..],
            None => &self.content,
        }
    }
}
