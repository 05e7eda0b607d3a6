use std::ops::Range;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::model::task::{Recurrence, RecurrenceUnit, Status, Task};
use crate::time::{overdue_offset, parse_date, seconds_between};

static STATUS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[xX]\s+(?:(\d{4}-\d{2}-\d{2})(?:\s+|$))?").unwrap());
static PRIORITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(([A-Za-z])\)(?:\s|$)").unwrap());
static PROJECT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s(\+\S+)").unwrap());
static CONTEXT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(@\S+)").unwrap());
static DUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\sdue:(\d{4}-\d{2}-\d{2})\b").unwrap());
static THRESHOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\st:(\d{4}-\d{2}-\d{2})\b").unwrap());
static RECURRENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\srec:([+-]?\d+)([dwmyq])").unwrap());
static SPACE_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {2,}").unwrap());

/// Parse one trimmed, non-empty line into a [`Task`].
///
/// Never fails. Fields whose marker is missing or whose date does not parse
/// are left empty; `content` is always the line as given. Offsets are
/// measured against `today`, so every task of one run shares the same
/// reference day.
pub fn parse_task(line: &str, today: NaiveDate) -> Task {
    parse_fields(line, today, true)
}

/// Like [`parse_task`], but the line is never read as done. Used for freshly
/// generated occurrences whose text may itself begin with `x `.
pub fn parse_pending_task(line: &str, today: NaiveDate) -> Task {
    parse_fields(line, today, false)
}

fn parse_fields(line: &str, today: NaiveDate, detect_status: bool) -> Task {
    let mut status = Status::Pending;
    let mut status_date = None;
    let mut status_span = None;
    if let Some(caps) = STATUS_RE.captures(line).filter(|_| detect_status) {
        status = Status::Done;
        status_date = caps.get(1).and_then(|m| parse_date(m.as_str()));
        status_span = caps.get(0).map(|m| m.range());
    }

    let rest_start = status_span.as_ref().map_or(0, |span| span.end);
    let priority = PRIORITY_RE
        .captures(&line[rest_start..])
        .and_then(|caps| caps[1].chars().next());

    let project = first_capture(&PROJECT_RE, line);
    let context = first_capture(&CONTEXT_RE, line);

    let (due, due_span) = capture_date(&DUE_RE, line);
    let (tdue, tdue_span) = capture_date(&THRESHOLD_RE, line);

    let recurrence = RECURRENCE_RE.captures(line).and_then(|caps| {
        let unit = caps[2].chars().next().and_then(RecurrenceUnit::from_letter)?;
        Some(Recurrence::new(&caps[1], unit))
    });

    Task {
        content: line.to_string(),
        status,
        status_date,
        priority,
        project,
        context,
        due,
        tdue,
        recurrence,
        overdue_offset: due.map_or(0, |d| overdue_offset(today, d)),
        over_threshold_offset: tdue.map_or(0, |d| seconds_between(today, d)),
        status_span,
        due_span,
        tdue_span,
    }
}

/// Parse raw file lines. Lines are trimmed, blank ones skipped, and runs of
/// spaces collapsed before parsing.
pub fn load_tasks<I, S>(lines: I, today: NaiveDate) -> Vec<Task>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| {
            let line = line.as_ref().trim();
            if line.is_empty() {
                return None;
            }
            let line = SPACE_RUN_RE.replace_all(line, " ");
            Some(parse_task(&line, today))
        })
        .collect()
}

fn first_capture(re: &Regex, line: &str) -> Option<String> {
    re.captures(line).map(|caps| caps[1].to_string())
}

fn capture_date(re: &Regex, line: &str) -> (Option<NaiveDate>, Option<Range<usize>>) {
    let Some(m) = re.captures(line).and_then(|caps| caps.get(1)) else {
        return (None, None);
    };
    match parse_date(m.as_str()) {
        Some(date) => (Some(date), Some(m.range())),
        None => (None, None),
    }
}
