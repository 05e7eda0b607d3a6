use chrono::NaiveDate;

use crate::error::{Result, TodoError};
use crate::input::parse_pending_task;
use crate::model::task::Task;
use crate::time::{format_date, shift_date};

/// Yield every task, each done recurring task followed by its next occurrence.
///
/// Successors are pending, so they never spawn further successors within the
/// same pass. A task whose rule cannot be applied passes through alone and the
/// problem is logged.
pub fn expand_recurring<I>(tasks: I, today: NaiveDate) -> impl Iterator<Item = Task>
where
    I: IntoIterator<Item = Task>,
{
    tasks.into_iter().flat_map(move |task| {
        let next = match next_occurrence(&task, today) {
            Ok(next) => next,
            Err(e) => {
                tracing::warn!(task = %task.content, "skipping recurrence: {}", e);
                None
            }
        };
        std::iter::once(task).chain(next)
    })
}

/// The successor of `task`, or `None` when it is not both done and recurring.
pub fn next_occurrence(task: &Task, today: NaiveDate) -> Result<Option<Task>> {
    let Some(recurrence) = task.recurrence.as_ref().filter(|_| task.is_done()) else {
        return Ok(None);
    };
    let offset = recurrence.offset()?;

    tracing::debug!("recurse task '{}'", task.content);

    let shift = |date: NaiveDate| {
        shift_date(date, offset).ok_or_else(|| TodoError::RecurrenceParse {
            rule: recurrence.rule(),
            reason: format!("{} moves out of the supported date range", format_date(date)),
        })
    };

    let base = task.status_span.as_ref().map_or(0, |span| span.end);
    let mut edits = Vec::new();
    for (date, span) in [(task.due, &task.due_span), (task.tdue, &task.tdue_span)] {
        let (Some(date), Some(span)) = (date, span) else {
            continue;
        };
        if span.start < base {
            continue;
        }
        edits.push((span.start - base..span.end - base, format_date(shift(date)?)));
    }
    // Apply back to front so earlier spans stay valid.
    edits.sort_by_key(|(span, _)| std::cmp::Reverse(span.start));

    let mut content = task.content[base..].to_string();
    for (span, date) in edits {
        content.replace_range(span, &date);
    }

    Ok(Some(parse_pending_task(&content, today)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_task;
    use crate::model::task::{Recurrence, RecurrenceUnit, Status};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2016, 7, 12).unwrap()
    }

    fn expand(line: &str) -> Vec<Task> {
        expand_recurring(vec![parse_task(line, today())], today()).collect()
    }

    fn successor_content(line: &str) -> String {
        let tasks = expand(line);
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].content, line);
        tasks[1].content.clone()
    }

    #[test]
    fn test_pending_task_is_not_expanded() {
        let line = "2016-07-10 task test 1 due:2016-07-13 t:2016-07-11 rec:+1m";
        let tasks = expand(line);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].content, line);
    }

    #[test]
    fn test_done_task_without_rule_is_not_expanded() {
        assert_eq!(expand("x 2016-07-12 task due:2016-07-13").len(), 1);
    }

    #[test]
    fn test_recurse_without_dates() {
        assert_eq!(
            successor_content("x 2016-07-12 2016-07-10 task test 1 rec:+1m"),
            "2016-07-10 task test 1 rec:+1m"
        );
    }

    #[test]
    fn test_recurse_units() {
        let cases = [
            ("+1m", "due:2016-08-13 t:2016-08-11"),
            ("+1w", "due:2016-07-20 t:2016-07-18"),
            ("+4d", "due:2016-07-17 t:2016-07-15"),
            ("+2y", "due:2018-07-13 t:2018-07-11"),
            ("+1q", "due:2016-10-13 t:2016-10-11"),
        ];
        for (rule, dates) in cases {
            let line = format!("x 2016-07-10 2016-07-10 task test 1 due:2016-07-13 t:2016-07-11 rec:{}", rule);
            assert_eq!(
                successor_content(&line),
                format!("2016-07-10 task test 1 {} rec:{}", dates, rule),
                "rule {}",
                rule
            );
        }
    }

    #[test]
    fn test_end_to_end_scenario() {
        let line = "x 2016-07-12 (A) 2016-07-10 task +project @context due:2016-07-13 t:2016-07-11 rec:+1m";
        let tasks = expand(line);
        assert_eq!(tasks.len(), 2);

        let next = &tasks[1];
        assert_eq!(next.status, Status::Pending);
        assert_eq!(next.status_date, None);
        assert_eq!(next.priority, Some('A'));
        assert_eq!(next.due, NaiveDate::from_ymd_opt(2016, 8, 13));
        assert_eq!(next.tdue, NaiveDate::from_ymd_opt(2016, 8, 11));
        assert_eq!(next.recurrence, Some(Recurrence::new("+1", RecurrenceUnit::Month)));
        assert_eq!(
            next.content,
            "(A) 2016-07-10 task +project @context due:2016-08-13 t:2016-08-11 rec:+1m"
        );
    }

    #[test]
    fn test_successor_text_starting_with_x_stays_pending() {
        let tasks = expand("x 2016-07-12 x 2016-07-01 scan rec:+1w");
        assert_eq!(tasks.len(), 2);

        let next = &tasks[1];
        assert_eq!(next.content, "x 2016-07-01 scan rec:+1w");
        assert_eq!(next.status, Status::Pending);
        assert_eq!(next.status_date, None);
        assert_eq!(next.recurrence, Some(Recurrence::new("+1", RecurrenceUnit::Week)));

        let tasks = expand("x 2016-07-12 x marks the spot due:2016-07-13 rec:+1d");
        assert_eq!(tasks[1].content, "x marks the spot due:2016-07-14 rec:+1d");
        assert_eq!(tasks[1].status, Status::Pending);
        assert_eq!(tasks[1].due, NaiveDate::from_ymd_opt(2016, 7, 14));
    }

    #[test]
    fn test_recurse_without_status_date() {
        assert_eq!(
            successor_content("x (B) water plants due:2016-07-13 rec:1w"),
            "(B) water plants due:2016-07-20 rec:1w"
        );
    }

    #[test]
    fn test_only_present_dates_move() {
        assert_eq!(
            successor_content("x 2016-07-12 stretch t:2016-07-11 rec:+4d"),
            "stretch t:2016-07-15 rec:+4d"
        );
    }

    #[test]
    fn test_malformed_date_is_left_alone() {
        assert_eq!(
            successor_content("x 2016-07-12 stretch due:2016-02-30 rec:+4d"),
            "stretch due:2016-02-30 rec:+4d"
        );
    }

    #[test]
    fn test_month_end_is_clamped() {
        assert_eq!(
            successor_content("x 2016-01-31 rent due:2016-01-31 rec:+1m"),
            "rent due:2016-02-29 rec:+1m"
        );
    }

    #[test]
    fn test_negative_rule_moves_backwards() {
        assert_eq!(
            successor_content("x 2016-07-12 review due:2016-07-13 rec:-1w"),
            "review due:2016-07-06 rec:-1w"
        );
    }

    #[test]
    fn test_unparseable_magnitude_keeps_original() {
        let line = "x 2016-07-12 task due:2016-07-13 rec:+99999999999d";
        let task = parse_task(line, today());
        assert!(matches!(
            next_occurrence(&task, today()),
            Err(TodoError::RecurrenceParse { .. })
        ));

        let tasks = expand(line);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].content, line);
    }

    #[test]
    fn test_successors_are_not_expanded_again() {
        let lines = [
            "x 2016-07-12 a due:2016-07-13 rec:+1d",
            "b",
            "x 2016-07-12 c rec:+1w",
        ];
        let tasks: Vec<Task> = lines.iter().map(|l| parse_task(l, today())).collect();
        let expanded: Vec<Task> = expand_recurring(tasks, today()).collect();
        let contents: Vec<&str> = expanded.iter().map(|t| t.content.as_str()).collect();
        assert_eq!(
            contents,
            vec![
                "x 2016-07-12 a due:2016-07-13 rec:+1d",
                "a due:2016-07-14 rec:+1d",
                "b",
                "x 2016-07-12 c rec:+1w",
                "c rec:+1w",
            ]
        );
    }
}
