use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use crate::model::task::{Status, Task};

/// Flat, serialisable view of a parsed task for listings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TaskDto {
    pub content: String,
    pub status: Status,
    pub status_date: Option<NaiveDate>,
    pub priority: Option<char>,
    pub project: Option<String>,
    pub context: Option<String>,
    pub due: Option<NaiveDate>,
    pub threshold: Option<NaiveDate>,
    pub recurrence: Option<String>, // e.g. "+1m"

    // Whole days, easier to read than the raw seconds used for sorting.
    pub overdue_days: i64,
    pub threshold_days: i64,
}

impl TaskDto {
    pub fn from_entity(task: &Task) -> Self {
        Self {
            content: task.content.clone(),
            status: task.status,
            status_date: task.status_date,
            priority: task.priority,
            project: task.project.clone(),
            context: task.context.clone(),
            due: task.due,
            threshold: task.tdue,
            recurrence: task.recurrence.as_ref().map(|r| r.rule()),
            overdue_days: task.overdue_offset / 86_400,
            threshold_days: task.over_threshold_offset / 86_400,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_task;

    #[test]
    fn test_dto_json() {
        let today = NaiveDate::from_ymd_opt(2016, 7, 12).unwrap();
        let task = parse_task("(A) pay rent +home due:2016-07-15 rec:+1m", today);
        let dto = TaskDto::from_entity(&task);
        assert_eq!(dto.overdue_days, 2);
        assert_eq!(dto.recurrence.as_deref(), Some("+1m"));

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["status"], "Pending");
        assert_eq!(json["priority"], "A");
        assert_eq!(json["due"], "2016-07-15");
        assert_eq!(json["context"], serde_json::Value::Null);
    }
}
