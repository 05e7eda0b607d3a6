use anyhow::Result;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};
use todotxt_core::time::format_date;
use todotxt_core::{Task, TaskDto};

// Helper struct for Table Row
#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "St")]
    status: char,
    #[tabled(rename = "Pri")]
    priority: String,
    #[tabled(rename = "Due")]
    due: String,
    #[tabled(rename = "T")]
    threshold: String,
    #[tabled(rename = "Project")]
    project: String,
    #[tabled(rename = "Context")]
    context: String,
    #[tabled(rename = "Rec")]
    recurrence: String,
    #[tabled(rename = "Text")]
    text: String,
}

impl TaskRow {
    fn from_task(task: &Task) -> Self {
        let or_dash = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());
        Self {
            status: task.status.letter(),
            priority: or_dash(task.priority.map(String::from)),
            due: or_dash(task.due.map(format_date)),
            threshold: or_dash(task.tdue.map(format_date)),
            project: or_dash(task.project.clone()),
            context: or_dash(task.context.clone()),
            recurrence: or_dash(task.recurrence.as_ref().map(|r| r.rule())),
            text: task.text().to_string(),
        }
    }
}

pub fn show_tasks(tasks: &[Task], json: bool) -> Result<()> {
    if json {
        let dtos: Vec<TaskDto> = tasks.iter().map(TaskDto::from_entity).collect();
        println!("{}", serde_json::to_string_pretty(&dtos)?);
        return Ok(());
    }

    if tasks.is_empty() {
        println!("No tasks found.");
        return Ok(());
    }

    let rows: Vec<TaskRow> = tasks.iter().map(TaskRow::from_task).collect();
    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN)); // Header color

    println!("{}", table);
    Ok(())
}
