use crate::model::task::Task;

/// Partition tasks into `(active, done)`, keeping relative order on both sides.
pub fn split_archive<I>(tasks: I) -> (Vec<Task>, Vec<Task>)
where
    I: IntoIterator<Item = Task>,
{
    tasks.into_iter().partition(|task| !task.is_done())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::load_tasks;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2016, 7, 12).unwrap()
    }

    #[test]
    fn test_archive() {
        let data = [
            "2016-07-10 task test 1 +project @context due:2016-07-13 t:2016-07-11 rec:+1m",
            "(A) task test 2 due:2017-01-01",
            "x task 4",
            "x 2016-06-01 (B)",
        ];
        let (active, done) = split_archive(load_tasks(data, today()));
        assert_eq!(active.len(), 2);
        assert_eq!(done.len(), 2);
        assert_eq!(active[0].project.as_deref(), Some("+project"));
        assert_eq!(active[1].due, NaiveDate::from_ymd_opt(2017, 1, 1));
        assert_eq!(done[0].content, "x task 4");
        assert_eq!(done[1].status_date, NaiveDate::from_ymd_opt(2016, 6, 1));
    }

    #[test]
    fn test_partition_is_complete() {
        let data = ["x a", "b", "X c", "d", "x 2016-01-01 e", "xf"];
        let tasks = load_tasks(data, today());
        let (active, done) = split_archive(tasks.clone());
        assert_eq!(active.len() + done.len(), tasks.len());
        assert!(active.iter().all(|t| !t.is_done()));
        assert!(done.iter().all(|t| t.is_done()));
        for task in &tasks {
            let hits = active.iter().chain(&done).filter(|t| *t == task).count();
            assert_eq!(hits, 1);
        }
    }

    #[test]
    fn test_empty_input() {
        let (active, done) = split_archive(Vec::new());
        assert!(active.is_empty());
        assert!(done.is_empty());
    }
}
