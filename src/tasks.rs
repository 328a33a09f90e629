use crate::models::{PlannerData, Priority, Task};
use crate::stats;
use chrono::NaiveDate;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, PartialEq, Eq)]
pub enum TaskError {
    Validation(String),
    UnknownTask(Uuid),
}

impl fmt::Display for TaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskError::Validation(message) => f.write_str(message),
            TaskError::UnknownTask(id) => write!(f, "no task with id {id}"),
        }
    }
}

impl std::error::Error for TaskError {}

fn validate(name: &str, date: &str) -> Result<(String, String), TaskError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(TaskError::Validation("task name must not be empty".into()));
    }
    if date.is_empty() {
        return Err(TaskError::Validation("task date must not be empty".into()));
    }
    if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        return Err(TaskError::Validation(
            "task date must be a YYYY-MM-DD calendar date".into(),
        ));
    }
    Ok((name.to_string(), date.to_string()))
}

fn find_mut(tasks: &mut [Task], id: Uuid) -> Result<&mut Task, TaskError> {
    tasks
        .iter_mut()
        .find(|task| task.id == id)
        .ok_or(TaskError::UnknownTask(id))
}

pub fn add_task(
    tasks: &mut Vec<Task>,
    name: &str,
    date: &str,
    priority: Priority,
) -> Result<Task, TaskError> {
    let (name, date) = validate(name, date)?;
    let task = Task {
        id: Uuid::new_v4(),
        name,
        date,
        priority,
        completed: false,
        completed_at: None,
        notified_date: None,
    };
    tasks.push(task.clone());
    Ok(task)
}

/// Overwrites name, date and priority; completion fields are untouched.
pub fn edit_task(
    tasks: &mut [Task],
    id: Uuid,
    name: &str,
    date: &str,
    priority: Priority,
) -> Result<Task, TaskError> {
    let (name, date) = validate(name, date)?;
    let task = find_mut(tasks, id)?;
    task.name = name;
    task.date = date;
    task.priority = priority;
    Ok(task.clone())
}

/// Flips completion. Marking complete stamps `completed_at` with today and
/// feeds the streak; unmarking clears the stamp and leaves the streak alone.
pub fn toggle_complete(
    data: &mut PlannerData,
    id: Uuid,
    today: NaiveDate,
) -> Result<Task, TaskError> {
    let task = find_mut(&mut data.tasks, id)?;
    task.completed = !task.completed;
    if task.completed {
        task.completed_at = Some(today.to_string());
        let updated = task.clone();
        data.streak = stats::record_completion_today(&data.streak, today);
        Ok(updated)
    } else {
        task.completed_at = None;
        Ok(task.clone())
    }
}

pub fn remove_task(tasks: &mut Vec<Task>, id: Uuid) -> Result<Task, TaskError> {
    let position = tasks
        .iter()
        .position(|task| task.id == id)
        .ok_or(TaskError::UnknownTask(id))?;
    Ok(tasks.remove(position))
}

pub fn clear_completed(tasks: &mut Vec<Task>) -> usize {
    let before = tasks.len();
    tasks.retain(|task| !task.completed);
    before - tasks.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn add_appends_an_active_task() {
        let mut tasks = Vec::new();
        let task = add_task(&mut tasks, "read chapter 4", "2026-03-01", Priority::High).unwrap();
        assert_eq!(tasks.len(), 1);
        assert!(!task.completed);
        assert_eq!(task.completed_at, None);
        assert_eq!(task.notified_date, None);
    }

    #[test]
    fn add_rejects_empty_name_and_empty_date() {
        let mut tasks = Vec::new();
        let err = add_task(&mut tasks, "   ", "2026-03-01", Priority::Low).unwrap_err();
        assert!(matches!(err, TaskError::Validation(_)));
        let err = add_task(&mut tasks, "essay", "", Priority::Low).unwrap_err();
        assert!(matches!(err, TaskError::Validation(_)));
        assert!(tasks.is_empty());
    }

    #[test]
    fn add_rejects_malformed_date() {
        let mut tasks = Vec::new();
        let err = add_task(&mut tasks, "essay", "tomorrow", Priority::Low).unwrap_err();
        assert!(matches!(err, TaskError::Validation(_)));
        assert!(tasks.is_empty());
    }

    #[test]
    fn edit_overwrites_fields_but_not_completion() {
        let mut data = PlannerData::default();
        let task = add_task(&mut data.tasks, "draft", "2026-03-01", Priority::Low).unwrap();
        toggle_complete(&mut data, task.id, day(2026, 3, 1)).unwrap();

        let edited = edit_task(
            &mut data.tasks,
            task.id,
            "final draft",
            "2026-03-02",
            Priority::High,
        )
        .unwrap();
        assert_eq!(edited.name, "final draft");
        assert_eq!(edited.priority, Priority::High);
        assert!(edited.completed);
        assert_eq!(edited.completed_at.as_deref(), Some("2026-03-01"));
    }

    #[test]
    fn edit_unknown_id_fails() {
        let mut tasks = Vec::new();
        let err = edit_task(&mut tasks, Uuid::new_v4(), "x", "2026-03-01", Priority::Low)
            .unwrap_err();
        assert!(matches!(err, TaskError::UnknownTask(_)));
    }

    #[test]
    fn toggle_marks_and_unmarks() {
        let mut data = PlannerData::default();
        let task = add_task(&mut data.tasks, "quiz prep", "2026-03-01", Priority::Medium).unwrap();
        let today = day(2026, 3, 1);

        let done = toggle_complete(&mut data, task.id, today).unwrap();
        assert!(done.completed);
        assert_eq!(done.completed_at.as_deref(), Some("2026-03-01"));
        assert_eq!(data.streak.count, 1);

        let undone = toggle_complete(&mut data, task.id, today).unwrap();
        assert!(!undone.completed);
        assert_eq!(undone.completed_at, None);
        // unmarking never rolls the streak back
        assert_eq!(data.streak.count, 1);
    }

    #[test]
    fn remove_preserves_order_of_the_rest() {
        let mut tasks = Vec::new();
        let a = add_task(&mut tasks, "a", "2026-03-01", Priority::Low).unwrap();
        let b = add_task(&mut tasks, "b", "2026-03-01", Priority::Low).unwrap();
        let c = add_task(&mut tasks, "c", "2026-03-01", Priority::Low).unwrap();

        remove_task(&mut tasks, b.id).unwrap();
        let ids: Vec<Uuid> = tasks.iter().map(|task| task.id).collect();
        assert_eq!(ids, vec![a.id, c.id]);
    }

    #[test]
    fn clear_completed_drops_only_completed() {
        let mut data = PlannerData::default();
        let a = add_task(&mut data.tasks, "a", "2026-03-01", Priority::Low).unwrap();
        add_task(&mut data.tasks, "b", "2026-03-01", Priority::Low).unwrap();
        toggle_complete(&mut data, a.id, day(2026, 3, 1)).unwrap();

        let removed = clear_completed(&mut data.tasks);
        assert_eq!(removed, 1);
        assert_eq!(data.tasks.len(), 1);
        assert_eq!(data.tasks[0].name, "b");
    }
}
