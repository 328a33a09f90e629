use crate::errors::AppError;
use crate::models::{ReminderEvent, Task};
use crate::notify::Permission;
use crate::state::AppState;
use crate::storage;
use chrono::Local;
use tracing::{info, warn};

const REMINDER_TITLE: &str = "Task due today";

/// How many reminder events the in-memory feed keeps.
const FEED_CAPACITY: usize = 50;

/// Collects one reminder per task due today that has not been reminded
/// today, marking `notified_date` so each task fires at most once per
/// calendar day.
pub fn due_reminders(tasks: &mut [Task], today: &str) -> Vec<ReminderEvent> {
    let mut events = Vec::new();
    for task in tasks.iter_mut() {
        if task.date == today && task.notified_date.as_deref() != Some(today) {
            events.push(ReminderEvent {
                task_id: task.id,
                title: REMINDER_TITLE.to_string(),
                body: format!("{} — priority: {}", task.name, task.priority),
                date: today.to_string(),
            });
            task.notified_date = Some(today.to_string());
        }
    }
    events
}

/// Runs the due-today check against the live store: gated on the settings
/// flag and granted permission, dispatches through the injected host, and
/// persists the notified marks. Dispatch failure is logged and does not
/// un-mark the task.
pub async fn run_due_check(state: &AppState) -> Result<usize, AppError> {
    let today = Local::now().date_naive().to_string();

    let events = {
        let mut data = state.data.lock().await;
        if !data.settings.notifications_enabled || state.host.permission() != Permission::Granted {
            return Ok(0);
        }
        let events = due_reminders(&mut data.tasks, &today);
        if !events.is_empty() {
            storage::persist_tasks(&state.data_dir, &data.tasks).await?;
        }
        events
    };

    if events.is_empty() {
        return Ok(0);
    }

    for event in &events {
        if let Err(err) = state.host.notify(&event.title, &event.body) {
            warn!("{err}");
        }
    }

    let emitted = events.len();
    let mut feed = state.reminders.lock().await;
    feed.extend(events);
    if feed.len() > FEED_CAPACITY {
        let excess = feed.len() - FEED_CAPACITY;
        feed.drain(..excess);
    }
    info!(emitted, "due-today reminders dispatched");
    Ok(emitted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlannerData, Priority};
    use crate::notify::Permission;
    use crate::settings::test_host::StubHost;
    use crate::state::AppState;
    use std::sync::Arc;
    use uuid::Uuid;

    fn task(name: &str, date: &str, notified: Option<&str>) -> Task {
        Task {
            id: Uuid::new_v4(),
            name: name.to_string(),
            date: date.to_string(),
            priority: Priority::High,
            completed: false,
            completed_at: None,
            notified_date: notified.map(str::to_string),
        }
    }

    fn scratch_dir() -> std::path::PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut dir = std::env::temp_dir();
        dir.push(format!("study_planner_reminder_{}_{}", std::process::id(), nanos));
        dir
    }

    async fn state_with(host: Arc<StubHost>, tasks: Vec<Task>) -> AppState {
        let dir = scratch_dir();
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let mut data = PlannerData::default();
        data.settings.notifications_enabled = true;
        data.tasks = tasks;
        AppState::new(dir, data, host)
    }

    #[test]
    fn only_unnotified_due_tasks_fire() {
        let mut tasks = vec![
            task("exam review", "2026-03-01", None),
            task("already pinged", "2026-03-01", Some("2026-03-01")),
            task("due later", "2026-03-05", None),
        ];

        let events = due_reminders(&mut tasks, "2026-03-01");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].body, "exam review — priority: High");

        assert_eq!(tasks[0].notified_date.as_deref(), Some("2026-03-01"));
        assert_eq!(tasks[1].notified_date.as_deref(), Some("2026-03-01"));
        assert_eq!(tasks[2].notified_date, None);
    }

    #[test]
    fn second_check_same_day_emits_nothing() {
        let mut tasks = vec![task("exam review", "2026-03-01", None)];
        assert_eq!(due_reminders(&mut tasks, "2026-03-01").len(), 1);
        assert_eq!(due_reminders(&mut tasks, "2026-03-01").len(), 0);
    }

    #[test]
    fn stale_notified_date_fires_again_next_day() {
        let mut tasks = vec![task("rollover", "2026-03-02", Some("2026-03-01"))];
        let events = due_reminders(&mut tasks, "2026-03-02");
        assert_eq!(events.len(), 1);
        assert_eq!(tasks[0].notified_date.as_deref(), Some("2026-03-02"));
    }

    #[tokio::test]
    async fn live_check_dispatches_through_the_host() {
        let today = Local::now().date_naive().to_string();
        let host = Arc::new(StubHost::new(Permission::Granted, Permission::Granted));
        let state = state_with(Arc::clone(&host), vec![task("lab write-up", &today, None)]).await;

        let emitted = run_due_check(&state).await.unwrap();
        assert_eq!(emitted, 1);

        let data = state.data.lock().await;
        assert_eq!(data.tasks[0].notified_date.as_deref(), Some(today.as_str()));
        drop(data);

        let sent = host.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "Task due today");
        assert_eq!(sent[0].1, "lab write-up — priority: High");
    }

    #[tokio::test]
    async fn dispatch_failure_still_marks_notified_date() {
        let today = Local::now().date_naive().to_string();
        let mut host = StubHost::new(Permission::Granted, Permission::Granted);
        host.fail_dispatch = true;
        let host = Arc::new(host);
        let state = state_with(Arc::clone(&host), vec![task("flaky delivery", &today, None)]).await;

        let emitted = run_due_check(&state).await.unwrap();
        assert_eq!(emitted, 1);

        // delivery is a courtesy; the at-most-once mark sticks regardless
        let data = state.data.lock().await;
        assert_eq!(data.tasks[0].notified_date.as_deref(), Some(today.as_str()));
        drop(data);

        let feed = state.reminders.lock().await;
        assert_eq!(feed.len(), 1);
        drop(feed);

        let again = run_due_check(&state).await.unwrap();
        assert_eq!(again, 0);
    }

    #[tokio::test]
    async fn disabled_reminders_emit_nothing() {
        let today = Local::now().date_naive().to_string();
        let host = Arc::new(StubHost::new(Permission::Granted, Permission::Granted));
        let state = state_with(host, vec![task("muted", &today, None)]).await;
        state.data.lock().await.settings.notifications_enabled = false;

        let emitted = run_due_check(&state).await.unwrap();
        assert_eq!(emitted, 0);
        let data = state.data.lock().await;
        assert_eq!(data.tasks[0].notified_date, None);
    }
}
