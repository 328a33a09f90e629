use crate::notify::Permission;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Lenient parse used for loaded records and filter values.
    pub fn parse(value: &str) -> Option<Priority> {
        match value.to_ascii_lowercase().as_str() {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub name: String,
    pub date: String,
    pub priority: Priority,
    pub completed: bool,
    pub completed_at: Option<String>,
    pub notified_date: Option<String>,
}

/// Shape of a task record as it may exist on disk, with every field optional.
/// Older records are brought up to the current schema by the normalize pass
/// in `storage`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawTask {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub date: Option<String>,
    pub priority: Option<String>,
    pub completed: Option<bool>,
    pub completed_at: Option<String>,
    pub notified_date: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
    pub notifications_enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Streak {
    pub count: u32,
    pub last_completed_date: Option<String>,
}

/// Everything the planner owns. Task order is insertion order.
#[derive(Debug, Clone, Default)]
pub struct PlannerData {
    pub tasks: Vec<Task>,
    pub settings: Settings,
    pub streak: Streak,
}

#[derive(Debug, Deserialize)]
pub struct TaskRequest {
    pub name: String,
    pub date: String,
    #[serde(default)]
    pub priority: Priority,
}

#[derive(Debug, Serialize)]
pub struct PlannerSummary {
    pub total: usize,
    pub completed: usize,
    pub percent: u32,
    pub streak: Streak,
}

#[derive(Debug, Serialize)]
pub struct TaskListResponse {
    pub tasks: Vec<Task>,
    pub empty: bool,
    pub summary: PlannerSummary,
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub task: Task,
    pub streak: Streak,
}

#[derive(Debug, Serialize)]
pub struct ClearCompletedResponse {
    pub removed: usize,
    pub summary: PlannerSummary,
}

#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub theme: Theme,
    pub notifications_enabled: bool,
    pub permission: Permission,
}

#[derive(Debug, Serialize)]
pub struct NotificationToggleResponse {
    pub enabled: bool,
    pub permission: Permission,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReminderEvent {
    pub task_id: Uuid,
    pub title: String,
    pub body: String,
    pub date: String,
}

#[derive(Debug, Serialize)]
pub struct CheckRemindersResponse {
    pub emitted: usize,
}
