use crate::models::{Priority, Task};
use serde::Deserialize;

/// Raw query parameters as they arrive on `GET /api/tasks`.
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    pub q: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

#[derive(Debug, Default)]
pub struct TaskFilter {
    query: String,
    status: StatusFilter,
    priority: PriorityFilter,
}

impl TaskFilter {
    pub fn new(query: &str, status: StatusFilter, priority: PriorityFilter) -> TaskFilter {
        TaskFilter {
            query: query.trim().to_lowercase(),
            status,
            priority,
        }
    }

    pub fn from_params(params: &FilterParams) -> Result<TaskFilter, String> {
        let status = match params.status.as_deref().unwrap_or("all") {
            "all" => StatusFilter::All,
            "completed" => StatusFilter::Completed,
            "active" => StatusFilter::Active,
            other => return Err(format!("unknown status filter '{other}'")),
        };
        let priority = match params.priority.as_deref().unwrap_or("all") {
            "all" => PriorityFilter::All,
            other => Priority::parse(other)
                .map(PriorityFilter::Only)
                .ok_or_else(|| format!("unknown priority filter '{other}'"))?,
        };
        Ok(TaskFilter::new(
            params.q.as_deref().unwrap_or(""),
            status,
            priority,
        ))
    }

    pub fn matches(&self, task: &Task) -> bool {
        if !self.query.is_empty() && !task.name.to_lowercase().contains(&self.query) {
            return false;
        }
        let status_ok = match self.status {
            StatusFilter::All => true,
            StatusFilter::Completed => task.completed,
            StatusFilter::Active => !task.completed,
        };
        let priority_ok = match self.priority {
            PriorityFilter::All => true,
            PriorityFilter::Only(priority) => task.priority == priority,
        };
        status_ok && priority_ok
    }

    /// Order-preserving subsequence of tasks matching all three predicates.
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        tasks
            .iter()
            .filter(|task| self.matches(task))
            .cloned()
            .collect()
    }
}
