use crate::errors::AppError;
use crate::models::{PlannerData, Priority, RawTask, Settings, Streak, Task};
use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;
use uuid::Uuid;

const TASKS_FILE: &str = "tasks.json";
const SETTINGS_FILE: &str = "settings.json";
const STREAK_FILE: &str = "streak.json";

pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = env::var("APP_DATA_DIR") {
        return PathBuf::from(dir);
    }
    PathBuf::from("data")
}

/// Reads one record file, falling back to the default on a missing file or
/// a parse failure. Each of the three records loads independently.
async fn load_record<T: DeserializeOwned + Default>(path: &Path) -> T {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(record) => record,
            Err(err) => {
                error!("failed to parse {}: {err}", path.display());
                T::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => T::default(),
        Err(err) => {
            error!("failed to read {}: {err}", path.display());
            T::default()
        }
    }
}

pub async fn load_store(dir: &Path, today: NaiveDate) -> PlannerData {
    let raw_tasks: Vec<RawTask> = load_record(&dir.join(TASKS_FILE)).await;
    PlannerData {
        tasks: normalize_tasks(raw_tasks, today),
        settings: load_record::<Settings>(&dir.join(SETTINGS_FILE)).await,
        streak: load_record::<Streak>(&dir.join(STREAK_FILE)).await,
    }
}

/// Versioned-load step: fills the fields older task records may be missing.
pub fn normalize_tasks(raw: Vec<RawTask>, today: NaiveDate) -> Vec<Task> {
    let today_key = today.to_string();
    raw.into_iter()
        .map(|record| {
            let completed = record.completed.unwrap_or(false);
            let completed_at = if completed {
                record.completed_at.or_else(|| Some(today_key.clone()))
            } else {
                None
            };
            Task {
                id: record.id.unwrap_or_else(Uuid::new_v4),
                name: record
                    .name
                    .filter(|name| !name.is_empty())
                    .unwrap_or_else(|| "Untitled".to_string()),
                date: record
                    .date
                    .filter(|date| !date.is_empty())
                    .unwrap_or_else(|| today_key.clone()),
                priority: record
                    .priority
                    .as_deref()
                    .and_then(Priority::parse)
                    .unwrap_or_default(),
                completed,
                completed_at,
                notified_date: record.notified_date,
            }
        })
        .collect()
}

async fn persist_record<T: Serialize>(path: &Path, record: &T) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(record).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

pub async fn persist_tasks(dir: &Path, tasks: &[Task]) -> Result<(), AppError> {
    persist_record(&dir.join(TASKS_FILE), &tasks).await
}

pub async fn persist_settings(dir: &Path, settings: &Settings) -> Result<(), AppError> {
    persist_record(&dir.join(SETTINGS_FILE), settings).await
}

pub async fn persist_streak(dir: &Path, streak: &Streak) -> Result<(), AppError> {
    persist_record(&dir.join(STREAK_FILE), streak).await
}
