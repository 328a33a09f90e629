use crate::errors::AppError;
use crate::filter::{FilterParams, TaskFilter};
use crate::models::{
    CheckRemindersResponse, ClearCompletedResponse, NotificationToggleResponse, PlannerSummary,
    ReminderEvent, SettingsResponse, Task, TaskListResponse, TaskRequest, ToggleResponse,
};
use crate::notify::Permission;
use crate::reminder;
use crate::settings::{self, NotifyToggle};
use crate::state::AppState;
use crate::stats::build_summary;
use crate::storage;
use crate::tasks;
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Path, Query, State},
    response::Html,
};
use chrono::Local;
use uuid::Uuid;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    Html(render_index(data.settings.theme))
}

pub async fn list_tasks(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<Json<TaskListResponse>, AppError> {
    let filter = TaskFilter::from_params(&params).map_err(AppError::bad_request)?;
    let data = state.data.lock().await;
    let tasks = filter.apply(&data.tasks);
    Ok(Json(TaskListResponse {
        empty: tasks.is_empty(),
        summary: build_summary(&data),
        tasks,
    }))
}

pub async fn add_task(
    State(state): State<AppState>,
    Json(payload): Json<TaskRequest>,
) -> Result<Json<Task>, AppError> {
    let mut data = state.data.lock().await;
    let task = tasks::add_task(&mut data.tasks, &payload.name, &payload.date, payload.priority)?;
    storage::persist_tasks(&state.data_dir, &data.tasks).await?;
    Ok(Json(task))
}

pub async fn edit_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TaskRequest>,
) -> Result<Json<Task>, AppError> {
    let mut data = state.data.lock().await;
    let task = tasks::edit_task(
        &mut data.tasks,
        id,
        &payload.name,
        &payload.date,
        payload.priority,
    )?;
    storage::persist_tasks(&state.data_dir, &data.tasks).await?;
    Ok(Json(task))
}

pub async fn toggle_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ToggleResponse>, AppError> {
    let mut data = state.data.lock().await;
    let task = tasks::toggle_complete(&mut data, id, Local::now().date_naive())?;
    storage::persist_tasks(&state.data_dir, &data.tasks).await?;
    storage::persist_streak(&state.data_dir, &data.streak).await?;
    Ok(Json(ToggleResponse {
        task,
        streak: data.streak.clone(),
    }))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PlannerSummary>, AppError> {
    let mut data = state.data.lock().await;
    tasks::remove_task(&mut data.tasks, id)?;
    storage::persist_tasks(&state.data_dir, &data.tasks).await?;
    Ok(Json(build_summary(&data)))
}

pub async fn clear_completed(
    State(state): State<AppState>,
) -> Result<Json<ClearCompletedResponse>, AppError> {
    let mut data = state.data.lock().await;
    let removed = tasks::clear_completed(&mut data.tasks);
    if removed > 0 {
        storage::persist_tasks(&state.data_dir, &data.tasks).await?;
    }
    Ok(Json(ClearCompletedResponse {
        removed,
        summary: build_summary(&data),
    }))
}

pub async fn get_summary(State(state): State<AppState>) -> Json<PlannerSummary> {
    let data = state.data.lock().await;
    Json(build_summary(&data))
}

pub async fn get_settings(State(state): State<AppState>) -> Json<SettingsResponse> {
    let data = state.data.lock().await;
    Json(SettingsResponse {
        theme: data.settings.theme,
        notifications_enabled: data.settings.notifications_enabled,
        permission: state.host.permission(),
    })
}

pub async fn toggle_theme(
    State(state): State<AppState>,
) -> Result<Json<SettingsResponse>, AppError> {
    let mut data = state.data.lock().await;
    data.settings.theme = data.settings.theme.toggled();
    storage::persist_settings(&state.data_dir, &data.settings).await?;
    Ok(Json(SettingsResponse {
        theme: data.settings.theme,
        notifications_enabled: data.settings.notifications_enabled,
        permission: state.host.permission(),
    }))
}

pub async fn toggle_notifications(
    State(state): State<AppState>,
) -> Result<Json<NotificationToggleResponse>, AppError> {
    let outcome = {
        let mut data = state.data.lock().await;
        let outcome = settings::negotiate_toggle(data.settings.notifications_enabled, &*state.host);
        match &outcome {
            NotifyToggle::Disabled => {
                data.settings.notifications_enabled = false;
                storage::persist_settings(&state.data_dir, &data.settings).await?;
            }
            NotifyToggle::Enabled => {
                data.settings.notifications_enabled = true;
                storage::persist_settings(&state.data_dir, &data.settings).await?;
            }
            NotifyToggle::Refused(_) => {}
        }
        outcome
    };

    let response = match outcome {
        NotifyToggle::Disabled => NotificationToggleResponse {
            enabled: false,
            permission: state.host.permission(),
            message: "Reminders turned off.".to_string(),
        },
        NotifyToggle::Enabled => {
            // immediate check, outside the data lock
            reminder::run_due_check(&state).await?;
            NotificationToggleResponse {
                enabled: true,
                permission: Permission::Granted,
                message: "Reminders enabled — you will be notified for tasks due today."
                    .to_string(),
            }
        }
        NotifyToggle::Refused(permission) => NotificationToggleResponse {
            enabled: false,
            permission,
            message: match permission {
                Permission::Denied => {
                    "Notifications blocked. Permission was denied by the host.".to_string()
                }
                _ => "Notification permission has not been decided yet.".to_string(),
            },
        },
    };
    Ok(Json(response))
}

pub async fn check_reminders(
    State(state): State<AppState>,
) -> Result<Json<CheckRemindersResponse>, AppError> {
    let emitted = reminder::run_due_check(&state).await?;
    Ok(Json(CheckRemindersResponse { emitted }))
}

pub async fn list_reminders(State(state): State<AppState>) -> Json<Vec<ReminderEvent>> {
    let feed = state.reminders.lock().await;
    Json(feed.clone())
}
