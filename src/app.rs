use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/tasks", get(handlers::list_tasks).post(handlers::add_task))
        .route("/api/tasks/clear-completed", post(handlers::clear_completed))
        .route("/api/tasks/:id", put(handlers::edit_task).delete(handlers::delete_task))
        .route("/api/tasks/:id/toggle", post(handlers::toggle_task))
        .route("/api/summary", get(handlers::get_summary))
        .route("/api/settings", get(handlers::get_settings))
        .route("/api/settings/theme", post(handlers::toggle_theme))
        .route("/api/settings/notifications", post(handlers::toggle_notifications))
        .route("/api/reminders", get(handlers::list_reminders))
        .route("/api/reminders/check", post(handlers::check_reminders))
        .with_state(state)
}
