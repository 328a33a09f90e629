use crate::models::{PlannerData, ReminderEvent};
use crate::notify::NotificationHost;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_dir: PathBuf,
    pub data: Arc<Mutex<PlannerData>>,
    pub host: Arc<dyn NotificationHost>,
    /// Recent reminder events, newest last, for the page to display.
    pub reminders: Arc<Mutex<Vec<ReminderEvent>>>,
}

impl AppState {
    pub fn new(data_dir: PathBuf, data: PlannerData, host: Arc<dyn NotificationHost>) -> Self {
        Self {
            data_dir,
            data: Arc::new(Mutex::new(data)),
            host,
            reminders: Arc::new(Mutex::new(Vec::new())),
        }
    }
}
