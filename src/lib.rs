pub mod app;
pub mod errors;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod notify;
pub mod reminder;
pub mod settings;
pub mod state;
pub mod stats;
pub mod storage;
pub mod tasks;
pub mod ui;

pub use app::router;
pub use notify::EnvHost;
pub use state::AppState;
pub use storage::{load_store, resolve_data_dir};
