use serde::Serialize;
use std::env;
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Default,
    Granted,
    Denied,
}

impl Permission {
    fn from_str(value: &str) -> Option<Permission> {
        match value {
            "default" => Some(Permission::Default),
            "granted" => Some(Permission::Granted),
            "denied" => Some(Permission::Denied),
            _ => None,
        }
    }

    fn as_u8(self) -> u8 {
        match self {
            Permission::Default => 0,
            Permission::Granted => 1,
            Permission::Denied => 2,
        }
    }

    fn from_u8(value: u8) -> Permission {
        match value {
            1 => Permission::Granted,
            2 => Permission::Denied,
            _ => Permission::Default,
        }
    }
}

#[derive(Debug)]
pub struct NotifyError(pub String);

impl fmt::Display for NotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "notification dispatch failed: {}", self.0)
    }
}

impl std::error::Error for NotifyError {}

/// The host notification capability: permission state lives outside the
/// planner, so it is injected rather than read from ambient globals.
pub trait NotificationHost: Send + Sync {
    fn permission(&self) -> Permission;
    /// Resolves a `default` permission to granted or denied and remembers
    /// the outcome. Any already-decided permission is returned unchanged.
    fn request_permission(&self) -> Permission;
    fn notify(&self, title: &str, body: &str) -> Result<(), NotifyError>;
}

/// Environment-backed host used by the binary. `APP_NOTIFY_PERMISSION` seeds
/// the permission state and `APP_NOTIFY_GRANT` decides how a request
/// resolves; notifications are delivered as log lines.
pub struct EnvHost {
    permission: AtomicU8,
    grant: Permission,
}

impl EnvHost {
    pub fn from_env() -> EnvHost {
        let permission = env::var("APP_NOTIFY_PERMISSION")
            .ok()
            .and_then(|value| Permission::from_str(&value))
            .unwrap_or(Permission::Default);
        let grant = match env::var("APP_NOTIFY_GRANT").ok().as_deref() {
            Some("denied") => Permission::Denied,
            _ => Permission::Granted,
        };
        EnvHost {
            permission: AtomicU8::new(permission.as_u8()),
            grant,
        }
    }
}

impl NotificationHost for EnvHost {
    fn permission(&self) -> Permission {
        Permission::from_u8(self.permission.load(Ordering::SeqCst))
    }

    fn request_permission(&self) -> Permission {
        let current = self.permission();
        if current != Permission::Default {
            return current;
        }
        self.permission.store(self.grant.as_u8(), Ordering::SeqCst);
        self.grant
    }

    fn notify(&self, title: &str, body: &str) -> Result<(), NotifyError> {
        info!(title, body, "notification dispatched");
        Ok(())
    }
}
