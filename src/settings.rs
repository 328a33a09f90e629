use crate::notify::{NotificationHost, Permission};

/// Outcome of a notification-toggle negotiation with the host capability.
#[derive(Debug, PartialEq, Eq)]
pub enum NotifyToggle {
    /// Reminders were on; they are now off.
    Disabled,
    /// Permission is granted; reminders are now on.
    Enabled,
    /// Permission was refused or left undecided; nothing changed.
    Refused(Permission),
}

/// Three-way negotiation: turning off is unconditional; turning on requires
/// permission already granted or newly granted via a request. The caller is
/// responsible for persisting the settings change the outcome implies.
pub fn negotiate_toggle(currently_enabled: bool, host: &dyn NotificationHost) -> NotifyToggle {
    if currently_enabled {
        return NotifyToggle::Disabled;
    }

    let mut permission = host.permission();
    if permission == Permission::Default {
        permission = host.request_permission();
    }

    match permission {
        Permission::Granted => NotifyToggle::Enabled,
        other => NotifyToggle::Refused(other),
    }
}
