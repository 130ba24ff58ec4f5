//! Notification capability
//!
//! The host decides whether alerts may be shown. The core only sees a
//! `Permission` and never talks to a concrete host API directly.

use crate::config::{NOTIFICATIONS_ENV, REMINDER_TIME_FORMAT};
use crate::error::Result;
use crate::locale::Locale;
use chrono::NaiveTime;
use serde::Serialize;
use std::io::IsTerminal;

/// Host permission to show notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Granted,
    Denied,
    Unsupported,
}

/// Host notification API
pub trait NotificationCapability: Send + Sync {
    /// Current permission, without prompting
    fn permission(&self) -> Permission;

    /// Ask the host for permission
    fn request_permission(&self) -> Permission;

    /// Show a notification; only called after permission is granted
    fn notify(&self, title: &str, body: &str) -> Result<()>;
}

/// Notifications on the controlling terminal.
///
/// Denied when `LEETDAILY_NOTIFICATIONS` is `off`/`denied`, unsupported when
/// stderr is not a terminal.
#[derive(Debug, Clone, Default)]
pub struct TerminalNotifier;

impl TerminalNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl NotificationCapability for TerminalNotifier {
    fn permission(&self) -> Permission {
        match std::env::var(NOTIFICATIONS_ENV).as_deref() {
            Ok("off") | Ok("denied") | Ok("0") => return Permission::Denied,
            _ => {}
        }

        if std::io::stderr().is_terminal() {
            Permission::Granted
        } else {
            Permission::Unsupported
        }
    }

    fn request_permission(&self) -> Permission {
        // A terminal cannot prompt; the environment is the answer.
        self.permission()
    }

    fn notify(&self, title: &str, body: &str) -> Result<()> {
        eprintln!("\x07🔔 {}: {}", title, body);
        Ok(())
    }
}

/// Transient reminder preference.
///
/// `enabled` mirrors the host permission and is never persisted on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationPreference {
    pub enabled: bool,
    pub reminder_time: NaiveTime,
}

impl NotificationPreference {
    pub fn from_capability(capability: &dyn NotificationCapability, reminder_time: NaiveTime) -> Self {
        Self {
            enabled: capability.permission() == Permission::Granted,
            reminder_time,
        }
    }

    /// `HH:MM`
    pub fn reminder_time_label(&self) -> String {
        self.reminder_time.format(REMINDER_TIME_FORMAT).to_string()
    }

    /// Ask for permission and, once granted, confirm with a welcome notification
    pub fn enable(
        &mut self,
        capability: &dyn NotificationCapability,
        locale: Locale,
    ) -> Result<Permission> {
        let permission = capability.request_permission();

        if permission == Permission::Granted {
            self.enabled = true;
            capability.notify(
                locale.reminder_title(),
                &locale.reminder_enabled_body(&self.reminder_time_label()),
            )?;
            tracing::info!("Notifications enabled for {}", self.reminder_time_label());
        } else {
            tracing::info!("Notification permission not granted: {:?}", permission);
        }

        Ok(permission)
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }
}
