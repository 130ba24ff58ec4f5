//! Settings-related commands
//!
//! Notification preference, reminder time and display locale.

use crate::app::AppState;
use crate::error::Result;
use crate::locale::Locale;

// ===== Notifications =====

pub async fn notification_status(state: &AppState) -> String {
    let preference = state.notifications().await;

    state.locale.notification_status(
        preference.enabled,
        state.notifier.permission(),
        &preference.reminder_time_label(),
    )
}

/// Request permission and send the welcome notification when granted
pub async fn enable_notifications(state: &AppState) -> Result<String> {
    let permission = {
        let mut view = state.view.lock().await;
        view.notifications
            .enable(state.notifier.as_ref(), state.locale)?
    };

    Ok(state
        .locale
        .notifications_enable_result(permission)
        .to_string())
}

pub async fn disable_notifications(state: &AppState) -> String {
    state.view.lock().await.notifications.disable();
    state.locale.notifications_disabled().to_string()
}

pub async fn set_reminder_time(state: &AppState, time: &str) -> Result<String> {
    let time = state.settings_service.update_reminder_time(time).await?;

    let mut view = state.view.lock().await;
    view.notifications.reminder_time = time;

    Ok(state
        .locale
        .reminder_time_set(&view.notifications.reminder_time_label()))
}

// ===== General Settings =====

pub async fn show_settings(state: &AppState) -> Result<String> {
    let settings = state.settings_service.load().await?;
    Ok(serde_json::to_string_pretty(&settings)?)
}

/// Takes effect on the next run
pub async fn set_locale(state: &AppState, locale: Locale) -> Result<String> {
    state.settings_service.update_locale(locale).await?;
    Ok(locale.locale_set().to_string())
}
