//! Settings service
//!
//! Manages application settings persistence using JSON file storage.

use crate::config::{
    DEFAULT_ASSISTANT_ENDPOINT, DEFAULT_ASSISTANT_MODEL, DEFAULT_ASSISTANT_TIMEOUT_SECS,
    DEFAULT_REMINDER_TIME, MAX_ASSISTANT_TIMEOUT_SECS, MIN_ASSISTANT_TIMEOUT_SECS,
    REMINDER_TIME_FORMAT, SETTINGS_FILE_NAME,
};
use crate::error::{AppError, Result};
use crate::locale::Locale;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;

/// Reminder notification settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// Time of day shown with the reminder (`HH:MM`); not scheduled
    #[serde(default = "default_reminder_time")]
    pub reminder_time: String,
}

fn default_reminder_time() -> String {
    DEFAULT_REMINDER_TIME.to_string()
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            reminder_time: default_reminder_time(),
        }
    }
}

/// Display settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default)]
    pub locale: Locale,
}

/// Assistance gateway settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantSettings {
    #[serde(default = "default_assistant_model")]
    pub model: String,
    #[serde(default = "default_assistant_endpoint")]
    pub endpoint: String,
    /// Per-request HTTP timeout in seconds
    #[serde(default = "default_assistant_timeout")]
    pub timeout_secs: u64,
}

fn default_assistant_model() -> String {
    DEFAULT_ASSISTANT_MODEL.to_string()
}

fn default_assistant_endpoint() -> String {
    DEFAULT_ASSISTANT_ENDPOINT.to_string()
}

fn default_assistant_timeout() -> u64 {
    DEFAULT_ASSISTANT_TIMEOUT_SECS
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            model: default_assistant_model(),
            endpoint: default_assistant_endpoint(),
            timeout_secs: default_assistant_timeout(),
        }
    }
}

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub notifications: NotificationSettings,
    #[serde(default)]
    pub display: DisplaySettings,
    #[serde(default)]
    pub assistant: AssistantSettings,
}

/// Parse a `HH:MM` reminder time
pub fn parse_reminder_time(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), REMINDER_TIME_FORMAT).map_err(|_| {
        AppError::InvalidSetting(format!(
            "reminder time must be HH:MM (24-hour), got '{}'",
            value
        ))
    })
}

impl AppSettings {
    /// Check every field against its allowed range
    pub fn validate(&self) -> Result<()> {
        parse_reminder_time(&self.notifications.reminder_time)?;

        if self.assistant.model.trim().is_empty() {
            return Err(AppError::InvalidSetting(
                "assistant model must not be empty".to_string(),
            ));
        }

        if self.assistant.endpoint.trim().is_empty() {
            return Err(AppError::InvalidSetting(
                "assistant endpoint must not be empty".to_string(),
            ));
        }

        if !(MIN_ASSISTANT_TIMEOUT_SECS..=MAX_ASSISTANT_TIMEOUT_SECS)
            .contains(&self.assistant.timeout_secs)
        {
            return Err(AppError::InvalidSetting(format!(
                "assistant timeout must be between {} and {} seconds",
                MIN_ASSISTANT_TIMEOUT_SECS, MAX_ASSISTANT_TIMEOUT_SECS
            )));
        }

        Ok(())
    }
}

/// Service for managing application settings
#[derive(Clone)]
pub struct SettingsService {
    settings_path: PathBuf,
}

impl SettingsService {
    pub fn new(app_data_dir: PathBuf) -> Self {
        Self {
            settings_path: app_data_dir.join(SETTINGS_FILE_NAME),
        }
    }

    /// Load settings from disk or create default if not exists
    pub async fn load(&self) -> Result<AppSettings> {
        if !fs::try_exists(&self.settings_path).await? {
            tracing::info!("Settings file not found, creating default settings");
            let default = AppSettings::default();
            self.save(&default).await?;
            return Ok(default);
        }

        let content = fs::read_to_string(&self.settings_path).await?;
        let settings: AppSettings = serde_json::from_str(&content)
            .map_err(|e| AppError::Generic(format!("Failed to parse settings: {}", e)))?;

        settings.validate()?;

        Ok(settings)
    }

    /// Validate and save settings to disk
    pub async fn save(&self, settings: &AppSettings) -> Result<()> {
        settings.validate()?;

        let content = serde_json::to_string_pretty(settings)?;
        fs::write(&self.settings_path, content).await?;
        tracing::debug!("Settings saved to {:?}", self.settings_path);

        Ok(())
    }

    /// Get notification settings
    pub async fn get_notifications(&self) -> Result<NotificationSettings> {
        Ok(self.load().await?.notifications)
    }

    /// Update the reminder time (`HH:MM`)
    pub async fn update_reminder_time(&self, reminder_time: &str) -> Result<NaiveTime> {
        let time = parse_reminder_time(reminder_time)?;

        let mut settings = self.load().await?;
        settings.notifications.reminder_time = time.format(REMINDER_TIME_FORMAT).to_string();
        self.save(&settings).await?;

        Ok(time)
    }

    /// Get display settings
    pub async fn get_display(&self) -> Result<DisplaySettings> {
        Ok(self.load().await?.display)
    }

    /// Update the display locale
    pub async fn update_locale(&self, locale: Locale) -> Result<()> {
        let mut settings = self.load().await?;
        settings.display.locale = locale;
        self.save(&settings).await
    }

    /// Get assistant settings
    pub async fn get_assistant(&self) -> Result<AssistantSettings> {
        Ok(self.load().await?.assistant)
    }

    /// Update assistant settings
    pub async fn update_assistant(&self, assistant: AssistantSettings) -> Result<()> {
        let mut settings = self.load().await?;
        settings.assistant = assistant;
        self.save(&settings).await
    }
}
