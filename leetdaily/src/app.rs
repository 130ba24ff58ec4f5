//! Application state and initialization
//!
//! All services are initialized here and made available through AppState.
//! The view state (current record, notification preference) is explicit and
//! shared through the state rather than held in globals.

use crate::catalog::Catalog;
use crate::config::{APP_DIR_NAME, DATABASE_FILE_NAME, DATA_DIR_ENV};
use crate::database::{create_pool, DailyRecord, Repository};
use crate::error::{AppError, Result};
use crate::locale::Locale;
use crate::services::gemini::api_key_from_env;
use crate::services::settings::parse_reminder_time;
use crate::services::{
    AssistanceService, DailyService, GeminiClient, NotificationCapability, NotificationPreference,
    SettingsService, TerminalNotifier, TextGenerator,
};
use chrono::NaiveDate;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Transient, non-persisted view state
#[derive(Debug, Clone)]
pub struct ViewState {
    pub current: Option<DailyRecord>,
    pub notifications: NotificationPreference,
}

/// Central application state holding all services
#[derive(Clone)]
pub struct AppState {
    pub data_dir: PathBuf,
    pub locale: Locale,
    pub daily_service: DailyService,
    pub settings_service: SettingsService,
    pub assistance_service: AssistanceService,
    pub notifier: Arc<dyn NotificationCapability>,
    pub view: Arc<Mutex<ViewState>>,
}

impl AppState {
    /// Load (or create) the record for `date` and make it current
    pub async fn open(&self, date: NaiveDate) -> Result<DailyRecord> {
        let record = self.daily_service.load_or_create(date).await?;
        self.view.lock().await.current = Some(record.clone());
        Ok(record)
    }

    pub async fn current(&self) -> Option<DailyRecord> {
        self.view.lock().await.current.clone()
    }

    pub async fn set_current(&self, record: DailyRecord) {
        self.view.lock().await.current = Some(record);
    }

    pub async fn notifications(&self) -> NotificationPreference {
        self.view.lock().await.notifications.clone()
    }
}

/// Data directory: explicit override, then `LEETDAILY_DATA_DIR`, then the platform data dir
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }

    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or_else(|| AppError::Generic("Failed to determine the user data directory".to_string()))
}

/// Application setup with the production gateway and terminal notifications
pub async fn setup(data_dir: PathBuf) -> Result<AppState> {
    setup_with(data_dir, None, Arc::new(TerminalNotifier::new())).await
}

/// Application setup with injectable collaborators.
///
/// When `generator` is `None` a Gemini client is built from the assistant settings.
pub async fn setup_with(
    data_dir: PathBuf,
    generator: Option<Arc<dyn TextGenerator>>,
    notifier: Arc<dyn NotificationCapability>,
) -> Result<AppState> {
    tracing::info!("Initializing application");
    tracing::info!("App data directory: {:?}", data_dir);

    std::fs::create_dir_all(&data_dir)?;

    let settings_service = SettingsService::new(data_dir.clone());
    let settings = settings_service.load().await?;
    let locale = settings.display.locale;

    let pool = create_pool(&data_dir.join(DATABASE_FILE_NAME)).await?;
    let daily_service = DailyService::new(Repository::new(pool), Arc::new(Catalog::builtin()), locale);

    let generator: Arc<dyn TextGenerator> = match generator {
        Some(generator) => generator,
        None => Arc::new(GeminiClient::new(&settings.assistant, api_key_from_env())?),
    };
    let assistance_service = AssistanceService::new(generator, locale);

    let reminder_time = parse_reminder_time(&settings.notifications.reminder_time)?;
    let notifications = NotificationPreference::from_capability(notifier.as_ref(), reminder_time);

    tracing::info!("Application initialized successfully");

    Ok(AppState {
        data_dir,
        locale,
        daily_service,
        settings_service,
        assistance_service,
        notifier,
        view: Arc::new(Mutex::new(ViewState {
            current: None,
            notifications,
        })),
    })
}
