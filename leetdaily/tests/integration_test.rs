//! Integration tests for leetdaily
//!
//! These tests verify end-to-end functionality including:
//! - The daily load flow across restarts
//! - Notes, completion and history through the command handlers
//! - Assistance fallbacks and settings persistence

use async_trait::async_trait;
use chrono::NaiveDate;
use leetdaily::app::{setup_with, AppState};
use leetdaily::commands;
use leetdaily::database::DailyStatus;
use leetdaily::error::{AppError, Result};
use leetdaily::locale::Locale;
use leetdaily::services::{
    AssistanceKind, AssistanceState, NotificationCapability, Permission, TextGenerator,
};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

struct Echo;

#[async_trait]
impl TextGenerator for Echo {
    async fn generate(&self, prompt: &str) -> Result<String> {
        Ok(format!("echo: {}", prompt.lines().next().unwrap_or_default()))
    }
}

struct Offline;

#[async_trait]
impl TextGenerator for Offline {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        Err(AppError::Assistance("network unreachable".to_string()))
    }
}

struct Capability {
    permission: Permission,
    shown: Mutex<Vec<String>>,
}

impl Capability {
    fn new(permission: Permission) -> Arc<Self> {
        Arc::new(Self {
            permission,
            shown: Mutex::new(Vec::new()),
        })
    }
}

impl NotificationCapability for Capability {
    fn permission(&self) -> Permission {
        self.permission
    }

    fn request_permission(&self) -> Permission {
        self.permission
    }

    fn notify(&self, _title: &str, body: &str) -> Result<()> {
        self.shown.lock().unwrap().push(body.to_string());
        Ok(())
    }
}

/// Helper to start the application against a data directory
async fn start(data_dir: &Path, generator: Arc<dyn TextGenerator>) -> AppState {
    setup_with(
        data_dir.to_path_buf(),
        Some(generator),
        Capability::new(Permission::Unsupported),
    )
    .await
    .unwrap()
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

#[tokio::test]
async fn test_record_survives_restart() {
    let temp = TempDir::new().unwrap();

    {
        let state = start(temp.path(), Arc::new(Echo)).await;
        let card = commands::show_today(&state, day(), false).await.unwrap();
        assert!(card.contains("#121 Best Time to Buy and Sell Stock"));

        commands::set_notes(&state, day(), "min so far, best diff".to_string())
            .await
            .unwrap();
    }

    {
        let state = start(temp.path(), Arc::new(Echo)).await;
        let notes = commands::show_notes(&state, day()).await.unwrap();
        assert_eq!(notes, "min so far, best diff");

        let record = state.current().await.unwrap();
        assert_eq!(record.problem.id, 121);
        assert_eq!(record.status, DailyStatus::Todo);
    }
}

#[tokio::test]
async fn test_today_json_matches_stored_record() {
    let temp = TempDir::new().unwrap();
    let state = start(temp.path(), Arc::new(Echo)).await;

    let json = commands::show_today(&state, day(), true).await.unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["date"], "2024-03-15");
    assert_eq!(value["status"], "todo");
    assert_eq!(value["problem"]["slug"], "best-time-to-buy-and-sell-stock");

    let stored = state.daily_service.get(day()).await.unwrap().unwrap();
    assert_eq!(serde_json::to_value(&stored).unwrap(), value);
}

#[tokio::test]
async fn test_complete_twice() {
    let temp = TempDir::new().unwrap();
    let state = start(temp.path(), Arc::new(Echo)).await;

    let first = commands::complete(&state, day()).await.unwrap();
    assert!(first.starts_with("Congratulations"));

    let second = commands::complete(&state, day()).await.unwrap();
    assert_eq!(second, "Today's challenge was already marked complete.");

    let stored = state.daily_service.get(day()).await.unwrap().unwrap();
    assert!(stored.is_completed());

    let history = commands::history(&state, None).await.unwrap();
    assert!(history.contains("2024-03-15  ✔"));
    assert!(history.contains("1 of 1 recorded days completed."));
}

#[tokio::test]
async fn test_assistance_uses_current_record() {
    let temp = TempDir::new().unwrap();
    let state = start(temp.path(), Arc::new(Echo)).await;

    let hints = commands::ask(&state, day(), AssistanceKind::Hints).await.unwrap();
    assert!(hints.starts_with("echo: Give 3 progressive hints"));
    assert!(hints.contains("Best Time to Buy and Sell Stock"));

    // Assistance output never reaches the stored record
    let stored = state.daily_service.get(day()).await.unwrap().unwrap();
    assert!(!stored.notes.contains("echo:"));
}

#[tokio::test]
async fn test_gateway_failure_returns_fallback() {
    let temp = TempDir::new().unwrap();
    let state = start(temp.path(), Arc::new(Offline)).await;

    let review = commands::ask(&state, day(), AssistanceKind::Review).await.unwrap();
    assert_eq!(
        review,
        "AI feedback is unavailable right now. Check your network connection or API key."
    );

    assert!(matches!(
        state.assistance_service.state(AssistanceKind::Review).await,
        AssistanceState::Failed(_)
    ));
}

#[tokio::test]
async fn test_locale_applies_after_restart() {
    let temp = TempDir::new().unwrap();

    {
        let state = start(temp.path(), Arc::new(Offline)).await;
        commands::set_locale(&state, Locale::Zh).await.unwrap();
    }

    let state = start(temp.path(), Arc::new(Offline)).await;
    assert_eq!(state.locale, Locale::Zh);

    let card = commands::show_today(&state, day(), false).await.unwrap();
    assert!(card.starts_with("[简单] #121 买卖股票的最佳时机"));

    let notes = commands::show_notes(&state, day()).await.unwrap();
    assert!(notes.contains("题目: 买卖股票的最佳时机"));

    let hints = commands::ask(&state, day(), AssistanceKind::Hints).await.unwrap();
    assert_eq!(hints, "无法获取提示。");

    let history = commands::history(&state, None).await.unwrap();
    assert!(history.ends_with("已记录 1 天，完成 0 天。"));
}

#[tokio::test]
async fn test_notifications_flow() {
    let temp = TempDir::new().unwrap();
    let capability = Capability::new(Permission::Granted);
    let state = setup_with(
        temp.path().to_path_buf(),
        Some(Arc::new(Echo)),
        capability.clone(),
    )
    .await
    .unwrap();

    commands::set_reminder_time(&state, "20:15").await.unwrap();
    let message = commands::enable_notifications(&state).await.unwrap();
    assert_eq!(message, "Notifications enabled.");

    let shown = capability.shown.lock().unwrap().clone();
    assert_eq!(shown.len(), 1);
    assert!(shown[0].contains("20:15"));

    let status = commands::notification_status(&state).await;
    assert!(status.contains("Notifications: on (permission: granted)"));
    assert!(status.contains("Reminder time: 20:15"));

    commands::disable_notifications(&state).await;
    assert!(!state.notifications().await.enabled);
}

#[tokio::test]
async fn test_problem_listing_marks_today() {
    let temp = TempDir::new().unwrap();
    let state = start(temp.path(), Arc::new(Echo)).await;

    let listing = commands::list_problems(&state, day());
    let marked: Vec<&str> = listing.lines().filter(|l| l.starts_with('*')).collect();

    assert_eq!(listing.lines().count(), 19);
    assert_eq!(marked.len(), 1);
    assert!(marked[0].contains("Best Time to Buy and Sell Stock"));
}
