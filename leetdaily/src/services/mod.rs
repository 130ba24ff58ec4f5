//! Services module
//!
//! Business logic services that coordinate between commands and repository.

pub mod assistance;
pub mod daily;
pub mod gemini;
pub mod notifications;
pub mod settings;

pub use assistance::{
    AssistanceKind, AssistancePanel, AssistanceService, AssistanceState, TextGenerator,
};
pub use daily::{DailyService, ProgressSummary};
pub use gemini::GeminiClient;
pub use notifications::{
    NotificationCapability, NotificationPreference, Permission, TerminalNotifier,
};
pub use settings::{AppSettings, AssistantSettings, SettingsService};
