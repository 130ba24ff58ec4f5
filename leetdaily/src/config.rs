//! Application configuration constants
//!
//! Central location for storage layout constants, defaults, and validation
//! boundaries used throughout the application.

// ===== Storage =====

/// Prefix of the per-date storage key (`leetcode_daily_2024-03-15`)
pub const STORAGE_KEY_PREFIX: &str = "leetcode_daily_";

/// Calendar date format used for record keys and display
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Schema version written with every daily record.
/// Rows carrying a newer version are rejected on read.
pub const RECORD_SCHEMA_VERSION: i64 = 1;

/// SQLite database file name inside the data directory
pub const DATABASE_FILE_NAME: &str = "leetdaily.db";

/// Settings file name inside the data directory
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Directory name under the platform data dir when no override is given
pub const APP_DIR_NAME: &str = "leetdaily";

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "LEETDAILY_DATA_DIR";

// ===== Practice Site =====

/// Problems are linked as `<base><slug>/`
pub const PRACTICE_SITE_BASE: &str = "https://leetcode.cn/problems/";

// ===== Notifications =====

/// Default reminder time of day (display only)
pub const DEFAULT_REMINDER_TIME: &str = "09:00";

/// Format of the reminder time setting
pub const REMINDER_TIME_FORMAT: &str = "%H:%M";

/// Environment variable that lets the user deny terminal notifications
pub const NOTIFICATIONS_ENV: &str = "LEETDAILY_NOTIFICATIONS";

// ===== Assistance Gateway =====

/// Default Gemini model used for all three assistance requests
pub const DEFAULT_ASSISTANT_MODEL: &str = "gemini-3-flash-preview";

/// Default Gemini API endpoint
pub const DEFAULT_ASSISTANT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Environment variables checked, in order, for the API key
pub const API_KEY_ENVS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];

/// Default HTTP timeout for a single assistance request, in seconds
pub const DEFAULT_ASSISTANT_TIMEOUT_SECS: u64 = 60;

/// Minimum assistance timeout in seconds
pub const MIN_ASSISTANT_TIMEOUT_SECS: u64 = 5;

/// Maximum assistance timeout in seconds (10 minutes)
pub const MAX_ASSISTANT_TIMEOUT_SECS: u64 = 600;

// ===== History =====

/// Default number of records listed by `history`
pub const DEFAULT_HISTORY_LIMIT: i64 = 14;
