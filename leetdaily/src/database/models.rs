//! Database models
//!
//! The catalog `Problem`, the persisted `DailyRecord`, and the raw row
//! it is stored in. Records are serialized to JSON in the `payload` column.

use crate::config::{DATE_FORMAT, PRACTICE_SITE_BASE, RECORD_SCHEMA_VERSION, STORAGE_KEY_PREFIX};
use crate::error::{AppError, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// Problem difficulty as published by the practice site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(s)
    }
}

/// A catalog problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub id: u32,
    /// Identifier shown to the user (e.g. "42")
    pub display_id: String,
    pub title: String,
    /// Simplified Chinese title; absent for problems outside the built-in catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_zh: Option<String>,
    /// URL-safe identifier on the practice site
    pub slug: String,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
}

impl Problem {
    /// Link to the problem on the practice site
    pub fn practice_url(&self) -> String {
        format!("{}{}/", PRACTICE_SITE_BASE, self.slug)
    }
}

/// Completion status of a daily record. Only moves from `Todo` to `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DailyStatus {
    #[default]
    Todo,
    Completed,
}

impl fmt::Display for DailyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DailyStatus::Todo => f.write_str("todo"),
            DailyStatus::Completed => f.write_str("completed"),
        }
    }
}

/// Per-date bundle of the selected problem, status and notes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    /// Embedded copy; later catalog changes never touch stored records
    pub problem: Problem,
    pub status: DailyStatus,
    pub notes: String,
}

impl DailyRecord {
    pub fn new(date: NaiveDate, problem: Problem, notes: String) -> Self {
        Self {
            date,
            problem,
            status: DailyStatus::Todo,
            notes,
        }
    }

    /// `YYYY-MM-DD`
    pub fn date_key(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    pub fn is_completed(&self) -> bool {
        self.status == DailyStatus::Completed
    }
}

/// Storage key for a calendar date
pub fn storage_key(date: NaiveDate) -> String {
    format!("{}{}", STORAGE_KEY_PREFIX, date.format(DATE_FORMAT))
}

/// Raw `daily_records` row
#[derive(Debug, Clone, FromRow)]
pub struct DailyRow {
    pub storage_key: String,
    pub record_date: String,
    /// JSON-encoded `DailyRecord`
    pub payload: String,
    pub schema_version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DailyRow {
    /// Decode the payload, refusing rows written by a newer schema
    pub fn into_record(self) -> Result<DailyRecord> {
        if self.schema_version > RECORD_SCHEMA_VERSION {
            return Err(AppError::UnsupportedSchema {
                date: self.record_date,
                version: self.schema_version,
            });
        }

        Ok(serde_json::from_str(&self.payload)?)
    }
}
