//! Daily record service
//!
//! Ties the catalog selection to the record store: the first access for a
//! date creates and persists its record, every later access reads it back.
//! Completion is a one-way ratchet.

use crate::catalog::Catalog;
use crate::config::{DATE_FORMAT, DEFAULT_HISTORY_LIMIT};
use crate::database::{DailyRecord, DailyStatus, Problem, Repository};
use crate::error::{AppError, Result};
use crate::locale::Locale;
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;

/// Totals over every stored record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressSummary {
    pub days: i64,
    pub completed: i64,
}

/// Service for managing daily records
#[derive(Clone)]
pub struct DailyService {
    repo: Repository,
    catalog: Arc<Catalog>,
    locale: Locale,
}

impl DailyService {
    pub fn new(repo: Repository, catalog: Arc<Catalog>, locale: Locale) -> Self {
        Self {
            repo,
            catalog,
            locale,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Problem of the day for `date`
    pub fn select(&self, date: NaiveDate) -> &Problem {
        self.catalog.select(date)
    }

    /// Stored record for `date`; `None` on the first visit of the day
    pub async fn get(&self, date: NaiveDate) -> Result<Option<DailyRecord>> {
        self.repo.get_daily_record(date).await
    }

    /// Persist a fresh `todo` record unless one exists, then return the stored record
    pub async fn create_if_absent(&self, date: NaiveDate, problem: Problem) -> Result<DailyRecord> {
        let date_key = date.format(DATE_FORMAT).to_string();
        let notes = self
            .locale
            .notes_template(self.locale.problem_title(&problem), &date_key);
        let record = DailyRecord::new(date, problem, notes);

        if self.repo.insert_daily_record_if_absent(&record).await? {
            tracing::info!("New daily record for {}: {}", date_key, record.problem.title);
            return Ok(record);
        }

        match self.repo.get_daily_record(date).await? {
            Some(existing) => Ok(existing),
            None => Err(AppError::Generic(format!(
                "Daily record for {} vanished after insert",
                date_key
            ))),
        }
    }

    /// Whole-record overwrite
    pub async fn save(&self, record: &DailyRecord) -> Result<()> {
        self.repo.save_daily_record(record).await
    }

    /// Startup flow: stored record if present, otherwise select and create
    pub async fn load_or_create(&self, date: NaiveDate) -> Result<DailyRecord> {
        if let Some(record) = self.get(date).await? {
            tracing::debug!("Loaded daily record for {}", record.date_key());
            return Ok(record);
        }

        let problem = self.select(date).clone();
        self.create_if_absent(date, problem).await
    }

    /// Replace the notes of the record for `date`
    pub async fn update_notes(&self, date: NaiveDate, notes: String) -> Result<DailyRecord> {
        let mut record = self.load_or_create(date).await?;
        record.notes = notes;
        self.save(&record).await?;

        tracing::debug!("Notes updated for {}", record.date_key());
        Ok(record)
    }

    /// Set `completed` and persist. Idempotent.
    pub async fn mark_complete(&self, mut record: DailyRecord) -> Result<DailyRecord> {
        record.status = DailyStatus::Completed;
        self.save(&record).await?;

        tracing::info!("Marked {} complete", record.date_key());
        Ok(record)
    }

    /// Stored records, newest first
    pub async fn history(&self, limit: Option<i64>) -> Result<Vec<DailyRecord>> {
        let limit = limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
        if limit < 1 {
            return Err(AppError::InvalidSetting(format!(
                "history limit must be at least 1, got {}",
                limit
            )));
        }

        self.repo.list_daily_records(limit).await
    }

    pub async fn progress(&self) -> Result<ProgressSummary> {
        let (days, completed) = self.repo.count_daily_records().await?;
        Ok(ProgressSummary { days, completed })
    }
}
