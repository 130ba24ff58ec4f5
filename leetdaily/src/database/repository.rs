//! Repository layer for database operations
//!
//! Daily records are read by date and written whole. There is no
//! partial-field patching; `save_daily_record` is last-write-wins.

use super::models::*;
use crate::config::{DATE_FORMAT, RECORD_SCHEMA_VERSION};
use crate::error::Result;
use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;

/// Repository for database operations
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get the record stored for a date, if any
    pub async fn get_daily_record(&self, date: NaiveDate) -> Result<Option<DailyRecord>> {
        let row = sqlx::query_as::<_, DailyRow>(
            r#"
            SELECT * FROM daily_records WHERE storage_key = ?
            "#,
        )
        .bind(storage_key(date))
        .fetch_optional(&self.pool)
        .await?;

        row.map(DailyRow::into_record).transpose()
    }

    /// Insert a record unless one already exists for its date.
    ///
    /// Returns `true` when the row was written.
    pub async fn insert_daily_record_if_absent(&self, record: &DailyRecord) -> Result<bool> {
        let payload = serde_json::to_string(record)?;
        let now = Utc::now();

        let rows = sqlx::query(
            r#"
            INSERT INTO daily_records
                (storage_key, record_date, payload, schema_version, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT(storage_key) DO NOTHING
            "#,
        )
        .bind(storage_key(record.date))
        .bind(record.date.format(DATE_FORMAT).to_string())
        .bind(&payload)
        .bind(RECORD_SCHEMA_VERSION)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if rows == 1 {
            tracing::debug!("Created daily record: {}", record.date_key());
        }

        Ok(rows == 1)
    }

    /// Overwrite the whole record for its date
    pub async fn save_daily_record(&self, record: &DailyRecord) -> Result<()> {
        let payload = serde_json::to_string(record)?;
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO daily_records
                (storage_key, record_date, payload, schema_version, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT(storage_key) DO UPDATE SET
                payload = excluded.payload,
                schema_version = excluded.schema_version,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(storage_key(record.date))
        .bind(record.date.format(DATE_FORMAT).to_string())
        .bind(&payload)
        .bind(RECORD_SCHEMA_VERSION)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        tracing::debug!("Saved daily record: {}", record.date_key());
        Ok(())
    }

    /// List stored records, newest date first
    pub async fn list_daily_records(&self, limit: i64) -> Result<Vec<DailyRecord>> {
        let rows = sqlx::query_as::<_, DailyRow>(
            r#"
            SELECT * FROM daily_records
            ORDER BY record_date DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(DailyRow::into_record).collect()
    }

    /// Count stored records by status.
    ///
    /// Every row passes the same schema check as `get_daily_record`.
    pub async fn count_daily_records(&self) -> Result<(i64, i64)> {
        let rows = sqlx::query_as::<_, DailyRow>("SELECT * FROM daily_records")
            .fetch_all(&self.pool)
            .await?;

        let mut total = 0;
        let mut completed = 0;
        for row in rows {
            total += 1;
            if row.into_record()?.is_completed() {
                completed += 1;
            }
        }

        Ok((total, completed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::create_pool;
    use crate::error::AppError;
    use tempfile::TempDir;

    async fn create_test_repo() -> (Repository, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let pool = create_pool(&temp_dir.path().join("test.db")).await.unwrap();
        (Repository::new(pool), temp_dir)
    }

    fn record_for(date: NaiveDate, title: &str) -> DailyRecord {
        DailyRecord::new(
            date,
            Problem {
                id: 20,
                display_id: "20".to_string(),
                title: title.to_string(),
                title_zh: None,
                slug: "valid-parentheses".to_string(),
                difficulty: Difficulty::Easy,
                tags: vec!["Stack".to_string(), "String".to_string()],
            },
            "// notes".to_string(),
        )
    }

    #[tokio::test]
    async fn test_missing_record_is_none() {
        let (repo, _temp) = create_test_repo().await;
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        assert!(repo.get_daily_record(date).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_if_absent_keeps_first_record() {
        let (repo, _temp) = create_test_repo().await;
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        assert!(repo
            .insert_daily_record_if_absent(&record_for(date, "First"))
            .await
            .unwrap());
        assert!(!repo
            .insert_daily_record_if_absent(&record_for(date, "Second"))
            .await
            .unwrap());

        let stored = repo.get_daily_record(date).await.unwrap().unwrap();
        assert_eq!(stored.problem.title, "First");
    }

    #[tokio::test]
    async fn test_save_overwrites_whole_record() {
        let (repo, _temp) = create_test_repo().await;
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        repo.save_daily_record(&record_for(date, "First")).await.unwrap();

        let mut updated = record_for(date, "First");
        updated.notes = "fn solution() {}".to_string();
        updated.status = DailyStatus::Completed;
        repo.save_daily_record(&updated).await.unwrap();

        let stored = repo.get_daily_record(date).await.unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn test_list_and_count_records() {
        let (repo, _temp) = create_test_repo().await;

        for day in 1..=3 {
            let date = NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
            let mut record = record_for(date, "Valid Parentheses");
            if day == 2 {
                record.status = DailyStatus::Completed;
            }
            repo.save_daily_record(&record).await.unwrap();
        }

        let records = repo.list_daily_records(2).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date_key(), "2024-01-03");
        assert_eq!(records[1].date_key(), "2024-01-02");

        assert_eq!(repo.count_daily_records().await.unwrap(), (3, 1));
    }

    #[tokio::test]
    async fn test_newer_schema_row_rejected_everywhere() {
        let (repo, _temp) = create_test_repo().await;
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let mut record = record_for(date, "Valid Parentheses");
        record.status = DailyStatus::Completed;
        repo.save_daily_record(&record).await.unwrap();

        sqlx::query("UPDATE daily_records SET schema_version = ?")
            .bind(RECORD_SCHEMA_VERSION + 1)
            .execute(&repo.pool)
            .await
            .unwrap();

        assert!(matches!(
            repo.get_daily_record(date).await,
            Err(AppError::UnsupportedSchema { .. })
        ));
        assert!(matches!(
            repo.list_daily_records(10).await,
            Err(AppError::UnsupportedSchema { .. })
        ));
        assert!(matches!(
            repo.count_daily_records().await,
            Err(AppError::UnsupportedSchema { .. })
        ));
    }
}
