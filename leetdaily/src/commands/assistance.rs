//! Assistance commands
//!
//! Hints, review and similar problems for the current record.

use crate::app::AppState;
use crate::error::Result;
use crate::services::AssistanceKind;
use chrono::NaiveDate;

/// Run one assistance request against the record for `date`
pub async fn ask(state: &AppState, date: NaiveDate, kind: AssistanceKind) -> Result<String> {
    let record = match state.current().await {
        Some(record) if record.date == date => record,
        _ => state.open(date).await?,
    };

    state.assistance_service.request(kind, &record).await
}
