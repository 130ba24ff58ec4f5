//! Daily challenge commands
//!
//! Show today's problem, edit notes, mark completion, list history.

use crate::app::AppState;
use crate::database::DailyRecord;
use crate::error::Result;
use crate::locale::Locale;
use chrono::NaiveDate;

/// Human-readable card for a record
pub fn render_record(record: &DailyRecord, locale: Locale) -> String {
    let problem = &record.problem;
    let tags = problem
        .tags
        .iter()
        .map(|tag| locale.tag_label(tag))
        .collect::<Vec<_>>()
        .join(" · ");

    format!(
        "[{}] #{} {}\nDate:   {}\nStatus: {}\nTags:   {}\nLink:   {}",
        locale.difficulty_label(problem.difficulty),
        problem.display_id,
        locale.problem_title(problem),
        record.date_key(),
        locale.status_label(record.status),
        tags,
        problem.practice_url(),
    )
}

/// Today's problem card, or the raw record as JSON
pub async fn show_today(state: &AppState, date: NaiveDate, json: bool) -> Result<String> {
    let record = state.open(date).await?;

    if json {
        return Ok(serde_json::to_string_pretty(&record)?);
    }

    Ok(render_record(&record, state.locale))
}

pub async fn show_notes(state: &AppState, date: NaiveDate) -> Result<String> {
    Ok(state.open(date).await?.notes)
}

pub async fn set_notes(state: &AppState, date: NaiveDate, notes: String) -> Result<String> {
    let record = state.daily_service.update_notes(date, notes).await?;
    let summary = state
        .locale
        .notes_saved(&record.date_key(), record.notes.lines().count());
    state.set_current(record).await;
    Ok(summary)
}

pub async fn complete(state: &AppState, date: NaiveDate) -> Result<String> {
    let record = state.open(date).await?;

    if record.is_completed() {
        return Ok(state.locale.already_completed_message().to_string());
    }

    let record = state.daily_service.mark_complete(record).await?;
    state.set_current(record).await;
    Ok(state.locale.completion_message().to_string())
}

pub async fn history(state: &AppState, limit: Option<i64>) -> Result<String> {
    let records = state.daily_service.history(limit).await?;
    let progress = state.daily_service.progress().await?;

    if records.is_empty() {
        return Ok(state.locale.no_history().to_string());
    }

    let mut lines: Vec<String> = records
        .iter()
        .map(|record| {
            format!(
                "{}  {}  {:<9}  #{} {}",
                record.date_key(),
                if record.is_completed() { "✔" } else { " " },
                state.locale.difficulty_label(record.problem.difficulty),
                record.problem.display_id,
                state.locale.problem_title(&record.problem)
            )
        })
        .collect();

    lines.push(String::new());
    lines.push(
        state
            .locale
            .progress_summary(progress.completed, progress.days),
    );

    Ok(lines.join("\n"))
}

/// Catalog listing; `*` marks the problem selected for `date`
pub fn list_problems(state: &AppState, date: NaiveDate) -> String {
    let catalog = state.daily_service.catalog();
    let today = catalog.index_for(date);

    catalog
        .problems()
        .iter()
        .enumerate()
        .map(|(index, problem)| {
            format!(
                "{} {:>2}. #{:<4} {:<9} {}",
                if index == today { "*" } else { " " },
                index,
                problem.display_id,
                state.locale.difficulty_label(problem.difficulty),
                state.locale.problem_title(problem)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
