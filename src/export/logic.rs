use crate::core::filter::{FilterCriteria, filter_refs};
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{HistoryExport, TimeLogExport};
use crate::models::{HistoryEntry, TimeLogEntry};
use crate::ui::messages::warning;
use serde::Serialize;
use std::path::Path;

/// High-level export of filtered history and time logs.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the history entries matching `criteria`. Returns the number of
    /// rows written; nothing is written when none match.
    pub fn history(
        entries: &[HistoryEntry],
        criteria: &FilterCriteria,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let rows: Vec<HistoryExport> = filter_refs(entries, criteria)
            .into_iter()
            .map(HistoryExport::from)
            .collect();
        write_rows("History", &rows, format, file, force)
    }

    pub fn time_logs(
        entries: &[TimeLogEntry],
        criteria: &FilterCriteria,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let rows: Vec<TimeLogExport> = filter_refs(entries, criteria)
            .into_iter()
            .map(TimeLogExport::from)
            .collect();
        write_rows("Time log", &rows, format, file, force)
    }
}

fn write_rows<T: Serialize>(
    label: &str,
    rows: &[T],
    format: ExportFormat,
    file: &str,
    force: bool,
) -> AppResult<usize> {
    if rows.is_empty() {
        warning(format!("No {} rows match the selected filters.", label.to_lowercase()));
        return Ok(0);
    }

    let path = Path::new(file);
    ensure_writable(path, force)?;

    match format {
        ExportFormat::Csv => export_csv(label, rows, path)?,
        ExportFormat::Json => export_json(label, rows, path)?,
    }

    Ok(rows.len())
}
