use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Pretty-printed JSON array.
pub(crate) fn export_json<T: Serialize>(label: &str, rows: &[T], path: &Path) -> AppResult<()> {
    info(format!("Exporting {label} to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success(label, rows.len(), path);
    Ok(())
}

/// CSV with a header row taken from the field names.
pub(crate) fn export_csv<T: Serialize>(label: &str, rows: &[T], path: &Path) -> AppResult<()> {
    info(format!("Exporting {label} to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for row in rows {
        wtr.serialize(row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    notify_export_success(label, rows.len(), path);
    Ok(())
}
