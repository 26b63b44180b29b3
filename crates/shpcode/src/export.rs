//! CSV export of a generated batch.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::batch::{Batch, BatchItem};
use crate::error::ExportError;

/// Column headers, in output order.
pub const CSV_HEADER: [&str; 4] = ["Código Gerado", "Sufixo", "Conta", "Código Real"];

/// Renders rows as CSV: header first, lines joined by `\n`, no trailing
/// newline. Missing codes render as empty cells.
pub fn render_csv(items: &[BatchItem]) -> String {
    let mut lines = Vec::with_capacity(items.len() + 1);
    lines.push(join_row(CSV_HEADER.iter().copied()));
    for item in items {
        let code = item
            .generated_code
            .as_ref()
            .map(|c| c.as_str())
            .unwrap_or_default();
        let category = item.category.to_string();
        lines.push(join_row([
            code,
            category.as_str(),
            item.account.as_str(),
            item.real_tracking_code.as_str(),
        ]));
    }
    lines.join("\n")
}

fn join_row<'a>(fields: impl IntoIterator<Item = &'a str>) -> String {
    fields
        .into_iter()
        .map(escape_field)
        .collect::<Vec<_>>()
        .join(",")
}

/// Quotes a field only when it contains a separator, quote or line break.
fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// `shp-express-<unix millis>.csv`
pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!("shp-express-{}.csv", now.timestamp_millis())
}

/// Writes the batch as CSV into `directory` and returns the file path.
pub fn write_batch_csv(
    directory: &Path,
    batch: &Batch,
    now: DateTime<Utc>,
) -> Result<PathBuf, ExportError> {
    if !batch.is_generated() {
        return Err(ExportError::NotGenerated);
    }

    std::fs::create_dir_all(directory).map_err(|e| ExportError::CreateDirectory {
        path: directory.to_path_buf(),
        source: e,
    })?;

    let path = directory.join(export_file_name(now));
    std::fs::write(&path, render_csv(batch.items())).map_err(|e| ExportError::WriteFile {
        path: path.clone(),
        source: e,
    })?;

    log::info!("Exported {} rows to {}", batch.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::batch::BatchRow;
    use crate::code::CodeGenerator;
    use crate::db::Database;

    fn generated_batch(rows: &[&str]) -> Batch {
        let db = Database::open_in_memory().unwrap();
        let mut batch = Batch::from_rows(
            rows.iter()
                .map(|r| r.parse::<BatchRow>().unwrap())
                .collect(),
        )
        .unwrap();
        let mut serial = 0u64;
        let mut generator = CodeGenerator::new(move || {
            serial += 1;
            serial
        });
        batch.generate(&db, &mut generator).unwrap();
        batch
    }

    #[test]
    fn test_render_header_only_for_no_items() {
        assert_eq!(render_csv(&[]), "Código Gerado,Sufixo,Conta,Código Real");
    }

    #[test]
    fn test_render_generated_rows() {
        let batch = generated_batch(&["F:Loja Centro:AA123456789BR", "M"]);
        let csv = render_csv(batch.items());
        assert_eq!(
            csv,
            "Código Gerado,Sufixo,Conta,Código Real\n\
             BR000000000001F,F,Loja Centro,AA123456789BR\n\
             BR000000000002M,M,,"
        );
    }

    #[test]
    fn test_render_ungenerated_rows_leave_code_empty() {
        let batch = Batch::new();
        let csv = render_csv(batch.items());
        assert_eq!(csv.lines().nth(1), Some(",F,,"));
    }

    #[test]
    fn test_fields_with_separators_are_quoted() {
        let batch = generated_batch(&["T:Silva, Souza & Cia:ref \"7\""]);
        let csv = render_csv(batch.items());
        assert_eq!(
            csv.lines().nth(1),
            Some("BR000000000001T,T,\"Silva, Souza & Cia\",\"ref \"\"7\"\"\"")
        );
    }

    #[test]
    fn test_export_file_name_uses_millis() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        assert_eq!(export_file_name(now), "shp-express-1792411200000.csv");
    }

    #[test]
    fn test_write_batch_csv() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("exports");
        let batch = generated_batch(&["F:Loja"]);
        let now = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();

        let path = write_batch_csv(&out, &batch, now).unwrap();
        assert_eq!(path, out.join("shp-express-1700000000123.csv"));
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, render_csv(batch.items()));
    }

    #[test]
    fn test_write_refuses_ungenerated_batch() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_batch_csv(dir.path(), &Batch::new(), Utc::now()).unwrap_err();
        assert!(matches!(err, ExportError::NotGenerated));
    }
}
