use std::io::Write;

use chrono::Utc;
use shpcode::code::ThreadCodeGenerator;
use shpcode::export::write_batch_csv;
use shpcode::{Batch, Config, RecordStore};

use super::EXIT_OK;
use crate::cli::GenerateArgs;

pub fn generate(
    args: &GenerateArgs,
    config: &Config,
    store: &dyn RecordStore,
    out: &mut dyn Write,
) -> anyhow::Result<u8> {
    let mut batch = Batch::from_rows(args.items.clone())?;
    let mut generator = ThreadCodeGenerator::default();

    let stored = batch.generate(store, &mut generator)?;

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &stored)?;
        writeln!(out)?;
    } else {
        for (index, item) in batch.items().iter().enumerate() {
            let code = item
                .generated_code
                .as_ref()
                .map(|c| c.as_str())
                .unwrap_or_default();
            writeln!(
                out,
                "#{:<3} {}  {}  {}  {}",
                index + 1,
                code,
                item.category,
                item.account,
                item.real_tracking_code
            )?;
        }
    }

    if args.export {
        let directory = args
            .export_dir
            .clone()
            .unwrap_or_else(|| config.export_directory.clone());
        let path = write_batch_csv(&directory, &batch, Utc::now())?;
        writeln!(out, "Exported {}", path.display())?;
    }

    Ok(EXIT_OK)
}

#[cfg(test)]
mod tests {
    use shpcode::db::tracking_repo;
    use shpcode::Database;

    use super::*;

    fn args(items: &[&str], export: bool) -> GenerateArgs {
        GenerateArgs {
            items: items.iter().map(|s| s.parse().unwrap()).collect(),
            export,
            export_dir: None,
            json: false,
        }
    }

    #[test]
    fn test_generate_prints_one_line_per_row() {
        let db = Database::open_in_memory().unwrap();
        let mut out = Vec::new();
        generate(&args(&["F:Loja", "M"], false), &Config::default(), &db, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("#1"));
        assert!(lines[0].contains("Loja"));
        assert_eq!(tracking_repo::count(&db).unwrap(), 2);
    }

    #[test]
    fn test_generate_exports_csv() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open_in_memory().unwrap();
        let config = Config {
            export_directory: dir.path().to_path_buf(),
            ..Config::default()
        };
        let mut out = Vec::new();
        generate(&args(&["T"], true), &config, &db, &mut out).unwrap();

        let exported: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(exported.len(), 1);
        assert!(String::from_utf8(out).unwrap().contains("Exported"));
    }

    #[test]
    fn test_generate_json_output() {
        let db = Database::open_in_memory().unwrap();
        let mut generate_args = args(&["F"], false);
        generate_args.json = true;
        let mut out = Vec::new();
        generate(&generate_args, &Config::default(), &db, &mut out).unwrap();

        let records: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(records.as_array().unwrap().len(), 1);
        assert_eq!(records[0]["status"], "created");
    }
}
