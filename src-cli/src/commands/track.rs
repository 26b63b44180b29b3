use std::io::Write;

use shpcode::display::RecordView;
use shpcode::{search, Config, RecordStore, SearchOutcome};

use super::{EXIT_BAD_QUERY, EXIT_NOT_FOUND, EXIT_OK};
use crate::cli::TrackArgs;

pub fn track(
    args: &TrackArgs,
    config: &Config,
    store: &dyn RecordStore,
    out: &mut dyn Write,
) -> anyhow::Result<u8> {
    let outcome = search(store, &args.code)?;

    match outcome {
        SearchOutcome::Found(record) => {
            if args.json {
                serde_json::to_writer_pretty(&mut *out, &record)?;
                writeln!(out)?;
            } else {
                let offset = config.display_offset()?;
                writeln!(out, "{}", RecordView::new(&record, offset))?;
            }
            Ok(EXIT_OK)
        }
        SearchOutcome::NotFound { code } => {
            writeln!(out, "Código {} não encontrado", code)?;
            Ok(EXIT_NOT_FOUND)
        }
        SearchOutcome::Malformed { query } => {
            writeln!(
                out,
                "'{}' não é um código de rastreio válido (ex: BR123456789012F)",
                query
            )?;
            Ok(EXIT_BAD_QUERY)
        }
        SearchOutcome::Blank => {
            writeln!(out, "Digite um código de rastreio")?;
            Ok(EXIT_BAD_QUERY)
        }
    }
}
