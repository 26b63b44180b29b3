use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use shpcode::BatchRow;

#[derive(Parser, Debug)]
#[command(name = "shpcode")]
#[command(version, about = "Generate and track SHP Express parcel codes")]
pub struct Cli {
    /// JSON config file
    #[arg(long, global = true, env = "SHPCODE_CONFIG")]
    pub config: Option<PathBuf>,

    /// SQLite database file (overrides config and SHPCODE_DATABASE)
    #[arg(long, global = true)]
    pub database: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a batch of codes and store them
    Generate(GenerateArgs),
    /// Look up a stored code
    Track(TrackArgs),
    /// Check codes against the tracking code format
    Validate(ValidateArgs),
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// One row per flag: CATEGORY[:ACCOUNT[:REAL_CODE]], e.g. `T:Loja Centro:AA123456789BR`
    #[arg(short, long = "item", value_name = "ROW", required = true)]
    pub items: Vec<BatchRow>,

    /// Write the generated batch as CSV into the export directory
    #[arg(long)]
    pub export: bool,

    /// Export directory (overrides config and SHPCODE_EXPORT_DIR)
    #[arg(long, value_name = "DIR", requires = "export")]
    pub export_dir: Option<PathBuf>,

    /// Print stored records as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct TrackArgs {
    /// Tracking code; surrounding whitespace and case are normalized
    pub code: String,

    /// Print the record as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[arg(required = true)]
    pub codes: Vec<String>,

    /// Trim and upper-case each code before checking it
    #[arg(long)]
    pub normalize: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use shpcode::Category;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_rows() {
        let cli = Cli::try_parse_from([
            "shpcode",
            "generate",
            "--item",
            "F",
            "-i",
            "t:Loja Centro:AA123456789BR",
            "--export",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.items.len(), 2);
                assert_eq!(args.items[1].category, Category::T);
                assert_eq!(args.items[1].account, "Loja Centro");
                assert!(args.export);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_generate_rejects_unknown_category() {
        assert!(Cli::try_parse_from(["shpcode", "generate", "--item", "X"]).is_err());
    }

    #[test]
    fn test_generate_requires_items() {
        assert!(Cli::try_parse_from(["shpcode", "generate"]).is_err());
    }

    #[test]
    fn test_export_dir_requires_export() {
        assert!(
            Cli::try_parse_from(["shpcode", "generate", "-i", "F", "--export-dir", "/tmp"])
                .is_err()
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["shpcode", "track", "BR000000000042F", "-vv", "--database", "x.db"])
                .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.database, Some(PathBuf::from("x.db")));
    }
}
