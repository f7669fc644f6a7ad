use std::path::PathBuf;

use clap::{Parser, Subcommand};
use langtable::formats::CatalogFormat;
use langtable_cli::{
    ExportOptions, ImportOptions, SortOrder, load_config, parse_delimiter, parse_format,
    run_export_command, run_import_command,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML configuration file (defaults to ./langtable.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Export catalogs to a CSV table with one column per locale.
    Export {
        /// Locales to export, comma separated (e.g. en,fr)
        #[arg(short, long, value_delimiter = ',', required = true)]
        locales: Vec<String>,

        /// The CSV file to write (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Catalog directory, overriding the configuration
        #[arg(long)]
        lang_path: Option<PathBuf>,

        /// CSV field delimiter
        #[arg(short, long, value_parser = parse_delimiter, default_value = ";")]
        delimiter: u8,

        /// Sort keys before exporting
        #[arg(long, value_enum)]
        sort: Option<SortOrder>,
    },

    /// Import a CSV table and write it back as catalogs.
    Import {
        /// The CSV file to read
        #[arg(short, long)]
        input: PathBuf,

        /// Locales to import, comma separated (e.g. nl,es)
        #[arg(short, long, value_delimiter = ',', required = true)]
        locales: Vec<String>,

        /// Catalog directory, overriding the configuration
        #[arg(long)]
        lang_path: Option<PathBuf>,

        /// Format of the written namespace files, overriding the configuration
        #[arg(short, long, value_parser = parse_format)]
        format: Option<CatalogFormat>,

        /// CSV field delimiter
        #[arg(short, long, value_parser = parse_delimiter, default_value = ";")]
        delimiter: u8,

        /// Number of rows preceding the header row
        #[arg(long, default_value_t = 0)]
        header_offset: usize,

        /// Keep values already in the catalog instead of overwriting them
        #[arg(long)]
        keep_existing: bool,

        /// Load the existing catalog first so keys missing from the CSV are kept
        #[arg(long)]
        merge: bool,

        /// Sort keys before writing
        #[arg(long, value_enum)]
        sort: Option<SortOrder>,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;

    match args.commands {
        Commands::Export {
            locales,
            output,
            lang_path,
            delimiter,
            sort,
        } => {
            let config = match lang_path {
                Some(path) => config.with_lang_path(path),
                None => config,
            };
            let options = ExportOptions {
                locales,
                output,
                delimiter,
                sort,
            };
            run_export_command(config, &options)
        }
        Commands::Import {
            input,
            locales,
            lang_path,
            format,
            delimiter,
            header_offset,
            keep_existing,
            merge,
            sort,
        } => {
            let mut config = match lang_path {
                Some(path) => config.with_lang_path(path),
                None => config,
            };
            if let Some(format) = format {
                config = config.with_format(format);
            }
            let options = ImportOptions {
                input,
                locales,
                delimiter,
                header_offset,
                keep_existing,
                merge,
                sort,
            };
            run_import_command(config, &options)
        }
    }
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
