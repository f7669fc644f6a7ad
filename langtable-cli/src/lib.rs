//! Command implementations behind the `langtable` binary, exposed for testing.

pub mod config;
pub mod export;
pub mod import;

pub use config::{SortOrder, load_config, parse_delimiter, parse_format, parse_locales};
pub use export::{ExportOptions, run_export_command};
pub use import::{ImportOptions, run_import_command};
