//! CLI definitions for dsreg.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use dsreg_protocols::RegistryTable;

/// dsreg CLI.
#[derive(Parser)]
#[command(name = "dsreg")]
#[command(about = "Inspect the dataset builder registry")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (defaults to <config dir>/dsreg/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List registered builders (default)
    List {
        /// Table to list
        #[arg(long, value_enum, default_value_t = TableFilter::Concrete)]
        table: TableFilter,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Show detailed info about a builder
    Info {
        /// Normalized builder name
        name: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Verify that every declared builder registers without collisions
    Check,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum TableFilter {
    Concrete,
    Abstract,
    InDevelopment,
    All,
}

impl TableFilter {
    /// Tables selected by this filter.
    pub fn tables(self) -> Vec<RegistryTable> {
        match self {
            TableFilter::Concrete => vec![RegistryTable::Concrete],
            TableFilter::Abstract => vec![RegistryTable::Abstract],
            TableFilter::InDevelopment => vec![RegistryTable::InDevelopment],
            TableFilter::All => RegistryTable::ALL.to_vec(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Table,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_list() {
        let cli = Cli::parse_from(["dsreg", "list", "--table", "in-development", "--format", "json"]);
        match cli.command {
            Some(Commands::List { table, format }) => {
                assert_eq!(table, TableFilter::InDevelopment);
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn test_parse_info_with_config() {
        let cli = Cli::parse_from(["dsreg", "info", "dummy_mnist", "--config", "/tmp/dsreg.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/dsreg.toml")));
        assert!(matches!(cli.command, Some(Commands::Info { ref name, .. }) if name == "dummy_mnist"));
    }

    #[test]
    fn test_no_command() {
        let cli = Cli::parse_from(["dsreg"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_table_filter_all() {
        assert_eq!(TableFilter::All.tables().len(), 3);
        assert_eq!(TableFilter::Abstract.tables(), vec![RegistryTable::Abstract]);
    }
}
