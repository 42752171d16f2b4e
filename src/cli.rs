use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Hotel Explorer - search hotels by city code and compare them
#[derive(Parser)]
#[command(name = "hotel-explorer")]
#[command(about = "A terminal dashboard for searching and comparing hotels")]
#[command(version)]
pub struct Cli {
    /// Path to a JSON configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Hotel catalog file (overrides the config file)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Write logs to this file (TUI mode defaults to a file in the temp dir)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a city without starting the TUI
    Search {
        /// Three-letter city code (e.g. NYC)
        city: String,
    },
    /// Pick hotels for comparison and print the chart data
    Compare {
        /// Three-letter city code (e.g. NYC)
        city: String,
        /// Hotel ids to toggle into the comparison, in order
        #[arg(required = true)]
        hotel_ids: Vec<String>,
    },
    /// Validate a hotel catalog file
    Validate {
        /// Path to the catalog file to validate
        catalog: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_no_args() {
        // Running with no args should succeed (defaults to TUI mode)
        let cli = Cli::try_parse_from(["hotel-explorer"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_search_command() {
        let cli = Cli::try_parse_from(["hotel-explorer", "search", "nyc"]).unwrap();
        match cli.command {
            Some(Commands::Search { city }) => assert_eq!(city, "nyc"),
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_cli_compare_requires_ids() {
        assert!(Cli::try_parse_from(["hotel-explorer", "compare", "NYC"]).is_err());

        let cli = Cli::try_parse_from(["hotel-explorer", "compare", "NYC", "A", "B"]).unwrap();
        match cli.command {
            Some(Commands::Compare { city, hotel_ids }) => {
                assert_eq!(city, "NYC");
                assert_eq!(hotel_ids, vec!["A", "B"]);
            }
            _ => panic!("Expected Compare command"),
        }
    }

    #[test]
    fn test_cli_validate_command() {
        let cli =
            Cli::try_parse_from(["hotel-explorer", "validate", "/path/to/catalog.json"]).unwrap();
        match cli.command {
            Some(Commands::Validate { catalog }) => {
                assert_eq!(catalog.to_str().unwrap(), "/path/to/catalog.json");
            }
            _ => panic!("Expected Validate command"),
        }
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "hotel-explorer",
            "search",
            "LON",
            "--catalog",
            "hotels.json",
        ])
        .unwrap();
        assert_eq!(cli.catalog.unwrap().to_str().unwrap(), "hotels.json");
    }
}
