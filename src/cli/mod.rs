//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for the order-test viewer
//! using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Ordertests - COVID-19 order-test viewer
#[derive(Parser, Debug)]
#[command(name = "ordertests")]
#[command(version, about, long_about = None)]
#[command(author = "Ordertests Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "ordertests.toml", env = "ORDERTESTS_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "ORDERTESTS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch order tests for a date range and print one page
    Fetch(commands::fetch::FetchArgs),

    /// Browse order tests interactively
    Browse(commands::browse::BrowseArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::fetch::OutputFormat;

    #[test]
    fn test_cli_parse_fetch() {
        let cli = Cli::parse_from([
            "ordertests",
            "fetch",
            "--start",
            "2023-01-01",
            "--end",
            "2023-01-07",
        ]);
        assert_eq!(cli.config, "ordertests.toml");
        match cli.command {
            Commands::Fetch(args) => {
                assert_eq!(args.start, "2023-01-01");
                assert_eq!(args.page, 1);
                assert_eq!(args.format, OutputFormat::Text);
                assert!(args.base_url.is_none());
            }
            other => panic!("expected fetch, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_fetch_requires_range() {
        assert!(Cli::try_parse_from(["ordertests", "fetch", "--start", "2023-01-01"]).is_err());
    }

    #[test]
    fn test_cli_parse_fetch_options() {
        let cli = Cli::parse_from([
            "ordertests",
            "fetch",
            "--start",
            "2023-01-01",
            "--end",
            "2023-01-02",
            "--page",
            "3",
            "--format",
            "json",
            "--base-url",
            "http://localhost:8080/orders",
        ]);
        let Commands::Fetch(args) = cli.command else {
            panic!("expected fetch");
        };
        assert_eq!(args.page, 3);
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.base_url.as_deref(), Some("http://localhost:8080/orders"));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["ordertests", "--config", "custom.toml", "browse"]);
        assert_eq!(cli.config, "custom.toml");
        assert!(matches!(cli.command, Commands::Browse(_)));
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["ordertests", "--log-level", "debug", "browse"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["ordertests", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["ordertests", "init", "--with-examples"]);
        let Commands::Init(args) = cli.command else {
            panic!("expected init");
        };
        assert_eq!(args.output, "ordertests.toml");
        assert!(args.with_examples);
    }
}
