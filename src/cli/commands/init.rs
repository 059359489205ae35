//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "ordertests.toml")]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing order-test viewer configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: ordertests validate-config");
                println!(
                    "  3. Fetch a week: ordertests fetch --start 2023-01-01 --end 2023-01-07"
                );
                println!("  4. Or browse interactively: ordertests browse");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    fn generate_minimal_config() -> String {
        r#"# Order-test viewer configuration

[application]
log_level = "info"

[endpoint]
base_url = "https://biostatistics.salud.pr.gov/orders/tests/covid-19/minimal"

[pagination]
reset_on_new_data = false

[logging]
local_enabled = false
"#
        .to_string()
    }

    fn generate_config_with_examples() -> String {
        r#"# Order-test viewer configuration
#
# Values may reference environment variables as ${VAR_NAME}.
# Every key can also be overridden with ORDERTESTS_<SECTION>_<KEY>,
# e.g. ORDERTESTS_ENDPOINT_BASE_URL.

[application]
# trace | debug | info | warn | error
log_level = "info"

[endpoint]
# Queried with sampleCollectedStartDate / sampleCollectedEndDate
base_url = "https://biostatistics.salud.pr.gov/orders/tests/covid-19/minimal"
# Request timeout in seconds; omit to wait indefinitely
timeout_seconds = 30

[pagination]
# Jump back to the first page whenever a new result set arrives
reset_on_new_data = false
# Pages always shown at each end of the page controls
margin_pages = 2
# Pages shown around the current page
page_range = 5

[logging]
# JSON log files in addition to console output
local_enabled = false
local_path = "logs"
# daily | hourly
local_rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewerConfig;
    use tempfile::TempDir;

    #[test]
    fn test_generate_minimal_config_parses() {
        let config: ViewerConfig = toml::from_str(&InitArgs::generate_minimal_config()).unwrap();
        assert!(config.validate().is_ok());
        assert!(!config.pagination.reset_on_new_data);
    }

    #[test]
    fn test_generate_config_with_examples_parses() {
        let content = InitArgs::generate_config_with_examples();
        assert!(content.contains("ORDERTESTS_ENDPOINT_BASE_URL"));

        let config: ViewerConfig = toml::from_str(&content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.endpoint.timeout_seconds, Some(30));
        assert_eq!(config.pagination.page_range, 5);
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("ordertests.toml");
        fs::write(&output, "existing").unwrap();

        let args = InitArgs {
            output: output.to_string_lossy().into_owned(),
            with_examples: false,
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 2);
        assert_eq!(fs::read_to_string(&output).unwrap(), "existing");

        let args = InitArgs { force: true, ..args };
        assert_eq!(args.execute().await.unwrap(), 0);
        assert!(fs::read_to_string(&output).unwrap().contains("[endpoint]"));
    }
}
