//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the viewer configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates after env overrides are applied
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Endpoint: {}", config.endpoint.base_url);
        match config.endpoint.timeout_seconds {
            Some(seconds) => println!("  Request Timeout: {seconds}s"),
            None => println!("  Request Timeout: none"),
        }
        println!(
            "  Reset Page On New Data: {}",
            config.pagination.reset_on_new_data
        );
        println!(
            "  Page Controls: {} margin, {} in range",
            config.pagination.margin_pages, config.pagination.page_range
        );
        if config.logging.local_enabled {
            println!(
                "  File Logging: {} ({})",
                config.logging.local_path, config.logging.local_rotation
            );
        } else {
            println!("  File Logging: disabled");
        }
        println!();

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_validate_missing_file() {
        let args = ValidateArgs {};
        let code = args.execute("definitely-missing-ordertests.toml").await.unwrap();
        assert_eq!(code, 2);
    }

    #[tokio::test]
    async fn test_validate_rejects_zero_page_range() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[pagination]\npage_range = 0").unwrap();

        let args = ValidateArgs {};
        let code = args.execute(file.path().to_str().unwrap()).await.unwrap();
        assert_eq!(code, 2);
    }

    #[tokio::test]
    async fn test_validate_accepts_minimal_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[endpoint]\nbase_url = \"http://localhost:8080/orders\"").unwrap();

        let args = ValidateArgs {};
        let code = args.execute(file.path().to_str().unwrap()).await.unwrap();
        assert_eq!(code, 0);
    }
}
