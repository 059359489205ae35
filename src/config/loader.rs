//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ViewerConfig;
use crate::domain::errors::ViewerError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into ViewerConfig
/// 4. Applies environment variable overrides (ORDERTESTS_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, a referenced
/// environment variable is unset, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use ordertests::config::loader::load_config;
///
/// let config = load_config("ordertests.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ViewerConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ViewerError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ViewerError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: ViewerConfig = toml::from_str(&contents)
        .map_err(|e| ViewerError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        ViewerError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Loads configuration, falling back to defaults when the file is absent
///
/// Environment overrides still apply to the defaults. A file that exists
/// but fails to load is still an error.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<ViewerConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(
        path = %path.display(),
        "Configuration file not found, using defaults"
    );

    let mut config = ViewerConfig::default();
    apply_env_overrides(&mut config);
    config.validate().map_err(|e| {
        ViewerError::Configuration(format!("Configuration validation failed: {e}"))
    })?;
    Ok(config)
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("environment variable pattern is valid")
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = env_var_pattern();
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ViewerError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using ORDERTESTS_* prefix
///
/// Environment variables follow the pattern: ORDERTESTS_<SECTION>_<KEY>
/// For example: ORDERTESTS_ENDPOINT_BASE_URL
fn apply_env_overrides(config: &mut ViewerConfig) {
    if let Ok(val) = std::env::var("ORDERTESTS_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("ORDERTESTS_ENDPOINT_BASE_URL") {
        config.endpoint.base_url = val;
    }
    if let Ok(val) = std::env::var("ORDERTESTS_ENDPOINT_TIMEOUT_SECONDS") {
        if let Ok(secs) = val.parse() {
            config.endpoint.timeout_seconds = Some(secs);
        }
    }

    if let Ok(val) = std::env::var("ORDERTESTS_PAGINATION_RESET_ON_NEW_DATA") {
        config.pagination.reset_on_new_data = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("ORDERTESTS_PAGINATION_MARGIN_PAGES") {
        if let Ok(margin) = val.parse() {
            config.pagination.margin_pages = margin;
        }
    }
    if let Ok(val) = std::env::var("ORDERTESTS_PAGINATION_PAGE_RANGE") {
        if let Ok(range) = val.parse() {
            config.pagination.page_range = range;
        }
    }

    if let Ok(val) = std::env::var("ORDERTESTS_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("ORDERTESTS_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("ORDERTESTS_LOADER_TEST_HOST", "orders.example.com");
        let input = "base_url = \"https://${ORDERTESTS_LOADER_TEST_HOST}/tests\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "base_url = \"https://orders.example.com/tests\"\n");
        std::env::remove_var("ORDERTESTS_LOADER_TEST_HOST");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("ORDERTESTS_LOADER_MISSING");
        let input = "base_url = \"${ORDERTESTS_LOADER_MISSING}\"";
        let result = substitute_env_vars(input);
        assert!(result.is_err());
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        std::env::remove_var("ORDERTESTS_LOADER_COMMENTED");
        let input = "# base_url = \"${ORDERTESTS_LOADER_COMMENTED}\"";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${ORDERTESTS_LOADER_COMMENTED}"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent-ordertests.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_or_default_missing_file() {
        let config = load_config_or_default("nonexistent-ordertests.toml").unwrap();
        assert_eq!(config.pagination.page_range, 5);
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "debug"

[endpoint]
base_url = "https://orders.example.com/covid-19/minimal"
timeout_seconds = 15

[pagination]
reset_on_new_data = true
margin_pages = 1
page_range = 3
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(
            config.endpoint.base_url,
            "https://orders.example.com/covid-19/minimal"
        );
        assert_eq!(config.endpoint.timeout_seconds, Some(15));
        assert!(config.pagination.reset_on_new_data);
        assert_eq!(config.pagination.margin_pages, 1);
        assert_eq!(config.pagination.page_range, 3);
    }

    #[test]
    fn test_load_config_invalid_values() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[endpoint]\nbase_url = \"not-a-url\"\n")
            .unwrap();
        temp_file.flush().unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("validation failed"));
    }
}
