use crate::config::toml_config::{DEFAULT_OUTPUT_FILE, DEFAULT_OUTPUT_PATH};
use crate::core::fetch::{DEFAULT_URL, DEFAULT_USER_AGENT};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_name, validate_non_empty_string, validate_path, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

/// Every flag defaults to the built-in target, so a bare invocation
/// scrapes atlasbig.com.tr into ./mahalleler.json.
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "mahalle-scraper")]
#[command(about = "Scrape Istanbul neighborhoods and their districts into a JSON file")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_URL)]
    pub url: String,

    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output_path: String,

    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: String,

    /// Select `<table id=...>` instead of the first table on the page
    #[arg(long)]
    pub table_id: Option<String>,

    /// Load settings from a TOML file instead of the flags above
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines on stderr")]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn source_url(&self) -> &str {
        &self.url
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn table_id(&self) -> Option<&str> {
        self.table_id.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("url", &self.url)?;
        validate_non_empty_string("user_agent", &self.user_agent)?;
        if let Some(id) = &self.table_id {
            validate_non_empty_string("table_id", id)?;
        }
        validate_path("output_path", &self.output_path)?;
        validate_file_name("output_file", &self.output_file)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_uses_fixed_target() {
        let config = CliConfig::try_parse_from(["mahalle-scraper"]).unwrap();

        assert_eq!(config.source_url(), "https://atlasbig.com.tr/istanbulun-mahalleleri");
        assert!(config.user_agent().starts_with("Mozilla/5.0"));
        assert_eq!(config.output_path(), ".");
        assert_eq!(config.output_file(), "mahalleler.json");
        assert!(config.table_id().is_none());
        assert!(config.config.is_none());
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = CliConfig::try_parse_from([
            "mahalle-scraper",
            "--url",
            "http://localhost:8080/list",
            "--table-id",
            "data-table",
            "--output-file",
            "istanbul-neighborhoods.json",
            "-v",
        ])
        .unwrap();

        assert_eq!(config.source_url(), "http://localhost:8080/list");
        assert_eq!(config.table_id(), Some("data-table"));
        assert_eq!(config.output_file(), "istanbul-neighborhoods.json");
        assert!(config.verbose);
    }

    #[test]
    fn test_invalid_flags_fail_validation() {
        let config =
            CliConfig::try_parse_from(["mahalle-scraper", "--url", "ftp://example.com"])
                .unwrap();
        assert!(config.validate().is_err());

        let config =
            CliConfig::try_parse_from(["mahalle-scraper", "--table-id", " "]).unwrap();
        assert!(config.validate().is_err());
    }
}
