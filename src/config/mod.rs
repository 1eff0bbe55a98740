pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "pincode-catalog")]
#[command(about = "Serves products and delivery pincodes over HTTP")]
pub struct CliConfig {
    /// JSON file with `products` and `delivery_info.pincode_data`
    #[arg(long, default_value = "data_with_images.json")]
    pub data_file: String,

    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, default_value = "8000")]
    pub port: u16,

    #[arg(long, default_value = "static")]
    pub static_dir: String,

    #[arg(long, default_value = "templates")]
    pub templates_dir: String,

    /// Page size used when a request has no `limit`
    #[arg(long, default_value = "10")]
    pub default_limit: usize,

    /// TOML configuration file; replaces the flags above when given
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn data_file(&self) -> &str {
        &self.data_file
    }

    fn static_dir(&self) -> &str {
        &self.static_dir
    }

    fn templates_dir(&self) -> &str {
        &self.templates_dir
    }

    fn default_limit(&self) -> usize {
        self.default_limit
    }

    fn json_logs(&self) -> bool {
        self.json_logs
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("host", &self.host)?;
        validation::validate_range("port", self.port, 1, u16::MAX)?;
        validation::validate_path("data_file", &self.data_file)?;
        validation::validate_path("static_dir", &self.static_dir)?;
        validation::validate_path("templates_dir", &self.templates_dir)?;
        validation::validate_positive_number("default_limit", self.default_limit, 1)?;
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["pincode-catalog"]);
        assert_eq!(config.data_file(), "data_with_images.json");
        assert_eq!(config.port(), 8000);
        assert_eq!(config.default_limit(), 10);
        assert!(config.config.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_default_limit_is_invalid() {
        let config = CliConfig::parse_from(["pincode-catalog", "--default-limit", "0"]);
        assert!(config.validate().is_err());
    }
}
