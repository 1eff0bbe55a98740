use crate::core::ConfigProvider;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub data: DataConfig,
    pub http: Option<HttpConfig>,
    pub pagination: Option<PaginationConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub static_dir: Option<String>,
    pub templates_dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    pub default_limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// "compact" (default) or "json"
    pub format: Option<String>,
}

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_TEMPLATES_DIR: &str = "templates";
const DEFAULT_LIMIT: usize = 10;

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CatalogError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_FILE})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("server.host", self.host())?;
        validation::validate_range("server.port", self.port(), 1, u16::MAX)?;
        let data_path = self.data.path.as_deref().ok_or_else(|| {
            CatalogError::MissingConfigError {
                field: "data.path".to_string(),
            }
        })?;
        validation::validate_path("data.path", data_path)?;
        validation::validate_path("http.static_dir", self.static_dir())?;
        validation::validate_path("http.templates_dir", self.templates_dir())?;
        validation::validate_positive_number("pagination.default_limit", self.default_limit(), 1)?;

        if let Some(format) = self.logging.as_ref().and_then(|l| l.format.as_deref()) {
            if !matches!(format, "compact" | "json") {
                return Err(CatalogError::InvalidConfigValueError {
                    field: "logging.format".to_string(),
                    value: format.to_string(),
                    reason: "Valid formats: compact, json".to_string(),
                });
            }
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn host(&self) -> &str {
        self.server.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    fn port(&self) -> u16 {
        self.server.port.unwrap_or(DEFAULT_PORT)
    }

    /// Empty until `data.path` is set; [`validate_config`](TomlConfig::validate_config) rejects that.
    fn data_file(&self) -> &str {
        self.data.path.as_deref().unwrap_or_default()
    }

    fn static_dir(&self) -> &str {
        self.http
            .as_ref()
            .and_then(|h| h.static_dir.as_deref())
            .unwrap_or(DEFAULT_STATIC_DIR)
    }

    fn templates_dir(&self) -> &str {
        self.http
            .as_ref()
            .and_then(|h| h.templates_dir.as_deref())
            .unwrap_or(DEFAULT_TEMPLATES_DIR)
    }

    fn default_limit(&self) -> usize {
        self.pagination
            .as_ref()
            .and_then(|p| p.default_limit)
            .unwrap_or(DEFAULT_LIMIT)
    }

    fn json_logs(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .map(|f| f == "json")
            .unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
