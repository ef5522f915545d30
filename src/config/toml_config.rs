use crate::config::AwsSettings;
use crate::utils::error::{CheckError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub queue: Option<QueueSection>,
    pub aws: Option<AwsSettings>,
    pub check: Option<CheckSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueueSection {
    pub namespace: Option<String>,
    pub env_prefix: Option<String>,
    pub region: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckSection {
    pub strict: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CheckError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CheckError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ENV_PREFIX})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CheckError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn namespace(&self) -> Option<&str> {
        self.queue.as_ref().and_then(|q| q.namespace.as_deref())
    }

    pub fn env_prefix(&self) -> Option<&str> {
        self.queue.as_ref().and_then(|q| q.env_prefix.as_deref())
    }

    pub fn region(&self) -> Option<&str> {
        self.queue.as_ref().and_then(|q| q.region.as_deref())
    }

    pub fn strict(&self) -> bool {
        self.check.as_ref().and_then(|c| c.strict).unwrap_or(false)
    }
}
