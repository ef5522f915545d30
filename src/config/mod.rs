#[cfg(feature = "cli")]
pub mod cli;
pub mod lambda;
pub mod toml_config;

use crate::domain::model::ExpectedQueueName;
use crate::utils::error::Result;
use crate::utils::validation::{validate_aws_region, validate_url, Validate};
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
pub use cli::CliConfig;

/// SDK overrides; anything left unset falls back to the default AWS chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwsSettings {
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
}

impl Validate for AwsSettings {
    fn validate(&self) -> Result<()> {
        if let Some(region) = &self.region {
            validate_aws_region("aws.region", region)?;
        }
        if let Some(endpoint) = &self.endpoint_url {
            validate_url("aws.endpoint_url", endpoint)?;
        }
        Ok(())
    }
}

/// 合併後的檢查設定 (CLI、環境變數、TOML 或 Lambda 事件)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckSettings {
    pub namespace: Option<String>,
    pub env_prefix: Option<String>,
    pub region: Option<String>,
    pub aws: AwsSettings,
    pub strict: bool,
}

impl CheckSettings {
    pub fn expected_name(&self) -> ExpectedQueueName {
        ExpectedQueueName::from_parts(
            self.namespace.as_deref(),
            self.env_prefix.as_deref(),
            self.region.as_deref(),
        )
    }

    /// Names of the parts that will be rendered as the placeholder.
    pub fn missing_parts(&self) -> Vec<&'static str> {
        [
            ("NAMESPACE", &self.namespace),
            ("ENV_PREFIX", &self.env_prefix),
            ("REGION", &self.region),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| name)
        .collect()
    }
}

impl Validate for CheckSettings {
    // 名稱各部分不做驗證，只檢查 SDK 覆蓋設定
    fn validate(&self) -> Result<()> {
        self.aws.validate()
    }
}
