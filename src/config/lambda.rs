use crate::config::{AwsSettings, CheckSettings};
use serde::{Deserialize, Serialize};
use std::env;

/// Invocation payload; any field present overrides the function's environment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckRequest {
    pub namespace: Option<String>,
    pub env_prefix: Option<String>,
    pub region: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub settings: CheckSettings,
}

impl LambdaConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let strict = lookup("STRICT_CHECK")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            settings: CheckSettings {
                namespace: lookup("NAMESPACE"),
                env_prefix: lookup("ENV_PREFIX"),
                region: lookup("REGION"),
                aws: AwsSettings {
                    // Lambda 已提供 AWS_REGION，SDK 會自行讀取
                    region: None,
                    endpoint_url: lookup("SQS_ENDPOINT_URL"),
                },
                strict,
            },
        }
    }

    pub fn with_request(mut self, request: CheckRequest) -> CheckSettings {
        if request.namespace.is_some() {
            self.settings.namespace = request.namespace;
        }
        if request.env_prefix.is_some() {
            self.settings.env_prefix = request.env_prefix;
        }
        if request.region.is_some() {
            self.settings.region = request.region;
        }
        self.settings
    }
}
