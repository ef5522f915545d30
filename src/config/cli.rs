use crate::config::toml_config::TomlConfig;
use crate::config::{AwsSettings, CheckSettings};
use crate::utils::logger::LogFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "queue-smoke")]
#[command(about = "Post-deploy smoke test: checks that the expected SQS queue exists")]
pub struct CliConfig {
    /// First part of the expected queue name
    #[arg(long, env = "NAMESPACE")]
    pub namespace: Option<String>,

    /// Second part of the expected queue name
    #[arg(long, env = "ENV_PREFIX")]
    pub env_prefix: Option<String>,

    /// Third part of the expected queue name
    #[arg(long, env = "REGION")]
    pub region: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Region used by the SQS client (defaults to the AWS provider chain)
    #[arg(long)]
    pub aws_region: Option<String>,

    /// Custom SQS endpoint, e.g. LocalStack
    #[arg(long)]
    pub endpoint_url: Option<String>,

    /// Exit non-zero when the queue is missing or cannot be listed
    #[arg(long)]
    pub strict: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 合併命令列與設定檔，命令列 (含環境變數) 優先
    pub fn into_settings(self, file: Option<TomlConfig>) -> CheckSettings {
        let file = file.unwrap_or_default();
        let file_aws = file.aws.clone().unwrap_or_default();

        CheckSettings {
            namespace: self.namespace.or_else(|| file.namespace().map(str::to_string)),
            env_prefix: self.env_prefix.or_else(|| file.env_prefix().map(str::to_string)),
            region: self.region.or_else(|| file.region().map(str::to_string)),
            aws: AwsSettings {
                region: self.aws_region.or(file_aws.region),
                endpoint_url: self.endpoint_url.or(file_aws.endpoint_url),
            },
            strict: self.strict || file.strict(),
        }
    }
}
