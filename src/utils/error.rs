use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("SQS request failed: {message}")]
    Provider {
        code: Option<String>,
        message: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CheckError {
    /// 依錯誤類型給出排除建議
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CheckError::Provider { code: Some(code), .. }
                if code.contains("AccessDenied") || code.contains("Unauthorized") =>
            {
                "Grant sqs:ListQueues to the role running the post-deploy job"
            }
            CheckError::Provider { .. } => {
                "Check AWS credentials, region and network access to the SQS endpoint"
            }
            CheckError::IoError(_) => "Make sure the file exists and is readable",
            CheckError::ConfigError { .. } => "Make sure the config file is valid TOML",
            CheckError::InvalidConfigValueError { .. } => {
                "Fix the highlighted option or drop it to use the SDK default"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_display_and_suggestion() {
        let err = CheckError::Provider {
            code: Some("AccessDenied".to_string()),
            message: "not authorized to perform sqs:ListQueues".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "SQS request failed: not authorized to perform sqs:ListQueues"
        );
        assert!(err.recovery_suggestion().contains("sqs:ListQueues"));

        let err = CheckError::Provider {
            code: None,
            message: "dispatch failure".to_string(),
        };
        assert!(err.recovery_suggestion().contains("credentials"));
    }
}
